use dioxus::prelude::*;
use types::{CurrentUser, DashboardSummary, QuickAction, greeting_name};
use ui::{ActivityFeed, IconGlyph, StatCard};

use crate::Route;

pub const ACTIVITY_FEED_TITLE: &str = "Recent Activities";
pub const ACTIVITY_FEED_LIMIT: usize = 5;

fn welcome_message(user: Option<&CurrentUser>) -> String {
    format!("Welcome back, {}! 👋", greeting_name(user))
}

/// The admin landing screen. Renders only what it is given.
#[component]
pub fn AdminDashboard(
    #[props(!optional)] user: Option<CurrentUser>,
    summary: DashboardSummary,
) -> Element {
    let welcome = welcome_message(user.as_ref());
    let quick_actions: Vec<_> = QuickAction::admin_defaults()
        .into_iter()
        .filter_map(|action| {
            let route = Route::from_path(&action.path);
            if route.is_none() {
                tracing::warn!(path = %action.path, "quick action has no matching route");
            }
            route.map(|route| (action, route))
        })
        .collect();

    rsx! {
        div { class: "dashboard-container",
            header { class: "dashboard-header",
                div {
                    h1 { class: "welcome-message", "{welcome}" }
                    p { class: "welcome-subtitle",
                        "Here's what's happening with your platform today."
                    }
                }
                div { class: "header-actions",
                    Link { to: Route::NewUser {}, class: "primary-button", "+ Add New" }
                }
            }

            div { class: "stats-grid",
                for stat in summary.stats.iter() {
                    StatCard {
                        key: "{stat.title}",
                        title: stat.title.clone(),
                        value: stat.value.clone(),
                        change: stat.change,
                        icon: stat.icon,
                        color: stat.color,
                    }
                }
            }

            div { class: "dashboard-columns",
                div { class: "left-column",
                    ActivityFeed {
                        activities: summary.activities.clone(),
                        title: ACTIVITY_FEED_TITLE,
                        limit: ACTIVITY_FEED_LIMIT,
                    }
                }
                div { class: "right-column",
                    div { class: "quick-actions",
                        h3 { class: "section-title", "Quick Actions" }
                        div { class: "actions-grid",
                            for (action, route) in quick_actions {
                                Link { key: "{action.path}", to: route, class: "action-button",
                                    IconGlyph { icon: action.icon, class: "action-icon" }
                                    span { "{action.title}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
