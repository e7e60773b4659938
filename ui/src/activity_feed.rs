use dioxus::prelude::*;
use jiff::tz::TimeZone;
use types::{Activity, ActivityAction, Icon, format::activity_time};

use crate::IconGlyph;

/// The viewer's time zone, or UTC when it can't be determined.
pub fn viewer_time_zone() -> TimeZone {
    TimeZone::try_system().unwrap_or(TimeZone::UTC)
}

/// A titled list of recent activities, showing at most `limit` of them.
#[component]
pub fn ActivityFeed(
    activities: Vec<Activity>,
    #[props(into, default = "Recent Activities".to_string())] title: String,
    #[props(default = 5)] limit: usize,
) -> Element {
    if activities.is_empty() {
        return rsx! {
            div { class: "activity-feed",
                div { class: "activity-feed-header",
                    h3 { class: "activity-feed-title", "{title}" }
                }
                div { class: "activity-feed-empty",
                    IconGlyph { icon: Icon::Bell, class: "empty-icon" }
                    p { "No recent activities" }
                }
            }
        };
    }

    let tz = viewer_time_zone();

    rsx! {
        div { class: "activity-feed",
            div { class: "activity-feed-header",
                h3 { class: "activity-feed-title", "{title}" }
                button { class: "view-all-btn", "View All" }
            }
            div { class: "activities-list",
                for activity in activities.iter().take(limit) {
                    div { key: "{activity.id}", class: "activity-item",
                        div { class: "activity-icon",
                            IconGlyph { icon: activity.kind.icon(), class: activity.kind.class() }
                        }
                        div { class: "activity-content",
                            p { class: "activity-text", "{activity.message}" }
                            div { class: "activity-meta",
                                span { class: "activity-time",
                                    IconGlyph { icon: Icon::CalendarAlt, class: "time-icon" }
                                    {activity_time(activity.timestamp, &tz)}
                                }
                                if let Some(action) = &activity.action {
                                    ActionButton { action: action.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Links to `path` when there is one; otherwise an inert button.
#[component]
fn ActionButton(action: ActivityAction) -> Element {
    let style = action.style.class();
    let class = format!("activity-action {style}");

    match &action.path {
        Some(path) => rsx! {
            a { class, href: "{path}", "{action.label}" }
        },
        None => rsx! {
            button { class, disabled: true, "{action.label}" }
        },
    }
}
