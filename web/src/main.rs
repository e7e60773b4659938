use dioxus::prelude::*;

mod views;

use types::{CurrentUser, UserType, nav};
use ui::IconGlyph;
use views::{
    Agents, Analytics, Bookings, Dashboard, Hotels, Inquiries, NewProperty, NewUser, Properties,
    Reports, Settings, Users,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/users")]
        Users {},
        #[route("/dashboard/users/new")]
        NewUser {},
        #[route("/dashboard/properties")]
        Properties {},
        #[route("/dashboard/properties/new")]
        NewProperty {},
        #[route("/dashboard/hotels")]
        Hotels {},
        #[route("/dashboard/agents")]
        Agents {},
        #[route("/dashboard/bookings")]
        Bookings {},
        #[route("/dashboard/inquiries")]
        Inquiries {},
        #[route("/dashboard/analytics")]
        Analytics {},
        #[route("/dashboard/reports")]
        Reports {},
        #[route("/dashboard/settings")]
        Settings {},
}

impl Route {
    /// Resolve an in-app path such as `/dashboard/reports`.
    pub fn from_path(path: &str) -> Option<Self> {
        path.parse().ok()
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move { Ok(dioxus::server::router(App).merge(server::init())) });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Shiats3 Dashboard" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let class = if current_route == to { "nav-link active" } else { "nav-link" };

    rsx! {
        Link {
            to,
            class,
            {children}
        }
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError {
                message, details, ..
            } => {
                let chain = details
                    .as_ref()
                    .and_then(|d| d.get("chain"))
                    .and_then(|c| c.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|v| v.as_str().map(String::from))
                            .collect()
                    })
                    .unwrap_or_else(|| vec![message.clone()]);
                Self {
                    message: message.clone(),
                    chain,
                }
            }
            other => Self {
                message: other.to_string(),
                chain: vec![other.to_string()],
            },
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set_server_error(&mut self, err: &ServerFnError) {
        tracing::warn!(error = %err, "server function failed");
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

/// Whoever is looking at the dashboard, if known.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewer(pub Option<CurrentUser>);

impl Viewer {
    /// Without a known user every screen is shown, as for an admin.
    pub fn user_type(&self) -> UserType {
        self.0.as_ref().map(|u| u.user_type).unwrap_or_default()
    }
}

pub fn use_viewer() -> Viewer {
    use_context::<Viewer>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_error();
    let error = error_state.0.read();

    if let Some(err) = error.as_ref() {
        let has_chain = err.chain.len() > 1;

        rsx! {
            div { class: "error-banner",
                div { class: "error-banner-content",
                    div { class: "error-banner-header",
                        span { class: "error-banner-message", "{err.message}" }
                        button {
                            class: "error-banner-close",
                            onclick: move |_| error_state.clear(),
                            "×"
                        }
                    }
                    if has_chain {
                        ol { class: "error-chain-list",
                            for (i, msg) in err.chain.iter().enumerate() {
                                li { key: "{i}", class: "error-chain-item", "{msg}" }
                            }
                        }
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
fn DashboardLayout() -> Element {
    use_context_provider(|| ErrorState(Signal::new(None)));
    let user = use_server_future(api::get_current_user)?;

    let viewer = match &*user.read() {
        Some(Ok(user)) => Viewer(user.clone()),
        Some(Err(error)) => {
            tracing::warn!(%error, "could not load current user");
            Viewer(None)
        }
        None => Viewer(None),
    };
    let viewer = use_context_provider(|| viewer);

    let current_route: Route = use_route();
    let user_type = viewer.user_type();
    let nav_links: Vec<_> = nav::nav_items_for(user_type)
        .filter_map(|item| Route::from_path(item.path).map(|route| (item, route)))
        .collect();
    let title = nav::page_title(user_type, &current_route.to_string());
    let display_name = viewer
        .0
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let initial = display_name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    rsx! {
        div { class: "app-layout",
            aside { class: "sidebar",
                div { class: "sidebar-header",
                    Link { to: Route::Dashboard {}, class: "sidebar-logo",
                        IconGlyph { icon: types::Icon::Building, class: "logo-icon" }
                        span { "Shiats3" }
                    }
                }
                nav { class: "sidebar-nav",
                    for (item, route) in nav_links {
                        NavLink { key: "{item.path}", to: route,
                            IconGlyph { icon: item.icon, class: "nav-icon" }
                            span { class: "nav-label", "{item.label}" }
                        }
                    }
                }
                div { class: "sidebar-footer",
                    div { class: "sidebar-user",
                        div { class: "sidebar-avatar", "{initial}" }
                        div { class: "sidebar-user-name", "{display_name}" }
                    }
                }
            }
            main { class: "main-content",
                header { class: "page-header",
                    h1 { class: "page-title", "{title}" }
                }
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use types::QuickAction;

    use super::*;

    #[test]
    fn quick_action_paths_are_routes() {
        let routes: Vec<_> = QuickAction::admin_defaults()
            .iter()
            .map(|action| Route::from_path(&action.path))
            .collect();
        assert_eq!(
            routes,
            [
                Some(Route::NewUser {}),
                Some(Route::NewProperty {}),
                Some(Route::Reports {}),
                Some(Route::Bookings {}),
            ]
        );
    }

    #[test]
    fn nav_paths_are_routes() {
        for item in nav::NAV_ITEMS {
            let route = Route::from_path(item.path);
            assert!(route.is_some(), "{} is not routable", item.path);
            assert_eq!(route.unwrap().to_string(), item.path);
        }
    }

    #[test]
    fn unknown_path_is_not_a_route() {
        assert_eq!(Route::from_path("/dashboard/nowhere"), None);
    }

    #[test]
    fn viewer_without_user_is_admin() {
        assert_eq!(Viewer(None).user_type(), UserType::Admin);
        let agent = CurrentUser {
            name: None,
            user_type: UserType::Agent,
        };
        assert_eq!(Viewer(Some(agent)).user_type(), UserType::Agent);
    }
}
