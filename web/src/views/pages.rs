//! Screens the dashboard links to that have no content yet.

use dioxus::prelude::*;

use crate::Route;

#[component]
fn ComingSoon(#[props(into)] title: String, #[props(into)] description: String) -> Element {
    rsx! {
        div { class: "placeholder-page",
            h2 { class: "placeholder-title", "{title}" }
            p { class: "placeholder-desc", "{description}" }
            Link { to: Route::Dashboard {}, class: "btn btn-secondary", "Back to dashboard" }
        }
    }
}

#[component]
pub fn Users() -> Element {
    rsx! { ComingSoon { title: "Users", description: "Browse and manage platform users." } }
}

#[component]
pub fn NewUser() -> Element {
    rsx! { ComingSoon { title: "Add New User", description: "Create an account for a new user." } }
}

#[component]
pub fn Properties() -> Element {
    rsx! { ComingSoon { title: "Properties", description: "Browse and manage property listings." } }
}

#[component]
pub fn NewProperty() -> Element {
    rsx! { ComingSoon { title: "Add Property", description: "List a new property." } }
}

#[component]
pub fn Hotels() -> Element {
    rsx! { ComingSoon { title: "Hotels", description: "Browse and manage hotels." } }
}

#[component]
pub fn Agents() -> Element {
    rsx! { ComingSoon { title: "Agents", description: "Browse and manage agents." } }
}

#[component]
pub fn Bookings() -> Element {
    rsx! { ComingSoon { title: "Bookings", description: "Review upcoming and past bookings." } }
}

#[component]
pub fn Inquiries() -> Element {
    rsx! { ComingSoon { title: "Inquiries", description: "Respond to property inquiries." } }
}

#[component]
pub fn Analytics() -> Element {
    rsx! { ComingSoon { title: "Analytics", description: "Track occupancy and growth." } }
}

#[component]
pub fn Reports() -> Element {
    rsx! { ComingSoon { title: "Reports", description: "Revenue and activity reports." } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { ComingSoon { title: "Settings", description: "Platform and account settings." } }
}
