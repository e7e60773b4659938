use dioxus::prelude::*;
use types::DashboardSummary;

use crate::{use_error, use_viewer, views::AdminDashboard};

#[component]
pub fn Dashboard() -> Element {
    let viewer = use_viewer();
    let mut summary = use_signal(|| None::<DashboardSummary>);
    let mut loading = use_signal(|| true);
    let mut failed = use_signal(|| false);
    let mut error_state = use_error();

    let load = move || {
        spawn(async move {
            loading.set(true);
            failed.set(false);
            match api::get_dashboard_summary().await {
                Ok(s) => summary.set(Some(s)),
                Err(e) => {
                    failed.set(true);
                    error_state.set_server_error(&e);
                }
            }
            loading.set(false);
        });
    };

    use_effect(move || {
        load();
    });

    if *loading.read() {
        return rsx! {
            div { class: "loading", "Loading admin dashboard..." }
        };
    }

    match summary() {
        Some(summary) if !failed() => rsx! {
            AdminDashboard { user: viewer.0.clone(), summary }
        },
        _ => rsx! {
            div { class: "error-container",
                h3 { "Something went wrong" }
                p { "Failed to load dashboard data. Please try again later." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        error_state.clear();
                        load();
                    },
                    "Retry"
                }
            }
        },
    }
}
