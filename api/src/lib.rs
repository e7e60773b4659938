use dioxus::prelude::*;
use types::{CurrentUser, DashboardSummary};

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<CurrentUser>> {
    Ok(Some(server::current_user()))
}

#[post("/api/dashboard")]
pub async fn get_dashboard_summary() -> ServerFnResult<DashboardSummary> {
    Ok(server::dashboard_summary().await?)
}
