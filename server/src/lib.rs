mod config;
mod routes;
mod source;

use std::sync::Arc;

use axum::Router;
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;
use types::{CurrentUser, DashboardSummary, Result, UserType, err};

pub use crate::config::{CONFIG, Config};
pub use crate::routes::{DashboardState, dashboard_router};
pub use crate::source::{DashboardSource, MockDashboardSource};

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Extra axum routes served next to the Dioxus app.
pub fn init() -> Router {
    dashboard_router(DashboardState {
        source: Arc::new(MockDashboardSource),
        user: CONFIG.current_user(),
    })
}

/// The user the app runs as.
pub fn current_user() -> CurrentUser {
    CONFIG.current_user()
}

/// Dashboard for `user`'s role. Only admins have one so far.
pub async fn dashboard_for<S>(source: &S, user: &CurrentUser) -> Result<DashboardSummary>
where
    S: DashboardSource,
{
    match user.user_type {
        UserType::Admin => {
            let summary = source.admin_summary(Timestamp::now()).await?;
            tracing::debug!(
                stats = summary.stats.len(),
                activities = summary.activities.len(),
                "built admin dashboard summary"
            );
            Ok(summary)
        }
        user_type @ (UserType::Agent | UserType::HotelManager) => {
            tracing::info!(?user_type, "no dashboard for user type");
            Err(err!("no dashboard available for this user type"))
        }
    }
}

/// Admin summary from the mock source, for server functions.
pub async fn dashboard_summary() -> Result<DashboardSummary> {
    dashboard_for(&MockDashboardSource, &current_user()).await
}
