use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use types::CurrentUser;

use crate::{DashboardSource, dashboard_for};

pub struct DashboardState<S> {
    pub source: Arc<S>,
    pub user: CurrentUser,
}

impl<S> Clone for DashboardState<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            user: self.user.clone(),
        }
    }
}

pub fn dashboard_router<S>(state: DashboardState<S>) -> Router
where
    S: DashboardSource + 'static,
{
    Router::new()
        .route("/api/v1/dashboard/", get(dashboard::<S>))
        .with_state(state)
}

async fn dashboard<S>(State(state): State<DashboardState<S>>) -> Response
where
    S: DashboardSource + 'static,
{
    match dashboard_for(&*state.source, &state.user).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": error.message })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;
    use types::{DashboardSummary, UserType};

    use super::*;
    use crate::MockDashboardSource;

    fn app(user_type: UserType) -> Router {
        dashboard_router(DashboardState {
            source: Arc::new(MockDashboardSource),
            user: CurrentUser {
                name: Some("Jane Smith".into()),
                user_type,
            },
        })
    }

    async fn get_dashboard(app: Router) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/dashboard/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn admin_gets_summary() {
        let (status, body) = get_dashboard(app(UserType::Admin)).await;
        assert_eq!(status, StatusCode::OK);

        let summary: DashboardSummary = serde_json::from_value(body).unwrap();
        assert_eq!(summary.stats.len(), 4);
        assert_eq!(summary.activities.len(), 4);
    }

    #[tokio::test]
    async fn other_roles_are_rejected() {
        for user_type in [UserType::Agent, UserType::HotelManager] {
            let (status, body) = get_dashboard(app(user_type)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(
                body["detail"]
                    .as_str()
                    .unwrap()
                    .starts_with("no dashboard available for this user type")
            );
        }
    }
}
