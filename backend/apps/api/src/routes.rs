//! Route Composition
//!
//! Mounts the feature routers under their path prefixes and installs
//! the enveloped 404 fallback for everything else.

use axum::Json;
use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sqlx::PgPool;
use std::net::SocketAddr;

use kernel::response::Envelope;
use users::{UserConfig, users_router};

/// Assemble the application router.
pub fn compose(pool: PgPool, user_config: UserConfig) -> Router {
    // Wrong-method requests to a known path get the same enveloped 404
    // as unknown paths, not a bare 405.
    Router::new()
        .nest("/users", users_router(pool, user_config))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
}

/// Fallback for unmatched routes.
///
/// Logs the request line and client identification, then answers with
/// the same envelope shape as every other response.
async fn route_not_found(req: Request) -> impl IntoResponse {
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let user_agent = platform::client::extract_user_agent(req.headers());
    let client_ip = platform::client::extract_client_ip(req.headers(), direct_ip);

    tracing::info!(
        method = %req.method(),
        path = req.uri().path(),
        query = req.uri().query().unwrap_or(""),
        user_agent = user_agent.as_deref().unwrap_or(""),
        client_ip = client_ip.map(|ip| ip.to_string()).unwrap_or_default(),
        "Route not found"
    );

    (
        StatusCode::NOT_FOUND,
        Json(Envelope::error("Route not found", "Route not found")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::{get, post};
    use tower::ServiceExt;

    fn test_app() -> Router {
        // Stand-in routes wired like `compose`
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/submit", post(|| async { "ok" }))
            .fallback(route_not_found)
            .method_not_allowed_fallback(route_not_found)
    }

    #[tokio::test]
    async fn test_unmatched_route_returns_enveloped_404() {
        let app = test_app();
        let request = Request::builder()
            .uri("/users/unknown?foo=bar")
            .header(axum::http::header::USER_AGENT, "curl/8.5.0")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["message"], "Route not found");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_wrong_method_on_known_path_returns_enveloped_404() {
        let app = test_app();
        let request = Request::builder()
            .method("GET")
            .uri("/submit")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["message"], "Route not found");
    }

    #[tokio::test]
    async fn test_matched_route_bypasses_fallback() {
        let app = test_app();
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
