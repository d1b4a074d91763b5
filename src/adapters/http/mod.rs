//! HTTP adapters - REST API implementations.
//!
//! [`api_router`] assembles the full service: game routes, the health check,
//! and the CORS / tracing / timeout layers configured from [`ServerConfig`].
//! Every error response, including unmatched routes and timeouts, carries an
//! `{ "error": message }` body.

pub mod game;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use game::dto::{ErrorResponse, HealthResponse};
pub use game::{game_router, GameAppState};

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Unmatched routes.
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found.")))
}

/// Builds the complete application router.
pub fn api_router(state: GameAppState, server: &ServerConfig) -> Router {
    let routes = Router::new()
        .route("/health", get(health))
        .merge(game_router())
        .fallback(not_found)
        .with_state(state);

    with_middleware(routes, server)
}

fn with_middleware(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(middleware::map_response(timeout_body))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// `TimeoutLayer` answers 408 with an empty body.
async fn timeout_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorResponse::new("Request timed out.")),
        )
            .into_response();
    }
    response
}

/// CORS policy: configured origins, or any origin when none are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::OPTIONS, Method::POST, Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemorySessionStore;
    use crate::adapters::word_source::FixedWordSource;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn app(server: &ServerConfig) -> Router {
        let state = GameAppState::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(FixedWordSource::default()),
        );
        api_router(state, server)
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn any_origin_allowed_by_default() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://play.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let allow_origin = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(allow_origin, "*");
    }

    #[tokio::test]
    async fn preflight_lists_allowed_methods() {
        let response = app(&ServerConfig::default())
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/game")
                    .header(header::ORIGIN, "https://play.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        for method in ["OPTIONS", "POST", "GET"] {
            assert!(methods.contains(method), "missing {} in {}", method, methods);
        }
    }

    #[tokio::test]
    async fn configured_origins_restrict_cors() {
        let server = ServerConfig {
            cors_origins: Some("https://play.example.com".to_string()),
            ..ServerConfig::default()
        };

        let response = app(&server)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://evil.example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn unknown_route_has_error_body() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/games").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"error":"Not found."}"#);
    }

    #[tokio::test]
    async fn slow_request_times_out_with_error_body() {
        let server = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let slow = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                "late"
            }),
        );

        let response = with_middleware(slow, &server)
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#"{"error":"Request timed out."}"#);
    }
}
