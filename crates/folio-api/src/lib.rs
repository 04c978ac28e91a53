//! # folio-api: Axum API Service for the Portfolio Site
//!
//! Hosts the contact submission endpoint and read-only views of the site
//! content.
//!
//! ## API Surface
//!
//! | Prefix                  | Module                 | Domain            |
//! |-------------------------|------------------------|-------------------|
//! | `/api/contact`          | [`routes::contact`]    | Contact pipeline  |
//! | `/api/site`             | [`routes::content`]    | Profile & hero    |
//! | `/api/projects/*`       | [`routes::content`]    | Projects          |
//! | `/api/navigation/*`     | [`routes::content`]    | Navigation        |
//! | `/health/*`, `/metrics` | this module            | Operations        |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```
//!
//! The metrics middleware and `/metrics` are mounted only when
//! [`AppConfig::metrics_enabled`](state::AppConfig::metrics_enabled) is set.

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, Extension};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::AppState;

/// Largest accepted request body. Contact messages are short.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics_on = state.config.metrics_enabled;
    let metrics = state.metrics.clone();

    let mut api = Router::new()
        .merge(routes::contact::router())
        .merge(routes::content::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES));

    if metrics_on {
        api = api
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(metrics.clone()));
    }

    let api = api
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let mut operational = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    if metrics_on {
        operational = operational
            .route("/metrics", axum::routing::get(prometheus_metrics))
            .layer(Extension(metrics));
    }

    Router::new().merge(operational).merge(api)
}

/// GET /metrics: Prometheus text exposition.
async fn prometheus_metrics(Extension(metrics): Extension<ApiMetrics>) -> impl IntoResponse {
    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode Prometheus metrics: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

/// Liveness probe: 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. Content is parsed before the router exists, so a
/// running router is ready.
async fn readiness() -> &'static str {
    "ready"
}
