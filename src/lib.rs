use std::{sync::Arc, time::Instant};

use axum::{middleware, routing::get, Router};

pub mod config;
pub mod errors;
pub mod facts;
pub mod http;
pub mod logging;
pub mod system;

use system::SystemProbe;

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<str>,
    pub started_at: Instant,
    pub probe: Arc<dyn SystemProbe>,
}

impl AppState {
    pub fn new(environment: String, probe: Arc<dyn SystemProbe>) -> Self {
        Self {
            environment: Arc::<str>::from(environment),
            started_at: Instant::now(),
            probe,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::index))
        .route("/health", get(http::handlers::health))
        .route("/info", get(http::handlers::info))
        .route("/api/random", get(http::handlers::random_fact))
        // unmatched (method, path) pairs both fall through to the 404 page
        .fallback(http::handlers::not_found)
        .method_not_allowed_fallback(http::handlers::not_found)
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
