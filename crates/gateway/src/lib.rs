//! Job gateway library.
//!
//! Axum front end that forwards `/jobs` requests to a downstream job service
//! through a [`client::JobClient`] and reshapes the list response.

pub mod client;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use client::{HttpJobClient, JobClient};
pub use config::GatewayConfig;
pub use error::*;
pub use routes::api_routes;
pub use state::GatewayState;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
pub fn create_app(state: GatewayState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
