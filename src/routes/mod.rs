//! HTTP routing

mod health;

use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::pricing;
use crate::AppState;

/// Build the application router.
///
/// The booking form and the admin order screen call the pricing API from the
/// browser, so CORS is open for `GET`/`POST` JSON requests.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/pricing", pricing::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
