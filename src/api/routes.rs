use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::services::shared::constants::DATA_PATH;

use super::{
    handlers::{data, index},
    AppState,
};

pub fn create_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route(DATA_PATH, get(data))
        .with_state(Arc::new(state))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}
