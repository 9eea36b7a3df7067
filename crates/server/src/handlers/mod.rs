mod health;
mod photos;

use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/photos", get(photos::list_photos))
        .with_state(state)
}
