use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/instructors/:instructor_id/availability",
            get(handlers::availability::list_availability)
                .post(handlers::availability::add_slot),
        )
        .route(
            "/api/instructors/:instructor_id/availability/generate",
            post(handlers::availability::generate_week),
        )
        .route(
            "/api/instructors/:instructor_id/availability/:slot_id",
            delete(handlers::availability::remove_slot),
        )
}
