use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/medecins/:medecin_id/disponibilites",
            get(handlers::availability::list_availabilities)
                .post(handlers::availability::create_availability),
        )
        .route(
            "/api/disponibilites/:id",
            put(handlers::availability::update_availability)
                .delete(handlers::availability::delete_availability),
        )
        .route(
            "/api/medecins/:medecin_id/creneaux",
            get(handlers::slots::get_available_slots),
        )
}
