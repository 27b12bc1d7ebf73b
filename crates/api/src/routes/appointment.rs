use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/rendez-vous", post(handlers::appointment::create_appointment))
        .route(
            "/api/rendez-vous/:id/annuler",
            put(handlers::appointment::cancel_appointment),
        )
        .route(
            "/api/medecins/:medecin_id/rendez-vous",
            get(handlers::appointment::list_appointments),
        )
}
