use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/experts/:email/calendar",
            get(handlers::calendar::get_calendar),
        )
        .route(
            "/api/experts/:email/slots",
            get(handlers::calendar::get_day_slots),
        )
}
