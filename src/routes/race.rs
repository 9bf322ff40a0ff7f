use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::{
        race::{get_race_details, get_race_widget, get_upcoming_race},
        schedule::get_schedule,
    },
    utils::state::AppState,
};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/schedule", get(get_schedule))
        .route("/upcoming", get(get_upcoming_race))
        .route("/upcoming/details", get(get_race_details))
        .route("/widget", get(get_race_widget))
}
