use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/day/:date", get(handlers::day_page))
        .route("/day/:date/habits/:habit_id/toggle", post(handlers::toggle_habit))
        .route(
            "/day/:date/habits/:habit_id/delete",
            get(handlers::confirm_delete).post(handlers::delete_habit),
        )
        .route("/day/:date/alerts/dismiss", post(handlers::dismiss_alert))
        .route("/api/day/:date", get(handlers::get_day))
        .route("/api/day/:date/habits/:habit_id/toggle", post(handlers::api_toggle_habit))
        .route("/api/day/:date/habits/:habit_id/delete", post(handlers::api_delete_habit))
        .route("/api/day/:date/alerts/dismiss", post(handlers::api_dismiss_alert))
        .with_state(state)
}
