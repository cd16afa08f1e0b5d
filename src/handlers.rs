use crate::calendar::today_string;
use crate::errors::AppError;
use crate::models::{DayParams, DayView, DeleteRequest, HabitParams};
use crate::notify::DialogChoice;
use crate::state::{AppState, Screen};
use crate::ui::{day_path, render_confirm, render_day, render_loading};
use crate::view::build_view;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// How long a page request waits for a freshly mounted day before falling
/// back to the self-refreshing loading page.
const LOAD_WAIT: Duration = Duration::from_millis(300);

pub async fn index(State(state): State<AppState>) -> Redirect {
    state.unmount().await;
    redirect_to_day(&today_string())
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn day_page(
    State(state): State<AppState>,
    Path(params): Path<DayParams>,
) -> Result<Html<String>, AppError> {
    let screen = state.screen_for(&params.date).await;
    let mut updates = screen.subscribe();
    let _ = timeout(LOAD_WAIT, async move {
        updates.wait_for(|day| !day.loading).await.is_ok()
    })
    .await;

    let view = current_view(&screen);
    if view.loading {
        return Ok(Html(render_loading(&view.date)?));
    }
    Ok(Html(render_day(&view)?))
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(params): Path<HabitParams>,
) -> Redirect {
    let screen = state.screen_for(&params.date).await;
    screen.handle_toggle_habit(&params.habit_id).await;
    redirect_to_day(&params.date)
}

pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(params): Path<HabitParams>,
) -> Result<Html<String>, AppError> {
    let screen = state.screen_for(&params.date).await;
    let snapshot = screen.snapshot();
    let title = snapshot
        .habit_title(&params.habit_id)
        .unwrap_or(&params.habit_id);
    let html = render_confirm(
        &params.date,
        &params.habit_id,
        title,
        &screen.delete_prompt(),
    )?;
    Ok(Html(html))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(params): Path<HabitParams>,
    Form(payload): Form<DeleteRequest>,
) -> Result<Redirect, AppError> {
    let choice = parse_choice(&payload.choice)?;
    let screen = state.screen_for(&params.date).await;
    screen.handle_delete_habit(&params.habit_id, choice).await;
    Ok(redirect_to_day(&params.date))
}

pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(params): Path<DayParams>,
) -> Redirect {
    let screen = state.screen_for(&params.date).await;
    if let Some(alert) = screen.notifier().dismiss() {
        debug!(date = %params.date, alert = alert.message, "alert acknowledged");
    }
    redirect_to_day(&params.date)
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(params): Path<DayParams>,
) -> Json<DayView> {
    let screen = state.screen_for(&params.date).await;
    Json(current_view(&screen))
}

pub async fn api_toggle_habit(
    State(state): State<AppState>,
    Path(params): Path<HabitParams>,
) -> Json<DayView> {
    let screen = state.screen_for(&params.date).await;
    screen.handle_toggle_habit(&params.habit_id).await;
    Json(current_view(&screen))
}

pub async fn api_delete_habit(
    State(state): State<AppState>,
    Path(params): Path<HabitParams>,
    Json(payload): Json<DeleteRequest>,
) -> Result<Json<DayView>, AppError> {
    let choice = parse_choice(&payload.choice)?;
    let screen = state.screen_for(&params.date).await;
    screen.handle_delete_habit(&params.habit_id, choice).await;
    Ok(Json(current_view(&screen)))
}

pub async fn api_dismiss_alert(
    State(state): State<AppState>,
    Path(params): Path<DayParams>,
) -> Json<DayView> {
    let screen = state.screen_for(&params.date).await;
    screen.notifier().dismiss();
    Json(current_view(&screen))
}

fn current_view(screen: &Screen) -> DayView {
    build_view(screen.date(), &screen.snapshot(), screen.notifier().pending())
}

fn parse_choice(value: &str) -> Result<DialogChoice, AppError> {
    DialogChoice::parse(value)
        .ok_or_else(|| AppError::bad_request("choice must be 'cancel' or 'delete'"))
}

fn redirect_to_day(date: &str) -> Redirect {
    Redirect::to(&day_path(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::header::LOCATION, response::IntoResponse};

    fn location(date: &str) -> String {
        let response = redirect_to_day(date).into_response();
        response.headers()[LOCATION].to_str().unwrap().to_string()
    }

    #[test]
    fn redirect_keeps_plain_dates_readable() {
        assert_eq!(location("2024-01-10"), "/day/2024-01-10");
    }

    #[test]
    fn redirect_keeps_slashes_inside_the_date_segment() {
        assert_eq!(location("a/b"), "/day/a%2Fb");
    }

    #[test]
    fn redirect_survives_control_characters() {
        assert_eq!(location("2024-01-10\n"), "/day/2024-01-10%0A");
        assert_eq!(location("bad\r\ndate"), "/day/bad%0D%0Adate");
    }
}
