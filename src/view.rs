use crate::calendar::{day_and_month, day_of_week, is_date_in_past_at, parse_day};
use crate::models::{DayView, HabitRow};
use crate::notify::Alert;
use crate::progress::progress_percentage;
use crate::screen::DayState;
use chrono::{DateTime, Local, TimeZone};

pub const PAST_NOTICE: &str = "You can't edit habits from the past 😥";

pub fn build_view(date: &str, state: &DayState, alerts: Vec<Alert>) -> DayView {
    build_view_at(date, state, alerts, &Local::now())
}

/// Derives everything the day screen displays from its current state.
pub fn build_view_at<Tz: TimeZone>(
    date: &str,
    state: &DayState,
    alerts: Vec<Alert>,
    now: &DateTime<Tz>,
) -> DayView {
    let day = parse_day(date);
    let is_date_in_past = is_date_in_past_at(day, now);

    let possible = state
        .day_info
        .as_ref()
        .map(|info| info.possible_habits.as_slice())
        .unwrap_or_default();

    let progress = if possible.is_empty() {
        0
    } else {
        progress_percentage(possible.len(), state.completed_habits.len())
    };

    let habits: Vec<HabitRow> = possible
        .iter()
        .map(|habit| HabitRow {
            id: habit.id.clone(),
            title: habit.title.clone(),
            checked: state.is_completed(&habit.id),
            disabled: is_date_in_past,
        })
        .collect();

    DayView {
        date: date.to_string(),
        loading: state.loading,
        is_date_in_past,
        day_of_week: day_of_week(day),
        day_and_month: day_and_month(day),
        progress,
        empty: habits.is_empty(),
        habits,
        past_notice: is_date_in_past.then_some(PAST_NOTICE),
        alerts,
    }
}
