use crate::models::{DayView, HabitRow};
use crate::notify::{Alert, ConfirmDialog};
use askama::Template;
use urlencoding::encode;

pub struct RowLinks<'a> {
    pub habit: &'a HabitRow,
    pub toggle_action: String,
    pub delete_action: String,
}

#[derive(Template)]
#[template(path = "day.html")]
pub struct DayTemplate<'a> {
    pub view: &'a DayView,
    pub rows: Vec<RowLinks<'a>>,
    pub alert: Option<&'a Alert>,
    pub dismiss_action: String,
}

#[derive(Template)]
#[template(path = "loading.html")]
pub struct LoadingTemplate {
    pub refresh_url: String,
}

#[derive(Template)]
#[template(path = "confirm.html")]
pub struct ConfirmTemplate<'a> {
    pub dialog: &'a ConfirmDialog,
    pub habit_title: &'a str,
    pub action: String,
}

pub fn render_day(view: &DayView) -> askama::Result<String> {
    let rows = view
        .habits
        .iter()
        .map(|habit| RowLinks {
            habit,
            toggle_action: habit_action(&view.date, &habit.id, "toggle"),
            delete_action: habit_action(&view.date, &habit.id, "delete"),
        })
        .collect();

    DayTemplate {
        view,
        rows,
        alert: view.alerts.first(),
        dismiss_action: format!("{}/alerts/dismiss", day_path(&view.date)),
    }
    .render()
}

/// Placeholder shown while the day is being fetched; polls until loaded.
pub fn render_loading(date: &str) -> askama::Result<String> {
    LoadingTemplate {
        refresh_url: day_path(date),
    }
    .render()
}

pub fn render_confirm(
    date: &str,
    habit_id: &str,
    habit_title: &str,
    dialog: &ConfirmDialog,
) -> askama::Result<String> {
    ConfirmTemplate {
        dialog,
        habit_title,
        action: habit_action(date, habit_id, "delete"),
    }
    .render()
}

/// Path of a day screen with the date kept as a single route segment.
pub fn day_path(date: &str) -> String {
    format!("/day/{}", encode(date))
}

fn habit_action(date: &str, habit_id: &str, action: &str) -> String {
    format!("{}/habits/{}/{action}", day_path(date), encode(habit_id))
}
