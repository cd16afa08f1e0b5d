pub mod api;
pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod progress;
pub mod screen;
pub mod state;
pub mod ui;
pub mod view;

pub use api::{HabitsApi, HttpHabitsApi};
pub use app::router;
pub use config::Config;
pub use screen::DayScreen;
pub use state::AppState;
