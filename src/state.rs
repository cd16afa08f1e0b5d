use crate::api::HttpHabitsApi;
use crate::notify::AlertQueue;
use crate::screen::DayScreen;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

pub type Screen = DayScreen<HttpHabitsApi, AlertQueue>;

/// Shared across requests: the API client and the one mounted day screen.
#[derive(Clone)]
pub struct AppState {
    pub api: HttpHabitsApi,
    mounted: Arc<Mutex<Option<Arc<Screen>>>>,
}

impl AppState {
    pub fn new(api: HttpHabitsApi) -> Self {
        Self {
            api,
            mounted: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the screen for `date`, mounting it (and starting its single
    /// initial load) when a different day, or nothing, is mounted.
    pub async fn screen_for(&self, date: &str) -> Arc<Screen> {
        let mut mounted = self.mounted.lock().await;
        if let Some(screen) = mounted.as_ref() {
            if screen.date() == date {
                return Arc::clone(screen);
            }
            info!(date = screen.date(), "unmounting day screen");
        }

        info!(date, "mounting day screen");
        let screen = Arc::new(DayScreen::new(date, self.api.clone(), AlertQueue::default()));
        let loader = Arc::clone(&screen);
        tokio::spawn(async move {
            loader.fetch_habits().await;
        });

        *mounted = Some(Arc::clone(&screen));
        screen
    }

    pub async fn unmount(&self) {
        if let Some(screen) = self.mounted.lock().await.take() {
            info!(date = screen.date(), "unmounting day screen");
        }
    }
}
