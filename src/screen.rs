use crate::api::HabitsApi;
use crate::models::DayInfo;
use crate::notify::{Alert, ConfirmDialog, DialogChoice, Notifier};
use tokio::sync::watch;
use tracing::{debug, error, info};

/// Local state of one mounted day screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayState {
    pub loading: bool,
    pub day_info: Option<DayInfo>,
    pub completed_habits: Vec<String>,
}

impl DayState {
    pub fn is_completed(&self, habit_id: &str) -> bool {
        self.completed_habits.iter().any(|id| id == habit_id)
    }

    pub fn habit_title(&self, habit_id: &str) -> Option<&str> {
        self.day_info
            .as_ref()?
            .possible_habits
            .iter()
            .find(|habit| habit.id == habit_id)
            .map(|habit| habit.title.as_str())
    }
}

/// Controller behind the day screen.
///
/// State is published through a watch channel so renderers can read the
/// latest snapshot (or wait for the next one) while remote calls are in
/// flight. Mutations only happen after the remote side has confirmed.
pub struct DayScreen<A, N> {
    date: String,
    api: A,
    notifier: N,
    state: watch::Sender<DayState>,
}

impl<A: HabitsApi, N: Notifier> DayScreen<A, N> {
    pub fn new(date: impl Into<String>, api: A, notifier: N) -> Self {
        let initial = DayState {
            loading: true,
            ..DayState::default()
        };
        let (state, _) = watch::channel(initial);
        Self {
            date: date.into(),
            api,
            notifier,
            state,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn snapshot(&self) -> DayState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DayState> {
        self.state.subscribe()
    }

    /// Loads the day from the remote service, replacing local state on success.
    pub async fn fetch_habits(&self) {
        self.state.send_modify(|state| state.loading = true);
        let _loading = LoadingGuard(&self.state);

        match self.api.fetch_day(&self.date).await {
            Ok(info) => {
                debug!(
                    date = %self.date,
                    possible = info.possible_habits.len(),
                    completed = info.completed_habits.len(),
                    "day loaded"
                );
                self.state.send_modify(|state| {
                    state.completed_habits = info.completed_habits.clone();
                    state.day_info = Some(info);
                });
            }
            Err(err) => {
                error!(date = %self.date, "failed to fetch day: {err}");
                self.notifier.alert(Alert::fetch_failed());
            }
        }
    }

    /// Flips one habit remotely, then mirrors the flip locally.
    pub async fn handle_toggle_habit(&self, habit_id: &str) {
        if let Err(err) = self.api.toggle_habit(habit_id).await {
            error!(date = %self.date, habit_id, "failed to toggle habit: {err}");
            self.notifier.alert(Alert::toggle_failed());
            return;
        }

        self.state.send_modify(|state| {
            if state.is_completed(habit_id) {
                state.completed_habits.retain(|id| id != habit_id);
            } else {
                state.completed_habits.push(habit_id.to_string());
            }
        });
        debug!(date = %self.date, habit_id, "habit toggled");
    }

    pub fn delete_prompt(&self) -> ConfirmDialog {
        ConfirmDialog::DELETE_HABIT
    }

    /// Resolves the delete confirmation. A confirmed delete reloads the day.
    pub async fn handle_delete_habit(&self, habit_id: &str, choice: DialogChoice) {
        if choice == DialogChoice::Cancel {
            debug!(date = %self.date, habit_id, "delete cancelled");
            return;
        }

        match self.api.delete_habit(habit_id).await {
            Ok(()) => {
                info!(date = %self.date, habit_id, "habit deleted");
                self.fetch_habits().await;
            }
            Err(err) => {
                error!(date = %self.date, habit_id, "failed to delete habit: {err}");
                self.notifier.alert(Alert::delete_failed());
            }
        }
    }
}

/// Clears the loading flag however the load ends, including cancellation.
struct LoadingGuard<'a>(&'a watch::Sender<DayState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|state| state.loading = false);
    }
}
