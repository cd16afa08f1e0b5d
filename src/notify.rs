use serde::Serialize;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

const ALERT_TITLE: &str = "Ops 😟";

/// A blocking, acknowledge-only notification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl Alert {
    pub const fn fetch_failed() -> Self {
        Self {
            title: ALERT_TITLE,
            message: "An error occurred while searching a habit 😣",
        }
    }

    pub const fn toggle_failed() -> Self {
        Self {
            title: ALERT_TITLE,
            message: "An error occurred while updating a habit 😣",
        }
    }

    pub const fn delete_failed() -> Self {
        Self {
            title: ALERT_TITLE,
            message: "An error occurred while deleting a habit 😣",
        }
    }
}

pub trait Notifier: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// Alerts waiting for acknowledgment, oldest first.
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    pending: Arc<Mutex<VecDeque<Alert>>>,
}

impl AlertQueue {
    pub fn pending(&self) -> Vec<Alert> {
        self.lock().iter().copied().collect()
    }

    pub fn dismiss(&self) -> Option<Alert> {
        self.lock().pop_front()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Alert>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for AlertQueue {
    fn alert(&self, alert: Alert) {
        self.lock().push_back(alert);
    }
}

/// Two-button confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub title: &'static str,
    pub message: &'static str,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
}

impl ConfirmDialog {
    pub const DELETE_HABIT: Self = Self {
        title: "Delete habit",
        message: "Are you sure you want to delete this habit?",
        cancel_label: "Cancel",
        confirm_label: "Delete",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Cancel,
    Delete,
}

impl DialogChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "cancel" => Some(Self::Cancel),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}
