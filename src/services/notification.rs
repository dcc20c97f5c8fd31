use leptos::prelude::*;
use uuid::Uuid;

/// How long a notification stays visible unless preempted.
pub const NOTIFICATION_DISPLAY_MS: u64 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// A single transient notification slot. Showing a new notification
/// replaces whatever is currently visible; the rendered toast clears the
/// slot after the display window unless a newer notification took it.
#[derive(Clone)]
pub struct NotificationState {
    pub current: RwSignal<Option<Notification>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        self.current.set(Some(Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }));
    }

    /// Clears the slot only when `id` is still the visible notification,
    /// so a stale timer never removes a newer notification.
    pub fn clear_if_current(&self, id: Uuid) {
        self.current.update(|current| {
            if current.as_ref().map(|n| n.id) == Some(id) {
                *current = None;
            }
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}

// Global accessor helpers
pub fn provide_notification_state() {
    provide_context(NotificationState::new());
}

pub fn use_notification_state() -> NotificationState {
    expect_context::<NotificationState>()
}

pub fn show_success(message: &str) {
    if let Some(state) = use_context::<NotificationState>() {
        state.show(NotificationKind::Success, message);
    }
}

pub fn show_error(message: &str) {
    if let Some(state) = use_context::<NotificationState>() {
        state.show(NotificationKind::Error, message);
    }
}
