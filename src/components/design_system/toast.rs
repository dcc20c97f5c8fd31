use std::time::Duration;

use leptos::prelude::*;

use crate::services::notification::{
    use_notification_state, NotificationKind, NOTIFICATION_DISPLAY_MS,
};

/// Renders the transient notification slot. Each notification schedules
/// its own removal after the display window; a timer that fires after a
/// newer notification took the slot finds a different id and leaves it
/// alone.
#[component]
pub fn NotificationToast() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed top-4 right-4 z-50">
            {move || {
                state.current.get().map(|notification| {
                    let id = notification.id;
                    {
                        let state = state.clone();
                        set_timeout(
                            move || state.clear_if_current(id),
                            Duration::from_millis(NOTIFICATION_DISPLAY_MS),
                        );
                    }

                    let (container_class, icon) = match notification.kind {
                        NotificationKind::Success => ("bg-green-500 text-white", "✓"),
                        NotificationKind::Error => ("bg-red-500 text-white", "✕"),
                    };

                    view! {
                        <div
                            class=format!(
                                "flex items-center gap-3 px-6 py-4 rounded-xl shadow-lg {}",
                                container_class,
                            )
                            role="alert"
                        >
                            <span class="text-lg font-bold">{icon}</span>
                            <span class="font-medium">{notification.message}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
