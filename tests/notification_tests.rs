//! Notification Tests
//!
//! Tests for the single transient notification slot: replacement on show,
//! preemption-safe clearing, and kind bookkeeping.

use knowledge_assistant_frontend::services::notification::{
    provide_notification_state, NotificationKind, NotificationState, NOTIFICATION_DISPLAY_MS,
};
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Slot Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_slot_starts_empty() {
    let state = NotificationState::new();
    assert!(state.current.get().is_none());
}

#[wasm_bindgen_test]
fn test_show_fills_the_slot() {
    let state = NotificationState::new();

    state.show(NotificationKind::Success, "report.pdf uploaded successfully!");

    let notification = state.current.get().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "report.pdf uploaded successfully!");
}

#[wasm_bindgen_test]
fn test_new_notification_preempts_the_current_one() {
    let state = NotificationState::new();

    state.show(NotificationKind::Success, "first");
    let first_id = state.current.get().unwrap().id;

    state.show(NotificationKind::Error, "second");

    let current = state.current.get().unwrap();
    assert_ne!(current.id, first_id);
    assert_eq!(current.message, "second");
    assert_eq!(current.kind, NotificationKind::Error);
}

// ============================================================================
// Clearing Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_clear_if_current_removes_the_matching_notification() {
    let state = NotificationState::new();

    state.show(NotificationKind::Success, "done");
    let id = state.current.get().unwrap().id;

    state.clear_if_current(id);
    assert!(state.current.get().is_none());
}

#[wasm_bindgen_test]
fn test_stale_timer_does_not_clear_a_newer_notification() {
    let state = NotificationState::new();

    state.show(NotificationKind::Success, "first");
    let first_id = state.current.get().unwrap().id;

    // A newer notification takes the slot before the first timer fires
    state.show(NotificationKind::Error, "second");
    state.clear_if_current(first_id);

    let current = state.current.get().unwrap();
    assert_eq!(current.message, "second");
}

#[wasm_bindgen_test]
fn test_clear_if_current_on_empty_slot_is_a_noop() {
    let state = NotificationState::new();
    state.clear_if_current(Uuid::new_v4());
    assert!(state.current.get().is_none());
}

#[wasm_bindgen_test]
fn test_dismiss_clears_unconditionally() {
    let state = NotificationState::new();

    state.show(NotificationKind::Error, "gone");
    state.dismiss();

    assert!(state.current.get().is_none());
}

// ============================================================================
// Display Window Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_display_window_is_three_seconds() {
    assert_eq!(NOTIFICATION_DISPLAY_MS, 3000);
}

// ============================================================================
// Context Provider Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_provide_notification_state_mounts() {
    use leptos::prelude::*;

    leptos::mount::mount_to_body(|| {
        provide_notification_state();

        view! {
            <div id="notification-test">"Notification state provided"</div>
        }
    });
}
