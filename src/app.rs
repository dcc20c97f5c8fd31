use leptos::ev;
use leptos::prelude::*;

use crate::components::chat::Chat;
use crate::components::connection_overlay::ConnectionOverlay;
use crate::components::design_system::NotificationToast;
use crate::components::library::Documents;
use crate::services::chat_session::{probe_connectivity, provide_chat_session, use_chat_session, ApiStatus};
use crate::services::document_library::provide_document_library;
use crate::services::notification::provide_notification_state;

/// Which panel the shell is showing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Chat,
    Documents,
}

/// Canned prompts offered while the transcript only holds the greeting.
const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What are the pricing plans available?",
    "How do I integrate the API?",
    "What's the refund policy?",
    "How to troubleshoot authentication issues?",
];

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_notification_state();
    provide_chat_session();
    provide_document_library();

    let session = use_chat_session();
    let active_view = RwSignal::new(AppView::Chat);

    // One startup probe; the result is advisory and never re-checked.
    Effect::new({
        let session = session.clone();
        move |_| probe_connectivity(session.clone())
    });

    view! {
        <div class="flex h-screen bg-gray-50 font-sans">
            <Sidebar active_view=active_view />

            <div class="flex-1 flex flex-col">
                {move || match active_view.get() {
                    AppView::Chat => view! { <Chat /> }.into_any(),
                    AppView::Documents => view! { <Documents /> }.into_any(),
                }}
            </div>

            <NotificationToast />
            <ConnectionOverlay />
        </div>
    }
}

/// App title, connectivity indicator, navigation, and suggested questions.
#[component]
fn Sidebar(active_view: RwSignal<AppView>) -> impl IntoView {
    let session = use_chat_session();
    let status = session.api_status;
    let turns = session.turns;
    let input = session.input;

    let status_dot = move || match status.get() {
        ApiStatus::Ready => "bg-green-500 animate-pulse",
        ApiStatus::Warning => "bg-yellow-500",
        ApiStatus::Error => "bg-red-500",
        ApiStatus::Checking => "bg-gray-400",
    };

    let nav_class = move |view: AppView| {
        if active_view.get() == view {
            "bg-blue-50 text-blue-600"
        } else {
            "text-gray-600 hover:bg-gray-100"
        }
    };

    view! {
        <div class="w-80 bg-white border-r border-gray-200 flex flex-col">
            // Header
            <div class="p-6 border-b border-gray-200">
                <h1 class="text-xl font-bold text-gray-900">"AI Knowledge Base"</h1>
                <p class="text-xs text-gray-500">"Retrieval-augmented answers from your documents"</p>

                <div class="flex items-center gap-2 text-sm mt-4">
                    <div class=move || format!("w-2 h-2 rounded-full {}", status_dot())></div>
                    <span class="text-gray-600">{move || status.get().label()}</span>
                </div>
            </div>

            // Navigation
            <div class="flex-1 overflow-y-auto p-4">
                <nav class="space-y-2">
                    <button
                        class=move || format!(
                            "w-full flex items-center gap-3 px-4 py-3 rounded-lg font-medium transition-all {}",
                            nav_class(AppView::Chat),
                        )
                        on:click=move |_: ev::MouseEvent| active_view.set(AppView::Chat)
                    >
                        "Chat"
                    </button>
                    <button
                        class=move || format!(
                            "w-full flex items-center gap-3 px-4 py-3 rounded-lg font-medium transition-all {}",
                            nav_class(AppView::Documents),
                        )
                        on:click=move |_: ev::MouseEvent| active_view.set(AppView::Documents)
                    >
                        "Documents"
                    </button>
                </nav>

                // Suggested questions, until the first real exchange
                <Show when=move || {
                    active_view.get() == AppView::Chat && turns.get().len() <= 1
                }>
                    <div class="mt-8">
                        <h3 class="text-sm font-semibold text-gray-700 mb-3 px-2">"Try asking:"</h3>
                        <div class="space-y-2">
                            {SUGGESTED_QUESTIONS
                                .into_iter()
                                .map(|question| {
                                    view! {
                                        <button
                                            class="w-full text-left text-sm p-3 rounded-lg bg-gray-50 text-gray-700 hover:bg-gray-100 transition-colors"
                                            on:click=move |_| input.set(question.to_string())
                                        >
                                            {question}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
