//! Chat view: transcript, typing indicator, and the query input row.

mod chat_message;

pub use chat_message::ChatMessage;

use leptos::ev;
use leptos::prelude::*;

use crate::components::design_system::{Button, Input, TypingIndicator};
use crate::services::chat_session::{submit, use_chat_session};

/// Main chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let session = use_chat_session();
    let turns = session.turns;
    let input = session.input;
    let is_loading = session.is_loading;

    let send = {
        let session = session.clone();
        move || submit(session.clone())
    };

    let on_send_click = {
        let send = send.clone();
        move |_: ev::MouseEvent| send()
    };

    // Enter submits; the view-model drops blank or in-flight submissions.
    let on_keydown = Callback::new({
        let send = send.clone();
        move |e: ev::KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send();
            }
        }
    });

    let send_disabled =
        Signal::derive(move || is_loading.get() || input.get().trim().is_empty());

    view! {
        <div class="flex-1 flex flex-col h-full">
            // Transcript
            <div class="flex-1 overflow-y-auto p-6">
                <div class="max-w-4xl mx-auto space-y-6">
                    <For
                        each=move || turns.get()
                        key=|turn| turn.id
                        children=move |turn| view! { <ChatMessage turn=turn /> }
                    />
                    <Show when=move || is_loading.get()>
                        <div class="flex items-center gap-3 text-gray-500">
                            <TypingIndicator />
                            <span class="text-xs">"Thinking..."</span>
                        </div>
                    </Show>
                </div>
            </div>

            // Input row
            <div class="border-t border-gray-200 bg-white p-4">
                <div class="flex gap-3 max-w-4xl mx-auto">
                    <div class="flex-1">
                        <Input
                            value=input
                            placeholder="Ask a question about your documents..."
                            disabled=Signal::derive(move || is_loading.get())
                            on_keydown=on_keydown
                        />
                    </div>
                    <Button on_click=on_send_click disabled=send_disabled>
                        "Send"
                    </Button>
                </div>
                <p class="text-xs text-gray-500 mt-2 text-center">"Press Enter to send"</p>
            </div>
        </div>
    }
}
