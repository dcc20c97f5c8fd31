use leptos::ev;
use leptos::prelude::*;

use crate::components::design_system::{Button, LoadingSpinner};
use crate::services::chat_session::{use_chat_session, ApiStatus};

/// Full-screen blocking overlay shown while the startup probe resolves.
/// A `Ready` probe dismisses it automatically; `Warning` and `Error` keep
/// it up until the user chooses to continue.
#[component]
pub fn ConnectionOverlay() -> impl IntoView {
    let session = use_chat_session();
    let status = session.api_status;
    let visible = session.show_connection_overlay;

    let on_continue = {
        let session = session.clone();
        move |_: ev::MouseEvent| session.dismiss_overlay()
    };

    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4">
                <div class="bg-white rounded-2xl shadow-2xl max-w-md w-full p-8 border border-gray-200">
                    <div class="flex flex-col items-center text-center gap-3">
                        <Show when=move || status.get() == ApiStatus::Checking>
                            <LoadingSpinner size="lg" />
                        </Show>

                        <h3 class="text-2xl font-bold text-gray-900">
                            {move || match status.get() {
                                ApiStatus::Checking => "Connecting to API...",
                                ApiStatus::Ready => "Connected Successfully!",
                                ApiStatus::Warning => "API Configuration Warning",
                                ApiStatus::Error => "Connection Failed",
                            }}
                        </h3>

                        <p class="text-gray-600">
                            {move || match status.get() {
                                ApiStatus::Checking => {
                                    "Setting up may take up to 50 seconds..."
                                }
                                ApiStatus::Ready => "Your knowledge base is ready to use!",
                                ApiStatus::Warning => "API key is not configured properly.",
                                ApiStatus::Error => "Unable to connect to the API server.",
                            }}
                        </p>

                        <Show
                            when=move || {
                                matches!(status.get(), ApiStatus::Warning | ApiStatus::Error)
                            }
                            clone:on_continue
                        >
                            <Button on_click=on_continue.clone() class="mt-4">
                                "Continue Anyway"
                            </Button>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
