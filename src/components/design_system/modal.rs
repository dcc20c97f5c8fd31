use leptos::ev;
use leptos::prelude::*;

/// A modal dialog component
/// Note: Due to Leptos Children semantics, the modal content is always
/// rendered but the container is shown/hidden via CSS.
#[component]
pub fn Modal(
    /// Whether the modal is visible
    #[prop(into)]
    open: Signal<bool>,
    /// Invoked when the user clicks the backdrop
    on_close: Callback<()>,
    /// Optional title for the modal header
    #[prop(into, optional)]
    title: String,
    /// Additional CSS classes for the modal content
    #[prop(into, optional)]
    class: String,
    /// Modal content
    children: Children,
) -> impl IntoView {
    let handle_backdrop_click = move |_| {
        on_close.run(());
    };

    let handle_content_click = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
    };

    let has_title = !title.is_empty();

    view! {
        <div
            class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4 transition-opacity duration-200"
            style:display=move || if open.get() { "flex" } else { "none" }
            on:click=handle_backdrop_click
        >
            <div
                class=format!("bg-white rounded-2xl border border-gray-200 shadow-2xl overflow-hidden max-w-md w-full {class}")
                on:click=handle_content_click
            >
                {if has_title {
                    Some(view! {
                        <div class="px-6 py-4 border-b border-gray-200 flex items-center">
                            <h2 class="text-lg font-bold text-gray-900">{title.clone()}</h2>
                        </div>
                    })
                } else {
                    None
                }}
                {children()}
            </div>
        </div>
    }
}
