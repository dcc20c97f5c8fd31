//! Documents view: upload control, library grid, and delete confirmation.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::DocumentRecord;
use crate::components::design_system::{
    Button, ButtonVariant, Card, CardBody, CardHeader, LoadingSpinner, Modal,
};
use crate::services::document_library::{
    confirm_delete, reload, upload, use_document_library, DocumentLibraryState,
};
use crate::services::notification::use_notification_state;

/// Documents page component
#[component]
pub fn Documents() -> impl IntoView {
    let library = use_document_library();
    let notifier = use_notification_state();
    let documents = library.documents;
    let is_loading = library.is_loading;
    let pending_delete = library.pending_delete;

    // Refetch the corpus whenever the panel is opened.
    Effect::new({
        let library = library.clone();
        let notifier = notifier.clone();
        move |_| reload(library.clone(), notifier.clone())
    });

    let delete_open = Signal::derive(move || pending_delete.get().is_some());
    let delete_prompt = move || {
        pending_delete
            .get()
            .map(|record| format!("Are you sure you want to delete \"{}\"?", record.filename))
            .unwrap_or_default()
    };

    let on_cancel_delete = {
        let library = library.clone();
        Callback::new(move |_: ()| library.cancel_delete())
    };
    let on_cancel_click = {
        let library = library.clone();
        move |_: ev::MouseEvent| library.cancel_delete()
    };
    let on_confirm_click = {
        let library = library.clone();
        let notifier = notifier.clone();
        move |_: ev::MouseEvent| confirm_delete(library.clone(), notifier.clone())
    };

    view! {
        <div class="flex-1 flex flex-col h-full">
            // Header
            <div class="border-b border-gray-200 bg-white p-6">
                <div class="max-w-6xl mx-auto flex items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold text-gray-900">"Document Manager"</h2>
                        <p class="text-gray-500 mt-1">
                            "Upload and manage your knowledge base documents"
                        </p>
                    </div>
                    <UploadButton label="Upload Document" />
                </div>
            </div>

            // Document list
            <div class="flex-1 overflow-y-auto p-6 bg-gray-50">
                <div class="max-w-6xl mx-auto">
                    {move || {
                        if is_loading.get() {
                            view! {
                                <div class="flex flex-col items-center justify-center h-64 gap-4">
                                    <LoadingSpinner size="lg" />
                                    <p class="text-gray-500">"Loading documents..."</p>
                                </div>
                            }
                            .into_any()
                        } else if documents.get().is_empty() {
                            view! { <EmptyLibraryState /> }.into_any()
                        } else {
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    <For
                                        each=move || documents.get()
                                        key=|record| record.id.clone()
                                        children=move |record| view! { <DocumentCard record=record /> }
                                    />
                                </div>
                                <SupportedFormats />
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>

            // Delete confirmation
            <Modal open=delete_open on_close=on_cancel_delete title="Delete Document">
                <div class="p-6 space-y-4">
                    <p class="text-gray-700">{delete_prompt}</p>
                    <div class="flex justify-end gap-3">
                        <Button variant=ButtonVariant::Secondary on_click=on_cancel_click>
                            "Cancel"
                        </Button>
                        <Button variant=ButtonVariant::Danger on_click=on_confirm_click>
                            "Delete"
                        </Button>
                    </div>
                </div>
            </Modal>
        </div>
    }
}

/// Hidden file input dressed as a button. The input is reset after every
/// pick so selecting the same file twice still fires `change`.
#[component]
fn UploadButton(label: &'static str) -> impl IntoView {
    let library = use_document_library();
    let notifier = use_notification_state();
    let is_uploading = library.is_uploading;

    let on_file_change = {
        let library = library.clone();
        let notifier = notifier.clone();
        move |evt: ev::Event| {
            let Some(input) = evt
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                upload(library.clone(), notifier.clone(), file);
            }
            input.set_value("");
        }
    };

    view! {
        <label class=move || {
            if is_uploading.get() { "pointer-events-none" } else { "cursor-pointer" }
        }>
            <input
                type="file"
                accept=".pdf,application/pdf"
                class="hidden"
                prop:disabled=move || is_uploading.get()
                on:change=on_file_change
            />
            <div class=move || format!(
                "flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-blue-500 to-indigo-600 \
                 text-white rounded-xl font-medium hover:from-blue-600 hover:to-indigo-700 \
                 transition-all shadow-lg hover:shadow-xl {}",
                if is_uploading.get() { "opacity-50 cursor-not-allowed" } else { "" },
            )>
                {move || if is_uploading.get() { "Uploading..." } else { label }}
            </div>
        </label>
    }
}

/// One document in the grid
#[component]
fn DocumentCard(record: DocumentRecord) -> impl IntoView {
    let library: DocumentLibraryState = use_document_library();

    let upload_date = record
        .upload_date
        .as_deref()
        .map(|date| date.split('T').next().unwrap_or(date).to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let on_delete_click = {
        let record = record.clone();
        move |_: ev::MouseEvent| library.request_delete(record.clone())
    };

    view! {
        <Card class="p-5 hover:shadow-lg transition-shadow">
            <div class="flex items-start justify-between mb-3">
                <div class="flex items-center gap-3 min-w-0">
                    <span class="text-3xl">{record.doc_type.icon()}</span>
                    <div class="flex-1 min-w-0">
                        <h3 class="text-sm font-semibold text-gray-900 truncate">
                            {record.filename.clone()}
                        </h3>
                        <p class="text-xs text-gray-500">
                            {format!("{} chunks", record.chunk_count)}
                        </p>
                    </div>
                </div>
                <button
                    class="p-2 text-gray-400 hover:text-red-500 hover:bg-red-50 rounded-lg transition-colors"
                    title="Delete document"
                    on:click=on_delete_click
                >
                    "🗑"
                </button>
            </div>

            <div class="border-t border-gray-200 pt-3 space-y-1">
                <div class="flex items-center justify-between text-xs">
                    <span class="text-gray-500">"Type"</span>
                    <span class="text-gray-700 font-medium">{record.doc_type.label()}</span>
                </div>
                <div class="flex items-center justify-between text-xs">
                    <span class="text-gray-500">"Uploaded"</span>
                    <span class="text-gray-700 font-medium">{upload_date}</span>
                </div>
            </div>
        </Card>
    }
}

/// Empty state when no documents have been uploaded yet
#[component]
fn EmptyLibraryState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-64 text-center">
            <div class="w-24 h-24 bg-gray-200 rounded-full flex items-center justify-center mb-4 text-4xl">
                "📄"
            </div>
            <h3 class="text-xl font-semibold text-gray-700 mb-2">"No documents yet"</h3>
            <p class="text-gray-500 mb-6">
                "Upload your first document to get started with the AI assistant"
            </p>
            <UploadButton label="Upload Your First Document" />
        </div>
    }
}

/// Info card listing the accepted upload formats
#[component]
fn SupportedFormats() -> impl IntoView {
    view! {
        <Card class="mt-8 bg-blue-50 border-blue-200">
            <CardHeader class="bg-blue-50 border-blue-200">
                <h3 class="font-semibold text-blue-900">"Supported File Types"</h3>
            </CardHeader>
            <CardBody>
                <p class="text-sm text-blue-800">
                    <strong>"PDF: "</strong>
                    ".pdf (max 10MB)"
                </p>
                <p class="text-xs text-blue-700 mt-2">
                    "Documents are automatically split into chunks and embedded for retrieval."
                </p>
            </CardBody>
        </Card>
    }
}
