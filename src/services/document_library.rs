//! Library view-model for the uploaded-documents panel.
//!
//! The cached document list is a read-through cache of the backend's
//! corpus: it is replaced wholesale by each reload and never patched in
//! place, so server-assigned ids, counts, and timestamps cannot drift.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::{self, DocumentRecord};
use crate::services::notification::{NotificationKind, NotificationState};

/// Upload size limit; the backend only indexes small PDFs.
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Checks a candidate file before any network traffic. A file passes when
/// either its declared media type or its name extension indicates a PDF,
/// and it does not exceed the size limit.
pub fn validate_upload(filename: &str, content_type: &str, size_bytes: f64) -> Result<(), String> {
    if content_type != "application/pdf" && !filename.to_lowercase().ends_with(".pdf") {
        return Err("Only PDF files are allowed".to_string());
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err("File size must be less than 10MB".to_string());
    }
    Ok(())
}

#[derive(Clone)]
pub struct DocumentLibraryState {
    pub documents: RwSignal<Vec<DocumentRecord>>,
    pub is_loading: RwSignal<bool>,
    pub is_uploading: RwSignal<bool>,
    pub pending_delete: RwSignal<Option<DocumentRecord>>,
}

impl DocumentLibraryState {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            is_loading: RwSignal::new(true),
            is_uploading: RwSignal::new(false),
            pending_delete: RwSignal::new(None),
        }
    }

    /// Replaces the cached list wholesale; the backend's ordering wins.
    pub fn apply_documents(&self, documents: Vec<DocumentRecord>) {
        self.documents.set(documents);
        self.is_loading.set(false);
    }

    pub fn finish_loading(&self) {
        self.is_loading.set(false);
    }

    /// Claims the upload gate. Returns `false` when an upload is already in
    /// flight; the caller must then drop the file rather than queue it.
    pub fn begin_upload(&self) -> bool {
        if self.is_uploading.get_untracked() {
            return false;
        }
        self.is_uploading.set(true);
        true
    }

    pub fn finish_upload(&self) {
        self.is_uploading.set(false);
    }

    /// First half of the two-step delete: remember what the user asked to
    /// remove so the confirmation dialog can show it.
    pub fn request_delete(&self, record: DocumentRecord) {
        self.pending_delete.set(Some(record));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Second half of the two-step delete: hand the confirmed record to the
    /// caller and clear the pending slot.
    pub fn take_pending_delete(&self) -> Option<DocumentRecord> {
        let pending = self.pending_delete.get_untracked();
        self.pending_delete.set(None);
        pending
    }
}

impl Default for DocumentLibraryState {
    fn default() -> Self {
        Self::new()
    }
}

/// Refetches the document list. On failure the previous cache stays
/// untouched and the user gets a transient error notification.
pub fn reload(state: DocumentLibraryState, notifier: NotificationState) {
    spawn_local(async move {
        match api::list_documents().await {
            Ok(documents) => state.apply_documents(documents),
            Err(e) => {
                log::warn!("Failed to load documents: {}", e);
                state.finish_loading();
                notifier.show(NotificationKind::Error, "Failed to load documents");
            }
        }
    });
}

/// Validates and uploads one file, then refetches the list regardless of
/// the outcome. A second upload attempted while one is in flight is
/// rejected here, not queued.
pub fn upload(state: DocumentLibraryState, notifier: NotificationState, file: File) {
    if let Err(message) = validate_upload(&file.name(), &file.type_(), file.size()) {
        notifier.show(NotificationKind::Error, message);
        return;
    }
    if !state.begin_upload() {
        return;
    }
    spawn_local(async move {
        match api::upload_document(&file).await {
            Ok(()) => notifier.show(
                NotificationKind::Success,
                format!("{} uploaded successfully!", file.name()),
            ),
            Err(e) => {
                log::warn!("Failed to upload {}: {}", file.name(), e);
                notifier.show(NotificationKind::Error, e);
            }
        }
        state.finish_upload();
        reload(state.clone(), notifier.clone());
    });
}

/// Issues the delete for the record the user confirmed. No optimistic
/// removal: the record stays visible until the reload confirms it is gone.
pub fn confirm_delete(state: DocumentLibraryState, notifier: NotificationState) {
    let Some(record) = state.take_pending_delete() else {
        return;
    };
    spawn_local(async move {
        match api::delete_document(&record.id).await {
            Ok(()) => {
                notifier.show(NotificationKind::Success, "Document deleted successfully");
                reload(state.clone(), notifier.clone());
            }
            Err(e) => {
                log::warn!("Failed to delete {}: {}", record.filename, e);
                notifier.show(NotificationKind::Error, "Failed to delete document");
            }
        }
    });
}

pub fn provide_document_library() {
    provide_context(DocumentLibraryState::new());
}

pub fn use_document_library() -> DocumentLibraryState {
    expect_context::<DocumentLibraryState>()
}
