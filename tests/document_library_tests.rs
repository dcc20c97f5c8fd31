//! Document Library Tests
//!
//! Tests for upload validation, the upload mutual-exclusion gate, the
//! two-step delete, and read-through cache replacement.

use knowledge_assistant_frontend::api::{DocType, DocumentRecord};
use knowledge_assistant_frontend::services::document_library::{
    validate_upload, DocumentLibraryState, MAX_UPLOAD_BYTES,
};
use leptos::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn record(id: &str, filename: &str) -> DocumentRecord {
    DocumentRecord {
        id: id.to_string(),
        filename: filename.to_string(),
        doc_type: DocType::Pdf,
        chunk_count: 4,
        upload_date: Some("2024-03-01T09:30:00".to_string()),
    }
}

// ============================================================================
// Upload Validation Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_valid_pdf_passes() {
    assert!(validate_upload("manual.pdf", "application/pdf", 1024.0).is_ok());
}

#[wasm_bindgen_test]
fn test_extension_alone_is_enough() {
    // Some browsers report a generic media type for PDFs
    assert!(validate_upload("REPORT.PDF", "application/octet-stream", 1024.0).is_ok());
}

#[wasm_bindgen_test]
fn test_media_type_alone_is_enough() {
    assert!(validate_upload("download", "application/pdf", 1024.0).is_ok());
}

#[wasm_bindgen_test]
fn test_non_pdf_is_rejected_before_any_upload() {
    let err = validate_upload("notes.txt", "text/plain", 1024.0).unwrap_err();
    assert_eq!(err, "Only PDF files are allowed");
}

#[wasm_bindgen_test]
fn test_oversized_file_is_rejected() {
    let fifteen_mib = 15.0 * 1024.0 * 1024.0;
    let err = validate_upload("big.pdf", "application/pdf", fifteen_mib).unwrap_err();
    assert_eq!(err, "File size must be less than 10MB");
}

#[wasm_bindgen_test]
fn test_size_limit_boundary() {
    assert!(validate_upload("edge.pdf", "application/pdf", MAX_UPLOAD_BYTES).is_ok());
    assert!(validate_upload("over.pdf", "application/pdf", MAX_UPLOAD_BYTES + 1.0).is_err());
}

#[wasm_bindgen_test]
fn test_type_check_runs_before_size_check() {
    let err = validate_upload("huge.txt", "text/plain", 50.0 * 1024.0 * 1024.0).unwrap_err();
    assert_eq!(err, "Only PDF files are allowed");
}

// ============================================================================
// Upload Gate Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_upload_gate_is_mutually_exclusive() {
    let library = DocumentLibraryState::new();

    assert!(library.begin_upload());
    assert!(library.is_uploading.get());

    // A second upload while one is in flight is rejected, not queued
    assert!(!library.begin_upload());

    library.finish_upload();
    assert!(!library.is_uploading.get());
    assert!(library.begin_upload());
}

// ============================================================================
// Read-Through Cache Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_new_library_is_empty_and_loading() {
    let library = DocumentLibraryState::new();
    assert!(library.documents.get().is_empty());
    assert!(library.is_loading.get());
}

#[wasm_bindgen_test]
fn test_apply_documents_replaces_the_whole_list() {
    let library = DocumentLibraryState::new();

    library.apply_documents(vec![record("a", "a.pdf"), record("b", "b.pdf")]);
    assert_eq!(library.documents.get().len(), 2);

    // The next reload payload wins outright, no client-side merge
    library.apply_documents(vec![record("c", "c.pdf")]);

    let documents = library.documents.get();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, "c");
    assert!(!library.is_loading.get());
}

#[wasm_bindgen_test]
fn test_failed_reload_keeps_previous_cache() {
    let library = DocumentLibraryState::new();
    library.apply_documents(vec![record("a", "a.pdf")]);

    // On a failed refetch only the loading flag is touched
    library.finish_loading();
    assert_eq!(library.documents.get().len(), 1);
}

// ============================================================================
// Two-Step Delete Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_request_then_confirm_delete() {
    let library = DocumentLibraryState::new();
    let doomed = record("a", "a.pdf");

    library.request_delete(doomed.clone());
    assert_eq!(library.pending_delete.get(), Some(doomed.clone()));

    let confirmed = library.take_pending_delete();
    assert_eq!(confirmed, Some(doomed));
    assert!(library.pending_delete.get().is_none());
}

#[wasm_bindgen_test]
fn test_cancel_delete_clears_pending() {
    let library = DocumentLibraryState::new();

    library.request_delete(record("a", "a.pdf"));
    library.cancel_delete();

    assert!(library.pending_delete.get().is_none());
    assert!(library.take_pending_delete().is_none());
}

#[wasm_bindgen_test]
fn test_delete_is_not_optimistic() {
    let library = DocumentLibraryState::new();
    library.apply_documents(vec![record("a", "a.pdf")]);

    // Requesting and confirming a delete leaves the cache untouched until
    // the reload after the backend acknowledges
    library.request_delete(record("a", "a.pdf"));
    let _ = library.take_pending_delete();
    assert_eq!(library.documents.get().len(), 1);
}
