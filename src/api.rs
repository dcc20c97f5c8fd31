//! REST client for the knowledge-base backend.
//!
//! Thin typed wrappers around the backend's endpoints. Every function
//! returns `Result<T, String>` with a message fit to show the user;
//! non-2xx responses surface the server's `detail` field when present.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};
use web_sys::FormData;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend base URL, overridable at build time via `KNOWLEDGE_API_URL`.
pub fn api_base_url() -> &'static str {
    option_env!("KNOWLEDGE_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn endpoint(path: &str) -> String {
    format!("{}{}", api_base_url().trim_end_matches('/'), path)
}

// ============================================================================
// Wire types
// ============================================================================

/// Payload of the startup health probe (`GET /`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    pub generation_configured: bool,
}

/// A retrieved excerpt attached to an answer, with its provenance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Citation {
    pub document_name: String,
    pub chunk_text: String,
    #[serde(default)]
    pub relevance_score: f32,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub start_line: Option<u32>,
    #[serde(default)]
    pub end_line: Option<u32>,
}

/// Payload of `POST /api/query`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Citation>,
}

/// Document kind as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Pdf,
    Text,
    #[serde(other)]
    Other,
}

impl DocType {
    pub fn icon(&self) -> &'static str {
        match self {
            DocType::Pdf => "📕",
            DocType::Text | DocType::Other => "📄",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocType::Pdf => "PDF",
            DocType::Text => "TEXT",
            DocType::Other => "FILE",
        }
    }
}

/// One item of `GET /api/documents`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub filename: String,
    pub doc_type: DocType,
    pub chunk_count: u32,
    #[serde(default)]
    pub upload_date: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Extracts the server-supplied `detail` message from a failed response,
/// falling back to the HTTP status.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            detail: Some(detail),
        }) if !detail.is_empty() => detail,
        _ => format!("HTTP error: {}", status),
    }
}

// ============================================================================
// Endpoints
// ============================================================================

/// `GET /` - probes reachability and whether generation is configured.
pub async fn check_health() -> Result<HealthStatus, String> {
    let response = Request::get(&endpoint("/"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `POST /api/query` - asks the knowledge base a question.
pub async fn query(text: &str, top_k: u32) -> Result<QueryResponse, String> {
    #[derive(Serialize)]
    struct QueryRequest<'a> {
        query: &'a str,
        top_k: u32,
    }

    let response = Request::post(&endpoint("/api/query"))
        .json(&QueryRequest { query: text, top_k })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `GET /api/documents` - lists the backend's corpus.
pub async fn list_documents() -> Result<Vec<DocumentRecord>, String> {
    let response = Request::get(&endpoint("/api/documents"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// `POST /api/documents/upload` - multipart upload of one file under the
/// `file` form field. The response body is ignored; callers refetch the
/// document list instead of patching it.
pub async fn upload_document(file: &web_sys::File) -> Result<(), String> {
    let form = FormData::new().map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Failed to attach file to upload form".to_string())?;

    let response = Request::post(&endpoint("/api/documents/upload"))
        .body(form)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// `DELETE /api/documents/{id}` - removes one document. The response body
/// is ignored; callers refetch the document list.
pub async fn delete_document(id: &str) -> Result<(), String> {
    let response = Request::delete(&endpoint(&format!("/api/documents/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_response_defaults_missing_sources_to_empty() {
        let response: QueryResponse = serde_json::from_str(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(response.answer, "42");
        assert!(response.sources.is_empty());
    }

    #[test]
    fn citation_parses_optional_provenance() {
        let json = r#"{
            "document_name": "handbook.pdf",
            "chunk_text": "Refunds are processed within 14 days.",
            "relevance_score": 0.87,
            "page_number": 3,
            "start_line": 10,
            "end_line": 18
        }"#;
        let citation: Citation = serde_json::from_str(json).unwrap();
        assert_eq!(citation.document_name, "handbook.pdf");
        assert_eq!(citation.page_number, Some(3));
        assert_eq!(citation.start_line, Some(10));
        assert_eq!(citation.end_line, Some(18));

        let bare: Citation =
            serde_json::from_str(r#"{"document_name": "a.pdf", "chunk_text": "x"}"#).unwrap();
        assert_eq!(bare.page_number, None);
        assert_eq!(bare.start_line, None);
    }

    #[test]
    fn document_record_parses_doc_type() {
        let json = r#"[
            {"id": "1", "filename": "a.pdf", "doc_type": "pdf", "chunk_count": 12,
             "upload_date": "2024-03-01T09:30:00"},
            {"id": "2", "filename": "b.txt", "doc_type": "text", "chunk_count": 3},
            {"id": "3", "filename": "c.bin", "doc_type": "parquet", "chunk_count": 1}
        ]"#;
        let records: Vec<DocumentRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].doc_type, DocType::Pdf);
        assert_eq!(records[1].doc_type, DocType::Text);
        assert_eq!(records[2].doc_type, DocType::Other);
        assert_eq!(records[1].upload_date, None);
    }

    #[test]
    fn error_body_detail_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Only PDF files"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Only PDF files"));

        let empty: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.detail.is_none());
    }

    #[test]
    fn health_status_parses_probe_payload() {
        let json = r#"{"status": "warning", "message": "API key not configured",
                       "generation_configured": false}"#;
        let health: HealthStatus = serde_json::from_str(json).unwrap();
        assert!(!health.generation_configured);
    }
}
