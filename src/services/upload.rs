//! HTTP service for submitting the upload form to the backend.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::config::UPLOAD_ENDPOINT;
use crate::types::{ProcessedDocument, UploadError, UploadResponse};

/// Submit the assembled multipart form to the upload endpoint.
///
/// One request per call, no retries, no client-side timeout. Non-2xx
/// statuses are not special-cased: the backend sends its error JSON
/// with 4xx/5xx codes, so the body decides the outcome either way.
pub async fn submit_document(form_data: FormData) -> Result<ProcessedDocument, UploadError> {
    let request = Request::post(UPLOAD_ENDPOINT)
        .body(form_data)
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let body: UploadResponse = response
        .json()
        .await
        .map_err(|e| UploadError::Parse(e.to_string()))?;

    body.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_deserialization() {
        let json = r#"{
            "success": true,
            "doc_id": "42",
            "filename": "a.pdf",
            "word_count": 120,
            "sentence_count": 8
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        let doc = response.into_result().unwrap();
        assert_eq!(doc.doc_id, "42");
        assert_eq!(doc.filename, "a.pdf");
        assert_eq!(doc.word_count, 120);
        assert_eq!(doc.sentence_count, 8);
    }

    #[test]
    fn test_numeric_doc_id_deserialization() {
        // The backend stores documents in SQLite and returns the row id.
        let json = r#"{
            "success": true,
            "doc_id": 7,
            "filename": "lecture-notes.txt",
            "word_count": 5321,
            "sentence_count": 240
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_result().unwrap().doc_id, "7");
    }

    #[test]
    fn test_failure_response_deserialization() {
        let json = r#"{"success": false, "error": "Unsupported file type"}"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_result(),
            Err(UploadError::Rejected("Unsupported file type".to_string()))
        );
    }

    #[test]
    fn test_bare_error_response_deserialization() {
        // 4xx bodies omit the success flag entirely.
        let json = r#"{"error": "No file provided"}"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_result(),
            Err(UploadError::Rejected("No file provided".to_string()))
        );
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        let result: Result<UploadResponse, _> = serde_json::from_str("<!doctype html>");
        assert!(result.is_err());
    }
}
