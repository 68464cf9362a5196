//! Application configuration.
//!
//! Centralized configuration for the Study Assistant frontend.
//! The backend is same-origin, so endpoints are plain paths; during
//! development trunk proxies them to the Flask server.

/// Upload endpoint path.
///
/// Accepts a multipart POST with the document in the `file` field.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Study page path prefix.
///
/// The per-document study page lives at `{STUDY_PAGE_PREFIX}/{doc_id}`.
pub const STUDY_PAGE_PREFIX: &str = "/study";

/// Application name shown in the page chrome.
pub const APP_NAME: &str = "Study Assistant";

/// File extensions the backend accepts.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "txt", "docx"];

/// Maximum upload size accepted by the backend (in bytes).
///
/// 16 MB limit.
pub const MAX_FILE_SIZE: usize = 16 * 1024 * 1024;

/// Prompt shown in the drop zone before a file is selected.
pub const DROP_ZONE_PROMPT: &str = "Drag & drop your document here, or click to browse";

/// URL of the study page for a processed document.
pub fn study_page_url(doc_id: &str) -> String {
    format!("{STUDY_PAGE_PREFIX}/{doc_id}")
}

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}
