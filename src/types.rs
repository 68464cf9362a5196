//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Drop Zone Types** - hover state machine for drag & drop
//! - **API Types** - upload endpoint wire contract
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Drop Zone Types
// =============================================================================

/// Drag-lifecycle event kinds observed on the drop zone.
///
/// All four have their default browser handling suppressed; they only
/// drive the [`DropState`] machine (and, for `Drop`, file capture).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    /// Pointer entered the zone with a drag payload.
    Enter,
    /// Pointer is moving over the zone.
    Over,
    /// Pointer left the zone.
    Leave,
    /// Payload was released over the zone.
    Drop,
}

/// Hover state of the drop zone.
///
/// Two states only: enter/over activate, leave/drop deactivate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropState {
    /// No drag in progress over the zone.
    #[default]
    Idle,
    /// A drag payload is hovering over the zone.
    Active,
}

impl DropState {
    /// Next state after a drag-lifecycle event.
    pub fn on_drag(self, kind: DragKind) -> DropState {
        match kind {
            DragKind::Enter | DragKind::Over => DropState::Active,
            DragKind::Leave | DragKind::Drop => DropState::Idle,
        }
    }

    /// Get CSS class for styling the drop zone.
    pub fn css_class(self) -> &'static str {
        match self {
            DropState::Idle => "drop-zone",
            DropState::Active => "drop-zone active",
        }
    }
}

/// Label text for the currently selected file.
pub fn selected_label(name: &str) -> String {
    format!("Selected: {name}")
}

// =============================================================================
// API Types
// =============================================================================

/// Raw response body from the upload endpoint.
///
/// The backend answers with exactly one of two shapes: a success body
/// (`success: true` plus the document fields) or a failure body
/// (`error` text; error responses omit the `success` flag entirely).
/// Both are accepted here and split apart by [`Self::into_result`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, deserialize_with = "deserialize_doc_id")]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub word_count: Option<usize>,
    #[serde(default)]
    pub sentence_count: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadResponse {
    /// Split the wire shape into a success/failure outcome.
    ///
    /// A `success: true` body missing any document field is treated as
    /// malformed rather than rendered with placeholders.
    pub fn into_result(self) -> Result<ProcessedDocument, UploadError> {
        if self.success {
            match (self.doc_id, self.filename, self.word_count, self.sentence_count) {
                (Some(doc_id), Some(filename), Some(word_count), Some(sentence_count)) => {
                    Ok(ProcessedDocument {
                        doc_id,
                        filename,
                        word_count,
                        sentence_count,
                    })
                }
                _ => Err(UploadError::Parse(
                    "success response is missing document fields".to_string(),
                )),
            }
        } else {
            Err(UploadError::Rejected(
                self.error.unwrap_or_else(|| "Upload failed".to_string()),
            ))
        }
    }
}

/// A successfully processed document, ready to study.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Backend identifier, used to build the study page link.
    pub doc_id: String,
    /// Sanitized filename as stored by the backend.
    pub filename: String,
    /// Number of words found in the document.
    pub word_count: usize,
    /// Number of sentences found in the document.
    pub sentence_count: usize,
}

/// The backend emits SQLite row ids as JSON numbers; accept strings too.
fn deserialize_doc_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend upload errors.
///
/// Every failure mode of a submission ends up here and is rendered as
/// a message in the result panel; none of them take the page down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadError {
    /// The request never produced a response.
    Network(String),
    /// The response body was not the expected JSON shape.
    Parse(String),
    /// The server processed the request and reported a failure.
    Rejected(String),
}

impl UploadError {
    /// User-visible message text.
    ///
    /// Server-reported failures surface verbatim; transport and parse
    /// failures surface the underlying error's message. The rendered
    /// markup adds its own `Error: ` prefix.
    pub fn message(&self) -> &str {
        match self {
            UploadError::Network(msg) | UploadError::Parse(msg) | UploadError::Rejected(msg) => msg,
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for UploadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_enter_and_over_activate() {
        assert_eq!(DropState::Idle.on_drag(DragKind::Enter), DropState::Active);
        assert_eq!(DropState::Idle.on_drag(DragKind::Over), DropState::Active);
        assert_eq!(DropState::Active.on_drag(DragKind::Enter), DropState::Active);
        assert_eq!(DropState::Active.on_drag(DragKind::Over), DropState::Active);
    }

    #[test]
    fn drag_leave_and_drop_deactivate() {
        assert_eq!(DropState::Active.on_drag(DragKind::Leave), DropState::Idle);
        assert_eq!(DropState::Active.on_drag(DragKind::Drop), DropState::Idle);
        assert_eq!(DropState::Idle.on_drag(DragKind::Leave), DropState::Idle);
        assert_eq!(DropState::Idle.on_drag(DragKind::Drop), DropState::Idle);
    }

    #[test]
    fn state_after_any_sequence_depends_only_on_last_event() {
        let kinds = [DragKind::Enter, DragKind::Over, DragKind::Leave, DragKind::Drop];
        for &a in &kinds {
            for &b in &kinds {
                for &c in &kinds {
                    let state = DropState::Idle.on_drag(a).on_drag(b).on_drag(c);
                    assert_eq!(state, DropState::Idle.on_drag(c));
                }
            }
        }
    }

    #[test]
    fn css_class_tracks_state() {
        assert_eq!(DropState::Idle.css_class(), "drop-zone");
        assert_eq!(DropState::Active.css_class(), "drop-zone active");
    }

    #[test]
    fn selected_label_formats_name() {
        assert_eq!(selected_label("notes.pdf"), "Selected: notes.pdf");
    }

    #[test]
    fn success_body_maps_to_document() {
        let response = UploadResponse {
            success: true,
            doc_id: Some("42".to_string()),
            filename: Some("a.pdf".to_string()),
            word_count: Some(120),
            sentence_count: Some(8),
            error: None,
        };

        let doc = response.into_result().unwrap();
        assert_eq!(doc.doc_id, "42");
        assert_eq!(doc.filename, "a.pdf");
        assert_eq!(doc.word_count, 120);
        assert_eq!(doc.sentence_count, 8);
    }

    #[test]
    fn failure_body_surfaces_server_text_verbatim() {
        let response = UploadResponse {
            success: false,
            doc_id: None,
            filename: None,
            word_count: None,
            sentence_count: None,
            error: Some("Unsupported file type".to_string()),
        };

        assert_eq!(
            response.into_result(),
            Err(UploadError::Rejected("Unsupported file type".to_string()))
        );
    }

    #[test]
    fn failure_body_without_text_gets_generic_message() {
        let response = UploadResponse {
            success: false,
            doc_id: None,
            filename: None,
            word_count: None,
            sentence_count: None,
            error: None,
        };

        assert_eq!(
            response.into_result(),
            Err(UploadError::Rejected("Upload failed".to_string()))
        );
    }

    #[test]
    fn incomplete_success_body_is_a_parse_error() {
        let response = UploadResponse {
            success: true,
            doc_id: Some("7".to_string()),
            filename: Some("a.pdf".to_string()),
            word_count: None,
            sentence_count: Some(8),
            error: None,
        };

        assert!(matches!(response.into_result(), Err(UploadError::Parse(_))));
    }

    #[test]
    fn error_display_is_the_raw_message() {
        assert_eq!(
            UploadError::Rejected("Invalid file type".to_string()).to_string(),
            "Invalid file type"
        );
        assert_eq!(
            UploadError::Network("Failed to fetch".to_string()).to_string(),
            "Failed to fetch"
        );
    }
}
