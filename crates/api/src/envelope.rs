//! The uniform success/error envelope returned by every operation.

use serde::Serialize;
use serde_json::Value;

/// Discriminator value carried by every envelope document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Result document for one operation: either the operation-specific success
/// payload or a single error document.
///
/// Serialized untagged; each payload carries its own `status` field, so the
/// wire shape is flat.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Success(T),
    Error(ErrorEnvelope),
}

impl<T: Serialize> Envelope<T> {
    /// Serialize to the pretty-printed text form handed back to callers.
    #[must_use]
    pub fn to_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            r#"{"status": "error", "message": "envelope serialization failed"}"#.to_string()
        })
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Error document. Only the fields the failing branch produced are
/// serialized; there is no partial-success shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub troubleshooting: Option<Value>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            details: None,
            suggestion: None,
            timestamp: None,
            troubleshooting: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = Some(now_iso());
        self
    }

    #[must_use]
    pub fn with_troubleshooting(mut self, troubleshooting: Value) -> Self {
        self.troubleshooting = Some(troubleshooting);
        self
    }
}

/// Current local time in the ISO-8601 form used in error and status
/// documents.
#[must_use]
pub fn now_iso() -> String {
    chrono::Local::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::{Envelope, ErrorEnvelope};
    use serde_json::{Value, json};

    #[test]
    fn error_envelope_serializes_only_populated_fields() {
        let envelope: Envelope<()> = Envelope::Error(
            ErrorEnvelope::new("API request failed with status 500").with_details("boom"),
        );
        let value: Value = serde_json::from_str(&envelope.to_text()).expect("valid JSON");

        assert_eq!(value["status"], json!("error"));
        assert_eq!(value["message"], json!("API request failed with status 500"));
        assert_eq!(value["details"], json!("boom"));
        let obj = value.as_object().expect("object");
        assert!(!obj.contains_key("suggestion"));
        assert!(!obj.contains_key("timestamp"));
        assert!(!obj.contains_key("troubleshooting"));
    }

    #[test]
    fn with_timestamp_stamps_the_document() {
        let envelope = ErrorEnvelope::new("Unexpected error: boom").with_timestamp();
        let ts = envelope.timestamp.expect("timestamp set");
        assert!(ts.contains('T'), "expected ISO-8601 timestamp, got {ts}");
    }

    #[test]
    fn success_variant_is_not_an_error() {
        let envelope = Envelope::Success(json!({"status": "success"}));
        assert!(!envelope.is_error());
        assert!(envelope.to_text().contains("\"success\""));
    }
}
