//! Error types for event decoding.
//!
//! Every failure is terminal for the payload that caused it: nothing is
//! retried and no partially decoded value is returned. Codes are stable so
//! callers can count, route or quarantine failures without matching on
//! message text.

use bytes::Bytes;
use thiserror::Error;

/// Result type alias using `DecodeError`.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Decode error types with stable codes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload is not valid JSON, or does not fit the resolved shape (E1001).
    #[error("[E1001] Malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Discriminant is not present in the registry (E1002).
    #[error("[E1002] Unknown event type: received unmapped event {discriminant:?}")]
    UnknownEventType {
        /// The `type` value that failed to resolve
        discriminant: String,
        /// The complete payload that carried it
        raw: Bytes,
    },

    /// Payload exceeds the configured size limit (E1003).
    #[error("[E1003] Payload too large: size {size_bytes} bytes exceeds {limit_bytes} byte limit")]
    PayloadTooLarge {
        /// Size of the rejected payload in bytes
        size_bytes: usize,
        /// Configured limit in bytes
        limit_bytes: usize,
    },

    /// An envelope was found where only a plain event may appear (E1004).
    #[error("[E1004] Nesting too deep: envelopes may be nested at most {max_depth} level(s)")]
    NestingTooDeep {
        /// Maximum envelope depth accepted by the decoder
        max_depth: usize,
    },
}

impl DecodeError {
    /// Creates an unknown event type error, copying the payload.
    pub fn unknown_event(discriminant: impl Into<String>, raw: &[u8]) -> Self {
        Self::UnknownEventType { discriminant: discriminant.into(), raw: Bytes::copy_from_slice(raw) }
    }

    /// Returns the error code (E1001-E1004).
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "E1001",
            Self::UnknownEventType { .. } => "E1002",
            Self::PayloadTooLarge { .. } => "E1003",
            Self::NestingTooDeep { .. } => "E1004",
        }
    }

    /// Returns whether the payload was well-formed but carried an
    /// unregistered discriminant.
    pub const fn is_unknown_event(&self) -> bool {
        matches!(self, Self::UnknownEventType { .. })
    }

    /// Returns the unmapped discriminant, if this is an unknown event.
    pub fn discriminant(&self) -> Option<&str> {
        match self {
            Self::UnknownEventType { discriminant, .. } => Some(discriminant),
            _ => None,
        }
    }

    /// Returns the preserved payload of an unknown event.
    ///
    /// For an unknown inner event this is the inner payload, not the
    /// envelope around it.
    pub fn raw_payload(&self) -> Option<&Bytes> {
        match self {
            Self::UnknownEventType { raw, .. } => Some(raw),
            _ => None,
        }
    }
}
