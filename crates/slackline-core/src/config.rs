//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Default payload size limit (10 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Limits applied by a [`Decoder`](crate::Decoder) before any parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Payloads larger than this are rejected with `PayloadTooLarge`.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self { max_payload_bytes: default_max_payload_bytes() }
    }
}

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}
