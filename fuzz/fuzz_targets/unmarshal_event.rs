#![no_main]

//! Fuzz target for event decoding.
//!
//! Decoding must never panic, and every failure must carry a stable code.
//! Unknown events must hand back exactly the payload that carried them.

use libfuzzer_sys::fuzz_target;
use slackline_core::{unmarshal_event, Decoder, DecoderConfig};

fuzz_target!(|data: &[u8]| {
    match unmarshal_event(data) {
        Ok(event) => {
            // A decoded event re-encodes and decodes to the same kind.
            if let Ok(reencoded) = serde_json::to_vec(&event) {
                if let Ok(again) = unmarshal_event(&reencoded) {
                    assert_eq!(again.kind(), event.kind());
                }
            }
        },
        Err(err) => {
            assert!(err.code().starts_with("E100"));
            if let Some(raw) = err.raw_payload() {
                assert!(!raw.is_empty());
            }
        },
    }

    // A tight limit rejects by size before parsing anything.
    let small = Decoder::new(DecoderConfig { max_payload_bytes: 64 });
    if data.len() > 64 {
        assert_eq!(small.decode(data).map(|_| ()).unwrap_err().code(), "E1003");
    }
});
