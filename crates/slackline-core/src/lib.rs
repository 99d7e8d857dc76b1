//! Registry-driven decoding of Slack event payloads.
//!
//! Every payload Slack delivers, over the Events API or the RTM socket,
//! carries a top-level `type` discriminant. This crate resolves that
//! discriminant against a closed registry of event shapes and decodes the
//! payload into the matching strongly-typed value. Events API callbacks wrap
//! an independently-typed inner event; the envelope is decoded first and the
//! inner payload is resolved through the same registry in a second, bounded
//! pass.
//!
//! ```
//! use slackline_core::{unmarshal_event, Event};
//!
//! let raw = br#"{"token":"T","challenge":"C","type":"url_verification"}"#;
//! let event = unmarshal_event(raw).unwrap();
//! assert!(matches!(event, Event::UrlVerification(ref v) if v.challenge == "C"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod decode;
pub mod envelope;
pub mod error;
pub mod events;
pub mod registry;
pub mod time;

pub use config::DecoderConfig;
pub use decode::{resolve_kind, unmarshal_event, Decoder, MAX_ENVELOPE_DEPTH};
pub use envelope::{EventCallback, EventUrlVerification};
pub use error::{DecodeError, Result};
pub use registry::{Event, EventKind};
pub use time::parse_slack_ts;
