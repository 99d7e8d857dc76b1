//! Test fixtures and property-testing utilities.
//!
//! Provides canonical event payloads, a builder for Events API envelopes
//! that keeps the inner payload text verbatim, and proptest strategies for
//! discriminants and envelope fields.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{
    minimal_payload, sample_payload, EnvelopeBuilder, MESSAGE_CHANNELS_JSON, REACTION_ADDED_JSON,
    URL_VERIFICATION_JSON,
};
