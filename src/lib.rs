//! Stream inspector for captured Slack event traffic.
//!
//! Reads newline-delimited payloads, decodes each with [`slackline_core`],
//! reports one JSON line per payload and quarantines payloads whose event
//! type is not registered.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod inspect;

pub use config::Config;
pub use inspect::{InspectSummary, Inspector, Quarantine, Report};
