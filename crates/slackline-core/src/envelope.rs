//! Events API wrapper shapes.
//!
//! An `event_callback` payload carries workspace metadata plus an inner
//! event that has its own `type`. The outer fields are decoded first with
//! the inner payload held verbatim as a [`RawValue`]; the inner payload is
//! then resolved through the registry in a second pass. A failure in that
//! pass fails the whole envelope.
//!
//! ```text
//! {"type":"event_callback", "team_id":..., "event":{"type":"reaction_added", ...}}
//!         │                                        │
//!         └─ pass 1: EventCallbackWire             └─ pass 2: Decoder at depth + 1
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use tracing::trace;

use crate::{decode::Decoder, events::nullable, parse_slack_ts, Event, EventKind, Result};

/// Events API callback wrapping an independently-typed inner event.
///
/// `event` is always populated on a successfully decoded callback; there is
/// no state in which the outer fields are available but the inner event is
/// not.
#[derive(Debug, Clone, Serialize)]
pub struct EventCallback {
    /// Verification token of the app.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub token: String,
    /// Workspace the event originated in.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub team_id: String,
    /// App the event is delivered to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_app_id: String,
    /// The inner payload exactly as received.
    #[serde(rename = "event")]
    pub raw_event: Box<RawValue>,
    /// The inner payload decoded through the registry.
    #[serde(skip)]
    pub event: Event,
    /// When the inner event occurred.
    pub event_ts: String,
    /// Always `event_callback`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Users the event is addressed to.
    pub authed_users: Vec<String>,
}

impl EventCallback {
    /// Returns the kind of the wrapped event.
    pub fn inner_kind(&self) -> EventKind {
        self.event.kind()
    }

    /// Returns `event_ts` as a UTC instant, if it parses.
    pub fn event_time(&self) -> Option<DateTime<Utc>> {
        parse_slack_ts(&self.event_ts)
    }
}

impl PartialEq for EventCallback {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
            && self.team_id == other.team_id
            && self.api_app_id == other.api_app_id
            && self.raw_event.get() == other.raw_event.get()
            && self.event == other.event
            && self.event_ts == other.event_ts
            && self.event_type == other.event_type
            && self.authed_users == other.authed_users
    }
}

/// Outer fields of an `event_callback`, with the inner event left raw.
#[derive(Debug, Deserialize)]
struct EventCallbackWire {
    #[serde(default, deserialize_with = "nullable")]
    token: String,
    #[serde(default, deserialize_with = "nullable")]
    team_id: String,
    #[serde(default, deserialize_with = "nullable")]
    api_app_id: String,
    event: Box<RawValue>,
    #[serde(default, deserialize_with = "nullable")]
    event_ts: String,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    event_type: String,
    #[serde(default, deserialize_with = "nullable")]
    authed_users: Vec<String>,
}

/// Decodes an `event_callback` payload found at `depth`.
///
/// The inner payload is handed back to `decoder` one level deeper, where
/// the decoder enforces its nesting limit.
pub(crate) fn decode_envelope(
    decoder: &Decoder,
    raw: &[u8],
    depth: usize,
) -> Result<EventCallback> {
    let wire: EventCallbackWire = serde_json::from_slice(raw)?;
    trace!(team_id = %wire.team_id, api_app_id = %wire.api_app_id, "decoded envelope fields");

    let event = decoder.decode_at_depth(wire.event.get().as_bytes(), depth + 1)?;

    Ok(EventCallback {
        token: wire.token,
        team_id: wire.team_id,
        api_app_id: wire.api_app_id,
        raw_event: wire.event,
        event,
        event_ts: wire.event_ts,
        event_type: wire.event_type,
        authed_users: wire.authed_users,
    })
}

/// Handshake Slack sends when an Events API request URL is configured.
///
/// A flat shape with no nested payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventUrlVerification {
    /// Verification token of the app.
    #[serde(deserialize_with = "nullable")]
    pub token: String,
    /// Value the endpoint must echo back.
    #[serde(deserialize_with = "nullable")]
    pub challenge: String,
    /// Always `url_verification`.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub event_type: String,
}

impl EventUrlVerification {
    /// Returns the body a request URL answers the handshake with.
    pub fn challenge_response(&self) -> serde_json::Value {
        serde_json::json!({ "challenge": self.challenge })
    }
}
