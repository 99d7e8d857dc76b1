//! Proptest strategies for discriminants and envelope contents.

#![allow(clippy::expect_used)] // Strategy regex patterns are known to be valid

use proptest::{
    collection::vec,
    prelude::Strategy,
    sample::select,
    string::string_regex,
};
use slackline_core::{registry, EventKind};

use crate::fixtures::EnvelopeBuilder;

/// Any registered discriminant, aliases included.
pub fn known_discriminant() -> impl Strategy<Value = &'static str> {
    select(registry::discriminants().collect::<Vec<_>>())
}

/// Any registered discriminant except the envelope's.
pub fn flat_discriminant() -> impl Strategy<Value = &'static str> {
    select(
        registry::entries()
            .filter(|(_, kind)| !kind.is_envelope())
            .map(|(discriminant, _)| discriminant)
            .collect::<Vec<_>>(),
    )
}

/// Discriminant-like strings the registry does not know.
pub fn unknown_discriminant() -> impl Strategy<Value = String> {
    string_regex("[a-z][a-z_.]{0,31}")
        .expect("valid discriminant regex")
        .prop_filter("must not be registered", |d| registry::lookup(d).is_none())
}

/// Slack object ID with the given prefix (`U` for users, `C` for channels).
pub fn slack_id(prefix: char) -> impl Strategy<Value = String> {
    string_regex("[A-Z0-9]{8,10}").expect("valid id regex").prop_map(move |id| format!("{prefix}{id}"))
}

/// Slack timestamp with microsecond precision.
pub fn slack_ts() -> impl Strategy<Value = String> {
    (1_000_000_000u64..2_000_000_000, 0u32..1_000_000)
        .prop_map(|(secs, micros)| format!("{secs}.{micros:06}"))
}

/// Free text including quotes, escapes and non-ASCII characters.
pub fn message_text() -> impl Strategy<Value = String> {
    string_regex("[a-zA-Z0-9 \"\\\\\n\t:_é✓]{0,64}").expect("valid text regex")
}

/// Outer envelope fields, generated independently of the inner payload.
#[derive(Debug, Clone)]
pub struct EnvelopeFields {
    /// Verification token.
    pub token: String,
    /// Workspace ID.
    pub team_id: String,
    /// App ID.
    pub api_app_id: String,
    /// Event timestamp.
    pub event_ts: String,
    /// Addressed users.
    pub authed_users: Vec<String>,
}

impl EnvelopeFields {
    /// Wraps `inner` in an envelope carrying these fields.
    pub fn wrap(&self, inner: impl Into<String>) -> EnvelopeBuilder {
        EnvelopeBuilder::new(inner)
            .token(self.token.clone())
            .team_id(self.team_id.clone())
            .api_app_id(self.api_app_id.clone())
            .event_ts(self.event_ts.clone())
            .authed_users(self.authed_users.clone())
    }
}

/// Strategy for envelope metadata.
pub fn envelope_fields() -> impl Strategy<Value = EnvelopeFields> {
    (
        string_regex("[a-zA-Z0-9]{24}").expect("valid token regex"),
        slack_id('T'),
        slack_id('A'),
        slack_ts(),
        vec(slack_id('U'), 0..4),
    )
        .prop_map(|(token, team_id, api_app_id, event_ts, authed_users)| EnvelopeFields {
            token,
            team_id,
            api_app_id,
            event_ts,
            authed_users,
        })
}

/// Any registered kind.
pub fn event_kind() -> impl Strategy<Value = EventKind> {
    select(EventKind::ALL.to_vec())
}

/// Inner payloads that are well-formed `message.*` events.
pub fn message_payload() -> impl Strategy<Value = (String, serde_json::Value)> {
    (
        select(vec!["message", "message.channels", "message.groups", "message.im", "message.mpim"]),
        slack_id('C'),
        slack_id('U'),
        message_text(),
        slack_ts(),
    )
        .prop_map(|(discriminant, channel, user, text, ts)| {
            let value = serde_json::json!({
                "type": discriminant,
                "channel": channel,
                "user": user,
                "text": text,
                "ts": ts,
            });
            (value.to_string(), value)
        })
}
