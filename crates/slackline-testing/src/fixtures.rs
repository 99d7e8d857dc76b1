//! Canonical payloads and an envelope builder.
//!
//! Payload constants are written the way Slack documents them, including
//! whitespace, so tests can compare an envelope's raw inner payload against
//! the exact text that went in.

use bytes::Bytes;
use serde_json::{json, Value};
use slackline_core::EventKind;

/// Verification token used by default envelopes.
pub const DEFAULT_TOKEN: &str = "z26uFbvR1xHJEdHE1OQiO6t8";
/// Workspace ID used by default envelopes.
pub const DEFAULT_TEAM_ID: &str = "T061EG9RZ";
/// App ID used by default envelopes.
pub const DEFAULT_API_APP_ID: &str = "A0FFV41KK";
/// Event timestamp used by default envelopes.
pub const DEFAULT_EVENT_TS: &str = "1465244570.336841";
/// Addressee used by default envelopes.
pub const DEFAULT_AUTHED_USER: &str = "U061F7AUR";

/// `reaction_added` on a message.
pub const REACTION_ADDED_JSON: &str = r#"{
  "type": "reaction_added",
  "user": "U061F1EUR",
  "item": {
          "type": "message",
          "channel": "C061EG9SL",
          "ts": "1464196127.000002"
  },
  "reaction": "slightly_smiling_face"
}"#;

/// Channel message delivered through the `message.channels` subscription.
pub const MESSAGE_CHANNELS_JSON: &str = r#"{
    "type": "message.channels",
    "channel": "C2147483705",
    "user": "U2147483697",
    "text": "Hello world",
    "ts": "1355517523.000005"
}"#;

/// Request URL handshake.
pub const URL_VERIFICATION_JSON: &str = r#"
{
  "token": "Jhj5dZrVaK7ZwHHjRyZWjbDl",
  "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P",
  "type": "url_verification"
}
"#;

/// Builder for Events API envelopes.
///
/// The inner payload is spliced in as text rather than re-serialized, so
/// its bytes survive unchanged.
#[derive(Debug, Clone)]
pub struct EnvelopeBuilder {
    token: String,
    team_id: String,
    api_app_id: String,
    event_ts: String,
    event_type: String,
    authed_users: Vec<String>,
    inner: String,
}

impl EnvelopeBuilder {
    /// Creates a builder with empty metadata around `inner`.
    pub fn new(inner: impl Into<String>) -> Self {
        Self {
            token: String::new(),
            team_id: String::new(),
            api_app_id: String::new(),
            event_ts: String::new(),
            event_type: "event_callback".to_string(),
            authed_users: Vec::new(),
            inner: inner.into(),
        }
    }

    /// Creates a builder with realistic metadata around `inner`.
    pub fn with_defaults(inner: impl Into<String>) -> Self {
        Self {
            token: DEFAULT_TOKEN.to_string(),
            team_id: DEFAULT_TEAM_ID.to_string(),
            api_app_id: DEFAULT_API_APP_ID.to_string(),
            event_ts: DEFAULT_EVENT_TS.to_string(),
            authed_users: vec![DEFAULT_AUTHED_USER.to_string()],
            ..Self::new(inner)
        }
    }

    /// Sets the verification token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the workspace ID.
    #[must_use]
    pub fn team_id(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = team_id.into();
        self
    }

    /// Sets the app ID.
    #[must_use]
    pub fn api_app_id(mut self, api_app_id: impl Into<String>) -> Self {
        self.api_app_id = api_app_id.into();
        self
    }

    /// Sets the event timestamp.
    #[must_use]
    pub fn event_ts(mut self, event_ts: impl Into<String>) -> Self {
        self.event_ts = event_ts.into();
        self
    }

    /// Overrides the outer discriminant.
    #[must_use]
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Replaces the addressed users.
    #[must_use]
    pub fn authed_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authed_users = users.into_iter().map(Into::into).collect();
        self
    }

    /// Renders the envelope as JSON text.
    pub fn build(&self) -> String {
        format!(
            r#"
    {{
      "token": {},
      "team_id": {},
      "api_app_id": {},
      "event": {},
      "event_ts": {},
      "type": {},
      "authed_users": {}
    }}
    "#,
            Value::from(self.token.as_str()),
            Value::from(self.team_id.as_str()),
            Value::from(self.api_app_id.as_str()),
            self.inner,
            Value::from(self.event_ts.as_str()),
            Value::from(self.event_type.as_str()),
            json!(self.authed_users),
        )
    }

    /// Renders the envelope as bytes.
    pub fn build_bytes(&self) -> Bytes {
        Bytes::from(self.build())
    }
}

/// Returns the smallest payload that resolves to `discriminant`.
pub fn minimal_payload(discriminant: &str) -> String {
    json!({ "type": discriminant }).to_string()
}

/// Returns a well-formed payload for `kind`.
///
/// Envelopes wrap [`REACTION_ADDED_JSON`]; every other kind gets its
/// canonical discriminant and no further fields.
pub fn sample_payload(kind: EventKind) -> String {
    if kind.is_envelope() {
        EnvelopeBuilder::with_defaults(REACTION_ADDED_JSON).build()
    } else {
        minimal_payload(kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_valid_json_with_verbatim_inner_text() {
        let envelope = EnvelopeBuilder::with_defaults(REACTION_ADDED_JSON).build();
        let value: Value = serde_json::from_str(&envelope).unwrap();

        assert_eq!(value["type"], "event_callback");
        assert_eq!(value["team_id"], DEFAULT_TEAM_ID);
        assert_eq!(value["event"]["reaction"], "slightly_smiling_face");
        assert!(envelope.contains(REACTION_ADDED_JSON));
    }

    #[test]
    fn builder_escapes_metadata() {
        let envelope = EnvelopeBuilder::new("{}").token("quote\"d").build();
        let value: Value = serde_json::from_str(&envelope).unwrap();
        assert_eq!(value["token"], "quote\"d");
    }
}
