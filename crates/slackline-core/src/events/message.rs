use serde::{Deserialize, Serialize};

use super::nullable;

/// A message posted to a channel, group, IM or multi-party IM.
///
/// Decoded for `message` and its channel-scoped aliases
/// (`message.channels`, `message.groups`, `message.im`, `message.mpim`).
/// Edits and deletions arrive as `message` events with a `subtype` and the
/// affected message nested under `message` / `previous_message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageEvent {
    /// Wire discriminant this message was decoded from.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    /// Channel the message was posted to.
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
    /// Author's user ID.
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    /// Message text.
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    /// Message timestamp, which doubles as its ID within the channel.
    #[serde(deserialize_with = "nullable")]
    pub ts: String,
    /// Parent message timestamp for threaded replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    /// Message subtype (`message_changed`, `bot_message`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Set on subtypes that clients should not display.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    #[serde(deserialize_with = "nullable")]
    pub hidden: bool,
    /// When the event itself was dispatched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<String>,
    /// Workspace the message belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// `channel`, `group`, `im` or `mpim`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    /// Bot that posted the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    /// Display name override used by bots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Present once the message has been edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<Edited>,
    /// Timestamp of the removed message for `message_deleted`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_ts: Option<String>,
    /// Number of thread replies on a parent message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<u32>,
    /// Author of the thread parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_user_id: Option<String>,
    /// Legacy attachments, kept undecoded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub attachments: Vec<serde_json::Value>,
    /// The message after an edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<MessageEvent>>,
    /// The message before an edit or deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_message: Option<Box<MessageEvent>>,
}

/// Edit marker on a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edited {
    /// Editor's user ID.
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    /// When the edit happened.
    #[serde(deserialize_with = "nullable")]
    pub ts: String,
}
