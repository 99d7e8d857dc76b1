// Field names mirror the wire keys.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use super::nullable;

/// Minimal channel description carried by creation events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelCreatedInfo {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub is_channel: bool,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub created: i64,
    #[serde(deserialize_with = "nullable")]
    pub creator: String,
}

/// Channel description carried by join events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Channel {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub created: i64,
    #[serde(deserialize_with = "nullable")]
    pub creator: String,
    #[serde(deserialize_with = "nullable")]
    pub is_channel: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_archived: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_general: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_member: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub members: Vec<String>,
}

/// New name of a renamed channel or group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRenameInfo {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub created: i64,
}

/// `channel_created`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelCreatedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub channel: ChannelCreatedInfo,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `channel_joined` and `group_joined`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelJoinedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub channel: Channel,
}

/// Channel-scoped notification naming only the channel involved.
///
/// Shared by the marked, left, deleted, archive, unarchive, open and close
/// events of channels, groups and IMs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelInfoEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    /// Read cursor for the `*_marked` events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<String>,
}

/// `channel_rename` and `group_rename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRenameEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub channel: ChannelRenameInfo,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// Bulk history change of a channel, group or IM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryChangedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub latest: String,
    #[serde(deserialize_with = "nullable")]
    pub ts: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `im_created`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImCreatedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub channel: ChannelCreatedInfo,
}
