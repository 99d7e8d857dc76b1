// Field names mirror the wire keys.
#![allow(missing_docs)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::nullable;

/// Workspace member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub team_id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub deleted: bool,
    #[serde(deserialize_with = "nullable")]
    pub color: String,
    #[serde(deserialize_with = "nullable")]
    pub real_name: String,
    #[serde(deserialize_with = "nullable")]
    pub tz: String,
    #[serde(deserialize_with = "nullable")]
    pub tz_label: String,
    #[serde(deserialize_with = "nullable")]
    pub tz_offset: i64,
    #[serde(deserialize_with = "nullable")]
    pub profile: UserProfile,
    #[serde(deserialize_with = "nullable")]
    pub is_bot: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_admin: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_owner: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_restricted: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_ultra_restricted: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_app_user: bool,
    #[serde(deserialize_with = "nullable")]
    pub updated: i64,
}

/// Profile section of a [`User`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub real_name: String,
    #[serde(deserialize_with = "nullable")]
    pub display_name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub status_text: String,
    #[serde(deserialize_with = "nullable")]
    pub status_emoji: String,
    #[serde(deserialize_with = "nullable")]
    pub image_24: String,
    #[serde(deserialize_with = "nullable")]
    pub image_48: String,
    #[serde(deserialize_with = "nullable")]
    pub image_72: String,
    #[serde(deserialize_with = "nullable")]
    pub bot_id: String,
    #[serde(deserialize_with = "nullable")]
    pub team: String,
}

/// Integration bot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotInfo {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub app_id: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub deleted: bool,
    #[serde(deserialize_with = "nullable")]
    pub icons: HashMap<String, String>,
}

/// Do-not-disturb settings of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndStatus {
    #[serde(deserialize_with = "nullable")]
    pub dnd_enabled: bool,
    #[serde(deserialize_with = "nullable")]
    pub next_dnd_start_ts: i64,
    #[serde(deserialize_with = "nullable")]
    pub next_dnd_end_ts: i64,
    #[serde(deserialize_with = "nullable")]
    pub snooze_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_endtime: Option<i64>,
}

/// `presence_change`; batched changes list several `users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceChangeEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub presence: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub users: Vec<String>,
}

/// `manual_presence_change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManualPresenceChangeEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub presence: String,
}

/// `user_typing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTypingEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
}

/// `dnd_updated` and `dnd_updated_user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndUpdatedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub dnd_status: DndStatus,
}

/// `pref_change` and `team_pref_change`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefChangeEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    pub value: serde_json::Value,
}

/// `team_join` and `user_change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: User,
}

/// `team_rename`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRenameEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<String>,
}

/// `team_domain_change`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamDomainChangeEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub domain: String,
}

/// Event that carries nothing beyond its type, such as
/// `team_migration_started` and `accounts_changed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
}

/// `emoji_changed`; `subtype` is `add` or `remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiChangedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub subtype: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `commands_changed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsChangedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `email_domain_changed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailDomainChangedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub email_domain: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `bot_added` and `bot_changed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub bot: BotInfo,
}

/// `reconnect_url`, sent over RTM ahead of a migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconnectUrlEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}
