// Field names mirror the wire keys.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use super::{nullable, Comment, File, MessageEvent};

/// Target of a reaction, referenced by ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionItem {
    /// `message`, `file` or `file_comment`.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub item_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub ts: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_comment: Option<String>,
}

/// Target of a pin or star, carried inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub item_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Box<MessageEvent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// `reaction_added` and `reaction_removed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub item: ReactionItem,
    /// Author of the reacted-to item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_user: Option<String>,
    /// Emoji name without colons.
    #[serde(deserialize_with = "nullable")]
    pub reaction: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `pin_added` and `pin_removed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub item: Item,
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
    #[serde(deserialize_with = "nullable")]
    pub has_pins: bool,
}

/// `star_added` and `star_removed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub item: Item,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}
