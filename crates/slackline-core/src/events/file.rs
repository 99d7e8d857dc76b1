// Field names mirror the wire keys.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use super::nullable;

/// File metadata.
///
/// Events API payloads usually carry only `id`; RTM payloads carry the full
/// object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub created: i64,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub mimetype: String,
    #[serde(deserialize_with = "nullable")]
    pub filetype: String,
    #[serde(deserialize_with = "nullable")]
    pub pretty_type: String,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub mode: String,
    #[serde(deserialize_with = "nullable")]
    pub is_external: bool,
    #[serde(deserialize_with = "nullable")]
    pub is_public: bool,
    #[serde(deserialize_with = "nullable")]
    pub size: u64,
    #[serde(deserialize_with = "nullable")]
    pub url_private: String,
    #[serde(deserialize_with = "nullable")]
    pub url_private_download: String,
    #[serde(deserialize_with = "nullable")]
    pub permalink: String,
    #[serde(deserialize_with = "nullable")]
    pub channels: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub groups: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub ims: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub comments_count: u32,
}

/// Comment on a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub created: i64,
    #[serde(deserialize_with = "nullable")]
    pub timestamp: i64,
    #[serde(deserialize_with = "nullable")]
    pub user: String,
    #[serde(deserialize_with = "nullable")]
    pub comment: String,
}

/// Lifecycle change of a file: created, shared, unshared, made public or
/// private, or changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileActionEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub file_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub file: File,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `file_deleted`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeletedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(deserialize_with = "nullable")]
    pub file_id: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `file_comment_added` and `file_comment_edited`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommentEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub file_id: String,
    #[serde(deserialize_with = "nullable")]
    pub file: File,
    #[serde(deserialize_with = "nullable")]
    pub comment: Comment,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}

/// `file_comment_deleted`; the comment is referenced by ID only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommentDeletedEvent {
    #[serde(rename = "type")]
    #[serde(deserialize_with = "nullable")]
    pub event_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "nullable")]
    pub file_id: String,
    #[serde(deserialize_with = "nullable")]
    pub file: File,
    #[serde(deserialize_with = "nullable")]
    pub comment: String,
    #[serde(deserialize_with = "nullable")]
    pub event_ts: String,
}
