//! Concrete event shapes.
//!
//! Each shape is a flat field-to-key mapping of one event variant. Missing
//! fields take their zero value and unknown fields are ignored, so shapes
//! tolerate the additive changes Slack makes to payloads over time. Several
//! discriminants share a shape; [`EventKind`](crate::EventKind) keeps them
//! apart. An explicit `null` is treated like a missing field.

use serde::{Deserialize, Deserializer};

mod channel;
mod file;
mod item;
mod message;
mod team;

pub use channel::{
    Channel, ChannelCreatedEvent, ChannelCreatedInfo, ChannelInfoEvent, ChannelJoinedEvent,
    ChannelRenameEvent, ChannelRenameInfo, HistoryChangedEvent, ImCreatedEvent,
};
pub use file::{
    Comment, File, FileActionEvent, FileCommentDeletedEvent, FileCommentEvent, FileDeletedEvent,
};
pub use item::{Item, PinEvent, ReactionEvent, ReactionItem, StarEvent};
pub use message::{Edited, MessageEvent};
pub use team::{
    BotEvent, BotInfo, CommandsChangedEvent, DndStatus, DndUpdatedEvent, EmailDomainChangedEvent,
    EmojiChangedEvent, ManualPresenceChangeEvent, NoticeEvent, PrefChangeEvent,
    PresenceChangeEvent, ReconnectUrlEvent, TeamDomainChangeEvent, TeamRenameEvent, User,
    UserEvent, UserProfile, UserTypingEvent,
};

/// Deserializes a field, mapping an explicit `null` to the type's default.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
