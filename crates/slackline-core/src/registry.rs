//! Closed registry of event shapes keyed by discriminant.
//!
//! The registry is the contract with the wire format: every discriminant
//! Slack defines maps to exactly one [`EventKind`], and every kind decodes
//! into exactly one [`Event`] constructor. Several discriminants may share a
//! kind (the channel-scoped `message.*` subscriptions all decode as
//! [`EventKind::Message`]) and several kinds may share a Rust shape; neither
//! is duplication.
//!
//! The lookup table is built on first use and never mutated afterwards, so
//! concurrent decoders read it without synchronization.

use std::{collections::HashMap, fmt, sync::LazyLock};

use serde::Serialize;

use crate::{
    envelope::{EventCallback, EventUrlVerification},
    events::*,
};

/// Discriminant of the Events API envelope.
pub const EVENT_CALLBACK: &str = "event_callback";

macro_rules! event_registry {
    ($(
        $(#[$meta:meta])*
        $variant:ident($shape:ty) => [$canonical:literal $(, $alias:literal)* $(,)?]
    ),+ $(,)?) => {
        /// Registered event variant.
        ///
        /// One variant per role in the wire format, plus the envelope.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventKind {
            $( $(#[$meta])* $variant, )+
            /// Events API envelope around an inner event.
            EventCallback,
        }

        impl EventKind {
            /// Every registered kind.
            pub const ALL: &'static [EventKind] = &[$( Self::$variant, )+ Self::EventCallback];

            /// Returns the canonical discriminant of this kind.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $canonical, )+
                    Self::EventCallback => EVENT_CALLBACK,
                }
            }

            /// Returns every discriminant that resolves to this kind,
            /// canonical first.
            pub const fn discriminants(self) -> &'static [&'static str] {
                match self {
                    $( Self::$variant => &[$canonical $(, $alias)*], )+
                    Self::EventCallback => &[EVENT_CALLBACK],
                }
            }

            /// Decodes `raw` into this kind's shape.
            ///
            /// The envelope needs a nested pass and is handled by the
            /// decoder, never here.
            pub(crate) fn decode_flat(self, raw: &[u8]) -> serde_json::Result<Event> {
                match self {
                    $( Self::$variant => serde_json::from_slice(raw).map(Event::$variant), )+
                    Self::EventCallback => Err(serde::de::Error::custom(
                        "event_callback payloads require envelope decoding",
                    )),
                }
            }
        }

        /// A decoded event, typed by the shape its discriminant resolved to.
        ///
        /// Serializes as the underlying shape, so a re-encoded event carries
        /// its own `type` field.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Event {
            $( $(#[$meta])* $variant($shape), )+
            /// Events API envelope around an inner event.
            EventCallback(Box<EventCallback>),
        }

        impl Event {
            /// Returns the registered kind of this event.
            pub const fn kind(&self) -> EventKind {
                match self {
                    $( Self::$variant(_) => EventKind::$variant, )+
                    Self::EventCallback(_) => EventKind::EventCallback,
                }
            }

            /// Returns the `type` string this event was decoded from.
            pub fn event_type(&self) -> &str {
                match self {
                    $( Self::$variant(event) => &event.event_type, )+
                    Self::EventCallback(callback) => &callback.event_type,
                }
            }
        }

        static EVENT_MAPPING: &[(&str, EventKind)] = &[
            $(
                ($canonical, EventKind::$variant),
                $( ($alias, EventKind::$variant), )*
            )+
            (EVENT_CALLBACK, EventKind::EventCallback),
        ];
    };
}

event_registry! {
    /// Message in any conversation type.
    Message(MessageEvent) => [
        "message",
        "message.channels",
        "message.groups",
        "message.im",
        "message.mpim",
    ],

    /// A user's presence changed.
    PresenceChange(PresenceChangeEvent) => ["presence_change"],
    /// A user started typing.
    UserTyping(UserTypingEvent) => ["user_typing"],

    /// Read cursor moved in a channel.
    ChannelMarked(ChannelInfoEvent) => ["channel_marked"],
    /// Channel created.
    ChannelCreated(ChannelCreatedEvent) => ["channel_created"],
    /// Current user joined a channel.
    ChannelJoined(ChannelJoinedEvent) => ["channel_joined"],
    /// Current user left a channel.
    ChannelLeft(ChannelInfoEvent) => ["channel_left"],
    /// Channel deleted.
    ChannelDeleted(ChannelInfoEvent) => ["channel_deleted"],
    /// Channel renamed.
    ChannelRename(ChannelRenameEvent) => ["channel_rename"],
    /// Channel archived.
    ChannelArchive(ChannelInfoEvent) => ["channel_archive"],
    /// Channel unarchived.
    ChannelUnarchive(ChannelInfoEvent) => ["channel_unarchive"],
    /// Bulk changes to a channel's history.
    ChannelHistoryChanged(HistoryChangedEvent) => ["channel_history_changed"],

    /// Do-not-disturb settings changed.
    DndUpdated(DndUpdatedEvent) => ["dnd_updated", "dnd_updated_user"],

    /// IM channel created.
    ImCreated(ImCreatedEvent) => ["im_created"],
    /// IM opened.
    ImOpen(ChannelInfoEvent) => ["im_open"],
    /// IM closed.
    ImClose(ChannelInfoEvent) => ["im_close"],
    /// Read cursor moved in an IM.
    ImMarked(ChannelInfoEvent) => ["im_marked"],
    /// Bulk changes to an IM's history.
    ImHistoryChanged(HistoryChangedEvent) => ["im_history_changed"],

    /// Read cursor moved in a private channel.
    GroupMarked(ChannelInfoEvent) => ["group_marked"],
    /// Private channel opened.
    GroupOpen(ChannelInfoEvent) => ["group_open"],
    /// Current user joined a private channel.
    GroupJoined(ChannelJoinedEvent) => ["group_joined"],
    /// Current user left a private channel.
    GroupLeft(ChannelInfoEvent) => ["group_left"],
    /// Private channel closed.
    GroupClose(ChannelInfoEvent) => ["group_close"],
    /// Private channel renamed.
    GroupRename(ChannelRenameEvent) => ["group_rename"],
    /// Private channel archived.
    GroupArchive(ChannelInfoEvent) => ["group_archive"],
    /// Private channel unarchived.
    GroupUnarchive(ChannelInfoEvent) => ["group_unarchive"],
    /// Bulk changes to a private channel's history.
    GroupHistoryChanged(HistoryChangedEvent) => ["group_history_changed"],

    /// File created.
    FileCreated(FileActionEvent) => ["file_created"],
    /// File shared.
    FileShared(FileActionEvent) => ["file_shared"],
    /// File unshared.
    FileUnshared(FileActionEvent) => ["file_unshared"],
    /// File made public.
    FilePublic(FileActionEvent) => ["file_public"],
    /// File made private.
    FilePrivate(FileActionEvent) => ["file_private"],
    /// File changed.
    FileChange(FileActionEvent) => ["file_change"],
    /// File deleted.
    FileDeleted(FileDeletedEvent) => ["file_deleted"],
    /// Comment added to a file.
    FileCommentAdded(FileCommentEvent) => ["file_comment_added"],
    /// File comment edited.
    FileCommentEdited(FileCommentEvent) => ["file_comment_edited"],
    /// File comment deleted.
    FileCommentDeleted(FileCommentDeletedEvent) => ["file_comment_deleted"],

    /// Item pinned.
    PinAdded(PinEvent) => ["pin_added"],
    /// Item unpinned.
    PinRemoved(PinEvent) => ["pin_removed"],
    /// Item starred.
    StarAdded(StarEvent) => ["star_added"],
    /// Item unstarred.
    StarRemoved(StarEvent) => ["star_removed"],
    /// Reaction added to an item.
    ReactionAdded(ReactionEvent) => ["reaction_added"],
    /// Reaction removed from an item.
    ReactionRemoved(ReactionEvent) => ["reaction_removed"],

    /// User preference changed.
    PrefChange(PrefChangeEvent) => ["pref_change"],
    /// New member joined the workspace.
    TeamJoin(UserEvent) => ["team_join"],
    /// Workspace renamed.
    TeamRename(TeamRenameEvent) => ["team_rename"],
    /// Workspace preference changed.
    TeamPrefChange(PrefChangeEvent) => ["team_pref_change"],
    /// Workspace domain changed.
    TeamDomainChange(TeamDomainChangeEvent) => ["team_domain_change"],
    /// Workspace is being migrated between servers.
    TeamMigrationStarted(NoticeEvent) => ["team_migration_started"],
    /// User set their presence manually.
    ManualPresenceChange(ManualPresenceChangeEvent) => ["manual_presence_change"],
    /// User's data changed.
    UserChange(UserEvent) => ["user_change"],
    /// Custom emoji added or removed.
    EmojiChanged(EmojiChangedEvent) => ["emoji_changed"],
    /// Slash commands changed.
    CommandsChanged(CommandsChangedEvent) => ["commands_changed"],
    /// Workspace email domain changed.
    EmailDomainChanged(EmailDomainChangedEvent) => ["email_domain_changed"],
    /// Bot integration added.
    BotAdded(BotEvent) => ["bot_added"],
    /// Bot integration changed.
    BotChanged(BotEvent) => ["bot_changed"],
    /// Accounts signed in on the client changed.
    AccountsChanged(NoticeEvent) => ["accounts_changed"],
    /// RTM reconnect URL.
    ReconnectUrl(ReconnectUrlEvent) => ["reconnect_url"],

    /// Events API request URL handshake.
    UrlVerification(EventUrlVerification) => ["url_verification"],
}

static REGISTRY: LazyLock<HashMap<&'static str, EventKind>> =
    LazyLock::new(|| EVENT_MAPPING.iter().copied().collect());

/// Resolves a discriminant to its registered kind.
pub fn lookup(discriminant: &str) -> Option<EventKind> {
    REGISTRY.get(discriminant).copied()
}

/// Iterates every `(discriminant, kind)` pair in registration order.
pub fn entries() -> impl Iterator<Item = (&'static str, EventKind)> {
    EVENT_MAPPING.iter().copied()
}

/// Iterates every registered discriminant.
pub fn discriminants() -> impl Iterator<Item = &'static str> {
    entries().map(|(discriminant, _)| discriminant)
}

impl EventKind {
    /// Returns whether payloads of this kind wrap an inner event.
    pub const fn is_envelope(self) -> bool {
        matches!(self, Self::EventCallback)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Event {
    /// Returns the envelope, if this is one.
    pub fn as_callback(&self) -> Option<&EventCallback> {
        match self {
            Self::EventCallback(callback) => Some(callback),
            _ => None,
        }
    }

    /// Returns the handshake, if this is one.
    pub fn as_url_verification(&self) -> Option<&EventUrlVerification> {
        match self {
            Self::UrlVerification(verification) => Some(verification),
            _ => None,
        }
    }

    /// Returns the innermost event: the wrapped event of an envelope, or
    /// `self` otherwise.
    pub fn innermost(&self) -> &Event {
        match self {
            Self::EventCallback(callback) => &callback.event,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_discriminant_is_registered_once() {
        let mut seen = HashSet::new();
        for discriminant in discriminants() {
            assert!(seen.insert(discriminant), "duplicate discriminant {discriminant}");
        }
        assert_eq!(seen.len(), REGISTRY.len());
        assert_eq!(seen.len(), 65);
    }

    #[test]
    fn lookup_matches_table() {
        for (discriminant, kind) in entries() {
            assert_eq!(lookup(discriminant), Some(kind));
        }
        assert_eq!(lookup("not_an_event"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn kinds_list_their_own_discriminants() {
        for &kind in EventKind::ALL {
            assert_eq!(kind.discriminants()[0], kind.as_str());
            for discriminant in kind.discriminants() {
                assert_eq!(lookup(discriminant), Some(kind));
            }
        }
    }

    #[test]
    fn every_kind_is_reachable() {
        let reachable: HashSet<EventKind> = entries().map(|(_, kind)| kind).collect();
        assert_eq!(reachable.len(), EventKind::ALL.len());
    }

    #[test]
    fn message_subscriptions_alias_one_kind() {
        for discriminant in
            ["message", "message.channels", "message.groups", "message.im", "message.mpim"]
        {
            assert_eq!(lookup(discriminant), Some(EventKind::Message));
        }
        assert_eq!(lookup("dnd_updated_user"), Some(EventKind::DndUpdated));
    }

    #[test]
    fn only_the_callback_is_an_envelope() {
        let envelopes: Vec<_> = EventKind::ALL.iter().filter(|kind| kind.is_envelope()).collect();
        assert_eq!(envelopes, [&EventKind::EventCallback]);
        assert_eq!(EventKind::EventCallback.to_string(), "event_callback");
    }

    #[test]
    fn flat_decode_refuses_the_envelope() {
        let raw = br#"{"type":"event_callback","event":{"type":"im_open"}}"#;
        assert!(EventKind::EventCallback.decode_flat(raw).is_err());
    }
}
