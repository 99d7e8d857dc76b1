//! Two-pass polymorphic decoding.
//!
//! Pass one reads only the `type` discriminant and resolves it against the
//! registry. Pass two decodes the entire payload, not just the remainder,
//! into the resolved shape. Fields the shape does not declare are ignored.
//!
//! Envelopes add exactly one level: the inner payload of an
//! `event_callback` goes through both passes again at depth 1, and an
//! envelope found at that depth is rejected rather than followed.

use std::{borrow::Cow, fmt};

use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer,
};
use tracing::{debug, trace};

use crate::{
    envelope::decode_envelope, registry, DecodeError, DecoderConfig, Event, EventKind, Result,
};

/// Deepest level at which an envelope may appear, counted from zero.
///
/// Top-level payloads are at depth 0 and the inner event of an envelope is
/// at depth 1, so only top-level envelopes are accepted.
pub const MAX_ENVELOPE_DEPTH: usize = 1;

/// Header pass: the discriminant and nothing else.
///
/// Only a JSON object carries a header. Arrays, scalars and `null` are
/// rejected here, so nothing downstream ever fills a shape by position.
#[derive(Debug)]
struct EventHeader<'a> {
    event_type: Cow<'a, str>,
}

/// A string that borrows from the input when it has no escapes.
#[derive(Deserialize)]
struct BorrowedStr<'a>(#[serde(borrow)] Cow<'a, str>);

impl<'de> Deserialize<'de> for EventHeader<'de> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(HeaderVisitor)
    }
}

struct HeaderVisitor;

impl<'de> Visitor<'de> for HeaderVisitor {
    type Value = EventHeader<'de>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an event object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut event_type: Option<Option<BorrowedStr<'de>>> = None;

        while let Some(BorrowedStr(key)) = map.next_key::<BorrowedStr<'de>>()? {
            if key != "type" {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            if event_type.is_some() {
                return Err(de::Error::duplicate_field("type"));
            }
            event_type = Some(map.next_value()?);
        }

        // Missing and `null` both resolve as the empty discriminant.
        let event_type = event_type.flatten().map(|BorrowedStr(s)| s).unwrap_or_default();
        Ok(EventHeader { event_type })
    }
}

/// Decodes event payloads against the registry.
///
/// Holds only configuration; every call allocates fresh output and shares
/// nothing with other calls, so one decoder can serve many threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder with the given limits.
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Returns the limits this decoder applies.
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decodes one payload into its registered shape.
    ///
    /// # Errors
    ///
    /// - `PayloadTooLarge` if `raw` exceeds the configured limit
    /// - `MalformedInput` if `raw` is not JSON or does not fit the shape
    /// - `UnknownEventType` if the discriminant, or the inner discriminant
    ///   of an envelope, is not registered
    /// - `NestingTooDeep` if an envelope wraps another envelope
    pub fn decode(&self, raw: &[u8]) -> Result<Event> {
        if raw.len() > self.config.max_payload_bytes {
            return Err(DecodeError::PayloadTooLarge {
                size_bytes: raw.len(),
                limit_bytes: self.config.max_payload_bytes,
            });
        }

        self.decode_at_depth(raw, 0)
    }

    /// Decodes a payload found `depth` envelopes deep.
    pub(crate) fn decode_at_depth(&self, raw: &[u8], depth: usize) -> Result<Event> {
        let kind = resolve_kind(raw)?;

        if kind.is_envelope() {
            if depth >= MAX_ENVELOPE_DEPTH {
                return Err(DecodeError::NestingTooDeep { max_depth: MAX_ENVELOPE_DEPTH });
            }
            let callback = decode_envelope(self, raw, depth)?;
            return Ok(Event::EventCallback(Box::new(callback)));
        }

        Ok(kind.decode_flat(raw)?)
    }
}

/// Resolves the registered kind of a payload without decoding its body.
///
/// A payload without a `type` field, or with `"type": null`, resolves as
/// the empty discriminant and is reported as unknown.
///
/// # Errors
///
/// - `MalformedInput` if `raw` is not a JSON object, or `type` is neither
///   a string nor `null`
/// - `UnknownEventType` if the discriminant is not registered
pub fn resolve_kind(raw: &[u8]) -> Result<EventKind> {
    let header: EventHeader<'_> = serde_json::from_slice(raw)?;

    match registry::lookup(&header.event_type) {
        Some(kind) => {
            trace!(discriminant = %header.event_type, %kind, "resolved event shape");
            Ok(kind)
        },
        None => {
            debug!(discriminant = %header.event_type, size = raw.len(), "received unmapped event");
            Err(DecodeError::unknown_event(header.event_type, raw))
        },
    }
}

/// Decodes one payload with the default decoder.
///
/// Returns a plain event, an envelope exposing both its metadata and the
/// typed inner event, or the URL verification handshake.
///
/// ```
/// use slackline_core::{unmarshal_event, Event, EventKind};
///
/// let raw = br#"{
///     "type": "event_callback",
///     "team_id": "T061EG9RZ",
///     "event": {"type": "message.channels", "channel": "C1", "text": "hi", "ts": "1.000001"}
/// }"#;
///
/// let Event::EventCallback(callback) = unmarshal_event(raw).unwrap() else { unreachable!() };
/// assert_eq!(callback.team_id, "T061EG9RZ");
/// assert_eq!(callback.inner_kind(), EventKind::Message);
/// ```
pub fn unmarshal_event(raw: &[u8]) -> Result<Event> {
    Decoder::default().decode(raw)
}
