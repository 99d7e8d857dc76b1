//! Integration tests for registry-driven decoding.
//!
//! Exercises the public entry point with the payloads Slack documents for
//! each path: plain events, aliased discriminants, the URL verification
//! handshake, Events API envelopes and the failure modes of each.

use slackline_core::{
    events::{MessageEvent, ReactionEvent},
    unmarshal_event, DecodeError, Decoder, DecoderConfig, Event, EventKind,
};
use slackline_testing::{
    fixtures::{
        DEFAULT_API_APP_ID, DEFAULT_AUTHED_USER, DEFAULT_EVENT_TS, DEFAULT_TEAM_ID, DEFAULT_TOKEN,
    },
    EnvelopeBuilder, MESSAGE_CHANNELS_JSON, REACTION_ADDED_JSON, URL_VERIFICATION_JSON,
};

fn decode_callback(raw: &str) -> Box<slackline_core::EventCallback> {
    match unmarshal_event(raw.as_bytes()).expect("envelope should decode") {
        Event::EventCallback(callback) => callback,
        other => panic!("expected event_callback, got {}", other.kind()),
    }
}

#[test]
fn event_callback_preserves_outer_fields() {
    let callback = decode_callback(&EnvelopeBuilder::with_defaults(REACTION_ADDED_JSON).build());

    assert_eq!(callback.event_type, "event_callback");
    assert_eq!(callback.token, DEFAULT_TOKEN);
    assert_eq!(callback.team_id, DEFAULT_TEAM_ID);
    assert_eq!(callback.api_app_id, DEFAULT_API_APP_ID);
    assert_eq!(callback.event_ts, DEFAULT_EVENT_TS);
    assert_eq!(callback.authed_users, [DEFAULT_AUTHED_USER]);
    assert_eq!(callback.raw_event.get(), REACTION_ADDED_JSON);
    assert_eq!(callback.inner_kind(), EventKind::ReactionAdded);
}

#[test]
fn event_callback_decodes_reaction_added() {
    let callback = decode_callback(&EnvelopeBuilder::with_defaults(REACTION_ADDED_JSON).build());

    let Event::ReactionAdded(ReactionEvent { event_type, user, reaction, item, .. }) =
        &callback.event
    else {
        panic!("expected reaction_added, got {}", callback.inner_kind());
    };

    assert_eq!(event_type, "reaction_added");
    assert_eq!(user, "U061F1EUR");
    assert_eq!(reaction, "slightly_smiling_face");
    assert_eq!(item.item_type, "message");
    assert_eq!(item.channel, "C061EG9SL");
    assert_eq!(item.ts, "1464196127.000002");
}

#[test]
fn event_callback_decodes_message_channels_as_message() {
    let callback =
        decode_callback(&EnvelopeBuilder::with_defaults(MESSAGE_CHANNELS_JSON).build());

    let Event::Message(message) = &callback.event else {
        panic!("expected message, got {}", callback.inner_kind());
    };

    assert_eq!(message.event_type, "message.channels");
    assert_eq!(message.user, "U2147483697");
    assert_eq!(message.channel, "C2147483705");
    assert_eq!(message.text, "Hello world");
    assert_eq!(message.ts, "1355517523.000005");
}

#[test]
fn message_aliases_decode_into_one_shape() {
    for discriminant in
        ["message", "message.channels", "message.groups", "message.im", "message.mpim"]
    {
        let raw = format!(
            r#"{{"type":"{discriminant}","channel":"C1","user":"U1","text":"hi","ts":"1.000001"}}"#
        );
        let event = unmarshal_event(raw.as_bytes()).unwrap();

        assert_eq!(
            event,
            Event::Message(MessageEvent {
                event_type: discriminant.to_string(),
                channel: "C1".into(),
                user: "U1".into(),
                text: "hi".into(),
                ts: "1.000001".into(),
                ..MessageEvent::default()
            })
        );
    }
}

#[test]
fn url_verification_decodes_as_handshake() {
    let event = unmarshal_event(URL_VERIFICATION_JSON.as_bytes()).unwrap();

    let verification = event.as_url_verification().expect("handshake");
    assert_eq!(verification.event_type, "url_verification");
    assert_eq!(verification.token, "Jhj5dZrVaK7ZwHHjRyZWjbDl");
    assert_eq!(verification.challenge, "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
    assert!(event.as_callback().is_none());
}

#[test]
fn compact_url_verification_has_no_inner_event() {
    let event = unmarshal_event(br#"{"token":"T","challenge":"C","type":"url_verification"}"#)
        .unwrap();

    assert_eq!(event.kind(), EventKind::UrlVerification);
    assert!(std::ptr::eq(event.innermost(), &event));
    let verification = event.as_url_verification().unwrap();
    assert_eq!((verification.token.as_str(), verification.challenge.as_str()), ("T", "C"));
}

#[test]
fn unknown_top_level_type_is_reported_with_payload() {
    let raw = br#"{"type":"workflow_step_execute","callback_id":"x"}"#;
    let err = unmarshal_event(raw).unwrap_err();

    assert!(err.is_unknown_event());
    assert_eq!(err.discriminant(), Some("workflow_step_execute"));
    assert_eq!(&err.raw_payload().unwrap()[..], raw);
}

#[test]
fn unknown_inner_type_fails_the_whole_envelope() {
    let inner = r#"{"type":"app_home_opened","user":"U1"}"#;
    let err = unmarshal_event(EnvelopeBuilder::with_defaults(inner).build().as_bytes())
        .unwrap_err();

    match err {
        DecodeError::UnknownEventType { discriminant, raw } => {
            assert_eq!(discriminant, "app_home_opened");
            assert_eq!(&raw[..], inner.as_bytes());
        },
        other => panic!("expected unknown event type, got {other}"),
    }
}

#[test]
fn malformed_inner_event_fails_the_whole_envelope() {
    let inner = r#"{"type":"reaction_added","user":42}"#;
    let err = unmarshal_event(EnvelopeBuilder::with_defaults(inner).build().as_bytes())
        .unwrap_err();

    assert!(matches!(err, DecodeError::MalformedInput(_)));
}

#[test]
fn nested_envelope_is_rejected() {
    let innermost = EnvelopeBuilder::with_defaults(REACTION_ADDED_JSON).build();
    let outer = EnvelopeBuilder::with_defaults(innermost).build();

    let err = unmarshal_event(outer.as_bytes()).unwrap_err();
    assert!(matches!(err, DecodeError::NestingTooDeep { max_depth: 1 }));
}

#[test]
fn syntactically_invalid_input_is_malformed() {
    for raw in [&b""[..], b"{", b"not json", b"{\"type\":\"message\"", b"\xff\xfe"] {
        let err = unmarshal_event(raw).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)), "{raw:?} gave {err}");
    }
}

#[test]
fn non_object_payloads_are_malformed() {
    let non_objects = [r#"["message"]"#, r#"["accounts_changed"]"#, "[]", "null", r#""message""#, "42"];

    for raw in non_objects {
        let err = unmarshal_event(raw.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)), "{raw} gave {err}");

        let envelope = EnvelopeBuilder::with_defaults(raw).build();
        let err = unmarshal_event(envelope.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedInput(_)), "event {raw} gave {err}");
    }
}

#[test]
fn explicit_nulls_take_zero_values() {
    let raw = br#"{"type":"event_callback","team_id":null,"event":{"type":"accounts_changed"},"authed_users":null}"#;
    let callback = unmarshal_event(raw).unwrap();
    let callback = callback.as_callback().unwrap();
    assert_eq!(callback.team_id, "");
    assert!(callback.authed_users.is_empty());

    let Event::Message(message) =
        unmarshal_event(br#"{"type":"message","channel":"C1","text":null}"#).unwrap()
    else {
        panic!("expected message");
    };
    assert_eq!((message.channel.as_str(), message.text.as_str()), ("C1", ""));
}

#[test]
fn shape_mismatch_is_malformed() {
    let raw = br#"{"type":"message","channel":"C1","text":7}"#;
    let err = unmarshal_event(raw).unwrap_err();
    assert_eq!(err.code(), "E1001");
}

#[test]
fn unknown_fields_are_ignored() {
    let raw = br#"{"type":"user_typing","user":"U1","channel":"C1","blocks":[{"x":1}],"v":2}"#;
    let event = unmarshal_event(raw).unwrap();

    let Event::UserTyping(typing) = event else { panic!("expected user_typing") };
    assert_eq!((typing.user.as_str(), typing.channel.as_str()), ("U1", "C1"));
}

#[test]
fn shared_shapes_keep_distinct_kinds() {
    let left = unmarshal_event(br#"{"type":"channel_left","channel":"C1"}"#).unwrap();
    let deleted = unmarshal_event(br#"{"type":"channel_deleted","channel":"C1"}"#).unwrap();
    let im_open = unmarshal_event(br#"{"type":"im_open","channel":"D1","user":"U1"}"#).unwrap();

    assert_eq!(left.kind(), EventKind::ChannelLeft);
    assert_eq!(deleted.kind(), EventKind::ChannelDeleted);
    assert_eq!(im_open.kind(), EventKind::ImOpen);
    assert_ne!(left, deleted);
}

#[test]
fn rtm_payloads_decode_nested_objects() {
    let raw = br#"{
        "type": "dnd_updated_user",
        "user": "U1",
        "dnd_status": {"dnd_enabled": true, "next_dnd_start_ts": 1450387800, "next_dnd_end_ts": 1450423800}
    }"#;
    let Event::DndUpdated(dnd) = unmarshal_event(raw).unwrap() else { panic!("expected dnd") };

    assert_eq!(dnd.event_type, "dnd_updated_user");
    assert!(dnd.dnd_status.dnd_enabled);
    assert_eq!(dnd.dnd_status.next_dnd_end_ts, 1_450_423_800);
    assert_eq!(dnd.dnd_status.snooze_endtime, None);
}

#[test]
fn edited_message_carries_previous_message() {
    let raw = br#"{
        "type": "message",
        "subtype": "message_changed",
        "hidden": true,
        "channel": "C1",
        "ts": "1358878755.000001",
        "message": {"type": "message", "user": "U1", "text": "after", "ts": "1358878749.000002",
                    "edited": {"user": "U1", "ts": "1358878755.000001"}},
        "previous_message": {"type": "message", "user": "U1", "text": "before", "ts": "1358878749.000002"}
    }"#;
    let Event::Message(message) = unmarshal_event(raw).unwrap() else { panic!("expected message") };

    assert_eq!(message.subtype.as_deref(), Some("message_changed"));
    assert!(message.hidden);
    assert_eq!(message.message.as_ref().unwrap().text, "after");
    assert_eq!(message.message.as_ref().unwrap().edited.as_ref().unwrap().user, "U1");
    assert_eq!(message.previous_message.as_ref().unwrap().text, "before");
}

#[test]
fn decoded_events_reencode_with_their_type() {
    let event = unmarshal_event(MESSAGE_CHANNELS_JSON.as_bytes()).unwrap();
    let reencoded = serde_json::to_vec(&event).unwrap();

    assert_eq!(unmarshal_event(&reencoded).unwrap(), event);
}

#[test]
fn configured_limit_applies_to_envelopes() {
    let raw = EnvelopeBuilder::with_defaults(REACTION_ADDED_JSON).build();
    let decoder = Decoder::new(DecoderConfig { max_payload_bytes: 64 });

    let err = decoder.decode(raw.as_bytes()).unwrap_err();
    assert_eq!(err.code(), "E1003");
}

#[test]
fn shared_buffers_decode_like_slices() {
    let raw = EnvelopeBuilder::with_defaults(MESSAGE_CHANNELS_JSON).build_bytes();
    let decoder = Decoder::default();

    let event = decoder.decode(&raw).unwrap();
    assert_eq!(event.innermost().kind(), EventKind::Message);

    let truncated = raw.slice(..raw.len() - 1);
    let err = decoder.decode(&truncated).unwrap_err();
    assert_eq!(err.code(), "E1001");
}
