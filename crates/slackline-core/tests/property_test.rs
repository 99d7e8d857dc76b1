//! Property-based tests for decoding invariants.
//!
//! Generated discriminants, envelope metadata and message bodies check that
//! resolution follows the registry exactly and that envelope fields survive
//! decoding regardless of content.

use proptest::{prelude::*, test_runner::Config as ProptestConfig};
use slackline_core::{registry, resolve_kind, unmarshal_event, DecodeError, Event, EventKind};
use slackline_testing::{minimal_payload, sample_payload, strategies, REACTION_ADDED_JSON};

/// Deterministic property test configuration for CI stability.
fn proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: 50,
        timeout: 5000,
        fork: false,
        failure_persistence: None,
        source_file: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Every non-envelope discriminant decodes to the kind the registry maps it to.
    #[test]
    fn flat_discriminants_resolve_through_registry(
        discriminant in strategies::flat_discriminant()
    ) {
        let raw = minimal_payload(discriminant);
        let expected = registry::lookup(discriminant).unwrap();

        let event = unmarshal_event(raw.as_bytes()).unwrap();
        prop_assert_eq!(event.kind(), expected);
        prop_assert_eq!(event.event_type(), discriminant);
        prop_assert!(expected.discriminants().contains(&discriminant));
    }

    /// The header pass resolves every registered discriminant, the envelope's included.
    #[test]
    fn header_pass_resolves_every_known_discriminant(
        discriminant in strategies::known_discriminant()
    ) {
        let raw = minimal_payload(discriminant);

        prop_assert_eq!(resolve_kind(raw.as_bytes()).ok(), registry::lookup(discriminant));
    }

    /// Header resolution agrees with the full decode for every kind.
    #[test]
    fn resolve_kind_agrees_with_decode(kind in strategies::event_kind()) {
        let raw = sample_payload(kind);

        prop_assert_eq!(resolve_kind(raw.as_bytes()).unwrap(), kind);
        prop_assert_eq!(unmarshal_event(raw.as_bytes()).unwrap().kind(), kind);
    }

    /// Unregistered discriminants fail with the discriminant and payload intact.
    #[test]
    fn unknown_discriminants_are_reported(discriminant in strategies::unknown_discriminant()) {
        let raw = minimal_payload(&discriminant);

        let err = unmarshal_event(raw.as_bytes()).unwrap_err();
        prop_assert_eq!(err.code(), "E1002");
        prop_assert_eq!(err.discriminant(), Some(discriminant.as_str()));
        prop_assert_eq!(&err.raw_payload().unwrap()[..], raw.as_bytes());
    }

    /// Unknown inner events surface the inner payload, not the envelope.
    #[test]
    fn unknown_inner_discriminants_are_reported(
        discriminant in strategies::unknown_discriminant(),
        fields in strategies::envelope_fields(),
    ) {
        let inner = minimal_payload(&discriminant);
        let envelope = fields.wrap(inner.clone()).build();

        let err = unmarshal_event(envelope.as_bytes()).unwrap_err();
        prop_assert_eq!(err.discriminant(), Some(discriminant.as_str()));
        prop_assert_eq!(&err.raw_payload().unwrap()[..], inner.as_bytes());
    }

    /// Envelope metadata and the inner message survive decoding.
    #[test]
    fn envelope_fields_survive_decoding(
        fields in strategies::envelope_fields(),
        (inner, expected) in strategies::message_payload(),
    ) {
        let envelope = fields.wrap(inner.clone()).build();

        let event = unmarshal_event(envelope.as_bytes()).unwrap();
        let callback = event.as_callback().unwrap();
        prop_assert_eq!(&callback.token, &fields.token);
        prop_assert_eq!(&callback.team_id, &fields.team_id);
        prop_assert_eq!(&callback.api_app_id, &fields.api_app_id);
        prop_assert_eq!(&callback.event_ts, &fields.event_ts);
        prop_assert_eq!(&callback.authed_users, &fields.authed_users);
        prop_assert_eq!(callback.raw_event.get(), inner.as_str());
        prop_assert!(callback.event_time().is_some());

        let Event::Message(message) = &callback.event else {
            return Err(TestCaseError::fail(format!("expected message, got {}", callback.inner_kind())));
        };
        prop_assert_eq!(message.event_type.as_str(), expected["type"].as_str().unwrap());
        prop_assert_eq!(message.channel.as_str(), expected["channel"].as_str().unwrap());
        prop_assert_eq!(message.user.as_str(), expected["user"].as_str().unwrap());
        prop_assert_eq!(message.text.as_str(), expected["text"].as_str().unwrap());
        prop_assert_eq!(message.ts.as_str(), expected["ts"].as_str().unwrap());
    }

    /// Overriding the outer discriminant changes how the payload resolves.
    #[test]
    fn outer_discriminant_selects_the_decode_path(
        discriminant in strategies::flat_discriminant(),
        fields in strategies::envelope_fields(),
    ) {
        let raw = fields.wrap(REACTION_ADDED_JSON).event_type(discriminant).build();

        match unmarshal_event(raw.as_bytes()) {
            Ok(event) => {
                prop_assert_eq!(event.kind(), registry::lookup(discriminant).unwrap());
                prop_assert!(event.as_callback().is_none());
            },
            // Envelope metadata may collide with a flat shape's own fields.
            Err(err) => prop_assert!(matches!(err, DecodeError::MalformedInput(_))),
        }
    }

    /// Arbitrary bytes never panic and always fail with a coded error.
    #[test]
    fn arbitrary_bytes_fail_cleanly(raw in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Err(err) = unmarshal_event(&raw) {
            prop_assert!(err.code().starts_with("E100"));
        }
    }

    /// Message aliases share one shape and keep their own discriminant.
    #[test]
    fn message_aliases_share_a_shape((raw, expected) in strategies::message_payload()) {
        let event = unmarshal_event(raw.as_bytes()).unwrap();

        prop_assert_eq!(event.kind(), EventKind::Message);
        prop_assert_eq!(event.event_type(), expected["type"].as_str().unwrap());
        prop_assert_eq!(serde_json::to_value(&event).unwrap(), expected);
    }
}
