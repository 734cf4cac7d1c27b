use hive_core::errors::*;

#[test]
fn malformed_detection_names_the_field() {
    let err = EpisodeError::MalformedDetection {
        field: "loc_info_0".into(),
    };
    assert!(err.to_string().contains("loc_info_0"));
}

#[test]
fn malformed_record_carries_row() {
    let err = InfluenceError::MalformedRecord {
        row: 17,
        reason: "missing field `phase_focal`".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("17"));
    assert!(msg.contains("phase_focal"));
}

#[test]
fn empty_results_are_distinguished_from_failures() {
    let no_events: HiveError = EpisodeError::NoEvents.into();
    let no_interactions: HiveError = InfluenceError::NoInteractions.into();
    let bad_key: HiveError = EpisodeError::InvalidPairKey { key: "x".into() }.into();
    let provider: HiveError = VelocityError::ProviderFailed {
        entity: 3,
        reason: "timeout".into(),
    }
    .into();

    assert!(no_events.is_empty_result());
    assert!(no_interactions.is_empty_result());
    assert!(!bad_key.is_empty_result());
    assert!(!provider.is_empty_result());
}

#[test]
fn aggregate_error_wraps_subsystem_message() {
    let err: HiveError = ConfigError::ValidationFailed {
        field: "influence.max_depth".into(),
        message: "must be between 1 and 200".into(),
    }
    .into();
    assert!(err.to_string().starts_with("configuration error"));
    assert!(err.to_string().contains("influence.max_depth"));
}
