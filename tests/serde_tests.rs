#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! A range serializes as the parameters it was created from, and
//! deserialization validates them exactly like `range` does.

use chain_iterate::sequence::{Range, RangeParameters, range};
use rstest::rstest;

#[rstest]
fn test_range_json_roundtrip() {
    let original = range(10, Some(-10), -3).unwrap();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Range<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
    assert_eq!(restored.collect::<Vec<_>>(), vec![10, 7, 4, 1, -2, -5, -8]);
}

#[rstest]
fn test_partially_consumed_range_serializes_parameters() {
    let mut sequence = range(0_u8, Some(5), 1).unwrap();
    sequence.next();
    let json = serde_json::to_string(&sequence).unwrap();
    assert_eq!(json, r#"{"start":0,"end":5,"step":1}"#);
}

#[rstest]
fn test_range_defaults_when_fields_missing() {
    let sequence: Range<i64> = serde_json::from_str(r#"{"start":3}"#).unwrap();
    assert_eq!(
        sequence.parameters(),
        &RangeParameters {
            start: 3,
            end: None,
            step: 1,
        }
    );
    assert_eq!(sequence.take(2).collect::<Vec<_>>(), vec![3, 4]);
}

#[rstest]
fn test_range_zero_step_rejected_on_deserialize() {
    let error = serde_json::from_str::<Range<i32>>(r#"{"start":0,"end":4,"step":0}"#).unwrap_err();
    assert!(error.to_string().contains("range: step cannot be 0"));
}

#[rstest]
fn test_parameters_json_roundtrip() {
    let parameters = RangeParameters {
        start: -1_i16,
        end: None,
        step: 2,
    };
    let json = serde_json::to_string(&parameters).unwrap();
    let restored: RangeParameters<i16> = serde_json::from_str(&json).unwrap();
    assert_eq!(parameters, restored);
}
