//! Round trip through the default codec.

use crate::common::*;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Record {
    id: u64,
    name: String,
    score: Option<i32>,
    tags: Vec<String>,
    attrs: BTreeMap<String, bool>,
    ratio: f64,
    weight: f32,
    total: u128,
    delta: i128,
    extra: Value,
}

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |f| f.is_finite())
}

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |f| f.is_finite())
}

/// Arbitrary nested JSON document
fn document() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        finite_f64().prop_map(Value::from),
        ".*".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map(".*", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn record() -> impl Strategy<Value = Record> {
    (
        (
            any::<u64>(),
            ".*",
            any::<Option<i32>>(),
            proptest::collection::vec("[a-z]{0,8}", 0..4),
            proptest::collection::btree_map("[a-z]{1,6}", any::<bool>(), 0..4),
        ),
        (
            finite_f64(),
            finite_f32(),
            any::<u128>(),
            any::<i128>(),
            document(),
        ),
    )
        .prop_map(
            |((id, name, score, tags, attrs), (ratio, weight, total, delta, extra))| Record {
                id,
                name,
                score,
                tags,
                attrs,
                ratio,
                weight,
                total,
                delta,
                extra,
            },
        )
}

proptest! {
    #[test]
    fn json_round_trip(record in record()) {
        let _lock = global_lock();
        let value = dbjson::build_json(&record).unwrap();
        let expected = serde_json::to_vec(&record).unwrap();
        prop_assert_eq!(value.wire_bytes().unwrap(), expected.as_slice());
        let decoded: Record = dbjson::extract_json(&value).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn jsonb_round_trip(record in record()) {
        let _lock = global_lock();
        let value = dbjson::build_jsonb(&record).unwrap();
        let decoded: Record = dbjson::extract_json(&value).unwrap();
        prop_assert_eq!(decoded, record);
    }
}

#[test]
fn wide_numbers_survive_the_global_codec() {
    let _lock = global_lock();
    let value = dbjson::build_jsonb(&(u128::MAX, i128::MIN, 1.1f32)).unwrap();
    assert_eq!(
        &value.wire_bytes().unwrap()[1..],
        serde_json::to_vec(&(u128::MAX, i128::MIN, 1.1f32)).unwrap()
    );
    let decoded: (u128, i128, f32) = dbjson::extract_json(&value).unwrap();
    assert_eq!(decoded, (u128::MAX, i128::MIN, 1.1f32));
}

#[test]
fn build_matches_serde_json_bytes() {
    let _lock = global_lock();
    let value = dbjson::build_json(&object()).unwrap();
    assert_eq!(value.wire_bytes().unwrap(), br#"{"foo":1,"bar":2}"#);
}

#[test]
fn pretty_registry_still_round_trips() {
    let registry = dbjson::CodecRegistry::builder().pretty(true).build();
    let value = dbjson::build_jsonb_in(&registry, &object()).unwrap();
    assert!(value.wire_bytes().unwrap().contains(&b'\n'));
    let decoded: Object = dbjson::extract_json_in(&registry, &value).unwrap();
    assert_eq!(decoded, object());
}
