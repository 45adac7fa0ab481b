//! JSONB version byte framing through the public API.

use crate::common::*;
use dbjson::{Error, JsonKind, JsonValue, Malformed, JSONB_VERSION};

#[test]
fn jsonb_is_version_byte_then_encoder_output() {
    let _lock = global_lock();
    let json = dbjson::build_json(&object()).unwrap();
    let jsonb = dbjson::build_jsonb(&object()).unwrap();

    let text = json.wire_bytes().unwrap();
    let wire = jsonb.wire_bytes().unwrap();
    assert_eq!(wire[0], JSONB_VERSION);
    assert_eq!(&wire[1..], text);
}

#[test]
fn wire_bytes_survive_handoff() {
    let _lock = global_lock();
    let value = dbjson::build_jsonb(&object()).unwrap();
    let kind = value.kind();
    let bytes = value.into_wire_bytes();

    // What the protocol layer would hand back after a round trip to the server
    let received = JsonValue::from_oid(kind.oid(), bytes).unwrap();
    let decoded: Object = dbjson::extract_json(&received).unwrap();
    assert_eq!(decoded, object());
}

#[test]
fn unknown_version_byte_is_malformed() {
    let _lock = global_lock();
    for version in [0u8, 2, 0x7b, 0xff] {
        let mut wire = vec![version];
        wire.extend_from_slice(br#"{"foo":1,"bar":2}"#);
        let value = JsonValue::from_wire(JsonKind::Jsonb, wire);

        let err = dbjson::extract_json::<Object>(&value).unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(
            err,
            Error::MalformedValue(Malformed::UnsupportedVersion(v)) if v == version
        ));
    }
}

#[test]
fn empty_jsonb_is_malformed() {
    let _lock = global_lock();
    let value = JsonValue::from_wire(JsonKind::Jsonb, Vec::new());
    let err = dbjson::extract_json::<Object>(&value).unwrap_err();
    assert!(matches!(err, Error::MalformedValue(Malformed::MissingVersion)));
}

#[test]
fn version_byte_alone_is_a_decoding_failure() {
    let _lock = global_lock();
    let value = JsonValue::from_wire(JsonKind::Jsonb, vec![JSONB_VERSION]);
    let err = dbjson::extract_json::<Object>(&value).unwrap_err();
    assert!(err.is_decoding());
}

#[test]
fn sql_null_round_trip() {
    let _lock = global_lock();
    let value = JsonValue::from_oid(JsonKind::JSON_OID, None).unwrap();
    assert_eq!(dbjson::extract_optional_json::<Object>(&value).unwrap(), None);
    assert!(matches!(
        dbjson::extract_json::<Object>(&value),
        Err(Error::UnexpectedNull { kind: JsonKind::Json })
    ));
}

#[test]
fn non_json_oid_is_rejected() {
    let err = JsonValue::from_oid(25, Some(b"{}".to_vec())).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { oid: 25 }));
}
