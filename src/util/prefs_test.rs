use super::*;

#[test]
fn encode_flag_uses_one_and_zero() {
    assert_eq!(encode_flag(true), "1");
    assert_eq!(encode_flag(false), "0");
}

#[test]
fn decode_flag_accepts_only_one() {
    assert!(decode_flag("1"));
    assert!(!decode_flag("0"));
    assert!(!decode_flag(""));
    assert!(!decode_flag("true"));
}

#[test]
fn sidebar_defaults_to_expanded_without_storage() {
    assert!(!sidebar_collapsed());
}

#[test]
fn load_json_without_storage_is_none() {
    let value: Option<serde_json::Value> = load_json("pdpl.anything");
    assert!(value.is_none());
}
