use super::*;

#[test]
fn ok_carries_data_and_empty_message() {
    let env = Envelope::ok(7);
    assert!(env.success);
    assert_eq!(env.data, Some(7));
    assert!(env.message.is_empty());
}

#[test]
fn empty_is_success_without_data() {
    let env = Envelope::<u32>::empty();
    assert!(env.success);
    assert!(env.data.is_none());
}

#[test]
fn failure_has_no_data() {
    let env = Envelope::<u32>::failure("boom");
    assert!(!env.success);
    assert!(env.data.is_none());
    assert_eq!(env.message, "boom");
}

#[test]
fn map_keeps_status_and_message() {
    let env = Envelope { success: false, data: Some(2), message: "partial".to_owned() };
    let mapped = env.map(|n| n * 10);
    assert!(!mapped.success);
    assert_eq!(mapped.data, Some(20));
    assert_eq!(mapped.message, "partial");
}

#[test]
fn into_data_ignores_payload_of_failed_envelope() {
    let env = Envelope { success: false, data: Some(1), message: String::new() };
    assert_eq!(env.into_data(), None);
    assert_eq!(Envelope::ok(1).into_data(), Some(1));
}

#[test]
fn serializes_null_data_for_failures() {
    let json = serde_json::to_value(Envelope::<u32>::failure("nope")).expect("serialize");
    assert_eq!(json, serde_json::json!({ "success": false, "data": null, "message": "nope" }));
}

#[test]
fn deserializes_without_message_field() {
    let env: Envelope<u32> = serde_json::from_str(r#"{"success":true,"data":3}"#).expect("deserialize");
    assert_eq!(env, Envelope::ok(3));
}
