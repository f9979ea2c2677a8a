use super::*;

#[test]
fn validate_register_input_builds_trimmed_payload() {
    let payload =
        validate_register_input(" Dana ", " dana@example.com ", "pw", Region::Asia)
            .expect("should validate");
    assert_eq!(payload.name, "Dana");
    assert_eq!(payload.email, "dana@example.com");
    assert_eq!(payload.region, Region::Asia);
}

#[test]
fn validate_register_input_requires_all_text_fields() {
    let expected = Err("Name, email, and password are required.");
    assert_eq!(
        validate_register_input("", "dana@example.com", "pw", Region::Europe),
        expected
    );
    assert_eq!(
        validate_register_input("Dana", "   ", "pw", Region::Europe),
        expected
    );
    assert_eq!(
        validate_register_input("Dana", "dana@example.com", "", Region::Europe),
        expected
    );
}
