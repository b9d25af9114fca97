use fieldwork::form::{FieldErrorKind, FieldRule, FormSchema};

#[test]
fn required_fails_on_empty_value() {
    let rule = FieldRule::required("Please enter your name");
    let error = rule.check("").expect("empty value must fail");
    assert_eq!(error.kind, FieldErrorKind::Required);
    assert_eq!(error.message, "Please enter your name");
}

#[test]
fn required_passes_on_any_content() {
    let rule = FieldRule::required("Please enter your name");
    assert!(rule.check("Alice").is_none());
    assert!(rule.check(" ").is_none());
}

#[test]
fn email_rule_accepts_common_shapes() {
    let rule = FieldRule::email("Please enter a valid email address");
    for value in [
        "alice@example.com",
        "ALICE@EXAMPLE.COM",
        "a.b+tag@mail.example.co",
        "user_name%x@host-name.org",
    ] {
        assert!(rule.check(value).is_none(), "should accept {value}");
    }
}

#[test]
fn email_rule_rejects_malformed_shapes() {
    let rule = FieldRule::email("Please enter a valid email address");
    for value in [
        "not-an-email",
        "missing@tld",
        "@example.com",
        "name@",
        "two words@example.com",
    ] {
        let error = rule.check(value).expect("should reject");
        assert_eq!(error.kind, FieldErrorKind::Pattern, "value: {value}");
    }
}

#[test]
fn schema_surfaces_required_before_pattern() {
    let schema = FormSchema::contact();
    let email = &schema.specs()[1];

    let error = email.validate("").expect("empty email fails");
    assert_eq!(error.kind, FieldErrorKind::Required);

    let error = email.validate("nope").expect("malformed email fails");
    assert_eq!(error.kind, FieldErrorKind::Pattern);

    assert!(email.validate("alice@example.com").is_none());
}

#[test]
fn schema_labels_match_fields() {
    let schema = FormSchema::contact();
    let labels: Vec<&str> = schema.specs().iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Name", "Email"]);
}
