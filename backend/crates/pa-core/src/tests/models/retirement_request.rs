use crate::retired_email_for;

#[test]
fn test_retired_email_ignores_case() {
    assert_eq!(
        retired_email_for("Alice@Example.com"),
        retired_email_for("alice@example.com")
    );
}

#[test]
fn test_retired_email_is_undeliverable() {
    let retired = retired_email_for("alice@example.com");

    assert!(retired.starts_with("retired__user_"));
    assert!(retired.ends_with("@retired.invalid"));
    assert!(!retired.contains("alice"));
}

#[test]
fn test_retired_email_differs_per_address() {
    assert_ne!(
        retired_email_for("a@example.com"),
        retired_email_for("b@example.com")
    );
}
