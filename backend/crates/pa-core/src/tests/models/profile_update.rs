use crate::{Identity, ProfileUpdate};

fn sample_identity() -> Identity {
    let mut identity = Identity::new("bob".to_string(), "bob@example.com".to_string());
    identity.profile.name = "Bob Original".to_string();
    identity.profile.country = Some("US".to_string());
    identity.profile.year_of_birth = Some(1990);
    identity
}

#[test]
fn test_apply_empty_update_keeps_everything() {
    let mut identity = sample_identity();
    let before = identity.clone();

    ProfileUpdate::default().apply_to(&mut identity);

    assert_eq!(identity, before);
}

#[test]
fn test_apply_partial_update() {
    let mut identity = sample_identity();

    let update = ProfileUpdate {
        name: Some("Bob Updated".to_string()),
        gender: Some("m".to_string()),
        is_staff: Some(true),
        phone_number: Some("+1 555 0100".to_string()),
        ..Default::default()
    };
    update.apply_to(&mut identity);

    assert_eq!(identity.profile.name, "Bob Updated");
    assert_eq!(identity.profile.gender.as_deref(), Some("m"));
    assert_eq!(identity.profile.phone_number.as_deref(), Some("+1 555 0100"));
    assert!(identity.is_staff);
    // Unsupplied fields keep their prior values
    assert_eq!(identity.email, "bob@example.com");
    assert_eq!(identity.profile.country.as_deref(), Some("US"));
    assert_eq!(identity.profile.year_of_birth, Some(1990));
}

#[test]
fn test_resulting_values_fall_back_to_stored() {
    let identity = sample_identity();
    let update = ProfileUpdate::default();

    assert_eq!(update.resulting_name(&identity), "Bob Original");

    let update = ProfileUpdate {
        email: Some("new@example.com".to_string()),
        name: Some("New".to_string()),
        ..Default::default()
    };
    assert_eq!(update.resulting_name(&identity), "New");
}

#[test]
fn test_new_email_only_for_real_changes() {
    let identity = sample_identity();

    assert_eq!(ProfileUpdate::default().new_email(&identity), None);

    let same = ProfileUpdate {
        email: Some("bob@example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(same.new_email(&identity), None);

    let recased = ProfileUpdate {
        email: Some(" BOB@Example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(recased.new_email(&identity), None);

    let changed = ProfileUpdate {
        email: Some("robert@example.com".to_string()),
        ..Default::default()
    };
    assert_eq!(changed.new_email(&identity), Some("robert@example.com"));
}

#[test]
fn test_deserialize_ignores_missing_fields() {
    let update: ProfileUpdate =
        serde_json::from_str(r#"{"country": "FR", "year_of_birth": 1985}"#).unwrap();

    assert_eq!(update.country.as_deref(), Some("FR"));
    assert_eq!(update.year_of_birth, Some(1985));
    assert!(update.email.is_none());
    assert!(update.is_staff.is_none());
}
