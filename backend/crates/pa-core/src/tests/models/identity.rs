use crate::Identity;

use chrono::Utc;

#[test]
fn test_identity_new() {
    let identity = Identity::new("alice".to_string(), "alice@example.com".to_string());

    assert_eq!(identity.id, 0);
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.email, "alice@example.com");
    assert!(identity.is_active);
    assert!(!identity.is_staff);
    assert!(identity.language.is_none());
    assert!(!identity.has_profile_image());
}

#[test]
fn test_identity_has_profile_image() {
    let mut identity = Identity::new("alice".to_string(), "alice@example.com".to_string());

    identity.profile.profile_image_uploaded_at = Some(Utc::now());
    assert!(identity.has_profile_image());

    identity.profile.profile_image_uploaded_at = None;
    assert!(!identity.has_profile_image());
}
