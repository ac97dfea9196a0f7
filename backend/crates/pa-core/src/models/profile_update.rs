use crate::Identity;

use serde::Deserialize;

/// Partial update of an identity and its profile.
///
/// `None` means "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub year_of_birth: Option<i32>,
    #[serde(default)]
    pub level_of_education: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_staff: Option<bool>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl ProfileUpdate {
    /// The supplied email when it differs from the stored one.
    ///
    /// Comparison is ASCII case-insensitive and ignores surrounding
    /// whitespace, the same way the store matches emails.
    pub fn new_email(&self, identity: &Identity) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|email| !email.trim().eq_ignore_ascii_case(identity.email.trim()))
    }

    /// Display name the identity will have after the update
    pub fn resulting_name<'a>(&'a self, identity: &'a Identity) -> &'a str {
        self.name.as_deref().unwrap_or(&identity.profile.name)
    }

    /// Overwrite every supplied field on `identity`
    pub fn apply_to(self, identity: &mut Identity) {
        if let Some(email) = self.email {
            identity.email = email;
        }
        if let Some(is_staff) = self.is_staff {
            identity.is_staff = is_staff;
        }

        let profile = &mut identity.profile;
        if let Some(name) = self.name {
            profile.name = name;
        }
        if self.gender.is_some() {
            profile.gender = self.gender;
        }
        if self.year_of_birth.is_some() {
            profile.year_of_birth = self.year_of_birth;
        }
        if self.level_of_education.is_some() {
            profile.level_of_education = self.level_of_education;
        }
        if self.country.is_some() {
            profile.country = self.country;
        }
        if self.phone_number.is_some() {
            profile.phone_number = self.phone_number;
        }
    }
}
