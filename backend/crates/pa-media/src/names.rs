use std::collections::BTreeMap;
use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Variant name (`full`, `large`, ...) -> stored file name
pub type ProfileImageNames = BTreeMap<String, String>;

/// Derive the file names of every configured variant for `username`.
///
/// Deterministic for a given secret; without the secret the names cannot
/// be guessed from the username.
pub fn profile_image_names(
    secret: &str,
    username: &str,
    sizes: &BTreeMap<String, u32>,
) -> ProfileImageNames {
    let base = hashed_base_name(secret, username);
    sizes
        .iter()
        .map(|(name, px)| (name.clone(), format!("{base}_{px}.jpg")))
        .collect()
}

fn hashed_base_name(secret: &str, username: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(username.as_bytes());

    let digest = hasher.finalize();
    digest.iter().fold(String::with_capacity(64), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}
