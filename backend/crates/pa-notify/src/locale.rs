/// Locales with translated templates
pub const SUPPORTED_LANGUAGES: [&str; 5] = ["en", "es", "fr", "de", "pt"];

/// Used when neither the user nor the platform names a supported locale
pub const FALLBACK_LANGUAGE: &str = "en";

/// Pick the template locale for a recipient.
///
/// Tries the user's preference, then the platform default, then
/// [`FALLBACK_LANGUAGE`]. Region suffixes are ignored, so `es-419` and
/// `pt_BR` resolve to `es` and `pt`.
pub fn resolve_language(preferred: Option<&str>, platform_default: &str) -> &'static str {
    preferred
        .and_then(supported)
        .or_else(|| supported(platform_default))
        .unwrap_or(FALLBACK_LANGUAGE)
}

fn supported(code: &str) -> Option<&'static str> {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|lang| *lang == primary)
}
