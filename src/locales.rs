//! Builtin locale datasets, compiled into the binary.

/// Locale codes with a compiled-in dataset.
pub const BUILTIN_LOCALES: &[&str] = &["de", "en"];

/// The raw YAML dataset for a builtin locale, if there is one.
pub fn builtin(locale: &str) -> Option<&'static str> {
    match locale {
        "de" => Some(include_str!("../locales/de.yml")),
        "en" => Some(include_str!("../locales/en.yml")),
        _ => None,
    }
}
