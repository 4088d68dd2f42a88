//! Fallback labels and heading anchors for content that lacks them.

use crate::config::{DEFAULT_BUTTON_LABEL, DEFAULT_IMAGE_ALT, MAX_ANCHOR_LEN};
use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("valid slug filter pattern"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Label for a button, falling back to a generic one when empty.
pub fn button_label(label: Option<&str>) -> String {
    match label.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => DEFAULT_BUTTON_LABEL.to_string(),
    }
}

/// Alternative text for an image, falling back to a generic description.
pub fn image_alt(alt: Option<&str>) -> String {
    match alt {
        Some(alt) if !alt.is_empty() => alt.to_string(),
        _ => DEFAULT_IMAGE_ALT.to_string(),
    }
}

/// Builds an anchor id from heading text.
///
/// Lowercases, drops everything outside `[a-z0-9\s]`, joins words with `-`
/// and keeps at most 50 characters. Returns `None` for empty text.
pub fn heading_anchor(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let lower = text.to_lowercase();
    let filtered = NON_SLUG_CHARS.replace_all(&lower, "");
    let joined = WHITESPACE_RUNS.replace_all(&filtered, "-");
    Some(joined.chars().take(MAX_ANCHOR_LEN).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_button_gets_generic_label() {
        assert_eq!(button_label(None), DEFAULT_BUTTON_LABEL);
        assert_eq!(button_label(Some("   ")), DEFAULT_BUTTON_LABEL);
        assert_eq!(button_label(Some("Reservar")), "Reservar");
    }

    #[test]
    fn missing_alt_gets_generic_text() {
        assert_eq!(image_alt(None), DEFAULT_IMAGE_ALT);
        assert_eq!(image_alt(Some("")), DEFAULT_IMAGE_ALT);
        assert_eq!(image_alt(Some("Salón")), "Salón");
    }

    #[test]
    fn heading_anchor_slugifies() {
        assert_eq!(heading_anchor("Sobre Nosotros").as_deref(), Some("sobre-nosotros"));
        assert_eq!(
            heading_anchor("Apartamento  Vista Mar, 2 hab.").as_deref(),
            Some("apartamento-vista-mar-2-hab")
        );
        assert_eq!(heading_anchor("Ubicación").as_deref(), Some("ubicacin"));
        assert_eq!(heading_anchor(""), None);
    }

    #[test]
    fn heading_anchor_is_truncated() {
        let long = "palabra ".repeat(20);
        let anchor = heading_anchor(&long).expect("non-empty heading");
        assert_eq!(anchor.chars().count(), MAX_ANCHOR_LEN);
    }
}
