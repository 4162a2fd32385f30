//! Display-language bootstrap.
//!
//! Runs once at startup: picks the persisted locale (falling back to Chinese
//! for anything absent or unrecognized), activates it, and mirrors it onto
//! the document `lang` attribute. Runtime locale switching is a separate
//! concern handled by the settings UI.

use crate::session::SessionStore;

pub const FALLBACK_LOCALE: &str = "zh";
pub const SUPPORTED_LOCALES: &[&str] = &["zh", "bo"];

/// Validate a persisted locale tag against the shipped catalogs.
pub fn resolve_locale(saved: Option<&str>) -> &'static str {
    saved
        .and_then(|tag| SUPPORTED_LOCALES.iter().find(|known| **known == tag))
        .copied()
        .unwrap_or(FALLBACK_LOCALE)
}

pub fn init(store: &dyn SessionStore) -> &'static str {
    let saved = store.locale();
    let locale = resolve_locale(saved.as_deref());
    rust_i18n::set_locale(locale);
    apply_document_lang(locale);
    log::info!("locale initialized: {}", locale);
    locale
}

#[cfg(target_arch = "wasm32")]
fn apply_document_lang(locale: &str) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("lang", locale);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_document_lang(_locale: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_falls_back_to_chinese() {
        assert_eq!(resolve_locale(None), "zh");
    }

    #[test]
    fn unrecognized_preference_falls_back_to_chinese() {
        assert_eq!(resolve_locale(Some("fr")), "zh");
        assert_eq!(resolve_locale(Some("")), "zh");
        assert_eq!(resolve_locale(Some("ZH")), "zh");
    }

    #[test]
    fn supported_preferences_are_kept() {
        assert_eq!(resolve_locale(Some("zh")), "zh");
        assert_eq!(resolve_locale(Some("bo")), "bo");
    }
}
