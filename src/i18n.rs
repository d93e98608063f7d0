//! Translation bundles for the text the control surfaces display.
//!
//! Lookup never fails: the bundle starts from the builtin default locale and
//! overlays a builtin locale selection, then a JSON translation file, then a
//! direct mapping, in that order. A key absent everywhere degrades to the
//! raw key. Unreadable or undecodable translation files are logged and
//! skipped, never fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::options::Options;

pub const SEARCH_PLACEHOLDER: &str = "search.placeholder";
pub const SEARCH_ALL: &str = "search.all";
pub const INFO_SHOWING: &str = "info.showing";
pub const PAGE_PREVIOUS: &str = "page.previous";
pub const PAGE_NEXT: &str = "page.next";
pub const PAGE_LENGTH_PREFIX: &str = "page.lengthPrefix";
pub const PAGE_LENGTH_SUFFIX: &str = "page.lengthSuffix";

/// The reference locale the defaults come from.
const DEFAULT_LOCALE: &str = "fr";

fn builtin(locale: &str) -> Option<Vec<(&'static str, &'static str)>> {
    match locale {
        "fr" => Some(vec![
            (SEARCH_PLACEHOLDER, "Recherche..."),
            (SEARCH_ALL, "Tout"),
            (
                INFO_SHOWING,
                "Affichage de l'élément {start} à {end} sur {total} éléments",
            ),
            (PAGE_PREVIOUS, "Précédent"),
            (PAGE_NEXT, "Suivant"),
            (PAGE_LENGTH_PREFIX, "Afficher"),
            (PAGE_LENGTH_SUFFIX, "éléments"),
        ]),
        "en" => Some(vec![
            (SEARCH_PLACEHOLDER, "Search..."),
            (SEARCH_ALL, "All"),
            (INFO_SHOWING, "Showing entry {start} to {end} of {total} entries"),
            (PAGE_PREVIOUS, "Previous"),
            (PAGE_NEXT, "Next"),
            (PAGE_LENGTH_PREFIX, "Show"),
            (PAGE_LENGTH_SUFFIX, "entries"),
        ]),
        _ => None,
    }
}

/// Resolved strings for one enhancer instance.
#[derive(Debug, Clone)]
pub struct TranslationBundle {
    strings: HashMap<String, String>,
}

impl TranslationBundle {
    /// The builtin default bundle.
    pub fn default_bundle() -> Self {
        let mut bundle = Self {
            strings: HashMap::new(),
        };
        bundle.overlay_builtin(DEFAULT_LOCALE);
        bundle
    }

    /// Resolve the bundle for a set of options: builtin default, then the
    /// selected builtin locale, then the translation file, then the direct
    /// mapping.
    pub fn from_options(options: &Options) -> Self {
        let mut bundle = Self::default_bundle();

        if let Some(language) = &options.language {
            if !bundle.overlay_builtin(language) {
                warn!(target: "i18n", "unknown builtin locale '{}', keeping defaults", language);
            }
        }

        if let Some(path) = &options.translation_file {
            bundle.overlay_file(path);
        }

        if let Some(mapping) = &options.translation {
            for (key, value) in mapping {
                bundle.strings.insert(key.clone(), value.clone());
            }
        }

        bundle
    }

    fn overlay_builtin(&mut self, locale: &str) -> bool {
        match builtin(locale) {
            Some(strings) => {
                for (key, value) in strings {
                    self.strings.insert(key.to_string(), value.to_string());
                }
                true
            }
            None => false,
        }
    }

    /// Overlay a JSON file of `{"key": "string"}` pairs. Failures are logged
    /// and the bundle keeps whatever it already holds.
    fn overlay_file(&mut self, path: &Path) {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(target: "i18n", "cannot read translation file {}: {}", path.display(), err);
                return;
            }
        };

        match serde_json::from_str::<HashMap<String, String>>(&contents) {
            Ok(mapping) => {
                for (key, value) in mapping {
                    self.strings.insert(key, value);
                }
            }
            Err(err) => {
                warn!(target: "i18n", "cannot parse translation file {}: {}", path.display(), err);
            }
        }
    }

    /// Look a key up, degrading to the raw key when absent.
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Format the result-count line for the info label.
    pub fn format_info(&self, start: usize, end: usize, total: usize) -> String {
        self.lookup(INFO_SHOWING)
            .replace("{start}", &start.to_string())
            .replace("{end}", &end.to_string())
            .replace("{total}", &total.to_string())
    }
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::default_bundle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_bundle_is_french() {
        let bundle = TranslationBundle::default_bundle();
        assert_eq!(bundle.lookup(SEARCH_PLACEHOLDER), "Recherche...");
        assert_eq!(bundle.lookup(PAGE_NEXT), "Suivant");
    }

    #[test]
    fn test_builtin_locale_selection() {
        let options = Options {
            language: Some("en".to_string()),
            ..Options::default()
        };
        let bundle = TranslationBundle::from_options(&options);
        assert_eq!(bundle.lookup(SEARCH_PLACEHOLDER), "Search...");
    }

    #[test]
    fn test_unknown_locale_keeps_defaults() {
        let options = Options {
            language: Some("xx".to_string()),
            ..Options::default()
        };
        let bundle = TranslationBundle::from_options(&options);
        assert_eq!(bundle.lookup(PAGE_PREVIOUS), "Précédent");
    }

    #[test]
    fn test_direct_mapping_wins() {
        let mut mapping = HashMap::new();
        mapping.insert(PAGE_NEXT.to_string(), "Weiter".to_string());
        let options = Options {
            translation: Some(mapping),
            ..Options::default()
        };
        let bundle = TranslationBundle::from_options(&options);
        assert_eq!(bundle.lookup(PAGE_NEXT), "Weiter");
        // Untouched keys keep the defaults
        assert_eq!(bundle.lookup(PAGE_PREVIOUS), "Précédent");
    }

    #[test]
    fn test_translation_file_overlay() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"page.next": "Volgende"}}"#).unwrap();

        let options = Options {
            translation_file: Some(file.path().to_path_buf()),
            ..Options::default()
        };
        let bundle = TranslationBundle::from_options(&options);
        assert_eq!(bundle.lookup(PAGE_NEXT), "Volgende");
    }

    #[test]
    fn test_bad_translation_file_degrades_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let options = Options {
            translation_file: Some(file.path().to_path_buf()),
            ..Options::default()
        };
        let bundle = TranslationBundle::from_options(&options);
        assert_eq!(bundle.lookup(PAGE_NEXT), "Suivant");
    }

    #[test]
    fn test_unknown_key_degrades_to_raw_key() {
        let bundle = TranslationBundle::default_bundle();
        assert_eq!(bundle.lookup("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_format_info() {
        let bundle = TranslationBundle::default_bundle();
        assert_eq!(
            bundle.format_info(1, 10, 25),
            "Affichage de l'élément 1 à 10 sur 25 éléments"
        );
    }
}
