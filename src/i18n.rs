//! Localized UI strings.
//!
//! Translations live in flattened JSON files, one per language
//! (`locales/es.json` holds `{"search.no-more-results": "..."}`). Loading a
//! file nests its keys under the language code so several languages can be
//! held at once:
//!
//! ```json
//! { "es": { "search.no-more-results": "..." } }
//! ```
//!
//! Components receive a [`Localize`] implementation instead of reaching for a
//! global, so tests can hand them [`NoTranslations`] and fall back to the
//! built-in English text.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors raised while loading translation files.
#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read locale file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse locale file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves message keys to text in the active language.
pub trait Localize {
    /// Returns the translation for `key`, if one is loaded.
    fn localize(&self, key: &str) -> Option<String>;

    /// Returns the translation for `key`, or `default` when missing.
    fn text(&self, key: &str, default: &str) -> String {
        self.localize(key).unwrap_or_else(|| default.to_string())
    }
}

/// Localizer without any resources; every lookup falls back to the default.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTranslations;

impl Localize for NoTranslations {
    fn localize(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Translations keyed by language, then by message key.
#[derive(Clone, Debug)]
pub struct LocaleCatalog {
    language: String,
    resources: HashMap<String, HashMap<String, String>>,
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl LocaleCatalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            resources: HashMap::new(),
        }
    }

    /// Active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Loads a flattened translation file for `language`.
    ///
    /// With `merge` the file's keys are added to whatever is already loaded
    /// and win on conflicts; without it every loaded resource is replaced.
    pub fn load_resources(
        &mut self,
        path: impl AsRef<Path>,
        language: &str,
        merge: bool,
    ) -> Result<(), LocaleError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LocaleError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let flattened: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| LocaleError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        log::debug!(
            "Loaded {} messages for language {language} from {}",
            flattened.len(),
            path.display()
        );
        self.add_resources(language, flattened, merge);
        Ok(())
    }

    /// Adds in-memory translations for `language` with the same merge rules
    /// as [`LocaleCatalog::load_resources`].
    pub fn add_resources(
        &mut self,
        language: &str,
        messages: HashMap<String, String>,
        merge: bool,
    ) {
        if !merge {
            self.resources.clear();
        }
        self.resources
            .entry(language.to_string())
            .or_default()
            .extend(messages);
    }

    /// Loads `<dir>/<language>.json` for the active language.
    pub fn load_language_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), LocaleError> {
        let language = self.language.clone();
        let path = dir.as_ref().join(format!("{language}.json"));
        self.load_resources(path, &language, true)
    }
}

impl Localize for LocaleCatalog {
    fn localize(&self, key: &str) -> Option<String> {
        self.resources
            .get(&self.language)
            .and_then(|messages| messages.get(key))
            .cloned()
    }
}
