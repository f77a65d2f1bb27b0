//! Label translation.
//!
//! Labels live in one TOML file per language under `assets/labels/`. Each
//! top-level table is a namespace; nested tables flatten into dotted keys, so
//! `[projects.engage360] title = "..."` is looked up as
//! `t(lang, "projects", "engage360.title")`.
//!
//! Lookups fall back from the requested language to English and finally to
//! the key itself, so a missing label is visible but never fatal.

use anyhow::{Context, Result};
use std::collections::HashMap;

use crate::prefs::Language;

const BUNDLED_EN: &str = include_str!("../../assets/labels/en.toml");
const BUNDLED_ES: &str = include_str!("../../assets/labels/es.toml");

/// Language used when a label is missing from the requested catalog.
pub const FALLBACK_LANGUAGE: Language = Language::English;

/// Flattened labels of one language, keyed `namespace.key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parses a TOML label file.
    ///
    /// Non-string leaves (numbers, arrays) are rejected so a typo cannot
    /// silently turn into a missing label.
    pub fn parse(src: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(src).context("Failed to parse label catalog")?;
        let mut entries = HashMap::new();
        flatten("", &table, &mut entries)?;
        Ok(Self { entries })
    }

    /// Label under the full dotted key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All full keys, unordered.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) -> Result<()> {
    for (key, value) in table {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(s) => {
                out.insert(full, s.clone());
            }
            toml::Value::Table(inner) => flatten(&full, inner, out)?,
            other => anyhow::bail!("Label '{full}' must be a string, found {}", other.type_str()),
        }
    }
    Ok(())
}

/// Lookup of `(language, namespace, key)` to display text.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalogs: HashMap<Language, Catalog>,
}

impl Translator {
    /// Translator with no catalogs; every lookup returns the key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translator over the label files compiled into the binary.
    ///
    /// A catalog that fails to parse is logged and left empty.
    pub fn bundled() -> Self {
        let mut translator = Self::new();
        for (language, src) in [
            (Language::English, BUNDLED_EN),
            (Language::Spanish, BUNDLED_ES),
        ] {
            match Catalog::parse(src) {
                Ok(catalog) => translator.insert(language, catalog),
                Err(err) => tracing::warn!("Bundled {language} labels unusable: {err:#}"),
            }
        }
        translator
    }

    /// Adds or replaces the catalog for `language`.
    pub fn insert(&mut self, language: Language, catalog: Catalog) {
        self.catalogs.insert(language, catalog);
    }

    /// Catalog for `language`, if loaded.
    pub fn catalog(&self, language: Language) -> Option<&Catalog> {
        self.catalogs.get(&language)
    }

    /// Label text without the key fallback.
    pub fn lookup(&self, language: Language, namespace: &str, key: &str) -> Option<&str> {
        let full = format!("{namespace}.{key}");
        [language, FALLBACK_LANGUAGE]
            .iter()
            .find_map(|lang| self.catalogs.get(lang).and_then(|c| c.get(&full)))
    }

    /// Label text: requested language, then English, then `key` itself.
    pub fn t(&self, language: Language, namespace: &str, key: &str) -> String {
        if let Some(text) = self.lookup(language, namespace, key) {
            return text.to_string();
        }
        tracing::debug!(lang = %language, namespace, key, "Missing label");
        key.to_string()
    }

    /// Binds a language so views can write `labels.t("header", "home")`.
    pub const fn labels(&self, language: Language) -> Labels<'_> {
        Labels {
            translator: self,
            language,
        }
    }
}

/// A [`Translator`] bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    translator: &'a Translator,
    language: Language,
}

impl Labels<'_> {
    /// Language the labels resolve in.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// See [`Translator::t`].
    pub fn t(&self, namespace: &str, key: &str) -> String {
        self.translator.t(self.language, namespace, key)
    }
}
