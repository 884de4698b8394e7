//! Directory-keyed translation cache.
//!
//! Locale files are read synchronously once per base directory and memoized
//! for the cache's lifetime. The host invalidates an entry (or the whole
//! cache) when a locale file is saved; until then, stale on-disk edits are
//! intentionally not observed. Loading is idempotent, so recomputation on a
//! miss needs no deduplication.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::discover::{find_locales_dir, locale_file_candidates};
use crate::translations::Translations;
use theme_schema_diagnostics::{Diagnostic, codes};

/// The outcome of loading translations for one base directory.
#[derive(Debug, Clone)]
pub struct LoadedLocale {
    /// The loaded translation tree (empty when nothing usable was found).
    pub translations: Translations,
    /// The locale file the translations came from, when one parsed.
    pub source: Option<PathBuf>,
    /// Diagnostics from unreadable or unparseable candidate files.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadedLocale {
    fn empty() -> Self {
        Self {
            translations: Translations::empty(),
            source: None,
            diagnostics: Vec::new(),
        }
    }

    /// Load translations for `base`: discover the locale directory, then try
    /// each candidate file in preference order until one parses.
    ///
    /// A candidate that exists but fails to read or parse adds a diagnostic
    /// and falls through to the next candidate. No locale directory, or no
    /// usable file, yields an empty set.
    pub fn load(base: &Path) -> Self {
        let Some(dir) = find_locales_dir(base) else {
            return Self::empty();
        };

        let mut loaded = Self::empty();
        for name in locale_file_candidates() {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    loaded.diagnostics.push(file_diagnostic(
                        codes::LOCALE_UNREADABLE,
                        &path,
                        &err.to_string(),
                    ));
                    continue;
                }
            };
            match Translations::from_jsonc(&text) {
                Ok(translations) => {
                    loaded.translations = translations;
                    loaded.source = Some(path);
                    break;
                }
                Err(err) => {
                    loaded.diagnostics.push(file_diagnostic(
                        codes::LOCALE_INVALID_JSON,
                        &path,
                        &err.to_string(),
                    ));
                }
            }
        }
        loaded
    }
}

fn file_diagnostic(code: &'static str, path: &Path, detail: &str) -> Diagnostic {
    Diagnostic::error(code, format!("{}: {detail}", path.display()), None).with_context(
        BTreeMap::from([("file".to_string(), path.display().to_string())]),
    )
}

/// An explicit, caller-owned cache of loaded translations keyed by base
/// directory.
///
/// The host's save-listener calls [`LocaleCache::invalidate`] (or
/// [`LocaleCache::clear`]) when a file under a `locales` path is written;
/// nothing else drops entries.
#[derive(Debug, Default)]
pub struct LocaleCache {
    entries: HashMap<PathBuf, LoadedLocale>,
}

impl LocaleCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached translations for `base`, loading them on a miss.
    pub fn get_or_load(&mut self, base: &Path) -> &LoadedLocale {
        self.entries
            .entry(base.to_path_buf())
            .or_insert_with(|| LoadedLocale::load(base))
    }

    /// Drop the cached entry for one base directory.
    pub fn invalidate(&mut self, base: &Path) {
        self.entries.remove(base);
    }

    /// Drop every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
