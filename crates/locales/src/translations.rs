//! Loaded translation trees and dotted-path lookup.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while loading a locale file.
///
/// These stay internal to the loading path: the cache converts them into
/// diagnostics and an empty translation set rather than surfacing them.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The file could not be read.
    #[error("cannot read locale file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON even after JSONC relaxation.
    #[error("invalid locale JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// A loaded translation tree.
///
/// Conventional top-level namespaces are `names`, `settings`, `options`,
/// `content`, and `info`, but any nesting is accepted: [`Translations::lookup`]
/// walks an arbitrary dotted path and only succeeds when the terminal value
/// is a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    root: Value,
}

impl Translations {
    /// An empty translation set. Every lookup misses.
    pub fn empty() -> Self {
        Self { root: Value::Null }
    }

    /// Wrap an already-parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Parse JSONC text (comments and trailing commas tolerated) into a
    /// translation tree.
    pub fn from_jsonc(text: &str) -> Result<Self, LocaleError> {
        let relaxed = theme_schema_jsonc_strip::relax(text);
        Ok(Self {
            root: serde_json::from_str(&relaxed)?,
        })
    }

    /// Whether this set can resolve anything at all.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Walk a dotted path (e.g. `"sections.hero.name"`) through the tree.
    ///
    /// Returns `None` when any segment is missing or the terminal value is
    /// not a string.
    pub fn lookup(&self, dotted_path: &str) -> Option<&str> {
        let mut node = &self.root;
        for segment in dotted_path.split('.') {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }
}
