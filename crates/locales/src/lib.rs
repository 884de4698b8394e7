//! Translation resolution for theme schemas.
//!
//! Shopify schemas refer to human-readable strings through `t:` translation
//! keys (e.g. `t:sections.hero.name`) that indirect through a locale JSON
//! file. This crate discovers the locale directory for a theme, loads and
//! relaxes the locale file (comments and trailing commas are legal there),
//! and rewrites the translatable fields of a schema in a fresh deep copy.
//!
//! Loaded translations are cached per base directory in an explicit,
//! caller-owned [`LocaleCache`]; the host invalidates it when a locale file
//! is saved. All failure modes degrade to "key renders unresolved" plus a
//! diagnostic — nothing here returns an error across the crate boundary.

#![warn(missing_docs)]

/// Directory-keyed translation cache.
pub mod cache;
/// Locale directory and file discovery.
pub mod discover;
/// Translation-key and schema resolution.
pub mod resolve;
/// Loaded translation trees and dotted-path lookup.
pub mod translations;

// ── Convenience re-exports ──────────────────────────────────────────────

pub use cache::{LoadedLocale, LocaleCache};
pub use discover::{find_locales_dir, locale_file_candidates};
pub use resolve::{KEY_PREFIX, is_translation_key, resolve_key, resolve_schema};
pub use translations::{LocaleError, Translations};
