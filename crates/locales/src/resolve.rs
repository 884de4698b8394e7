//! Translation-key and schema resolution.
//!
//! A string resolves only when it carries the literal `t:` prefix and its
//! dotted path reaches a string leaf in the translation tree. Everything
//! else — no prefix, missing segment, non-string leaf — passes through
//! unchanged, prefix included, so unresolved keys stay visible in the
//! preview instead of disappearing.

use crate::translations::Translations;
use theme_schema_core::schema::{
    SchemaBlock, SchemaSetting, SectionSchema, ShopifySchema, ThemeSettingsGroup,
};

/// The literal prefix marking a translation key.
pub const KEY_PREFIX: &str = "t:";

/// Whether a string looks like a translation key.
pub fn is_translation_key(value: &str) -> bool {
    value.starts_with(KEY_PREFIX)
}

/// Resolve one string against the translation tree.
///
/// Returns the translated string on a hit, and the original input (full
/// key, prefix included) on anything else.
pub fn resolve_key(key: &str, translations: &Translations) -> String {
    let Some(path) = key.strip_prefix(KEY_PREFIX) else {
        return key.to_string();
    };
    match translations.lookup(path) {
        Some(translated) => translated.to_string(),
        None => key.to_string(),
    }
}

/// Resolve every translatable field of a schema in a fresh deep copy.
///
/// The rewritten field set is fixed: a section's `name`, each setting's
/// `label`/`content`/`info`/`placeholder` and `options[].label`, each
/// block's `name` and nested settings, and each settings group's `name`
/// (only when it is itself a translation key) and settings. No other field
/// is ever touched, and the input is never mutated.
pub fn resolve_schema(schema: &ShopifySchema, translations: &Translations) -> ShopifySchema {
    let mut resolved = schema.clone();
    match &mut resolved {
        ShopifySchema::Section(section) => resolve_section(section, translations),
        ShopifySchema::Settings(groups) => {
            for group in groups {
                resolve_group(group, translations);
            }
        }
    }
    resolved
}

fn resolve_section(section: &mut SectionSchema, translations: &Translations) {
    rewrite(&mut section.name, translations);
    if let Some(settings) = &mut section.settings {
        for setting in settings {
            resolve_setting(setting, translations);
        }
    }
    if let Some(blocks) = &mut section.blocks {
        for block in blocks {
            resolve_block(block, translations);
        }
    }
}

fn resolve_group(group: &mut ThemeSettingsGroup, translations: &Translations) {
    // The group name doubles as the `theme_info` sentinel; only rewrite it
    // when it is itself a translation key.
    if group.name.as_deref().is_some_and(is_translation_key) {
        rewrite(&mut group.name, translations);
    }
    if let Some(settings) = &mut group.settings {
        for setting in settings {
            resolve_setting(setting, translations);
        }
    }
}

fn resolve_block(block: &mut SchemaBlock, translations: &Translations) {
    rewrite(&mut block.name, translations);
    if let Some(settings) = &mut block.settings {
        for setting in settings {
            resolve_setting(setting, translations);
        }
    }
}

fn resolve_setting(setting: &mut SchemaSetting, translations: &Translations) {
    rewrite(&mut setting.label, translations);
    rewrite(&mut setting.content, translations);
    rewrite(&mut setting.info, translations);
    rewrite(&mut setting.placeholder, translations);
    if let Some(options) = &mut setting.options {
        for option in options {
            rewrite(&mut option.label, translations);
        }
    }
}

fn rewrite(field: &mut Option<String>, translations: &Translations) {
    if let Some(value) = field
        && is_translation_key(value)
    {
        *value = resolve_key(value, translations);
    }
}
