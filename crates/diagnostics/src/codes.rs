//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Codes are stable once published.

/// The JSON body of a `{% schema %}` block failed to parse.
pub const SCHEMA_BLOCK_INVALID_JSON: &str = "THM1101";

/// A settings document failed to parse as JSON.
pub const SETTINGS_INVALID_JSON: &str = "THM1102";

/// A settings document parsed but had the wrong shape (not a non-empty
/// array of setting groups).
pub const SETTINGS_UNEXPECTED_SHAPE: &str = "THM1103";

/// A schema block parsed as JSON but was not an object.
pub const SCHEMA_BLOCK_UNEXPECTED_SHAPE: &str = "THM1104";

/// A locale file failed to parse even after JSONC relaxation.
pub const LOCALE_INVALID_JSON: &str = "THM1201";

/// A locale file exists but could not be read.
pub const LOCALE_UNREADABLE: &str = "THM1202";

/// Human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        SCHEMA_BLOCK_INVALID_JSON => Some(
            "The text between {% schema %} and {% endschema %} is not valid JSON. \
             The preview cannot be built until the schema body parses.",
        ),
        SETTINGS_INVALID_JSON => Some(
            "The settings document is not valid JSON, so no theme settings \
             groups could be extracted from it.",
        ),
        SETTINGS_UNEXPECTED_SHAPE => Some(
            "A theme settings document must be a non-empty JSON array of \
             setting group objects. Other shapes are ignored.",
        ),
        SCHEMA_BLOCK_UNEXPECTED_SHAPE => Some(
            "A {% schema %} block must contain a single JSON object. Arrays \
             and scalars are ignored.",
        ),
        LOCALE_INVALID_JSON => Some(
            "The locale file is not valid JSON even after stripping comments \
             and trailing commas. Translation keys will render unresolved.",
        ),
        LOCALE_UNREADABLE => Some(
            "The locale file exists but could not be read from disk. \
             Translation keys will render unresolved.",
        ),
        _ => None,
    }
}
