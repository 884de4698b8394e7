//! Schema extraction from raw document text.
//!
//! [`extract`] is pure: it performs no file I/O and never fails. "No schema
//! present" is a normal outcome (`schema: None`, no diagnostics); malformed
//! JSON degrades to `None` plus an error [`Diagnostic`] whose span points
//! into the source text.

use serde_json::Value;

use crate::schema::{SectionSchema, ShopifySchema, ThemeSettingsGroup};
use theme_schema_diagnostics::{Diagnostic, LineIndex, Span, codes};

/// Which kind of document the text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A Liquid template that may embed a `{% schema %}` block.
    Liquid,
    /// A theme settings JSON document (`settings_schema.json` style).
    Json,
}

/// Result of extracting a schema from document text.
#[derive(Debug, serde::Serialize)]
pub struct ExtractResult {
    /// The extracted schema, or `None` when absent or malformed.
    pub schema: Option<ShopifySchema>,
    /// Byte span of the schema body in the source text, when one was found.
    /// Present even when the body failed to parse, so a host can still
    /// navigate to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    /// Diagnostics produced during extraction.
    pub diagnostics: Vec<Diagnostic>,
}

impl ExtractResult {
    fn absent() -> Self {
        Self {
            schema: None,
            span: None,
            diagnostics: Vec::new(),
        }
    }
}

// ── Public API ──────────────────────────────────────────────────────────

/// Extract a schema from document text.
///
/// For [`FileKind::Liquid`], isolates the first `{% schema %}` ...
/// `{% endschema %}` pair (case-insensitive, whitespace-control dashes
/// tolerated) and parses its body as a JSON section schema. For
/// [`FileKind::Json`], parses the whole text and accepts only a non-empty
/// array of setting group objects.
pub fn extract(text: &str, kind: FileKind) -> ExtractResult {
    match kind {
        FileKind::Liquid => extract_liquid(text),
        FileKind::Json => extract_settings(text),
    }
}

// ── Liquid schema blocks ────────────────────────────────────────────────

fn extract_liquid(text: &str) -> ExtractResult {
    let Some(open) = find_liquid_tag(text, 0, "schema") else {
        return ExtractResult::absent();
    };
    let Some(close) = find_liquid_tag(text, open.end, "endschema") else {
        return ExtractResult::absent();
    };

    let raw_body = &text[open.end..close.start];
    // Span covers the trimmed body so hosts can reveal exactly the JSON.
    let lead = raw_body.len() - raw_body.trim_start().len();
    let body = raw_body.trim();
    let body_start = open.end + lead;
    let span = Span::new(body_start, body_start + body.len());

    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(err) => {
            let pos = body_start + LineIndex::new(body).offset_of(err.line(), err.column());
            return ExtractResult {
                schema: None,
                span: Some(span),
                diagnostics: vec![Diagnostic::error(
                    codes::SCHEMA_BLOCK_INVALID_JSON,
                    format!("schema block is not valid JSON: {err}"),
                    Some(Span::empty(pos.min(text.len()))),
                )],
            };
        }
    };

    if !value.is_object() {
        return ExtractResult {
            schema: None,
            span: Some(span),
            diagnostics: vec![Diagnostic::info(
                codes::SCHEMA_BLOCK_UNEXPECTED_SHAPE,
                format!(
                    "schema block must be a JSON object, found {}",
                    json_shape(&value)
                ),
                Some(span),
            )],
        };
    }

    match serde_json::from_value::<SectionSchema>(value) {
        Ok(section) => ExtractResult {
            schema: Some(ShopifySchema::Section(section)),
            span: Some(span),
            diagnostics: Vec::new(),
        },
        Err(err) => ExtractResult {
            schema: None,
            span: Some(span),
            diagnostics: vec![Diagnostic::error(
                codes::SCHEMA_BLOCK_INVALID_JSON,
                format!("schema block does not describe a section: {err}"),
                Some(span),
            )],
        },
    }
}

// ── Theme settings documents ────────────────────────────────────────────

fn extract_settings(text: &str) -> ExtractResult {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(err) => {
            let pos = LineIndex::new(text).offset_of(err.line(), err.column());
            return ExtractResult {
                schema: None,
                span: None,
                diagnostics: vec![Diagnostic::error(
                    codes::SETTINGS_INVALID_JSON,
                    format!("settings document is not valid JSON: {err}"),
                    Some(Span::empty(pos.min(text.len()))),
                )],
            };
        }
    };

    let shape = json_shape(&value);
    let rejected = |detail: String| ExtractResult {
        schema: None,
        span: None,
        diagnostics: vec![Diagnostic::info(
            codes::SETTINGS_UNEXPECTED_SHAPE,
            detail,
            None,
        )],
    };

    let Value::Array(items) = value else {
        return rejected(format!(
            "settings document must be an array of setting groups, found {shape}"
        ));
    };
    if items.is_empty() {
        return rejected("settings document is an empty array".into());
    }

    match serde_json::from_value::<Vec<ThemeSettingsGroup>>(Value::Array(items)) {
        Ok(groups) => ExtractResult {
            schema: Some(ShopifySchema::Settings(groups)),
            span: Some(Span::new(0, text.len())),
            diagnostics: Vec::new(),
        },
        Err(err) => rejected(format!(
            "settings document entries are not setting groups: {err}"
        )),
    }
}

// ── Liquid tag scanning ─────────────────────────────────────────────────

/// Byte range of a matched `{% word %}` tag, delimiters included.
struct TagMatch {
    start: usize,
    end: usize,
}

/// Find the first `{% word %}` tag at or after `from`.
///
/// Matches case-insensitively and tolerates whitespace-control dashes
/// (`{%-`, `-%}`) and any run of spaces/tabs/newlines around the word.
fn find_liquid_tag(text: &str, from: usize, word: &str) -> Option<TagMatch> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] != b'{' || bytes[i + 1] != b'%' {
            i += 1;
            continue;
        }
        if let Some(end) = match_tag_at(bytes, i, word) {
            return Some(TagMatch { start: i, end });
        }
        i += 2;
    }
    None
}

/// Given `bytes[at..]` starting with `{%`, return the end offset of the tag
/// if it names `word`, otherwise `None`.
fn match_tag_at(bytes: &[u8], at: usize, word: &str) -> Option<usize> {
    let mut i = at + 2;
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    let w = word.as_bytes();
    if i + w.len() > bytes.len() {
        return None;
    }
    if !bytes[i..i + w.len()].eq_ignore_ascii_case(w) {
        return None;
    }
    i += w.len();
    // The word must end here: "schemax" is not "schema".
    if bytes
        .get(i)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
        return None;
    }
    while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
        i += 1;
    }
    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    if bytes.get(i) == Some(&b'%') && bytes.get(i + 1) == Some(&b'}') {
        Some(i + 2)
    } else {
        None
    }
}

fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
