//! WASM bindings for the theme schema toolchain.
//!
//! Exposes extract, resolve, and render functions to JavaScript via
//! `wasm-bindgen`, for extension hosts (e.g. a VS Code webview extension)
//! that drive the preview pipeline themselves. The host performs its own
//! file I/O: translations are passed in as a JSON string rather than
//! discovered on disk. Results are returned as native JS objects using
//! `serde-wasm-bindgen`.

use wasm_bindgen::prelude::*;

use theme_schema_core::{FileKind, ShopifySchema};
use theme_schema_locales::Translations;

// ── Public API ──────────────────────────────────────────────────────────

/// Extract a schema from document text.
///
/// `kind` is `"liquid"` or `"json"`. Returns `{ schema, span, diagnostics }`;
/// `schema` is `null` when absent or malformed.
#[wasm_bindgen]
pub fn extract(text: &str, kind: &str) -> Result<JsValue, JsError> {
    let result = theme_schema_core::extract(text, parse_kind(kind)?);
    to_js(&result)
}

/// Resolve `t:` translation keys in a schema against a translation tree.
///
/// Both arguments are JSON strings; the returned schema is a deep copy
/// with the translatable fields rewritten.
#[wasm_bindgen(js_name = "resolveSchema")]
pub fn resolve_schema_js(schema_json: &str, translations_json: &str) -> Result<JsValue, JsError> {
    let schema: ShopifySchema =
        serde_json::from_str(schema_json).map_err(|e| JsError::new(&e.to_string()))?;
    let translations = parse_translations(Some(translations_json))?;
    to_js(&theme_schema_locales::resolve_schema(&schema, &translations))
}

/// Run the full extract → resolve → render pipeline over document text.
///
/// Returns the self-contained HTML preview document, or an empty string
/// when no schema is present. `translations_json` is optional JSONC text
/// (comments and trailing commas tolerated).
#[wasm_bindgen(js_name = "renderPreview")]
pub fn render_preview(
    text: &str,
    kind: &str,
    translations_json: Option<String>,
) -> Result<String, JsError> {
    let result = theme_schema_core::extract(text, parse_kind(kind)?);
    let Some(schema) = result.schema else {
        return Ok(String::new());
    };
    let translations = parse_translations(translations_json.as_deref())?;
    let resolved = theme_schema_locales::resolve_schema(&schema, &translations);
    Ok(theme_schema_render::render(&resolved))
}

/// HTML-escape a string the way the renderer does, for host-side
/// interpolation needs.
#[wasm_bindgen(js_name = "escapeHtml")]
pub fn escape_html(text: &str) -> String {
    theme_schema_render::escape_html(text)
}

/// Default host configuration: `{ autoSuggestPreview: true }`.
#[wasm_bindgen(js_name = "defaultConfig")]
pub fn default_config() -> Result<JsValue, JsError> {
    to_js(&HostConfig::default())
}

// ── Host configuration ──────────────────────────────────────────────────

/// Options an extension host exposes to its users.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostConfig {
    /// Whether to suggest opening a preview when a schema is newly
    /// detected in the active document.
    auto_suggest_preview: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            auto_suggest_preview: true,
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn parse_kind(kind: &str) -> Result<FileKind, JsError> {
    match kind {
        "liquid" => Ok(FileKind::Liquid),
        "json" => Ok(FileKind::Json),
        other => Err(JsError::new(&format!(
            "unknown file kind: {other} (expected \"liquid\" or \"json\")"
        ))),
    }
}

/// Parse host-supplied translations. Absent input yields the empty set;
/// malformed input is an argument error, not a silent miss, because the
/// host already read the file successfully.
fn parse_translations(json: Option<&str>) -> Result<Translations, JsError> {
    match json {
        None => Ok(Translations::empty()),
        Some(text) => Translations::from_jsonc(text).map_err(|e| JsError::new(&e.to_string())),
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}
