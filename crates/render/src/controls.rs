//! Control templates and the type-tag registry.
//!
//! Each Shopify setting `type` maps to one template function writing inert
//! (disabled) form markup into the output buffer. Dispatch goes through
//! [`ControlRegistry`]: a lookup table with a mandatory fallback, so
//! rendering a control is total over arbitrary type tags.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::escape::escape_html;
use theme_schema_core::SchemaSetting;

/// A control template: writes the markup for one setting into `out`.
pub type ControlFn = fn(&mut String, &SchemaSetting);

/// Lookup table from setting `type` tag to control template.
///
/// Unknown tags fall through to a visible "unsupported setting type"
/// notice; that path can be replaced but never removed.
pub struct ControlRegistry {
    entries: BTreeMap<&'static str, ControlFn>,
    fallback: ControlFn,
}

impl ControlRegistry {
    /// The registry covering the standard Shopify setting types.
    pub fn builtin() -> Self {
        let mut entries: BTreeMap<&'static str, ControlFn> = BTreeMap::new();
        for tag in ["text", "url", "liquid"] {
            entries.insert(tag, text_control);
        }
        for tag in ["textarea", "richtext", "html", "inline_richtext"] {
            entries.insert(tag, multiline_control);
        }
        entries.insert("select", select_control);
        entries.insert("radio", radio_control);
        for tag in ["color_scheme", "color_scheme_group"] {
            entries.insert(tag, color_scheme_control);
        }
        entries.insert("font_picker", font_picker_control);
        for tag in ["collection", "product", "blog", "page", "article", "link_list"] {
            entries.insert(tag, resource_control);
        }
        entries.insert("checkbox", checkbox_control);
        entries.insert("range", range_control);
        entries.insert("number", number_control);
        for tag in ["color", "color_background"] {
            entries.insert(tag, color_control);
        }
        entries.insert("image_picker", image_picker_control);
        for tag in ["video", "video_url"] {
            entries.insert(tag, video_control);
        }
        entries.insert("header", header_control);
        entries.insert("paragraph", paragraph_control);
        Self {
            entries,
            fallback: unsupported_control,
        }
    }

    /// Register (or replace) the template for one type tag.
    pub fn register(&mut self, tag: &'static str, control: ControlFn) {
        self.entries.insert(tag, control);
    }

    /// Whether a tag has a dedicated template.
    pub fn supports(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Render the control for `setting`. Total: unknown tags produce the
    /// fallback notice.
    pub fn render_control(&self, out: &mut String, setting: &SchemaSetting) {
        let control = self
            .entries
            .get(setting.r#type.as_str())
            .copied()
            .unwrap_or(self.fallback);
        control(out, setting);
    }
}

// ── Default-value coercion ──────────────────────────────────────────────

/// Coerce a setting default into display text. String, number, and boolean
/// defaults all have a sensible text form; anything else is treated as
/// absent. Never panics on a type/default mismatch.
fn default_text(setting: &SchemaSetting) -> Option<String> {
    match setting.default.as_ref()? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn default_number(setting: &SchemaSetting) -> Option<f64> {
    match setting.default.as_ref()? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn default_flag(setting: &SchemaSetting) -> bool {
    match setting.default.as_ref() {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

/// Format a number without a trailing `.0` for whole values.
fn fmt_number(n: f64) -> String {
    if (n - n.round()).abs() < 1e-9 {
        format!("{}", n.round() as i64)
    } else {
        format!("{n}")
    }
}

// ── Text-like controls ──────────────────────────────────────────────────

fn text_control(out: &mut String, setting: &SchemaSetting) {
    let value = default_text(setting).unwrap_or_default();
    let placeholder = setting.placeholder.as_deref().unwrap_or("");
    let class = if setting.r#type == "liquid" {
        "control-input control-input--code"
    } else {
        "control-input"
    };
    out.push_str(&format!(
        "<input class=\"{class}\" type=\"text\" value=\"{}\" placeholder=\"{}\" disabled>",
        escape_html(&value),
        escape_html(placeholder),
    ));
}

fn multiline_control(out: &mut String, setting: &SchemaSetting) {
    let value = default_text(setting).unwrap_or_default();
    let placeholder = setting.placeholder.as_deref().unwrap_or("");
    out.push_str(&format!(
        "<textarea class=\"control-textarea\" rows=\"3\" placeholder=\"{}\" disabled>{}</textarea>",
        escape_html(placeholder),
        escape_html(&value),
    ));
}

// ── Choice controls ─────────────────────────────────────────────────────

fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn select_control(out: &mut String, setting: &SchemaSetting) {
    out.push_str("<select class=\"control-select\" disabled>");
    if let Some(options) = &setting.options {
        for option in options {
            let selected = match (&option.value, &setting.default) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            };
            let label = option
                .label
                .clone()
                .or_else(|| option.value.as_ref().map(option_text))
                .unwrap_or_default();
            out.push_str(&format!(
                "<option{}>{}</option>",
                if selected { " selected" } else { "" },
                escape_html(&label),
            ));
        }
    }
    out.push_str("</select>");
}

fn radio_control(out: &mut String, setting: &SchemaSetting) {
    out.push_str("<div class=\"control-radio-group\">");
    if let Some(options) = &setting.options {
        for option in options {
            let checked = match (&option.value, &setting.default) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            };
            let label = option
                .label
                .clone()
                .or_else(|| option.value.as_ref().map(option_text))
                .unwrap_or_default();
            out.push_str(&format!(
                "<label class=\"control-radio\"><input type=\"radio\"{} disabled> {}</label>",
                if checked { " checked" } else { "" },
                escape_html(&label),
            ));
        }
    }
    out.push_str("</div>");
}

/// Closed choice control backed by a built-in fixture list, for enumerated
/// types with no real data behind them in a preview.
fn fixture_select(out: &mut String, setting: &SchemaSetting, fixtures: &[&str]) {
    let default = default_text(setting);
    out.push_str("<select class=\"control-select\" disabled>");
    for (i, fixture) in fixtures.iter().enumerate() {
        let selected = match &default {
            Some(d) => d == fixture,
            None => i == 0,
        };
        out.push_str(&format!(
            "<option{}>{}</option>",
            if selected { " selected" } else { "" },
            escape_html(fixture),
        ));
    }
    out.push_str("</select>");
}

fn font_picker_control(out: &mut String, setting: &SchemaSetting) {
    fixture_select(
        out,
        setting,
        &["Assistant", "Helvetica Neue", "Mono", "Playfair Display"],
    );
}

fn color_scheme_control(out: &mut String, setting: &SchemaSetting) {
    fixture_select(out, setting, &["scheme-1", "scheme-2", "scheme-3"]);
}

fn resource_control(out: &mut String, setting: &SchemaSetting) {
    let noun = match setting.r#type.as_str() {
        "collection" => "collection",
        "product" => "product",
        "blog" => "blog",
        "page" => "page",
        "article" => "article",
        "link_list" => "menu",
        other => other,
    };
    let first = format!("Example {noun}");
    let second = format!("Another {noun}");
    fixture_select(out, setting, &[first.as_str(), second.as_str()]);
}

// ── Boolean and numeric controls ────────────────────────────────────────

fn checkbox_control(out: &mut String, setting: &SchemaSetting) {
    out.push_str(&format!(
        "<label class=\"control-toggle\"><input type=\"checkbox\"{} disabled><span class=\"control-toggle-track\"></span></label>",
        if default_flag(setting) { " checked" } else { "" },
    ));
}

fn range_control(out: &mut String, setting: &SchemaSetting) {
    let min = setting.min.unwrap_or(0.0);
    let max = setting.max.unwrap_or(100.0);
    let step = setting.step.unwrap_or(1.0);
    let value = default_number(setting).unwrap_or(min);

    // Fill proportion of the slider track. A zero-width range (max == min)
    // renders with no fill rather than dividing by zero.
    let fill = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let percent = fmt_number(fill * 100.0);

    out.push_str(&format!(
        "<div class=\"control-range\">\
         <div class=\"control-range-track\"><div class=\"control-range-fill\" style=\"width: {percent}%\"></div></div>\
         <input type=\"range\" min=\"{}\" max=\"{}\" step=\"{}\" value=\"{}\" disabled>\
         <span class=\"control-range-value\">{}{}</span>\
         </div>",
        fmt_number(min),
        fmt_number(max),
        fmt_number(step),
        fmt_number(value),
        fmt_number(value),
        escape_html(setting.unit.as_deref().unwrap_or("")),
    ));
}

fn number_control(out: &mut String, setting: &SchemaSetting) {
    let mut attrs = String::new();
    if let Some(min) = setting.min {
        attrs.push_str(&format!(" min=\"{}\"", fmt_number(min)));
    }
    if let Some(max) = setting.max {
        attrs.push_str(&format!(" max=\"{}\"", fmt_number(max)));
    }
    if let Some(step) = setting.step {
        attrs.push_str(&format!(" step=\"{}\"", fmt_number(step)));
    }
    let value = default_number(setting).map(fmt_number).unwrap_or_default();
    out.push_str(&format!(
        "<input class=\"control-input control-input--number\" type=\"number\" value=\"{value}\"{attrs} disabled>",
    ));
}

// ── Color, asset, and divider controls ──────────────────────────────────

fn color_control(out: &mut String, setting: &SchemaSetting) {
    let hex = default_text(setting).unwrap_or_default();
    let escaped = escape_html(&hex);
    out.push_str(&format!(
        "<div class=\"control-color\">\
         <span class=\"control-color-swatch\" style=\"background: {escaped}\"></span>\
         <input class=\"control-input control-input--hex\" type=\"text\" value=\"{escaped}\" disabled>\
         </div>",
    ));
}

fn image_picker_control(out: &mut String, setting: &SchemaSetting) {
    out.push_str("<div class=\"control-asset\"><span class=\"control-asset-icon\">🖼</span> No image selected");
    if let Some(accept) = &setting.accept {
        out.push_str(&format!(
            " <span class=\"control-asset-accept\">({})</span>",
            escape_html(accept)
        ));
    }
    out.push_str("</div>");
}

fn video_control(out: &mut String, setting: &SchemaSetting) {
    let label = if setting.r#type == "video_url" {
        "No video URL set"
    } else {
        "No video selected"
    };
    out.push_str(&format!(
        "<div class=\"control-asset\"><span class=\"control-asset-icon\">▶</span> {label}</div>"
    ));
}

fn header_control(out: &mut String, setting: &SchemaSetting) {
    let content = setting.content.as_deref().unwrap_or("");
    out.push_str(&format!(
        "<h3 class=\"setting-divider\">{}</h3>",
        escape_html(content)
    ));
}

fn paragraph_control(out: &mut String, setting: &SchemaSetting) {
    let content = setting.content.as_deref().unwrap_or("");
    out.push_str(&format!(
        "<p class=\"setting-paragraph\">{}</p>",
        escape_html(content)
    ));
}

// ── Fallback ────────────────────────────────────────────────────────────

fn unsupported_control(out: &mut String, setting: &SchemaSetting) {
    out.push_str(&format!(
        "<div class=\"control-unsupported\">Unsupported setting type: <code>{}</code></div>",
        escape_html(&setting.r#type)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn setting(tag: &str) -> SchemaSetting {
        SchemaSetting {
            r#type: tag.into(),
            ..Default::default()
        }
    }

    fn render_one(s: &SchemaSetting) -> String {
        let mut out = String::new();
        ControlRegistry::builtin().render_control(&mut out, s);
        out
    }

    #[test]
    fn registry_covers_the_standard_tags() {
        let registry = ControlRegistry::builtin();
        for tag in [
            "text", "textarea", "select", "radio", "checkbox", "range", "number", "color",
            "image_picker", "font_picker", "header",
        ] {
            assert!(registry.supports(tag), "missing builtin tag {tag}");
        }
        assert!(!registry.supports("widget"));
    }

    #[test]
    fn unknown_tag_renders_visible_notice() {
        let html = render_one(&setting("widget"));
        assert!(html.contains("Unsupported setting type"));
        assert!(html.contains("<code>widget</code>"));
    }

    #[test]
    fn range_fill_proportion_is_computed() {
        let mut s = setting("range");
        s.min = Some(2.0);
        s.max = Some(12.0);
        s.step = Some(2.0);
        s.default = Some(json!(4));
        let html = render_one(&s);
        assert!(html.contains("width: 20%"), "unexpected markup: {html}");
        assert!(html.contains("min=\"2\""));
        assert!(html.contains("max=\"12\""));
    }

    #[test]
    fn zero_width_range_does_not_divide_by_zero() {
        let mut s = setting("range");
        s.min = Some(5.0);
        s.max = Some(5.0);
        s.default = Some(json!(5));
        let html = render_one(&s);
        assert!(html.contains("width: 0%"));
    }

    #[test]
    fn mismatched_default_falls_back_neutrally() {
        let mut s = setting("range");
        s.min = Some(0.0);
        s.max = Some(10.0);
        s.default = Some(json!({ "nested": true }));
        let html = render_one(&s);
        assert!(html.contains("value=\"0\""));

        let mut s = setting("checkbox");
        s.default = Some(json!("not-a-bool"));
        assert!(!render_one(&s).contains("checked"));
    }

    #[test]
    fn select_marks_the_default_option() {
        let mut s = setting("select");
        s.default = Some(json!("right"));
        s.options = Some(vec![
            theme_schema_core::SettingOption {
                value: Some(json!("left")),
                label: Some("Left".into()),
            },
            theme_schema_core::SettingOption {
                value: Some(json!("right")),
                label: Some("Right".into()),
            },
        ]);
        let html = render_one(&s);
        assert!(html.contains("<option>Left</option>"));
        assert!(html.contains("<option selected>Right</option>"));
    }

    #[test]
    fn text_control_escapes_default_and_placeholder() {
        let mut s = setting("text");
        s.default = Some(json!("<script>alert(1)</script>"));
        s.placeholder = Some("\"quoted\"".into());
        let html = render_one(&s);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn checkbox_reflects_boolean_default() {
        let mut s = setting("checkbox");
        s.default = Some(json!(true));
        assert!(render_one(&s).contains("checked"));
    }

    #[test]
    fn resource_control_offers_fixture_choices() {
        let html = render_one(&setting("product"));
        assert!(html.contains("Example product"));
        let html = render_one(&setting("link_list"));
        assert!(html.contains("Example menu"));
    }
}
