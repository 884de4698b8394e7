//! The Shopify theme schema data model.
//!
//! Two schema shapes exist in a theme: a **section schema** (one JSON object
//! embedded in a Liquid template between `{% schema %}` and
//! `{% endschema %}`) and a **theme settings document** (a JSON array of
//! setting groups, conventionally `config/settings_schema.json`).
//! [`ShopifySchema`] is the explicit sum of the two; downstream code matches
//! it exhaustively instead of re-checking JSON shapes.
//!
//! All fields a theme author could omit are `Option`s. Unknown setting
//! `type` tags are carried verbatim; the renderer decides how to surface
//! them. `id` uniqueness is assumed, never enforced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A schema extracted from a theme file: either one section schema or an
/// ordered list of global theme setting groups. No instance is ever both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ShopifySchema {
    /// A section schema from a Liquid template.
    Section(SectionSchema),
    /// Theme setting groups from a settings document.
    Settings(Vec<ThemeSettingsGroup>),
}

/// Root of a Liquid-embedded section schema.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SectionSchema {
    /// Section name shown as the preview heading. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Wrapper HTML tag for the rendered section (informational).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// CSS class applied to the section wrapper (informational).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Ordered list of section settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<SchemaSetting>>,
    /// Ordered list of reusable block definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<SchemaBlock>>,
    /// Preset definitions. Opaque: carried through, never rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<Value>,
    /// Template allow-list. Opaque: carried through, never rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_on: Option<Value>,
    /// Template deny-list. Opaque: carried through, never rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_on: Option<Value>,
}

/// A reusable content block definition within a section schema.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SchemaBlock {
    /// Block type tag (e.g., `"slide"`, `"@app"`).
    #[serde(rename = "type")]
    pub r#type: String,
    /// Display name. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Ordered list of per-block settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<SchemaSetting>>,
}

/// One named group within a theme settings document.
///
/// The group whose `name` is the sentinel `"theme_info"` carries theme
/// metadata (`theme_name`, `theme_version`, ...) instead of settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeSettingsGroup {
    /// Group label, or the `"theme_info"` sentinel. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Theme name (only on the `theme_info` group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_name: Option<String>,
    /// Theme version (only on the `theme_info` group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_version: Option<String>,
    /// Theme author (only on the `theme_info` group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_author: Option<String>,
    /// Documentation URL (only on the `theme_info` group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_documentation_url: Option<String>,
    /// Support URL (only on the `theme_info` group).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_support_url: Option<String>,
    /// Ordered list of settings in this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<SchemaSetting>>,
}

/// One configurable field within a settings list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SchemaSetting {
    /// Type tag selecting the rendered control. Open-ended: unknown tags
    /// are preserved and surfaced as "unsupported" by the renderer.
    #[serde(rename = "type")]
    pub r#type: String,
    /// Stable key, unique within its enclosing settings list (by convention).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Control label. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Divider text; only meaningful when `type` is `"header"` or
    /// `"paragraph"`. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Default value. Its JSON type varies with `type`; the renderer
    /// coerces safely and never fails on a mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Ordered choices for choice-like controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SettingOption>>,
    /// Lower bound (`range` type only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound (`range` type only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Slider/input step (`range` and `number`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Unit suffix shown next to range values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Input placeholder text. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Help text shown under the control. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Raw conditional-visibility expression. Displayed verbatim, never
    /// evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<String>,
    /// File-type filter for picker controls. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
}

/// One `{value, label}` choice in a choice-like setting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SettingOption {
    /// Stored value for this choice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Display label. May be a `t:` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SchemaSetting {
    /// Whether this setting renders as a divider rather than a control.
    pub fn is_divider(&self) -> bool {
        matches!(self.r#type.as_str(), "header" | "paragraph")
    }
}
