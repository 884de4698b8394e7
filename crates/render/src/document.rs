//! Full-document assembly.
//!
//! One call builds one self-contained HTML document: inline stylesheet,
//! schema body, inline script. Nothing is patched incrementally; a later
//! render simply replaces the previous document.

use crate::controls::ControlRegistry;
use crate::escape::escape_html;
use theme_schema_core::{
    SchemaBlock, SchemaSetting, SectionSchema, ShopifySchema, ThemeSettingsGroup,
};

/// Group name that marks theme metadata instead of a settings list.
/// Matched by name, wherever the group sits in the list.
const THEME_INFO_GROUP: &str = "theme_info";

/// Render a schema as a complete HTML document with the given registry.
pub fn render_with_registry(schema: &ShopifySchema, registry: &ControlRegistry) -> String {
    let mut body = String::new();
    match schema {
        ShopifySchema::Section(section) => render_section(&mut body, section, registry),
        ShopifySchema::Settings(groups) => render_groups(&mut body, groups, registry),
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Schema preview</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         {body}\n<script>\n{SCRIPT}</script>\n</body>\n</html>\n"
    )
}

// ── Section schemas ─────────────────────────────────────────────────────

fn render_section(out: &mut String, section: &SectionSchema, registry: &ControlRegistry) {
    out.push_str("<header class=\"schema-header\"><h1>");
    out.push_str(&escape_html(section.name.as_deref().unwrap_or("Untitled section")));
    out.push_str("</h1>");
    if let Some(tag) = &section.tag {
        out.push_str(&format!(
            "<span class=\"schema-badge\">&lt;{}&gt;</span>",
            escape_html(tag)
        ));
    }
    out.push_str("</header>");

    if let Some(settings) = &section.settings
        && !settings.is_empty()
    {
        out.push_str("<section class=\"settings-list\">");
        for setting in settings {
            render_setting(out, setting, registry);
        }
        out.push_str("</section>");
    }

    if let Some(blocks) = &section.blocks
        && !blocks.is_empty()
    {
        out.push_str("<h2 class=\"blocks-heading\">Blocks</h2>");
        for block in blocks {
            render_block(out, block, registry);
        }
    }
}

fn render_block(out: &mut String, block: &SchemaBlock, registry: &ControlRegistry) {
    out.push_str("<details class=\"block-card\" open><summary>");
    out.push_str(&escape_html(block.name.as_deref().unwrap_or(&block.r#type)));
    out.push_str(&format!(
        " <span class=\"block-type\">{}</span>",
        escape_html(&block.r#type)
    ));
    out.push_str("</summary>");
    if let Some(settings) = &block.settings
        && !settings.is_empty()
    {
        out.push_str("<div class=\"settings-list\">");
        for setting in settings {
            render_setting(out, setting, registry);
        }
        out.push_str("</div>");
    } else {
        out.push_str("<p class=\"empty-note\">No settings</p>");
    }
    out.push_str("</details>");
}

// ── Theme settings groups ───────────────────────────────────────────────

fn render_groups(out: &mut String, groups: &[ThemeSettingsGroup], registry: &ControlRegistry) {
    out.push_str("<header class=\"schema-header\"><h1>Theme settings</h1></header>");
    for group in groups {
        if group.name.as_deref() == Some(THEME_INFO_GROUP) {
            render_theme_info(out, group);
        } else {
            render_group(out, group, registry);
        }
    }
}

fn render_theme_info(out: &mut String, group: &ThemeSettingsGroup) {
    out.push_str("<div class=\"theme-info\">");
    out.push_str(&format!(
        "<p class=\"theme-info-name\">{}</p>",
        escape_html(group.theme_name.as_deref().unwrap_or("Unknown theme"))
    ));
    if let Some(version) = &group.theme_version {
        out.push_str(&format!(
            "<p class=\"theme-info-meta\">Version {}</p>",
            escape_html(version)
        ));
    }
    if let Some(author) = &group.theme_author {
        out.push_str(&format!(
            "<p class=\"theme-info-meta\">By {}</p>",
            escape_html(author)
        ));
    }
    for (label, url) in [
        ("Documentation", &group.theme_documentation_url),
        ("Support", &group.theme_support_url),
    ] {
        if let Some(url) = url {
            out.push_str(&format!(
                "<p class=\"theme-info-meta\"><a href=\"{}\">{label}</a></p>",
                escape_html(url)
            ));
        }
    }
    out.push_str("</div>");
}

fn render_group(out: &mut String, group: &ThemeSettingsGroup, registry: &ControlRegistry) {
    out.push_str("<details class=\"group-card\" open><summary>");
    out.push_str(&escape_html(group.name.as_deref().unwrap_or("Settings")));
    out.push_str("</summary>");
    if let Some(settings) = &group.settings
        && !settings.is_empty()
    {
        out.push_str("<div class=\"settings-list\">");
        for setting in settings {
            render_setting(out, setting, registry);
        }
        out.push_str("</div>");
    } else {
        out.push_str("<p class=\"empty-note\">No settings</p>");
    }
    out.push_str("</details>");
}

// ── Individual settings ─────────────────────────────────────────────────

fn render_setting(out: &mut String, setting: &SchemaSetting, registry: &ControlRegistry) {
    if setting.is_divider() {
        registry.render_control(out, setting);
        return;
    }

    out.push_str("<div class=\"setting\"");
    if let Some(id) = &setting.id {
        out.push_str(&format!(" data-setting-id=\"{}\"", escape_html(id)));
    }
    out.push('>');

    let label = setting
        .label
        .as_deref()
        .or(setting.id.as_deref())
        .unwrap_or(&setting.r#type);
    out.push_str(&format!(
        "<label class=\"setting-label\">{}</label>",
        escape_html(label)
    ));

    registry.render_control(out, setting);

    if let Some(info) = &setting.info {
        out.push_str(&format!(
            "<p class=\"setting-info\">{}</p>",
            escape_html(info)
        ));
    }
    if let Some(visible_if) = &setting.visible_if {
        // Displayed verbatim, never evaluated.
        out.push_str(&format!(
            "<p class=\"setting-visible-if\">Visible if: <code>{}</code></p>",
            escape_html(visible_if)
        ));
    }
    out.push_str("</div>");
}

// ── Inline assets ───────────────────────────────────────────────────────

const STYLE: &str = r#"
:root { color-scheme: light dark; }
body {
  font-family: var(--vscode-font-family, system-ui, sans-serif);
  color: var(--vscode-foreground, #24292f);
  background: var(--vscode-editor-background, #ffffff);
  margin: 0;
  padding: 16px 20px;
  font-size: 13px;
  line-height: 1.45;
}
.schema-header { display: flex; align-items: baseline; gap: 10px; margin-bottom: 14px; }
.schema-header h1 { font-size: 18px; margin: 0; }
.schema-badge {
  font-family: var(--vscode-editor-font-family, monospace);
  font-size: 11px;
  opacity: 0.7;
  border: 1px solid currentColor;
  border-radius: 3px;
  padding: 1px 5px;
}
.settings-list { display: flex; flex-direction: column; gap: 12px; }
.setting { display: flex; flex-direction: column; gap: 4px; }
.setting-label { font-weight: 600; }
.setting-info, .setting-visible-if, .empty-note { margin: 0; font-size: 12px; opacity: 0.75; }
.setting-divider {
  margin: 10px 0 2px;
  font-size: 12px;
  text-transform: uppercase;
  letter-spacing: 0.04em;
  opacity: 0.8;
  border-bottom: 1px solid rgba(128, 128, 128, 0.35);
  padding-bottom: 3px;
}
.setting-paragraph { margin: 2px 0; font-size: 12px; opacity: 0.85; }
.control-input, .control-textarea, .control-select {
  font: inherit;
  color: inherit;
  background: var(--vscode-input-background, #f6f8fa);
  border: 1px solid var(--vscode-input-border, #d0d7de);
  border-radius: 4px;
  padding: 4px 8px;
  max-width: 360px;
}
.control-input--code { font-family: var(--vscode-editor-font-family, monospace); }
.control-input--number, .control-input--hex { max-width: 120px; }
.control-radio-group { display: flex; flex-direction: column; gap: 3px; }
.control-range { display: flex; align-items: center; gap: 8px; max-width: 360px; }
.control-range input[type="range"] { flex: 1; }
.control-range-track {
  flex: 1;
  height: 4px;
  border-radius: 2px;
  background: rgba(128, 128, 128, 0.3);
  overflow: hidden;
}
.control-range-fill { height: 100%; background: var(--vscode-progressBar-background, #0969da); }
.control-range-value { min-width: 3em; text-align: right; font-variant-numeric: tabular-nums; }
.control-color { display: flex; align-items: center; gap: 8px; }
.control-color-swatch {
  width: 22px;
  height: 22px;
  border-radius: 4px;
  border: 1px solid rgba(128, 128, 128, 0.5);
  display: inline-block;
}
.control-asset {
  border: 1px dashed rgba(128, 128, 128, 0.5);
  border-radius: 4px;
  padding: 14px;
  max-width: 360px;
  text-align: center;
  opacity: 0.8;
}
.control-unsupported {
  border: 1px solid var(--vscode-editorWarning-foreground, #9a6700);
  color: var(--vscode-editorWarning-foreground, #9a6700);
  border-radius: 4px;
  padding: 6px 10px;
  max-width: 360px;
}
.block-card, .group-card {
  border: 1px solid rgba(128, 128, 128, 0.35);
  border-radius: 6px;
  padding: 8px 12px;
  margin-bottom: 10px;
}
.block-card summary, .group-card summary { cursor: pointer; font-weight: 600; }
.block-card .settings-list, .group-card .settings-list { margin-top: 10px; }
.block-type {
  font-family: var(--vscode-editor-font-family, monospace);
  font-size: 11px;
  opacity: 0.65;
}
.blocks-heading { font-size: 14px; margin: 18px 0 8px; }
.theme-info {
  border: 1px solid rgba(128, 128, 128, 0.35);
  border-left: 3px solid var(--vscode-progressBar-background, #0969da);
  border-radius: 6px;
  padding: 10px 14px;
  margin-bottom: 10px;
}
.theme-info-name { margin: 0 0 2px; font-weight: 600; font-size: 14px; }
.theme-info-meta { margin: 0; font-size: 12px; opacity: 0.8; }
"#;

const SCRIPT: &str = r#"
(function () {
  // Inside a VS Code webview, report clicks on identified settings so the
  // host can reveal the matching source range. Elsewhere this is inert.
  var vscode = typeof acquireVsCodeApi === "function" ? acquireVsCodeApi() : null;
  if (!vscode) { return; }
  document.querySelectorAll("[data-setting-id]").forEach(function (el) {
    el.addEventListener("click", function () {
      vscode.postMessage({ type: "revealSetting", id: el.dataset.settingId });
    });
  });
})();
"#;
