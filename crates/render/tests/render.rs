//! Document-level rendering tests.
//!
//! Control-template details are covered by unit tests in `controls.rs`;
//! these exercise the assembled document: headers, dividers, block and
//! group cards, the `theme_info` card, and the escaping guarantee.

use serde_json::json;
use theme_schema_core::{
    SchemaBlock, SchemaSetting, SectionSchema, ShopifySchema, ThemeSettingsGroup,
};
use theme_schema_render::render;

fn text_setting(id: &str, label: &str) -> SchemaSetting {
    SchemaSetting {
        r#type: "text".into(),
        id: Some(id.into()),
        label: Some(label.into()),
        ..Default::default()
    }
}

#[test]
fn section_document_is_self_contained() {
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some("Hero banner".into()),
        tag: Some("section".into()),
        settings: Some(vec![text_setting("heading", "Heading")]),
        ..Default::default()
    });
    let html = render(&schema);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
    assert!(html.contains("<h1>Hero banner</h1>"));
    assert!(html.contains("&lt;section&gt;"));
    assert!(html.contains("data-setting-id=\"heading\""));
}

#[test]
fn header_setting_renders_as_divider_not_control() {
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some("Hero".into()),
        settings: Some(vec![
            SchemaSetting {
                r#type: "header".into(),
                content: Some("Layout".into()),
                ..Default::default()
            },
            text_setting("heading", "Heading"),
        ]),
        ..Default::default()
    });
    let html = render(&schema);
    assert!(html.contains("<h3 class=\"setting-divider\">Layout</h3>"));
    // The divider carries no input control of its own.
    assert_eq!(html.matches("<input class=\"control-input\"").count(), 1);
}

#[test]
fn blocks_render_as_collapsible_cards() {
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some("Slideshow".into()),
        blocks: Some(vec![
            SchemaBlock {
                r#type: "slide".into(),
                name: Some("Slide".into()),
                settings: Some(vec![text_setting("caption", "Caption")]),
            },
            SchemaBlock {
                r#type: "@app".into(),
                name: None,
                settings: None,
            },
        ]),
        ..Default::default()
    });
    let html = render(&schema);
    assert!(html.contains("<h2 class=\"blocks-heading\">Blocks</h2>"));
    assert_eq!(html.matches("<details class=\"block-card\"").count(), 2);
    // A block without a name falls back to its type tag.
    assert!(html.contains("@app"));
    assert!(html.contains("No settings"));
}

#[test]
fn theme_info_group_is_matched_by_name_anywhere() {
    let schema = ShopifySchema::Settings(vec![
        ThemeSettingsGroup {
            name: Some("Colors".into()),
            settings: Some(vec![SchemaSetting {
                r#type: "color".into(),
                id: Some("primary".into()),
                label: Some("Primary".into()),
                default: Some(json!("#112233")),
                ..Default::default()
            }]),
            ..Default::default()
        },
        // Not first in the list: still matched by name.
        ThemeSettingsGroup {
            name: Some("theme_info".into()),
            theme_name: Some("Dawn".into()),
            theme_version: Some("12.0.0".into()),
            theme_author: Some("Shopify".into()),
            ..Default::default()
        },
    ]);
    let html = render(&schema);
    assert!(html.contains("<h1>Theme settings</h1>"));
    assert!(html.contains("class=\"theme-info\""));
    assert!(html.contains("Dawn"));
    assert!(html.contains("Version 12.0.0"));
    // theme_info renders as the info card, not as a settings group card.
    assert_eq!(html.matches("<details class=\"group-card\"").count(), 1);
}

#[test]
fn visible_if_is_annotated_verbatim_not_evaluated() {
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some("Hero".into()),
        settings: Some(vec![SchemaSetting {
            r#type: "text".into(),
            id: Some("subheading".into()),
            visible_if: Some("{{ section.settings.show_text }}".into()),
            ..Default::default()
        }]),
        ..Default::default()
    });
    let html = render(&schema);
    assert!(html.contains("Visible if:"));
    assert!(html.contains("{{ section.settings.show_text }}"));
}

#[test]
fn workspace_strings_never_reach_output_unescaped() {
    let hostile = "<script>alert('pwned')</script>";
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some(hostile.into()),
        settings: Some(vec![SchemaSetting {
            r#type: "widget".into(),
            label: Some(hostile.into()),
            info: Some(hostile.into()),
            ..Default::default()
        }]),
        ..Default::default()
    });
    let html = render(&schema);
    // Only the renderer's own inline script block may open a script tag.
    assert_eq!(html.matches("<script>").count(), 1);
    assert!(html.contains("&lt;script&gt;alert(&#39;pwned&#39;)&lt;/script&gt;"));
}

#[test]
fn unsupported_type_notice_survives_document_assembly() {
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some("Hero".into()),
        settings: Some(vec![SchemaSetting {
            r#type: "widget".into(),
            id: Some("w".into()),
            ..Default::default()
        }]),
        ..Default::default()
    });
    let html = render(&schema);
    assert!(html.contains("Unsupported setting type: <code>widget</code>"));
}

#[test]
fn duplicate_ids_both_render() {
    let schema = ShopifySchema::Section(SectionSchema {
        name: Some("Hero".into()),
        settings: Some(vec![
            text_setting("heading", "First"),
            text_setting("heading", "Second"),
        ]),
        ..Default::default()
    });
    let html = render(&schema);
    assert_eq!(html.matches("data-setting-id=\"heading\"").count(), 2);
}
