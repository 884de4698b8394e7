//! Integration tests for schema extraction.
//!
//! Covers: Liquid delimiter scanning, JSON body parsing and error spans,
//! settings document shape checks, and the "absence is silent" contract.

use theme_schema_core::{FileKind, SectionSchema, Severity, ShopifySchema, codes, extract};

const HERO_SCHEMA_JSON: &str = r#"{
  "name": "Hero banner",
  "tag": "section",
  "settings": [
    { "type": "text", "id": "heading", "label": "Heading", "default": "Welcome" },
    { "type": "checkbox", "id": "show_arrows", "label": "Show arrows", "default": true }
  ],
  "blocks": [
    { "type": "slide", "name": "Slide" }
  ]
}"#;

fn wrap_in_schema_tags(body: &str) -> String {
    format!("<div>{{{{ content }}}}</div>\n{{% schema %}}\n{body}\n{{% endschema %}}\n")
}

// ── Liquid extraction ───────────────────────────────────────────────────

#[test]
fn liquid_extraction_matches_direct_json_parse() {
    let doc = wrap_in_schema_tags(HERO_SCHEMA_JSON);
    let result = extract(&doc, FileKind::Liquid);
    assert!(result.diagnostics.is_empty());

    let direct: SectionSchema = serde_json::from_str(HERO_SCHEMA_JSON).expect("direct parse");
    match result.schema {
        Some(ShopifySchema::Section(section)) => assert_eq!(section, direct),
        other => panic!("expected section schema, got {other:?}"),
    }
}

#[test]
fn span_covers_the_trimmed_schema_body() {
    let doc = wrap_in_schema_tags(HERO_SCHEMA_JSON);
    let result = extract(&doc, FileKind::Liquid);
    let span = result.span.expect("span");
    assert_eq!(&doc[span.start..span.end], HERO_SCHEMA_JSON);
}

#[test]
fn mixed_case_and_dashed_delimiters_are_accepted() {
    let doc = format!("{{%- SCHEMA -%}}{HERO_SCHEMA_JSON}{{%- ENDSCHEMA -%}}");
    let result = extract(&doc, FileKind::Liquid);
    assert!(matches!(result.schema, Some(ShopifySchema::Section(_))));
}

#[test]
fn text_without_delimiters_yields_silent_absence() {
    let result = extract("<div>{{ product.title }}</div>", FileKind::Liquid);
    assert!(result.schema.is_none());
    assert!(result.span.is_none());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn malformed_schema_json_is_reported_not_thrown() {
    let doc = wrap_in_schema_tags("{ \"name\": \"Hero\", }");
    let result = extract(&doc, FileKind::Liquid);
    assert!(result.schema.is_none());
    // Span is still reported so a host can navigate to the broken block.
    assert!(result.span.is_some());
    let diag = &result.diagnostics[0];
    assert_eq!(diag.id, codes::SCHEMA_BLOCK_INVALID_JSON);
    assert_eq!(diag.severity, Severity::Error);
    let pos = diag.span.expect("error position").start;
    assert_eq!(doc.as_bytes()[pos], b'}');
}

#[test]
fn non_object_schema_body_is_rejected_with_shape_diagnostic() {
    let doc = wrap_in_schema_tags("[1, 2, 3]");
    let result = extract(&doc, FileKind::Liquid);
    assert!(result.schema.is_none());
    assert_eq!(
        result.diagnostics[0].id,
        codes::SCHEMA_BLOCK_UNEXPECTED_SHAPE
    );
}

#[test]
fn only_the_first_schema_block_is_extracted() {
    let doc = "{% schema %}{ \"name\": \"First\" }{% endschema %}\n\
               {% schema %}{ \"name\": \"Second\" }{% endschema %}";
    let result = extract(doc, FileKind::Liquid);
    match result.schema {
        Some(ShopifySchema::Section(section)) => {
            assert_eq!(section.name.as_deref(), Some("First"));
        }
        other => panic!("expected section schema, got {other:?}"),
    }
}

// ── Settings documents ──────────────────────────────────────────────────

#[test]
fn settings_array_round_trips() {
    let doc = r##"[
      {
        "name": "theme_info",
        "theme_name": "Dawn",
        "theme_version": "12.0.0",
        "theme_author": "Shopify"
      },
      {
        "name": "Colors",
        "settings": [
          { "type": "color", "id": "primary", "label": "Primary", "default": "#112233" }
        ]
      }
    ]"##;
    let result = extract(doc, FileKind::Json);
    assert!(result.diagnostics.is_empty());
    match result.schema {
        Some(ShopifySchema::Settings(groups)) => {
            assert_eq!(groups.len(), 2);
            assert_eq!(groups[0].theme_name.as_deref(), Some("Dawn"));
            assert_eq!(groups[1].name.as_deref(), Some("Colors"));
        }
        other => panic!("expected settings groups, got {other:?}"),
    }
}

#[test]
fn settings_object_is_rejected() {
    let result = extract(r#"{ "name": "Colors" }"#, FileKind::Json);
    assert!(result.schema.is_none());
    assert_eq!(result.diagnostics[0].id, codes::SETTINGS_UNEXPECTED_SHAPE);
    assert_eq!(result.diagnostics[0].severity, Severity::Info);
}

#[test]
fn empty_settings_array_is_rejected() {
    let result = extract("[]", FileKind::Json);
    assert!(result.schema.is_none());
    assert_eq!(result.diagnostics[0].id, codes::SETTINGS_UNEXPECTED_SHAPE);
}

#[test]
fn scalar_settings_document_is_rejected() {
    let result = extract("42", FileKind::Json);
    assert!(result.schema.is_none());
    assert_eq!(result.diagnostics[0].id, codes::SETTINGS_UNEXPECTED_SHAPE);
}

#[test]
fn malformed_settings_json_is_reported_not_thrown() {
    let result = extract("[ { \"name\": \"Colors\" ", FileKind::Json);
    assert!(result.schema.is_none());
    assert_eq!(result.diagnostics[0].id, codes::SETTINGS_INVALID_JSON);
}
