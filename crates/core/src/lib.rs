//! Theme schema toolchain core library.
//!
//! Provides the Shopify theme schema data model and the extractor that pulls
//! a schema out of raw document text. The main entry point is
//! [`extract`], which handles both Liquid templates (embedded
//! `{% schema %}` blocks) and theme settings JSON documents.

#![warn(missing_docs)]

/// Schema extraction from Liquid and JSON document text.
pub mod extract;
/// The Shopify theme schema data model.
pub mod schema;

// ── Convenience re-exports ──────────────────────────────────────────────

pub use extract::{ExtractResult, FileKind, extract};
pub use schema::{
    SchemaBlock, SchemaSetting, SectionSchema, SettingOption, ShopifySchema, ThemeSettingsGroup,
};

// Diagnostics (re-exported from the diagnostics crate)
pub use theme_schema_diagnostics::{Diagnostic, LineIndex, Severity, Span, codes};
