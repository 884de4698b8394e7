//! Read-only HTML preview rendering for Shopify theme schemas.
//!
//! [`render`] is a pure function from a schema to one self-contained HTML
//! document (inline styles, inline script). Control markup is dispatched
//! through a [`ControlRegistry`] keyed by setting `type`, with a mandatory
//! fallback that surfaces unknown tags as a visible "unsupported" notice —
//! no setting is ever silently dropped.
//!
//! Every string that originates from workspace files is HTML-escaped before
//! interpolation; see [`escape_html`].

#![warn(missing_docs)]

/// Control templates and the type-tag registry.
pub mod controls;
/// Full-document assembly: headers, settings lists, blocks, group cards.
pub mod document;
/// HTML escaping for workspace-originated strings.
pub mod escape;

pub use controls::ControlRegistry;
pub use document::render_with_registry;
pub use escape::escape_html;

use theme_schema_core::ShopifySchema;

/// Render a schema as a complete HTML preview document using the built-in
/// control registry.
pub fn render(schema: &ShopifySchema) -> String {
    render_with_registry(schema, &ControlRegistry::builtin())
}
