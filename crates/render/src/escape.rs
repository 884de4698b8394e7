//! HTML escaping for workspace-originated strings.

/// Escape `&`, `<`, `>`, `"`, and `'` for safe interpolation into HTML
/// text and double- or single-quoted attribute positions.
///
/// Schema and locale strings come from workspace files, so escaping is a
/// security property of the preview, not a formatting nicety.
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
