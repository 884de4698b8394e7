//! JSONC relaxation for locale and schema files.
//!
//! Shopify theme locale files are JSON in spirit but frequently carry:
//! - `//` line comments
//! - `/* ... */` block comments
//! - trailing commas before `}` or `]`
//!
//! [`relax`] removes all three so the result can be handed to a strict JSON
//! parser. String literals (including escaped quotes and comment-like text
//! inside them) are preserved byte-for-byte.

/// Relax JSONC input into strict JSON: strip comments, then trailing commas.
#[must_use]
pub fn relax(input: &str) -> String {
    strip_trailing_commas(&strip_comments(input))
}

/// Strip `//` and `/* */` comments from JSONC input.
///
/// Comment-like sequences inside string literals are left untouched. An
/// unterminated block comment consumes the rest of the input.
#[must_use]
pub fn strip_comments(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = skip_string(bytes, i);
                out.push_str(&input[i..end]);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = (i + 2).min(bytes.len());
            }
            _ => {
                // Copy up to the next byte that could open a string or
                // comment; everything in between is plain JSON text.
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' && bytes[i] != b'/' {
                    i += 1;
                }
                out.push_str(&input[start..i]);
            }
        }
    }
    out
}

/// Remove commas that directly precede a closing `}` or `]` (ignoring
/// whitespace), outside string literals.
#[must_use]
pub fn strip_trailing_commas(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = skip_string(bytes, i);
                out.push_str(&input[i..end]);
                i = end;
            }
            b',' => {
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if matches!(bytes.get(j), Some(b'}') | Some(b']')) {
                    // Drop the comma, keep the whitespace run after it.
                    out.push_str(&input[i + 1..j]);
                } else {
                    out.push_str(&input[i..j]);
                }
                i = j;
            }
            _ => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != b'"' && bytes[i] != b',' {
                    i += 1;
                }
                out.push_str(&input[start..i]);
            }
        }
    }
    out
}

/// Given `bytes[start] == b'"'`, return the index one past the closing quote
/// (or `bytes.len()` for an unterminated string).
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::{relax, strip_comments, strip_trailing_commas};

    #[test]
    fn strips_line_and_block_comments() {
        let input = r#"
{
  // section names
  "names": { "hero": "Hero" }, /* inline */ "settings": {}
}
"#;
        let stripped = strip_comments(input);
        assert!(!stripped.contains("section names"));
        assert!(!stripped.contains("inline"));
        assert!(stripped.contains("\"hero\": \"Hero\""));
    }

    #[test]
    fn preserves_comment_like_text_in_strings() {
        let input = r#"{ "url": "https://example.com/*x*/", "note": "//keep" }"#;
        let stripped = strip_comments(input);
        assert!(stripped.contains("https://example.com/*x*/"));
        assert!(stripped.contains("\"//keep\""));
    }

    #[test]
    fn preserves_escaped_quotes() {
        let input = r#"{ "label": "say \"hi\" // not a comment" }"#;
        assert_eq!(strip_comments(input), input);
    }

    #[test]
    fn removes_trailing_commas_in_objects_and_arrays() {
        let input = "{ \"a\": [1, 2, 3, ], \"b\": { \"c\": 1, }, }";
        let relaxed = strip_trailing_commas(input);
        assert_eq!(relaxed, "{ \"a\": [1, 2, 3 ], \"b\": { \"c\": 1 } }");
        serde_json::from_str::<serde_json::Value>(&relaxed).expect("strict JSON");
    }

    #[test]
    fn keeps_commas_inside_strings() {
        let input = r#"{ "csv": "a,b,}" }"#;
        assert_eq!(strip_trailing_commas(input), input);
    }

    #[test]
    fn relax_handles_comments_and_trailing_commas_together() {
        let input = r#"
{
  "settings": {
    "heading": "Heading", // label
  },
}
"#;
        let value: serde_json::Value = serde_json::from_str(&relax(input)).expect("parse");
        assert_eq!(value["settings"]["heading"], "Heading");
    }

    #[test]
    fn unterminated_block_comment_consumes_rest() {
        assert_eq!(strip_comments("{} /* open"), "{} ");
    }
}
