//! Terminal presentation of diagnostics.
//!
//! Maps the pipeline's [`Diagnostic`] values onto ariadne [`Report`]s so a
//! schema problem is shown with the offending bytes underlined in the source
//! document. When stdout is a pipe, or `--output json` is given, the CLI
//! emits structured JSON instead and this module only picks the format.

use std::io::{self, IsTerminal};

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use theme_schema_diagnostics::{Diagnostic, Severity};

// ── Output format ───────────────────────────────────────────────────────

/// How schemas and diagnostics are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Human-oriented: colour, source excerpts, underlines.
    Pretty,
    /// JSON envelopes for tooling.
    Json,
}

impl Format {
    /// Pick the format from `--output`, or from whether stdout is a
    /// terminal when the flag is absent.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

/// Ariadne report kind and label colour for a severity. `Severity` is
/// non-exhaustive, so unknown levels present as plain warnings.
fn report_style(severity: &Severity) -> (ReportKind<'static>, Color) {
    match severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warn => (ReportKind::Warning, Color::Yellow),
        Severity::Info => (ReportKind::Advice, Color::Blue),
        _ => (ReportKind::Warning, Color::White),
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Write every diagnostic to stderr.
///
/// A diagnostic carrying a span becomes a full ariadne report with the span
/// underlined in `source`; span-less ones (locale loading failures, mostly)
/// print as single `severity[code]: message` lines.
pub(crate) fn render_diagnostics_pretty(source: &str, filename: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);
    let mut cache = (filename, Source::from(source));

    for diag in diagnostics {
        if let Some(span) = &diag.span {
            // Spans come from a pre-edit snapshot; clamp so a shorter
            // current document cannot push a report past the end.
            let start = span.start.min(source.len());
            let end = span.end.min(source.len()).max(start);

            // Widen zero-width spans to one character so the underline is
            // visible, without running past the end of the source.
            let label_end = if start == end {
                (end + 1).min(source.len())
            } else {
                end
            };

            let (kind, color) = report_style(&diag.severity);
            let mut builder = Report::build(kind, (filename, start..end))
                .with_code(diag.id.as_ref())
                .with_message(&diag.message)
                .with_config(config);
            if label_end > start {
                builder = builder.with_label(
                    Label::new((filename, start..label_end))
                        .with_message(&diag.message)
                        .with_color(color),
                );
            }
            if let Some(note) = context_note(diag) {
                builder = builder.with_note(note);
            }
            if let Some(explanation) = diag.explain() {
                builder = builder.with_help(explanation);
            }
            builder.finish().eprint(&mut cache).ok();
        } else {
            // No span — print a standalone message to stderr.
            eprintln!("{diag}");
            if let Some(note) = context_note(diag) {
                eprintln!("  = note: {note}");
            }
            if let Some(explanation) = diag.explain() {
                eprintln!("  = help: {explanation}");
            }
        }
    }
}

/// Compact `key=value` note from a diagnostic's context map, if any.
fn context_note(diag: &Diagnostic) -> Option<String> {
    let ctx = diag.context.as_ref()?;
    if ctx.is_empty() {
        return None;
    }
    Some(
        ctx.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}
