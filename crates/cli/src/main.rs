//! `theme-schema` — extract, translate, and preview Shopify theme schemas.

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use theme_schema_core::{ExtractResult, FileKind, ShopifySchema, extract};
use theme_schema_diagnostics::Diagnostic;
use theme_schema_locales::{LocaleCache, resolve_schema};

use crate::render::{Format, render_diagnostics_pretty};

/// Exit code when `--require-schema` is set and no schema was found.
const EXIT_NO_SCHEMA: i32 = 2;

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "theme-schema",
    version,
    about = "Theme schema toolchain — extract, translate, and preview Shopify theme schema definitions"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    // ── Pipeline commands (progressive: extract → resolve → preview) ─
    /// Extract the schema from a theme file and print it as JSON.
    Extract {
        file: String,
        /// Source kind. Inferred from the filename when omitted:
        /// `*.liquid` is liquid, `*settings_schema*.json` is json.
        #[arg(long, value_parser = ["liquid", "json"])]
        kind: Option<String>,
        /// Exit with status 2 when no schema is found.
        #[arg(long)]
        require_schema: bool,
    },
    /// Extract the schema and resolve `t:` translation keys against the
    /// theme's locale files, then print the schema as JSON.
    Resolve {
        file: String,
        #[arg(long, value_parser = ["liquid", "json"])]
        kind: Option<String>,
        /// Base directory for locale discovery. Defaults to the input
        /// file's parent directory.
        #[arg(long)]
        base_dir: Option<String>,
        /// Exit with status 2 when no schema is found.
        #[arg(long)]
        require_schema: bool,
    },
    /// Run the full pipeline and emit a self-contained HTML preview.
    Preview {
        file: String,
        #[arg(long, value_parser = ["liquid", "json"])]
        kind: Option<String>,
        /// Base directory for locale discovery. Defaults to the input
        /// file's parent directory.
        #[arg(long)]
        base_dir: Option<String>,
        /// Write the HTML document here instead of stdout.
        #[arg(long)]
        out: Option<String>,
        /// Exit with status 2 when no schema is found.
        #[arg(long)]
        require_schema: bool,
    },
    /// Explain a diagnostic code (e.g. "THM1101").
    Explain { code: String },
}

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Extract {
            file,
            kind,
            require_schema,
        } => cmd_extract(&file, kind.as_deref(), require_schema, format),
        Cmd::Resolve {
            file,
            kind,
            base_dir,
            require_schema,
        } => cmd_resolve(
            &file,
            kind.as_deref(),
            base_dir.as_deref(),
            require_schema,
            format,
        ),
        Cmd::Preview {
            file,
            kind,
            base_dir,
            out,
            require_schema,
        } => cmd_preview(
            &file,
            kind.as_deref(),
            base_dir.as_deref(),
            out.as_deref(),
            require_schema,
            format,
        ),
        Cmd::Explain { code } => cmd_explain(&code),
    }
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_extract(
    file: &str,
    kind: Option<&str>,
    require_schema: bool,
    format: Format,
) -> Result<i32> {
    let (text, result) = load_and_extract(file, kind)?;

    match format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Format::Pretty => {
            render_diagnostics_pretty(&text, file, &result.diagnostics);
            match &result.schema {
                Some(schema) => println!("{}", serde_json::to_string_pretty(schema)?),
                None => eprintln!("no schema found in {file}"),
            }
        }
    }
    Ok(exit_code(result.schema.is_some(), require_schema))
}

fn cmd_resolve(
    file: &str,
    kind: Option<&str>,
    base_dir: Option<&str>,
    require_schema: bool,
    format: Format,
) -> Result<i32> {
    let (text, result) = load_and_extract(file, kind)?;
    let (schema, diagnostics) = resolve_against_locales(file, base_dir, result)?;

    match format {
        Format::Json => {
            let envelope = ResolveEnvelope {
                schema: schema.as_ref(),
                diagnostics: &diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Format::Pretty => {
            render_diagnostics_pretty(&text, file, &diagnostics);
            match &schema {
                Some(schema) => println!("{}", serde_json::to_string_pretty(schema)?),
                None => eprintln!("no schema found in {file}"),
            }
        }
    }
    Ok(exit_code(schema.is_some(), require_schema))
}

fn cmd_preview(
    file: &str,
    kind: Option<&str>,
    base_dir: Option<&str>,
    out: Option<&str>,
    require_schema: bool,
    format: Format,
) -> Result<i32> {
    let (text, result) = load_and_extract(file, kind)?;
    let (schema, diagnostics) = resolve_against_locales(file, base_dir, result)?;

    match format {
        Format::Json => {
            // HTML goes to --out/stdout; diagnostics go to stderr as JSON.
            eprintln!("{}", serde_json::to_string(&diagnostics)?);
        }
        Format::Pretty => render_diagnostics_pretty(&text, file, &diagnostics),
    }

    let Some(schema) = schema else {
        eprintln!("no schema found in {file}; nothing to preview");
        return Ok(exit_code(false, require_schema));
    };

    let html = theme_schema_render::render(&schema);
    match out {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("cannot write preview to {path}"))?;
        }
        None => print!("{html}"),
    }
    Ok(0)
}

fn cmd_explain(code: &str) -> Result<i32> {
    match theme_schema_diagnostics::codes::explain(code) {
        Some(explanation) => {
            println!("{explanation}");
            Ok(0)
        }
        None => {
            eprintln!("unknown diagnostic code: {code}");
            Ok(1)
        }
    }
}

// ── Pipeline helpers ────────────────────────────────────────────────────

#[derive(serde::Serialize)]
struct ResolveEnvelope<'a> {
    schema: Option<&'a ShopifySchema>,
    diagnostics: &'a [Diagnostic],
}

fn load_and_extract(file: &str, kind: Option<&str>) -> Result<(String, ExtractResult)> {
    let path = Path::new(file);
    let kind = detect_kind(path, kind)?;
    let text = fs::read_to_string(path).with_context(|| format!("cannot read {file}"))?;
    let result = extract(&text, kind);
    Ok((text, result))
}

/// Run translation resolution over an extraction result, merging locale
/// loading diagnostics into the extraction diagnostics.
fn resolve_against_locales(
    file: &str,
    base_dir: Option<&str>,
    result: ExtractResult,
) -> Result<(Option<ShopifySchema>, Vec<Diagnostic>)> {
    let base = match base_dir {
        Some(dir) => PathBuf::from(dir),
        None => Path::new(file)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };

    let mut diagnostics = result.diagnostics;
    let schema = match result.schema {
        Some(schema) => {
            let mut cache = LocaleCache::new();
            let loaded = cache.get_or_load(&base);
            diagnostics.extend(loaded.diagnostics.iter().cloned());
            Some(resolve_schema(&schema, &loaded.translations))
        }
        None => None,
    };
    Ok((schema, diagnostics))
}

fn detect_kind(path: &Path, explicit: Option<&str>) -> Result<FileKind> {
    match explicit {
        Some("liquid") => return Ok(FileKind::Liquid),
        Some("json") => return Ok(FileKind::Json),
        Some(other) => bail!("unknown kind: {other}"),
        None => {}
    }
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.ends_with(".liquid") {
        Ok(FileKind::Liquid)
    } else if name.contains("settings_schema") && name.ends_with(".json") {
        Ok(FileKind::Json)
    } else {
        bail!(
            "cannot infer the file kind of {}; pass --kind liquid|json",
            path.display()
        )
    }
}

fn exit_code(found_schema: bool, require_schema: bool) -> i32 {
    if !found_schema && require_schema {
        EXIT_NO_SCHEMA
    } else {
        0
    }
}
