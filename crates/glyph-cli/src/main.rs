use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use glyph_config::GlyphConfig;
use glyph_search::{
    Clipboard, ClipboardError, Codepoint, FuzzyTextMatcher, GlyphSearch, IconCatalog, IconFormat,
    ResultOptions, SearchPrecision, SearchResult,
};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "glyph",
    version,
    about = "Find icon-font glyphs by name or hex code and copy their escape codes"
)]
struct Cli {
    /// Config file (defaults to $GLYPH_CONFIG_PATH, then ./glyph.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Icon table to load instead of the configured `catalog.path`
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Override the configured match precision (none, low, regular)
    #[arg(long, global = true)]
    precision: Option<SearchPrecision>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List glyphs matching a name or hex code
    Query(QueryArgs),
    /// Show every encoding of the best match
    Formats(FormatsArgs),
    /// Print the payload a launcher would copy for the best match
    Copy(CopyArgs),
    /// Encode a hex codepoint (`E700`, `0xE700`, `U+E700`)
    Encode(EncodeArgs),
    /// Decode an encoded glyph (`&#xE700;`, `&#59136;`, `\uE700`, `\u{E700}`)
    Decode(DecodeArgs),
}

#[derive(Args)]
struct QueryArgs {
    /// Query text; every word must match
    text: Vec<String>,
    /// Emit JSON
    #[arg(long)]
    json: bool,
    /// Maximum number of results to print
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args)]
struct FormatsArgs {
    #[arg(required = true)]
    text: Vec<String>,
    /// Emit JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CopyArgs {
    #[arg(required = true)]
    text: Vec<String>,
    /// Copy this encoding instead of the primary one
    #[arg(long)]
    format: Option<IconFormat>,
}

#[derive(Args)]
struct EncodeArgs {
    codepoint: String,
    /// Print only this encoding
    #[arg(long)]
    format: Option<IconFormat>,
    /// Emit JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DecodeArgs {
    text: String,
    /// Emit JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let (config, config_path) = glyph_config::load(cli.config.as_deref(), &cwd)?;
    glyph_config::init_tracing(&config.logging);
    if let Some(path) = &config_path {
        tracing::debug!(target: "glyph.cli", config = %path.display(), "using config file");
    }

    let host = Host {
        config,
        data: cli.data,
        precision: cli.precision,
    };

    match cli.command {
        Command::Query(args) => {
            let plugin = host.open()?;
            let mut results = plugin.query(&args.text.join(" "));
            if results.is_empty() {
                if args.json {
                    print_json(&results)?;
                }
                return Ok(1);
            }
            if let Some(limit) = args.limit {
                results.truncate(limit);
            }
            if args.json {
                print_json(&results)?;
            } else {
                for result in &results {
                    print_result_line(&result.title, &result.subtitle);
                }
            }
            Ok(0)
        }
        Command::Formats(args) => {
            let plugin = host.open()?;
            let query = args.text.join(" ");
            let Some(selected) = plugin.best_match(&query) else {
                eprintln!("no glyph matches `{query}`");
                return Ok(1);
            };
            let menu = plugin.context_menu(&selected);
            if args.json {
                print_json(&menu)?;
            } else {
                println!("{} ({})", selected.title, codepoint_label(&selected));
                for result in &menu {
                    let format = result.format.map(IconFormat::as_str).unwrap_or_default();
                    print_result_line(format, &result.subtitle);
                }
            }
            Ok(0)
        }
        Command::Copy(args) => {
            let plugin = host.open()?;
            let query = args.text.join(" ");
            let Some(selected) = plugin.best_match(&query) else {
                eprintln!("no glyph matches `{query}`");
                return Ok(1);
            };
            let target = match args.format {
                None => selected,
                Some(format) => plugin
                    .context_menu(&selected)
                    .into_iter()
                    .find(|result| result.format == Some(format))
                    .with_context(|| format!("`{}` has no {format} encoding", selected.title))?,
            };
            if !plugin.activate(&target, &StdoutClipboard) {
                bail!("failed to copy `{}`", target.title);
            }
            Ok(0)
        }
        Command::Encode(args) => {
            let codepoint = Codepoint::parse_hex(&args.codepoint).with_context(|| {
                format!("`{}` is not a hex Unicode scalar value", args.codepoint)
            })?;
            match args.format {
                Some(format) if !args.json => println!("{}", format.encode(codepoint)),
                Some(format) => print_json(&Encodings::only(codepoint, format))?,
                None => print_encodings(&Encodings::all(codepoint, None), args.json)?,
            }
            Ok(0)
        }
        Command::Decode(args) => {
            let (format, codepoint) = IconFormat::parse(&args.text)
                .with_context(|| format!("`{}` is not a recognized glyph encoding", args.text))?;
            print_encodings(&Encodings::all(codepoint, Some(format)), args.json)?;
            Ok(0)
        }
    }
}

/// Everything needed to stand up the plugin, resolved from flags and config.
struct Host {
    config: GlyphConfig,
    data: Option<PathBuf>,
    precision: Option<SearchPrecision>,
}

impl Host {
    fn open(&self) -> Result<GlyphSearch<FuzzyTextMatcher>> {
        let path = self.data.as_ref().unwrap_or(&self.config.catalog.path);
        let catalog = IconCatalog::load_from_path(path)
            .with_context(|| format!("failed to load icon catalog {}", path.display()))?;

        let precision = self.precision.unwrap_or(self.config.search.precision);
        let options = ResultOptions {
            font_family: self.config.search.font_family.clone(),
            icon_path: self.config.search.icon_path.clone(),
        };
        Ok(GlyphSearch::with_options(
            catalog,
            FuzzyTextMatcher::new(precision),
            options,
        ))
    }
}

/// Terminal stand-in for the launcher clipboard: the payload goes to stdout.
struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{text}")
            .and_then(|()| out.flush())
            .map_err(|err| ClipboardError(err.to_string()))
    }
}

#[derive(Serialize)]
struct Encoding {
    format: IconFormat,
    text: String,
}

#[derive(Serialize)]
struct Encodings {
    codepoint: String,
    value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    detected: Option<IconFormat>,
    encodings: Vec<Encoding>,
}

impl Encodings {
    fn all(codepoint: Codepoint, detected: Option<IconFormat>) -> Self {
        Self::with_formats(codepoint, detected, &IconFormat::ALL)
    }

    fn only(codepoint: Codepoint, format: IconFormat) -> Self {
        Self::with_formats(codepoint, None, &[format])
    }

    fn with_formats(
        codepoint: Codepoint,
        detected: Option<IconFormat>,
        formats: &[IconFormat],
    ) -> Self {
        Self {
            codepoint: codepoint.to_string(),
            value: codepoint.value(),
            detected,
            encodings: formats
                .iter()
                .map(|&format| Encoding {
                    format,
                    text: format.encode(codepoint),
                })
                .collect(),
        }
    }
}

fn print_encodings(encodings: &Encodings, json: bool) -> Result<()> {
    if json {
        return print_json(encodings);
    }

    match encodings.detected {
        Some(format) => println!("{} ({format})", encodings.codepoint),
        None => println!("{}", encodings.codepoint),
    }
    for encoding in &encodings.encodings {
        print_result_line(encoding.format.as_str(), &encoding.text);
    }
    Ok(())
}

fn codepoint_label(result: &SearchResult) -> String {
    result
        .icon
        .map(|icon| icon.codepoint().to_string())
        .unwrap_or_default()
}

fn print_result_line(left: &str, right: &str) {
    if right.is_empty() {
        println!("{left}");
    } else {
        println!("{left}\t{right}");
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    println!("{out}");
    Ok(())
}
