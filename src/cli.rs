use crate::config::MakerConfig;
use crate::engine::Session;
use crate::error::{MakerError, Result};
use crate::model::{Conversion, ConversionMode, OutputRow, Skip};
use crate::modes::ModeEvent;
use crate::packs::LanguagePack;
use crate::plans::DocPlan;
use crate::{packs, plans, values};
use clap::{ArgAction, Parser, Subcommand};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "entity-maker")]
#[command(about = "Turn name lists and field definition rows into property declarations and naming variants.", long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./entitymaker.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Target language pack: csharp | rust
    #[arg(long)]
    pub lang: Option<String>,

    /// Doc comment plan: summary | compact
    #[arg(long)]
    pub plan: Option<String>,

    /// Emit JSON instead of plain snippets
    #[arg(long)]
    pub json: bool,

    /// -v for info, -vv for debug (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// One bare name per line
    Names {
        /// Read from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// pascal | camel | lower | upper | property
        #[arg(long, default_value = "pascal")]
        case: String,

        /// Keep names as typed (property only; default converts snake→Pascal)
        #[arg(long)]
        as_is: bool,
    },

    /// `LogicalName,PhysicalName,DataType,Required` per line
    Defs {
        #[arg(long)]
        input: Option<PathBuf>,

        /// Keep physical names as typed instead of snake→Pascal
        #[arg(long)]
        as_is: bool,
    },

    /// Definition rows from a spreadsheet (needs the `xlsx` feature)
    Sheet {
        path: PathBuf,

        #[arg(long)]
        worksheet: Option<String>,

        #[arg(long)]
        as_is: bool,
    },

    /// Normalize a number or date; prints nothing when malformed
    Value {
        text: String,

        /// auto | int | number | date
        #[arg(long, default_value = "auto")]
        kind: String,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            Ok(s)
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = MakerConfig::load(cli.config.as_deref())?;
    let lang = cli.lang.clone().unwrap_or_else(|| cfg.lang.clone());
    let plan_id = cli.plan.clone().unwrap_or_else(|| cfg.plan.clone());

    let mut session = Session::new();

    let result = match cli.cmd {
        Command::Names { input, case, as_is } => {
            let mode = ConversionMode::parse(&case)
                .ok_or_else(|| MakerError::Unsupported(format!("unknown case '{case}'")))?;
            session.dispatch(ModeEvent::SelectNameOnly);
            session.dispatch(ModeEvent::SelectCase(mode));
            if as_is {
                if session.modes().naming_enabled {
                    session.dispatch(ModeEvent::SetSnakeToPascal(false));
                } else {
                    tracing::warn!("--as-is only applies with --case property; ignored");
                }
            }
            let (pack, plan) = renderers(&lang, &plan_id)?;
            let text = read_input(input.as_deref())?;
            session.make(pack.as_ref(), plan.as_ref(), &text)
        }

        Command::Defs { input, as_is } => {
            session.dispatch(ModeEvent::SelectDefinition);
            session.dispatch(ModeEvent::SetSnakeToPascal(cfg.snake_to_pascal && !as_is));
            let (pack, plan) = renderers(&lang, &plan_id)?;
            let text = read_input(input.as_deref())?;
            session.make(pack.as_ref(), plan.as_ref(), &text)
        }

        Command::Sheet { path, worksheet, as_is } => {
            session.dispatch(ModeEvent::SelectDefinition);
            session.dispatch(ModeEvent::SetSnakeToPascal(cfg.snake_to_pascal && !as_is));
            let (pack, plan) = renderers(&lang, &plan_id)?;
            let worksheet = worksheet.unwrap_or_else(|| cfg.worksheet.clone());
            let rows = sheet_rows(&path, &worksheet, cfg.first_row)?;
            Ok(session.make_from_fields(pack.as_ref(), plan.as_ref(), rows, cfg.first_row))
        }

        Command::Value { text, kind } => {
            if let Some(v) = normalize_value(&text, &kind)? {
                println!("{v}");
            }
            return Ok(());
        }
    };

    match result {
        Ok(out) => report(&out),
        Err(Skip::EmptyInput) => tracing::info!("nothing to convert"),
        Err(reason) => tracing::debug!(%reason, "no output"),
    }

    print_rows(session.rows(), cli.json)
}

#[cfg(feature = "xlsx")]
fn sheet_rows(path: &Path, worksheet: &str, first_row: usize) -> Result<Vec<[String; 4]>> {
    crate::sheet::read_definition_rows(path, worksheet, first_row)
}

#[cfg(not(feature = "xlsx"))]
fn sheet_rows(_path: &Path, _worksheet: &str, _first_row: usize) -> Result<Vec<[String; 4]>> {
    Err(MakerError::Unsupported("built without spreadsheet support (feature 'xlsx')".into()))
}

fn renderers(lang: &str, plan: &str) -> Result<(Box<dyn LanguagePack>, Box<dyn DocPlan>)> {
    let pack = packs::get_pack(lang)?;
    let plan = plans::get_plan(plan)?;
    tracing::debug!(pack = pack.id(), plan = plan.id(), "renderers selected");
    Ok((pack, plan))
}

fn report(out: &Conversion) {
    tracing::info!(rows = out.rows.len(), skipped = out.skipped.len(), "converted");
}

fn print_rows(rows: &[OutputRow], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    if let Some(body) = plain_text(rows) {
        println!("{body}");
    }
    Ok(())
}

/// Single-line results one per line; once any snippet spans several lines,
/// every snippet is followed by a blank line instead.
fn plain_text(rows: &[OutputRow]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }
    let multi = rows.iter().any(|r| r.source_code.trim_end().contains('\n'));
    let sep = if multi { "\n\n" } else { "\n" };
    Some(rows.iter().map(|r| r.source_code.trim_end()).collect::<Vec<_>>().join(sep))
}

/// Canonical form of `text`, or `None` when it does not parse as `kind`.
pub fn normalize_value(text: &str, kind: &str) -> Result<Option<String>> {
    let date = || values::to_date_time(text).map(|d| values::format_date_time(&d));
    let number = || values::to_decimal(text).map(|n| n.to_string());
    let int = || values::to_long(text).map(|n| n.to_string());

    let parsed = match kind.trim().to_lowercase().as_str() {
        "auto" => date().or_else(number),
        "date" => date(),
        "number" => number(),
        "int" => int(),
        other => return Err(MakerError::Unsupported(format!("unknown value kind '{other}'"))),
    }
    .ok_or(Skip::Malformed);

    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(reason) => {
            tracing::debug!(text, kind, %reason, "value skipped");
            Ok(None)
        }
    }
}
