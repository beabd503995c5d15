use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use passbook_core::{ResultSet, read_reference_columns};
use passbook_ingest::Extractor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;
mod document;
mod output;
mod state;
mod validate;

use config::{Config, Format};
use document::Source;

#[derive(Parser, Debug)]
#[command(name = "passbook", version, about = "Extract transactions from bank statement text")]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions and write them as CSV or JSON
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format (default from config, else csv)
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Reference CSV whose header the output must match
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// Extract, then check columns against a reference CSV and require rows
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Reference CSV (only its header row is used)
        #[arg(long)]
        schema: PathBuf,
    },

    /// Compare extracted rows against a reference CSV cell by cell
    Diff {
        #[command(flatten)]
        input: InputArgs,

        /// Reference CSV with the expected rows
        #[arg(long)]
        expected: PathBuf,
    },

    /// Manage ~/.passbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Statement PDF, or text with pages separated by form feeds
    input: PathBuf,

    /// How to read the input (default: by file extension)
    #[arg(long, value_enum)]
    pages_from: Option<Source>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Parse {
            input,
            format,
            output,
            schema,
        } => {
            let cfg = config::load_config()?;
            let rs = extract_input(&input, &cfg).await?;

            if let Some(schema) = schema {
                let expected = read_reference_columns(&schema)?;
                validate::validate(&rs, &expected).ensure()?;
            }

            let format = format.unwrap_or(cfg.output.format);
            output::write_result(&rs, format, output.as_deref())?;
        }

        Command::Check { input, schema } => {
            let cfg = config::load_config()?;
            let rs = extract_input(&input, &cfg).await?;
            let expected = read_reference_columns(&schema)?;

            validate::validate(&rs, &expected).ensure()?;
            println!("OK: {}", output::summary(&rs));
        }

        Command::Diff { input, expected } => {
            let cfg = config::load_config()?;
            let rs = extract_input(&input, &cfg).await?;
            let reference = read_expected(&expected)?;

            let diffs = validate::diff(&rs, &reference);
            if diffs.is_empty() {
                println!("{} rows match {}", rs.len(), expected.display());
                return Ok(());
            }
            for d in &diffs {
                println!(
                    "row {:>4} | {:<11} | got {:?} | expected {:?}",
                    d.row, d.column, d.actual, d.expected
                );
            }
            bail!("{} cell(s) differ from {}", diffs.len(), expected.display());
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load pages off the async thread, then run the extractor.
async fn extract_input(input: &InputArgs, cfg: &Config) -> Result<ResultSet> {
    let path = input.input.clone();
    if !path.exists() {
        bail!("input not found: {}", path.display());
    }
    let source = input.pages_from;

    let pages = tokio::task::spawn_blocking(move || document::load_pages(&path, source))
        .await
        .context("document loader panicked")??;

    let extractor = Extractor::new(cfg.classifier.clone());
    debug!(
        credit_keywords = ?extractor.classifier().credit_keywords,
        default_bucket = ?extractor.classifier().default_bucket,
        "classifier"
    );
    let rs = extractor.extract_pages(&pages);
    info!(pages = pages.len(), rows = rs.len(), "extracted");
    Ok(rs)
}

fn read_expected(path: &Path) -> Result<ResultSet> {
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    ResultSet::read_csv(file).with_context(|| format!("parse {}", path.display()))
}
