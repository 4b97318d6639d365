//! curate: classify, normalize and import related identifiers from the shell
//!
//! Every command prints JSON on stdout; logs go to stderr (`RUST_LOG`).

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use curate_identifiers::{classify, normalize, IdentifierType};
use curate_relations::{
    is_duplicate, CurateConfig, RelatedIdentifierRecord, RelatedIdentifiers, RelationType,
};

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(name = "curate", version, about = "Persistent identifier classification and curation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect the identifier type of each value
    Detect {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Print the canonical comparison form of an identifier
    Normalize {
        /// Identifier type; detected when omitted
        #[arg(short = 't', long = "type")]
        identifier_type: Option<IdentifierType>,
        value: String,
    },

    /// Check an identifier against a JSON list of existing records
    Check {
        #[arg(short = 't', long = "type")]
        identifier_type: Option<IdentifierType>,
        #[arg(short, long)]
        relation: RelationType,
        /// JSON array of related identifier records
        #[arg(short, long)]
        existing: PathBuf,
        value: String,
    },

    /// Import related identifiers from a CSV file
    Import {
        csv: PathBuf,
        /// JSON array of records already attached
        #[arg(short, long)]
        existing: Option<PathBuf>,
        /// Configuration file instead of the default location
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    let output = match cli.command {
        Command::Detect { values } => {
            let results: Vec<_> = values
                .iter()
                .map(|value| {
                    let classification = classify(value);
                    json!({
                        "value": value,
                        "identifierType": classification.kind,
                        "rule": classification.rule,
                        "tier": classification.tier,
                    })
                })
                .collect();
            json!(results)
        }
        Command::Normalize {
            identifier_type,
            value,
        } => {
            let kind = identifier_type.unwrap_or_else(|| classify(&value).kind);
            json!({
                "identifier": value,
                "identifierType": kind,
                "normalized": normalize(&value, kind),
            })
        }
        Command::Check {
            identifier_type,
            relation,
            existing,
            value,
        } => {
            let records = read_records(&existing)?;
            let kind = identifier_type.unwrap_or_else(|| classify(&value).kind);
            json!({
                "identifier": value.trim(),
                "identifierType": kind,
                "relationType": relation,
                "duplicate": is_duplicate(value.trim(), kind, relation, &records),
            })
        }
        Command::Import {
            csv,
            existing,
            config,
        } => {
            let config = match config {
                Some(path) => CurateConfig::load(&path)?,
                None => CurateConfig::load_default()?,
            };
            let records = match existing {
                Some(path) => read_records(&path)?,
                None => Vec::new(),
            };
            let mut list = RelatedIdentifiers::from_records_with_config(records, &config);
            let report = list.import_csv(File::open(&csv)?, &config.import)?;
            if let Some(summary) = report.summary() {
                tracing::warn!("{}", summary);
            }
            json!({
                "summary": report.summary(),
                "report": report,
                "records": list.records(),
            })
        }
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn read_records(path: &Path) -> CliResult<Vec<RelatedIdentifierRecord>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}
