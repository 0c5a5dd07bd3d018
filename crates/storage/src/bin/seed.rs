use std::fmt;
use std::path::PathBuf;

use storage::import::read_questions_csv;
use storage::repository::Storage;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    csv_path: PathBuf,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidCsvPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidCsvPath { raw } => write!(f, "invalid --csv value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("INTERVIEW_DB_URL")
            .unwrap_or_else(|_| "sqlite:questions.sqlite3?mode=rwc".into());
        let mut csv_path = std::env::var("INTERVIEW_CSV")
            .map_or_else(|_| PathBuf::from("interview_questions.csv"), PathBuf::from);

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--csv" => {
                    let value = require_value(&mut args, "--csv")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCsvPath { raw: value });
                    }
                    csv_path = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, csv_path })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>   SQLite URL (default: sqlite:questions.sqlite3?mode=rwc)");
    eprintln!("  --csv <path>        Question table to import (default: interview_questions.csv)");
    eprintln!("  -h, --help          Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  INTERVIEW_DB_URL, INTERVIEW_CSV");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let report = read_questions_csv(&args.csv_path)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    storage.questions.upsert_questions(&report.questions).await?;

    println!(
        "Imported {} questions ({} rows skipped) from {} into {}",
        report.questions.len(),
        report.skipped.len(),
        args.csv_path.display(),
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
