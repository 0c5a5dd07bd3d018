use std::fmt;
use std::io;
use std::path::PathBuf;

use interview_core::SessionSettings;
use services::QuestionBankService;
use storage::import::read_questions_csv;
use storage::repository::Storage;

mod console;

use console::Console;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidBatchSize { raw: String },
    InvalidDbUrl { raw: String },
    InvalidCsvPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidBatchSize { raw } => {
                write!(f, "invalid --batch-size value (expected a positive integer): {raw}")
            }
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

fn parse_batch_size(raw: String) -> Result<usize, ArgsError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgsError::InvalidBatchSize { raw }),
    }
}

/// Where the question catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    Csv(PathBuf),
    Sqlite(String),
}

#[derive(Debug)]
struct Args {
    source: Source,
    batch_size: usize,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--csv <path> | --db <sqlite_url>] [--batch-size <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --csv interview_questions.csv");
    eprintln!("  --batch-size {}", SessionSettings::DEFAULT_BATCH_SIZE);
    eprintln!("  --db takes precedence over --csv when both are given");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INTERVIEW_CSV, INTERVIEW_DB_URL, INTERVIEW_BATCH_SIZE, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut csv_path = std::env::var("INTERVIEW_CSV")
            .map_or_else(|_| PathBuf::from("interview_questions.csv"), PathBuf::from);
        let mut db_url = std::env::var("INTERVIEW_DB_URL").ok();
        let mut batch_size = match std::env::var("INTERVIEW_BATCH_SIZE") {
            Ok(raw) => parse_batch_size(raw)?,
            Err(_) => SessionSettings::DEFAULT_BATCH_SIZE,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--csv" => {
                    let value = require_value(args, "--csv")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCsvPath { raw: value });
                    }
                    csv_path = PathBuf::from(value);
                }
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = Some(value);
                }
                "--batch-size" => {
                    batch_size = parse_batch_size(require_value(args, "--batch-size")?)?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let source = match db_url {
            Some(url) => Source::Sqlite(url),
            None => Source::Csv(csv_path),
        };
        Ok(Self { source, batch_size })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let settings = SessionSettings::default().with_batch_size(args.batch_size)?;

    // CSV rows go straight into the session so pools keep file order.
    let mut session = match &args.source {
        Source::Csv(path) => {
            let report = read_questions_csv(path)?;
            let bank = QuestionBankService::new(Storage::in_memory().questions, settings);
            bank.open_session_from(&report.questions)?
        }
        Source::Sqlite(url) => {
            let storage = Storage::sqlite(url).await?;
            QuestionBankService::new(storage.questions, settings)
                .open_session()
                .await?
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(&mut session).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn db_flag_wins_over_csv() {
        let args = parse(&["--csv", "q.csv", "--db", "sqlite::memory:"]).unwrap();
        assert_eq!(args.source, Source::Sqlite("sqlite::memory:".into()));
    }

    #[test]
    fn csv_flag_and_batch_size() {
        let args = parse(&["--csv", "q.csv", "--batch-size", "5"]).unwrap();
        assert_eq!(args.source, Source::Csv(PathBuf::from("q.csv")));
        assert_eq!(args.batch_size, 5);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let err = parse(&["--batch-size", "0"]).unwrap_err();
        assert!(matches!(err, ArgsError::InvalidBatchSize { .. }));
    }

    #[test]
    fn missing_value_and_unknown_flag() {
        assert!(matches!(
            parse(&["--csv"]).unwrap_err(),
            ArgsError::MissingValue { flag: "--csv" }
        ));
        assert!(matches!(
            parse(&["--zoom"]).unwrap_err(),
            ArgsError::UnknownArg(_)
        ));
    }
}
