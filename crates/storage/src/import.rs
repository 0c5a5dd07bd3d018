//! CSV import of the interview question table.
//!
//! The table carries one row per question with the columns listed in
//! [`REQUIRED_COLUMNS`]; any extra columns are ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use interview_core::model::{Category, Question, QuestionDraft, QuestionError, QuestionId};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Header names every question table must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Question Number",
    "Interview Question",
    "Topic",
    "Answer",
    "Difficulty",
];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("line {line}: {source}")]
    InvalidRow {
        line: u64,
        #[source]
        source: QuestionError,
    },

    #[error("duplicate question {id} in category {category}")]
    DuplicateQuestion { category: Category, id: QuestionId },
}

/// A row left out because its difficulty is not a known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub difficulty: String,
}

/// Result of reading a question table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Question Number")]
    number: u64,
    #[serde(rename = "Interview Question")]
    prompt: String,
    #[serde(rename = "Topic")]
    topic: String,
    #[serde(rename = "Answer")]
    answer: String,
    #[serde(rename = "Difficulty")]
    difficulty: String,
}

/// Read a question table from a CSV file.
///
/// # Errors
///
/// Returns `ImportError::Io` if the file cannot be opened, otherwise see
/// [`parse_questions`].
pub fn read_questions_csv(path: impl AsRef<Path>) -> Result<ImportReport, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_questions(file)?;
    info!(
        path = %path.display(),
        imported = report.questions.len(),
        skipped = report.skipped.len(),
        "loaded question table"
    );
    Ok(report)
}

/// Parse a question table from any CSV source.
///
/// Difficulty labels are trimmed and lower-cased; rows with an unknown
/// difficulty are skipped and listed in the report.
///
/// # Errors
///
/// - `ImportError::MissingColumns` when a required header is absent.
/// - `ImportError::Csv` for malformed CSV or a non-numeric question number.
/// - `ImportError::InvalidRow` when prompt or answer is blank.
/// - `ImportError::DuplicateQuestion` when a category repeats a number.
pub fn parse_questions<R: io::Read>(source: R) -> Result<ImportReport, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    let headers = reader.headers()?.clone();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    let mut report = ImportReport::default();
    let mut seen = HashSet::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: CsvRow = record.deserialize(Some(&headers))?;

        let Ok(category) = row.difficulty.parse::<Category>() else {
            warn!(line, difficulty = %row.difficulty, "skipping row with unknown difficulty");
            report.skipped.push(SkippedRow {
                line,
                difficulty: row.difficulty,
            });
            continue;
        };

        let id = QuestionId::new(row.number);
        if !seen.insert((category, id)) {
            return Err(ImportError::DuplicateQuestion { category, id });
        }

        let question = QuestionDraft {
            id,
            category,
            prompt: row.prompt,
            topic: row.topic,
            answer: row.answer,
        }
        .validate()
        .map_err(|source| ImportError::InvalidRow { line, source })?;
        report.questions.push(question);
    }

    Ok(report)
}
