//! Bulk import of related identifiers from CSV
//!
//! Expected header (names are case-insensitive, camelCase spellings accepted):
//!
//! ```text
//! identifier,identifier_type,relation_type,related_title
//! 10.5880/GFZ.1.1,DOI,Cites,GFZ dataset
//! ark:/13960/t5z64fc55,,IsDerivedFrom,
//! ```
//!
//! `identifier` and `relation_type` are required; an empty `identifier_type`
//! cell is filled in by detection. Bad rows are reported and skipped, the
//! rest of the file is still imported.

use std::io::Read;

use curate_identifiers::{detect, IdentifierType, ParseIdentifierTypeError};
use serde::Serialize;
use thiserror::Error;

use crate::config::ImportConfig;
use crate::duplicates::is_duplicate;
use crate::record::RelatedIdentifierRecord;
use crate::relation::{ParseRelationTypeError, RelationType};

/// File-level import failure; nothing was imported
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Unsupported column: {0}")]
    UnsupportedColumn(String),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Malformed CSV: {0}")]
    Csv(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err.to_string())
    }
}

/// Why a single row was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowIssue {
    #[error("identifier is empty")]
    EmptyIdentifier,

    #[error("relation type is missing")]
    MissingRelationType,

    #[error("unsupported relation type {value:?}")]
    UnknownRelationType { value: String },

    #[error("unsupported identifier type {value:?}")]
    UnknownIdentifierType { value: String },

    #[error("row is not valid UTF-8")]
    InvalidUtf8,
}

impl From<ParseRelationTypeError> for RowIssue {
    fn from(err: ParseRelationTypeError) -> Self {
        RowIssue::UnknownRelationType { value: err.input }
    }
}

impl From<ParseIdentifierTypeError> for RowIssue {
    fn from(err: ParseIdentifierTypeError) -> Self {
        RowIssue::UnknownIdentifierType { value: err.input }
    }
}

/// A skipped row and its 1-based data row number
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Row {row}: {issue}")]
pub struct RowError {
    pub row: usize,
    pub issue: RowIssue,
}

/// Rows dropped because they were already present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkippedDuplicates {
    pub count: usize,
    /// At most `max_listed_duplicates` identifiers, each possibly truncated
    pub listed: Vec<String>,
}

impl SkippedDuplicates {
    fn record(&mut self, identifier: &str, config: &ImportConfig) {
        self.count += 1;
        if self.listed.len() < config.max_listed_duplicates {
            self.listed
                .push(truncate_identifier(identifier, config.max_identifier_chars));
        }
    }

    /// Skipped identifiers not named in `listed`
    pub fn unlisted(&self) -> usize {
        self.count - self.listed.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    /// Accepted rows in file order, positioned after the existing records
    pub accepted: Vec<RelatedIdentifierRecord>,
    pub duplicates: SkippedDuplicates,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    /// User feedback on skipped duplicates; `None` when there were none
    pub fn summary(&self) -> Option<String> {
        let skipped = &self.duplicates;
        if skipped.count == 0 {
            return None;
        }
        let mut names = skipped.listed.clone();
        if skipped.unlisted() > 0 {
            names.push(format!("and {} more", skipped.unlisted()));
        }
        let mut line = format!("Skipped {} duplicate(s)", skipped.count);
        if !names.is_empty() {
            line.push_str(": ");
            line.push_str(&names.join(", "));
        }
        Some(line)
    }
}

#[derive(Debug, Default)]
struct Columns {
    identifier: Option<usize>,
    identifier_type: Option<usize>,
    relation_type: Option<usize>,
    related_title: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ImportError> {
        let mut columns = Columns::default();
        for (index, header) in headers.iter().enumerate() {
            let slot = match header.trim().to_ascii_lowercase().as_str() {
                "identifier" => &mut columns.identifier,
                "identifier_type" | "identifiertype" => &mut columns.identifier_type,
                "relation_type" | "relationtype" => &mut columns.relation_type,
                "related_title" | "relatedtitle" => &mut columns.related_title,
                _ => return Err(ImportError::UnsupportedColumn(header.trim().to_string())),
            };
            slot.get_or_insert(index);
        }
        if columns.identifier.is_none() {
            return Err(ImportError::MissingColumn("identifier"));
        }
        if columns.relation_type.is_none() {
            return Err(ImportError::MissingColumn("relation_type"));
        }
        Ok(columns)
    }

    fn cell<'r>(&self, record: &'r csv::StringRecord, column: Option<usize>) -> &'r str {
        column
            .and_then(|index| record.get(index))
            .map(str::trim)
            .unwrap_or("")
    }
}

struct ParsedRow {
    identifier: String,
    identifier_type: IdentifierType,
    relation_type: RelationType,
    related_title: Option<String>,
}

fn parse_row(columns: &Columns, record: &csv::StringRecord) -> Result<ParsedRow, RowIssue> {
    let identifier = columns.cell(record, columns.identifier);
    if identifier.is_empty() {
        return Err(RowIssue::EmptyIdentifier);
    }

    let relation = columns.cell(record, columns.relation_type);
    if relation.is_empty() {
        return Err(RowIssue::MissingRelationType);
    }
    let relation_type: RelationType = relation.parse()?;

    let kind = columns.cell(record, columns.identifier_type);
    let identifier_type = if kind.is_empty() {
        detect(identifier)
    } else {
        kind.parse::<IdentifierType>()?
    };

    let title = columns.cell(record, columns.related_title);
    Ok(ParsedRow {
        identifier: identifier.to_string(),
        identifier_type,
        relation_type,
        related_title: (!title.is_empty()).then(|| title.to_string()),
    })
}

/// Import CSV rows against the records already present
///
/// Duplicates are checked against `existing` and against rows accepted
/// earlier in the same file. Nothing in `existing` is modified.
pub fn import_csv<R: Read>(
    reader: R,
    existing: &[RelatedIdentifierRecord],
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv::StringRecord::from_byte_record(csv_reader.byte_headers()?.clone())
        .map_err(|e| ImportError::Csv(e.to_string()))?;
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(ImportError::EmptyInput);
    }
    let columns = Columns::from_headers(&headers)?;

    let mut report = ImportReport::default();
    for (index, result) in csv_reader.byte_records().enumerate() {
        let row = index + 1;
        let record = match csv::StringRecord::from_byte_record(result?) {
            Ok(record) => record,
            Err(_) => {
                tracing::debug!(row, "Skipping row with invalid UTF-8");
                report.errors.push(RowError {
                    row,
                    issue: RowIssue::InvalidUtf8,
                });
                continue;
            }
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let parsed = match parse_row(&columns, &record) {
            Ok(parsed) => parsed,
            Err(issue) => {
                tracing::debug!(row, %issue, "Skipping invalid row");
                report.errors.push(RowError { row, issue });
                continue;
            }
        };

        if is_duplicate(
            &parsed.identifier,
            parsed.identifier_type,
            parsed.relation_type,
            existing,
        ) || is_duplicate(
            &parsed.identifier,
            parsed.identifier_type,
            parsed.relation_type,
            &report.accepted,
        ) {
            tracing::debug!(row, identifier = %parsed.identifier, "Skipping duplicate row");
            report.duplicates.record(&parsed.identifier, config);
            continue;
        }

        let position = existing.len() + report.accepted.len();
        let mut accepted = RelatedIdentifierRecord::new(
            parsed.identifier,
            parsed.identifier_type,
            parsed.relation_type,
            position,
        );
        accepted.related_title = parsed.related_title;
        report.accepted.push(accepted);
    }

    tracing::info!(
        accepted = report.accepted.len(),
        duplicates = report.duplicates.count,
        errors = report.errors.len(),
        "CSV import finished"
    );
    Ok(report)
}

/// Cut to `max_chars` characters, the last one becoming an ellipsis
fn truncate_identifier(identifier: &str, max_chars: usize) -> String {
    if identifier.chars().count() <= max_chars {
        return identifier.to_string();
    }
    let mut cut: String = identifier.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
