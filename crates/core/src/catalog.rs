//! Parsing of the tabular exercise catalog (MegaGym CSV layout).
//!
//! The source file carries a pandas index column and TitleCase headers.
//! Parsing drops the index, maps headers to snake_case field names and
//! turns blank cells into `None`.

use std::io::Read;

use serde::Serialize;

use crate::error::CoreError;

// ── Constants ────────────────────────────────────────────────────────

/// Header pandas writes for an unnamed index column.
pub const INDEX_COLUMN: &str = "Unnamed: 0";

/// Source header to field name. Already-renamed headers are accepted too.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Title", "title"),
    ("Desc", "description"),
    ("Type", "type"),
    ("BodyPart", "body_part"),
    ("Equipment", "equipment"),
    ("Level", "level"),
    ("Rating", "rating"),
    ("RatingDesc", "rating_desc"),
];

// ── Types ────────────────────────────────────────────────────────────

/// One parsed catalog row, ready to be stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogRecord {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<String>,
    pub body_part: Option<String>,
    pub equipment: Option<String>,
    pub level: Option<String>,
    pub rating: Option<f64>,
    pub rating_desc: Option<String>,
}

/// Result of parsing a catalog source.
#[derive(Debug, Clone, Default)]
pub struct ParsedCatalog {
    pub records: Vec<CatalogRecord>,
    /// Source headers that map to no known field and were skipped.
    pub ignored_columns: Vec<String>,
}

/// Where each known field lives in a source row.
#[derive(Debug, Default)]
struct ColumnLayout {
    title: Option<usize>,
    description: Option<usize>,
    exercise_type: Option<usize>,
    body_part: Option<usize>,
    equipment: Option<usize>,
    level: Option<usize>,
    rating: Option<usize>,
    rating_desc: Option<usize>,
}

// ── Pure functions ───────────────────────────────────────────────────

/// Map a source header to its field name, or `None` for columns to skip.
///
/// The index column (named `Unnamed: 0` or left blank) maps to `None`.
pub fn normalize_header(header: &str) -> Option<&'static str> {
    let header = header.trim();
    if header.is_empty() || header == INDEX_COLUMN {
        return None;
    }
    COLUMN_RENAMES
        .iter()
        .find(|(source, field)| *source == header || *field == header)
        .map(|(_, field)| *field)
}

/// Parse a catalog CSV from any reader.
///
/// Rows shorter than the header leave their trailing fields `None`. Rows
/// with more fields than the header are rejected.
pub fn parse_catalog<R: Read>(reader: R) -> Result<ParsedCatalog, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CoreError::Validation(format!("Unreadable catalog header: {e}")))?
        .clone();

    let mut layout = ColumnLayout::default();
    let mut ignored_columns = Vec::new();

    for (idx, header) in headers.iter().enumerate() {
        let slot = match normalize_header(header) {
            Some("title") => &mut layout.title,
            Some("description") => &mut layout.description,
            Some("type") => &mut layout.exercise_type,
            Some("body_part") => &mut layout.body_part,
            Some("equipment") => &mut layout.equipment,
            Some("level") => &mut layout.level,
            Some("rating") => &mut layout.rating,
            Some("rating_desc") => &mut layout.rating_desc,
            _ => {
                let trimmed = header.trim();
                if !trimmed.is_empty() && trimmed != INDEX_COLUMN {
                    ignored_columns.push(trimmed.to_string());
                }
                continue;
            }
        };
        // First occurrence wins for duplicated headers.
        slot.get_or_insert(idx);
    }

    let mut records = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        // +2: one for the header line, one for 1-based numbering.
        let line = row + 2;
        let record = result
            .map_err(|e| CoreError::Validation(format!("Malformed catalog row {line}: {e}")))?;
        if record.len() > headers.len() {
            return Err(CoreError::Validation(format!(
                "Malformed catalog row {line}: found {} fields, expected at most {}",
                record.len(),
                headers.len()
            )));
        }

        let cell = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        records.push(CatalogRecord {
            title: cell(layout.title),
            description: cell(layout.description),
            exercise_type: cell(layout.exercise_type),
            body_part: cell(layout.body_part),
            equipment: cell(layout.equipment),
            level: cell(layout.level),
            rating: cell(layout.rating)
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|r| r.is_finite()),
            rating_desc: cell(layout.rating_desc),
        });
    }

    Ok(ParsedCatalog {
        records,
        ignored_columns,
    })
}
