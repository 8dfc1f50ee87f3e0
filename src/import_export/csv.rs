//! CSV exchange format codec
//!
//! Decodes catalog CSV documents into raw [`ImportedRecord`]s and encodes
//! links back into the same dialect, including a fill-in-the-blanks
//! template.
//!
//! # Dialect
//! - UTF-8, comma-separated, RFC-4180 quoting: a field containing a comma,
//!   double quote or line break is wrapped in double quotes with internal
//!   quotes doubled, and may span lines.
//! - The header row is canonical on export; on import columns are matched
//!   by name (case-insensitive), so reordered documents decode fine.
//! - Empty or absent fields are written as `""`.
//! - The `tags` field is a semicolon-separated list.

use std::collections::HashMap;

use crate::error::{LinkdeckError, Result};
use crate::models::{ImportedRecord, Link};
use crate::tags;

/// Canonical column order for catalog CSV documents
pub const CSV_HEADER: [&str; 9] = [
    "name",
    "description",
    "category",
    "color",
    "tags",
    "production_url",
    "staging_url",
    "development_url",
    "integration_url",
];

/// Decode a CSV document into raw imported records
///
/// Fails with [`LinkdeckError::Format`] when the document has no header
/// row (empty or all-blank input). Unrecognized columns are ignored;
/// recognized columns missing from the header read as absent for every
/// row. Blank data rows are skipped.
pub fn decode(text: &str) -> Result<Vec<ImportedRecord>> {
    let mut rows: Vec<Vec<String>> = parse_rows(text)
        .into_iter()
        .filter(|row| row.iter().any(|field| !field.trim().is_empty()))
        .collect();

    if rows.is_empty() {
        return Err(LinkdeckError::Format(
            "CSV document has no header row".to_string(),
        ));
    }

    let header = rows.remove(0);
    let columns = map_columns(&header);

    let field = |row: &[String], name: &str| -> Option<String> {
        columns
            .get(name)
            .and_then(|&idx| row.get(idx))
            .filter(|value| !value.is_empty())
            .cloned()
    };

    let records: Vec<ImportedRecord> = rows
        .iter()
        .map(|row| ImportedRecord {
            name: field(row, "name"),
            description: field(row, "description"),
            category: field(row, "category"),
            color: field(row, "color"),
            tags: field(row, "tags")
                .map(|value| tags::parse_tags(&value))
                .filter(|parsed| !parsed.is_empty()),
            production_url: field(row, "production_url"),
            staging_url: field(row, "staging_url"),
            integration_url: field(row, "integration_url"),
        })
        .collect();

    log::debug!("decoded {} record(s) from CSV document", records.len());
    Ok(records)
}

/// Encode links as a CSV document, one row per link in the given order
///
/// The catalog has no development environment, so the `development_url`
/// column is always written empty.
pub fn encode(links: &[Link]) -> String {
    let mut output = String::new();
    output.push_str(&CSV_HEADER.join(","));
    output.push('\n');

    for link in links {
        let row = [
            escape_field(&link.name),
            escape_field(&link.description),
            escape_field(&link.category),
            escape_field(&link.color),
            escape_field(&tags::join_tags(&link.tags)),
            escape_field(&link.environments.production),
            escape_field(link.environments.staging.as_deref().unwrap_or("")),
            escape_field(""),
            escape_field(link.environments.integration.as_deref().unwrap_or("")),
        ];
        output.push_str(&row.join(","));
        output.push('\n');
    }

    output
}

/// Encode the starter template: header, one fully-populated example row,
/// one all-blank row at header width
pub fn encode_template() -> String {
    let mut output = String::new();
    output.push_str(&CSV_HEADER.join(","));
    output.push('\n');

    let example = [
        "Example Link",
        "Short description of the link",
        "Engineering",
        "#6366f1",
        "docs;internal",
        "https://example.com",
        "https://staging.example.com",
        "https://dev.example.com",
        "https://integration.example.com",
    ];
    output.push_str(&example.map(escape_field).join(","));
    output.push('\n');

    let blank: Vec<String> = CSV_HEADER.iter().map(|_| escape_field("")).collect();
    output.push_str(&blank.join(","));
    output.push('\n');

    output
}

/// Map recognized header cells to their column index, first occurrence wins
fn map_columns(header: &[String]) -> HashMap<String, usize> {
    let mut columns = HashMap::new();
    for (idx, cell) in header.iter().enumerate() {
        let key = cell.trim().to_lowercase();
        if CSV_HEADER.contains(&key.as_str()) {
            columns.entry(key).or_insert(idx);
        }
    }
    columns
}

/// Escape one field: quote when it contains a comma, quote or line break
/// (doubling internal quotes), emit `""` when empty, raw otherwise
fn escape_field(field: &str) -> String {
    if field.is_empty() {
        return "\"\"".to_string();
    }

    let needs_quotes = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if needs_quotes {
        let escaped = field.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        field.to_string()
    }
}

/// Split raw CSV text into rows of fields, inverting the quoting rules.
/// Quoted fields may contain commas, doubled quotes and line breaks; both
/// `\n` and `\r\n` terminate a row.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut field)),
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                _ => field.push(c),
            }
        }
    }

    // Final row without a trailing newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
