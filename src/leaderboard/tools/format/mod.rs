use std::collections::BTreeSet;

use crate::leaderboard::tools::error::{Result, ToolError};
use crate::leaderboard::tools::model::{JoinStrategy, OrderedMap, normalize};

/// Header cells emitted when a table header is requested.
pub const TABLE_HEADER: [&str; 3] = ["Label", "Code", "Country"];

/// One row of the markdown table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    pub key: String,
    pub country: String,
}

/// Renders names as quoted, comma-suffixed lines for an array literal.
pub fn render_list<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\",\n", name.as_ref()))
        .collect()
}

/// Renders pairs as `"key": "value",` lines for an object literal.
pub fn render_map(map: &OrderedMap) -> String {
    map.iter()
        .map(|(key, value)| format!("\"{key}\": \"{value}\",\n"))
        .collect()
}

pub fn render_json_list<S: AsRef<str>>(names: &[S]) -> Result<String> {
    let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    Ok(format!("{}\n", serde_json::to_string_pretty(&names)?))
}

pub fn render_json_map(map: &OrderedMap) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(map)?))
}

/// Reads back the output of [`render_map`].
pub fn parse_pairs(text: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let fields: Vec<&str> = trimmed.split('"').collect();
        match (fields.get(1), fields.get(3)) {
            (Some(key), Some(value)) => pairs.push((key.to_string(), value.to_string())),
            _ => {
                return Err(ToolError::MalformedPairLine {
                    line: index + 1,
                    content: trimmed.to_string(),
                });
            }
        }
    }
    Ok(pairs)
}

/// Pairs code entries, sorted by key, with the sorted country names.
pub fn build_table<S: AsRef<str>>(
    codes: &OrderedMap,
    countries: &[S],
    strategy: JoinStrategy,
) -> Result<Vec<TableRow>> {
    let entries = codes.sorted_by_key();

    match strategy {
        JoinStrategy::Positional => {
            if entries.len() != countries.len() {
                return Err(ToolError::LengthMismatch {
                    codes: entries.len(),
                    countries: countries.len(),
                });
            }
            Ok(entries
                .into_iter()
                .zip(countries)
                .map(|((key, label), country)| TableRow {
                    label: label.to_string(),
                    key: key.to_string(),
                    country: country.as_ref().to_string(),
                })
                .collect())
        }
        JoinStrategy::Key | JoinStrategy::Label => {
            let known: BTreeSet<&str> = countries.iter().map(AsRef::as_ref).collect();
            entries
                .into_iter()
                .map(|(key, label)| {
                    let needle = match strategy {
                        JoinStrategy::Label => normalize(label),
                        _ => normalize(key),
                    };
                    match known.get(needle.as_str()) {
                        Some(country) => Ok(TableRow {
                            label: label.to_string(),
                            key: key.to_string(),
                            country: country.to_string(),
                        }),
                        None => Err(ToolError::UnmatchedCode {
                            key: key.to_string(),
                            needle,
                        }),
                    }
                })
                .collect()
        }
    }
}

/// Renders rows as `label | key | country` lines.
pub fn render_table(rows: &[TableRow], header: bool) -> String {
    let mut output = String::new();
    if header {
        output.push_str(&TABLE_HEADER.join(" | "));
        output.push('\n');
        output.push_str("--- | --- | ---\n");
    }
    for row in rows {
        output.push_str(&format!("{} | {} | {}\n", row.label, row.key, row.country));
    }
    output
}
