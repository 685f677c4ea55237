use crate::leaderboard::tools::error::{Result, ToolError};
use crate::leaderboard::tools::model::{CodeRecord, DuplicatePolicy, LabelCase, OrderedMap};

const LABEL_FIELD: usize = 1;
const KEY_FIELD: usize = 3;

/// Drops the opening and closing bracket lines, numbering the rest from
/// their position in the file.
pub fn strip_envelope<S: AsRef<str>>(lines: &[S]) -> Vec<(usize, &str)> {
    if lines.len() < 2 {
        return Vec::new();
    }
    lines[1..lines.len() - 1]
        .iter()
        .enumerate()
        .map(|(index, line)| (index + 2, line.as_ref()))
        .collect()
}

/// Splits a trimmed line on `"` and picks the label and key fields.
pub fn parse_code_line(line: &str, line_number: usize) -> Result<CodeRecord> {
    let fields: Vec<&str> = line.trim().split('"').collect();
    match (fields.get(LABEL_FIELD), fields.get(KEY_FIELD)) {
        (Some(label), Some(key)) => Ok(CodeRecord {
            label: (*label).to_string(),
            key: (*key).to_string(),
            line: line_number,
        }),
        _ => Err(ToolError::MalformedCodeLine {
            line: line_number,
            content: line.trim().to_string(),
        }),
    }
}

/// Builds the key → label mapping in file order.
pub fn parse_codes(
    lines: &[(usize, &str)],
    label_case: LabelCase,
    duplicates: DuplicatePolicy,
) -> Result<OrderedMap> {
    let mut codes = OrderedMap::new();
    for &(line_number, line) in lines {
        let record = parse_code_line(line, line_number)?;
        codes.insert(
            record.key,
            label_case.apply(&record.label),
            record.line,
            duplicates,
        )?;
    }
    Ok(codes)
}
