use crate::leaderboard::tools::error::Result;
use crate::leaderboard::tools::model::{
    CountryRecord, DuplicatePolicy, OrderedMap, ValueCase, normalize,
};

/// Builds one record per input line, in file order.
pub fn to_records<S: AsRef<str>>(lines: &[S]) -> Vec<CountryRecord> {
    lines
        .iter()
        .map(|line| CountryRecord::from_line(line.as_ref()))
        .collect()
}

/// Normalized names in file order. The output has one entry per line.
pub fn to_list<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| normalize(line.as_ref())).collect()
}

/// Normalized names in lexicographic order.
pub fn sorted_list<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut names = to_list(lines);
    names.sort();
    names
}

/// Maps each normalized name to its trimmed spelling, or to the normalized
/// name itself under [`ValueCase::Lower`].
pub fn to_map<S: AsRef<str>>(
    lines: &[S],
    value_case: ValueCase,
    duplicates: DuplicatePolicy,
) -> Result<OrderedMap> {
    insert_numbered(numbered_records(lines), value_case, duplicates)
}

/// Like [`to_map`], with entries ordered by normalized name. Duplicates
/// still report their line numbers in the file.
pub fn to_sorted_map<S: AsRef<str>>(
    lines: &[S],
    value_case: ValueCase,
    duplicates: DuplicatePolicy,
) -> Result<OrderedMap> {
    let mut records = numbered_records(lines);
    records.sort_by(|lhs, rhs| lhs.1.normalized.cmp(&rhs.1.normalized));
    insert_numbered(records, value_case, duplicates)
}

fn numbered_records<S: AsRef<str>>(lines: &[S]) -> Vec<(usize, CountryRecord)> {
    to_records(lines)
        .into_iter()
        .enumerate()
        .map(|(index, record)| (index + 1, record))
        .collect()
}

fn insert_numbered(
    records: Vec<(usize, CountryRecord)>,
    value_case: ValueCase,
    duplicates: DuplicatePolicy,
) -> Result<OrderedMap> {
    let mut map = OrderedMap::new();
    for (line, record) in records {
        let value = match value_case {
            ValueCase::Preserve => record.original,
            ValueCase::Lower => record.normalized.clone(),
        };
        map.insert(record.normalized, value, line, duplicates)?;
    }
    Ok(map)
}
