use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::leaderboard::tools::error::{Result, ToolError};
use crate::leaderboard::tools::format;
use crate::leaderboard::tools::io::{self, codes, countries};
use crate::leaderboard::tools::model::{DuplicatePolicy, JoinStrategy, LabelCase, ValueCase};

/// Default countries list, relative to the working directory.
pub const DEFAULT_COUNTRIES_FILE: &str = "countries.txt";
/// Default codes file, relative to the working directory.
pub const DEFAULT_CODES_FILE: &str = "codes.json";

/// Which artefact to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Sorted, normalized country names.
    List,
    /// Normalized name → original name.
    Map,
    /// Code → label.
    Codes,
    /// Markdown rows pairing codes, labels and countries.
    Table,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::List => write!(f, "list"),
            OutputMode::Map => write!(f, "map"),
            OutputMode::Codes => write!(f, "codes"),
            OutputMode::Table => write!(f, "table"),
        }
    }
}

/// Text layout of the produced artefact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Quoted, comma-suffixed lines ready to paste into a literal.
    #[default]
    Text,
    /// A standalone JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings shared by every reformatting entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReformatOptions {
    pub mode: OutputMode,
    pub format: OutputFormat,
    pub value_case: ValueCase,
    /// Falls back to lower-case for codes and preserved case for tables.
    pub label_case: Option<LabelCase>,
    pub duplicates: DuplicatePolicy,
    pub join: JoinStrategy,
    /// Order list and map output by normalized name instead of file order.
    pub sort: bool,
    /// Prefix table output with a markdown header.
    pub header: bool,
}

impl ReformatOptions {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            format: OutputFormat::default(),
            value_case: ValueCase::default(),
            label_case: None,
            duplicates: DuplicatePolicy::default(),
            join: JoinStrategy::default(),
            sort: true,
            header: false,
        }
    }

    pub fn resolved_label_case(&self) -> LabelCase {
        self.label_case.unwrap_or(match self.mode {
            OutputMode::Table => LabelCase::Preserve,
            _ => LabelCase::Lower,
        })
    }
}

/// Locations of the two input files.
#[derive(Debug, Clone, Copy)]
pub struct Inputs<'a> {
    pub countries: &'a Path,
    pub codes: &'a Path,
}

/// Produces the artefact selected by `options.mode`.
#[instrument(level = "info", skip_all, fields(mode = %options.mode, format = %options.format))]
pub fn render(inputs: Inputs<'_>, options: &ReformatOptions) -> Result<String> {
    match options.mode {
        OutputMode::List => countries_list(inputs.countries, options),
        OutputMode::Map => countries_map(inputs.countries, options),
        OutputMode::Codes => codes_map(inputs.codes, options),
        OutputMode::Table => markdown_table(inputs.codes, inputs.countries, options),
    }
}

/// Renders the normalized country names.
#[instrument(level = "debug", skip_all, fields(input = %input.display()))]
pub fn countries_list(input: &Path, options: &ReformatOptions) -> Result<String> {
    let lines = io::load_lines(input)?;
    let names = if options.sort {
        countries::sorted_list(&lines)
    } else {
        countries::to_list(&lines)
    };
    info!(country_count = names.len(), "normalized country names");

    match options.format {
        OutputFormat::Text => Ok(format::render_list(&names)),
        OutputFormat::Json => format::render_json_list(&names),
    }
}

/// Renders the normalized name → name mapping.
#[instrument(level = "debug", skip_all, fields(input = %input.display()))]
pub fn countries_map(input: &Path, options: &ReformatOptions) -> Result<String> {
    let lines = io::load_lines(input)?;
    let map = if options.sort {
        countries::to_sorted_map(&lines, options.value_case, options.duplicates)?
    } else {
        countries::to_map(&lines, options.value_case, options.duplicates)?
    };
    info!(entry_count = map.len(), "built country map");

    match options.format {
        OutputFormat::Text => Ok(format::render_map(&map)),
        OutputFormat::Json => format::render_json_map(&map),
    }
}

/// Renders the code → label mapping.
#[instrument(level = "debug", skip_all, fields(input = %input.display()))]
pub fn codes_map(input: &Path, options: &ReformatOptions) -> Result<String> {
    let lines = io::load_lines(input)?;
    let body = codes::strip_envelope(&lines);
    let codes = codes::parse_codes(&body, options.resolved_label_case(), options.duplicates)?;
    info!(code_count = codes.len(), "parsed code entries");

    match options.format {
        OutputFormat::Text => Ok(format::render_map(&codes)),
        OutputFormat::Json => format::render_json_map(&codes),
    }
}

/// Renders the markdown table joining codes with the sorted country names.
#[instrument(
    level = "debug",
    skip_all,
    fields(codes = %codes_input.display(), countries = %countries_input.display(), join = ?options.join)
)]
pub fn markdown_table(
    codes_input: &Path,
    countries_input: &Path,
    options: &ReformatOptions,
) -> Result<String> {
    if options.format != OutputFormat::Text {
        return Err(ToolError::UnsupportedFormat {
            mode: options.mode.to_string(),
            format: options.format.to_string(),
        });
    }

    let code_lines = io::load_lines(codes_input)?;
    let body = codes::strip_envelope(&code_lines);
    let codes = codes::parse_codes(&body, options.resolved_label_case(), options.duplicates)?;

    let country_lines = io::load_lines(countries_input)?;
    let names = countries::sorted_list(&country_lines);
    info!(
        code_count = codes.len(),
        country_count = names.len(),
        "joining codes with countries"
    );

    let rows = format::build_table(&codes, &names, options.join)?;
    debug!(row_count = rows.len(), "table constructed");
    Ok(format::render_table(&rows, options.header))
}

/// Writes the rendered text to `output`, or to standard output when absent.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)?;
            debug!(output = %path.display(), bytes = text.len(), "output written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(text.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
