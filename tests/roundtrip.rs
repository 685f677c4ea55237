use std::fs;
use std::path::Path;

use leaderboard_tools::ToolError;
use leaderboard_tools::format::{self, TableRow};
use leaderboard_tools::io::countries;
use leaderboard_tools::model::{DuplicatePolicy, JoinStrategy, LabelCase, OrderedMap, ValueCase};
use leaderboard_tools::reformat::{self, Inputs, OutputFormat, OutputMode, ReformatOptions};
use tempfile::tempdir;

const CODES: &str = r#"{
  "AD": "Andorra",
  "AL": "Albania",
  "AF": "Afghanistan"
}
"#;

const COUNTRIES: &str = "Andorra\nAfghanistan \nalbania\n";

fn write_inputs(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let codes = dir.join("codes.json");
    let countries = dir.join("countries.txt");
    fs::write(&codes, CODES).expect("codes written");
    fs::write(&countries, COUNTRIES).expect("countries written");
    (codes, countries)
}

fn codes_map(pairs: &[(&str, &str)]) -> OrderedMap {
    let mut map = OrderedMap::new();
    for (index, (key, value)) in pairs.iter().enumerate() {
        map.insert(
            key.to_string(),
            value.to_string(),
            index + 2,
            DuplicatePolicy::Reject,
        )
        .expect("unique key");
    }
    map
}

#[test]
fn table_row_pairs_label_key_and_country() {
    let codes = codes_map(&[("ABC", "Foo")]);
    let rows = format::build_table(&codes, &["andorra"], JoinStrategy::Positional)
        .expect("table built");

    assert_eq!(
        rows,
        vec![TableRow {
            label: "Foo".to_string(),
            key: "ABC".to_string(),
            country: "andorra".to_string(),
        }]
    );
    assert_eq!(format::render_table(&rows, false), "Foo | ABC | andorra\n");
}

#[test]
fn positional_table_rejects_length_mismatch() {
    let codes = codes_map(&[("AD", "Andorra"), ("AF", "Afghanistan")]);
    let error = format::build_table(&codes, &["andorra"], JoinStrategy::Positional)
        .expect_err("lengths differ");

    match error {
        ToolError::LengthMismatch { codes, countries } => {
            assert_eq!(codes, 2);
            assert_eq!(countries, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn keyed_table_joins_on_shared_name() {
    let codes = codes_map(&[("Andorra", "AD"), ("Albania", "AL")]);
    let known = ["albania", "andorra", "chad"];
    let rows = format::build_table(&codes, &known, JoinStrategy::Key).expect("table built");

    assert_eq!(
        format::render_table(&rows, true),
        "Label | Code | Country\n--- | --- | ---\nAL | Albania | albania\nAD | Andorra | andorra\n"
    );

    let error = format::build_table(&codes, &known, JoinStrategy::Label)
        .expect_err("labels are codes, not names");
    assert!(matches!(error, ToolError::UnmatchedCode { ref needle, .. } if needle == "al"));

    let error = format::build_table(&codes, &["andorra"], JoinStrategy::Key)
        .expect_err("albania missing");
    assert!(matches!(error, ToolError::UnmatchedCode { ref key, .. } if key == "Albania"));
}

#[test]
fn map_printer_output_parses_back() {
    let lines = ["United States", "Chad", "Côte d'Ivoire"];
    let map = countries::to_map(&lines, ValueCase::Preserve, DuplicatePolicy::Reject)
        .expect("map built");

    let rendered = format::render_map(&map);
    assert_eq!(
        rendered.lines().next(),
        Some(r#""united states": "United States","#)
    );

    let pairs = format::parse_pairs(&rendered).expect("pairs parsed");
    assert_eq!(pairs, map.to_pairs());

    let as_object = format!("{{{}}}", rendered.trim_end().trim_end_matches(','));
    let parsed: serde_json::Value = serde_json::from_str(&as_object).expect("valid JSON object");
    assert_eq!(parsed["chad"], serde_json::json!("Chad"));
}

#[test]
fn parse_pairs_rejects_truncated_lines() {
    let error = format::parse_pairs("\"a\": \"b\",\n\n\"c\":\n").expect_err("third line is short");
    assert!(matches!(error, ToolError::MalformedPairLine { line: 3, .. }));
}

#[test]
fn list_mode_renders_sorted_quoted_names() {
    let temp_dir = tempdir().expect("temporary directory");
    let (codes, countries) = write_inputs(temp_dir.path());
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let text = reformat::render(inputs, &ReformatOptions::new(OutputMode::List)).expect("rendered");
    assert_eq!(text, "\"afghanistan\",\n\"albania\",\n\"andorra\",\n");

    let options = ReformatOptions {
        sort: false,
        ..ReformatOptions::new(OutputMode::List)
    };
    let text = reformat::render(inputs, &options).expect("rendered");
    assert_eq!(text, "\"andorra\",\n\"afghanistan\",\n\"albania\",\n");
}

#[test]
fn map_mode_supports_json_output() {
    let temp_dir = tempdir().expect("temporary directory");
    let (codes, countries) = write_inputs(temp_dir.path());
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let options = ReformatOptions {
        format: OutputFormat::Json,
        ..ReformatOptions::new(OutputMode::Map)
    };
    let text = reformat::render(inputs, &options).expect("rendered");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("JSON parsed");

    assert_eq!(
        parsed,
        serde_json::json!({
            "afghanistan": "Afghanistan",
            "albania": "albania",
            "andorra": "Andorra"
        })
    );
}

#[test]
fn codes_mode_lowercases_labels() {
    let temp_dir = tempdir().expect("temporary directory");
    let (codes, countries) = write_inputs(temp_dir.path());
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let text = reformat::render(inputs, &ReformatOptions::new(OutputMode::Codes)).expect("rendered");
    assert_eq!(
        text,
        "\"Andorra\": \"ad\",\n\"Albania\": \"al\",\n\"Afghanistan\": \"af\",\n"
    );
}

#[test]
fn table_mode_writes_rows_to_output_file() {
    let temp_dir = tempdir().expect("temporary directory");
    let (codes, countries) = write_inputs(temp_dir.path());
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let options = ReformatOptions::new(OutputMode::Table);
    assert_eq!(options.resolved_label_case(), LabelCase::Preserve);
    let text = reformat::render(inputs, &options).expect("rendered");

    let output_path = temp_dir.path().join("table.md");
    reformat::write_output(&text, Some(&output_path)).expect("output written");
    let written = fs::read_to_string(&output_path).expect("table read");

    assert_eq!(
        written,
        "AF | Afghanistan | afghanistan\nAL | Albania | albania\nAD | Andorra | andorra\n"
    );
}

#[test]
fn table_mode_rejects_json_format() {
    let temp_dir = tempdir().expect("temporary directory");
    let (codes, countries) = write_inputs(temp_dir.path());
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let options = ReformatOptions {
        format: OutputFormat::Json,
        ..ReformatOptions::new(OutputMode::Table)
    };
    let error = reformat::render(inputs, &options).expect_err("json table unsupported");
    assert!(matches!(error, ToolError::UnsupportedFormat { .. }));
}

#[test]
fn missing_input_is_reported_with_path() {
    let temp_dir = tempdir().expect("temporary directory");
    let missing = temp_dir.path().join("countries.txt");
    let codes = temp_dir.path().join("codes.json");
    let inputs = Inputs {
        countries: &missing,
        codes: &codes,
    };

    let error =
        reformat::render(inputs, &ReformatOptions::new(OutputMode::List)).expect_err("missing");
    match error {
        ToolError::MissingInput(path) => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn map_mode_text_follows_sort_setting() {
    let temp_dir = tempdir().expect("temporary directory");
    let (codes, countries) = write_inputs(temp_dir.path());
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let text = reformat::render(inputs, &ReformatOptions::new(OutputMode::Map)).expect("rendered");
    assert_eq!(
        text,
        "\"afghanistan\": \"Afghanistan\",\n\"albania\": \"albania\",\n\"andorra\": \"Andorra\",\n"
    );

    let options = ReformatOptions {
        sort: false,
        ..ReformatOptions::new(OutputMode::Map)
    };
    let text = reformat::render(inputs, &options).expect("rendered");
    assert_eq!(
        text,
        "\"andorra\": \"Andorra\",\n\"afghanistan\": \"Afghanistan\",\n\"albania\": \"albania\",\n"
    );
}

#[test]
fn sorted_map_mode_reports_file_line_numbers_for_duplicates() {
    let temp_dir = tempdir().expect("temporary directory");
    let countries = temp_dir.path().join("countries.txt");
    let codes = temp_dir.path().join("codes.json");
    fs::write(&countries, "Zambia\nChad\nAlbania\nCHAD\n").expect("countries written");
    let inputs = Inputs {
        countries: &countries,
        codes: &codes,
    };

    let error = reformat::render(inputs, &ReformatOptions::new(OutputMode::Map))
        .expect_err("duplicate rejected");
    match error {
        ToolError::DuplicateKey {
            key,
            first_line,
            line,
        } => {
            assert_eq!(key, "chad");
            assert_eq!(first_line, 2);
            assert_eq!(line, 4);
        }
        other => panic!("unexpected error: {other}"),
    }

    let options = ReformatOptions {
        duplicates: DuplicatePolicy::Overwrite,
        ..ReformatOptions::new(OutputMode::Map)
    };
    let text = reformat::render(inputs, &options).expect("rendered");
    assert_eq!(
        text,
        "\"albania\": \"Albania\",\n\"chad\": \"CHAD\",\n\"zambia\": \"Zambia\",\n"
    );
}

#[test]
fn unreadable_input_is_an_io_error() {
    let temp_dir = tempdir().expect("temporary directory");
    let codes = temp_dir.path().join("codes.json");
    let inputs = Inputs {
        countries: temp_dir.path(),
        codes: &codes,
    };

    let error =
        reformat::render(inputs, &ReformatOptions::new(OutputMode::List)).expect_err("directory");
    assert!(matches!(error, ToolError::Io(_)));
}
