use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use leaderboard_tools::model::{DuplicatePolicy, JoinStrategy, LabelCase, ValueCase};
use leaderboard_tools::reformat::{
    self, DEFAULT_CODES_FILE, DEFAULT_COUNTRIES_FILE, Inputs, OutputFormat, OutputMode,
    ReformatOptions,
};
use leaderboard_tools::{Result, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose)?;
    match cli.command {
        Command::Reformat(args) => execute_reformat(args),
    }
}

fn execute_reformat(args: ReformatArgs) -> Result<()> {
    let options = args.options();
    let inputs = Inputs {
        countries: &args.countries,
        codes: &args.codes,
    };
    let text = reformat::render(inputs, &options)?;
    reformat::write_output(&text, args.output.as_deref())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Reformat the country list and country codes into paste-ready snippets."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one of the reformatted artefacts.
    Reformat(ReformatArgs),
}

#[derive(clap::Args)]
struct ReformatArgs {
    /// Artefact to produce.
    #[arg(long, value_enum)]
    mode: ModeKind,

    /// Newline-delimited country names.
    #[arg(long, default_value = DEFAULT_COUNTRIES_FILE)]
    countries: PathBuf,

    /// Line-delimited pseudo-JSON code records.
    #[arg(long, default_value = DEFAULT_CODES_FILE)]
    codes: PathBuf,

    /// Write to this file instead of standard output.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output layout.
    #[arg(long, value_enum, default_value_t = FormatKind::Text)]
    format: FormatKind,

    /// Whether country map values are lower-cased like their keys.
    #[arg(long, value_enum, default_value_t = CaseKind::Preserve)]
    value_case: CaseKind,

    /// Case of code labels; defaults to lower for codes and preserve for tables.
    #[arg(long, value_enum)]
    label_case: Option<CaseKind>,

    /// How repeated keys are handled.
    #[arg(long, value_enum, default_value_t = DuplicateKind::Reject)]
    duplicates: DuplicateKind,

    /// How table rows pair codes with countries.
    #[arg(long, value_enum, default_value_t = JoinKind::Positional)]
    join: JoinKind,

    /// Keep file order for list and map output.
    #[arg(long)]
    unsorted: bool,

    /// Prefix table output with a markdown header row.
    #[arg(long)]
    header: bool,
}

impl ReformatArgs {
    fn options(&self) -> ReformatOptions {
        ReformatOptions {
            format: self.format.into(),
            value_case: self.value_case.into(),
            label_case: self.label_case.map(LabelCase::from),
            duplicates: self.duplicates.into(),
            join: self.join.into(),
            sort: !self.unsorted,
            header: self.header,
            ..ReformatOptions::new(self.mode.into())
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeKind {
    List,
    Map,
    Codes,
    Table,
}

impl From<ModeKind> for OutputMode {
    fn from(kind: ModeKind) -> Self {
        match kind {
            ModeKind::List => OutputMode::List,
            ModeKind::Map => OutputMode::Map,
            ModeKind::Codes => OutputMode::Codes,
            ModeKind::Table => OutputMode::Table,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatKind {
    Text,
    Json,
}

impl From<FormatKind> for OutputFormat {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Text => OutputFormat::Text,
            FormatKind::Json => OutputFormat::Json,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CaseKind {
    Preserve,
    Lower,
}

impl From<CaseKind> for ValueCase {
    fn from(kind: CaseKind) -> Self {
        match kind {
            CaseKind::Preserve => ValueCase::Preserve,
            CaseKind::Lower => ValueCase::Lower,
        }
    }
}

impl From<CaseKind> for LabelCase {
    fn from(kind: CaseKind) -> Self {
        match kind {
            CaseKind::Preserve => LabelCase::Preserve,
            CaseKind::Lower => LabelCase::Lower,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DuplicateKind {
    Reject,
    Overwrite,
}

impl From<DuplicateKind> for DuplicatePolicy {
    fn from(kind: DuplicateKind) -> Self {
        match kind {
            DuplicateKind::Reject => DuplicatePolicy::Reject,
            DuplicateKind::Overwrite => DuplicatePolicy::Overwrite,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum JoinKind {
    Positional,
    Key,
    Label,
}

impl From<JoinKind> for JoinStrategy {
    fn from(kind: JoinKind) -> Self {
        match kind {
            JoinKind::Positional => JoinStrategy::Positional,
            JoinKind::Key => JoinStrategy::Key,
            JoinKind::Label => JoinStrategy::Label,
        }
    }
}
