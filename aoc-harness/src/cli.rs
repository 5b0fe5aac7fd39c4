//! CLI argument parsing using clap

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Year selected when `--year` is omitted
pub const DEFAULT_YEAR: u16 = 2025;

const EXAMPLES: &str = "\
Examples:
  aoc                           Run all days of 2025
  aoc -y 2025 -d 1              Run day 1 of 2025
  aoc --year 2024 --day 5 -p 2  Run 2024 day 5 part 2
  aoc -d 10                     Run day 10 of 2025 (default year)";

/// Advent of Code solution runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Run and time Advent of Code solutions",
    version,
    args_override_self = true,
    after_help = EXAMPLES
)]
pub struct Args {
    /// Year to run
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Directory holding cached puzzle inputs
    #[arg(long, default_value = "inputs")]
    pub cache_dir: PathBuf,

    /// Secrets file holding AOC_SESSION=<cookie>
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

/// Which (year, day, part) combinations to run; `None` matches everything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub year: u16,
    pub day: Option<u8>,
    pub part: Option<u8>,
}

impl Selection {
    /// Whether an entry for `year`/`day` passes the year and day filters
    pub fn matches(&self, year: u16, day: u8) -> bool {
        self.year == year && self.day.is_none_or(|d| d == day)
    }

    /// Whether `part` passes the part filter
    pub fn includes_part(&self, part: u8) -> bool {
        self.part.is_none_or(|p| p == part)
    }

    /// One-line description of what this selection runs
    pub fn describe(&self) -> String {
        match (self.day, self.part) {
            (Some(day), Some(part)) => {
                format!("Running Year {} Day {} Part {}", self.year, day, part)
            }
            (Some(day), None) => format!("Running Year {} Day {}", self.year, day),
            (None, _) => format!("Running all available solutions for year {}", self.year),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            day: None,
            part: None,
        }
    }
}

impl Args {
    /// The year/day/part filter these arguments describe
    pub fn selection(&self) -> Selection {
        Selection {
            year: self.year,
            day: self.day,
            part: self.part,
        }
    }
}

/// Outcome of parsing the command line
#[derive(Debug)]
pub enum Invocation {
    /// Arguments parsed; run the selected solutions
    Run(Args),
    /// `--help` or `--version` was requested; print and exit successfully
    Help(String),
    /// Unknown flag, missing or malformed value; print and exit with failure
    Invalid { error: String, help: String },
}

impl Invocation {
    /// Parse arguments left to right; the first element is the program name
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(args) {
            Ok(args) => Invocation::Run(args),
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    Invocation::Help(e.render().to_string())
                }
                _ => Invocation::Invalid {
                    error: e.render().to_string(),
                    help: Args::command().render_help().to_string(),
                },
            },
        }
    }

    /// Process exit code for the non-running outcomes
    pub fn exit_code(&self) -> i32 {
        match self {
            Invocation::Run(_) | Invocation::Help(_) => 0,
            Invocation::Invalid { .. } => 1,
        }
    }
}
