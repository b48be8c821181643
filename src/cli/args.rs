use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::DateOrder;
use crate::features::nlp::ParsingMode;

#[derive(Parser, Debug)]
#[command(name = "quickadd")]
#[command(about = "Turn a single line of text into a structured task")]
#[command(long_about = "quickadd - natural language task entry

Parses one line such as \"team meeting tomorrow 3pm +work !5 *urgent\" into
a title, due date, project, priority and labels.

QUICK START:
  quickadd parse buy milk tomorrow *errands       Show the parsed task
  quickadd preview review PR friday #dev p2       Launcher-style preview
  quickadd config set-mode todoist                Switch token dialect

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quickadd <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Falls back to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file [default: ~/.quickadd/config.yaml]
    #[arg(long, global = true, env = "QUICKADD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log parsing decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a line of text into a task
    ///
    /// # Examples
    ///
    ///   quickadd parse "team meeting tomorrow 3pm +work !5 *urgent"
    ///   quickadd parse --mode todoist "review PR friday #dev @code p2"
    ///   quickadd parse --date-order day-first "vacation 4/7/2026"
    ///
    /// # Supported Patterns
    ///
    ///   Dates:      today, tomorrow, next monday, friday, this weekend,
    ///               next week, next month, end of month, in 3 days,
    ///               Feb 3rd, 3 February, 12/25, 12/25/2026, 17th
    ///   Times:      3pm, 4:45pm, 9 a.m., 14:30, 17h30, morning, evening
    ///   Vikunja:    *label  +project  !1-!5
    ///   Todoist:    @label  #project  p1-p5
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Show the launcher preview for a line of text
    ///
    /// Prints the result title and the one-line subtitle. With no text,
    /// prints the syntax help for the current dialect.
    Preview(ParseArgs),

    /// Show or edit the configuration
    Config(ConfigArgs),

    /// Generate a shell completion script
    ///
    /// # Examples
    ///
    ///   quickadd completions zsh > ~/.zsh/completions/_quickadd
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Task text; multiple words are joined with spaces
    pub text: Vec<String>,

    /// Token dialect [default: from config]
    #[arg(short, long, value_enum)]
    pub mode: Option<ParsingMode>,

    /// Numeric date convention [default: from config]
    #[arg(long, value_enum)]
    pub date_order: Option<DateOrder>,

    /// Resolve dates against this local time instead of the clock
    ///
    /// Accepts YYYY-MM-DDTHH:MM[:SS].
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
}

impl ParseArgs {
    /// The text arguments as a single line.
    #[must_use]
    pub fn input(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration (token masked)
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Set the token dialect
    SetMode {
        #[arg(value_enum)]
        mode: ParsingMode,
    },
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM[:SS], got '{value}'"))
}
