//! Command line argument parsing for the LitLoom CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DetectionProfile;

/// LitLoom - rhyme, figures of speech and tone for poems
#[derive(Parser, Debug, Clone)]
#[command(name = "litloom")]
#[command(about = "Analyze poems: rhyme scheme, parts of speech, figures of speech and tone")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LitloomArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(long, value_name = "FILE", env = "LITLOOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Detection profile, overriding the configuration file
    #[arg(long)]
    pub profile: Option<ProfileArg>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LitloomArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a poem
    Analyze(AnalyzeArgs),

    /// Spell check a poem
    Spell(SpellArgs),

    /// Print a bundled example poem
    Example(ExampleArgs),
}

/// Arguments for analyzing a poem
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Poem file, or `-` for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Report section to print
    #[arg(short, long, default_value = "all")]
    pub section: Section,
}

/// Arguments for spell checking
#[derive(Parser, Debug, Clone)]
pub struct SpellArgs {
    /// Poem file, or `-` for standard input
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Dictionary file replacing the built-in word list
    #[arg(short, long, value_name = "DICTIONARY_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Read the dictionary as `word frequency` lines
    #[arg(long, requires = "dictionary")]
    pub frequency: bool,
}

/// Arguments for printing an example poem
#[derive(Parser, Debug, Clone)]
pub struct ExampleArgs {
    /// Poem index (wraps around)
    #[arg(short, long, default_value = "0")]
    pub index: usize,
}

/// Report sections
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Every section
    All,
    /// Snippet, counts and rhyme scheme
    Overview,
    /// Parts of speech
    Pos,
    /// Similes, metaphors and alliteration
    Figures,
    /// Sentiment tone
    Tone,
}

/// Detection profiles on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileArg {
    /// Interactive heuristics
    Interactive,
    /// Export heuristics
    Export,
}

impl From<ProfileArg> for DetectionProfile {
    fn from(profile: ProfileArg) -> Self {
        match profile {
            ProfileArg::Interactive => DetectionProfile::Interactive,
            ProfileArg::Export => DetectionProfile::Export,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
