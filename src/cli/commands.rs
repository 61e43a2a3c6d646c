//! Command implementations for the LitLoom CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::poetry::engine::PoemAnalyzer;
use crate::poetry::render;
use crate::poetry::samples;
use crate::spelling::{SpellChecker, SpellingDictionary};

/// Execute a CLI command.
pub fn execute_command(args: LitloomArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_poem(analyze_args, &args),
        Command::Spell(spell_args) => spell_check(spell_args, &args),
        Command::Example(example_args) => show_example(example_args, &args),
    }
}

/// Build the effective configuration from the config file and flags.
pub fn load_config(args: &LitloomArgs) -> Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(profile) = args.profile {
        config.profile = profile.into();
    }
    config.validate()?;
    Ok(config)
}

/// Read a poem from a file, or from standard input when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        log::info!("Reading poem from {}", path.display());
        Ok(fs::read_to_string(path)?)
    }
}

/// Analyze a poem and print the requested section(s).
fn analyze_poem(args: &AnalyzeArgs, cli_args: &LitloomArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let text = read_input(&args.input)?;
    let analyzer = PoemAnalyzer::new().with_config(config);

    match args.section {
        Section::All => {
            let report = analyzer.analyze(&text)?;
            output_result(&render::render_report(&report), &report, cli_args)
        }
        Section::Overview => {
            let overview = analyzer.overview(&text)?;
            let human = render::section(render::OVERVIEW_TITLE, &render::render_overview(&overview));
            output_result(&human, &overview, cli_args)
        }
        Section::Pos => {
            let parts = analyzer.parts_of_speech(&text)?;
            let human = render::section(
                render::PARTS_OF_SPEECH_TITLE,
                &render::render_parts_of_speech(&parts),
            );
            output_result(&human, &parts, cli_args)
        }
        Section::Figures => {
            let figures = analyzer.figures(&text)?;
            let human = render::section(render::FIGURES_TITLE, &render::render_figures(&figures));
            output_result(&human, &figures, cli_args)
        }
        Section::Tone => {
            let tone = analyzer.tone(&text)?;
            let human = render::section(render::TONE_TITLE, &render::render_tone(&tone));
            output_result(&human, &tone, cli_args)
        }
    }
}

/// Spell check a poem.
fn spell_check(args: &SpellArgs, cli_args: &LitloomArgs) -> Result<()> {
    let config = load_config(cli_args)?;
    let dictionary = match &args.dictionary {
        Some(path) if args.frequency => SpellingDictionary::load_from_frequency_file(path)?,
        Some(path) => SpellingDictionary::load_from_file(path)?,
        None => SpellingDictionary::english(),
    };
    if dictionary.is_empty() {
        log::warn!("Dictionary is empty; every word will be reported");
    }

    let text = read_input(&args.input)?;
    let checker = SpellChecker::new(dictionary, config.spelling);
    let report = SpellReport {
        misspellings: checker.check(&text),
    };
    output_result(&report.render(), &report, cli_args)
}

/// Print a bundled example poem.
fn show_example(args: &ExampleArgs, cli_args: &LitloomArgs) -> Result<()> {
    let index = args.index % samples::example_count();
    let example = ExamplePoem {
        index,
        poem: samples::example_poem(index).to_string(),
    };
    output_result(&example.poem, &example, cli_args)
}
