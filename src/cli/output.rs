//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LitloomArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::Misspelling;

/// Result structure for spell checking.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellReport {
    pub misspellings: Vec<Misspelling>,
}

impl SpellReport {
    /// One line per occurrence, or a single all-clear line.
    pub fn render(&self) -> String {
        if self.misspellings.is_empty() {
            return "No misspelled words found.".to_string();
        }
        self.misspellings
            .iter()
            .map(|m| {
                let suggestions = if m.suggestions.is_empty() {
                    "no suggestions".to_string()
                } else {
                    m.suggestions.join(", ")
                };
                format!("'{}' at byte {}: {}", m.word, m.start, suggestions)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result structure for the example command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExamplePoem {
    pub index: usize,
    pub poem: String,
}

/// Format a result in the selected output format.
///
/// `human` is the pre-rendered text used for human-readable output.
pub fn format_result<T: Serialize>(human: &str, result: &T, args: &LitloomArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(human.to_string()),
        OutputFormat::Json => format_json(result, args),
    }
}

/// Print a result in the selected output format.
pub fn output_result<T: Serialize>(human: &str, result: &T, args: &LitloomArgs) -> Result<()> {
    let formatted = format_result(human, result, args)?;
    println!("{formatted}");
    Ok(())
}

fn format_json<T: Serialize>(result: &T, args: &LitloomArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn misspelling(word: &str, start: usize, suggestions: &[&str]) -> Misspelling {
        Misspelling {
            word: word.to_string(),
            start,
            end: start + word.len(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_spell_report_render() {
        let report = SpellReport {
            misspellings: vec![
                misspelling("clowd", 22, &["cloud", "crowd"]),
                misspelling("zzyzx", 40, &[]),
            ],
        };
        assert_eq!(
            report.render(),
            "'clowd' at byte 22: cloud, crowd\n'zzyzx' at byte 40: no suggestions"
        );
        let empty = SpellReport {
            misspellings: Vec::new(),
        };
        assert_eq!(empty.render(), "No misspelled words found.");
    }

    #[test]
    fn test_format_result() {
        let example = ExamplePoem {
            index: 1,
            poem: "A poem".to_string(),
        };

        let args = LitloomArgs::try_parse_from(["litloom", "example"]).unwrap();
        assert_eq!(format_result("A poem", &example, &args).unwrap(), "A poem");

        let args = LitloomArgs::try_parse_from(["litloom", "-f", "json", "example"]).unwrap();
        assert_eq!(
            format_result("A poem", &example, &args).unwrap(),
            r#"{"index":1,"poem":"A poem"}"#
        );
    }
}
