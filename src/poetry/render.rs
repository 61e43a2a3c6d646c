//! Plain-text rendering of report sections.
//!
//! Each function returns the body of one section; [`render_report`] joins
//! all four under their titles. Empty results render as short fallback
//! sentences rather than blank sections.

use std::fmt::Write;

use crate::poetry::figures::FigureReport;
use crate::poetry::pos::PartsOfSpeech;
use crate::poetry::report::{AnalysisReport, Overview};
use crate::poetry::tone::ToneResult;

pub const OVERVIEW_TITLE: &str = "Poem Overview";
pub const PARTS_OF_SPEECH_TITLE: &str = "Parts of Speech";
pub const FIGURES_TITLE: &str = "Figures of Speech";
pub const TONE_TITLE: &str = "Sentimental Tone";

const FIGURES_NOTE: &str =
    "Note: Figure of speech detection is complex and these are basic heuristics.";

pub fn render_overview(overview: &Overview) -> String {
    let scheme = if overview.rhyme_scheme.is_empty() {
        "Not detected"
    } else {
        overview.rhyme_scheme.as_str()
    };

    let groups: Vec<String> = overview
        .rhyming_groups()
        .map(|g| format!("  - {}", g.words.join(" / ")))
        .collect();
    let groups = if groups.is_empty() {
        "  - None detected".to_string()
    } else {
        groups.join("\n")
    };

    format!(
        "Content Snippet:\n  \"{}\"\n\n\
         The poem has {} lines and {} words.\n\n\
         Rhyme Scheme: {}\n\n\
         Rhyming Word Groups:\n{}",
        overview.snippet, overview.line_count, overview.word_count, scheme, groups
    )
}

pub fn render_parts_of_speech(parts: &PartsOfSpeech) -> String {
    parts
        .iter()
        .map(|(name, words)| {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            format!("{name}:\n  - {}", words.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Bulleted list, or the fallback line when there is nothing to show.
fn bullets<I>(items: I, fallback: &str) -> String
where
    I: IntoIterator<Item = String>,
{
    let lines: Vec<String> = items.into_iter().map(|item| format!("  - {item}")).collect();
    if lines.is_empty() {
        format!("  - {fallback}")
    } else {
        lines.join("\n")
    }
}

pub fn render_figures(figures: &FigureReport) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "Simile (comparison using 'like' or 'as'):\n{}",
        bullets(
            figures.similes.iter().map(|s| format!("\"{s}\"")),
            "No clear similes detected."
        )
    );
    let _ = write!(
        out,
        "\n\nBasic Metaphor Detection (e.g., 'X is Y'):\n{}",
        bullets(
            figures.metaphors.iter().map(|s| format!("\"{s}\"")),
            "No simple metaphors detected."
        )
    );
    let _ = write!(
        out,
        "\n\nBasic Alliteration Detection (repeated initial consonant sounds):\n{}",
        bullets(
            figures.alliterations.iter().map(ToString::to_string),
            "No clear alliterations detected."
        )
    );
    let _ = write!(out, "\n\n{FIGURES_NOTE}");
    out
}

pub fn render_tone(tone: &ToneResult) -> String {
    format!(
        "The overall tone appears to be {}.\n\n{}\n\n\
         Technical Scores:\n  - Positive: {:.1}%\n  - Neutral: {:.1}%\n  - Negative: {:.1}%",
        tone.label,
        tone.mood(),
        tone.positive * 100.0,
        tone.neutral * 100.0,
        tone.negative * 100.0
    )
}

/// All four sections, each under an underlined title.
pub fn render_report(report: &AnalysisReport) -> String {
    [
        (OVERVIEW_TITLE, render_overview(&report.overview)),
        (
            PARTS_OF_SPEECH_TITLE,
            render_parts_of_speech(&report.parts_of_speech),
        ),
        (FIGURES_TITLE, render_figures(&report.figures)),
        (TONE_TITLE, render_tone(&report.tone)),
    ]
    .iter()
    .map(|(title, body)| section(title, body))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// A titled section body.
pub fn section(title: &str, body: &str) -> String {
    format!("{title}\n{}\n{body}", "=".repeat(title.chars().count()))
}
