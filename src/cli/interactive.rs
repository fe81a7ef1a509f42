use crate::correct::CorrectionDecision;
use crate::ScanReport;
use anyhow::Result;
use console::style;
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Input, Select};

/// Everything one interactive pass over a scan report produced.
pub struct SessionOutcome {
    pub decisions: Vec<(String, CorrectionDecision)>,
    /// Words the user asked to remember; the caller appends them to the
    /// vocabulary file.
    pub learned: Vec<String>,
}

enum Choice {
    Suggestion(usize),
    Auto,
    Keep,
    Custom,
    Learn,
}

/// Walk the user through every flagged word and collect a decision for
/// each. Every word gets a decision, so the resulting plan always freezes.
pub fn run_session(report: &ScanReport, colored: bool) -> Result<SessionOutcome> {
    let colorful = ColorfulTheme::default();
    let simple = SimpleTheme;
    let theme: &dyn Theme = if colored { &colorful } else { &simple };

    let mut decisions = Vec::with_capacity(report.len());
    let mut learned = Vec::new();

    for (index, misspelling) in report.misspellings.iter().enumerate() {
        let cells = if misspelling.occurrences == 1 {
            "1 cell".to_string()
        } else {
            format!("{} cells", misspelling.occurrences)
        };

        if colored {
            println!(
                "\n[{}/{}] {} {}",
                index + 1,
                report.len(),
                style(&misspelling.word).red().bold(),
                style(format!("(in {})", cells)).dim()
            );
        } else {
            println!(
                "\n[{}/{}] {} (in {})",
                index + 1,
                report.len(),
                misspelling.word,
                cells
            );
        }

        let mut labels = Vec::new();
        let mut choices = Vec::new();

        for (i, suggestion) in misspelling.suggestions.iter().enumerate() {
            labels.push(format!("Replace with '{}'", suggestion));
            choices.push(Choice::Suggestion(i));
        }
        if !misspelling.suggestions.is_empty() {
            labels.push("Auto-correct (best suggestion)".to_string());
            choices.push(Choice::Auto);
        }
        labels.push("Keep as is".to_string());
        choices.push(Choice::Keep);
        labels.push("Keep and add to vocabulary".to_string());
        choices.push(Choice::Learn);
        labels.push("Type a replacement".to_string());
        choices.push(Choice::Custom);

        let selected = Select::with_theme(theme)
            .with_prompt("Correction")
            .items(&labels)
            .default(0)
            .interact()?;

        let decision = match choices[selected] {
            Choice::Suggestion(i) => {
                CorrectionDecision::Explicit(misspelling.suggestions[i].clone())
            }
            Choice::Auto => CorrectionDecision::Auto,
            Choice::Keep => CorrectionDecision::Skip,
            Choice::Learn => {
                learned.push(misspelling.word.clone());
                CorrectionDecision::Skip
            }
            Choice::Custom => {
                let replacement: String = Input::with_theme(theme)
                    .with_prompt("Replacement")
                    .allow_empty(true)
                    .interact_text()?;
                // A blank entry resolves to Skip downstream
                CorrectionDecision::Explicit(replacement)
            }
        };

        decisions.push((misspelling.word.clone(), decision));
    }

    Ok(SessionOutcome { decisions, learned })
}
