use crate::ScanReport;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMisspelling {
    word: String,
    suggestions: Vec<String>,
    cells: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    file: String,
    total_misspellings: usize,
    misspellings: Vec<JsonMisspelling>,
}

pub fn print_report(
    file_path: &Path,
    report: &ScanReport,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(file_path, report, colored_output),
        OutputFormat::Json => print_json_report(file_path, report),
    }
}

fn print_text_report(file_path: &Path, report: &ScanReport, colored_output: bool) {
    if report.is_clean() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for misspelling in &report.misspellings {
        let cells = if misspelling.occurrences == 1 {
            "1 cell".to_string()
        } else {
            format!("{} cells", misspelling.occurrences)
        };

        if colored_output {
            println!(
                "  {} {}",
                misspelling.word.red().bold(),
                format!("({})", cells).dimmed()
            );
        } else {
            println!("  {} ({})", misspelling.word, cells);
        }

        if !misspelling.suggestions.is_empty() {
            if colored_output {
                let suggestions = misspelling
                    .suggestions
                    .iter()
                    .take(5)
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            } else {
                let suggestions = misspelling
                    .suggestions
                    .iter()
                    .take(5)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("    → {}", suggestions);
            }
        }
    }
}

fn print_json_report(file_path: &Path, report: &ScanReport) {
    let misspellings: Vec<JsonMisspelling> = report
        .misspellings
        .iter()
        .map(|m| JsonMisspelling {
            word: m.word.clone(),
            suggestions: m.suggestions.clone(),
            cells: m.occurrences,
        })
        .collect();

    let output = JsonOutput {
        file: file_path.display().to_string(),
        total_misspellings: report.len(),
        misspellings,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "word" } else { "words" };
        if colored {
            println!(
                "{} {} misspelled {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✗ {} misspelled {} found in {} {}",
                total_errors,
                error_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}

pub fn print_fix_summary(total_fixed: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_fixed == 0 {
        if colored {
            println!("{}", "No corrections needed!".green().bold());
        } else {
            println!("No corrections needed!");
        }
    } else {
        let fix_word = if total_fixed == 1 {
            "correction"
        } else {
            "corrections"
        };
        if colored {
            println!(
                "{} {} {} applied to {} {}",
                "✓".green().bold(),
                total_fixed.to_string().green().bold(),
                fix_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        } else {
            println!(
                "✓ {} {} applied to {} {}",
                total_fixed,
                fix_word,
                files.len(),
                if files.len() == 1 { "file" } else { "files" }
            );
        }
    }
}
