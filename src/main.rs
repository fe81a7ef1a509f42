use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use sheetspell::cli::output::OutputFormat;
use sheetspell::correct::{CorrectionDecision, CorrectionPlan};
use sheetspell::{checker, cli, correct, dataset, dict, Config};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "sheetspell")]
#[command(version, about = "Spelling correction for spreadsheets", long_about = None)]
struct Cli {
    /// Spreadsheets to check (.xlsx or .csv)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Fix misspellings (auto-apply the best suggestion)
    #[arg(short, long)]
    fix: bool,

    /// Interactive mode for selecting corrections
    #[arg(short, long, requires = "fix")]
    interactive: bool,

    /// Where to write the corrected spreadsheet (defaults to
    /// corrected_<name> beside the input; single input only)
    #[arg(short, long, requires = "fix")]
    output: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long)]
    no_fail: bool,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long, default_value = "en_US")]
    language: String,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Custom vocabulary file (domain words that are never flagged)
    #[arg(long)]
    vocab: Option<PathBuf>,

    /// Pattern to ignore (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Download a dictionary
    Download {
        /// Language code (e.g., en_US, en_GB)
        language: String,
    },
    /// Update all dictionaries
    Update,
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

#[derive(Debug, Default)]
struct FileOutcome {
    misspelled: usize,
    fixed: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "sheetspell", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Load configuration
    let config = Config::load(
        cli.language.clone(),
        cli.vocab.clone(),
        cli.ignore_pattern.clone(),
    )?;

    // Validate input files
    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }
    if cli.output.is_some() && cli.files.len() != 1 {
        anyhow::bail!("--output requires exactly one input file.");
    }

    // One checker for the whole run; the dictionary loads exactly once
    let checker = checker::SpellChecker::new(&config)?;

    let mut total_errors = 0;
    let mut total_fixed = 0;

    for file_path in &cli.files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            continue;
        }

        let outcome = if cli.fix {
            fix_file(&checker, file_path, &config, &cli)?
        } else {
            check_file(&checker, file_path, &cli)?
        };

        total_errors += outcome.misspelled;
        total_fixed += outcome.fixed;
    }

    // Print summary
    if cli.fix {
        cli::output::print_fix_summary(total_fixed, &cli.files, !cli.no_color);
    } else {
        cli::output::print_check_summary(total_errors, &cli.files, !cli.no_color);
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail && !cli.fix {
        std::process::exit(1);
    }

    Ok(())
}

fn check_file(
    checker: &checker::SpellChecker,
    file_path: &Path,
    cli: &Cli,
) -> Result<FileOutcome> {
    let data = dataset::load(file_path)?;
    let report = checker.scan(&data);

    cli::output::print_report(file_path, &report, !cli.no_color, &cli.format);

    Ok(FileOutcome {
        misspelled: report.len(),
        fixed: 0,
    })
}

fn fix_file(
    checker: &checker::SpellChecker,
    file_path: &Path,
    config: &Config,
    cli: &Cli,
) -> Result<FileOutcome> {
    let data = dataset::load(file_path)?;
    let report = checker.scan(&data);

    if report.is_clean() {
        return Ok(FileOutcome::default());
    }

    let mut plan = CorrectionPlan::new(&report);
    let mut learned = Vec::new();

    if cli.interactive {
        let session = cli::interactive::run_session(&report, !cli.no_color)?;
        for (word, decision) in session.decisions {
            plan.decide(&word, decision, checker);
        }
        learned = session.learned;
    } else {
        for misspelling in &report.misspellings {
            plan.decide(&misspelling.word, CorrectionDecision::Auto, checker);
        }
    }

    for warning in plan.warnings() {
        eprintln!("Warning: {}", warning);
    }

    let mapping = plan
        .freeze()
        .context("Not every flagged word received a decision")?;

    let fixed = mapping.len();
    let corrected = correct::apply(&data, &mapping);

    let destination = output_path(file_path, cli);
    dataset::save(&corrected, &destination)?;
    println!("Corrected file written to {}", destination.display());

    // Learned words survive the session via the vocabulary file
    if !learned.is_empty() {
        if let Some(vocab_path) = &config.vocabulary {
            remember_words(vocab_path, &learned)?;
        }
    }

    Ok(FileOutcome {
        misspelled: report.len(),
        fixed,
    })
}

fn output_path(file_path: &Path, cli: &Cli) -> PathBuf {
    if let Some(output) = &cli.output {
        return output.clone();
    }

    let name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("output");
    file_path.with_file_name(format!("corrected_{}", name))
}

fn remember_words(vocab_path: &Path, words: &[String]) -> Result<()> {
    let mut content = if vocab_path.exists() {
        fs::read_to_string(vocab_path)?
    } else {
        String::new()
    };

    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for word in words {
        content.push_str(word);
        content.push('\n');
    }

    fs::write(vocab_path, content)
        .with_context(|| format!("Failed to update vocabulary: {}", vocab_path.display()))?;
    Ok(())
}

fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Dict { action } => match action {
            DictCommands::List => {
                dict::manager::list_dictionaries()?;
            }
            DictCommands::Download { language } => {
                dict::manager::download_dictionary(&language)?;
            }
            DictCommands::Update => {
                dict::manager::update_dictionaries()?;
            }
            DictCommands::Info { language } => {
                dict::manager::show_info(&language)?;
            }
        },
    }
    Ok(())
}
