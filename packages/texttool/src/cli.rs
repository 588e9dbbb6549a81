//! Command-line interface for the text tool.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::{validate_keyword, validate_split_count, DEFAULT_CHAPTER_KEYWORDS};
use crate::error::{Result, TextToolError};
use crate::replace::{plain_text, ReplaceEngine, Rule};
use crate::settings::Settings;
use crate::split::{BalancedSplitStrategy, ChapterSplitter, GreedySplitStrategy};
use crate::words::count_words;

/// Text tool - Find/replace with highlighting and chapter splitting.
#[derive(Parser)]
#[command(name = "texttool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count the words in a text.
    Count {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Apply find/replace rules and print highlighted paragraphs.
    Replace {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Settings file (JSON, or YAML with a .yaml/.yml extension)
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Mode to use from the settings (default: the active mode)
        #[arg(short, long)]
        mode: Option<String>,

        /// Extra rule applied after the mode's rules
        #[arg(short, long = "rule", value_name = "FIND=REPLACE", value_parser = parse_rule_arg)]
        rules: Vec<(String, String)>,

        /// Match case for the --rule rules
        #[arg(long)]
        match_case: bool,

        /// Match whole words only for the --rule rules
        #[arg(long)]
        whole_word: bool,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Split a chapter into parts of similar word count.
    Split {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Number of parts
        #[arg(short, long)]
        parts: usize,

        /// Settings file providing the chapter keywords
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Chapter keyword; overrides the settings when given
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Paragraph assignment strategy
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        strategy: Strategy,

        /// Write part_N.txt files into this directory instead of printing
        #[arg(short = 'd', long)]
        output_dir: Option<PathBuf>,
    },
}

/// Paragraph assignment strategy for `split`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Greedy left-to-right assignment
    Greedy,
    /// Partition minimising the largest deviation from the target
    Balanced,
}

/// Parse a `FIND=REPLACE` argument.
fn parse_rule_arg(arg: &str) -> std::result::Result<(String, String), String> {
    arg.split_once('=')
        .map(|(find, replace)| (find.to_string(), replace.to_string()))
        .ok_or_else(|| format!("expected FIND=REPLACE, got '{arg}'"))
}

/// Run the CLI.
pub fn run() -> Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Count { input } => count_command(input.as_deref()),
        Commands::Replace {
            input,
            settings,
            mode,
            rules,
            match_case,
            whole_word,
            output,
        } => {
            let extra_rules = rules
                .into_iter()
                .map(|(find, replace)| {
                    Rule::new(find, replace)
                        .with_match_case(match_case)
                        .with_whole_word(whole_word)
                })
                .collect();
            replace_command(
                input.as_deref(),
                settings.as_deref(),
                mode.as_deref(),
                extra_rules,
                output.as_deref(),
            )
        }
        Commands::Split {
            input,
            parts,
            settings,
            keywords,
            strategy,
            output_dir,
        } => split_command(
            input.as_deref(),
            parts,
            settings.as_deref(),
            keywords,
            strategy,
            output_dir.as_deref(),
        ),
    }
}

/// Read the input file, or stdin when no file is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Fail unless `dir` is an existing directory.
fn ensure_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(TextToolError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", dir.display()),
        )));
    }
    if !dir.is_dir() {
        return Err(TextToolError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", dir.display()),
        )));
    }
    Ok(())
}

/// Execute the count command.
fn count_command(input: Option<&Path>) -> Result<()> {
    let text = read_input(input)?;
    println!("{}", count_words(&text));
    Ok(())
}

/// Execute the replace command.
fn replace_command(
    input: Option<&Path>,
    settings_path: Option<&Path>,
    mode_name: Option<&str>,
    extra_rules: Vec<Rule>,
    output: Option<&Path>,
) -> Result<()> {
    let settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mode = settings.mode(mode_name)?;

    let mut rules = mode.pairs.clone();
    rules.extend(extra_rules);

    let text = read_input(input)?;
    let outcome = ReplaceEngine::new().apply(&text, &rules);

    match output {
        Some(path) => fs::write(path, &outcome.text)?,
        None => println!("{}", outcome.text),
    }

    eprintln!(
        "{} {} matches using {} rules",
        style("Replaced").bold().for_stderr(),
        style(outcome.replacements).cyan().for_stderr(),
        rules.iter().filter(|rule| !rule.is_noop()).count()
    );
    eprintln!(
        "  Words: {} -> {}",
        count_words(&text),
        count_words(&plain_text(&outcome.text))
    );
    for warning in &outcome.warnings {
        eprintln!("  {} {warning}", style("Warning:").yellow().bold().for_stderr());
    }
    if let Some(path) = output {
        eprintln!(
            "{} {}",
            style("Saved to:").green().bold().for_stderr(),
            path.display()
        );
    }

    Ok(())
}

/// Execute the split command.
fn split_command(
    input: Option<&Path>,
    parts: usize,
    settings_path: Option<&Path>,
    keywords: Vec<String>,
    strategy: Strategy,
    output_dir: Option<&Path>,
) -> Result<()> {
    validate_split_count(parts)?;
    for keyword in &keywords {
        validate_keyword(keyword)?;
    }
    if let Some(dir) = output_dir {
        ensure_directory(dir)?;
    }

    let keywords = if !keywords.is_empty() {
        keywords
    } else if let Some(path) = settings_path {
        Settings::load(path)?.chapter_keywords
    } else {
        DEFAULT_CHAPTER_KEYWORDS.iter().map(|k| (*k).to_string()).collect()
    };

    let text = read_input(input)?;
    let results = match strategy {
        Strategy::Greedy => {
            ChapterSplitter::new(GreedySplitStrategy).split(&text, parts, &keywords)
        }
        Strategy::Balanced => {
            ChapterSplitter::new(BalancedSplitStrategy).split(&text, parts, &keywords)
        }
    };

    if results.is_empty() {
        eprintln!("{}", style("Nothing to split").yellow().for_stderr());
        return Ok(());
    }

    for (i, part) in results.iter().enumerate() {
        let index = i + 1;
        match output_dir {
            Some(dir) => {
                let path = dir.join(format!("part_{index}.txt"));
                fs::write(&path, part)?;
                eprintln!(
                    "{} {} ({} words)",
                    style("Saved to:").green().bold().for_stderr(),
                    path.display(),
                    count_words(part)
                );
            }
            None => {
                println!(
                    "{}",
                    style(format!(
                        "=== Part {index}/{parts} ({} words) ===",
                        count_words(part)
                    ))
                    .bold()
                );
                println!("{part}");
                println!();
            }
        }
    }

    Ok(())
}
