/// Story Linter: checks every story template under a directory.
///
/// Usage: story_linter <stories_dir> [--extension <ext>]
use clap::Parser;
use madlibs::config::DEFAULT_EXTENSION;
use madlibs::core::validator::{lint_dir, LintOutcome};
use madlibs::exit_codes;
use std::path::PathBuf;
use std::process::ExitCode;

/// Check blank/description counts of every story template in a directory tree.
#[derive(Parser, Debug)]
#[command(name = "story_linter", version, about)]
struct Args {
    /// Directory to scan recursively
    stories_dir: PathBuf,

    /// Template file extension, without the dot
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if !args.stories_dir.is_dir() {
        eprintln!("ERROR: '{}' is not a directory", args.stories_dir.display());
        return ExitCode::from(exit_codes::USAGE_ERROR as u8);
    }

    let entries = match lint_dir(&args.stories_dir, &args.extension) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    println!("Checked {} paths\n", entries.len());

    for entry in &entries {
        match &entry.outcome {
            LintOutcome::Valid(report) => {
                println!("OK:    {} ({} blanks)", entry.path.display(), report.blank_count);
            }
            LintOutcome::Invalid(report) => {
                println!(
                    "ERROR: {} has {} blanks but {} descriptions",
                    entry.path.display(),
                    report.blank_count,
                    report.description_count
                );
            }
            LintOutcome::Failed(reason) => {
                println!("ERROR: {}: {}", entry.path.display(), reason);
            }
        }
    }

    let errors = entries.iter().filter(|e| e.is_error()).count();
    println!("\nSummary: {} paths, {} errors", entries.len(), errors);

    if errors == 0 {
        ExitCode::from(exit_codes::SUCCESS as u8)
    } else {
        ExitCode::from(exit_codes::TEMPLATE_FAILURE as u8)
    }
}
