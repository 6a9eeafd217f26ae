/// One Mad Libs run: select, verify, parse, fill and print a story.
///
/// Generic over its input and output streams so the whole flow can run
/// against in-memory buffers.
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::madlib::MadLib;
use crate::core::selection::{choose_random_story, resolve_template_path};
use crate::core::validator::{validate_file, ValidationReport};
use crate::error::{MadLibError, Result};

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Template name or path. Chosen at random when absent.
    pub template: Option<PathBuf>,
    /// Check the template and stop without prompting.
    pub verify_integrity: bool,
    pub config: Config,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Verified {
        path: PathBuf,
        report: ValidationReport,
    },
    Rendered {
        path: PathBuf,
        text: String,
    },
}

/// Seeded generator when a seed is configured, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    rng: &mut StdRng,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    if options.verify_integrity && options.template.is_none() {
        return Err(MadLibError::Usage(
            "a story template path must be given with --verify-integrity".to_string(),
        ));
    }

    let config = &options.config;
    let path = match &options.template {
        Some(name) => resolve_template_path(&config.stories_dir, name),
        None => choose_random_story(&config.stories_dir, &config.extension, rng)?,
    };

    let report = validate_file(&path)?;
    if !report.is_valid {
        warn!("Template at '{}' is invalid", path.display());
        report.into_result()?;
    }

    if options.verify_integrity {
        info!("Template at '{}' is valid", path.display());
        return Ok(Outcome::Verified { path, report });
    }

    let mut madlib = MadLib::load(&path, rng)?;
    info!("Playing '{}'", madlib.title);
    madlib.fill(input, output)?;

    let text = madlib.render()?;
    writeln!(output)?;
    write!(output, "{}", text)?;
    output.flush()?;

    Ok(Outcome::Rendered { path, text })
}
