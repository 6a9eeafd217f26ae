/// Command-line arguments for the `madlibs` binary.
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::session::RunOptions;

const AFTER_HELP: &str = "\
Examples:
  madlibs story1.mdlb
  madlibs /home/user/stories/astory.mdlb
  madlibs -verify-integrity story2.mdlb
  madlibs -stories-dir mystories astory.mdlb";

/// Fill in the blanks of a story template, then read the result.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "madlibs")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Story template file name (relative to the stories directory) or absolute path.
    /// A random story is chosen when omitted.
    pub template: Option<PathBuf>,

    /// Verify the integrity of the story template and exit
    #[arg(long)]
    pub verify_integrity: bool,

    /// Where to look for story templates [default: ./stories]
    #[arg(long, value_name = "PATH")]
    pub stories_dir: Option<PathBuf>,

    /// RON configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for shuffling and story selection
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Long flags also accepted with a single dash, e.g. `-verify-integrity`.
const LONG_FLAGS: [&str; 6] = [
    "verify-integrity",
    "stories-dir",
    "config",
    "seed",
    "help",
    "version",
];

/// Rewrite single-dash long flags to their double-dash form.
///
/// Rewriting stops at `--` so positional names starting with a dash survive.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            if s == "--" {
                return None;
            }
            let flag = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = flag.split('=').next().unwrap_or(flag);
            LONG_FLAGS
                .contains(&name)
                .then(|| OsString::from(format!("-{}", s)))
        });
        if arg == "--" {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}

impl Cli {
    /// Parse process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Build run options, layering flags over the config file over defaults.
    pub fn into_run_options(self) -> Result<RunOptions> {
        let base = match &self.config {
            Some(path) => Config::load_from_ron(path)?,
            None => Config::default(),
        };
        Ok(RunOptions {
            template: self.template,
            verify_integrity: self.verify_integrity,
            config: base.with_overrides(self.stories_dir, self.seed),
        })
    }
}
