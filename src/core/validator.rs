/// Template integrity check: blank markers versus declared descriptions.
use log::info;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

use crate::core::parser::{parse_descriptions, split_sections};
use crate::core::reader::read_template;
use crate::core::story::count_blanks;
use crate::error::{MadLibError, Result};

/// Outcome of an integrity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub blank_count: usize,
    pub description_count: usize,
}

impl ValidationReport {
    /// Convert an invalid report into a `ValidationMismatch` error.
    pub fn into_result(self) -> Result<ValidationReport> {
        if self.is_valid {
            Ok(self)
        } else {
            Err(MadLibError::ValidationMismatch {
                blanks: self.blank_count,
                descriptions: self.description_count,
            })
        }
    }
}

/// Count blanks and descriptions in raw template text.
///
/// Duplicate descriptions are `MalformedTemplate`, as they are for the parser.
pub fn validate_template(raw: &str) -> Result<ValidationReport> {
    let sections = split_sections(raw)?;
    let blank_count = count_blanks(sections.story);
    let descriptions = parse_descriptions(sections.descriptions);
    let mut seen = FxHashSet::default();
    for description in &descriptions {
        if !seen.insert(description.as_str()) {
            return Err(MadLibError::MalformedTemplate(format!(
                "duplicate description '{}'",
                description
            )));
        }
    }
    let description_count = descriptions.len();
    Ok(ValidationReport {
        is_valid: blank_count == description_count,
        blank_count,
        description_count,
    })
}

/// Read and check the template at `path`. Reports, never repairs.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let raw = read_template(path)?;
    let report = validate_template(&raw)?;
    info!(
        "Template at '{}' has {} blanks and {} descriptions",
        path.display(),
        report.blank_count,
        report.description_count
    );
    Ok(report)
}

/// Result of checking one file during a directory lint.
#[derive(Debug)]
pub enum LintOutcome {
    Valid(ValidationReport),
    Invalid(ValidationReport),
    /// The file or a directory on the way to it could not be checked.
    Failed(String),
}

#[derive(Debug)]
pub struct LintEntry {
    pub path: PathBuf,
    pub outcome: LintOutcome,
}

impl LintEntry {
    pub fn is_error(&self) -> bool {
        !matches!(self.outcome, LintOutcome::Valid(_))
    }
}

/// Check every `*.<extension>` file under `dir`, recursively, sorted by path.
///
/// Directories that cannot be walked show up as `Failed` entries. A tree with
/// nothing to check at all is `NoStoriesFound`.
pub fn lint_dir(dir: &Path, extension: &str) -> Result<Vec<LintEntry>> {
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy()))
        .join("**")
        .join(format!("*.{}", glob::Pattern::escape(extension)));
    let walk = glob::glob(&pattern.to_string_lossy())
        .map_err(|e| MadLibError::Usage(format!("bad story pattern: {}", e)))?;

    let mut entries = Vec::new();
    for item in walk {
        let entry = match item {
            Ok(path) if path.is_file() => {
                let outcome = match validate_file(&path) {
                    Ok(report) if report.is_valid => LintOutcome::Valid(report),
                    Ok(report) => LintOutcome::Invalid(report),
                    Err(e) => LintOutcome::Failed(e.to_string()),
                };
                LintEntry { path, outcome }
            }
            Ok(_) => continue,
            Err(e) => LintEntry {
                path: e.path().to_path_buf(),
                outcome: LintOutcome::Failed(e.error().to_string()),
            },
        };
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(MadLibError::NoStoriesFound {
            dir: dir.to_path_buf(),
        });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_counts_are_valid() {
        let report = validate_template("Title\n-----\nA _____ walked.\n-----\na noun 1\n").unwrap();
        assert_eq!(
            report,
            ValidationReport {
                is_valid: true,
                blank_count: 1,
                description_count: 1,
            }
        );
    }

    #[test]
    fn more_descriptions_than_blanks() {
        let report =
            validate_template("T\n-----\n_____ and _____\n-----\na 1\nb 2\nc 3\n").unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.blank_count, 2);
        assert_eq!(report.description_count, 3);
    }

    #[test]
    fn empty_description_block_counts_zero() {
        let report = validate_template("T\n-----\nNo blanks here.\n-----\n\n").unwrap();
        assert!(report.is_valid);
        assert_eq!(report.description_count, 0);
    }

    #[test]
    fn malformed_template_is_error() {
        assert!(matches!(
            validate_template("just a title"),
            Err(MadLibError::MalformedTemplate(_))
        ));
    }

    #[test]
    fn into_result_reports_mismatch() {
        let report = ValidationReport {
            is_valid: false,
            blank_count: 2,
            description_count: 3,
        };
        match report.into_result() {
            Err(MadLibError::ValidationMismatch {
                blanks,
                descriptions,
            }) => {
                assert_eq!(blanks, 2);
                assert_eq!(descriptions, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn validate_file_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.mdlb");
        std::fs::write(&path, "T\n-----\n_____ _____\n-----\na 1\nb 2\nc 3\n").unwrap();
        let first = validate_file(&path).unwrap();
        let second = validate_file(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn duplicate_descriptions_are_malformed() {
        match validate_template("T\n-----\n_____ and _____\n-----\na noun 1\na noun 1\n") {
            Err(MadLibError::MalformedTemplate(msg)) => assert!(msg.contains("a noun 1")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn lint_dir_reports_each_template() {
        let dir = tempfile::tempdir().unwrap();
        let ok = write(dir.path(), "a_ok.mdlb", "T\n-----\n_____\n-----\nn 1\n");
        let bad = write(dir.path(), "b_bad.mdlb", "T\n-----\n_____\n-----\nn 1\nv 2\n");
        let dup = write(
            dir.path(),
            "nested/c_dup.mdlb",
            "T\n-----\n_____ _____\n-----\nn 1\nn 1\n",
        );
        write(dir.path(), "notes.txt", "not a story");

        let entries = lint_dir(dir.path(), "mdlb").unwrap();
        let paths: Vec<&Path> = entries.iter().map(|e| e.path.as_path()).collect();
        assert_eq!(paths, vec![ok.as_path(), bad.as_path(), dup.as_path()]);

        assert!(matches!(entries[0].outcome, LintOutcome::Valid(_)));
        assert!(matches!(
            entries[1].outcome,
            LintOutcome::Invalid(ValidationReport {
                blank_count: 1,
                description_count: 2,
                ..
            })
        ));
        assert!(matches!(entries[2].outcome, LintOutcome::Failed(_)));
        assert_eq!(entries.iter().filter(|e| e.is_error()).count(), 2);
    }

    #[test]
    fn lint_dir_with_nothing_to_check_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "readme.txt", "nothing here");
        assert!(matches!(
            lint_dir(dir.path(), "mdlb"),
            Err(MadLibError::NoStoriesFound { .. })
        ));
    }
}
