/// Answer book: answers keyed by description, plus the interactive filler.
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::io::{BufRead, Write};

use crate::error::{MadLibError, Result};

/// Separator written before the first prompt and under the story title.
pub const SEPARATOR: &str = "----------";

/// Answers keyed by description.
///
/// Iteration follows insertion order, so prompts are asked in the same
/// order the descriptions were bound to blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerBook {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
}

impl AnswerBook {
    /// Build a book with an empty answer for every description.
    pub fn new(descriptions: &[String]) -> Result<AnswerBook> {
        let mut book = AnswerBook::default();
        for description in descriptions {
            if book.index.contains_key(description) {
                return Err(MadLibError::MalformedTemplate(format!(
                    "duplicate description '{}'",
                    description
                )));
            }
            book.index.insert(description.clone(), book.entries.len());
            book.entries.push((description.clone(), String::new()));
        }
        Ok(book)
    }

    pub fn get(&self, description: &str) -> Option<&str> {
        self.index
            .get(description)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Set the answer for a known description. Returns false if the
    /// description is not in the book.
    #[cfg(test)]
    pub fn set(&mut self, description: &str, answer: impl Into<String>) -> bool {
        match self.index.get(description) {
            Some(&i) => {
                self.entries[i].1 = answer.into();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    /// Ask for every answer in turn, one line of `input` per description.
    ///
    /// Answers are stored verbatim minus the line terminator. If `input`
    /// runs dry the remaining answers stay empty.
    pub fn fill<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "{}", SEPARATOR)?;

        let total = self.entries.len();
        for (asked, (description, answer)) in self.entries.iter_mut().enumerate() {
            write!(output, "{}", prompt_for(description))?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                warn!(
                    "input ended after {} of {} answers; leaving the rest empty",
                    asked, total
                );
                writeln!(output)?;
                break;
            }
            strip_line_ending(&mut line);
            debug!("answer for '{}': {:?}", description, line);
            *answer = line;
        }
        Ok(())
    }
}

/// Prompt text for a description: the label without its trailing token,
/// followed by `": "`. Single-token labels are shown whole.
pub fn prompt_for(description: &str) -> String {
    let label = description
        .trim_end()
        .rsplit_once(char::is_whitespace)
        .map(|(head, _)| head.trim_end())
        .unwrap_or(description.trim_end());
    format!("{}: ", label)
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
