/// A single Mad Lib: title, bound story and its answers.
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::core::answers::{AnswerBook, SEPARATOR};
use crate::core::parser::{parse_template, ParsedTemplate};
use crate::core::reader::read_template;
use crate::core::story::Story;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct MadLib {
    pub title: String,
    pub story: Story,
    pub answers: AnswerBook,
}

impl MadLib {
    /// Parse a Mad Lib from raw template text.
    pub fn parse(raw: &str, rng: &mut StdRng) -> Result<MadLib> {
        let ParsedTemplate {
            title,
            story,
            answers,
        } = parse_template(raw, rng)?;
        Ok(MadLib {
            title,
            story,
            answers,
        })
    }

    /// Read and parse the template at `path`.
    pub fn load(path: &Path, rng: &mut StdRng) -> Result<MadLib> {
        let raw = read_template(path)?;
        Self::parse(&raw, rng)
    }

    /// Prompt for every blank. See [`AnswerBook::fill`].
    pub fn fill<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        self.answers.fill(input, output)
    }

    /// Render the finished story: title, separator, story, trailing newline.
    pub fn render(&self) -> Result<String> {
        let body = self.story.render(&self.answers)?;
        Ok(format!("{}\n{}\n{}\n", self.title, SEPARATOR, body))
    }
}
