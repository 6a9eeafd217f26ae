/// Template parsing: sections, descriptions, shuffling and blank binding.
use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::core::answers::AnswerBook;
use crate::core::story::Story;
use crate::error::{MadLibError, Result};

/// Literal token separating title, story and descriptions.
pub const SECTION_DELIMITER: &str = "-----";

/// The three raw sections of a template, untrimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub title: &'a str,
    pub story: &'a str,
    pub descriptions: &'a str,
}

/// Split raw template text on the section delimiter.
///
/// Anything after a third delimiter is ignored.
pub fn split_sections(raw: &str) -> Result<Sections<'_>> {
    let parts: Vec<&str> = raw.split(SECTION_DELIMITER).collect();
    if parts.len() < 3 {
        return Err(MadLibError::MalformedTemplate(format!(
            "expected 3 sections separated by '{}', found {}",
            SECTION_DELIMITER,
            parts.len()
        )));
    }
    if parts.len() > 3 {
        warn!(
            "template has {} sections; ignoring everything after the third",
            parts.len()
        );
    }
    Ok(Sections {
        title: parts[0],
        story: parts[1],
        descriptions: parts[2],
    })
}

/// Split a description block into its non-empty, trimmed lines.
pub fn parse_descriptions(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A parsed template ready to be filled.
#[derive(Debug, Clone)]
pub struct ParsedTemplate {
    pub title: String,
    pub story: Story,
    pub answers: AnswerBook,
}

/// Parse raw template text.
///
/// Descriptions are shuffled with `rng` before binding, so both the prompt
/// order and which description fills which blank depend on the seed.
pub fn parse_template(raw: &str, rng: &mut StdRng) -> Result<ParsedTemplate> {
    let sections = split_sections(raw)?;
    let mut descriptions = parse_descriptions(sections.descriptions);
    descriptions.shuffle(rng);

    let answers = AnswerBook::new(&descriptions)?;
    let story = Story::bind(sections.story.trim(), &descriptions);

    Ok(ParsedTemplate {
        title: sections.title.trim().to_string(),
        story,
        answers,
    })
}
