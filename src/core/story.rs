/// Story bodies as a sequence of literal text and bound blanks.

use crate::core::answers::AnswerBook;
use crate::error::{MadLibError, Result};

/// The literal token marking a blank in a story body.
pub const BLANK_MARKER: &str = "_____";

/// A segment of a bound story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorySegment {
    /// Literal text, emitted as-is.
    Literal(String),
    /// A blank bound to the description whose answer fills it.
    Blank(String),
}

/// A story body with every blank bound to a description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Story {
    pub segments: Vec<StorySegment>,
}

impl Story {
    /// Bind blanks to descriptions.
    ///
    /// Blank markers are consumed left to right, each one taking the next
    /// description from `descriptions`. Markers left over once the
    /// descriptions run out stay in the text as literals; descriptions left
    /// over once the markers run out are not bound anywhere.
    pub fn bind(body: &str, descriptions: &[String]) -> Story {
        let mut segments = Vec::new();
        let mut literal_buf = String::new();
        let mut rest = body;
        let mut pending = descriptions.iter();

        while let Some(idx) = rest.find(BLANK_MARKER) {
            let Some(description) = pending.next() else {
                break;
            };
            literal_buf.push_str(&rest[..idx]);
            if !literal_buf.is_empty() {
                segments.push(StorySegment::Literal(std::mem::take(&mut literal_buf)));
            }
            segments.push(StorySegment::Blank(description.clone()));
            rest = &rest[idx + BLANK_MARKER.len()..];
        }

        literal_buf.push_str(rest);
        if !literal_buf.is_empty() {
            segments.push(StorySegment::Literal(literal_buf));
        }

        Story { segments }
    }

    /// Descriptions bound to blanks, in story order.
    pub fn blanks(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            StorySegment::Blank(description) => Some(description.as_str()),
            StorySegment::Literal(_) => None,
        })
    }

    /// Substitute every blank with its answer.
    pub fn render(&self, answers: &AnswerBook) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                StorySegment::Literal(text) => out.push_str(text),
                StorySegment::Blank(description) => match answers.get(description) {
                    Some(answer) => out.push_str(answer),
                    None => {
                        return Err(MadLibError::TemplateExecution {
                            description: description.clone(),
                        })
                    }
                },
            }
        }
        Ok(out)
    }
}

/// Count non-overlapping blank markers in `text`.
pub fn count_blanks(text: &str) -> usize {
    text.matches(BLANK_MARKER).count()
}
