//! Mad Libs: fill-in-the-blank stories from plain-text templates.
//!
//! A template holds a title, a story body with `_____` blanks and one
//! description per blank. Descriptions are shuffled, bound to blanks, asked
//! for one by one, and the answers are substituted back into the story.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod session;
