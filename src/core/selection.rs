/// Story selection: resolving template paths and picking one at random.
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};

use crate::error::{MadLibError, Result};

/// Resolve a user-supplied template name against the stories directory.
/// Absolute paths are used as-is.
pub fn resolve_template_path(stories_dir: &Path, name: &Path) -> PathBuf {
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        stories_dir.join(name)
    }
}

/// List story files in `dir` with the given extension, sorted by path.
pub fn list_stories(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy()))
        .join(format!("*.{}", glob::Pattern::escape(extension)));
    let entries = glob::glob(&pattern.to_string_lossy()).map_err(|e| {
        debug!("bad story pattern '{}': {}", pattern.display(), e);
        MadLibError::NoStoriesFound {
            dir: dir.to_path_buf(),
        }
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Pick a story file uniformly at random.
pub fn choose_random_story(dir: &Path, extension: &str, rng: &mut StdRng) -> Result<PathBuf> {
    let files = list_stories(dir, extension)?;
    debug!("{} story files in '{}'", files.len(), dir.display());
    files
        .choose(rng)
        .cloned()
        .ok_or_else(|| MadLibError::NoStoriesFound {
            dir: dir.to_path_buf(),
        })
}
