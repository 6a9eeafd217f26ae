/// Template store: loads raw template text from disk.
use log::debug;
use std::path::Path;

use crate::error::{MadLibError, Result};

/// Read a template file as UTF-8 text.
pub fn read_template(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| MadLibError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} bytes from '{}'", contents.len(), path.display());
    Ok(contents)
}
