// Plain-text input loading.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::AuthorText;
use crate::error::{Result, StylinError};

/// Parse a `NAME=PATH` command-line argument.
pub fn parse_author_spec(spec: &str) -> Result<(String, PathBuf)> {
    match spec.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(path.trim())))
        }
        _ => Err(StylinError::InvalidAuthorSpec(spec.to_string())),
    }
}

/// Read a text file for `author`. A missing file is `MissingInput`.
pub fn load_text(author: &str, path: &Path) -> Result<String> {
    debug!(author, path = %path.display(), "Reading text");
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StylinError::MissingInput {
            author: author.to_string(),
            reason: format!("{} does not exist", path.display()),
        },
        _ => StylinError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Load every known author's text plus the unknown text, in argument order.
///
/// The unknown text is registered under the id `"unknown"`.
pub fn load_inputs(authors: &[(String, PathBuf)], unknown: &Path) -> Result<Vec<AuthorText>> {
    let mut inputs = Vec::with_capacity(authors.len() + 1);
    for (author, path) in authors {
        inputs.push(AuthorText::known(author.clone(), load_text(author, path)?));
    }
    inputs.push(AuthorText::unknown("unknown", load_text("unknown", unknown)?));
    Ok(inputs)
}
