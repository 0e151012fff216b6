// Error taxonomy for corpus loading and analysis.
//
// Everything here is fatal: a run either has a complete, non-empty registry
// or it stops before any statistic is computed.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StylinError {
    /// A required text is absent — a file that doesn't exist, or no text
    /// supplied for a role the analysis needs.
    #[error("missing input for {author}: {reason}")]
    MissingInput { author: String, reason: String },

    /// A text produced zero alphabetic tokens.
    #[error("corpus for {author} is empty after tokenization; check the input text")]
    EmptyCorpus { author: String },

    #[error("author {0} was registered more than once")]
    DuplicateAuthor(String),

    #[error("more than one unknown text was supplied ({first} and {second})")]
    MultipleUnknown { first: String, second: String },

    #[error("invalid author argument {0:?}, expected NAME=PATH")]
    InvalidAuthorSpec(String),

    #[error("no stopword list for language {0:?}")]
    UnsupportedLanguage(String),

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StylinError>;
