// Corpus registry and length normalization.
//
// The registry holds one tokenized corpus per input text, tagged with its
// role. All comparisons truncate to the shortest corpus so that text length
// never leaks into the statistics.

pub mod loader;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, StylinError};
use crate::text::traits::Tokenizer;

/// Whether a corpus has a known author or is the text being attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Known,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Known => "known",
            Role::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw text for one author, before tokenization.
#[derive(Debug, Clone)]
pub struct AuthorText {
    pub author: String,
    pub role: Role,
    pub text: String,
}

impl AuthorText {
    pub fn known(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            role: Role::Known,
            text: text.into(),
        }
    }

    pub fn unknown(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            role: Role::Unknown,
            text: text.into(),
        }
    }
}

/// An author's token sequence. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    author: String,
    role: Role,
    tokens: Vec<String>,
}

impl Corpus {
    pub fn new(author: impl Into<String>, role: Role, tokens: Vec<String>) -> Self {
        Self {
            author: author.into(),
            role,
            tokens,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The first `n` tokens, or all of them if the corpus is shorter.
    pub fn truncated(&self, n: usize) -> &[String] {
        truncate(&self.tokens, n)
    }
}

/// The first `n` tokens of a sequence in original order.
///
/// Asking for more tokens than exist returns the whole sequence unchanged.
pub fn truncate<T>(tokens: &[T], n: usize) -> &[T] {
    &tokens[..n.min(tokens.len())]
}

/// All corpora for one run, in registration order.
///
/// Invariants, checked by `build`: author ids are unique, exactly one corpus
/// is `Unknown`, at least one is `Known`, and none is empty.
#[derive(Debug, Clone)]
pub struct CorpusRegistry {
    corpora: Vec<Corpus>,
    unknown: usize,
}

impl CorpusRegistry {
    /// Tokenize every text and validate the result.
    pub fn build(inputs: Vec<AuthorText>, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let corpora = inputs
            .into_iter()
            .map(|input| {
                let tokens = tokenizer.tokenize(&input.text);
                info!(
                    author = %input.author,
                    role = %input.role,
                    tokens = tokens.len(),
                    "Tokenized corpus"
                );
                Corpus::new(input.author, input.role, tokens)
            })
            .collect();
        Self::from_corpora(corpora)
    }

    /// Validate pre-tokenized corpora.
    pub fn from_corpora(corpora: Vec<Corpus>) -> Result<Self> {
        let mut unknown: Option<usize> = None;

        for (i, corpus) in corpora.iter().enumerate() {
            if corpora[..i].iter().any(|c| c.author == corpus.author) {
                return Err(StylinError::DuplicateAuthor(corpus.author.clone()));
            }
            if corpus.role == Role::Unknown {
                if let Some(first) = unknown {
                    return Err(StylinError::MultipleUnknown {
                        first: corpora[first].author.clone(),
                        second: corpus.author.clone(),
                    });
                }
                unknown = Some(i);
            }
        }

        let unknown = unknown.ok_or_else(|| StylinError::MissingInput {
            author: "unknown".to_string(),
            reason: "no text of unknown authorship was supplied".to_string(),
        })?;

        if !corpora.iter().any(|c| c.role == Role::Known) {
            return Err(StylinError::MissingInput {
                author: "known".to_string(),
                reason: "at least one text of known authorship is required".to_string(),
            });
        }

        if let Some(empty) = corpora.iter().find(|c| c.is_empty()) {
            return Err(StylinError::EmptyCorpus {
                author: empty.author.clone(),
            });
        }

        Ok(Self { corpora, unknown })
    }

    /// Every corpus, known and unknown, in registration order.
    pub fn corpora(&self) -> &[Corpus] {
        &self.corpora
    }

    /// Known-author corpora in registration order.
    pub fn known(&self) -> impl Iterator<Item = &Corpus> {
        self.corpora.iter().filter(|c| c.role == Role::Known)
    }

    pub fn unknown(&self) -> &Corpus {
        &self.corpora[self.unknown]
    }

    pub fn get(&self, author: &str) -> Option<&Corpus> {
        self.corpora.iter().find(|c| c.author == author)
    }

    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }

    /// Length of the shortest corpus. Never zero for a built registry.
    pub fn shortest_length(&self) -> usize {
        self.corpora.iter().map(Corpus::len).min().unwrap_or(0)
    }
}

/// Tokenize raw texts into a validated registry.
pub fn build_registry(inputs: Vec<AuthorText>, tokenizer: &dyn Tokenizer) -> Result<CorpusRegistry> {
    CorpusRegistry::build(inputs, tokenizer)
}

/// Minimum token count across all corpora in the registry.
pub fn shortest_length(registry: &CorpusRegistry) -> usize {
    let shortest = registry.shortest_length();
    info!(shortest, "Length of shortest corpus");
    shortest
}
