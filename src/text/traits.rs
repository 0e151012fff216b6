// Tokenizer and tagger traits — the swap-ready NLP seam.
//
// The statistics engine only ever sees token sequences and tag strings, so
// any implementation that is deterministic for a given input can be dropped
// in here without touching the scoring code.

/// Converts raw text into a sequence of lowercase alphabetic tokens.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a part-of-speech tag to each token, preserving order.
pub trait PosTagger {
    /// Returns one `(token, tag)` pair per input token.
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}
