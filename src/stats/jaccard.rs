// Jaccard similarity of vocabulary sets.
//
// Both corpora are truncated to the same length first, then reduced to their
// distinct words. The score is |A ∩ B| / |A ∪ B|: 1.0 for identical
// vocabularies, 0.0 for disjoint ones.

use std::collections::HashSet;

use crate::corpus::truncate;

/// Jaccard similarity of the first `truncate_len` tokens of each corpus.
///
/// Two empty vocabularies score 0.0.
pub fn jaccard_similarity(author: &[String], unknown: &[String], truncate_len: usize) -> f64 {
    let vocab_author: HashSet<&str> = truncate(author, truncate_len)
        .iter()
        .map(String::as_str)
        .collect();
    let vocab_unknown: HashSet<&str> = truncate(unknown, truncate_len)
        .iter()
        .map(String::as_str)
        .collect();

    let shared = vocab_author.intersection(&vocab_unknown).count();
    let union = vocab_author.len() + vocab_unknown.len() - shared;

    if union == 0 {
        0.0
    } else {
        shared as f64 / union as f64
    }
}
