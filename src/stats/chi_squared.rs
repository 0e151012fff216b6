// Chi-squared vocabulary divergence.
//
// Pool the author's tokens with the unknown text's tokens. If the author
// wrote the unknown text, each common word should appear in the author's
// share of the pool in proportion to the author's share of the tokens. The
// statistic sums the squared deviation from that expectation over the most
// common words of the pool:
//
//   sum((observed - expected)^2 / expected)
//   expected = combined_count * len(author) / (len(author) + len(unknown))
//
// Lower means closer. Zero means every word appears exactly in proportion.

use tracing::debug;

use super::frequency::frequency_distribution;

/// Number of most common pooled words the statistic is computed over.
pub const DEFAULT_VOCABULARY_SIZE: usize = 100;

/// Chi-squared divergence of `author` from the pool `author + unknown`.
///
/// Terms whose expected count is zero are skipped. That can only happen when
/// the author corpus is empty, so an empty author yields 0.0 rather than NaN.
pub fn chi_squared(author: &[String], unknown: &[String], vocabulary_size: usize) -> f64 {
    let combined_len = author.len() + unknown.len();
    if combined_len == 0 {
        return 0.0;
    }
    let author_proportion = author.len() as f64 / combined_len as f64;

    let combined = frequency_distribution(author.iter().chain(unknown.iter()));
    let author_counts = frequency_distribution(author.iter());

    let mut statistic = 0.0;
    for (word, combined_count) in combined.most_common(vocabulary_size) {
        let observed = author_counts.count(&word) as f64;
        let expected = combined_count as f64 * author_proportion;
        if expected <= 0.0 {
            debug!(word = %word, "Skipping term with zero expected count");
            continue;
        }
        statistic += (observed - expected).powi(2) / expected;
    }
    statistic
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_corpora_score_zero() {
        let text = tokens(&["the", "hound", "of", "the", "baskervilles"]);
        let score = chi_squared(&text, &text, DEFAULT_VOCABULARY_SIZE);
        assert!(score.abs() < 1e-12, "Identical corpora should score 0, got {score}");
    }

    #[test]
    fn test_hand_computed_value() {
        // pool: a x3, b x1; author share = 2/4
        // a: observed 2, expected 1.5 -> 0.25 / 1.5
        // b: observed 0, expected 0.5 -> 0.25 / 0.5
        let author = tokens(&["a", "a"]);
        let unknown = tokens(&["a", "b"]);
        let expected = 0.25 / 1.5 + 0.25 / 0.5;
        let score = chi_squared(&author, &unknown, DEFAULT_VOCABULARY_SIZE);
        assert!((score - expected).abs() < 1e-12, "Expected {expected}, got {score}");
    }

    #[test]
    fn test_vocabulary_size_limits_terms() {
        // With one term only "a" (count 3) is considered
        let author = tokens(&["a", "a"]);
        let unknown = tokens(&["a", "b"]);
        let score = chi_squared(&author, &unknown, 1);
        assert!((score - 0.25 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_author_is_zero_not_nan() {
        let score = chi_squared(&[], &tokens(&["a", "b"]), DEFAULT_VOCABULARY_SIZE);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(chi_squared(&[], &[], DEFAULT_VOCABULARY_SIZE), 0.0);
    }
}
