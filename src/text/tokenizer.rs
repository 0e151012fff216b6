// Word tokenizer built on Unicode word boundaries (UAX #29).
//
// Tokens are lowercased and anything that isn't purely alphabetic is dropped:
// numbers, punctuation, symbols. This is deliberately lossy — the statistics
// only care about words.
//
// Two cases need help beyond UAX #29, which splits "well-known" into two
// words and keeps "o'clock" as one:
//   - hyphenated compounds are a single non-alphabetic token, so every word
//     in a hyphen-joined run is dropped ("--" is a dash, not a join);
//   - only the Treebank clitics 's 'm 'd 'll 're 've n't are split off, and
//     the head survives ("don't" -> "do", "it's" -> "it"). Any other internal
//     apostrophe ("o'clock", "ma'am", "rock'n'roll") drops the whole word.

use unicode_segmentation::UnicodeSegmentation;

use super::traits::Tokenizer;

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];
const HYPHENS: [&str; 2] = ["-", "\u{2010}"];
const CLITICS: [&str; 6] = ["s", "m", "d", "ll", "re", "ve"];

/// Default tokenizer: Unicode words, lowercased, alphabetic-only.
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let segments: Vec<&str> = text.split_word_bounds().collect();

        segments
            .iter()
            .enumerate()
            .filter(|(i, seg)| is_word(seg) && !in_hyphen_run(&segments, *i))
            .filter_map(|(_, seg)| split_contraction(seg))
            .filter(|word| is_alphabetic(word))
            .map(|word| word.to_lowercase())
            .collect()
    }
}

/// Same notion of "word" as `unicode_words`.
fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

/// Whether the word at `i` is joined to a neighbouring word by one hyphen.
fn in_hyphen_run(segments: &[&str], i: usize) -> bool {
    let joined = |hyphen: Option<&&str>, other: Option<&&str>| {
        matches!((hyphen, other), (Some(h), Some(w)) if HYPHENS.contains(h) && is_word(w))
    };
    let before = i >= 2 && joined(segments.get(i - 1), segments.get(i - 2));
    let after = joined(segments.get(i + 1), segments.get(i + 2));
    before || after
}

/// The head of a Treebank contraction, the word itself if it has no
/// apostrophe, or `None` if the apostrophe is part of the word.
fn split_contraction(word: &str) -> Option<&str> {
    let Some(pos) = word.find(APOSTROPHES) else {
        return Some(word);
    };

    let head = &word[..pos];
    let clitic = word[pos..].chars().skip(1).collect::<String>().to_lowercase();

    // "n't" belongs to the clitic: don't -> do, can't -> ca, won't -> wo
    if clitic == "t" && head.len() > 1 && head.ends_with(['n', 'N']) {
        return Some(&head[..head.len() - 1]);
    }
    if CLITICS.contains(&clitic.as_str()) {
        return Some(head);
    }
    None
}

fn is_alphabetic(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_drops_punctuation() {
        let tokens = WordTokenizer.tokenize("The Hound, of the Baskervilles!");
        assert_eq!(tokens, vec!["the", "hound", "of", "the", "baskervilles"]);
    }

    #[test]
    fn test_drops_numbers_and_mixed_tokens() {
        let tokens = WordTokenizer.tokenize("In 1889 the R2D2 unit arrived");
        assert_eq!(tokens, vec!["in", "the", "unit", "arrived"]);
    }

    #[test]
    fn test_contractions_keep_head() {
        let tokens = WordTokenizer.tokenize("I don't think it's Holmes' pipe");
        assert_eq!(tokens, vec!["i", "do", "think", "it", "holmes", "pipe"]);
    }

    #[test]
    fn test_every_treebank_clitic_splits() {
        let tokens = WordTokenizer.tokenize("I'm we'd they'll you're we've");
        assert_eq!(tokens, vec!["i", "we", "they", "you", "we"]);
    }

    #[test]
    fn test_curly_apostrophe() {
        let tokens = WordTokenizer.tokenize("They can\u{2019}t stay");
        assert_eq!(tokens, vec!["they", "ca", "stay"]);
    }

    #[test]
    fn test_internal_apostrophe_drops_word() {
        let tokens = WordTokenizer.tokenize("at ten o'clock, ma'am, rock'n'roll played");
        assert_eq!(tokens, vec!["at", "ten", "played"]);
    }

    #[test]
    fn test_hyphenated_compound_is_dropped() {
        let tokens = WordTokenizer.tokenize("a well-known and far-off-looking detective");
        assert_eq!(tokens, vec!["a", "and", "detective"]);
    }

    #[test]
    fn test_double_dash_is_not_a_join() {
        let tokens = WordTokenizer.tokenize("wait--then go");
        assert_eq!(tokens, vec!["wait", "then", "go"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(WordTokenizer.tokenize("").is_empty());
        assert!(WordTokenizer.tokenize("123 -- 456 !!").is_empty());
    }
}
