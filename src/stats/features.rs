// Feature extractors — what gets counted in each frequency test.
//
// Each extractor maps a (truncated) token sequence to a feature sequence;
// the frequency engine does the rest.

use std::fmt::Display;
use std::hash::Hash;

use super::frequency::{frequency_distribution, FrequencyDistribution};
use crate::text::stopwords::StopwordSet;
use crate::text::traits::PosTagger;

/// Trait for turning tokens into countable feature values.
pub trait FeatureExtractor {
    type Feature: Eq + Hash + Ord + Clone + Display;

    /// Extract one feature value per relevant token, preserving order.
    fn extract(&self, tokens: &[String]) -> Vec<Self::Feature>;

    /// Frequency distribution of the extracted features.
    fn distribution(&self, tokens: &[String]) -> FrequencyDistribution<Self::Feature> {
        frequency_distribution(self.extract(tokens))
    }
}

/// Word length in characters. Every token contributes exactly one value.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordLength;

impl FeatureExtractor for WordLength {
    type Feature = usize;

    fn extract(&self, tokens: &[String]) -> Vec<usize> {
        tokens.iter().map(|t| t.chars().count()).collect()
    }
}

/// Stopword identity. Tokens outside the stopword set are skipped.
pub struct Stopwords<'a> {
    set: &'a StopwordSet,
}

impl<'a> Stopwords<'a> {
    pub fn new(set: &'a StopwordSet) -> Self {
        Self { set }
    }
}

impl FeatureExtractor for Stopwords<'_> {
    type Feature = String;

    fn extract(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| self.set.contains(t))
            .cloned()
            .collect()
    }
}

/// Part-of-speech tag from the tagger. The feature is the tag, not the token.
pub struct PartsOfSpeech<'a> {
    tagger: &'a dyn PosTagger,
}

impl<'a> PartsOfSpeech<'a> {
    pub fn new(tagger: &'a dyn PosTagger) -> Self {
        Self { tagger }
    }
}

impl FeatureExtractor for PartsOfSpeech<'_> {
    type Feature = String;

    fn extract(&self, tokens: &[String]) -> Vec<String> {
        self.tagger
            .tag(tokens)
            .into_iter()
            .map(|(_, tag)| tag)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tagger::RuleTagger;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_word_length() {
        let dist = WordLength.distribution(&tokens(&["the", "hound", "of", "the"]));
        assert_eq!(dist.count(&3), 2);
        assert_eq!(dist.count(&5), 1);
        assert_eq!(dist.count(&2), 1);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_word_length_counts_characters() {
        assert_eq!(WordLength.extract(&tokens(&["café"])), vec![4]);
    }

    #[test]
    fn test_stopwords_filters() {
        let set = StopwordSet::from_words(["the", "of"]);
        let extracted = Stopwords::new(&set).extract(&tokens(&["the", "hound", "of", "the"]));
        assert_eq!(extracted, vec!["the", "of", "the"]);
    }

    #[test]
    fn test_parts_of_speech_uses_tags() {
        let tagger = RuleTagger::new();
        let dist = PartsOfSpeech::new(&tagger).distribution(&tokens(&["the", "hound", "the"]));
        assert_eq!(dist.count(&"DT".to_string()), 2);
        assert_eq!(dist.count(&"NN".to_string()), 1);
        assert_eq!(dist.count(&"hound".to_string()), 0);
    }
}
