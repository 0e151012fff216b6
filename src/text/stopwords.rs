// Stopword lists, backed by the `stop-words` crate built with its NLTK lists
// (179 English words), not the much larger default ISO lists.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

use crate::error::{Result, StylinError};

/// A fixed set of function words for one language.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Load the stopword list for a language name such as `"english"`.
    pub fn for_language(name: &str) -> Result<Self> {
        let language = match name.trim().to_lowercase().as_str() {
            "english" | "en" => LANGUAGE::English,
            "french" | "fr" => LANGUAGE::French,
            "german" | "de" => LANGUAGE::German,
            "spanish" | "es" => LANGUAGE::Spanish,
            "italian" | "it" => LANGUAGE::Italian,
            "portuguese" | "pt" => LANGUAGE::Portuguese,
            "dutch" | "nl" => LANGUAGE::Dutch,
            _ => return Err(StylinError::UnsupportedLanguage(name.to_string())),
        };
        Ok(Self::from_words(get(language)))
    }

    /// Build a set from an explicit word list. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_function_words() {
        let set = StopwordSet::for_language("english").unwrap();
        for word in ["the", "and", "of", "to", "a"] {
            assert!(set.contains(word), "expected {word} in the English list");
        }
        assert!(!set.contains("baskervilles"));
    }

    #[test]
    fn test_english_is_the_short_function_word_list() {
        let set = StopwordSet::for_language("en").unwrap();
        assert!((150..=200).contains(&set.len()), "got {} words", set.len());
        // content words from the larger ISO list must not leak in
        for word in ["said", "thing", "new"] {
            assert!(!set.contains(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let err = StopwordSet::for_language("klingon").unwrap_err();
        assert!(matches!(err, StylinError::UnsupportedLanguage(_)));
    }

    #[test]
    fn test_from_words_lowercases() {
        let set = StopwordSet::from_words(["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert_eq!(set.len(), 2);
    }
}
