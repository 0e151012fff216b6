// Rule-based part-of-speech tagger producing Penn Treebank tags.
//
// Three passes per token, first hit wins:
//   1. a closed-class lexicon (determiners, pronouns, auxiliaries, ...)
//   2. suffix patterns for open-class words (-ly, -ing, -tion, -ous, ...)
//   3. a left-context fixup (after "to" or a modal, a bare noun is a verb)
// Anything left over is tagged NN.
//
// It is nowhere near a trained tagger, but it's deterministic and the tag
// distribution it produces is stable across runs, which is all the
// parts-of-speech comparison needs.

use std::collections::HashMap;

use regex_lite::Regex;

use super::traits::PosTagger;

const LEXICON: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any",
            "no", "another", "all", "both", "either", "neither",
        ],
    ),
    (
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "about", "as", "into", "like",
            "through", "after", "over", "between", "out", "against", "during", "without",
            "before", "under", "around", "among", "upon", "within", "along", "across", "behind",
            "beyond", "toward", "towards", "since", "until", "because", "although", "though",
            "while", "if", "whether", "than", "unless", "up", "down", "off",
        ],
    ),
    ("TO", &["to"]),
    ("CC", &["and", "or", "but", "nor"]),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
    ("WDT", &["which", "whatever", "whichever"]),
    ("WP", &["who", "whom", "what"]),
    ("WP$", &["whose"]),
    ("WRB", &["when", "where", "why", "how"]),
    (
        "MD",
        &[
            "can", "could", "may", "might", "must", "shall", "should", "will", "would", "ca",
            "wo",
        ],
    ),
    ("EX", &["there"]),
    (
        "RB",
        &[
            "not", "very", "also", "just", "only", "then", "now", "here", "too", "again", "never",
            "always", "often", "still", "even", "ever", "quite", "rather", "perhaps", "so",
            "soon", "once", "already", "almost", "away", "back",
        ],
    ),
    ("VB", &["be"]),
    ("VBP", &["am", "are", "have", "do"]),
    ("VBZ", &["is", "has", "does"]),
    ("VBD", &["was", "were", "had", "did", "said", "came", "went", "saw", "made", "took"]),
    ("VBN", &["been", "done", "gone", "seen", "known", "taken"]),
    ("VBG", &["being", "having", "doing"]),
    (
        "CD",
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "hundred", "thousand",
        ],
    ),
    ("UH", &["oh", "ah", "yes", "alas"]),
    ("JJR", &["more", "less", "better", "worse"]),
    ("JJS", &["most", "least", "best", "worst"]),
    (
        "JJ",
        &[
            "good", "great", "little", "old", "new", "own", "other", "such", "same", "few",
            "many", "much", "long", "large", "small", "young", "strange", "dark",
        ],
    ),
];

const SUFFIX_RULES: &[(&str, &str)] = &[
    ("NNS", r"(tions|sions|ments|nesses|ities|ships)$"),
    ("NN", r"(tion|sion|ment|ness|ity|ship|ism|ance|ence|hood|dom)$"),
    ("RB", r"..ly$"),
    ("VBG", r"...ing$"),
    ("VBD", r"..ed$"),
    ("JJ", r"..(ous|ful|ive|able|ible|al|ic|less|ish|ary)$"),
    ("NNS", r"..[^su]s$"),
];

/// Deterministic rule-based tagger.
pub struct RuleTagger {
    lexicon: HashMap<&'static str, &'static str>,
    suffixes: Vec<(&'static str, Regex)>,
}

impl Default for RuleTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleTagger {
    pub fn new() -> Self {
        let lexicon = LEXICON
            .iter()
            .flat_map(|(tag, words)| words.iter().map(move |w| (*w, *tag)))
            .collect();
        let suffixes = SUFFIX_RULES
            .iter()
            .map(|(tag, pattern)| (*tag, Regex::new(pattern).expect("static suffix pattern")))
            .collect();
        Self { lexicon, suffixes }
    }

    fn tag_one(&self, token: &str, previous: Option<&str>) -> &'static str {
        if let Some(tag) = self.lexicon.get(token) {
            return *tag;
        }

        let by_suffix = self
            .suffixes
            .iter()
            .find(|(_, re)| re.is_match(token))
            .map(|(tag, _)| *tag);

        match (by_suffix, previous) {
            // "to walk", "could see"
            (None, Some("TO" | "MD")) => "VB",
            // "they walk", "he walks"
            (None, Some("PRP")) => "VBP",
            (Some("NNS"), Some("PRP")) => "VBZ",
            (Some(tag), _) => tag,
            (None, _) => "NN",
        }
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        let mut previous: Option<&'static str> = None;
        tokens
            .iter()
            .map(|token| {
                let tag = self.tag_one(token, previous);
                previous = Some(tag);
                (token.clone(), tag.to_string())
            })
            .collect()
    }
}
