// Analysis orchestrator — runs the five stylometric tests over one registry.
//
// Order matches how the results are presented:
//   1. word length distribution      (truncated, charted)
//   2. stopword distribution         (truncated, charted)
//   3. part-of-speech distribution   (truncated, charted)
//   4. chi-squared vocabulary test   (full corpora, scored)
//   5. Jaccard vocabulary similarity (truncated, scored)
//
// Every test derives its own structures from the read-only registry, so they
// are independent of each other.

pub mod feature_table;
pub mod score_table;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::corpus::{self, CorpusRegistry, Role};
use crate::stats::chi_squared::{chi_squared, DEFAULT_VOCABULARY_SIZE};
use crate::stats::features::{PartsOfSpeech, Stopwords, WordLength};
use crate::stats::jaccard::jaccard_similarity;
use crate::text::stopwords::StopwordSet;
use crate::text::traits::PosTagger;

use self::feature_table::FeatureTable;
use self::score_table::{Ranking, ScoreTable};

/// Tunables for the engine. `Default` matches the classic setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Most common pooled words used by the chi-squared test.
    pub vocabulary_size: usize,
    pub word_length_top: usize,
    pub stopword_top: usize,
    pub pos_top: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            vocabulary_size: DEFAULT_VOCABULARY_SIZE,
            word_length_top: 15,
            stopword_top: 50,
            pos_top: 35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusSummary {
    pub author: String,
    pub role: Role,
    pub tokens: usize,
}

/// Token counts for every corpus, in registration order.
pub fn summarize(registry: &CorpusRegistry) -> Vec<CorpusSummary> {
    registry
        .corpora()
        .iter()
        .map(|c| CorpusSummary {
            author: c.author().to_string(),
            role: c.role(),
            tokens: c.len(),
        })
        .collect()
}

/// Everything one run computes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub corpora: Vec<CorpusSummary>,
    pub shortest_length: usize,
    pub word_length: FeatureTable,
    pub stopwords: FeatureTable,
    pub parts_of_speech: FeatureTable,
    pub vocabulary: ScoreTable,
    pub similarity: ScoreTable,
}

impl AnalysisReport {
    /// Most likely author by chi-squared vocabulary divergence.
    pub fn most_likely_by_vocabulary(&self) -> Option<&str> {
        self.vocabulary.most_likely().map(|s| s.author.as_str())
    }

    /// Most likely author by Jaccard vocabulary similarity.
    pub fn most_likely_by_similarity(&self) -> Option<&str> {
        self.similarity.most_likely().map(|s| s.author.as_str())
    }
}

/// Runs the tests with a fixed stopword list and tagger.
pub struct Analyzer<'a> {
    config: AnalysisConfig,
    stopwords: &'a StopwordSet,
    tagger: &'a dyn PosTagger,
}

impl<'a> Analyzer<'a> {
    pub fn new(config: AnalysisConfig, stopwords: &'a StopwordSet, tagger: &'a dyn PosTagger) -> Self {
        Self {
            config,
            stopwords,
            tagger,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Word length frequency per author, truncated to `shortest`.
    pub fn word_length_test(&self, registry: &CorpusRegistry, shortest: usize) -> FeatureTable {
        FeatureTable::build(
            "Word Length",
            self.config.word_length_top,
            registry,
            shortest,
            &WordLength,
        )
    }

    /// Stopword frequency per author, truncated to `shortest`.
    pub fn stopwords_test(&self, registry: &CorpusRegistry, shortest: usize) -> FeatureTable {
        FeatureTable::build(
            format!("{} Most Common Stopwords", self.config.stopword_top),
            self.config.stopword_top,
            registry,
            shortest,
            &Stopwords::new(self.stopwords),
        )
    }

    /// Part-of-speech tag frequency per author, truncated to `shortest`.
    pub fn parts_of_speech_test(&self, registry: &CorpusRegistry, shortest: usize) -> FeatureTable {
        FeatureTable::build(
            "Parts of Speech",
            self.config.pos_top,
            registry,
            shortest,
            &PartsOfSpeech::new(self.tagger),
        )
    }

    /// Chi-squared divergence of each known author from the unknown text,
    /// over full (untruncated) corpora.
    pub fn vocabulary_test(&self, registry: &CorpusRegistry) -> ScoreTable {
        let unknown = registry.unknown();
        let mut table = ScoreTable::new("Chi-Squared", Ranking::LowerIsCloser);
        for corpus in registry.known() {
            let score = chi_squared(corpus.tokens(), unknown.tokens(), self.config.vocabulary_size);
            info!(author = corpus.author(), chi_squared = score, "Vocabulary test");
            table.insert(corpus.author(), score);
        }
        table
    }

    /// Jaccard similarity of each known author's vocabulary to the unknown
    /// text's, both truncated to `shortest`.
    pub fn jaccard_test(&self, registry: &CorpusRegistry, shortest: usize) -> ScoreTable {
        let unknown = registry.unknown();
        let mut table = ScoreTable::new("Jaccard Similarity", Ranking::HigherIsCloser);
        for corpus in registry.known() {
            let score = jaccard_similarity(corpus.tokens(), unknown.tokens(), shortest);
            info!(author = corpus.author(), jaccard = score, "Similarity test");
            table.insert(corpus.author(), score);
        }
        table
    }

    /// Run all five tests.
    pub fn run(&self, registry: &CorpusRegistry) -> AnalysisReport {
        let shortest = corpus::shortest_length(registry);

        let report = AnalysisReport {
            generated_at: Utc::now(),
            corpora: summarize(registry),
            shortest_length: shortest,
            word_length: self.word_length_test(registry, shortest),
            stopwords: self.stopwords_test(registry, shortest),
            parts_of_speech: self.parts_of_speech_test(registry, shortest),
            vocabulary: self.vocabulary_test(registry),
            similarity: self.jaccard_test(registry, shortest),
        };

        info!(
            by_vocabulary = report.most_likely_by_vocabulary().unwrap_or("-"),
            by_similarity = report.most_likely_by_similarity().unwrap_or("-"),
            "Analysis complete"
        );
        report
    }
}
