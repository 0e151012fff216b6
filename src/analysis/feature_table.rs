// Feature tables — per-author frequency distributions for one test, in the
// shape the reporters consume.

use serde::{Deserialize, Serialize};

use crate::corpus::{CorpusRegistry, Role};
use crate::stats::features::FeatureExtractor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCount {
    pub feature: String,
    pub count: usize,
}

/// One author's ranked feature counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorFeatures {
    pub author: String,
    pub role: Role,
    /// Length of the feature sequence (sum of all counts).
    pub total: usize,
    /// Every distinct feature, highest count first.
    pub counts: Vec<FeatureCount>,
}

impl AuthorFeatures {
    pub fn count(&self, feature: &str) -> usize {
        self.counts
            .iter()
            .find(|c| c.feature == feature)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureTable {
    pub title: String,
    /// How many features a chart of this table should show.
    pub top_k: usize,
    pub authors: Vec<AuthorFeatures>,
}

impl FeatureTable {
    /// Run `extractor` over every corpus in the registry, each truncated to
    /// `truncate_len` tokens.
    pub fn build<E: FeatureExtractor>(
        title: impl Into<String>,
        top_k: usize,
        registry: &CorpusRegistry,
        truncate_len: usize,
        extractor: &E,
    ) -> Self {
        let authors = registry
            .corpora()
            .iter()
            .map(|corpus| {
                let dist = extractor.distribution(corpus.truncated(truncate_len));
                AuthorFeatures {
                    author: corpus.author().to_string(),
                    role: corpus.role(),
                    total: dist.total(),
                    counts: dist
                        .ranked()
                        .into_iter()
                        .map(|(feature, count)| FeatureCount {
                            feature: feature.to_string(),
                            count,
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            title: title.into(),
            top_k,
            authors,
        }
    }

    pub fn author(&self, author: &str) -> Option<&AuthorFeatures> {
        self.authors.iter().find(|a| a.author == author)
    }

    /// Features to chart: the union of every author's top `top_k`, ordered by
    /// summed count descending, ties in order of first appearance.
    pub fn chart_features(&self) -> Vec<String> {
        let mut features: Vec<String> = Vec::new();
        for author in &self.authors {
            for fc in author.counts.iter().take(self.top_k) {
                if !features.contains(&fc.feature) {
                    features.push(fc.feature.clone());
                }
            }
        }

        let summed = |feature: &str| -> usize { self.authors.iter().map(|a| a.count(feature)).sum() };
        features.sort_by_key(|f| std::cmp::Reverse(summed(f.as_str())));
        features.truncate(self.top_k);
        features
    }
}
