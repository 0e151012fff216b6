// Score tables — one score per known author for a single test.

use serde::{Deserialize, Serialize};

/// Which direction of a score means "closer to the unknown text".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ranking {
    /// Divergence measures such as chi-squared.
    LowerIsCloser,
    /// Similarity measures such as Jaccard.
    HigherIsCloser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorScore {
    pub author: String,
    pub score: f64,
}

/// Known-author scores for one metric, in registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub metric: String,
    pub ranking: Ranking,
    pub scores: Vec<AuthorScore>,
}

impl ScoreTable {
    pub fn new(metric: impl Into<String>, ranking: Ranking) -> Self {
        Self {
            metric: metric.into(),
            ranking,
            scores: Vec::new(),
        }
    }

    /// Record a score. A second score for the same author replaces the first.
    pub fn insert(&mut self, author: impl Into<String>, score: f64) {
        let author = author.into();
        match self.scores.iter_mut().find(|s| s.author == author) {
            Some(existing) => existing.score = score,
            None => self.scores.push(AuthorScore { author, score }),
        }
    }

    pub fn get(&self, author: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.author == author)
            .map(|s| s.score)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn is_better(&self, candidate: f64, current: f64) -> bool {
        match self.ranking {
            Ranking::LowerIsCloser => candidate < current,
            Ranking::HigherIsCloser => candidate > current,
        }
    }

    /// The closest author. On a tie the earlier-registered author wins.
    pub fn most_likely(&self) -> Option<&AuthorScore> {
        let mut best: Option<&AuthorScore> = None;
        for entry in &self.scores {
            match best {
                Some(current) if !self.is_better(entry.score, current.score) => {}
                _ => best = Some(entry),
            }
        }
        best
    }

    /// Scores ordered closest first, ties kept in registration order.
    pub fn ranked(&self) -> Vec<&AuthorScore> {
        let mut ranked: Vec<&AuthorScore> = self.scores.iter().collect();
        match self.ranking {
            Ranking::LowerIsCloser => ranked.sort_by(|a, b| a.score.total_cmp(&b.score)),
            Ranking::HigherIsCloser => ranked.sort_by(|a, b| b.score.total_cmp(&a.score)),
        }
        ranked
    }
}
