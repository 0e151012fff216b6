// Frequency distributions over arbitrary feature values.
//
// Ranking rule, used everywhere a "top K" is needed: count descending, then
// the feature's natural order ascending (lexicographic for strings, numeric
// for word lengths). Hash-map iteration order never leaks into a result.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts for each distinct value in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyDistribution<T: Eq + Hash> {
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T: Eq + Hash> Default for FrequencyDistribution<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrequencyDistribution<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut dist = Self::default();
        for value in iter {
            *dist.counts.entry(value).or_insert(0) += 1;
            dist.total += 1;
        }
        dist
    }
}

impl<T: Eq + Hash> FrequencyDistribution<T> {
    /// How many times `value` occurred.
    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Sum of all counts — the length of the source sequence.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Unordered `(value, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&T, usize)> {
        self.counts.iter().map(|(v, c)| (v, *c))
    }
}

impl<T: Eq + Hash + Ord + Clone> FrequencyDistribution<T> {
    /// Every value, ranked by count descending then by value ascending.
    pub fn ranked(&self) -> Vec<(T, usize)> {
        let mut ranked: Vec<(T, usize)> = self
            .counts
            .iter()
            .map(|(v, c)| (v.clone(), *c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    /// The `k` highest-ranked values.
    pub fn most_common(&self, k: usize) -> Vec<(T, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

/// Count each distinct value in `sequence`.
pub fn frequency_distribution<T, I>(sequence: I) -> FrequencyDistribution<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    sequence.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let dist = frequency_distribution(["the", "cat", "the", "hat", "the"]);
        assert_eq!(dist.count(&"the"), 3);
        assert_eq!(dist.count(&"cat"), 1);
        assert_eq!(dist.count(&"dog"), 0);
        assert_eq!(dist.total(), 5);
        assert_eq!(dist.distinct(), 3);
    }

    #[test]
    fn test_ties_break_by_value() {
        let dist = frequency_distribution(["b", "a", "c", "a", "b", "c", "d"]);
        assert_eq!(
            dist.most_common(3),
            vec![("a", 2), ("b", 2), ("c", 2)]
        );
    }

    #[test]
    fn test_numeric_ties_break_numerically() {
        let dist = frequency_distribution([10usize, 2, 10, 2, 3]);
        assert_eq!(dist.ranked(), vec![(2, 2), (10, 2), (3, 1)]);
    }

    #[test]
    fn test_most_common_larger_than_distinct() {
        let dist = frequency_distribution(["x", "y"]);
        assert_eq!(dist.most_common(100).len(), 2);
    }

    #[test]
    fn test_empty() {
        let dist: FrequencyDistribution<String> = frequency_distribution(Vec::new());
        assert!(dist.is_empty());
        assert!(dist.most_common(5).is_empty());
    }
}
