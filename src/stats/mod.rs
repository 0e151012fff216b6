// Comparative statistics — frequency distributions, chi-squared divergence,
// and Jaccard similarity.

pub mod chi_squared;
pub mod features;
pub mod frequency;
pub mod jaccard;
