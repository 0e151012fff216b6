// Stylin: stylometric authorship attribution.
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: raw text -> tokens -> registry -> statistics -> report.

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod stats;
pub mod text;
