// Reporter trait — the presentation seam.
//
// The engine never calls a reporter; the binary hands finished tables to
// one. A headless run simply doesn't construct one.

use crate::analysis::feature_table::FeatureTable;
use crate::analysis::score_table::ScoreTable;

/// Chart styling for one reporting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotStyle {
    /// Bar glyph per author, in registration order, cycled when there are
    /// more authors than glyphs.
    pub glyphs: Vec<char>,
    /// Width in characters of the longest bar in a chart.
    pub bar_width: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            glyphs: vec!['-', ':', '='],
            bar_width: 30,
        }
    }
}

impl PlotStyle {
    pub fn glyph_for(&self, author_index: usize) -> char {
        if self.glyphs.is_empty() {
            '#'
        } else {
            self.glyphs[author_index % self.glyphs.len()]
        }
    }
}

pub trait Reporter {
    /// Print every author's score, closest first, and the conclusion.
    fn report(&self, table: &ScoreTable);

    /// Render a comparative chart of a feature table's top features.
    fn plot(&self, table: &FeatureTable);
}
