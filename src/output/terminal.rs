// Colored terminal output for score tables and frequency charts.
//
// Charts are horizontal bars, one row per feature and one bar per author,
// scaled so the largest count in the chart fills `bar_width`.

use colored::{Color, Colorize};

use super::reporter::{PlotStyle, Reporter};
use crate::analysis::feature_table::FeatureTable;
use crate::analysis::score_table::{Ranking, ScoreTable};
use crate::analysis::CorpusSummary;

const AUTHOR_COLORS: [Color; 4] = [
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
];

/// Prints to stdout with the given chart style.
pub struct TerminalReporter {
    style: PlotStyle,
}

impl TerminalReporter {
    pub fn new(style: PlotStyle) -> Self {
        Self { style }
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, table: &ScoreTable) {
        println!("\n{}", format!("=== {} ===", table.metric).bold());

        let direction = match table.ranking {
            Ranking::LowerIsCloser => "lower is closer",
            Ranking::HigherIsCloser => "higher is closer",
        };
        println!("  {}", direction.dimmed());

        for (i, entry) in table.ranked().iter().enumerate() {
            println!("  {:>2}. {:<24} {:>12.4}", i + 1, entry.author, entry.score);
        }

        if let Some(best) = table.most_likely() {
            println!(
                "\n  Most likely author by {} is {}",
                table.metric.to_lowercase(),
                best.author.bold().green()
            );
        }
    }

    fn plot(&self, table: &FeatureTable) {
        println!("\n{}", format!("=== {} ===", table.title).bold());

        let legend: Vec<String> = table
            .authors
            .iter()
            .enumerate()
            .map(|(i, a)| {
                format!("{} {}", self.style.glyph_for(i), a.author)
                    .color(author_color(i))
                    .to_string()
            })
            .collect();
        println!("  {}", legend.join("   "));
        println!();

        for line in chart_lines(table, &self.style) {
            println!("{line}");
        }
    }
}

/// Plain (uncolored) chart rows for a feature table.
///
/// Each feature gets a label row followed by one bar row per author.
pub fn chart_lines(table: &FeatureTable, style: &PlotStyle) -> Vec<String> {
    let features = table.chart_features();
    let max = features
        .iter()
        .flat_map(|f| table.authors.iter().map(move |a| a.count(f)))
        .max()
        .unwrap_or(0);
    let label_width = features.iter().map(|f| f.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::new();
    for feature in &features {
        for (i, author) in table.authors.iter().enumerate() {
            let count = author.count(feature);
            let label = if i == 0 { feature.as_str() } else { "" };
            lines.push(format!(
                "  {:<label_width$}  {} {}",
                label,
                bar(count, max, style.bar_width, style.glyph_for(i)),
                count
            ));
        }
    }
    lines
}

/// A bar of `glyph` proportional to `count / max`, padded to `width`.
pub fn bar(count: usize, max: usize, width: usize, glyph: char) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((count as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);
    format!(
        "{}{}",
        glyph.to_string().repeat(filled),
        " ".repeat(width - filled)
    )
}

/// Token counts per corpus and the length every test truncates to.
pub fn display_corpus_sizes(corpora: &[CorpusSummary], shortest: usize) {
    println!("\n{}", "=== Corpora ===".bold());
    for corpus in corpora {
        println!(
            "  {:<24} {:<8} {:>8} words",
            corpus.author,
            corpus.role.to_string().dimmed(),
            corpus.tokens
        );
    }
    println!("  Length of shortest corpus = {}", shortest.to_string().bold());
}

fn author_color(index: usize) -> Color {
    AUTHOR_COLORS[index % AUTHOR_COLORS.len()]
}
