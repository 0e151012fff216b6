// Markdown report generation.
//
// The report mirrors the terminal output: corpus sizes, the two scored
// tests with their conclusions, then one table per frequency test.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::analysis::feature_table::FeatureTable;
use crate::analysis::score_table::{Ranking, ScoreTable};
use crate::analysis::AnalysisReport;

/// Render a full analysis report as markdown.
pub fn generate_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Authorship Attribution Report\n");
    let _ = writeln!(
        out,
        "Generated {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let _ = writeln!(out, "## Corpora\n");
    let _ = writeln!(out, "| Author | Role | Words |");
    let _ = writeln!(out, "|---|---|---:|");
    for corpus in &report.corpora {
        let _ = writeln!(out, "| {} | {} | {} |", corpus.author, corpus.role, corpus.tokens);
    }
    let _ = writeln!(
        out,
        "\nAll comparisons except chi-squared use the first {} words of each corpus.\n",
        report.shortest_length
    );

    write_scores(&mut out, &report.vocabulary);
    write_scores(&mut out, &report.similarity);

    for table in [&report.word_length, &report.stopwords, &report.parts_of_speech] {
        write_features(&mut out, table);
    }

    out
}

/// Write the markdown report to `path`.
pub fn write_report(path: &Path, report: &AnalysisReport) -> Result<()> {
    std::fs::write(path, generate_report(report))
        .with_context(|| format!("Failed to write markdown report to {}", path.display()))
}

fn write_scores(out: &mut String, table: &ScoreTable) {
    let direction = match table.ranking {
        Ranking::LowerIsCloser => "lower is closer",
        Ranking::HigherIsCloser => "higher is closer",
    };
    let _ = writeln!(out, "## {} ({direction})\n", table.metric);
    let _ = writeln!(out, "| Rank | Author | Score |");
    let _ = writeln!(out, "|---:|---|---:|");
    for (i, entry) in table.ranked().iter().enumerate() {
        let _ = writeln!(out, "| {} | {} | {:.4} |", i + 1, entry.author, entry.score);
    }
    if let Some(best) = table.most_likely() {
        let _ = writeln!(
            out,
            "\n**Most likely author by {}: {}**\n",
            table.metric.to_lowercase(),
            best.author
        );
    }
}

fn write_features(out: &mut String, table: &FeatureTable) {
    let _ = writeln!(out, "## {}\n", table.title);

    let header: Vec<&str> = table.authors.iter().map(|a| a.author.as_str()).collect();
    let _ = writeln!(out, "| Feature | {} |", header.join(" | "));
    let _ = writeln!(out, "|---|{}", "---:|".repeat(header.len()));

    for feature in table.chart_features() {
        let counts: Vec<String> = table
            .authors
            .iter()
            .map(|a| a.count(&feature).to_string())
            .collect();
        let _ = writeln!(out, "| {} | {} |", feature, counts.join(" | "));
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::feature_table::{AuthorFeatures, FeatureCount};
    use crate::analysis::CorpusSummary;
    use crate::corpus::Role;

    fn feature_table(title: &str) -> FeatureTable {
        FeatureTable {
            title: title.to_string(),
            top_k: 5,
            authors: vec![AuthorFeatures {
                author: "doyle".to_string(),
                role: Role::Known,
                total: 2,
                counts: vec![FeatureCount {
                    feature: "the".to_string(),
                    count: 2,
                }],
            }],
        }
    }

    fn sample_report() -> AnalysisReport {
        let mut vocabulary = ScoreTable::new("Chi-Squared", Ranking::LowerIsCloser);
        vocabulary.insert("doyle", 12.5);
        vocabulary.insert("wells", 40.0);
        let mut similarity = ScoreTable::new("Jaccard Similarity", Ranking::HigherIsCloser);
        similarity.insert("doyle", 0.4);
        similarity.insert("wells", 0.3);

        AnalysisReport {
            generated_at: chrono::Utc::now(),
            corpora: vec![CorpusSummary {
                author: "doyle".to_string(),
                role: Role::Known,
                tokens: 2,
            }],
            shortest_length: 2,
            word_length: feature_table("Word Length"),
            stopwords: feature_table("Stopwords"),
            parts_of_speech: feature_table("Parts of Speech"),
            vocabulary,
            similarity,
        }
    }

    #[test]
    fn test_report_contains_conclusions() {
        let md = generate_report(&sample_report());
        assert!(md.contains("# Authorship Attribution Report"));
        assert!(md.contains("**Most likely author by chi-squared: doyle**"));
        assert!(md.contains("**Most likely author by jaccard similarity: doyle**"));
        assert!(md.contains("| 1 | doyle | 12.5000 |"));
    }

    #[test]
    fn test_report_contains_feature_tables() {
        let md = generate_report(&sample_report());
        assert!(md.contains("## Word Length"));
        assert!(md.contains("| Feature | doyle |"));
        assert!(md.contains("| the | 2 |"));
    }

    #[test]
    fn test_write_report() {
        let path = std::env::temp_dir().join(format!("stylin-report-{}.md", std::process::id()));
        write_report(&path, &sample_report()).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Authorship Attribution Report"));
        let _ = std::fs::remove_file(&path);
    }
}
