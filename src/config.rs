use std::env;
use std::str::FromStr;

use crate::analysis::AnalysisConfig;
use crate::error::{Result, StylinError};
use crate::output::reporter::PlotStyle;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so any of these can live
/// there instead of the shell environment. Every value has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Most common pooled words in the chi-squared test (STYLIN_VOCAB_SIZE)
    pub vocabulary_size: usize,
    /// Bars per chart for each frequency test
    pub word_length_top: usize,
    pub stopword_top: usize,
    pub pos_top: usize,
    /// Stopword list language (STYLIN_LANGUAGE, default "english")
    pub language: String,
    /// One bar glyph per author, cycled (STYLIN_PLOT_GLYPHS, default "-:=")
    pub plot_glyphs: Vec<char>,
    /// Width of the longest bar in characters (STYLIN_PLOT_WIDTH)
    pub plot_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        let analysis = AnalysisConfig::default();
        let style = PlotStyle::default();
        Self {
            vocabulary_size: analysis.vocabulary_size,
            word_length_top: analysis.word_length_top,
            stopword_top: analysis.stopword_top,
            pos_top: analysis.pos_top,
            language: "english".to_string(),
            plot_glyphs: style.glyphs,
            plot_width: style.bar_width,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `load` uses the
    /// process environment; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let plot_glyphs = match lookup("STYLIN_PLOT_GLYPHS") {
            Some(glyphs) if !glyphs.trim().is_empty() => glyphs.trim().chars().collect(),
            Some(glyphs) => {
                return Err(invalid("STYLIN_PLOT_GLYPHS", &glyphs, "at least one glyph is required"))
            }
            None => defaults.plot_glyphs,
        };

        Ok(Self {
            vocabulary_size: positive(&lookup, "STYLIN_VOCAB_SIZE", defaults.vocabulary_size)?,
            word_length_top: positive(&lookup, "STYLIN_WORD_LENGTH_TOP", defaults.word_length_top)?,
            stopword_top: positive(&lookup, "STYLIN_STOPWORD_TOP", defaults.stopword_top)?,
            pos_top: positive(&lookup, "STYLIN_POS_TOP", defaults.pos_top)?,
            language: lookup("STYLIN_LANGUAGE").unwrap_or(defaults.language),
            plot_glyphs,
            plot_width: positive(&lookup, "STYLIN_PLOT_WIDTH", defaults.plot_width)?,
        })
    }

    /// The engine's view of this configuration.
    pub fn analysis(&self) -> AnalysisConfig {
        AnalysisConfig {
            vocabulary_size: self.vocabulary_size,
            word_length_top: self.word_length_top,
            stopword_top: self.stopword_top,
            pos_top: self.pos_top,
        }
    }

    /// Chart styling for one reporting session.
    pub fn plot_style(&self) -> PlotStyle {
        PlotStyle {
            glyphs: self.plot_glyphs.clone(),
            bar_width: self.plot_width,
        }
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> StylinError {
    StylinError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a positive integer, falling back to `default` only when unset.
fn positive<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        Ok(_) => Err(invalid(key, &raw, "must be greater than zero")),
        Err(_) => Err(invalid(key, &raw, "not a number")),
    }
}
