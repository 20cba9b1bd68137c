use regex::Regex;

use crate::lexicon::{Lexicon, LexiconError};

/// Result of scanning free text for a page reference.
///
/// The digit run is kept verbatim as a string: no numeric parsing, so
/// leading zeros and arbitrary length survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(String),
    NotFound,
}

/// Two-tier page number extractor.
///
/// Tier one tries the lexicon's labeled patterns in priority order and
/// returns the first captured digit group. Tier two falls back to standalone
/// digit runs, disambiguated by proximity to the first indicator word that
/// occurs in the text. Pure and deterministic.
#[derive(Debug, Clone)]
pub struct PageExtractor {
    patterns: Vec<(String, Regex)>,
    indicators: Vec<String>,
    digit_run: Regex,
}

impl PageExtractor {
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let mut patterns = Vec::with_capacity(lexicon.page_patterns.len());
        for entry in &lexicon.page_patterns {
            let regex = Regex::new(&entry.pattern)
                .map_err(|err| LexiconError::new(&entry.label, err.to_string()))?;
            patterns.push((entry.label.clone(), regex));
        }
        // Fixed pattern, known valid.
        let digit_run = Regex::new(r"\b\d+\b").expect("digit run pattern");
        Ok(Self {
            patterns,
            indicators: lexicon.indicators.clone(),
            digit_run,
        })
    }

    pub fn extract(&self, text: &str) -> Extraction {
        for (_label, regex) in &self.patterns {
            if let Some(captures) = regex.captures(text) {
                if let Some(group) = captures.get(1) {
                    return Extraction::Found(group.as_str().to_string());
                }
            }
        }
        self.extract_generic(text)
    }

    /// Generic-number fallback: zero runs is a miss, one run wins outright,
    /// several runs are disambiguated by indicator proximity.
    fn extract_generic(&self, text: &str) -> Extraction {
        // Digit runs are unaffected by lower-casing, so offsets of runs and
        // indicators are computed against the same string.
        let lowered = text.to_lowercase();
        let runs: Vec<(usize, &str)> = self
            .digit_run
            .find_iter(&lowered)
            .map(|m| (m.start(), m.as_str()))
            .collect();

        match runs.as_slice() {
            [] => Extraction::NotFound,
            [(_, only)] => Extraction::Found((*only).to_string()),
            _ => {
                for indicator in &self.indicators {
                    if let Some(anchor) = lowered.find(indicator.as_str()) {
                        // min_by_key keeps the first minimum, so ties break
                        // toward reading order.
                        let nearest = runs
                            .iter()
                            .min_by_key(|(start, _)| start.abs_diff(anchor))
                            .map(|(_, run)| (*run).to_string());
                        return match nearest {
                            Some(run) => Extraction::Found(run),
                            None => Extraction::NotFound,
                        };
                    }
                }
                // No indicator word at all: keep the first run in reading
                // order, even when an earlier unrelated number exists.
                Extraction::Found(runs[0].1.to_string())
            }
        }
    }
}
