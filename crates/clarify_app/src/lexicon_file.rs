//! Optional lexicon override file.
//!
//! The heuristic vocabulary ships with built-in defaults; a RON file next to
//! the binary can replace any of the three lists, so new languages are a
//! configuration change rather than a code change.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clarify_core::{Lexicon, PagePattern};
use serde::Deserialize;

pub const LEXICON_FILENAME: &str = "clarify_lexicon.ron";

#[derive(Debug, Clone, Deserialize, Default)]
struct LexiconFile {
    /// `(label, regex with one digit capture)` pairs, in priority order.
    #[serde(default)]
    page_patterns: Vec<(String, String)>,
    #[serde(default)]
    indicators: Vec<String>,
    #[serde(default)]
    image_markers: Vec<String>,
}

/// Loads the lexicon, falling back to the built-in set when the file is
/// absent. Lists left empty in the file keep their defaults; a broken file
/// is a startup error so a typo does not silently disable the heuristics.
pub fn load_lexicon(path: &Path) -> anyhow::Result<Lexicon> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Lexicon::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading lexicon file {}", path.display()));
        }
    };
    let file: LexiconFile = ron::from_str(&content)
        .with_context(|| format!("parsing lexicon file {}", path.display()))?;

    let defaults = Lexicon::default();
    Ok(Lexicon {
        page_patterns: if file.page_patterns.is_empty() {
            defaults.page_patterns
        } else {
            file.page_patterns
                .into_iter()
                .map(|(label, pattern)| PagePattern::new(label, pattern))
                .collect()
        },
        indicators: if file.indicators.is_empty() {
            defaults.indicators
        } else {
            file.indicators
        },
        image_markers: if file.image_markers.is_empty() {
            defaults.image_markers
        } else {
            file.image_markers
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let lexicon = load_lexicon(&dir.path().join("nope.ron")).expect("defaults");
        assert_eq!(lexicon, Lexicon::default());
    }

    #[test]
    fn override_replaces_only_the_given_lists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(LEXICON_FILENAME);
        fs::write(
            &path,
            r#"(
    image_markers: ["bild", "abbildung"],
)"#,
        )
        .expect("write lexicon");

        let lexicon = load_lexicon(&path).expect("parses");
        assert_eq!(
            lexicon.image_markers,
            vec!["bild".to_string(), "abbildung".to_string()]
        );
        assert_eq!(lexicon.page_patterns, Lexicon::default().page_patterns);
        assert_eq!(lexicon.indicators, Lexicon::default().indicators);
    }

    #[test]
    fn broken_file_is_a_startup_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(LEXICON_FILENAME);
        fs::write(&path, "not ron at all (").expect("write lexicon");

        assert!(load_lexicon(&path).is_err());
    }
}
