use std::fmt;

/// Ordered keyword configuration for the extractor and the classifier.
///
/// The heuristic vocabulary is data, not logic: new languages are added by
/// extending these lists or loading a replacement lexicon, without touching
/// the matching algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    /// Labeled page patterns, tried in priority order. Each pattern must
    /// contain exactly one capture group for the digit run.
    pub page_patterns: Vec<PagePattern>,
    /// Indicator words for the proximity fallback, tried in order against
    /// the lower-cased text.
    pub indicators: Vec<String>,
    /// Stems whose presence marks a question as image-intent.
    pub image_markers: Vec<String>,
}

/// One labeled regular expression of the specific-pattern tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePattern {
    pub label: String,
    pub pattern: String,
}

impl PagePattern {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            page_patterns: vec![
                PagePattern::new("page", r"(?i)\bpage\s*(\d+)"),
                PagePattern::new("pagina", r"(?i)\bpagina\s*(\d+)"),
                PagePattern::new("pg", r"(?i)\bpg\.?\s*(\d+)"),
                PagePattern::new("p.", r"(?i)\bp\.\s*(\d+)"),
                PagePattern::new("figure", r"(?i)\bfigure\s*(\d+)"),
                PagePattern::new("figura", r"(?i)\bfigura\s*(\d+)"),
                PagePattern::new("fig", r"(?i)\bfig\.?\s*(\d+)"),
                PagePattern::new("image", r"(?i)\bimage\s*(\d+)"),
                PagePattern::new("immagine", r"(?i)\bimmagine\s*(\d+)"),
                PagePattern::new("number", r"(?i)\bnumber\s*(\d+)"),
                PagePattern::new("numero", r"(?i)\bnumero\s*(\d+)"),
                PagePattern::new("n.", r"(?i)\bn\.\s*(\d+)"),
            ],
            indicators: [
                "page", "pagina", "pg", "p", "figure", "figura", "fig", "image", "immagine",
                "number", "numero",
            ]
            .map(String::from)
            .to_vec(),
            image_markers: [
                "immag", "image", "picture", "figur", "diagram", "schem", "chart", "graph",
                "grafic", "photo", "foto",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

/// Error compiling a lexicon entry into a usable matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconError {
    /// Label of the offending pattern, or the marker text itself.
    pub label: String,
    pub message: String,
}

impl LexiconError {
    pub(crate) fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid lexicon entry {:?}: {}", self.label, self.message)
    }
}

impl std::error::Error for LexiconError {}
