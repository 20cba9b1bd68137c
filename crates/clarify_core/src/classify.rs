use regex::Regex;

use crate::lexicon::{Lexicon, LexiconError};

/// Case-insensitive image-intent matcher over the lexicon's marker stems.
///
/// Returns true on the first stem found anywhere in the text. Pure, total,
/// no side effects.
#[derive(Debug, Clone)]
pub struct ImageIntentClassifier {
    markers: Option<Regex>,
}

impl ImageIntentClassifier {
    pub fn new(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        if lexicon.image_markers.is_empty() {
            return Ok(Self { markers: None });
        }
        let alternation = lexicon
            .image_markers
            .iter()
            .map(|stem| regex::escape(stem))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("(?i){alternation}");
        let markers = Regex::new(&pattern)
            .map_err(|err| LexiconError::new("image_markers", err.to_string()))?;
        Ok(Self {
            markers: Some(markers),
        })
    }

    pub fn classify(&self, text: &str) -> bool {
        self.markers
            .as_ref()
            .is_some_and(|markers| markers.is_match(text))
    }
}
