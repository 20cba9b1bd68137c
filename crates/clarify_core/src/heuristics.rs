use crate::classify::ImageIntentClassifier;
use crate::extract::PageExtractor;
use crate::lexicon::{Lexicon, LexiconError};

/// Compiled extractor and classifier handed to [`crate::update`] each turn.
///
/// Compiling once up front keeps `update` pure and keeps the state type
/// cheap to clone and compare.
#[derive(Debug, Clone)]
pub struct Heuristics {
    pub extractor: PageExtractor,
    pub classifier: ImageIntentClassifier,
}

impl Heuristics {
    pub fn compile(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        Ok(Self {
            extractor: PageExtractor::new(lexicon)?,
            classifier: ImageIntentClassifier::new(lexicon)?,
        })
    }
}

impl Default for Heuristics {
    fn default() -> Self {
        // The built-in lexicon is covered by tests.
        Self::compile(&Lexicon::default()).expect("default lexicon compiles")
    }
}
