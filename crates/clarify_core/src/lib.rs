//! Clarify core: pure dialogue state machine and page-reference heuristics.
mod classify;
mod effect;
mod extract;
mod heuristics;
mod lexicon;
mod message;
mod msg;
mod state;
mod update;
mod view_model;

pub use classify::ImageIntentClassifier;
pub use effect::Effect;
pub use extract::{Extraction, PageExtractor};
pub use heuristics::Heuristics;
pub use lexicon::{Lexicon, LexiconError, PagePattern};
pub use message::{Message, Role, PAGE_PROMPT, PAGE_REPROMPT};
pub use msg::{DispatchOutcome, Msg};
pub use state::{Book, CatalogState, ChatState, ConversationState};
pub use update::update;
pub use view_model::ChatViewModel;
