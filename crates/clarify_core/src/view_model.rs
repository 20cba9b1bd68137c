use crate::message::Message;
use crate::state::{Book, ConversationState};

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    /// Full chat log, chronological.
    pub messages: Vec<Message>,
    pub conversation: ConversationState,
    pub image_mode: bool,
    /// True while a dispatch is outstanding.
    pub busy: bool,
    /// Input affordances should be disabled unless this is true.
    pub input_enabled: bool,
    /// Catalog failure banner; persists until a retry succeeds.
    pub banner: Option<String>,
    pub books: Vec<Book>,
    pub active_book: Option<Book>,
    pub dirty: bool,
}
