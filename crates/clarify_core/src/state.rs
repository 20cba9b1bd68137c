use crate::message::Message;
use crate::view_model::ChatViewModel;

/// Conversation phase driving per-turn interpretation of user input.
///
/// Exactly one phase is active at a time; a new page request overwrites an
/// unresolved one, it never queues.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConversationState {
    /// No successful exchange yet.
    #[default]
    Idle,
    /// At least one query has been dispatched.
    Normal,
    /// A query needs a page reference; the next turn is read as the answer
    /// to the page prompt.
    AwaitingPage { pending_query: String },
}

/// Catalog entry supplied by the backend. Opaque context: the core passes it
/// through and never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub name: String,
}

/// Bootstrap status of the backend catalog, separate from the per-turn
/// message log. `Unavailable` is the persistent, user-retryable banner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    /// Catalog fetched; the active book selection is still in flight.
    Selecting { books: Vec<Book> },
    Ready { books: Vec<Book>, active: usize },
    Unavailable { message: String },
}

/// A dispatched query waiting for its backend reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InFlight {
    /// Query text as sent, echoed back if the backend demands a page.
    pub query: String,
    /// Conversation phase to restore if the dispatch fails.
    pub resume: ConversationState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    conversation: ConversationState,
    image_mode: bool,
    catalog: CatalogState,
    in_flight: Option<InFlight>,
    dirty: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ChatViewModel {
        let (books, active_book) = match &self.catalog {
            CatalogState::Ready { books, active } => {
                (books.clone(), books.get(*active).cloned())
            }
            CatalogState::Selecting { books } => (books.clone(), None),
            _ => (Vec::new(), None),
        };
        let banner = match &self.catalog {
            CatalogState::Unavailable { message } => Some(message.clone()),
            _ => None,
        };
        ChatViewModel {
            messages: self.messages.clone(),
            conversation: self.conversation.clone(),
            image_mode: self.image_mode,
            busy: self.is_busy(),
            input_enabled: !self.is_busy()
                && matches!(self.catalog, CatalogState::Ready { .. }),
            banner,
            books,
            active_book,
            dirty: self.dirty,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn image_mode(&self) -> bool {
        self.image_mode
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The busy flag: true while a dispatch is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn push_message(&mut self, message: Message) {
        self.messages.push(message);
        self.dirty = true;
    }

    pub(crate) fn set_conversation(&mut self, conversation: ConversationState) {
        if self.conversation != conversation {
            self.conversation = conversation;
            self.dirty = true;
        }
    }

    pub(crate) fn set_catalog(&mut self, catalog: CatalogState) {
        if self.catalog != catalog {
            self.catalog = catalog;
            self.dirty = true;
        }
    }

    pub(crate) fn toggle_image_mode(&mut self) {
        self.image_mode = !self.image_mode;
        self.dirty = true;
    }

    pub(crate) fn begin_dispatch(&mut self, query: String) {
        self.in_flight = Some(InFlight {
            query,
            resume: self.conversation.clone(),
        });
        self.dirty = true;
    }

    pub(crate) fn take_in_flight(&mut self) -> Option<InFlight> {
        let taken = self.in_flight.take();
        if taken.is_some() {
            self.dirty = true;
        }
        taken
    }
}
