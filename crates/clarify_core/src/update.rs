use crate::message::{Message, PAGE_PROMPT, PAGE_REPROMPT};
use crate::{
    CatalogState, ChatState, ConversationState, DispatchOutcome, Effect, Extraction, Heuristics,
    Msg,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ChatState, msg: Msg, heuristics: &Heuristics) -> (ChatState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => {
            state.set_catalog(CatalogState::Loading);
            vec![Effect::FetchCatalog]
        }
        Msg::InputSubmitted(raw) => {
            let input = raw.trim();
            // Blank submissions are rejected with no message and no state
            // change.
            if input.is_empty() {
                return (state, Vec::new());
            }
            // One dispatch in flight at a time: a submission while busy is
            // rejected without touching the log or the state.
            if state.is_busy() {
                return (state, Vec::new());
            }
            // Until the catalog is ready the presentation disables input and
            // shows the banner; anything that slips through is dropped.
            if !matches!(state.catalog(), CatalogState::Ready { .. }) {
                return (state, Vec::new());
            }
            state.push_message(Message::user(input));
            submit_turn(&mut state, input, heuristics)
        }
        Msg::ImageModeToggled => {
            state.toggle_image_mode();
            // Toggling cancels an unresolved page request outright.
            if matches!(state.conversation(), ConversationState::AwaitingPage { .. }) {
                state.set_conversation(ConversationState::Normal);
            }
            Vec::new()
        }
        Msg::CatalogLoaded { books } => {
            if books.is_empty() {
                state.set_catalog(CatalogState::Unavailable {
                    message: "No books available on the server".to_string(),
                });
                Vec::new()
            } else {
                let book_id = books[0].id.clone();
                state.set_catalog(CatalogState::Selecting { books });
                vec![Effect::SelectBook { book_id }]
            }
        }
        Msg::CatalogFailed { message } => {
            state.set_catalog(CatalogState::Unavailable { message });
            Vec::new()
        }
        Msg::BookSelected { book_id } => {
            if let CatalogState::Selecting { books } = state.catalog().clone() {
                let active = books
                    .iter()
                    .position(|book| book.id == book_id)
                    .unwrap_or(0);
                state.set_catalog(CatalogState::Ready { books, active });
            }
            Vec::new()
        }
        Msg::BookSelectFailed { message } => {
            state.set_catalog(CatalogState::Unavailable { message });
            Vec::new()
        }
        Msg::RetryConnect => {
            if matches!(state.catalog(), CatalogState::Ready { .. }) {
                Vec::new()
            } else {
                state.set_catalog(CatalogState::Loading);
                vec![Effect::FetchCatalog]
            }
        }
        Msg::QueryCompleted { outcome } => {
            let Some(in_flight) = state.take_in_flight() else {
                // Stray completion; nothing was dispatched.
                return (state, Vec::new());
            };
            match outcome {
                DispatchOutcome::Answer(text) => {
                    state.push_message(Message::bot(text));
                    state.set_conversation(ConversationState::Normal);
                }
                DispatchOutcome::PageRequired => {
                    // The backend is the authority of last resort, even when
                    // the local classifier predicted no image intent.
                    state.push_message(Message::bot(PAGE_PROMPT));
                    state.set_conversation(ConversationState::AwaitingPage {
                        pending_query: in_flight.query,
                    });
                }
                DispatchOutcome::Failed(message) => {
                    state.push_message(Message::error(message));
                    // Restore the pre-dispatch phase so a pending query
                    // survives and the user does not have to repeat it.
                    state.set_conversation(in_flight.resume);
                }
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Per-turn transition for an accepted, non-blank submission.
fn submit_turn(state: &mut ChatState, input: &str, heuristics: &Heuristics) -> Vec<Effect> {
    if let ConversationState::AwaitingPage { pending_query } = state.conversation().clone() {
        return match heuristics.extractor.extract(input) {
            Extraction::Found(page) => dispatch(state, pending_query, Some(page)),
            Extraction::NotFound => {
                state.push_message(Message::bot(PAGE_REPROMPT));
                Vec::new()
            }
        };
    }

    if state.image_mode() {
        return match heuristics.extractor.extract(input) {
            Extraction::Found(page) => dispatch(state, input.to_string(), Some(page)),
            Extraction::NotFound => {
                ask_for_page(state, input);
                Vec::new()
            }
        };
    }

    if heuristics.classifier.classify(input)
        && heuristics.extractor.extract(input) == Extraction::NotFound
    {
        ask_for_page(state, input);
        return Vec::new();
    }

    dispatch(state, input.to_string(), None)
}

fn ask_for_page(state: &mut ChatState, query: &str) {
    state.push_message(Message::bot(PAGE_PROMPT));
    // Overwrites any unresolved page request; requests never queue.
    state.set_conversation(ConversationState::AwaitingPage {
        pending_query: query.to_string(),
    });
}

fn dispatch(state: &mut ChatState, query: String, page_number: Option<String>) -> Vec<Effect> {
    // Capture the current phase first so a failed dispatch can restore it.
    state.begin_dispatch(query.clone());
    state.set_conversation(ConversationState::Normal);
    vec![Effect::DispatchQuery {
        query,
        page_number,
        image_mode: state.image_mode(),
    }]
}
