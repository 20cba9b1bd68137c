use std::sync::mpsc;
use std::thread;

use chat_logging::{chat_info, chat_warn};
use clarify_core::{Book, DispatchOutcome, Effect, Msg};
use clarify_engine::{
    BackendError, BackendSettings, EngineEvent, EngineHandle, QueryOutcome,
};

/// Executes core effects against the engine and pumps engine events back as
/// core messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: BackendSettings, msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let (engine, event_rx) = EngineHandle::with_http(settings)?;
        spawn_event_pump(event_rx, msg_tx);
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchCatalog => {
                    chat_info!("fetching catalog");
                    self.engine.fetch_catalog();
                }
                Effect::SelectBook { book_id } => {
                    chat_info!("selecting book {}", book_id);
                    self.engine.select_book(book_id);
                }
                Effect::DispatchQuery {
                    query,
                    page_number,
                    image_mode,
                } => {
                    chat_info!(
                        "turn {}: dispatch query_len={} page={:?} image_mode={}",
                        chat_logging::current_turn(),
                        query.len(),
                        page_number,
                        image_mode
                    );
                    self.engine.dispatch(query, page_number, image_mode);
                }
            }
        }
    }
}

fn spawn_event_pump(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
        }
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogFetched(Ok(books)) => Msg::CatalogLoaded {
            books: books.into_iter().map(map_book).collect(),
        },
        EngineEvent::CatalogFetched(Err(err)) => {
            chat_warn!("catalog fetch failed: {}", err);
            Msg::CatalogFailed {
                message: err.to_string(),
            }
        }
        EngineEvent::BookSelected {
            book_id,
            result: Ok(()),
        } => Msg::BookSelected { book_id },
        EngineEvent::BookSelected {
            book_id,
            result: Err(err),
        } => {
            chat_warn!("selecting book {} failed: {}", book_id, err);
            Msg::BookSelectFailed {
                message: err.to_string(),
            }
        }
        EngineEvent::QueryFinished(result) => Msg::QueryCompleted {
            outcome: map_outcome(result),
        },
    }
}

fn map_book(book: clarify_engine::Book) -> Book {
    Book {
        id: book.id,
        name: book.name,
    }
}

fn map_outcome(result: Result<QueryOutcome, BackendError>) -> DispatchOutcome {
    match result {
        Ok(QueryOutcome::Answered { response }) => DispatchOutcome::Answer(response),
        Ok(QueryOutcome::PageRequired) => DispatchOutcome::PageRequired,
        Ok(QueryOutcome::Failed { message }) => DispatchOutcome::Failed(message),
        Err(err) => {
            chat_warn!("query transport failure: {}", err);
            DispatchOutcome::Failed(err.to_string())
        }
    }
}
