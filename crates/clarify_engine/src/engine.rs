use std::sync::{mpsc, Arc};
use std::thread;

use chat_logging::chat_debug;

use crate::client::{Backend, BackendSettings, HttpBackend};
use crate::{BackendError, EngineEvent};

enum EngineCommand {
    FetchCatalog,
    SelectBook {
        book_id: String,
    },
    Dispatch {
        query: String,
        page_number: Option<String>,
        image_mode: bool,
    },
}

/// Handle to the IO thread. Commands are fire-and-forget; results come back
/// on the event receiver returned by [`EngineHandle::new`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Spawns the IO thread around an arbitrary backend implementation.
    pub fn new(backend: Arc<dyn Backend>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    /// Convenience constructor wiring up the HTTP backend.
    pub fn with_http(
        settings: BackendSettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), BackendError> {
        let backend = Arc::new(HttpBackend::new(settings)?);
        Ok(Self::new(backend))
    }

    pub fn fetch_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchCatalog);
    }

    pub fn select_book(&self, book_id: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::SelectBook {
            book_id: book_id.into(),
        });
    }

    pub fn dispatch(&self, query: impl Into<String>, page_number: Option<String>, image_mode: bool) {
        let _ = self.cmd_tx.send(EngineCommand::Dispatch {
            query: query.into(),
            page_number,
            image_mode,
        });
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchCatalog => {
            let result = backend.fetch_catalog().await;
            chat_debug!("catalog fetch finished ok={}", result.is_ok());
            let _ = event_tx.send(EngineEvent::CatalogFetched(result));
        }
        EngineCommand::SelectBook { book_id } => {
            let result = backend.select_book(&book_id).await;
            chat_debug!("select book {} ok={}", book_id, result.is_ok());
            let _ = event_tx.send(EngineEvent::BookSelected { book_id, result });
        }
        EngineCommand::Dispatch {
            query,
            page_number,
            image_mode,
        } => {
            let result = backend
                .dispatch_query(&query, page_number.as_deref(), image_mode)
                .await;
            chat_debug!(
                "query finished len={} page={:?} ok={}",
                query.len(),
                page_number,
                result.is_ok()
            );
            let _ = event_tx.send(EngineEvent::QueryFinished(result));
        }
    }
}
