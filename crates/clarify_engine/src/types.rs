use serde::Deserialize;

/// Catalog entry as served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    pub id: String,
    pub name: String,
}

/// Reply to a dispatched query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// `status: "success"` with the rendered answer.
    Answered { response: String },
    /// `status: "page_required"`: the backend cannot answer without a page
    /// reference.
    PageRequired,
    /// `status: "error"`. Not a transport failure; the message is meant for
    /// the chat log verbatim.
    Failed { message: String },
}

/// Transport and contract failures talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("unexpected payload: {0}")]
    BadPayload(String),
    /// An error reply carrying a server-side message (catalog or book
    /// selection).
    #[error("{message}")]
    Api { message: String },
}

/// Events flowing back from the engine thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CatalogFetched(Result<Vec<Book>, BackendError>),
    BookSelected {
        book_id: String,
        result: Result<(), BackendError>,
    },
    QueryFinished(Result<QueryOutcome, BackendError>),
}
