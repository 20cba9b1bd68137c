#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session start; triggers the catalog fetch.
    SessionStarted,
    /// Raw text the user submitted.
    InputSubmitted(String),
    /// User toggled the image mode flag.
    ImageModeToggled,
    /// Catalog fetch finished with a book list.
    CatalogLoaded { books: Vec<crate::Book> },
    /// Catalog fetch failed or timed out.
    CatalogFailed { message: String },
    /// Backend acknowledged the active book selection.
    BookSelected { book_id: String },
    /// Active book selection failed.
    BookSelectFailed { message: String },
    /// User asked to retry the backend connection.
    RetryConnect,
    /// A dispatched query resolved.
    QueryCompleted { outcome: DispatchOutcome },
    /// Fallback for placeholder wiring.
    NoOp,
}

/// Backend reply for a dispatched query, folded to one shape by the effect
/// runner (transport failures land in `Failed` too).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// `status: success` with the answer text.
    Answer(String),
    /// `status: page_required`; the backend is the authority of last resort.
    PageRequired,
    /// `status: error` or a transport failure, message kept verbatim.
    Failed(String),
}
