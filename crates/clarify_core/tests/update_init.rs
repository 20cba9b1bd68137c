use std::sync::Once;

use clarify_core::{
    update, Book, CatalogState, ChatState, Effect, Heuristics, Msg,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chat_logging::initialize_for_tests);
}

fn books() -> Vec<Book> {
    vec![
        Book {
            id: "thermo".to_string(),
            name: "Thermodynamics".to_string(),
        },
        Book {
            id: "nets".to_string(),
            name: "Computer Networks".to_string(),
        },
    ]
}

#[test]
fn session_start_fetches_catalog_and_disables_input() {
    init_logging();
    let heuristics = Heuristics::default();

    let (state, effects) = update(ChatState::new(), Msg::SessionStarted, &heuristics);

    assert_eq!(effects, vec![Effect::FetchCatalog]);
    assert_eq!(*state.catalog(), CatalogState::Loading);
    assert!(!state.view().input_enabled);
}

#[test]
fn first_book_is_selected_automatically() {
    init_logging();
    let heuristics = Heuristics::default();
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, &heuristics);

    let (state, effects) = update(state, Msg::CatalogLoaded { books: books() }, &heuristics);

    assert_eq!(
        effects,
        vec![Effect::SelectBook {
            book_id: "thermo".to_string(),
        }]
    );
    // Input stays disabled until the selection is acknowledged.
    assert!(!state.view().input_enabled);

    let (state, effects) = update(
        state,
        Msg::BookSelected {
            book_id: "thermo".to_string(),
        },
        &heuristics,
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.input_enabled);
    assert_eq!(view.books.len(), 2);
    assert_eq!(view.active_book.expect("active book").id, "thermo");
    assert!(view.banner.is_none());
}

#[test]
fn empty_catalog_becomes_unavailable_banner() {
    init_logging();
    let heuristics = Heuristics::default();
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, &heuristics);

    let (state, effects) = update(state, Msg::CatalogLoaded { books: Vec::new() }, &heuristics);

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.input_enabled);
    assert!(view.banner.is_some());
}

#[test]
fn catalog_failure_is_retryable() {
    init_logging();
    let heuristics = Heuristics::default();
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, &heuristics);
    let (state, _) = update(
        state,
        Msg::CatalogFailed {
            message: "connection timed out".to_string(),
        },
        &heuristics,
    );

    let view = state.view();
    assert_eq!(view.banner.as_deref(), Some("connection timed out"));
    assert!(view.messages.is_empty());

    let (state, effects) = update(state, Msg::RetryConnect, &heuristics);
    assert_eq!(effects, vec![Effect::FetchCatalog]);
    assert_eq!(*state.catalog(), CatalogState::Loading);
}

#[test]
fn book_select_failure_is_surfaced_as_banner() {
    init_logging();
    let heuristics = Heuristics::default();
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, &heuristics);
    let (state, _) = update(state, Msg::CatalogLoaded { books: books() }, &heuristics);

    let (state, _) = update(
        state,
        Msg::BookSelectFailed {
            message: "book not available".to_string(),
        },
        &heuristics,
    );

    assert_eq!(state.view().banner.as_deref(), Some("book not available"));
}

#[test]
fn retry_while_ready_does_nothing() {
    init_logging();
    let heuristics = Heuristics::default();
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, &heuristics);
    let (state, _) = update(state, Msg::CatalogLoaded { books: books() }, &heuristics);
    let (state, _) = update(
        state,
        Msg::BookSelected {
            book_id: "thermo".to_string(),
        },
        &heuristics,
    );

    let (state, effects) = update(state, Msg::RetryConnect, &heuristics);

    assert!(effects.is_empty());
    assert!(matches!(state.catalog(), CatalogState::Ready { .. }));
}

#[test]
fn submission_before_ready_is_rejected() {
    init_logging();
    let heuristics = Heuristics::default();
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, &heuristics);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::InputSubmitted("what is entropy".to_string()),
        &heuristics,
    );

    assert_eq!(state, before);
    assert!(effects.is_empty());
}
