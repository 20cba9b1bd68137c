use std::sync::Once;

use clarify_core::{
    update, Book, ChatState, ConversationState, DispatchOutcome, Effect, Heuristics, Msg, Role,
    PAGE_PROMPT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chat_logging::initialize_for_tests);
}

fn ready_state(heuristics: &Heuristics) -> ChatState {
    let (state, _) = update(ChatState::new(), Msg::SessionStarted, heuristics);
    let books = vec![Book {
        id: "thermo".to_string(),
        name: "Thermodynamics".to_string(),
    }];
    let (state, _) = update(state, Msg::CatalogLoaded { books }, heuristics);
    let (state, _) = update(
        state,
        Msg::BookSelected {
            book_id: "thermo".to_string(),
        },
        heuristics,
    );
    state
}

fn submit(state: ChatState, input: &str, heuristics: &Heuristics) -> (ChatState, Vec<Effect>) {
    update(state, Msg::InputSubmitted(input.to_string()), heuristics)
}

fn completed(state: ChatState, outcome: DispatchOutcome, heuristics: &Heuristics) -> ChatState {
    let (state, effects) = update(state, Msg::QueryCompleted { outcome }, heuristics);
    assert!(effects.is_empty());
    state
}

#[test]
fn answer_appends_bot_message_and_clears_busy() {
    init_logging();
    let heuristics = Heuristics::default();
    let state = ready_state(&heuristics);
    let (state, _) = submit(state, "what is entropy", &heuristics);
    assert!(state.is_busy());

    let state = completed(
        state,
        DispatchOutcome::Answer("A measure of disorder.".to_string()),
        &heuristics,
    );

    assert!(!state.is_busy());
    assert_eq!(*state.conversation(), ConversationState::Normal);
    let messages = state.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].role, Role::Bot);
    assert_eq!(messages[1].content, "A measure of disorder.");
}

#[test]
fn page_required_overrides_local_classifier() {
    init_logging();
    let heuristics = Heuristics::default();
    let state = ready_state(&heuristics);
    // No image intent locally, so this dispatched straight away.
    let (state, effects) = submit(state, "what is entropy", &heuristics);
    assert_eq!(effects.len(), 1);

    let state = completed(state, DispatchOutcome::PageRequired, &heuristics);

    assert!(!state.is_busy());
    assert_eq!(
        *state.conversation(),
        ConversationState::AwaitingPage {
            pending_query: "what is entropy".to_string(),
        }
    );
    assert_eq!(state.messages()[1].content, PAGE_PROMPT);

    // The follow-up page number re-dispatches the original question.
    let (_state, effects) = submit(state, "page 42", &heuristics);
    assert_eq!(
        effects,
        vec![Effect::DispatchQuery {
            query: "what is entropy".to_string(),
            page_number: Some("42".to_string()),
            image_mode: false,
        }]
    );
}

#[test]
fn submission_while_busy_is_a_noop() {
    init_logging();
    let heuristics = Heuristics::default();
    let state = ready_state(&heuristics);
    let (state, _) = submit(state, "what is entropy", &heuristics);
    let before = state.clone();

    let (state, effects) = submit(state, "are you there?", &heuristics);

    assert_eq!(state, before);
    assert!(effects.is_empty());
}

#[test]
fn backend_error_preserves_the_pending_query() {
    init_logging();
    let heuristics = Heuristics::default();
    let state = ready_state(&heuristics);
    let (state, _) = update(state, Msg::ImageModeToggled, &heuristics);
    let (state, _) = submit(state, "describe this", &heuristics);
    let (state, _) = submit(state, "42", &heuristics);
    assert!(state.is_busy());

    let state = completed(
        state,
        DispatchOutcome::Failed("connection reset".to_string()),
        &heuristics,
    );

    // The error is surfaced verbatim and the page request survives, so the
    // user only has to resend the page number.
    assert!(!state.is_busy());
    let last = state.messages().last().expect("error message appended");
    assert_eq!(last.role, Role::Error);
    assert_eq!(last.content, "connection reset");
    assert_eq!(
        *state.conversation(),
        ConversationState::AwaitingPage {
            pending_query: "describe this".to_string(),
        }
    );

    let (_state, effects) = submit(state, "7", &heuristics);
    assert_eq!(
        effects,
        vec![Effect::DispatchQuery {
            query: "describe this".to_string(),
            page_number: Some("7".to_string()),
            image_mode: true,
        }]
    );
}

#[test]
fn backend_error_on_plain_dispatch_keeps_conversation() {
    init_logging();
    let heuristics = Heuristics::default();
    let state = ready_state(&heuristics);
    let (state, _) = submit(state, "what is entropy", &heuristics);

    let state = completed(
        state,
        DispatchOutcome::Failed("internal error".to_string()),
        &heuristics,
    );

    assert_eq!(*state.conversation(), ConversationState::Idle);
    assert_eq!(state.messages()[1].role, Role::Error);
}

#[test]
fn stray_completion_is_ignored() {
    init_logging();
    let heuristics = Heuristics::default();
    let state = ready_state(&heuristics);
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::QueryCompleted {
            outcome: DispatchOutcome::Answer("late".to_string()),
        },
        &heuristics,
    );

    assert_eq!(state, before);
    assert!(effects.is_empty());
}
