//! Clarify engine: HTTP client for the question-answering backend and the
//! command/event bridge that keeps the core synchronous.
mod client;
mod engine;
mod types;

pub use client::{Backend, BackendSettings, HttpBackend};
pub use engine::EngineHandle;
pub use types::{BackendError, Book, EngineEvent, QueryOutcome};
