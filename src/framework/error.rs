//! # Framework Errors
//!
//! Errors raised by the event loop plumbing itself, as opposed to the errors a
//! session reports about its own state.

/// Errors that can occur between a [`SessionClient`](crate::framework::SessionClient)
/// and its [`SessionActor`](crate::framework::SessionActor).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Event loop closed")]
    LoopClosed,
    #[error("Event loop dropped reply channel")]
    ReplyDropped,
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("Session error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
