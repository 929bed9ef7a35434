//! # SessionEntity Trait
//!
//! The contract every page-like session must satisfy to be driven by the generic
//! [`SessionActor`](crate::framework::SessionActor). A session is opened once, then
//! receives a stream of interaction events, each answered with a typed outcome, and
//! is finally closed.
//!
//! Associated types keep the wiring honest: a storefront page only accepts
//! storefront events and only ever answers with storefront outcomes.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any session state must implement to be owned by a [`SessionActor`](crate::framework::SessionActor).
///
/// # Async & Context
/// Hooks are `#[async_trait]` so a session can await collaborators if it ever needs
/// them. The `Context` is injected into every hook by `run()`, which lets the
/// read-only data a session depends on (the catalog, for the storefront) be bound
/// when the loop starts rather than when the actor is constructed.
#[async_trait]
pub trait SessionEntity: Clone + Send + Sync + 'static {
    /// Session identifier. Built from the loop's `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Parameters used to open a new session.
    type Open: Send + Sync + Debug;

    /// Interaction events delivered to an open session.
    type Event: Send + Sync + Debug;

    /// What an event handler answers with.
    type Outcome: Send + Sync + Debug;

    /// Read-only dependencies injected into the loop. Use `()` for none.
    type Context: Send + Sync;

    /// The session's error type. Boxed into
    /// [`FrameworkError::Entity`](crate::framework::FrameworkError::Entity) on the way out.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the session from its id and open parameters.
    /// Called synchronously before `on_open`.
    fn from_open_params(id: Self::Id, params: Self::Open) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called right after the session is built, before it is stored.
    async fn on_open(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one interaction event.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Called right before the session is dropped from the loop.
    async fn on_close(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
