//! Generic session event loop.
//!
//! The building blocks the storefront runs on, kept independent of any page logic:
//!
//! - [`SessionEntity`] - trait a session state implements to be driven by the loop
//! - [`SessionActor`] - sequential loop that owns every open session
//! - [`SessionClient`] - cloneable handle that sends requests into the loop
//! - [`FrameworkError`] - plumbing errors (closed loop, unknown session, boxed entity error)
//!
//! See [`mock`] for testing client wrappers without spawning a loop.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use entity::SessionEntity;
pub use error::FrameworkError;
pub use message::{Reply, SessionRequest};
