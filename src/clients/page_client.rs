//! # PageClient Trait
//!
//! Shared read/close operations for session-specific clients, built on top of a
//! generic [`SessionClient`].

use crate::framework::{FrameworkError, SessionClient, SessionEntity};
use async_trait::async_trait;

/// Trait for session-specific clients to inherit the standard read and close calls.
#[async_trait]
pub trait PageClient<T: SessionEntity>: Send + Sync {
    /// The session-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &SessionClient<T>;

    /// Map loop errors to the session-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Current state of a session, or `None` if it is not open.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot(id).await.map_err(Self::map_error)
    }

    /// Close a session.
    #[tracing::instrument(skip(self))]
    async fn close_page(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }
}
