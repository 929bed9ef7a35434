//! Error types for the storefront page.

use crate::catalog::MenuItemId;
use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors a page interaction can fail with.
///
/// A submission with empty fields is *not* one of these: it is an ordinary
/// outcome carrying an error notification.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorefrontError {
    /// The id does not name a catalog item.
    #[error("Menu item not found: {0}")]
    UnknownMenuItem(MenuItemId),

    /// Add-ons and sizes can only change while an item is selected.
    #[error("No menu item selected")]
    NoItemSelected,

    /// A size was chosen for a fixed-price item.
    #[error("Menu item {0} has no size options")]
    SizeNotOffered(MenuItemId),

    /// The page session does not exist (never opened, or already closed).
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// The loop answered an event with an outcome of a different kind.
    #[error("Unexpected outcome: {0}")]
    UnexpectedOutcome(String),

    /// An error occurred while communicating with the page loop.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StorefrontError {
    fn from(msg: String) -> Self {
        StorefrontError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for StorefrontError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::SessionNotFound(id) => StorefrontError::PageNotFound(id),
            FrameworkError::Entity(inner) => match inner.downcast::<StorefrontError>() {
                Ok(err) => *err,
                Err(other) => StorefrontError::ActorCommunicationError(other.to_string()),
            },
            other => StorefrontError::ActorCommunicationError(other.to_string()),
        }
    }
}
