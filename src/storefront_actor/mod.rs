//! # Storefront Actor
//!
//! The page state machine running inside a [`SessionActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`SessionEntity`](crate::framework::SessionEntity) implementation for [`StorefrontPage`]
//! - [`events`] - [`PageEvent`] and [`PageOutcome`], one variant per page interaction
//! - [`error`] - [`StorefrontError`]
//! - [`new()`] - creates the loop and its [`StorefrontClient`]
//!
//! ## Usage
//!
//! ```rust
//! use lavash_storefront::catalog::{Catalog, MenuItemId};
//! use lavash_storefront::model::PageOpen;
//! use lavash_storefront::storefront_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = storefront_actor::new(32);
//!     tokio::spawn(actor.run(Arc::new(Catalog::shawarma())));
//!
//!     let page = client.open_page(PageOpen::default()).await?;
//!     client.select_item(page, MenuItemId(1)).await?;
//!     assert_eq!(client.quote(page).await?.total, 350);
//!     Ok(())
//! }
//! ```
//!
//! The catalog is the loop's context: it is bound once at `run()` and shared by
//! every page.

pub mod entity;
pub mod error;
pub mod events;

pub use error::*;
pub use events::*;

use crate::clients::StorefrontClient;
use crate::framework::SessionActor;
use crate::model::StorefrontPage;

/// Creates a new storefront loop and its client.
pub fn new(mailbox_capacity: usize) -> (SessionActor<StorefrontPage>, StorefrontClient) {
    let (actor, generic_client) = SessionActor::new(mailbox_capacity);
    (actor, StorefrontClient::new(generic_client))
}
