//! Type-safe wrappers around [`SessionClient`](crate::framework::SessionClient).

pub mod page_client;
pub mod storefront_client;

pub use page_client::*;
pub use storefront_client::*;
