//! # System Lifecycle
//!
//! Starting, wiring and stopping the storefront.
//!
//! 1. **Create** - build the catalog and the page loop with its client
//! 2. **Inject** - hand the catalog to the loop through `run(context)`
//! 3. **Serve** - every page interaction goes through the client
//! 4. **Shut down** - drop the client, the loop drains its mailbox and exits
//!
//! Logging is set up separately with [`setup_tracing`], once per process.

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::*;
pub use tracing::*;
