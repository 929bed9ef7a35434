use crate::catalog::Catalog;
use crate::clients::StorefrontClient;
use crate::config::StorefrontConfig;
use std::sync::Arc;
use tracing::{error, info};

/// Starts, wires and stops the storefront.
///
/// `StorefrontSystem` is responsible for:
/// - **Catalog**: building the configured catalog once and sharing it read-only
/// - **Lifecycle**: spawning the page loop with the catalog as its context
/// - **Shutdown**: closing the loop and waiting for it to drain
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(StorefrontConfig::default());
/// let page = system.storefront_client.open_page(PageOpen::default()).await?;
/// system.storefront_client.select_item(page, MenuItemId(1)).await?;
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for interacting with page sessions.
    pub storefront_client: StorefrontClient,

    catalog: Arc<Catalog>,

    /// Page loop task, awaited on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Builds the catalog and spawns the page loop. Must be called inside a
    /// Tokio runtime.
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Arc::new(Catalog::for_variant(config.catalog));
        info!(
            catalog = ?config.catalog,
            items = catalog.items.len(),
            addons = catalog.addons.len(),
            "Starting storefront"
        );

        let (page_actor, storefront_client) = crate::storefront_actor::new(config.mailbox_capacity);
        let handle = tokio::spawn(page_actor.run(catalog.clone()));

        Self {
            storefront_client,
            catalog,
            handle,
        }
    }

    /// The catalog every page prices against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Gracefully shuts down the storefront.
    ///
    /// Dropping the client closes the loop's mailbox; the loop finishes the
    /// requests already queued and exits. Clones of the client handed out
    /// earlier keep the loop alive until they are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.storefront_client);

        if let Err(e) = self.handle.await {
            error!("Page loop failed: {:?}", e);
            return Err(format!("Page loop failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
