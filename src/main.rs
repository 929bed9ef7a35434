//! Demo run of the storefront: one shopper picks an item, adds extras, forgets
//! the phone number, then places the order.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! STOREFRONT_CATALOG=sized RUST_LOG=debug cargo run
//! ```

use lavash_storefront::catalog::{AddonId, MenuItemId, Size};
use lavash_storefront::clients::PageClient;
use lavash_storefront::config::StorefrontConfig;
use lavash_storefront::lifecycle::{setup_tracing, StorefrontSystem};
use lavash_storefront::model::{FormField, PageOpen, Section};
use lavash_storefront::pricing::format_rubles;
use lavash_storefront::storefront_actor::{StorefrontError, Submission};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env();
    info!(?config, "Starting storefront demo");

    let system = StorefrontSystem::new(config);
    let client = system.storefront_client.clone();

    for item in &system.catalog().items {
        info!(item = %item.id, name = %item.name, price = %item.display_price(), "Menu");
    }

    let page = client
        .open_page(PageOpen { entry: Section::Hero })
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("selection", %page);
    async {
        client.navigate(page, Section::Menu).await?;
        let selection = client.select_item(page, MenuItemId(1)).await?;
        if selection.size.is_some() {
            let total = client.choose_size(page, Size::Large).await?;
            info!(total = %format_rubles(total), "Size chosen");
        }
        client.toggle_addon(page, AddonId(1)).await?;
        client.toggle_addon(page, AddonId(4)).await?;

        let quote = client.quote(page).await?;
        info!(
            base = quote.base,
            addons = quote.addons,
            delivery = quote.delivery,
            total = %format_rubles(quote.total),
            "Quote"
        );
        Ok::<_, StorefrontError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("checkout", %page);
    let submission = async {
        client.edit_field(page, FormField::Name, "Алексей").await?;
        client
            .edit_field(page, FormField::Address, "ул. Пушкина, д. 10, кв. 5")
            .await?;

        let first = client.submit(page).await?;
        warn!(notice = %first.notification().message, "First attempt");

        client.edit_field(page, FormField::Phone, "+7 999 123-45-67").await?;
        client.submit(page).await
    }
    .instrument(span)
    .await;

    match submission {
        Ok(Submission::Accepted { order, notification }) => info!(
            item = %order.item_name,
            addons = ?order.addons,
            total = %format_rubles(order.total()),
            notice = %notification.message,
            "Order placed"
        ),
        Ok(rejected) => warn!(notice = %rejected.notification().message, "Order not placed"),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    client.close_page(page).await.map_err(|e| e.to_string())?;
    drop(client);
    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
