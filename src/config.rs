//! Runtime configuration.
//!
//! Everything has a default, so the storefront starts without any environment.
//! `RUST_LOG` is read separately by [`setup_tracing`](crate::lifecycle::setup_tracing).
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `STOREFRONT_CATALOG` | `shawarma`, `sized` | `shawarma` |
//! | `STOREFRONT_MAILBOX_CAPACITY` | positive integer | `32` |

use crate::catalog::CatalogVariant;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const MAILBOX_CAPACITY_VAR: &str = "STOREFRONT_MAILBOX_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub catalog: CatalogVariant,
    /// Bound of the page loop's mailbox.
    pub mailbox_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogVariant::default(),
            mailbox_capacity: 32,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unparseable values are
    /// logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CATALOG_VAR) {
            match raw.parse() {
                Ok(variant) => config.catalog = variant,
                Err(error) => warn!(var = CATALOG_VAR, %error, "Ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(MAILBOX_CAPACITY_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.mailbox_capacity = capacity,
                _ => warn!(var = MAILBOX_CAPACITY_VAR, value = %raw, "Ignoring invalid value"),
            }
        }

        config
    }

    pub fn with_catalog(mut self, catalog: CatalogVariant) -> Self {
        self.catalog = catalog;
        self
    }
}
