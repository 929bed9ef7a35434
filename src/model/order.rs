//! An accepted order, as it would be handed to the ordering backend.
//!
//! Nothing stores or transmits it yet: a successful submission logs it and
//! returns it to the caller.

use crate::catalog::{Catalog, MenuItemId, Size};
use crate::model::{OrderForm, Selection};
use crate::pricing::{self, PriceBreakdown};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub item: MenuItemId,
    pub item_name: String,
    pub size: Option<Size>,
    /// Names of the chosen add-ons that exist in the catalog.
    pub addons: Vec<String>,
    pub price: PriceBreakdown,
    pub contact: OrderForm,
}

impl OrderRequest {
    /// Builds the request from a selection and a completed form.
    ///
    /// Returns `None` if the selected item is not in the catalog.
    pub fn new(catalog: &Catalog, selection: &Selection, contact: OrderForm) -> Option<Self> {
        let item = catalog.item(selection.item)?;
        let addons = selection
            .addons
            .iter()
            .filter_map(|id| catalog.addon(*id))
            .map(|addon| addon.name.clone())
            .collect();

        Some(Self {
            item: item.id,
            item_name: item.name.clone(),
            size: selection.size,
            addons,
            price: pricing::price_breakdown(catalog, Some(selection)),
            contact,
        })
    }

    pub fn total(&self) -> u32 {
        self.price.total
    }
}
