use crate::catalog::{AddonId, MenuItem, MenuItemId, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The shopper's in-progress choice: one item, its size and a set of add-ons.
///
/// `size` is present exactly when the item has per-size pricing. Add-ons are a
/// set, so a toggle can never produce duplicates and iteration order is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub item: MenuItemId,
    pub size: Option<Size>,
    pub addons: BTreeSet<AddonId>,
}

impl Selection {
    /// Fresh selection for an item: default size when sizes apply, no add-ons.
    pub fn for_item(item: &MenuItem) -> Self {
        Self {
            item: item.id,
            size: item.price.is_sized().then(Size::default),
            addons: BTreeSet::new(),
        }
    }

    /// Adds the add-on if absent, removes it if present.
    ///
    /// Returns whether the add-on is selected afterwards.
    pub fn toggle_addon(&mut self, addon: AddonId) -> bool {
        if self.addons.remove(&addon) {
            false
        } else {
            self.addons.insert(addon);
            true
        }
    }

    pub fn has_addon(&self, addon: AddonId) -> bool {
        self.addons.contains(&addon)
    }
}
