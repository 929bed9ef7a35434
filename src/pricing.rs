//! Pricing calculator.
//!
//! Pure functions from a selection and a catalog to a total in whole rubles.
//! Unknown add-on ids contribute nothing, and the catalog's delivery fee is
//! added unconditionally whenever an item is selected.

use crate::catalog::Catalog;
use crate::model::Selection;
use serde::{Deserialize, Serialize};

/// Line items behind a total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: u32,
    pub addons: u32,
    pub delivery: u32,
    pub total: u32,
}

/// Computes the breakdown for a selection. No selection, or a selection whose
/// item is not in `catalog`, prices at zero.
pub fn price_breakdown(catalog: &Catalog, selection: Option<&Selection>) -> PriceBreakdown {
    let Some(selection) = selection else {
        return PriceBreakdown::default();
    };
    let Some(item) = catalog.item(selection.item) else {
        return PriceBreakdown::default();
    };

    let base = item.price.for_size(selection.size);
    let addons = selection
        .addons
        .iter()
        .filter_map(|id| catalog.addon(*id))
        .fold(0u32, |sum, addon| sum.saturating_add(addon.price));
    let delivery = catalog.delivery.fee.unwrap_or(0);

    PriceBreakdown {
        base,
        addons,
        delivery,
        total: base.saturating_add(addons).saturating_add(delivery),
    }
}

/// Total for a selection, see [`price_breakdown`].
pub fn total(catalog: &Catalog, selection: Option<&Selection>) -> u32 {
    price_breakdown(catalog, selection).total
}

/// `430` -> `430₽`.
pub fn format_rubles(amount: u32) -> String {
    format!("{amount}₽")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AddonId, MenuItemId, Size};

    fn selection(catalog: &Catalog, item: u32, addons: &[u32]) -> Selection {
        let mut selection = Selection::for_item(catalog.item(MenuItemId(item)).unwrap());
        for id in addons {
            selection.toggle_addon(AddonId(*id));
        }
        selection
    }

    #[test]
    fn test_fixed_price_with_addons() {
        // Классическая 350 + Сыр 50 + Острый соус 30
        let catalog = Catalog::shawarma();
        let selection = selection(&catalog, 1, &[1, 3]);
        assert_eq!(total(&catalog, Some(&selection)), 430);
    }

    #[test]
    fn test_sized_price_with_delivery_fee() {
        // large 300 + Сыр 30 + delivery 200
        let catalog = Catalog::sized();
        let mut selection = selection(&catalog, 1, &[1]);
        selection.size = Some(Size::Large);

        let breakdown = price_breakdown(&catalog, Some(&selection));
        assert_eq!(
            breakdown,
            PriceBreakdown {
                base: 300,
                addons: 30,
                delivery: 200,
                total: 530,
            }
        );
    }

    #[test]
    fn test_every_size_uses_its_own_price() {
        let catalog = Catalog::sized();
        let mut selection = selection(&catalog, 2, &[]);
        for (size, expected) in [(Size::Small, 280), (Size::Medium, 320), (Size::Large, 360)] {
            selection.size = Some(size);
            assert_eq!(total(&catalog, Some(&selection)), expected + 200);
        }
    }

    #[test]
    fn test_unknown_addons_contribute_nothing() {
        let catalog = Catalog::shawarma();
        let selection = selection(&catalog, 4, &[2, 42, 99]);
        assert_eq!(total(&catalog, Some(&selection)), 450 + 150);
    }

    #[test]
    fn test_advertised_free_delivery_is_not_applied() {
        // 450 + 150 = 600 is above the advertised 500₽ threshold; the shawarma
        // catalog has no fee to waive, so the total is just the food.
        let catalog = Catalog::shawarma();
        let selection = selection(&catalog, 4, &[2]);
        let breakdown = price_breakdown(&catalog, Some(&selection));
        assert_eq!(breakdown.delivery, 0);
        assert_eq!(breakdown.total, 600);
    }

    #[test]
    fn test_nothing_selected_is_zero() {
        let catalog = Catalog::sized();
        assert_eq!(total(&catalog, None), 0);

        let stray = Selection {
            item: MenuItemId(77),
            size: None,
            addons: Default::default(),
        };
        assert_eq!(price_breakdown(&catalog, Some(&stray)), PriceBreakdown::default());
    }

    #[test]
    fn test_format_rubles() {
        assert_eq!(format_rubles(530), "530₽");
        assert_eq!(format_rubles(0), "0₽");
    }
}
