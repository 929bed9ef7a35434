//! Static product catalog.
//!
//! Menu items, add-ons and the delivery policy are fixed at start-up and never
//! mutated afterwards. Two catalogs ship with the crate, see [`CatalogVariant`].

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// Type-safe identifier for add-ons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AddonId(pub u32);

impl Display for AddonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "addon_{}", self.0)
    }
}

/// Portion size for items with per-size pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Russian label shown on the size picker.
    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Маленькая",
            Size::Medium => "Средняя",
            Size::Large => "Большая",
        }
    }
}

/// Per-size prices, in rubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePrices {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl SizePrices {
    pub fn get(&self, size: Size) -> u32 {
        match size {
            Size::Small => self.small,
            Size::Medium => self.medium,
            Size::Large => self.large,
        }
    }

    /// The lowest of the three prices.
    pub fn starting_at(&self) -> u32 {
        self.small.min(self.medium).min(self.large)
    }
}

/// A menu item is priced either once or per size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Price {
    Fixed(u32),
    Sized(SizePrices),
}

impl Price {
    pub fn is_sized(&self) -> bool {
        matches!(self, Price::Sized(_))
    }

    /// Price for a size. Fixed prices ignore the size; sized prices fall back
    /// to [`Size::Medium`] when no size is given.
    pub fn for_size(&self, size: Option<Size>) -> u32 {
        match self {
            Price::Fixed(price) => *price,
            Price::Sized(prices) => prices.get(size.unwrap_or_default()),
        }
    }
}

/// A purchasable dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: MenuItemId(id),
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }

    /// Price label for the menu card: `350₽`, or `от 230₽` for sized items.
    pub fn display_price(&self) -> String {
        match &self.price {
            Price::Fixed(price) => crate::pricing::format_rubles(*price),
            Price::Sized(prices) => {
                format!("от {}", crate::pricing::format_rubles(prices.starting_at()))
            }
        }
    }
}

/// An optional extra with a flat price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addon {
    pub id: AddonId,
    pub name: String,
    pub price: u32,
}

impl Addon {
    pub fn new(id: u32, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: AddonId(id),
            name: name.into(),
            price,
        }
    }
}

/// Delivery terms.
///
/// `fee` is always charged when set. `advertised_free_from` only feeds the
/// marketing copy; pricing never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPolicy {
    pub fee: Option<u32>,
    pub advertised_free_from: Option<u32>,
}

/// Which built-in catalog to serve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    /// Fixed prices, no delivery fee.
    #[default]
    Shawarma,
    /// Per-size prices plus a flat delivery fee.
    Sized,
}

impl FromStr for CatalogVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shawarma" => Ok(Self::Shawarma),
            "sized" => Ok(Self::Sized),
            other => Err(format!("unknown catalog variant: {other}")),
        }
    }
}

/// The full, immutable catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<MenuItem>,
    pub addons: Vec<Addon>,
    pub delivery: DeliveryPolicy,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>, addons: Vec<Addon>, delivery: DeliveryPolicy) -> Self {
        Self {
            items,
            addons,
            delivery,
        }
    }

    pub fn for_variant(variant: CatalogVariant) -> Self {
        match variant {
            CatalogVariant::Shawarma => Self::shawarma(),
            CatalogVariant::Sized => Self::sized(),
        }
    }

    pub fn item(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn addon(&self, id: AddonId) -> Option<&Addon> {
        self.addons.iter().find(|addon| addon.id == id)
    }

    /// The fixed-price shawarma menu.
    pub fn shawarma() -> Self {
        let items = vec![
            MenuItem::new(
                1,
                "Классическая шаурма",
                "Куриное мясо, свежие овощи, фирменный соус",
                Price::Fixed(350),
                "https://images.unsplash.com/photo-1529006557810-274b9b2fc783?w=800&q=80",
            ),
            MenuItem::new(
                2,
                "Говяжья шаурма",
                "Говядина, маринованные огурцы, острый соус",
                Price::Fixed(420),
                "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=800&q=80",
            ),
            MenuItem::new(
                3,
                "Фалафель шаурма",
                "Хрустящий фалафель, хумус, свежие овощи",
                Price::Fixed(320),
                "https://images.unsplash.com/photo-1628408891486-4cce6f18b0bb?w=800&q=80",
            ),
            MenuItem::new(
                4,
                "Микс шаурма",
                "Курица и говядина, сырный соус, овощи",
                Price::Fixed(450),
                "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?w=800&q=80",
            ),
        ];
        let addons = vec![
            Addon::new(1, "Сыр", 50),
            Addon::new(2, "Двойное мясо", 150),
            Addon::new(3, "Острый соус", 30),
            Addon::new(4, "Сырный соус", 40),
            Addon::new(5, "Маринованные огурцы", 30),
        ];
        let delivery = DeliveryPolicy {
            fee: None,
            advertised_free_from: Some(500),
        };
        Self::new(items, addons, delivery)
    }

    /// The per-size menu with a flat 200₽ delivery fee.
    pub fn sized() -> Self {
        let sized = |small, medium, large| {
            Price::Sized(SizePrices {
                small,
                medium,
                large,
            })
        };
        let items = vec![
            MenuItem::new(
                1,
                "Классическая шаурма",
                "Куриное мясо, свежие овощи, фирменный соус",
                sized(230, 270, 300),
                "https://images.unsplash.com/photo-1529006557810-274b9b2fc783?w=800&q=80",
            ),
            MenuItem::new(
                2,
                "Говяжья шаурма",
                "Говядина, маринованные огурцы, острый соус",
                sized(280, 320, 360),
                "https://images.unsplash.com/photo-1599487488170-d11ec9c172f0?w=800&q=80",
            ),
            MenuItem::new(
                3,
                "Фалафель шаурма",
                "Хрустящий фалафель, хумус, свежие овощи",
                sized(210, 250, 290),
                "https://images.unsplash.com/photo-1628408891486-4cce6f18b0bb?w=800&q=80",
            ),
            MenuItem::new(
                4,
                "Микс шаурма",
                "Курица и говядина, сырный соус, овощи",
                sized(300, 350, 400),
                "https://images.unsplash.com/photo-1626082927389-6cd097cdc6ec?w=800&q=80",
            ),
        ];
        let addons = vec![
            Addon::new(1, "Сыр", 30),
            Addon::new(2, "Двойное мясо", 120),
            Addon::new(3, "Острый соус", 20),
            Addon::new(4, "Сырный соус", 30),
            Addon::new(5, "Халапеньо", 25),
        ];
        let delivery = DeliveryPolicy {
            fee: Some(200),
            advertised_free_from: None,
        };
        Self::new(items, addons, delivery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        for catalog in [Catalog::shawarma(), Catalog::sized()] {
            let items: HashSet<_> = catalog.items.iter().map(|i| i.id).collect();
            let addons: HashSet<_> = catalog.addons.iter().map(|a| a.id).collect();
            assert_eq!(items.len(), catalog.items.len());
            assert_eq!(addons.len(), catalog.addons.len());
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::shawarma();
        assert_eq!(catalog.item(MenuItemId(2)).unwrap().name, "Говяжья шаурма");
        assert_eq!(catalog.addon(AddonId(3)).unwrap().price, 30);
        assert!(catalog.item(MenuItemId(99)).is_none());
        assert!(catalog.addon(AddonId(0)).is_none());
    }

    #[test]
    fn test_sized_price_defaults_to_medium() {
        let price = Price::Sized(SizePrices {
            small: 230,
            medium: 270,
            large: 300,
        });
        assert_eq!(price.for_size(None), 270);
        assert_eq!(price.for_size(Some(Size::Large)), 300);
        assert_eq!(Price::Fixed(350).for_size(Some(Size::Small)), 350);
    }

    #[test]
    fn test_display_price() {
        let catalog = Catalog::sized();
        assert_eq!(catalog.items[0].display_price(), "от 230₽");
        assert_eq!(Catalog::shawarma().items[3].display_price(), "450₽");
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("Sized".parse::<CatalogVariant>(), Ok(CatalogVariant::Sized));
        assert_eq!(" shawarma ".parse::<CatalogVariant>(), Ok(CatalogVariant::Shawarma));
        assert!("pizza".parse::<CatalogVariant>().is_err());
    }

    #[test]
    fn test_delivery_policies() {
        assert_eq!(Catalog::shawarma().delivery.fee, None);
        assert_eq!(Catalog::shawarma().delivery.advertised_free_from, Some(500));
        assert_eq!(Catalog::sized().delivery.fee, Some(200));
    }
}
