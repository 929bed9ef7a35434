use crate::catalog::Catalog;
use crate::model::{OrderForm, Selection};
use crate::pricing::{self, PriceBreakdown};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for page sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub u32);

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page_{}", self.0)
    }
}

/// Scroll targets on the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Hero,
    Menu,
    Order,
    Delivery,
    About,
    Contacts,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Menu,
        Section::Order,
        Section::Delivery,
        Section::About,
        Section::Contacts,
    ];

    /// DOM anchor id of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Menu => "menu",
            Section::Order => "order",
            Section::Delivery => "delivery",
            Section::About => "about",
            Section::Contacts => "contacts",
        }
    }

    /// Header navigation label. The order section is not in the header.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Section::Hero => Some("Главная"),
            Section::Menu => Some("Меню"),
            Section::Order => None,
            Section::Delivery => Some("Доставка"),
            Section::About => Some("О нас"),
            Section::Contacts => Some("Контакты"),
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub const ORDER_PLACED: &'static str = "Заказ оформлен! Ожидайте звонка оператора";
    pub const FILL_ALL_FIELDS: &'static str = "Заполните все поля формы";

    pub fn order_placed() -> Self {
        Self {
            level: NotificationLevel::Success,
            message: Self::ORDER_PLACED.to_string(),
        }
    }

    pub fn fill_all_fields() -> Self {
        Self {
            level: NotificationLevel::Error,
            message: Self::FILL_ALL_FIELDS.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

/// Parameters for opening a page.
#[derive(Debug, Clone, Default)]
pub struct PageOpen {
    /// Section the visitor lands on.
    pub entry: Section,
}

/// One visitor's storefront page.
///
/// # Session Loop
/// This struct implements the [`SessionEntity`](crate::framework::SessionEntity) trait,
/// so every page lives inside a [`SessionActor`](crate::framework::SessionActor).
///
/// See [`impl SessionEntity for StorefrontPage`](#impl-SessionEntity-for-StorefrontPage)
/// for the state machine, driven by [`PageEvent`](crate::storefront_actor::PageEvent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontPage {
    pub id: PageId,
    /// `None` is the idle state; `Some` means the order panel is open.
    pub selection: Option<Selection>,
    pub form: OrderForm,
    pub active_section: Section,
}

impl StorefrontPage {
    pub fn new(id: PageId, entry: Section) -> Self {
        Self {
            id,
            selection: None,
            form: OrderForm::default(),
            active_section: entry,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.selection.is_none()
    }

    pub fn quote(&self, catalog: &Catalog) -> PriceBreakdown {
        pricing::price_breakdown(catalog, self.selection.as_ref())
    }

    /// Submit button caption, e.g. `Оформить заказ на 430₽`.
    pub fn submit_label(&self, catalog: &Catalog) -> String {
        format!(
            "Оформить заказ на {}",
            pricing::format_rubles(self.quote(catalog).total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_round_trip_and_nav() {
        for section in Section::ALL {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("checkout"), None);
        assert_eq!(Section::Order.nav_label(), None);
        assert_eq!(Section::About.nav_label(), Some("О нас"));
    }

    #[test]
    fn test_new_page_is_idle() {
        let page = StorefrontPage::new(PageId(1), Section::Hero);
        assert!(page.is_idle());
        assert_eq!(page.submit_label(&Catalog::shawarma()), "Оформить заказ на 0₽");
    }
}
