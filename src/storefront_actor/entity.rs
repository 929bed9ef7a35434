//! The storefront state machine.
//!
//! Contains the [`SessionEntity`] implementation that lets [`StorefrontPage`] live
//! inside the generic [`SessionActor`](crate::framework::SessionActor), and the
//! synchronous [`StorefrontPage::apply`] it delegates to.
//!
//! ```text
//!            SelectItem
//!   idle ───────────────▶ selecting ──┐ ToggleAddon / ChooseSize / SelectItem
//!    ▲                        │  ▲    │
//!    │   Cancel, Submit(ok)   │  └────┘
//!    └────────────────────────┘
//! ```
//!
//! A rejected submit leaves the page exactly as it was.

use super::events::{PageEvent, PageOutcome, Submission};
use super::StorefrontError;
use crate::catalog::{AddonId, Catalog, MenuItemId, Size};
use crate::framework::SessionEntity;
use crate::model::{
    FormField, Notification, OrderRequest, PageId, PageOpen, Section, Selection, StorefrontPage,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[async_trait]
impl SessionEntity for StorefrontPage {
    type Id = PageId;
    type Open = PageOpen;
    type Event = PageEvent;
    type Outcome = PageOutcome;
    type Context = Arc<Catalog>;
    type Error = StorefrontError;

    fn from_open_params(id: PageId, params: PageOpen) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.entry))
    }

    async fn handle_event(
        &mut self,
        event: PageEvent,
        catalog: &Arc<Catalog>,
    ) -> Result<PageOutcome, Self::Error> {
        self.apply(event, catalog)
    }

    async fn on_close(&self, _catalog: &Arc<Catalog>) -> Result<(), Self::Error> {
        if let Some(selection) = &self.selection {
            debug!(page = %self.id, item = %selection.item, "Closing page with an open selection");
        }
        Ok(())
    }
}

impl StorefrontPage {
    /// Applies one event against `catalog`.
    pub fn apply(&mut self, event: PageEvent, catalog: &Catalog) -> Result<PageOutcome, StorefrontError> {
        match event {
            PageEvent::SelectItem(item) => {
                let selection = self.select_item(item, catalog)?.clone();
                Ok(PageOutcome::SelectItem {
                    selection,
                    scroll_to: self.active_section,
                })
            }
            PageEvent::ToggleAddon(addon) => {
                let selected = self.toggle_addon(addon)?;
                Ok(PageOutcome::ToggleAddon {
                    selected,
                    total: self.quote(catalog).total,
                })
            }
            PageEvent::ChooseSize(size) => {
                self.choose_size(size, catalog)?;
                Ok(PageOutcome::ChooseSize {
                    total: self.quote(catalog).total,
                })
            }
            PageEvent::Cancel => {
                self.cancel();
                Ok(PageOutcome::Cancel)
            }
            PageEvent::EditField { field, value } => {
                self.edit_field(field, value);
                Ok(PageOutcome::EditField)
            }
            PageEvent::Submit => Ok(PageOutcome::Submit(self.submit(catalog))),
            PageEvent::Navigate(section) => {
                self.navigate(section);
                Ok(PageOutcome::Navigate { scroll_to: section })
            }
            PageEvent::Quote => Ok(PageOutcome::Quote(self.quote(catalog))),
        }
    }

    /// Opens the order panel for `item` with a fresh selection and scrolls to it.
    fn select_item(&mut self, item: MenuItemId, catalog: &Catalog) -> Result<&Selection, StorefrontError> {
        let Some(menu_item) = catalog.item(item) else {
            return Err(StorefrontError::UnknownMenuItem(item));
        };
        info!(page = %self.id, item = %item, name = %menu_item.name, "Item selected");
        self.navigate(Section::Order);
        Ok(self.selection.insert(Selection::for_item(menu_item)))
    }

    fn toggle_addon(&mut self, addon: AddonId) -> Result<bool, StorefrontError> {
        let selection = self
            .selection
            .as_mut()
            .ok_or(StorefrontError::NoItemSelected)?;
        let selected = selection.toggle_addon(addon);
        debug!(page = %self.id, addon = %addon, selected, "Add-on toggled");
        Ok(selected)
    }

    fn choose_size(&mut self, size: Size, catalog: &Catalog) -> Result<(), StorefrontError> {
        let selection = self
            .selection
            .as_mut()
            .ok_or(StorefrontError::NoItemSelected)?;
        let sized = catalog
            .item(selection.item)
            .is_some_and(|item| item.price.is_sized());
        if !sized {
            return Err(StorefrontError::SizeNotOffered(selection.item));
        }
        selection.size = Some(size);
        debug!(page = %self.id, ?size, "Size chosen");
        Ok(())
    }

    /// Back to idle. The form keeps whatever was typed.
    fn cancel(&mut self) {
        if let Some(selection) = self.selection.take() {
            info!(page = %self.id, item = %selection.item, "Selection cancelled");
        }
    }

    fn edit_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    fn navigate(&mut self, section: Section) {
        debug!(page = %self.id, %section, "Navigate");
        self.active_section = section;
    }

    /// Validates and, when everything is filled in, turns the selection into an
    /// [`OrderRequest`] and resets the page.
    fn submit(&mut self, catalog: &Catalog) -> Submission {
        let missing_fields = self.form.missing_fields();
        let order = match &self.selection {
            Some(selection) if missing_fields.is_empty() => {
                OrderRequest::new(catalog, selection, self.form.clone())
            }
            _ => None,
        };

        match order {
            Some(order) => {
                info!(
                    page = %self.id,
                    item = %order.item,
                    total = order.total(),
                    "Order accepted"
                );
                debug!(?order, "Order request");
                self.selection = None;
                self.form.clear();
                Submission::Accepted {
                    order,
                    notification: Notification::order_placed(),
                }
            }
            None => {
                let item_missing = self
                    .selection
                    .as_ref()
                    .and_then(|selection| catalog.item(selection.item))
                    .is_none();
                warn!(page = %self.id, item_missing, ?missing_fields, "Submission rejected");
                Submission::Rejected {
                    item_missing,
                    missing_fields,
                    notification: Notification::fill_all_fields(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationLevel;

    fn page() -> StorefrontPage {
        StorefrontPage::new(PageId(1), Section::Hero)
    }

    fn fill(page: &mut StorefrontPage, catalog: &Catalog) {
        for (field, value) in [
            (FormField::Name, "Иван Иванов"),
            (FormField::Phone, "+7 (999) 123-45-67"),
            (FormField::Address, "ул. Ленина, д. 1, кв. 10"),
        ] {
            page.apply(
                PageEvent::EditField {
                    field,
                    value: value.to_string(),
                },
                catalog,
            )
            .unwrap();
        }
    }

    #[test]
    fn test_select_item_enters_selecting_and_scrolls_to_order() {
        let catalog = Catalog::shawarma();
        let mut page = page();

        let outcome = page.apply(PageEvent::SelectItem(MenuItemId(2)), &catalog).unwrap();
        match outcome {
            PageOutcome::SelectItem { selection, scroll_to } => {
                assert_eq!(selection.item, MenuItemId(2));
                assert_eq!(scroll_to, Section::Order);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert!(!page.is_idle());
        assert_eq!(page.active_section, Section::Order);
    }

    #[test]
    fn test_selecting_again_resets_size_and_addons() {
        let catalog = Catalog::sized();
        let mut page = page();
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();
        page.apply(PageEvent::ChooseSize(Size::Large), &catalog).unwrap();
        page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog).unwrap();

        page.apply(PageEvent::SelectItem(MenuItemId(3)), &catalog).unwrap();
        let selection = page.selection.as_ref().unwrap();
        assert_eq!(selection.item, MenuItemId(3));
        assert_eq!(selection.size, Some(Size::Medium));
        assert!(selection.addons.is_empty());
    }

    #[test]
    fn test_unknown_item_leaves_page_untouched() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        let before = page.clone();

        let err = page.apply(PageEvent::SelectItem(MenuItemId(9)), &catalog).unwrap_err();
        assert_eq!(err, StorefrontError::UnknownMenuItem(MenuItemId(9)));
        assert_eq!(page, before);
    }

    #[test]
    fn test_toggle_reports_running_total() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();

        let first = page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog).unwrap();
        assert_eq!(first, PageOutcome::ToggleAddon { selected: true, total: 400 });
        let second = page.apply(PageEvent::ToggleAddon(AddonId(3)), &catalog).unwrap();
        assert_eq!(second, PageOutcome::ToggleAddon { selected: true, total: 430 });
        let third = page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog).unwrap();
        assert_eq!(third, PageOutcome::ToggleAddon { selected: false, total: 380 });
    }

    #[test]
    fn test_addons_and_size_require_a_selection() {
        let catalog = Catalog::sized();
        let mut page = page();
        assert_eq!(
            page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog),
            Err(StorefrontError::NoItemSelected)
        );
        assert_eq!(
            page.apply(PageEvent::ChooseSize(Size::Small), &catalog),
            Err(StorefrontError::NoItemSelected)
        );
    }

    #[test]
    fn test_size_on_fixed_price_item_is_rejected() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();
        assert_eq!(
            page.apply(PageEvent::ChooseSize(Size::Large), &catalog),
            Err(StorefrontError::SizeNotOffered(MenuItemId(1)))
        );
        assert_eq!(page.selection.as_ref().unwrap().size, None);
    }

    #[test]
    fn test_sized_total_includes_delivery() {
        let catalog = Catalog::sized();
        let mut page = page();
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();
        page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog).unwrap();

        let outcome = page.apply(PageEvent::ChooseSize(Size::Large), &catalog).unwrap();
        assert_eq!(outcome, PageOutcome::ChooseSize { total: 530 });
        assert_eq!(page.submit_label(&catalog), "Оформить заказ на 530₽");
    }

    #[test]
    fn test_cancel_returns_to_idle_and_keeps_form() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        fill(&mut page, &catalog);
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();
        page.apply(PageEvent::ToggleAddon(AddonId(2)), &catalog).unwrap();

        page.apply(PageEvent::Cancel, &catalog).unwrap();
        assert!(page.is_idle());
        assert_eq!(page.quote(&catalog).total, 0);
        assert_eq!(page.form.name, "Иван Иванов");

        // Cancelling while idle is harmless.
        assert_eq!(page.apply(PageEvent::Cancel, &catalog), Ok(PageOutcome::Cancel));
    }

    #[test]
    fn test_submit_with_missing_field_changes_nothing() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();
        page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog).unwrap();
        fill(&mut page, &catalog);
        page.apply(
            PageEvent::EditField {
                field: FormField::Phone,
                value: String::new(),
            },
            &catalog,
        )
        .unwrap();
        let before = page.clone();

        let outcome = page.apply(PageEvent::Submit, &catalog).unwrap();
        let PageOutcome::Submit(submission) = outcome else {
            panic!("expected submit outcome");
        };
        assert_eq!(
            submission,
            Submission::Rejected {
                item_missing: false,
                missing_fields: vec![FormField::Phone],
                notification: Notification::fill_all_fields(),
            }
        );
        assert_eq!(page, before);
    }

    #[test]
    fn test_submit_without_item_is_rejected() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        fill(&mut page, &catalog);
        let before = page.clone();

        let PageOutcome::Submit(submission) = page.apply(PageEvent::Submit, &catalog).unwrap() else {
            panic!("expected submit outcome");
        };
        assert!(!submission.is_accepted());
        assert!(matches!(
            &submission,
            Submission::Rejected { item_missing: true, missing_fields, .. } if missing_fields.is_empty()
        ));
        assert_eq!(submission.notification().message, "Заполните все поля формы");
        assert_eq!(page, before);
    }

    #[test]
    fn test_successful_submit_resets_everything() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        page.apply(PageEvent::SelectItem(MenuItemId(1)), &catalog).unwrap();
        page.apply(PageEvent::ToggleAddon(AddonId(3)), &catalog).unwrap();
        page.apply(PageEvent::ToggleAddon(AddonId(1)), &catalog).unwrap();
        fill(&mut page, &catalog);

        let PageOutcome::Submit(submission) = page.apply(PageEvent::Submit, &catalog).unwrap() else {
            panic!("expected submit outcome");
        };
        let Submission::Accepted { order, notification } = submission else {
            panic!("expected accepted submission");
        };
        assert_eq!(order.item_name, "Классическая шаурма");
        assert_eq!(order.addons, vec!["Сыр".to_string(), "Острый соус".to_string()]);
        assert_eq!(order.total(), 430);
        assert_eq!(order.contact.phone, "+7 (999) 123-45-67");
        assert_eq!(notification.level, NotificationLevel::Success);
        assert_eq!(notification.message, "Заказ оформлен! Ожидайте звонка оператора");

        assert!(page.is_idle());
        assert_eq!(page.form, Default::default());
    }

    #[test]
    fn test_navigate_tracks_active_section() {
        let catalog = Catalog::shawarma();
        let mut page = page();
        let outcome = page.apply(PageEvent::Navigate(Section::Delivery), &catalog).unwrap();
        assert_eq!(outcome, PageOutcome::Navigate { scroll_to: Section::Delivery });
        assert_eq!(page.active_section, Section::Delivery);
        assert!(page.is_idle());
    }
}
