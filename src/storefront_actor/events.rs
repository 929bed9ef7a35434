//! Interaction events for the storefront page.
//!
//! Each click, keystroke or submit on the page becomes one [`PageEvent`]. The
//! page answers with the [`PageOutcome`] variant of the same name.

use crate::catalog::{AddonId, MenuItemId, Size};
use crate::model::{FormField, Notification, OrderRequest, Section, Selection};
use crate::pricing::PriceBreakdown;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    /// A menu card was clicked.
    SelectItem(MenuItemId),
    /// An add-on checkbox was flipped.
    ToggleAddon(AddonId),
    /// A size was picked.
    ChooseSize(Size),
    /// The "Отменить" button.
    Cancel,
    /// A keystroke in one of the form inputs; `value` is the whole new content.
    EditField { field: FormField, value: String },
    /// The form was submitted.
    Submit,
    /// A navigation button was clicked.
    Navigate(Section),
    /// Read the current price breakdown.
    Quote,
}

/// Results from page events. Variants match 1:1 with [`PageEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageOutcome {
    SelectItem {
        selection: Selection,
        scroll_to: Section,
    },
    ToggleAddon {
        selected: bool,
        total: u32,
    },
    ChooseSize {
        total: u32,
    },
    Cancel,
    EditField,
    Submit(Submission),
    Navigate {
        scroll_to: Section,
    },
    Quote(PriceBreakdown),
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// The page went back to idle and the form was cleared.
    Accepted {
        order: OrderRequest,
        notification: Notification,
    },
    /// Nothing changed on the page.
    Rejected {
        item_missing: bool,
        missing_fields: Vec<FormField>,
        notification: Notification,
    },
}

impl Submission {
    pub fn notification(&self) -> &Notification {
        match self {
            Submission::Accepted { notification, .. } => notification,
            Submission::Rejected { notification, .. } => notification,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}
