//! # Storefront Client
//!
//! High-level API for a storefront page. Wraps a `SessionClient<StorefrontPage>`
//! and turns each page interaction into one typed call.
use crate::catalog::{AddonId, MenuItemId, Size};
use crate::clients::page_client::PageClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::model::{FormField, PageId, PageOpen, Section, Selection, StorefrontPage};
use crate::pricing::PriceBreakdown;
use crate::storefront_actor::{PageEvent, PageOutcome, StorefrontError, Submission};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with storefront pages.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: SessionClient<StorefrontPage>,
}

impl StorefrontClient {
    pub fn new(inner: SessionClient<StorefrontPage>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PageClient<StorefrontPage> for StorefrontClient {
    type Error = StorefrontError;

    fn inner(&self) -> &SessionClient<StorefrontPage> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StorefrontError::from(e)
    }
}

fn unexpected(outcome: PageOutcome) -> StorefrontError {
    StorefrontError::UnexpectedOutcome(format!("{outcome:?}"))
}

impl StorefrontClient {
    async fn send(&self, id: PageId, event: PageEvent) -> Result<PageOutcome, StorefrontError> {
        self.inner
            .send_event(id, event)
            .await
            .map_err(StorefrontError::from)
    }

    /// Opens a new page session.
    #[instrument(skip(self))]
    pub async fn open_page(&self, params: PageOpen) -> Result<PageId, StorefrontError> {
        debug!("Sending request");
        self.inner.open(params).await.map_err(StorefrontError::from)
    }

    /// Picks a menu item. Returns the fresh selection.
    #[instrument(skip(self))]
    pub async fn select_item(&self, id: PageId, item: MenuItemId) -> Result<Selection, StorefrontError> {
        match self.send(id, PageEvent::SelectItem(item)).await? {
            PageOutcome::SelectItem { selection, .. } => Ok(selection),
            other => Err(unexpected(other)),
        }
    }

    /// Flips an add-on. Returns whether it is now selected.
    #[instrument(skip(self))]
    pub async fn toggle_addon(&self, id: PageId, addon: AddonId) -> Result<bool, StorefrontError> {
        match self.send(id, PageEvent::ToggleAddon(addon)).await? {
            PageOutcome::ToggleAddon { selected, .. } => Ok(selected),
            other => Err(unexpected(other)),
        }
    }

    /// Picks a size. Returns the new total.
    #[instrument(skip(self))]
    pub async fn choose_size(&self, id: PageId, size: Size) -> Result<u32, StorefrontError> {
        match self.send(id, PageEvent::ChooseSize(size)).await? {
            PageOutcome::ChooseSize { total } => Ok(total),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cancel(&self, id: PageId) -> Result<(), StorefrontError> {
        match self.send(id, PageEvent::Cancel).await? {
            PageOutcome::Cancel => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Replaces the content of one form field.
    #[instrument(skip(self, value))]
    pub async fn edit_field(
        &self,
        id: PageId,
        field: FormField,
        value: impl Into<String> + Send,
    ) -> Result<(), StorefrontError> {
        let event = PageEvent::EditField {
            field,
            value: value.into(),
        };
        match self.send(id, event).await? {
            PageOutcome::EditField => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Submits the order form.
    ///
    /// A rejected submission is still `Ok`; inspect the returned [`Submission`].
    #[instrument(skip(self))]
    pub async fn submit(&self, id: PageId) -> Result<Submission, StorefrontError> {
        match self.send(id, PageEvent::Submit).await? {
            PageOutcome::Submit(submission) => Ok(submission),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn navigate(&self, id: PageId, section: Section) -> Result<Section, StorefrontError> {
        match self.send(id, PageEvent::Navigate(section)).await? {
            PageOutcome::Navigate { scroll_to } => Ok(scroll_to),
            other => Err(unexpected(other)),
        }
    }

    /// Current price breakdown of the page's selection.
    #[instrument(skip(self))]
    pub async fn quote(&self, id: PageId) -> Result<PriceBreakdown, StorefrontError> {
        match self.send(id, PageEvent::Quote).await? {
            PageOutcome::Quote(breakdown) => Ok(breakdown),
            other => Err(unexpected(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_event, MockClient};
    use crate::model::Notification;

    #[tokio::test]
    async fn test_toggle_addon_sends_event_and_reads_flag() {
        let (client, mut receiver) = create_mock_client::<StorefrontPage>(10);
        let storefront = StorefrontClient::new(client);

        let task = tokio::spawn(async move { storefront.toggle_addon(PageId(1), AddonId(3)).await });

        let (id, event, reply_to) = expect_event(&mut receiver)
            .await
            .expect("Expected Event request");
        assert_eq!(id, PageId(1));
        assert_eq!(event, PageEvent::ToggleAddon(AddonId(3)));
        reply_to
            .send(Ok(PageOutcome::ToggleAddon {
                selected: true,
                total: 380,
            }))
            .unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_edit_field_forwards_value() {
        let (client, mut receiver) = create_mock_client::<StorefrontPage>(10);
        let storefront = StorefrontClient::new(client);

        let task = tokio::spawn(async move {
            storefront
                .edit_field(PageId(2), FormField::Address, "ул. Ленина, д. 1")
                .await
        });

        let (_, event, reply_to) = expect_event(&mut receiver).await.unwrap();
        assert_eq!(
            event,
            PageEvent::EditField {
                field: FormField::Address,
                value: "ул. Ленина, д. 1".to_string(),
            }
        );
        reply_to.send(Ok(PageOutcome::EditField)).unwrap();
        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_entity_error_keeps_its_type() {
        let mut mock = MockClient::<StorefrontPage>::new();
        mock.expect_event(PageId(1))
            .return_err(FrameworkError::Entity(Box::new(StorefrontError::NoItemSelected)));
        let storefront = StorefrontClient::new(mock.client());

        let err = storefront.choose_size(PageId(1), Size::Large).await.unwrap_err();
        assert_eq!(err, StorefrontError::NoItemSelected);
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_outcome_is_an_error() {
        let mut mock = MockClient::<StorefrontPage>::new();
        mock.expect_event(PageId(1)).return_ok(PageOutcome::Cancel);
        let storefront = StorefrontClient::new(mock.client());

        let err = storefront.submit(PageId(1)).await.unwrap_err();
        assert!(matches!(err, StorefrontError::UnexpectedOutcome(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_rejected_submission_is_not_an_error() {
        let mut mock = MockClient::<StorefrontPage>::new();
        mock.expect_event(PageId(4)).return_ok(PageOutcome::Submit(Submission::Rejected {
            item_missing: true,
            missing_fields: vec![],
            notification: Notification::fill_all_fields(),
        }));
        let storefront = StorefrontClient::new(mock.client());

        let submission = storefront.submit(PageId(4)).await.unwrap();
        assert!(submission.notification().is_error());
        mock.verify();
    }

    #[tokio::test]
    async fn test_snapshot_and_close_via_page_client() {
        let mut mock = MockClient::<StorefrontPage>::new();
        mock.expect_snapshot(PageId(5)).return_ok(None);
        mock.expect_close(PageId(5))
            .return_err(FrameworkError::SessionNotFound("page_5".to_string()));
        let storefront = StorefrontClient::new(mock.client());

        assert!(storefront.snapshot(PageId(5)).await.unwrap().is_none());
        assert_eq!(
            storefront.close_page(PageId(5)).await,
            Err(StorefrontError::PageNotFound("page_5".to_string()))
        );
        mock.verify();
    }
}
