//! # Mock Loop
//!
//! Test helpers for exercising client wrappers (like
//! [`StorefrontClient`](crate::clients::StorefrontClient)) without running a real
//! [`SessionActor`](crate::framework::SessionActor).
//!
//! Two styles are available:
//!
//! * **Receiver style**: [`create_mock_client`] hands back the raw receiver. Pull
//!   requests with [`expect_open`], [`expect_snapshot`] or [`expect_event`], assert
//!   on their payloads and answer through the returned reply channel.
//! * **Expectation style**: [`MockClient`] answers queued expectations in order
//!   from a background task. Call [`MockClient::verify`] at the end of the test.
//!
//! ```ignore
//! let mut mock = MockClient::<StorefrontPage>::new();
//! mock.expect_event(PageId(1)).return_ok(PageOutcome::Cancel);
//! let client = StorefrontClient::new(mock.client());
//! client.cancel(PageId(1)).await?;
//! mock.verify();
//! ```

use crate::framework::client::SessionClient;
use crate::framework::entity::SessionEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Reply, SessionRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A queued answer for the next request the mock receives.
enum Expectation<T: SessionEntity> {
    Open {
        response: Result<T::Id, FrameworkError>,
    },
    Snapshot {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Event {
        id: T::Id,
        response: Result<T::Outcome, FrameworkError>,
    },
    Close {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock loop that answers requests from a queue of expectations.
///
/// Requests must arrive in the order expectations were queued, and must target
/// the expected session id. Anything else panics inside the background task,
/// which surfaces in the test as a dropped reply.
pub struct MockClient<T: SessionEntity> {
    client: SessionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SessionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SessionEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();

                match (request, expectation) {
                    (
                        SessionRequest::Open { reply_to, .. },
                        Some(Expectation::Open { response }),
                    ) => {
                        let _ = reply_to.send(response);
                    }
                    (
                        SessionRequest::Snapshot { id, reply_to },
                        Some(Expectation::Snapshot {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "snapshot for unexpected session");
                        let _ = reply_to.send(response);
                    }
                    (
                        SessionRequest::Event { id, reply_to, .. },
                        Some(Expectation::Event {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "event for unexpected session");
                        let _ = reply_to.send(response);
                    }
                    (
                        SessionRequest::Close { id, reply_to },
                        Some(Expectation::Close {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "close for unexpected session");
                        let _ = reply_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> SessionClient<T> {
        self.client.clone()
    }

    pub fn expect_open(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Open {
            response,
        })
    }

    pub fn expect_snapshot(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Snapshot { id, response }
        })
    }

    pub fn expect_event(&mut self, id: T::Id) -> ExpectationBuilder<T, T::Outcome> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Event { id, response }
        })
    }

    pub fn expect_close(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Close { id, response }
        })
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with either a success or an error reply.
pub struct ExpectationBuilder<T: SessionEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: SessionEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back(expectation);
    }
}

// =============================================================================
// RECEIVER-STYLE HELPERS
// =============================================================================

/// Creates a client plus the receiver its requests land on.
///
/// Useful when a test wants to inspect the exact event a client wrapper sent
/// before deciding how to answer.
pub fn create_mock_client<T: SessionEntity>(
    mailbox_capacity: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(mailbox_capacity);
    (SessionClient::new(sender), receiver)
}

/// Next message, if it is an `Open` request.
pub async fn expect_open<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Open, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(SessionRequest::Open { params, reply_to }) => Some((params, reply_to)),
        _ => None,
    }
}

/// Next message, if it is a `Snapshot` request.
pub async fn expect_snapshot<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Snapshot { id, reply_to }) => Some((id, reply_to)),
        _ => None,
    }
}

/// Next message, if it is an `Event` request.
pub async fn expect_event<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, T::Event, Reply<T::Outcome>)> {
    match receiver.recv().await {
        Some(SessionRequest::Event {
            id,
            event,
            reply_to,
        }) => Some((id, event, reply_to)),
        _ => None,
    }
}
