//! # Loop Messages
//!
//! The requests a [`SessionClient`](crate::framework::SessionClient) sends into a
//! [`SessionActor`](crate::framework::SessionActor), each carrying its own reply channel.

use crate::framework::entity::SessionEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel used by the loop.
pub type Reply<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the loop.
///
/// The variants follow a session's life: `Open` starts it, `Event` drives it,
/// `Snapshot` reads it without side effects and `Close` ends it. Every payload is
/// typed by the entity's associated types, so a page event can never reach a
/// session of another kind.
#[derive(Debug)]
pub enum SessionRequest<T: SessionEntity> {
    Open {
        params: T::Open,
        reply_to: Reply<T::Id>,
    },
    Snapshot {
        id: T::Id,
        reply_to: Reply<Option<T>>,
    },
    Event {
        id: T::Id,
        event: T::Event,
        reply_to: Reply<T::Outcome>,
    },
    Close {
        id: T::Id,
        reply_to: Reply<()>,
    },
}
