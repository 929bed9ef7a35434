//! # Generic Client
//!
//! The sending half of a [`SessionActor`](crate::framework::SessionActor).

use crate::framework::entity::SessionEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::SessionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe, cloneable handle for talking to a session loop.
///
/// Holds only the channel sender. Each call sends one request and waits on a
/// oneshot for the reply. Once every clone is dropped the loop shuts down.
#[derive(Clone)]
pub struct SessionClient<T: SessionEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

impl<T: SessionEntity> SessionClient<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn open(&self, params: T::Open) -> Result<T::Id, FrameworkError> {
        let (reply_to, reply) = oneshot::channel();
        self.sender
            .send(SessionRequest::Open { params, reply_to })
            .await
            .map_err(|_| FrameworkError::LoopClosed)?;
        reply.await.map_err(|_| FrameworkError::ReplyDropped)?
    }

    pub async fn snapshot(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (reply_to, reply) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { id, reply_to })
            .await
            .map_err(|_| FrameworkError::LoopClosed)?;
        reply.await.map_err(|_| FrameworkError::ReplyDropped)?
    }

    pub async fn send_event(
        &self,
        id: T::Id,
        event: T::Event,
    ) -> Result<T::Outcome, FrameworkError> {
        let (reply_to, reply) = oneshot::channel();
        self.sender
            .send(SessionRequest::Event {
                id,
                event,
                reply_to,
            })
            .await
            .map_err(|_| FrameworkError::LoopClosed)?;
        reply.await.map_err(|_| FrameworkError::ReplyDropped)?
    }

    pub async fn close(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (reply_to, reply) = oneshot::channel();
        self.sender
            .send(SessionRequest::Close { id, reply_to })
            .await
            .map_err(|_| FrameworkError::LoopClosed)?;
        reply.await.map_err(|_| FrameworkError::ReplyDropped)?
    }
}
