//! # Session Event Loop
//!
//! `SessionActor` owns every open session of one entity type and applies the
//! requests it receives strictly one after another.

use crate::framework::client::SessionClient;
use crate::framework::entity::SessionEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::SessionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic event loop that owns a collection of sessions.
///
/// # Concurrency Model
/// The loop is the only place session state lives. Requests are pulled from a
/// bounded `mpsc` mailbox and handled sequentially, so two interactions on the
/// same page can never interleave and no lock guards the `sessions` map.
///
/// # Operations
///
/// * **Open**: takes the next id from the `u32` counter, calls
///   `T::from_open_params`, then `on_open`, then stores the session.
/// * **Snapshot**: returns a clone of the session, or `None`.
/// * **Event**: calls `handle_event` on the stored session and forwards its outcome.
/// * **Close**: calls `on_close`, then drops the session.
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    sessions: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates the loop and the client that feeds it.
    ///
    /// `mailbox_capacity` bounds the channel; senders wait while it is full.
    pub fn new(mailbox_capacity: usize) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(mailbox_capacity);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: 1,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the loop until every client has been dropped.
    ///
    /// `context` is handed to every hook of every session.
    pub async fn run(mut self, context: T::Context) {
        let session_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(session_type, "Session loop started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { params, reply_to } => {
                    debug!(session_type, ?params, "Open");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_open_params(id.clone(), params) {
                        Ok(mut session) => {
                            if let Err(e) = session.on_open(&context).await {
                                warn!(session_type, error = %e, "on_open failed");
                                let _ = reply_to.send(Err(FrameworkError::Entity(Box::new(e))));
                                continue;
                            }
                            self.sessions.insert(id.clone(), session);
                            info!(session_type, %id, open = self.sessions.len(), "Opened");
                            let _ = reply_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(session_type, error = %e, "Open failed");
                            let _ = reply_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        }
                    }
                }
                SessionRequest::Snapshot { id, reply_to } => {
                    let session = self.sessions.get(&id).cloned();
                    debug!(session_type, %id, found = session.is_some(), "Snapshot");
                    let _ = reply_to.send(Ok(session));
                }
                SessionRequest::Event {
                    id,
                    event,
                    reply_to,
                } => {
                    debug!(session_type, %id, ?event, "Event");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(session_type, %id, "Not found");
                        let _ = reply_to.send(Err(FrameworkError::SessionNotFound(id.to_string())));
                        continue;
                    };
                    let result = session
                        .handle_event(event, &context)
                        .await
                        .map_err(|e| FrameworkError::Entity(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(session_type, %id, "Event applied"),
                        Err(e) => warn!(session_type, %id, error = %e, "Event rejected"),
                    }
                    let _ = reply_to.send(result);
                }
                SessionRequest::Close { id, reply_to } => {
                    debug!(session_type, %id, "Close");
                    let Some(session) = self.sessions.get(&id) else {
                        warn!(session_type, %id, "Not found");
                        let _ = reply_to.send(Err(FrameworkError::SessionNotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = session.on_close(&context).await {
                        warn!(session_type, %id, error = %e, "on_close failed");
                        let _ = reply_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        continue;
                    }
                    self.sessions.remove(&id);
                    info!(session_type, %id, open = self.sessions.len(), "Closed");
                    let _ = reply_to.send(Ok(()));
                }
            }
        }

        info!(session_type, open = self.sessions.len(), "Shutdown");
    }
}
