//! Lead session runtime — drives one `LeadController` on a tokio task.
//!
//! DESIGN
//! ======
//! All events go through one unbounded queue and are applied one at a time,
//! so the controller is only ever touched by the runtime task. The submission
//! call is the only suspension point: it runs on its own task and its outcome
//! re-enters the loop as `SubmissionSettled`. Field edits keep flowing while a
//! request is outstanding.
//!
//! A snapshot (`LeadFormView`) is published on a `watch` channel after every
//! event. The runtime stops once every handle is dropped, but never abandons
//! an in-flight submission: it waits for the outcome first.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, warn};

use crate::client::{Ack, LeadSubmitter, NetworkError};
use crate::controller::{Effect, LeadController, LeadEvent, LeadFormView};
use crate::fields::{FieldKey, LeadFields};

/// The runtime behind a handle is no longer running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("lead session has stopped")]
pub struct SessionClosed;

enum Command {
    Event(LeadEvent),
    /// Reply once every earlier command has been applied.
    Sync(oneshot::Sender<()>),
}

/// Cloneable handle to a running lead session.
#[derive(Clone)]
pub struct LeadSessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    view: watch::Receiver<LeadFormView>,
}

/// Start a session on the current tokio runtime.
#[must_use]
pub fn spawn_lead_session(submitter: Arc<dyn LeadSubmitter>) -> LeadSessionHandle {
    let (commands, inbox) = mpsc::unbounded_channel();
    let (view_tx, view) = watch::channel(LeadFormView::default());
    tokio::spawn(run_session(submitter, inbox, view_tx));
    LeadSessionHandle { commands, view }
}

impl LeadSessionHandle {
    /// Overwrite one field.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the runtime has stopped.
    pub fn edit(&self, key: FieldKey, value: impl Into<String>) -> Result<(), SessionClosed> {
        self.send(Command::Event(LeadEvent::FieldEdited { key, value: value.into() }))
    }

    /// Request a submission. Dropped by the controller if one is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the runtime has stopped.
    pub fn submit(&self) -> Result<(), SessionClosed> {
        self.send(Command::Event(LeadEvent::SubmitRequested))
    }

    /// Latest published snapshot. May lag behind commands still queued.
    #[must_use]
    pub fn view(&self) -> LeadFormView {
        self.view.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LeadFormView> {
        self.view.clone()
    }

    /// Wait until every command sent so far has been applied, then return
    /// the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the runtime has stopped.
    pub async fn sync(&self) -> Result<LeadFormView, SessionClosed> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Sync(tx))?;
        rx.await.map_err(|_| SessionClosed)?;
        Ok(self.view())
    }

    /// Wait for queued commands, then for any in-flight submission to
    /// settle. Never times out: a hung request keeps this pending.
    ///
    /// # Errors
    ///
    /// Returns [`SessionClosed`] if the runtime has stopped.
    pub async fn wait_until_settled(&self) -> Result<LeadFormView, SessionClosed> {
        self.sync().await?;
        let mut view = self.view.clone();
        let settled = view
            .wait_for(|v| !v.status.is_submitting())
            .await
            .map_err(|_| SessionClosed)?;
        Ok(settled.clone())
    }

    fn send(&self, command: Command) -> Result<(), SessionClosed> {
        self.commands.send(command).map_err(|_| SessionClosed)
    }
}

// =============================================================================
// RUNTIME LOOP
// =============================================================================

async fn run_session(
    submitter: Arc<dyn LeadSubmitter>,
    mut inbox: mpsc::UnboundedReceiver<Command>,
    view_tx: watch::Sender<LeadFormView>,
) {
    let mut controller = LeadController::new();
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel::<Result<Ack, NetworkError>>();
    let mut inbox_open = true;

    loop {
        let event = tokio::select! {
            Some(outcome) = settled_rx.recv() => LeadEvent::SubmissionSettled(outcome),
            command = inbox.recv(), if inbox_open => match command {
                Some(Command::Event(event)) => event,
                Some(Command::Sync(reply)) => {
                    if reply.send(()).is_err() {
                        debug!("sync waiter went away");
                    }
                    continue;
                }
                None => {
                    inbox_open = false;
                    if controller.status().is_submitting() {
                        debug!("all handles dropped; waiting for in-flight submission");
                        continue;
                    }
                    break;
                }
            },
            else => break,
        };

        if let Some(Effect::Dispatch(fields)) = controller.apply(event) {
            dispatch(Arc::clone(&submitter), fields, settled_tx.clone());
        }
        view_tx.send_replace(controller.view());

        if !inbox_open && !controller.status().is_submitting() {
            break;
        }
    }
    debug!("lead session stopped");
}

fn dispatch(
    submitter: Arc<dyn LeadSubmitter>,
    fields: LeadFields,
    settled_tx: mpsc::UnboundedSender<Result<Ack, NetworkError>>,
) {
    tokio::spawn(async move {
        let call = tokio::spawn(async move { submitter.submit(&fields).await });
        // A panicking submitter still has to release the single-flight guard.
        let outcome = match call.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "submission task aborted");
                Err(NetworkError::new(format!("submission task aborted: {e}")))
            }
        };
        if settled_tx.send(outcome).is_err() {
            debug!("session stopped before submission settled");
        }
    });
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
