//! Delayed computer moves.
//!
//! The controller only says *that* the computer is due; this module
//! decides *when*. Each scheduled move is a tokio task that sleeps for
//! the thinking delay and then posts [`AppEvent::ComputerMoveDue`] back
//! to the event loop, which plays the move against the board as it is
//! at that moment.

use oxo_core::MoveTicket;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Messages posted to the UI event loop from background tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The computer's thinking delay elapsed.
    ComputerMoveDue(MoveTicket),
}

#[derive(Debug)]
struct Pending {
    ticket: MoveTicket,
    token: CancellationToken,
}

/// Schedules at most one pending computer move at a time.
#[derive(Debug)]
pub struct ComputerScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<Pending>,
}

impl ComputerScheduler {
    /// Creates a scheduler posting to `tx` after `delay`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedules the move for `ticket`, replacing any pending one.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&mut self, ticket: MoveTicket) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = cancelled.cancelled() => {
                    debug!(%ticket, "Pending computer move cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if tx.send(AppEvent::ComputerMoveDue(ticket)).is_err() {
                        debug!(%ticket, "Event loop gone, dropping computer move");
                    }
                }
            }
        });

        self.pending = Some(Pending { ticket, token });
    }

    /// Cancels the pending move, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(ticket = %pending.ticket, "Cancelling pending computer move");
            pending.token.cancel();
        }
    }

    /// Marks `ticket` as delivered.
    pub fn complete(&mut self, ticket: MoveTicket) {
        if self.pending.as_ref().is_some_and(|p| p.ticket == ticket) {
            self.pending = None;
        }
    }

    /// Ticket of the move still waiting to fire.
    pub fn pending(&self) -> Option<MoveTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }
}

impl Drop for ComputerScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
