// Auto-advance scheduler - the recurring timer behind the carousel
//
// The controller never touches tokio directly. It talks to the Scheduler
// trait; the production implementation spawns a tokio task that sends an
// AutoTick control event on every interval firing, and cancelling aborts the
// task. Tests substitute a recording scheduler and drive ticks by hand.

use crate::events::ControlEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Recurring-timer capability: start-repeating(interval) / cancel.
///
/// Both operations are idempotent; `start` on a running scheduler restarts
/// it with the new interval.
pub trait Scheduler: Send {
    fn start(&mut self, interval: Duration);
    fn cancel(&mut self);
    fn is_running(&self) -> bool;
}

/// Production scheduler backed by a tokio interval task.
///
/// Each firing sends `ControlEvent::AutoTick` into the app's event channel,
/// so tick handling serializes with key handling on the event loop task.
pub struct TokioScheduler {
    tx: mpsc::Sender<ControlEvent>,
    handle: Option<JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::Sender<ControlEvent>) -> Self {
        Self { tx, handle: None }
    }
}

impl Scheduler for TokioScheduler {
    fn start(&mut self, interval: Duration) {
        self.cancel();

        let tx = self.tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately;
            // swallow it so the first advance happens one interval from now.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if tx.send(ControlEvent::AutoTick).await.is_err() {
                    // Event loop is gone, nothing left to tick
                    break;
                }
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
