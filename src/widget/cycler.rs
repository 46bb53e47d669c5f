//! Typed-text cycler driver
//!
//! Runs a [`TypedText`] machine on a single logical timer task, streaming
//! display snapshots to the host over a tokio channel. Each tick is
//! scheduled only after the previous one completes, so ticks never overlap.
//! Teardown must cancel the pending timer before the state is dropped;
//! [`Cycler::cancel`] and the `Drop` impl both enforce that contract.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::debug;

use crate::widget::typed_text::{TypedText, TypedTextConfig, TypedTextPhase};
use crate::Result;

/// Snapshot emitted to the host on every internal state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedTextSnapshot {
    /// Currently displayed prefix of the active playlist entry
    pub text: String,
    /// Whether the host should render the cursor block this instant
    pub cursor_visible: bool,
    /// Phase the machine was in when the snapshot was taken
    pub phase: TypedTextPhase,
}

/// Handle to a running typed-text cycler task
///
/// Dropping the handle cancels the task; there is no way to leave a timer
/// pending against destroyed widget state.
#[derive(Debug)]
pub struct Cycler {
    handle: JoinHandle<()>,
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl Cycler {
    /// Validate the configuration and spawn the timer task
    ///
    /// Snapshots are pushed into `snapshot_tx`; the task also stops on its
    /// own once the host drops the receiving end.
    pub fn spawn(
        config: TypedTextConfig,
        snapshot_tx: mpsc::Sender<TypedTextSnapshot>,
    ) -> Result<Self> {
        let mut machine = TypedText::new(config)?;
        let (cancel_tx, mut cancel_rx) = oneshot::channel();

        debug!(texts = machine.config().texts().len(), "spawning typed-text cycler");

        let handle = tokio::spawn(async move {
            let blink_period = machine.config().cursor_blink();
            let mut cursor_visible = true;

            // The host renders the empty prefix and cursor immediately on mount
            if snapshot_tx
                .send(snapshot_of(&machine, cursor_visible))
                .await
                .is_err()
            {
                return;
            }

            let mut next_tick = Instant::now() + machine.config().typing_speed();
            let mut next_blink = Instant::now() + blink_period;

            loop {
                tokio::select! {
                    _ = &mut cancel_rx => {
                        debug!("typed-text cycler cancelled");
                        break;
                    }
                    _ = time::sleep_until(next_tick) => {
                        let delay = machine.tick();
                        next_tick = Instant::now() + delay;
                        if snapshot_tx
                            .send(snapshot_of(&machine, cursor_visible))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                    _ = time::sleep_until(next_blink) => {
                        cursor_visible = !cursor_visible;
                        next_blink = Instant::now() + blink_period;
                        if snapshot_tx
                            .send(snapshot_of(&machine, cursor_visible))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            }
        });

        Ok(Self {
            handle,
            cancel_tx: Some(cancel_tx),
        })
    }

    /// Cancel the timer task
    ///
    /// Idempotent; any scheduled tick that has not fired yet is invalidated.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Whether the task has already exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Cycler {
    fn drop(&mut self) {
        self.cancel();
        self.handle.abort();
    }
}

fn snapshot_of(machine: &TypedText, cursor_visible: bool) -> TypedTextSnapshot {
    TypedTextSnapshot {
        text: machine.display().to_string(),
        cursor_visible,
        phase: machine.phase(),
    }
}
