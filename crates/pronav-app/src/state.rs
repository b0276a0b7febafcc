//! Driver state shared between the caller and the real-time loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use pronav_core::state::StepResult;

/// Commands sent to the loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCommand {
    /// Discard the current run and start over from the same config.
    Reset,
    /// Stop the loop thread.
    Shutdown,
}

/// Handle to a running loop thread.
///
/// Snapshots arrive both on `snapshots` (every tick, in order) and in
/// `latest_snapshot` (for polling).
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    pub snapshots: mpsc::Receiver<StepResult>,
    pub latest_snapshot: Arc<Mutex<Option<StepResult>>>,
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// The most recently published snapshot, if any.
    pub fn latest(&self) -> Option<StepResult> {
        self.latest_snapshot.lock().ok().and_then(|lock| *lock)
    }

    /// Ask the loop to stop and wait for the thread to finish.
    pub fn shutdown(self) {
        // The loop may already have exited on disconnect.
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        drop(self.snapshots);
        let _ = self.thread.join();
    }
}
