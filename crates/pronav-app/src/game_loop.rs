//! Real-time loop thread: steps the simulation at a fixed tick rate and
//! publishes snapshots.
//!
//! The `Simulation` moves into the thread. Commands arrive via `mpsc`.
//! Once the run is terminal the loop stops stepping and blocks until it is
//! reset or shut down.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::debug;

use pronav_core::state::StepResult;
use pronav_sim::Simulation;

use crate::state::{LoopCommand, LoopHandle};

/// Wall-clock duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: f64) -> Duration {
    Duration::from_secs_f64(1.0 / tick_rate)
}

/// Spawns the loop in a new thread.
pub fn spawn_realtime_loop(sim: Simulation, tick_rate: f64) -> io::Result<LoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let (snapshot_tx, snapshots) = mpsc::channel::<StepResult>();
    let latest_snapshot = Arc::new(Mutex::new(None));

    let shared = Arc::clone(&latest_snapshot);
    let period = tick_duration(tick_rate);
    let thread = std::thread::Builder::new()
        .name("pronav-loop".into())
        .spawn(move || {
            run_loop(sim, period, &command_rx, &snapshot_tx, &shared);
        })?;

    Ok(LoopHandle {
        command_tx,
        snapshots,
        latest_snapshot,
        thread,
    })
}

/// Runs until Shutdown, command channel disconnect, or the snapshot
/// receiver going away.
fn run_loop(
    mut sim: Simulation,
    period: Duration,
    command_rx: &mpsc::Receiver<LoopCommand>,
    snapshot_tx: &mpsc::Sender<StepResult>,
    latest_snapshot: &Mutex<Option<StepResult>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Reset) => {
                    sim.reset();
                    next_tick_time = Instant::now();
                }
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Idle once stopped
        if sim.status().is_terminal() {
            debug!("loop idle until reset");
            match command_rx.recv() {
                Ok(LoopCommand::Reset) => {
                    sim.reset();
                    next_tick_time = Instant::now();
                    continue;
                }
                Ok(LoopCommand::Shutdown) | Err(_) => return,
            }
        }

        // 3. Advance one tick and publish
        let snapshot = sim.step();
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }
        if snapshot_tx.send(snapshot).is_err() {
            return;
        }

        // 4. Sleep until the next tick
        next_tick_time += period;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > period * 2 {
            // Too far behind, don't try to catch up
            next_tick_time = now;
        }
    }
}
