//! Drive a simulation to completion or a time limit.

use tracing::info;

use pronav_core::state::StepResult;
use pronav_sim::Simulation;

use crate::config::AppError;
use crate::game_loop;

/// Number of ticks that fit in `max_time` seconds of simulated time.
pub fn tick_budget(max_time: f64, time_step: f64) -> u64 {
    (max_time / time_step).ceil() as u64
}

/// Step as fast as possible, calling `on_step` with every snapshot.
pub fn run_batch(
    sim: &mut Simulation,
    max_time: f64,
    mut on_step: impl FnMut(&StepResult),
) -> StepResult {
    let budget = tick_budget(max_time, sim.config().time_step);
    for _ in 0..budget {
        let snapshot = sim.step();
        on_step(&snapshot);
        if snapshot.status.is_terminal() {
            break;
        }
    }
    let last = sim.snapshot();
    if !last.status.is_terminal() {
        info!(elapsed = last.elapsed_time, range = last.range, "time limit reached");
    }
    last
}

/// Run on the real-time loop thread until the run stops or `max_time`
/// simulated seconds have passed.
pub fn run_realtime(
    sim: Simulation,
    max_time: f64,
    tick_rate: f64,
    mut on_step: impl FnMut(&StepResult),
) -> Result<StepResult, AppError> {
    let budget = tick_budget(max_time, sim.config().time_step);
    let mut last = sim.snapshot();
    let handle = game_loop::spawn_realtime_loop(sim, tick_rate).map_err(AppError::Thread)?;

    for snapshot in handle.snapshots.iter() {
        on_step(&snapshot);
        last = snapshot;
        if snapshot.status.is_terminal() || snapshot.tick >= budget {
            break;
        }
    }
    handle.shutdown();

    if !last.status.is_terminal() {
        info!(elapsed = last.elapsed_time, range = last.range, "time limit reached");
    }
    Ok(last)
}
