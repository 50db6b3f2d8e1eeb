//! Engine observer trait for progress reporting and data collection.

use agora_agent::AgentStore;
use agora_core::Tick;

use crate::interaction::InteractionEdge;
use crate::metrics::{InteractionStats, Metrics};

/// Callbacks invoked by [`SimulationEngine::run_ticks`][crate::SimulationEngine::run_ticks]
/// at key points in the batch loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl EngineObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, metrics: &Metrics, _stats: &InteractionStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: schelling {:.3}", metrics.schelling_index);
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called at the very start of each tick, before any phase runs.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick completes, with that tick's metrics and
    /// interaction breakdown.
    fn on_tick_end(&mut self, _tick: Tick, _metrics: &Metrics, _stats: &InteractionStats) {}

    /// Called at snapshot intervals (`EngineConfig::snapshot_interval_ticks`).
    ///
    /// Provides read-only access to the full agent state and the tick's edge
    /// log so output writers can record rows without the engine knowing
    /// about any specific format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _edges: &[InteractionEdge]) {}

    /// Called once after the final tick of a `run_ticks` batch.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// An [`EngineObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
