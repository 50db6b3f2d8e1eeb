//! Engine configuration and per-tick hyperparameters.
//!
//! `EngineConfig` is fixed at engine construction; `Hyperparams` is passed
//! into every `initialize`/`tick` call and may change between ticks (live
//! parameter adjustment from a control panel is the expected use).

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Construct-once engine configuration.
///
/// Typically loaded from a TOML file or CLI flags by the application crate
/// and passed to `SimulationEngine::new`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks during `run_ticks`.
    /// 0 disables snapshots entirely.
    pub snapshot_interval_ticks: u64,
}

impl EngineConfig {
    /// Total number of cells on the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for EngineConfig {
    /// The classic 50×50 board, seeded, snapshot every tick.
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            seed: 42,
            snapshot_interval_ticks: 1,
        }
    }
}

// ── Hyperparams ───────────────────────────────────────────────────────────────

/// Tunable model parameters, read anew on every `initialize`/`tick` call.
///
/// Documented ranges are a caller contract, NOT enforced by the engine:
/// out-of-range values are passed through untouched (see the crate docs of
/// `agora-engine` for why the synthesis probability is deliberately allowed
/// to leave `[0, 1]`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hyperparams {
    /// Effort cost of attempting a synthesis, in `[0, 100]`.
    /// Subtracted from the success probability as `synthesis_cost / 100`.
    pub synthesis_cost: f64,

    /// Status reward scale for successful syntheses, in `[0, 100]`.
    /// Both parties gain `distance * status_incentive / 10`.
    pub status_incentive: f64,

    /// Identity veil strength, in `[0, 100]`.  Raises the synthesis success
    /// probability by `anonymity_level / 200`.
    pub anonymity_level: f64,

    /// Resistance to ideological movement, in `[0, 100]`.  100 freezes all
    /// ideologies in place.
    pub ideological_stiffness: f64,

    /// Percentage of grid cells to populate at `initialize`, in `[10, 90]`.
    pub population_density: f64,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Self {
            synthesis_cost: 50.0,
            status_incentive: 50.0,
            anonymity_level: 0.0,
            ideological_stiffness: 50.0,
            population_density: 30.0,
        }
    }
}
