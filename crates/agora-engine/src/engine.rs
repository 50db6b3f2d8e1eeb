//! The `SimulationEngine` and its five-phase tick.

use agora_agent::AgentStore;
use agora_core::{AgentId, EngineConfig, Hyperparams, SimRng, Tick};
use agora_grid::Grid;

use crate::interaction::{ALIKE_THRESHOLD, InteractionEdge};
use crate::metrics::{InteractionStats, Metrics};
use crate::observer::EngineObserver;

/// Relocation draws per dissatisfied agent before it gives up for the tick.
const RELOCATION_ATTEMPTS: usize = 100;

/// Fraction of the remaining ideological gap a successful synthesis closes
/// (before stiffness damping).
const PULL_FACTOR: f64 = 0.2;

// ── Per-tick intermediates ────────────────────────────────────────────────────

/// One agent's target selection, produced by phase ③ and consumed by phase ④.
///
/// Buffering all selections before any resolution keeps the phases strictly
/// separated: no agent's synthesis outcome can influence another agent's
/// target choice within the same tick.
struct PendingSynthesis {
    source:   AgentId,
    target:   AgentId,
    /// Distance at selection time; also the value recorded on the edge.
    distance: f64,
    alike:    bool,
}

/// Raw synthesis counts accumulated by phase ④.
#[derive(Default)]
struct SynthesisTally {
    attempts:         u64,
    successes:        u64,
    /// Summed distance over successful syntheses only.
    success_distance: f64,
}

// ── SimulationEngine ──────────────────────────────────────────────────────────

/// Owns the grid, the agent population, the RNG, and the most recent tick's
/// derived views.
///
/// Single-threaded and non-reentrant by construction: both entry points take
/// `&mut self` and run to completion, so the "snapshots are stable between
/// calls" contract holds for free.  Create once, `initialize`, then `tick`
/// at the driver's cadence.
pub struct SimulationEngine {
    config:       EngineConfig,
    current_tick: Tick,
    grid:         Grid,
    agents:       AgentStore,
    rng:          SimRng,
    metrics:      Metrics,
    edges:        Vec<InteractionEdge>,
    stats:        InteractionStats,
}

impl SimulationEngine {
    /// Create an engine with an empty grid.  Call `initialize` before `tick`.
    pub fn new(config: EngineConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        let rng = SimRng::new(config.seed);
        Self {
            config,
            current_tick: Tick::ZERO,
            grid,
            agents: AgentStore::default(),
            rng,
            metrics: Metrics::default(),
            edges: Vec::new(),
            stats: InteractionStats::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Reset the run: reseed the RNG, wipe all state, and place
    /// `floor(cells × density / 100)` agents on distinct cells by rejection
    /// sampling.
    ///
    /// Reseeding here (rather than only in `new`) means `initialize` + N
    /// ticks is reproducible without rebuilding the engine.
    pub fn initialize(&mut self, hyperparams: &Hyperparams) {
        self.rng.reseed(self.config.seed);
        self.grid.clear();
        self.agents.clear();
        self.edges.clear();
        self.metrics = Metrics::default();
        self.stats = InteractionStats::default();
        self.current_tick = Tick::ZERO;

        let cells = self.grid.cell_count();
        // Density is not range-checked (caller contract), but a target above
        // the cell count would make rejection sampling spin forever; cap at a
        // full board.
        let target = ((cells as f64 * hyperparams.population_density / 100.0).floor() as usize)
            .min(cells);
        let (w, h) = (self.grid.width(), self.grid.height());

        for _ in 0..target {
            let (x, y) = loop {
                let x = self.rng.gen_range(0..w);
                let y = self.rng.gen_range(0..h);
                if self.grid.is_empty_cell(x, y) {
                    break (x, y);
                }
            };
            let agent = self.agents.spawn(x, y, &mut self.rng);
            self.grid
                .place(agent, x, y)
                .expect("rejection sampling selected an empty cell");
        }

        tracing::info!(
            "initialized {} agents on {}x{} grid (seed {})",
            target,
            w,
            h,
            self.config.seed
        );
    }

    /// Advance the simulation by one step under `hyperparams`.
    ///
    /// Parameters may differ from the `initialize`-time values — live
    /// adjustment between ticks is expected.  All five phases run to
    /// completion before this returns; afterwards every snapshot accessor
    /// reflects the new tick and stays unchanged until the next call.
    pub fn tick(&mut self, hyperparams: &Hyperparams) {
        let (similar, total) = self.phase_evaluation();
        let moved = self.phase_movement();
        self.edges.clear();
        let pending = self.phase_interaction();
        let tally = self.phase_synthesis(&pending, hyperparams);

        self.metrics = Metrics::from_tallies(
            similar,
            total,
            tally.attempts,
            tally.successes,
            tally.success_distance,
            moved,
        );
        self.stats = InteractionStats::from_edges(&self.edges, self.agents.len());

        tracing::debug!(
            "{}: schelling {:.3}, steelmanning {:.1}%, moved {}",
            self.current_tick,
            self.metrics.schelling_index,
            self.metrics.steelmanning_rate,
            moved
        );

        self.current_tick = self.current_tick + 1;
    }

    /// Run exactly `n` ticks under fixed `hyperparams`, with observer
    /// callbacks and a snapshot every `config.snapshot_interval_ticks`
    /// (0 disables snapshots).
    ///
    /// Convenience for batch runs and tests; interactive drivers call
    /// [`tick`](Self::tick) directly so they can vary parameters.
    pub fn run_ticks<O: EngineObserver>(
        &mut self,
        n:           u64,
        hyperparams: &Hyperparams,
        observer:    &mut O,
    ) {
        let interval = self.config.snapshot_interval_ticks;
        for _ in 0..n {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.tick(hyperparams);
            observer.on_tick_end(now, &self.metrics, &self.stats);
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_snapshot(now, &self.agents, &self.edges);
            }
        }
        observer.on_run_end(self.current_tick);
    }

    // ── Read-only snapshot accessors ──────────────────────────────────────

    /// The agent population (positions, ideology, counters, …).
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Headline metrics for the most recent tick.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The most recent tick's interaction edges.
    pub fn edges(&self) -> &[InteractionEdge] {
        &self.edges
    }

    /// Per-tick interaction breakdown for the most recent tick.
    pub fn interaction_stats(&self) -> &InteractionStats {
        &self.stats
    }

    /// The next tick to be computed (0 right after `initialize`).
    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Direct grid access for consistency checks and tests.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── Phase ① — evaluation ──────────────────────────────────────────────

    /// Recompute every agent's dissatisfaction flag and return the global
    /// `(similar, total)` neighbor tallies for the Schelling index.
    ///
    /// A neighbor is similar when `|Δideology| / 2 ≤ tolerance`; an agent is
    /// dissatisfied when its similar ratio falls below `1 − tolerance`.
    /// Agents with no neighbors are never dissatisfied.
    fn phase_evaluation(&mut self) -> (u64, u64) {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid = &self.grid;
        let agents = &mut self.agents;

        let mut similar_total = 0u64;
        let mut neighbors_total = 0u64;

        for i in 0..agents.len() {
            let mut neighbor_count = 0u64;
            let mut similar = 0u64;
            for neighbor in grid.neighbors(agents.x[i], agents.y[i]) {
                neighbor_count += 1;
                let diff = (agents.ideology[i] - agents.ideology[neighbor.index()]).abs() / 2.0;
                if diff <= agents.tolerance[i] {
                    similar += 1;
                }
            }

            if neighbor_count == 0 {
                agents.dissatisfied[i] = false;
                continue;
            }

            similar_total += similar;
            neighbors_total += neighbor_count;

            let similar_ratio = similar as f64 / neighbor_count as f64;
            agents.dissatisfied[i] = similar_ratio < (1.0 - agents.tolerance[i]);
        }

        (similar_total, neighbors_total)
    }

    // ── Phase ② — movement ────────────────────────────────────────────────

    /// Relocate dissatisfied agents to random empty cells, best-effort.
    ///
    /// Up to [`RELOCATION_ATTEMPTS`] independent uniform draws per agent;
    /// if every draw collides the agent stays put — an accepted outcome,
    /// not an error.  With zero empty cells the whole phase is a no-op.
    /// Iteration follows stable agent id order so a fixed RNG stream
    /// reproduces the same moves.
    fn phase_movement(&mut self) -> u32 {
        if self.grid.empty_count() == 0 {
            return 0;
        }

        let mut moved = 0u32;
        let (w, h) = (self.grid.width(), self.grid.height());

        for i in 0..self.agents.len() {
            if !self.agents.dissatisfied[i] {
                continue;
            }
            let agent = AgentId(i as u32);
            for _ in 0..RELOCATION_ATTEMPTS {
                let nx = self.rng.gen_range(0..w);
                let ny = self.rng.gen_range(0..h);
                if !self.grid.is_empty_cell(nx, ny) {
                    continue;
                }
                let (ox, oy) = self.agents.position(agent);
                self.grid.vacate(ox, oy);
                self.grid
                    .place(agent, nx, ny)
                    .expect("relocation target verified empty");
                self.agents.set_position(agent, nx, ny);
                moved += 1;
                break;
            }
        }

        moved
    }

    // ── Phase ③ — interaction ─────────────────────────────────────────────

    /// Every agent with at least one neighbor picks a synthesis target
    /// uniformly at random and classifies the pair by raw distance.
    ///
    /// Lifetime alike/counter counters are bumped here; resolution waits for
    /// phase ④ so that all selections see the same post-movement board.
    fn phase_interaction(&mut self) -> Vec<PendingSynthesis> {
        let grid = &self.grid;
        let agents = &mut self.agents;
        let rng = &mut self.rng;

        let mut pending = Vec::with_capacity(agents.len());
        let mut scratch: Vec<AgentId> = Vec::with_capacity(8);

        for i in 0..agents.len() {
            scratch.clear();
            scratch.extend(grid.neighbors(agents.x[i], agents.y[i]));
            let Some(&target) = rng.choose(&scratch) else {
                continue;
            };

            let distance = (agents.ideology[i] - agents.ideology[target.index()]).abs();
            let alike = distance < ALIKE_THRESHOLD;
            if alike {
                agents.interactions_alike[i] += 1;
            } else {
                agents.interactions_counter[i] += 1;
            }

            pending.push(PendingSynthesis { source: AgentId(i as u32), target, distance, alike });
        }

        pending
    }

    // ── Phase ④ — synthesis resolution ────────────────────────────────────

    /// Resolve every pending pair in initiator id order, recording one edge
    /// per pair regardless of outcome.
    ///
    /// Success probability `capacity − cost/100 + anonymity/200` is used
    /// UNCLAMPED against a uniform `[0, 1)` draw: a value ≤ 0 can never win
    /// and ≥ 1 always does.  That is the model's intended behavior at the
    /// extremes — do not clamp it.
    ///
    /// On success both parties gain status, but only the initiator's
    /// ideology moves toward the target (asymmetric by design).  Effects
    /// apply sequentially, so a later pair sees earlier pulls.
    fn phase_synthesis(
        &mut self,
        pending:     &[PendingSynthesis],
        hyperparams: &Hyperparams,
    ) -> SynthesisTally {
        let agents = &mut self.agents;
        let rng = &mut self.rng;
        let edges = &mut self.edges;

        let mut tally = SynthesisTally { attempts: pending.len() as u64, ..Default::default() };

        for p in pending {
            let (s, t) = (p.source.index(), p.target.index());

            let probability = agents.synthesis_capacity[s]
                - hyperparams.synthesis_cost / 100.0
                + hyperparams.anonymity_level / 200.0;
            let draw: f64 = rng.random();
            let success = draw < probability;

            if success {
                let gain = p.distance * hyperparams.status_incentive / 10.0;
                agents.status[s] += gain;
                agents.status[t] += gain;

                let stiffness = hyperparams.ideological_stiffness / 100.0;
                let pull =
                    (agents.ideology[t] - agents.ideology[s]) * (1.0 - stiffness) * PULL_FACTOR;
                agents.ideology[s] = (agents.ideology[s] + pull).clamp(-1.0, 1.0);

                if p.alike {
                    agents.success_alike[s] += 1;
                } else {
                    agents.success_counter[s] += 1;
                }
                tally.successes += 1;
                tally.success_distance += p.distance;
            }

            edges.push(InteractionEdge {
                source:   p.source,
                target:   p.target,
                success,
                distance: p.distance,
            });
        }

        tally
    }
}
