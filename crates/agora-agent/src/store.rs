//! Core agent storage: `AgentStore` (SoA data) and the attribute factory.

use agora_core::{AgentId, SimRng};

// ── Attribute sampling ranges ─────────────────────────────────────────────────

/// Tolerance to ideological stress, fixed at creation.
const TOLERANCE_MIN: f64 = 0.3;
const TOLERANCE_MAX: f64 = 0.7;

/// Capacity to synthesize an opposing view, fixed at creation.
const CAPACITY_MIN: f64 = 0.2;
const CAPACITY_MAX: f64 = 0.8;

/// Every agent starts with this much status.
const INITIAL_STATUS: f64 = 1.0;

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Positions are duplicated here and in the grid's cells; the engine keeps
/// the two views consistent (the grid maps cell → agent, the store maps
/// agent → cell).  All fields are `pub` for direct indexed access from the
/// tick phases — the store itself enforces no cross-field invariants.
#[derive(Default)]
pub struct AgentStore {
    /// Grid x coordinate, indexed by `AgentId`.
    pub x: Vec<u32>,

    /// Grid y coordinate, indexed by `AgentId`.
    pub y: Vec<u32>,

    /// Ideological position in `[-1, 1]`.
    pub ideology: Vec<f64>,

    /// Accumulated social status, `>= 0`, unbounded.
    pub status: Vec<f64>,

    /// Minimum fraction of similar neighbors tolerated, in `[0.3, 0.7]`.
    /// Fixed at creation.
    pub tolerance: Vec<f64>,

    /// Base synthesis success capacity, in `[0.2, 0.8]`.  Fixed at creation.
    pub synthesis_capacity: Vec<f64>,

    /// Recomputed by the evaluation phase every tick.
    pub dissatisfied: Vec<bool>,

    // ── Lifetime interaction counters ─────────────────────────────────────
    // Cumulative for the whole run; reset only by re-initialization.
    /// Interactions initiated against a like-minded target (distance < 0.5).
    pub interactions_alike: Vec<u64>,

    /// Interactions initiated against an opposing target.
    pub interactions_counter: Vec<u64>,

    /// Successful syntheses with a like-minded target.
    pub success_alike: Vec<u64>,

    /// Successful syntheses with an opposing target.
    pub success_counter: Vec<u64>,
}

impl AgentStore {
    /// Create an empty store with room for `capacity` agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x:                    Vec::with_capacity(capacity),
            y:                    Vec::with_capacity(capacity),
            ideology:             Vec::with_capacity(capacity),
            status:               Vec::with_capacity(capacity),
            tolerance:            Vec::with_capacity(capacity),
            synthesis_capacity:   Vec::with_capacity(capacity),
            dissatisfied:         Vec::with_capacity(capacity),
            interactions_alike:   Vec::with_capacity(capacity),
            interactions_counter: Vec::with_capacity(capacity),
            success_alike:        Vec::with_capacity(capacity),
            success_counter:      Vec::with_capacity(capacity),
        }
    }

    /// Number of agents.  Equals the length of every SoA `Vec`.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    ///
    /// This IS the engine's stable iteration order: every tick phase walks
    /// agents in exactly this sequence, which is what makes a seeded run
    /// reproducible.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.len() as u32).map(AgentId)
    }

    /// Create one agent at `(x, y)` with freshly sampled attributes and
    /// return its id.
    ///
    /// Sampling order (position is chosen by the caller *before* this call):
    /// ideology `U[-1, 1]`, tolerance `U[0.3, 0.7]`, synthesis capacity
    /// `U[0.2, 0.8]`.  Status starts at 1.0; all counters at zero.
    pub fn spawn(&mut self, x: u32, y: u32, rng: &mut SimRng) -> AgentId {
        let id = AgentId(self.len() as u32);

        self.x.push(x);
        self.y.push(y);
        self.ideology.push(rng.gen_range(-1.0..=1.0));
        self.status.push(INITIAL_STATUS);
        self.tolerance.push(rng.gen_range(TOLERANCE_MIN..=TOLERANCE_MAX));
        self.synthesis_capacity.push(rng.gen_range(CAPACITY_MIN..=CAPACITY_MAX));
        self.dissatisfied.push(false);
        self.interactions_alike.push(0);
        self.interactions_counter.push(0);
        self.success_alike.push(0);
        self.success_counter.push(0);

        id
    }

    /// The `(x, y)` cell the agent reports itself at.
    #[inline]
    pub fn position(&self, agent: AgentId) -> (u32, u32) {
        (self.x[agent.index()], self.y[agent.index()])
    }

    /// Update the agent's reported cell.  The caller moves the grid entry.
    #[inline]
    pub fn set_position(&mut self, agent: AgentId, x: u32, y: u32) {
        self.x[agent.index()] = x;
        self.y[agent.index()] = y;
    }

    /// Remove every agent.  Used by `initialize` before re-population.
    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.ideology.clear();
        self.status.clear();
        self.tolerance.clear();
        self.synthesis_capacity.clear();
        self.dissatisfied.clear();
        self.interactions_alike.clear();
        self.interactions_counter.clear();
        self.success_alike.clear();
        self.success_counter.clear();
    }
}
