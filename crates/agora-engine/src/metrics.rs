//! Derived per-tick views: `Metrics` and `InteractionStats`.
//!
//! Both are stateless aggregations — fully recomputed each tick from that
//! tick's raw counts and edge log, never carried forward.  The only
//! cross-tick state in the system lives in the agents' lifetime counters.

use crate::interaction::InteractionEdge;

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Headline metrics for the most recent tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Population-wide fraction of similar neighbors, in `[0, 1]`.
    /// Higher = more ideological clustering.
    pub schelling_index: f64,

    /// Successful syntheses per attempt this tick, in `[0, 100]`.
    pub steelmanning_rate: f64,

    /// Mean ideological distance over SUCCESSFUL syntheses only.
    pub avg_ideological_distance: f64,

    /// Agents relocated this tick due to neighborhood dissatisfaction.
    pub forced_mobility: u32,
}

impl Metrics {
    /// Aggregate one tick's raw tallies.
    ///
    /// Every zero-denominator case resolves to 0: no neighbor pairs anywhere
    /// on the grid, no synthesis attempts, no successes.
    pub fn from_tallies(
        similar_neighbors: u64,
        total_neighbors:   u64,
        attempts:          u64,
        successes:         u64,
        success_distance:  f64,
        forced_mobility:   u32,
    ) -> Self {
        let schelling_index = if total_neighbors > 0 {
            similar_neighbors as f64 / total_neighbors as f64
        } else {
            0.0
        };
        let steelmanning_rate = if attempts > 0 {
            successes as f64 / attempts as f64 * 100.0
        } else {
            0.0
        };
        let avg_ideological_distance = if successes > 0 {
            success_distance / successes as f64
        } else {
            0.0
        };
        Self {
            schelling_index,
            steelmanning_rate,
            avg_ideological_distance,
            forced_mobility,
        }
    }
}

// ── InteractionStats ──────────────────────────────────────────────────────────

/// Per-tick interaction breakdown, derived solely from the tick's edge log.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionStats {
    /// Alike interactions initiated this tick, averaged over all agents.
    pub avg_interactions_alike: f64,

    /// Counter-ideological interactions initiated this tick, per agent.
    pub avg_interactions_counter: f64,

    /// Success percentage among alike pairs this tick, in `[0, 100]`.
    pub success_rate_alike: f64,

    /// Success percentage among counter pairs this tick, in `[0, 100]`.
    pub success_rate_counter: f64,

    /// Total edges recorded this tick (one per interacting agent).
    pub total_interactions: usize,
}

impl InteractionStats {
    /// Recompute the breakdown from the current tick's edges.
    ///
    /// Classification repeats the alike/counter split from each edge's
    /// recorded distance, so the stats stay a pure function of the log.
    pub fn from_edges(edges: &[InteractionEdge], agent_count: usize) -> Self {
        let mut alike = 0u64;
        let mut counter = 0u64;
        let mut success_alike = 0u64;
        let mut success_counter = 0u64;

        for edge in edges {
            if edge.is_alike() {
                alike += 1;
                success_alike += edge.success as u64;
            } else {
                counter += 1;
                success_counter += edge.success as u64;
            }
        }

        let per_agent = |n: u64| {
            if agent_count > 0 {
                n as f64 / agent_count as f64
            } else {
                0.0
            }
        };
        let rate = |succ: u64, total: u64| {
            if total > 0 {
                succ as f64 / total as f64 * 100.0
            } else {
                0.0
            }
        };

        Self {
            avg_interactions_alike:   per_agent(alike),
            avg_interactions_counter: per_agent(counter),
            success_rate_alike:       rate(success_alike, alike),
            success_rate_counter:     rate(success_counter, counter),
            total_interactions:       edges.len(),
        }
    }
}
