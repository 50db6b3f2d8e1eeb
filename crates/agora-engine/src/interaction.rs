//! Interaction edges — the per-tick synthesis attempt log.

use agora_core::AgentId;

/// Raw ideological distance below which a pair counts as "alike".
///
/// Distance is `|ideology_a − ideology_b|` (range `[0, 2]`), NOT the
/// normalized similarity measure used by the evaluation phase.
pub const ALIKE_THRESHOLD: f64 = 0.5;

/// One synthesis attempt, successful or not.
///
/// The complete edge set is replaced every tick; no history is retained.
/// `distance` is measured at target-selection time (phase ③), before any of
/// this tick's ideology pulls apply.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionEdge {
    /// The initiating agent.  Only this side's counters and ideology move.
    pub source: AgentId,

    /// The chosen neighbor.
    pub target: AgentId,

    /// Whether the synthesis draw succeeded.
    pub success: bool,

    /// Raw ideological distance between the pair, in `[0, 2]`.
    pub distance: f64,
}

impl InteractionEdge {
    /// `true` if the pair was classified alike (distance below the threshold).
    #[inline]
    pub fn is_alike(&self) -> bool {
        self.distance < ALIKE_THRESHOLD
    }
}
