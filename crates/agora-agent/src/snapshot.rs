//! Read-only per-agent view handed to external consumers.

use agora_core::AgentId;

use crate::AgentStore;

/// Plain-data copy of one agent's state at the end of a tick.
///
/// Consumers (renderers, writers) read these between ticks; they carry no
/// references into the store, so holding them across a tick is safe — they
/// are just stale, never dangling.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:                   AgentId,
    pub x:                    u32,
    pub y:                    u32,
    pub ideology:             f64,
    pub status:               f64,
    pub tolerance:            f64,
    pub synthesis_capacity:   f64,
    pub dissatisfied:         bool,
    pub interactions_alike:   u64,
    pub interactions_counter: u64,
    pub success_alike:        u64,
    pub success_counter:      u64,
}

impl AgentStore {
    /// Snapshot a single agent.
    pub fn snapshot(&self, agent: AgentId) -> AgentSnapshot {
        let i = agent.index();
        AgentSnapshot {
            id:                   agent,
            x:                    self.x[i],
            y:                    self.y[i],
            ideology:             self.ideology[i],
            status:               self.status[i],
            tolerance:            self.tolerance[i],
            synthesis_capacity:   self.synthesis_capacity[i],
            dissatisfied:         self.dissatisfied[i],
            interactions_alike:   self.interactions_alike[i],
            interactions_counter: self.interactions_counter[i],
            success_alike:        self.success_alike[i],
            success_counter:      self.success_counter[i],
        }
    }

    /// Snapshot the whole population in id order.
    pub fn snapshots(&self) -> Vec<AgentSnapshot> {
        self.agent_ids().map(|a| self.snapshot(a)).collect()
    }
}
