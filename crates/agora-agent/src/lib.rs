//! `agora-agent` — Structure-of-Arrays agent storage.
//!
//! Every `Vec` field of [`AgentStore`] has exactly `len()` elements; the
//! `AgentId` value is the index into all of them:
//!
//! ```ignore
//! let ideology = store.ideology[agent.index()];  // O(1), cache-friendly
//! ```
//!
//! Agents are created only by [`AgentStore::spawn`] during `initialize` and
//! live for the rest of the run — the engine relocates them but never
//! creates or destroys one mid-run.

pub mod snapshot;
pub mod store;


pub use snapshot::AgentSnapshot;
pub use store::AgentStore;
