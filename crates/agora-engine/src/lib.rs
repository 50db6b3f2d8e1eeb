//! `agora-engine` — the segregation/synthesis simulation engine.
//!
//! # Five-phase tick
//!
//! ```text
//! tick(hyperparams):
//!   ① Evaluation  — mark each agent satisfied/dissatisfied from its Moore
//!                   neighborhood; accumulate the global Schelling index.
//!   ② Movement    — each dissatisfied agent draws up to 100 random cells
//!                   and relocates to the first empty one (best-effort).
//!   ③ Interaction — each agent with neighbors picks one uniformly as its
//!                   synthesis target and classifies the pair alike/counter.
//!   ④ Synthesis   — one uniform draw per pair against an UNCLAMPED success
//!                   probability; winners gain status, the initiator's
//!                   ideology shifts toward the target.
//!   ⑤ Aggregation — metrics and per-tick interaction stats recomputed from
//!                   scratch; the edge log is replaced wholesale.
//! ```
//!
//! Each phase completes for the whole population before the next begins —
//! there is no per-agent interleaving across phases.  All phases walk agents
//! in ascending id order and draw randomness from the engine's single
//! [`SimRng`](agora_core::SimRng), so a fixed seed reproduces a run exactly.
//!
//! # Degenerate inputs
//!
//! The engine raises no errors for any reachable input: zero agents, a full
//! grid, or an isolated agent all resolve to zeros/no-ops.  Hyperparameters
//! are NOT range-checked — in particular the synthesis success probability
//! `capacity − cost/100 + anonymity/200` is used unclamped, so extreme
//! parameter settings produce guaranteed-failure or guaranteed-success
//! regimes on purpose.
//!
//! # Driving the engine
//!
//! The caller owns the cadence: call [`SimulationEngine::initialize`] once,
//! then [`SimulationEngine::tick`] at whatever interval the presentation
//! layer wants, reading snapshots between calls.  Calls must not overlap
//! (`&mut self` enforces this within one thread).  [`SimulationEngine::run_ticks`]
//! is a convenience loop for batch runs and tests, with observer callbacks
//! in the style of a progress/output hook.

pub mod engine;
pub mod interaction;
pub mod metrics;
pub mod observer;


pub use engine::SimulationEngine;
pub use interaction::{ALIKE_THRESHOLD, InteractionEdge};
pub use metrics::{InteractionStats, Metrics};
pub use observer::{EngineObserver, NoopObserver};
