//! `agora-core` — foundational types for the agora segregation-dynamics engine.
//!
//! This crate is a dependency of every other `agora-*` crate.  It intentionally
//! has no `agora-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`ids`]     | `AgentId`                                     |
//! | [`tick`]    | `Tick`                                        |
//! | [`rng`]     | `SimRng` (the engine's single RNG)            |
//! | [`config`]  | `EngineConfig`, `Hyperparams`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod ids;
pub mod rng;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EngineConfig, Hyperparams};
pub use ids::AgentId;
pub use rng::SimRng;
pub use tick::Tick;
