//! `agora-output` — simulation output writers for the agora engine.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created                                                    |
//! |----------|---------|------------------------------------------------------------------|
//! | *(none)* | CSV     | `agent_snapshots.csv`, `tick_metrics.csv`, `interaction_edges.csv` |
//! | `sqlite` | SQLite  | `output.db`                                                      |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`EngineOutputObserver`], which implements `agora_engine::EngineObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use agora_output::{CsvWriter, EngineOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = EngineOutputObserver::new(writer);
//! engine.run_ticks(total_ticks, &hyperparams, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EngineOutputObserver;
pub use row::{AgentSnapshotRow, InteractionEdgeRow, TickMetricsRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
