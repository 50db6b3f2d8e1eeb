//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentSnapshotRow, InteractionEdgeRow, OutputResult, TickMetricsRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`EngineOutputObserver::take_error`].
pub trait OutputWriter {
    /// Write a batch of agent snapshots.
    fn write_agent_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one tick metrics row.
    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()>;

    /// Write a batch of interaction edges.
    fn write_edges(&mut self, rows: &[InteractionEdgeRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
