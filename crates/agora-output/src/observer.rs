//! `EngineOutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use agora_agent::AgentStore;
use agora_core::Tick;
use agora_engine::{EngineObserver, InteractionEdge, InteractionStats, Metrics};

use crate::row::{AgentSnapshotRow, InteractionEdgeRow, TickMetricsRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// An [`EngineObserver`] that writes tick metrics, agent snapshots, and
/// interaction edges to any [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `EngineObserver`
/// methods have no return value.  After the run completes, check for errors
/// with [`take_error`][Self::take_error].
pub struct EngineOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EngineOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for EngineOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, metrics: &Metrics, stats: &InteractionStats) {
        let row = TickMetricsRow {
            tick:                     tick.0,
            schelling_index:          metrics.schelling_index,
            steelmanning_rate:        metrics.steelmanning_rate,
            avg_ideological_distance: metrics.avg_ideological_distance,
            forced_mobility:          metrics.forced_mobility,
            total_interactions:       stats.total_interactions as u64,
        };
        let result = self.writer.write_tick_metrics(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, edges: &[InteractionEdge]) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|a| {
                let i = a.index();
                AgentSnapshotRow {
                    agent_id:     a.0,
                    tick:         tick.0,
                    x:            agents.x[i],
                    y:            agents.y[i],
                    ideology:     agents.ideology[i],
                    status:       agents.status[i],
                    dissatisfied: agents.dissatisfied[i],
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_agent_snapshots(&rows);
            self.store_err(result);
        }

        let edge_rows: Vec<InteractionEdgeRow> = edges
            .iter()
            .map(|e| InteractionEdgeRow {
                tick:     tick.0,
                source:   e.source.0,
                target:   e.target.0,
                success:  e.success,
                distance: e.distance,
            })
            .collect();

        if !edge_rows.is_empty() {
            let result = self.writer.write_edges(&edge_rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
