//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `tick_metrics.csv`
//! - `interaction_edges.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, InteractionEdgeRow, OutputResult, TickMetricsRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    metrics:   Writer<File>,
    edges:     Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "x", "y", "ideology", "status", "dissatisfied"])?;

        let mut metrics = Writer::from_path(dir.join("tick_metrics.csv"))?;
        metrics.write_record([
            "tick",
            "schelling_index",
            "steelmanning_rate",
            "avg_ideological_distance",
            "forced_mobility",
            "total_interactions",
        ])?;

        let mut edges = Writer::from_path(dir.join("interaction_edges.csv"))?;
        edges.write_record(["tick", "source", "target", "success", "distance"])?;

        Ok(Self {
            snapshots,
            metrics,
            edges,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_agent_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.ideology.to_string(),
                row.status.to_string(),
                (row.dissatisfied as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.schelling_index.to_string(),
            row.steelmanning_rate.to_string(),
            row.avg_ideological_distance.to_string(),
            row.forced_mobility.to_string(),
            row.total_interactions.to_string(),
        ])?;
        Ok(())
    }

    fn write_edges(&mut self, rows: &[InteractionEdgeRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.tick.to_string(),
                row.source.to_string(),
                row.target.to_string(),
                (row.success as u8).to_string(),
                row.distance.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.metrics.flush()?;
        self.edges.flush()?;
        Ok(())
    }
}
