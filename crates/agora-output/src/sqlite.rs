//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `agent_snapshots`, `tick_metrics`, and `interaction_edges`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, InteractionEdgeRow, OutputResult, TickMetricsRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS agent_snapshots (
                 agent_id     INTEGER NOT NULL,
                 tick         INTEGER NOT NULL,
                 x            INTEGER NOT NULL,
                 y            INTEGER NOT NULL,
                 ideology     REAL    NOT NULL,
                 status       REAL    NOT NULL,
                 dissatisfied INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_metrics (
                 tick                     INTEGER PRIMARY KEY,
                 schelling_index          REAL    NOT NULL,
                 steelmanning_rate        REAL    NOT NULL,
                 avg_ideological_distance REAL    NOT NULL,
                 forced_mobility          INTEGER NOT NULL,
                 total_interactions       INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS interaction_edges (
                 tick     INTEGER NOT NULL,
                 source   INTEGER NOT NULL,
                 target   INTEGER NOT NULL,
                 success  INTEGER NOT NULL,
                 distance REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_agent_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO agent_snapshots \
                 (agent_id, tick, x, y, ideology, status, dissatisfied) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.agent_id,
                    row.tick,
                    row.x,
                    row.y,
                    row.ideology,
                    row.status,
                    row.dissatisfied as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_metrics \
             (tick, schelling_index, steelmanning_rate, avg_ideological_distance, \
              forced_mobility, total_interactions) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick,
                row.schelling_index,
                row.steelmanning_rate,
                row.avg_ideological_distance,
                row.forced_mobility,
                row.total_interactions,
            ],
        )?;
        Ok(())
    }

    fn write_edges(&mut self, rows: &[InteractionEdgeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO interaction_edges (tick, source, target, success, distance) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.source,
                    row.target,
                    row.success as i64,
                    row.distance,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
