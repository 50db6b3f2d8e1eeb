//! Integration tests for agora-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, InteractionEdgeRow, TickMetricsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            agent_id,
            tick,
            x:            agent_id,
            y:            agent_id + 1,
            ideology:     -0.25,
            status:       1.5,
            dissatisfied: false,
        }
    }

    fn metrics_row(tick: u64) -> TickMetricsRow {
        TickMetricsRow {
            tick,
            schelling_index:          0.5,
            steelmanning_rate:        25.0,
            avg_ideological_distance: 0.75,
            forced_mobility:          3,
            total_interactions:       12,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_metrics.csv").exists());
        assert!(dir.path().join("interaction_edges.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["agent_id", "tick", "x", "y", "ideology", "status", "dissatisfied"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            [
                "tick",
                "schelling_index",
                "steelmanning_rate",
                "avg_ideological_distance",
                "forced_mobility",
                "total_interactions"
            ]
        );

        let mut rdr3 = csv::Reader::from_path(dir.path().join("interaction_edges.csv")).unwrap();
        let headers3: Vec<_> = rdr3.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers3, ["tick", "source", "target", "success", "distance"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_agent_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // agent_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[1][0], "1");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_metrics_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_metrics(&metrics_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");    // tick
        assert_eq!(&read_rows[0][1], "0.5");  // schelling_index
        assert_eq!(&read_rows[0][4], "3");    // forced_mobility
    }

    #[test]
    fn csv_edge_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_edges(&[InteractionEdgeRow {
            tick: 2, source: 4, target: 9, success: true, distance: 1.25,
        }])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("interaction_edges.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][1], "4");    // source
        assert_eq!(&read_rows[0][3], "1");    // success as 0/1
        assert_eq!(&read_rows[0][4], "1.25"); // distance
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_batches_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_agent_snapshots(&[]).unwrap();
        w.write_edges(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        use agora_core::{EngineConfig, Hyperparams};
        use agora_engine::SimulationEngine;

        use crate::observer::EngineOutputObserver;

        let config = EngineConfig {
            width: 10,
            height: 10,
            seed: 1,
            snapshot_interval_ticks: 2,
        };
        let hp = Hyperparams { population_density: 40.0, ..Hyperparams::default() };

        let mut engine = SimulationEngine::new(config);
        engine.initialize(&hp);

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = EngineOutputObserver::new(writer);
        engine.run_ticks(6, &hp, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // One metrics row per tick.
        let mut rdr = csv::Reader::from_path(dir.path().join("tick_metrics.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);

        // interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 40 agents).
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 120, "expected 3 ticks × 40 agents = 120 snapshot rows");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{AgentSnapshotRow, InteractionEdgeRow, TickMetricsRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows: Vec<AgentSnapshotRow> = (0..3)
            .map(|i| AgentSnapshotRow {
                agent_id:     i,
                tick:         1,
                x:            i,
                y:            0,
                ideology:     0.0,
                status:       1.0,
                dissatisfied: false,
            })
            .collect();
        w.write_agent_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_dissatisfied_as_integer() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_agent_snapshots(&[AgentSnapshotRow {
            agent_id:     0,
            tick:         0,
            x:            5,
            y:            9,
            ideology:     -1.0,
            status:       1.0,
            dissatisfied: true,
        }])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let val: i64 = conn
            .query_row("SELECT dissatisfied FROM agent_snapshots WHERE agent_id = 0", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(val, 1, "dissatisfied=true should be stored as 1");
    }

    #[test]
    fn sqlite_metrics_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_tick_metrics(&TickMetricsRow {
            tick:                     7,
            schelling_index:          0.8,
            steelmanning_rate:        12.5,
            avg_ideological_distance: 0.4,
            forced_mobility:          42,
            total_interactions:       99,
        })
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (schelling, moved): (f64, i64) = conn
            .query_row(
                "SELECT schelling_index, forced_mobility FROM tick_metrics WHERE tick = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(schelling, 0.8);
        assert_eq!(moved, 42);
    }

    #[test]
    fn sqlite_edges_written() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_edges(&[
            InteractionEdgeRow { tick: 0, source: 1, target: 2, success: true, distance: 0.3 },
            InteractionEdgeRow { tick: 0, source: 2, target: 1, success: false, distance: 0.3 },
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let successes: i64 = conn
            .query_row("SELECT COUNT(*) FROM interaction_edges WHERE success = 1", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(successes, 1);
    }
}
