//! Unit tests for the grid.

#[cfg(test)]
mod occupancy {
    use agora_core::AgentId;

    use crate::{Grid, GridError};

    #[test]
    fn starts_empty() {
        let g = Grid::new(4, 3);
        assert_eq!(g.cell_count(), 12);
        assert_eq!(g.occupied_count(), 0);
        assert_eq!(g.empty_count(), 12);
        assert!(g.is_empty_cell(3, 2));
    }

    #[test]
    fn place_then_lookup() {
        let mut g = Grid::new(4, 4);
        g.place(AgentId(7), 1, 2).unwrap();
        assert_eq!(g.agent_at(1, 2), AgentId(7));
        assert_eq!(g.occupied_count(), 1);
        assert_eq!(g.empty_count(), 15);
    }

    #[test]
    fn double_place_rejected() {
        let mut g = Grid::new(2, 2);
        g.place(AgentId(0), 0, 0).unwrap();
        let err = g.place(AgentId(1), 0, 0).unwrap_err();
        assert_eq!(err, GridError::CellOccupied { x: 0, y: 0, occupant: AgentId(0) });
        // Grid unchanged on error.
        assert_eq!(g.agent_at(0, 0), AgentId(0));
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut g = Grid::new(2, 2);
        assert!(matches!(
            g.place(AgentId(0), 2, 0),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            g.place(AgentId(0), 0, 5),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn vacate_returns_occupant() {
        let mut g = Grid::new(2, 2);
        g.place(AgentId(3), 1, 1).unwrap();
        assert_eq!(g.vacate(1, 1), AgentId(3));
        assert_eq!(g.occupied_count(), 0);
        // Vacating an empty cell is a no-op.
        assert_eq!(g.vacate(1, 1), AgentId::INVALID);
        assert_eq!(g.occupied_count(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = Grid::new(3, 3);
        g.place(AgentId(0), 0, 0).unwrap();
        g.place(AgentId(1), 2, 2).unwrap();
        g.clear();
        assert_eq!(g.occupied_count(), 0);
        assert!(g.is_empty_cell(0, 0));
        assert!(g.is_empty_cell(2, 2));
    }
}

#[cfg(test)]
mod neighborhoods {
    use agora_core::AgentId;

    use crate::Grid;

    /// 3×3 grid fully occupied; ids = row-major cell index.
    fn full_3x3() -> Grid {
        let mut g = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                g.place(AgentId(y * 3 + x), x, y).unwrap();
            }
        }
        g
    }

    #[test]
    fn center_has_eight() {
        let g = full_3x3();
        let mut n: Vec<u32> = g.neighbors(1, 1).map(|a| a.0).collect();
        n.sort_unstable();
        assert_eq!(n, [0, 1, 2, 3, 5, 6, 7, 8]); // everyone but the center (4)
    }

    #[test]
    fn corner_has_three() {
        let g = full_3x3();
        let mut n: Vec<u32> = g.neighbors(0, 0).map(|a| a.0).collect();
        n.sort_unstable();
        assert_eq!(n, [1, 3, 4]);
    }

    #[test]
    fn edge_has_five() {
        let g = full_3x3();
        assert_eq!(g.neighbors(1, 0).count(), 5);
    }

    #[test]
    fn no_wraparound() {
        // Only the far corner is occupied: the near corner must not see it.
        let mut g = Grid::new(3, 3);
        g.place(AgentId(0), 2, 2).unwrap();
        assert_eq!(g.neighbors(0, 0).count(), 0);
    }

    #[test]
    fn empty_cells_skipped() {
        let mut g = Grid::new(3, 3);
        g.place(AgentId(5), 0, 1).unwrap();
        let n: Vec<AgentId> = g.neighbors(1, 1).collect();
        assert_eq!(n, [AgentId(5)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let mut g = Grid::new(1, 1);
        g.place(AgentId(0), 0, 0).unwrap();
        assert_eq!(g.neighbors(0, 0).count(), 0);
    }
}
