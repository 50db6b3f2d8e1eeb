//! The `Grid` — dense row-major cell storage with an occupancy counter.

use agora_core::AgentId;

use crate::{GridError, GridResult};

/// A `width × height` board where each cell holds at most one agent.
///
/// Occupancy is tracked incrementally so `occupied_count`/`empty_count` are
/// O(1); the movement phase consults `empty_count` once per tick before
/// drawing relocation targets.
pub struct Grid {
    width:    u32,
    height:   u32,
    /// Row-major cells; `AgentId::INVALID` = empty.
    cells:    Vec<AgentId>,
    occupied: usize,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![AgentId::INVALID; width as usize * height as usize],
            occupied: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.  Equals the engine's agent count whenever
    /// the grid is consistent.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Number of empty cells.
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied
    }

    /// Row-major index of `(x, y)`.  Caller guarantees bounds.
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// The agent at `(x, y)`, or `AgentId::INVALID` if the cell is empty.
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn agent_at(&self, x: u32, y: u32) -> AgentId {
        self.cells[self.index(x, y)]
    }

    /// `true` if `(x, y)` holds no agent.
    #[inline]
    pub fn is_empty_cell(&self, x: u32, y: u32) -> bool {
        self.agent_at(x, y) == AgentId::INVALID
    }

    /// Put `agent` on `(x, y)`.
    ///
    /// # Errors
    ///
    /// `CellOccupied` if another agent already holds the cell, `OutOfBounds`
    /// past the border.  The grid is unchanged on error.
    pub fn place(&mut self, agent: AgentId, x: u32, y: u32) -> GridResult<()> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        let idx = self.index(x, y);
        let occupant = self.cells[idx];
        if occupant != AgentId::INVALID {
            return Err(GridError::CellOccupied { x, y, occupant });
        }
        self.cells[idx] = agent;
        self.occupied += 1;
        Ok(())
    }

    /// Empty `(x, y)`, returning the previous occupant
    /// (`AgentId::INVALID` if the cell was already empty).
    ///
    /// # Panics
    /// Panics if `(x, y)` is out of bounds.
    pub fn vacate(&mut self, x: u32, y: u32) -> AgentId {
        let idx = self.index(x, y);
        let occupant = self.cells[idx];
        if occupant != AgentId::INVALID {
            self.cells[idx] = AgentId::INVALID;
            self.occupied -= 1;
        }
        occupant
    }

    /// Occupied subset of the 8 Moore-neighborhood cells of `(x, y)`.
    ///
    /// Border and corner cells yield fewer neighbors; the grid never wraps.
    pub fn neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = AgentId> + '_ {
        // i64 arithmetic so x=0 / y=0 offsets don't underflow.
        let (x, y) = (x as i64, y as i64);
        let (w, h) = (self.width as i64, self.height as i64);
        [
            (-1, -1), (0, -1), (1, -1),
            (-1,  0),          (1,  0),
            (-1,  1), (0,  1), (1,  1),
        ]
        .into_iter()
        .filter_map(move |(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            if nx < 0 || nx >= w || ny < 0 || ny >= h {
                return None;
            }
            let agent = self.cells[ny as usize * w as usize + nx as usize];
            (agent != AgentId::INVALID).then_some(agent)
        })
    }

    /// Empty every cell.  Used by `initialize` before re-population.
    pub fn clear(&mut self) {
        self.cells.fill(AgentId::INVALID);
        self.occupied = 0;
    }
}
