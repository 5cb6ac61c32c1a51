use std::collections::BTreeMap;

use crate::types::*;

/// Fixed-size dungeon grid. Out-of-bounds reads answer `Wall` so movement
/// checks never need a separate bounds branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Dungeon {
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[self.index(pos)]
    }

    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// True iff `pos` is inside the grid and not a wall. Occupancy by other
    /// monsters is the caller's concern.
    pub fn can_move(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.cell_at(pos) != Cell::Wall
    }

    pub fn render_rows(&self) -> Vec<String> {
        self.cells.chunks(self.cols).map(|row| row.iter().map(|c| c.glyph()).collect()).collect()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.cols + (pos.col as usize)
    }
}

/// A full game state. Transitions clone the parent and mutate only the
/// clone; a state is never touched again once enqueued or returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub dungeon: Dungeon,
    /// `None` is the off-grid sentinel: the agent has been caught.
    pub agent: Option<Pos>,
    /// Monsters keyed by position; in lockstep with the monster cells of
    /// `dungeon`, iterated in row-major order.
    pub monsters: BTreeMap<Pos, MonsterKind>,
    pub score: i32,
    pub bullet_fired: bool,
    /// Direction of the last intended agent move; the bullet travels this
    /// way in the search model.
    pub last_heading: Direction,
    pub actions: Vec<ActionRecord>,
}

impl GameState {
    pub fn new(dungeon: Dungeon, agent: Pos, monsters: BTreeMap<Pos, MonsterKind>) -> Self {
        Self {
            dungeon,
            agent: Some(agent),
            monsters,
            score: STARTING_SCORE,
            bullet_fired: false,
            last_heading: Direction::North,
            actions: Vec::new(),
        }
    }

    pub fn is_win(&self) -> bool {
        self.monsters.is_empty()
    }

    pub fn is_loss(&self) -> bool {
        self.agent.is_none() || self.score <= 0
    }

    /// Win takes precedence when both predicates hold.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_win() {
            Some(Outcome::Win)
        } else if self.is_loss() {
            Some(Outcome::Loss)
        } else {
            None
        }
    }
}
