use hashbrown::HashMap;

/// Number of cells on the track. Reaching this cell exactly wins the game.
pub const LAST_CELL: u8 = 100;

/// The track folds into a square grid of this many cells per side.
pub const GRID_SIZE: u8 = 10;

const SNAKES: [(u8, u8); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

const LADDERS: [(u8, u8); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// A transition triggered by landing exactly on its origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Snake { head: u8, tail: u8 },
    Ladder { bottom: u8, top: u8 },
}

impl Transition {
    pub fn origin(&self) -> u8 {
        match self {
            Transition::Snake { head, .. } => *head,
            Transition::Ladder { bottom, .. } => *bottom,
        }
    }

    pub fn destination(&self) -> u8 {
        match self {
            Transition::Snake { tail, .. } => *tail,
            Transition::Ladder { top, .. } => *top,
        }
    }
}

/// The fixed 100-cell track with its snake and ladder transitions.
#[derive(Debug, Clone)]
pub struct Board {
    snakes: HashMap<u8, u8>,
    ladders: HashMap<u8, u8>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            snakes: SNAKES.iter().copied().collect(),
            ladders: LADDERS.iter().copied().collect(),
        }
    }

    /// Returns the transition starting at `cell`, if any. At most one of the
    /// two maps contains a given origin.
    pub fn transition(&self, cell: u8) -> Option<Transition> {
        if let Some(&tail) = self.snakes.get(&cell) {
            return Some(Transition::Snake { head: cell, tail });
        }
        if let Some(&top) = self.ladders.get(&cell) {
            return Some(Transition::Ladder { bottom: cell, top });
        }
        None
    }

    /// Snakes as (head, tail) pairs, in layout order.
    pub fn snakes(&self) -> impl Iterator<Item = (u8, u8)> {
        SNAKES.iter().copied()
    }

    /// Ladders as (bottom, top) pairs, in layout order.
    pub fn ladders(&self) -> impl Iterator<Item = (u8, u8)> {
        LADDERS.iter().copied()
    }

    /// Maps a cell (1..=100) to (column, row) on the folded grid.
    /// Row 0 is the bottom row, odd rows run right to left.
    pub fn grid_position(cell: u8) -> (u8, u8) {
        let pos = cell - 1;
        let row = pos / GRID_SIZE;
        let col = if row % 2 == 0 {
            pos % GRID_SIZE
        } else {
            GRID_SIZE - 1 - pos % GRID_SIZE
        };
        (col, row)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_lookup() {
        let board = Board::new();
        for (head, tail) in SNAKES {
            assert_eq!(
                board.transition(head),
                Some(Transition::Snake { head, tail })
            );
        }
    }

    #[test]
    fn test_ladder_lookup() {
        let board = Board::new();
        for (bottom, top) in LADDERS {
            assert_eq!(
                board.transition(bottom),
                Some(Transition::Ladder { bottom, top })
            );
        }
    }

    #[test]
    fn test_plain_cells_have_no_transition() {
        let board = Board::new();
        for cell in [2, 3, 10, 50, 99, 100] {
            assert_eq!(board.transition(cell), None);
        }
    }

    #[test]
    fn test_transitions_never_chain() {
        let board = Board::new();
        for (_, destination) in SNAKES.iter().chain(LADDERS.iter()) {
            assert_eq!(board.transition(*destination), None);
        }
    }

    #[test]
    fn test_grid_position_folds_boustrophedon() {
        assert_eq!(Board::grid_position(1), (0, 0));
        assert_eq!(Board::grid_position(10), (9, 0));
        assert_eq!(Board::grid_position(11), (9, 1));
        assert_eq!(Board::grid_position(20), (0, 1));
        assert_eq!(Board::grid_position(21), (0, 2));
        assert_eq!(Board::grid_position(100), (0, 9));
    }
}
