/// Cell represents the fundamental unit in Conway's Game of Life.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip between alive and dead (used by click-to-toggle)
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function computing the next state from the live neighbor count.
    /// Arms are evaluated top to bottom and exactly one applies.
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            // Underpopulation
            (Cell::Alive, 0 | 1) => Cell::Dead,
            // Survival
            (Cell::Alive, 2 | 3) => Cell::Alive,
            // Overpopulation
            (Cell::Alive, _) => Cell::Dead,
            // Reproduction
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}
