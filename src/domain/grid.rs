use super::{Cell, Generation, Liveness, Pos};

/// Grid is the dense generation: a fixed W×H rectangle with every cell tracked.
/// Uses functional, immutable updates for predictable state transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Signed-coordinate lookup used by painting and the neighbor model
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| self.get_index(x, y))
    }

    /// Set a cell addressed by signed coordinates, ignoring anything outside the grid
    pub fn set_at(&mut self, (x, y): Pos, cell: Cell) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Clear all cells to dead state
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Randomize grid; each cell is alive with probability `density`
    pub fn randomize(mut self, density: f64) -> Self {
        use rand::Rng;

        let mut rng = rand::rng();
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        self
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}

impl Liveness for Grid {
    fn is_alive(&self, x: i64, y: i64) -> bool {
        self.index_of(x, y)
            .is_some_and(|idx| self.cells[idx].is_alive())
    }
}

impl Generation for Grid {
    type Domain = (usize, usize);

    fn empty((width, height): Self::Domain) -> Self {
        Self::new(width, height)
    }

    fn from_alive<I: IntoIterator<Item = Pos>>(domain: Self::Domain, cells: I) -> Self {
        cells.into_iter().fold(Self::empty(domain), |mut grid, pos| {
            grid.set_at(pos, Cell::Alive);
            grid
        })
    }

    fn domain(&self) -> Self::Domain {
        self.dimensions()
    }

    fn candidates(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height as i64).flat_map(move |y| (0..self.width as i64).map(move |x| (x, y)))
    }

    fn alive_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x as i64, y as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NEIGHBOR_OFFSETS, advance, neighbor_count};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn alive(grid: &Grid) -> BTreeSet<Pos> {
        grid.alive_cells().collect()
    }

    #[test]
    fn test_blinker_oscillates_in_3x3() {
        let vertical: BTreeSet<Pos> = [(1, 0), (1, 1), (1, 2)].into();
        let horizontal: BTreeSet<Pos> = [(0, 1), (1, 1), (2, 1)].into();

        let g0 = Grid::from_alive((3, 3), vertical.iter().copied());
        let g1 = advance(&g0);
        assert_eq!(alive(&g1), horizontal);

        let g2 = advance(&g1);
        assert_eq!(alive(&g2), vertical);
    }

    #[test]
    fn test_empty_grid_is_stable() {
        let grid = Grid::new(8, 6);
        assert_eq!(advance(&grid), grid);
    }

    #[test]
    fn test_glider_translates_diagonally_every_four_generations() {
        let glider = [(2, 4), (3, 2), (3, 4), (4, 3), (4, 4)];
        let mut grid = Grid::from_alive((12, 12), glider);
        for _ in 0..4 {
            grid = advance(&grid);
        }
        let expected: BTreeSet<Pos> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(alive(&grid), expected);
    }

    #[test]
    fn test_out_of_bounds_is_dead() {
        let grid = Grid::from_alive((2, 2), [(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert!(!grid.is_alive(-1, 0));
        assert!(!grid.is_alive(0, -1));
        assert!(!grid.is_alive(2, 0));
        assert!(!grid.is_alive(0, 2));
        // Corner cell only sees its 3 in-bounds neighbors
        assert_eq!(neighbor_count(&grid, 0, 0), 3);
    }

    #[test]
    fn test_from_alive_drops_outside_cells() {
        let grid = Grid::from_alive((3, 3), [(-1, 0), (3, 0), (0, 3), (2, 2)]);
        assert_eq!(alive(&grid), BTreeSet::from([(2, 2)]));
    }

    #[test]
    fn test_advance_does_not_mutate_input() {
        let grid = Grid::from_alive((5, 5), [(1, 2), (2, 2), (3, 2)]);
        let snapshot = grid.clone();
        let _ = advance(&grid);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_every_three_neighbor_combination_births() {
        let mut combos = 0;
        for a in 0..8 {
            for b in (a + 1)..8 {
                for c in (b + 1)..8 {
                    let cells = [a, b, c].map(|i| {
                        let (dx, dy) = NEIGHBOR_OFFSETS[i];
                        (2 + dx, 2 + dy)
                    });
                    let grid = Grid::from_alive((5, 5), cells);
                    assert!(advance(&grid).is_alive(2, 2), "combination {a},{b},{c}");
                    combos += 1;
                }
            }
        }
        assert_eq!(combos, 56);
    }

    #[test]
    fn test_lonely_and_crowded_cells_die() {
        let lonely = Grid::from_alive((5, 5), [(2, 2), (3, 3)]);
        assert!(!advance(&lonely).is_alive(2, 2));

        let crowded = Grid::from_alive((5, 5), [(2, 2), (1, 1), (3, 1), (1, 3), (3, 3)]);
        assert!(!advance(&crowded).is_alive(2, 2));
    }

    #[test]
    fn test_randomize_keeps_dimensions() {
        let grid = Grid::new(7, 5).randomize(0.3);
        assert_eq!(grid.dimensions(), (7, 5));
        assert_eq!(Grid::new(7, 5).randomize(1.0).population(), 35);
        assert_eq!(grid.clear().population(), 0);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
            prop::collection::vec(any::<bool>(), w * h).prop_map(move |bits| {
                let cells = bits
                    .iter()
                    .enumerate()
                    .filter(|(_, alive)| **alive)
                    .map(|(i, _)| ((i % w) as i64, (i / w) as i64));
                Grid::from_alive((w, h), cells)
            })
        })
    }

    proptest! {
        /// Advancing keeps the shape and yields only in-bounds cells.
        #[test]
        fn test_advance_is_total(grid in arb_grid()) {
            let next = advance(&grid);
            prop_assert_eq!(next.dimensions(), grid.dimensions());
            let (w, h) = grid.dimensions();
            for (x, y) in next.alive_cells() {
                prop_assert!(x >= 0 && y >= 0 && (x as usize) < w && (y as usize) < h);
            }
        }

        /// Coordinates outside the rectangle never contribute to a neighbor count.
        #[test]
        fn test_outside_contributes_nothing(grid in arb_grid(), x in -3i64..15, y in -3i64..15) {
            let (w, h) = grid.dimensions();
            let inside = NEIGHBOR_OFFSETS
                .iter()
                .map(|&(dx, dy)| (x + dx, y + dy))
                .filter(|&(nx, ny)| nx >= 0 && ny >= 0 && (nx as usize) < w && (ny as usize) < h)
                .filter(|&(nx, ny)| grid.is_alive(nx, ny))
                .count() as u8;
            prop_assert_eq!(neighbor_count(&grid, x, y), inside);
        }
    }
}
