//! Coordinates and the 8-neighborhood.

/// Integer cell coordinate. Signed so the sparse domain can extend in every direction.
pub type Pos = (i64, i64);

/// Offsets of the 8 surrounding cells: N, S, E, W and the 4 diagonals.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Liveness lookup shared by every generation representation.
///
/// Lookups outside the tracked domain answer `false`, never panic.
pub trait Liveness {
    fn is_alive(&self, x: i64, y: i64) -> bool;
}

/// The representable neighbors of `(x, y)`.
/// Offsets that would leave the `i64` range name no cell and are skipped.
pub fn neighbors(x: i64, y: i64) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(move |&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
}

/// Count live cells among the 8 neighbors of `(x, y)`. Always in `0..=8`.
pub fn neighbor_count<L: Liveness + ?Sized>(cells: &L, x: i64, y: i64) -> u8 {
    neighbors(x, y).filter(|&(nx, ny)| cells.is_alive(nx, ny)).count() as u8
}

/// Map a pixel coordinate to the index of the cell containing it.
/// Floors, so pixels left of / above the origin land in negative cells.
pub fn cell_index(pixel: f32, cell_size: f32) -> i64 {
    (pixel / cell_size).floor() as i64
}
