//! The lifecycle engine: one rule implementation shared by every representation.

use super::{Cell, Liveness, Pos, neighbor_count};

/// A snapshot of cell liveness at one simulation tick.
pub trait Generation: Liveness + Sized {
    /// Description of the coordinate space this generation tracks.
    type Domain: Copy;

    /// A generation over `domain` with every cell dead.
    fn empty(domain: Self::Domain) -> Self;

    /// Build a generation with exactly `cells` alive.
    /// Coordinates the domain cannot hold are dropped.
    fn from_alive<I: IntoIterator<Item = Pos>>(domain: Self::Domain, cells: I) -> Self;

    fn domain(&self) -> Self::Domain;

    /// Every coordinate whose next state may differ from dead.
    /// Anything not yielded here stays dead next generation.
    fn candidates(&self) -> impl Iterator<Item = Pos> + '_;

    fn alive_cells(&self) -> impl Iterator<Item = Pos> + '_;

    fn population(&self) -> usize {
        self.alive_cells().count()
    }
}

/// Compute the next generation. The input is left untouched.
pub fn advance<G: Generation>(current: &G) -> G {
    let survivors = current.candidates().filter(|&(x, y)| {
        let cell = Cell::from(current.is_alive(x, y));
        cell.evolve(neighbor_count(current, x, y)).is_alive()
    });
    G::from_alive(current.domain(), survivors)
}

/// Owns the current generation and swaps in a freshly built one on each step.
#[derive(Clone, Debug)]
pub struct Lifecycle<G> {
    current: G,
    generation: u64,
}

impl<G: Generation> Lifecycle<G> {
    pub fn new(seed: G) -> Self {
        Self {
            current: seed,
            generation: 0,
        }
    }

    pub fn current(&self) -> &G {
        &self.current
    }

    /// Number of advances since the last seed
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the current generation with its successor
    pub fn advance(&mut self) {
        self.current = advance(&self.current);
        self.generation += 1;
        log::trace!(
            "generation {} population {}",
            self.generation,
            self.current.population()
        );
    }

    /// Start over from a new seed
    pub fn reseed(&mut self, seed: G) {
        self.current = seed;
        self.generation = 0;
    }

    /// Mutable access for painting while paused
    pub fn current_mut(&mut self) -> &mut G {
        &mut self.current
    }
}
