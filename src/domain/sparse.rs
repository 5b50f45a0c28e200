//! Sparse generation: an unbounded plane where only live cells are recorded.

use std::collections::{BTreeSet, HashSet};

use super::{Generation, Liveness, Pos, neighbors};

/// Ordered list of live coordinates with a hash index for lookups.
/// A coordinate appears at most once; absence means dead.
#[derive(Clone, Debug, Default)]
pub struct SparseGeneration {
    order: Vec<Pos>,
    index: HashSet<Pos>,
}

impl SparseGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell alive. Returns false if it already was.
    pub fn insert(&mut self, pos: Pos) -> bool {
        let added = self.index.insert(pos);
        if added {
            self.order.push(pos);
        }
        added
    }

    /// Mark a cell dead. Returns false if it already was.
    pub fn remove(&mut self, pos: Pos) -> bool {
        let removed = self.index.remove(&pos);
        if removed {
            self.order.retain(|&p| p != pos);
        }
        removed
    }

    /// Flip a cell and return its new liveness
    pub fn toggle(&mut self, pos: Pos) -> bool {
        if self.remove(pos) {
            false
        } else {
            self.insert(pos)
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live cells in insertion order
    pub fn as_slice(&self) -> &[Pos] {
        &self.order
    }
}

impl PartialEq for SparseGeneration {
    /// Same live set, regardless of list order.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for SparseGeneration {}

impl Liveness for SparseGeneration {
    fn is_alive(&self, x: i64, y: i64) -> bool {
        self.index.contains(&(x, y))
    }
}

impl Generation for SparseGeneration {
    type Domain = ();

    fn empty(_: ()) -> Self {
        Self::new()
    }

    fn from_alive<I: IntoIterator<Item = Pos>>(_: (), cells: I) -> Self {
        cells.into_iter().fold(Self::new(), |mut generation, pos| {
            generation.insert(pos);
            generation
        })
    }

    fn domain(&self) {}

    /// Live cells plus their neighbors, sorted and deduplicated.
    fn candidates(&self) -> impl Iterator<Item = Pos> + '_ {
        let around: BTreeSet<Pos> = self
            .order
            .iter()
            .flat_map(|&(x, y)| neighbors(x, y).chain(std::iter::once((x, y))))
            .collect();
        around.into_iter()
    }

    fn alive_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.order.iter().copied()
    }

    fn population(&self) -> usize {
        self.len()
    }
}
