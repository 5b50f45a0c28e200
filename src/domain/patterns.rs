use super::{Generation, Pos};

/// A named template of live cells, at absolute offsets from the origin
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: Vec<Pos>,
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<Pos>) -> Self {
        Self { name, description, cells }
    }

    /// Build a fresh generation over `domain` with this pattern's cells alive
    pub fn instantiate<G: Generation>(&self, domain: G::Domain) -> G {
        G::from_alive(domain, self.cells.iter().copied())
    }
}

/// The presets a selection source can ask for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Empty,
    Glider,
    GliderGun,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Empty, Preset::Glider, Preset::GliderGun];

    /// Resolve a selector value. Unknown names fall back to `Empty`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "empty" => Preset::Empty,
            "glider" => Preset::Glider,
            "glider-gun" => Preset::GliderGun,
            other => {
                log::warn!("unknown pattern {other:?}, using empty");
                Preset::Empty
            }
        }
    }

    /// Selector value, the inverse of `from_name`
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Empty => "empty",
            Preset::Glider => "glider",
            Preset::GliderGun => "glider-gun",
        }
    }

    pub fn pattern(self) -> Pattern {
        match self {
            Preset::Empty => presets::empty(),
            Preset::Glider => presets::glider(),
            Preset::GliderGun => presets::glider_gun(),
        }
    }

    pub fn instantiate<G: Generation>(self, domain: G::Domain) -> G {
        self.pattern().instantiate(domain)
    }
}

/// Seed a generation from a preset name, falling back to empty
pub fn instantiate<G: Generation>(name: &str, domain: G::Domain) -> G {
    Preset::from_name(name).instantiate(domain)
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// No live cells
    pub fn empty() -> Pattern {
        Pattern::new("empty", "All cells dead", Vec::new())
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Moves diagonally (period 4)",
            vec![
                (3, 2),
                (4, 3),
                (2, 4), (3, 4), (4, 4),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "glider-gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (9, 9), (10, 9),
                (9, 10), (10, 10),

                // Left circle
                (19, 9), (19, 10), (19, 11),
                (20, 8), (20, 12),
                (21, 7), (21, 13),
                (22, 7), (22, 13),
                (23, 10),
                (24, 8), (24, 12),
                (25, 9), (25, 10), (25, 11),
                (26, 10),

                // Middle pieces
                (29, 7), (29, 8), (29, 9),
                (30, 7), (30, 8), (30, 9),
                (31, 6), (31, 10),
                (33, 5), (33, 6), (33, 10), (33, 11),

                // Right square
                (43, 7), (43, 8),
                (44, 7), (44, 8),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grid, Liveness, SparseGeneration, advance};
    use std::collections::HashSet;

    #[test]
    fn test_unknown_name_is_empty() {
        let unknown: Grid = instantiate("nonexistent-name", (80, 60));
        let empty: Grid = instantiate("empty", (80, 60));
        assert_eq!(unknown, empty);
        assert_eq!(unknown.population(), 0);
    }

    #[test]
    fn test_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), preset);
        }
    }

    #[test]
    fn test_pattern_sizes() {
        assert_eq!(presets::empty().cells.len(), 0);
        assert_eq!(presets::glider().cells.len(), 5);
        let gun = presets::glider_gun();
        let unique: HashSet<_> = gun.cells.iter().collect();
        assert_eq!(gun.cells.len(), 36);
        assert_eq!(unique.len(), 36);
    }

    #[test]
    fn test_glider_gun_fits_default_canvas() {
        let grid: Grid = instantiate("glider-gun", (80, 60));
        assert_eq!(grid.population(), 36);
        assert!(grid.is_alive(44, 8));
    }

    #[test]
    fn test_dense_clips_pattern() {
        let grid: Grid = instantiate("glider", (4, 4));
        assert_eq!(grid.population(), 1);
        assert!(grid.is_alive(3, 2));
    }

    #[test]
    fn test_sparse_instantiate_matches_pattern() {
        let sparse: SparseGeneration = instantiate("glider", ());
        assert_eq!(sparse.as_slice(), presets::glider().cells.as_slice());
    }

    #[test]
    fn test_glider_gun_emits_glider() {
        let mut generation: SparseGeneration = Preset::GliderGun.instantiate(());
        for _ in 0..30 {
            generation = advance(&generation);
        }
        assert!(generation.len() > 36);
    }

    #[test]
    fn test_every_preset_is_described() {
        for preset in Preset::ALL {
            let pattern = preset.pattern();
            assert_eq!(pattern.name, preset.name());
            assert!(!pattern.description.is_empty());
        }
    }
}
