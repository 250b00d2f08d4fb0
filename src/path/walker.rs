use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::{Grid, Point};
use crate::path::corridor::legal_moves;

/// Samples a single path by walking the grid left to right, picking
/// uniformly among the legal row deltas at each column.
///
/// Holds its own RNG so runs can be reproduced from a seed.
pub struct RandomWalker {
    rng: StdRng,
}

impl RandomWalker {
    /// A walker seeded from the operating system.
    pub fn new() -> Self {
        RandomWalker {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A walker with a fixed seed. Identical seeds on identical grids
    /// produce identical paths.
    pub fn from_seed(seed: u64) -> Self {
        RandomWalker {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Walk from the grid's start to its end column, marking each visited
    /// cell between the endpoints.
    ///
    /// Each iteration advances exactly one column, so the walk takes
    /// `end.x - start.x` steps. The start cell keeps its stamp and the
    /// final step lands on the end column without marking it.
    pub fn walk(&mut self, grid: &mut Grid) {
        let end_x = grid.end().x;
        let mut pos = grid.start();
        while pos.x < end_x {
            if pos != grid.start() {
                grid.mark_path(pos);
            }
            let deltas = legal_moves(grid, pos).deltas();
            assert!(!deltas.is_empty(), "no legal moves at {pos}");
            let dy = deltas[self.rng.random_range(0..deltas.len())];
            pos = Point::new(pos.x + 1, (pos.y as i32 + dy) as usize);
        }
    }
}

impl Default for RandomWalker {
    fn default() -> Self {
        Self::new()
    }
}
