//! Path generation across a grid.
//!
//! Paths advance one column to the right per step, holding row or moving one
//! row up or down, and every step stays inside a feasibility corridor that
//! guarantees the end point remains reachable. [`RandomWalker`] samples a
//! single path; [`enumerate_paths`] collects every path.

mod corridor;
mod enumerator;
mod walker;

pub use corridor::{legal_moves, vertical_bounds, MoveSet, VerticalBounds};
pub use enumerator::enumerate_paths;
pub use walker::RandomWalker;
