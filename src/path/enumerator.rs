use crate::grid::{Grid, Point};
use crate::path::corridor::legal_moves;

/// A partial path: the grid with the cells marked so far, plus the position
/// the path has advanced to.
#[derive(Debug, Clone)]
struct PathState {
    grid: Grid,
    terminus: Point,
}

/// Enumerate every path from the grid's start to its end.
///
/// Runs a depth-first search over partial paths with an explicit stack.
/// Each expansion clones the parent state once per legal delta, so sibling
/// branches never share marks; the parent is dropped as soon as its children
/// are pushed. A state whose terminus reaches the column just left of the
/// end is a complete path: from there the corridor admits exactly one step,
/// so the connecting move is forced and never branches.
///
/// Children are pushed in the fixed order down, flat, up, which makes the
/// output order deterministic: the branch that climbs earliest completes
/// first.
pub fn enumerate_paths(grid: &Grid) -> Vec<Grid> {
    let last_free_x = grid.end().x - 1;
    let mut solutions = Vec::new();
    let mut frontier = vec![PathState {
        grid: grid.clone(),
        terminus: grid.start(),
    }];

    while let Some(state) = frontier.pop() {
        if state.terminus.x == last_free_x {
            solutions.push(state.grid);
            continue;
        }
        for dy in legal_moves(&state.grid, state.terminus).deltas() {
            let mut child = state.clone();
            child.terminus = Point::new(
                state.terminus.x + 1,
                (state.terminus.y as i32 + dy) as usize,
            );
            child.grid.mark_path(child.terminus);
            frontier.push(child);
        }
        // state dropped here: superseded by the children just pushed
    }

    solutions
}
