use crate::grid::{Grid, Point};

/// Row band a path may occupy at some column without losing the end point.
///
/// The bounds are signed: near the left edge of a wide grid they can extend
/// past the physical rows, in which case only the grid borders constrain the
/// path there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalBounds {
    pub min_y: i32,
    pub max_y: i32,
}

/// Compute the feasible row band at column `x`.
///
/// From column `x` there are `end.x - 1 - x` more free columns before the
/// end column, and each step changes the row by at most one, so the path
/// must stay within that many rows of the end row. At `x = end.x - 1` the
/// band collapses to the end row itself.
pub fn vertical_bounds(grid: &Grid, x: usize) -> VerticalBounds {
    let diff_x = (grid.end().x as i32 - 1) - x as i32;
    let end_y = grid.end().y as i32;
    VerticalBounds {
        min_y: end_y - diff_x,
        max_y: end_y + diff_x,
    }
}

/// The row deltas legal for the next step from some position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet {
    pub down: bool,
    pub flat: bool,
    pub up: bool,
}

impl MoveSet {
    /// The legal deltas in fixed order: -1 (down a row), 0, +1 (up a row).
    pub fn deltas(self) -> Vec<i32> {
        let mut deltas = Vec::with_capacity(3);
        if self.down {
            deltas.push(-1);
        }
        if self.flat {
            deltas.push(0);
        }
        if self.up {
            deltas.push(1);
        }
        deltas
    }
}

/// Determine which row deltas are legal for the step out of `at`.
///
/// A delta is legal when the destination row exists and sits inside the
/// feasibility band of the current column. For any in-bounds position left
/// of the end column at least one delta is always legal: below the band only
/// +1 passes, above it only -1, and inside it 0 does.
pub fn legal_moves(grid: &Grid, at: Point) -> MoveSet {
    let bounds = vertical_bounds(grid, at.x);
    let y = at.y as i32;
    MoveSet {
        down: at.y > 0 && y > bounds.min_y,
        flat: y >= bounds.min_y && y <= bounds.max_y,
        up: at.y + 1 < grid.height() && y < bounds.max_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(height: usize, width: usize, start: (usize, usize), end: (usize, usize)) -> Grid {
        Grid::new(
            height,
            width,
            Point::new(start.0, start.1),
            Point::new(end.0, end.1),
        )
        .unwrap()
    }

    #[test]
    fn test_bounds_widen_away_from_end() {
        let g = grid(5, 10, (0, 2), (9, 2));
        assert_eq!(
            vertical_bounds(&g, 0),
            VerticalBounds { min_y: -6, max_y: 10 }
        );
        assert_eq!(
            vertical_bounds(&g, 5),
            VerticalBounds { min_y: -1, max_y: 5 }
        );
        assert_eq!(
            vertical_bounds(&g, 8),
            VerticalBounds { min_y: 2, max_y: 2 }
        );
    }

    #[test]
    fn test_bounds_collapse_on_last_free_column() {
        let g = grid(5, 6, (0, 0), (5, 2));
        let bounds = vertical_bounds(&g, 4);
        assert_eq!(bounds.min_y, 2);
        assert_eq!(bounds.max_y, 2);
    }

    #[test]
    fn test_deltas_fixed_order() {
        let all = MoveSet {
            down: true,
            flat: true,
            up: true,
        };
        assert_eq!(all.deltas(), vec![-1, 0, 1]);

        let only_up = MoveSet {
            down: false,
            flat: false,
            up: true,
        };
        assert_eq!(only_up.deltas(), vec![1]);
    }

    #[test]
    fn test_moves_at_grid_borders() {
        let g = grid(3, 5, (0, 1), (4, 1));
        // Top row: up blocked by the border, band is wide here.
        let top = legal_moves(&g, Point::new(1, 2));
        assert_eq!(
            top,
            MoveSet {
                down: true,
                flat: true,
                up: false
            }
        );
        // Bottom row: down blocked by the border.
        let bottom = legal_moves(&g, Point::new(1, 0));
        assert_eq!(
            bottom,
            MoveSet {
                down: false,
                flat: true,
                up: true
            }
        );
    }

    #[test]
    fn test_moves_forced_toward_collapsed_band() {
        let g = grid(5, 6, (0, 0), (5, 2));
        // Column 4's band is exactly row 2. From row 3 only down is legal,
        // from row 1 only up, and row 2 itself may only hold flat.
        assert_eq!(
            legal_moves(&g, Point::new(4, 3)),
            MoveSet {
                down: true,
                flat: false,
                up: false
            }
        );
        assert_eq!(
            legal_moves(&g, Point::new(4, 1)),
            MoveSet {
                down: false,
                flat: false,
                up: true
            }
        );
        assert_eq!(
            legal_moves(&g, Point::new(4, 2)),
            MoveSet {
                down: false,
                flat: true,
                up: false
            }
        );
    }

    #[test]
    fn test_position_below_band_forces_up() {
        // End high up, walker far below: band excludes the current row so
        // only the climb is legal.
        let g = grid(6, 8, (0, 0), (7, 5));
        let moves = legal_moves(&g, Point::new(3, 1));
        assert_eq!(
            moves,
            MoveSet {
                down: false,
                flat: false,
                up: true
            }
        );
    }

    #[test]
    fn test_every_cell_has_a_legal_move() {
        // No in-bounds position left of the end column is ever stuck.
        let g = grid(5, 10, (0, 2), (9, 2));
        for x in 0..g.end().x {
            for y in 0..g.height() {
                let moves = legal_moves(&g, Point::new(x, y));
                assert!(
                    !moves.deltas().is_empty(),
                    "no legal move at ({x}, {y})"
                );
            }
        }
    }
}
