use std::fmt;

use crate::error::GridError;

/// A cell coordinate: `x` is the column, `y` is the row. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Blank,
    Start,
    End,
    Path,
}

/// A height×width table of cell states with fixed start and end points.
///
/// The shape never changes after construction, and the start and end cells
/// stay stamped `Start`/`End` for the grid's whole lifetime, clones included.
/// `Clone` deep-copies the cell table, so a cloned grid can be mutated
/// without touching the original; the path algorithms rely on this to keep
/// divergent branches independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    // Row-major: index = y * width + x
    cells: Vec<Cell>,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create a blank grid and stamp the start and end cells.
    ///
    /// Fails if either point is out of bounds or the start column is not
    /// strictly left of the end column (which also rejects coincident
    /// points).
    pub fn new(height: usize, width: usize, start: Point, end: Point) -> Result<Self, GridError> {
        if start.x >= width || start.y >= height {
            return Err(GridError::StartOutOfBounds {
                start,
                height,
                width,
            });
        }
        if end.x >= width || end.y >= height {
            return Err(GridError::EndOutOfBounds { end, height, width });
        }
        if start.x >= end.x {
            return Err(GridError::StartNotLeftOfEnd {
                start_x: start.x,
                end_x: end.x,
            });
        }

        let mut grid = Grid {
            height,
            width,
            cells: vec![Cell::Blank; height * width],
            start,
            end,
        };
        grid.set(start, Cell::Start);
        grid.set(end, Cell::End);
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Get the cell at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    /// Mark a cell as belonging to a path.
    pub fn mark_path(&mut self, p: Point) {
        self.set(p, Cell::Path);
    }

    fn set(&mut self, p: Point, cell: Cell) {
        self.cells[p.y * self.width + p.x] = cell;
    }

    /// All `Path` cells in column order.
    ///
    /// Generated paths mark at most one cell per column, so this reads as
    /// the path's trajectory from left to right.
    pub fn path_cells(&self) -> Vec<Point> {
        let mut cells = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                if self.get(x, y) == Cell::Path {
                    cells.push(Point::new(x, y));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank_except_endpoints() {
        let grid = Grid::new(3, 5, Point::new(0, 1), Point::new(4, 1)).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                let expected = match (x, y) {
                    (0, 1) => Cell::Start,
                    (4, 1) => Cell::End,
                    _ => Cell::Blank,
                };
                assert_eq!(grid.get(x, y), expected, "cell ({x}, {y})");
            }
        }
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.start(), Point::new(0, 1));
        assert_eq!(grid.end(), Point::new(4, 1));
    }

    #[test]
    fn test_start_out_of_bounds() {
        let err = Grid::new(3, 5, Point::new(0, 3), Point::new(4, 1)).unwrap_err();
        assert!(matches!(err, GridError::StartOutOfBounds { .. }));

        let err = Grid::new(3, 5, Point::new(5, 0), Point::new(4, 1)).unwrap_err();
        assert!(matches!(err, GridError::StartOutOfBounds { .. }));
    }

    #[test]
    fn test_end_out_of_bounds() {
        let err = Grid::new(3, 5, Point::new(0, 1), Point::new(5, 1)).unwrap_err();
        assert!(matches!(err, GridError::EndOutOfBounds { .. }));

        let err = Grid::new(3, 5, Point::new(0, 1), Point::new(4, 3)).unwrap_err();
        assert!(matches!(err, GridError::EndOutOfBounds { .. }));
    }

    #[test]
    fn test_start_right_of_end_rejected() {
        let err = Grid::new(1, 3, Point::new(2, 0), Point::new(1, 0)).unwrap_err();
        assert!(matches!(
            err,
            GridError::StartNotLeftOfEnd {
                start_x: 2,
                end_x: 1
            }
        ));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let err = Grid::new(3, 5, Point::new(2, 1), Point::new(2, 1)).unwrap_err();
        assert!(matches!(err, GridError::StartNotLeftOfEnd { .. }));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = Grid::new(0, 5, Point::new(0, 0), Point::new(4, 0)).unwrap_err();
        assert!(matches!(err, GridError::StartOutOfBounds { .. }));
    }

    #[test]
    fn test_minimal_grid_is_valid() {
        // One row, two columns: start and end adjacent.
        let grid = Grid::new(1, 2, Point::new(0, 0), Point::new(1, 0)).unwrap();
        assert_eq!(grid.get(0, 0), Cell::Start);
        assert_eq!(grid.get(1, 0), Cell::End);
    }

    #[test]
    fn test_mark_path() {
        let mut grid = Grid::new(3, 5, Point::new(0, 1), Point::new(4, 1)).unwrap();
        grid.mark_path(Point::new(2, 0));
        assert_eq!(grid.get(2, 0), Cell::Path);
        // Endpoints untouched
        assert_eq!(grid.get(0, 1), Cell::Start);
        assert_eq!(grid.get(4, 1), Cell::End);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Grid::new(3, 5, Point::new(0, 1), Point::new(4, 1)).unwrap();
        let mut copy = original.clone();
        assert_eq!(original, copy);

        copy.mark_path(Point::new(1, 2));
        copy.mark_path(Point::new(2, 2));

        assert_ne!(original, copy);
        assert_eq!(original.get(1, 2), Cell::Blank);
        assert_eq!(original.get(2, 2), Cell::Blank);
        assert_eq!(copy.get(1, 2), Cell::Path);
        assert!(original.path_cells().is_empty());
    }

    #[test]
    fn test_path_cells_in_column_order() {
        let mut grid = Grid::new(4, 6, Point::new(0, 2), Point::new(5, 2)).unwrap();
        grid.mark_path(Point::new(3, 0));
        grid.mark_path(Point::new(1, 3));
        grid.mark_path(Point::new(2, 1));
        assert_eq!(
            grid.path_cells(),
            vec![Point::new(1, 3), Point::new(2, 1), Point::new(3, 0)]
        );
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(4, 9).to_string(), "(4, 9)");
    }
}
