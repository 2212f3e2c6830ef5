use crate::{ElevationGrid, Error};

/// Integer boundary-polygon vertex in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPoint {
    pub col: usize,
    pub row: usize,
}

/// Inclusive rectangular sub-area of a grid, in full-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl Window {
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn full(grid: &ElevationGrid) -> Self {
        Self {
            top: 0,
            left: 0,
            bottom: grid.rows() - 1,
            right: grid.cols() - 1,
        }
    }

    pub fn validate_for(&self, grid: &ElevationGrid) -> Result<(), Error> {
        if self.top > self.bottom
            || self.left > self.right
            || self.bottom >= grid.rows()
            || self.right >= grid.cols()
        {
            return Err(Error::InvalidState("window does not fit the grid"));
        }
        Ok(())
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    pub fn row_count(&self) -> usize {
        self.bottom - self.top + 1
    }

    pub fn col_count(&self) -> usize {
        self.right - self.left + 1
    }
}

#[cfg(test)]
mod tests {
    use super::Window;
    use crate::ElevationGrid;

    #[test]
    fn full_window_covers_grid() {
        let grid = ElevationGrid::new_fill(4, 6, 0.0);
        let w = Window::full(&grid);

        assert_eq!(w, Window::new(0, 0, 3, 5));
        assert_eq!(w.row_count(), 4);
        assert_eq!(w.col_count(), 6);
        assert!(w.validate_for(&grid).is_ok());
    }

    #[test]
    fn window_validation_rejects_misfits() {
        let grid = ElevationGrid::new_fill(4, 6, 0.0);

        assert!(Window::new(1, 1, 2, 2).validate_for(&grid).is_ok());
        assert!(Window::new(0, 0, 4, 5).validate_for(&grid).is_err());
        assert!(Window::new(0, 0, 3, 6).validate_for(&grid).is_err());
        assert!(Window::new(2, 0, 1, 5).validate_for(&grid).is_err());
    }

    #[test]
    fn contains_is_inclusive() {
        let w = Window::new(1, 2, 3, 4);
        assert!(w.contains(1, 2));
        assert!(w.contains(3, 4));
        assert!(!w.contains(0, 2));
        assert!(!w.contains(3, 5));
    }
}
