use super::{Frame, cell::collatz};

/// Errors raised when building or addressing a grid
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("cell ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// Grid holds one Collatz value per cell on a square board.
/// Updates are pure: `step` returns a new grid and never touches `self`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Create a `size × size` grid of zeros
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Zeros everywhere except `value` at the centre cell
    pub fn seeded(size: usize, value: i32) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        let (cx, cy) = grid.center();
        grid.set(cx, cy, value)?;
        Ok(grid)
    }

    /// Wrap an existing flat, row-major cell vector
    pub fn from_cells(size: usize, cells: Vec<i32>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Side length in cells
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Geometric centre `(size / 2, size / 2)`
    pub const fn center(&self) -> (usize, usize) {
        (self.size / 2, self.size / 2)
    }

    /// Convert 2D coordinates to 1D index
    pub const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell value at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<i32> {
        (x < self.size && y < self.size).then(|| self.cells[self.index(x, y)])
    }

    pub fn set(&mut self, x: usize, y: usize, value: i32) -> Result<(), GridError> {
        if x >= self.size || y >= self.size {
            return Err(GridError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        let idx = self.index(x, y);
        self.cells[idx] = value;
        Ok(())
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    /// Pure functional evolution - returns the next grid and its colours
    pub fn step(&self) -> (Self, Frame) {
        let mut next = Self {
            size: self.size,
            cells: vec![0; self.cells.len()],
        };
        let mut frame = Frame::new(self.size);
        self.step_into(&mut next, &mut frame);
        (next, frame)
    }

    /// Write the next generation into `next` and its colours into `frame`,
    /// returning how many cells came out alive.
    ///
    /// Reads only from `self` and writes only to the targets, so the two
    /// grids can be swapped afterwards for ping-pong buffering.
    /// All three buffers must share one size.
    pub(crate) fn step_into(&self, next: &mut Self, frame: &mut Frame) -> usize {
        debug_assert_eq!(next.size, self.size);
        debug_assert_eq!(frame.size(), self.size);

        self.cells
            .iter()
            .zip(next.cells.iter_mut())
            .zip(frame.pixels_mut())
            .map(|((&n, out), pixel)| {
                let transition = collatz(n);
                *out = transition.next;
                pixel.copy_from_slice(&transition.cell.rgba());
                transition.cell.is_alive()
            })
            .filter(|&alive| alive)
            .count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &value)| (idx % size, idx / size, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_seeded_has_single_center_cell() {
        let grid = Grid::seeded(1000, 1_000_000).unwrap();
        assert_eq!(grid.size(), 1000);
        assert_eq!(grid.cells().len(), 1_000_000);
        assert_eq!(grid.center(), (500, 500));
        assert_eq!(grid.cells()[500 * 1000 + 500], 1_000_000);
        assert_eq!(grid.iter_cells().filter(|&(_, _, v)| v != 0).count(), 1);
    }

    #[test]
    fn test_seeded_odd_size_center() {
        let grid = Grid::seeded(5, 7).unwrap();
        assert_eq!(grid.get(2, 2), Some(7));
        assert_eq!(grid.cells()[2 * 5 + 2], 7);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(Grid::new(0), Err(GridError::EmptyGrid));
        assert_eq!(Grid::seeded(0, 4), Err(GridError::EmptyGrid));
        assert_eq!(Grid::from_cells(0, vec![]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert_eq!(
            Grid::from_cells(3, vec![0; 8]),
            Err(GridError::LengthMismatch { expected: 9, actual: 8 })
        );
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(4).unwrap();
        assert!(grid.set(3, 1, 9).is_ok());
        assert_eq!(grid.get(3, 1), Some(9));
        assert_eq!(grid.cells()[1 * 4 + 3], 9);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(
            grid.set(0, 4, 1),
            Err(GridError::OutOfBounds { x: 0, y: 4, size: 4 })
        );
    }

    #[test]
    fn test_step_applies_rule_per_cell() {
        let grid = Grid::from_cells(2, vec![0, 3, 8, -3]).unwrap();
        let (next, frame) = grid.step();

        assert_eq!(next.cells(), &[0, 10, 4, -8]);
        assert_eq!(frame.pixel(0), Some(Cell::DEAD_RGBA));
        assert_eq!(frame.pixel(1), Some(Cell::ALIVE_RGBA));
        assert_eq!(frame.pixel(2), Some(Cell::DEAD_RGBA));
        assert_eq!(frame.pixel(3), Some(Cell::DEAD_RGBA));
        // Source grid is untouched
        assert_eq!(grid.cells(), &[0, 3, 8, -3]);
    }

    #[test]
    fn test_step_keeps_dimensions() {
        let mut grid = Grid::seeded(7, 27).unwrap();
        for _ in 0..50 {
            let (next, frame) = grid.step();
            assert_eq!(next.size(), 7);
            assert_eq!(next.cells().len(), 49);
            assert_eq!(frame.as_bytes().len(), 49 * 4);
            grid = next;
        }
    }

    #[test]
    fn test_seed_frame_one_is_black() {
        let grid = Grid::seeded(1000, 1_000_000).unwrap();
        let (next, frame) = grid.step();
        let center = 500 * 1000 + 500;

        assert_eq!(next.cells()[center], 500_000);
        assert_eq!(frame.pixel(center), Some([0, 0, 0, 255]));
        assert_eq!(frame.count_alive(), 0);
    }

    #[test]
    fn test_four_two_one_cycle() {
        let mut grid = Grid::seeded(9, 4).unwrap();
        let center = grid.index(4, 4);
        let expected = [(2, false), (1, false), (4, true)];

        for _ in 0..4 {
            for &(value, alive) in &expected {
                let (next, frame) = grid.step();
                assert_eq!(next.cells()[center], value);
                assert_eq!(frame.count_alive(), usize::from(alive));
                let color = if alive { Cell::ALIVE_RGBA } else { Cell::DEAD_RGBA };
                assert_eq!(frame.pixel(center), Some(color));
                grid = next;
            }
        }
    }

    #[test]
    fn test_zero_field_stays_black() {
        let mut grid = Grid::seeded(6, 27).unwrap();
        let center = grid.index(3, 3);
        for _ in 0..200 {
            let (next, frame) = grid.step();
            for (idx, &value) in next.cells().iter().enumerate() {
                if idx != center {
                    assert_eq!(value, 0);
                    assert_eq!(frame.pixel(idx), Some([0, 0, 0, 255]));
                }
            }
            grid = next;
        }
    }

    #[test]
    fn test_step_into_matches_step() {
        let grid = Grid::from_cells(3, vec![1, 2, 3, 4, 5, 6, 7, i32::MAX, i32::MIN]).unwrap();
        let (expected_grid, expected_frame) = grid.step();

        let mut next = Grid::new(3).unwrap();
        let mut frame = Frame::new(3);
        let alive = grid.step_into(&mut next, &mut frame);

        assert_eq!(next, expected_grid);
        assert_eq!(frame, expected_frame);
        assert_eq!(alive, expected_frame.count_alive());
    }

    #[test]
    #[should_panic]
    fn test_step_into_rejects_mismatched_target() {
        let grid = Grid::seeded(3, 27).unwrap();
        let mut next = Grid::new(2).unwrap();
        let mut frame = Frame::new(3);
        grid.step_into(&mut next, &mut frame);
    }
}
