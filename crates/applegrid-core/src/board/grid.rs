//! Fixed-size board grid and coordinate-to-cell reconstruction

use super::observation::DigitObservation;
use serde::{Deserialize, Serialize};

/// Board dimensions. These are configuration constants supplied by the
/// caller, never derived from the input image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        // The apple-box board is 10 rows by 17 columns.
        Self { rows: 10, cols: 17 }
    }
}

/// Reconstructed board: `rows * cols` independently owned cells, each
/// holding at most one recognized observation.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<DigitObservation>>,
}

impl Grid {
    /// Create an all-empty grid of the configured size
    pub fn empty(config: GridConfig) -> Self {
        Self {
            rows: config.rows,
            cols: config.cols,
            cells: vec![None; config.rows * config.cols],
        }
    }

    /// Map scattered observations onto the fixed grid.
    ///
    /// Detected pixel positions are treated as noisy samples of a logically
    /// uniform `cols x rows` layout: cell spacing is interpolated from the
    /// coordinate extremes and each observation is rounded to its nearest
    /// cell index, clamped to the valid range. When two observations land
    /// in the same cell the later one in iteration order wins.
    pub fn from_observations(observations: &[DigitObservation], config: GridConfig) -> Self {
        let mut grid = Self::empty(config);
        if observations.is_empty() {
            return grid;
        }

        let x_min = observations.iter().map(|o| o.x).min().unwrap_or(0);
        let x_max = observations.iter().map(|o| o.x).max().unwrap_or(0);
        let y_min = observations.iter().map(|o| o.y).min().unwrap_or(0);
        let y_max = observations.iter().map(|o| o.y).max().unwrap_or(0);

        let col_spacing = axis_spacing(x_min, x_max, config.cols);
        let row_spacing = axis_spacing(y_min, y_max, config.rows);

        for &obs in observations {
            let col = nearest_index(obs.x - x_min, col_spacing, config.cols);
            let row = nearest_index(obs.y - y_min, row_spacing, config.rows);
            grid.cells[row * config.cols + col] = Some(obs);
        }

        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell content at `(row, col)`, or `None` for an empty or
    /// out-of-bounds cell
    pub fn get(&self, row: usize, col: usize) -> Option<&DigitObservation> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col].as_ref()
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate rows as slices of cells, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<DigitObservation>]> {
        self.cells.chunks(self.cols)
    }
}

/// Pixel spacing between adjacent cells along one axis. A degenerate span
/// (all observations sharing the coordinate) falls back to a spacing of
/// 1.0, which maps every such observation to index 0 instead of dividing
/// by zero.
fn axis_spacing(min: u32, max: u32, count: usize) -> f64 {
    let span = (max - min) as f64;
    if span == 0.0 || count < 2 {
        return 1.0;
    }
    span / (count - 1) as f64
}

fn nearest_index(offset: u32, spacing: f64, count: usize) -> usize {
    let index = (offset as f64 / spacing).round();
    (index.max(0.0) as usize).min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::digit::Digit;

    fn obs(digit: u8, x: u32, y: u32) -> DigitObservation {
        DigitObservation::new(Digit::new(digit).unwrap(), x, y)
    }

    const CONFIG: GridConfig = GridConfig { rows: 3, cols: 4 };

    #[test]
    fn empty_observations_give_full_size_empty_grid() {
        let grid = Grid::from_observations(&[], CONFIG);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn uniform_layout_maps_to_expected_cells() {
        // 3x4 layout with 40px column pitch, 30px row pitch, noisy by a
        // couple of pixels.
        let observations = vec![
            obs(1, 100, 200),
            obs(2, 141, 199),
            obs(3, 179, 202),
            obs(4, 220, 201),
            obs(5, 99, 231),
            obs(6, 161, 229),
            obs(7, 100, 260),
            obs(8, 220, 260),
        ];
        let grid = Grid::from_observations(&observations, CONFIG);

        assert_eq!(grid.get(0, 0).unwrap().digit.value(), 1);
        assert_eq!(grid.get(0, 1).unwrap().digit.value(), 2);
        assert_eq!(grid.get(0, 2).unwrap().digit.value(), 3);
        assert_eq!(grid.get(0, 3).unwrap().digit.value(), 4);
        assert_eq!(grid.get(1, 0).unwrap().digit.value(), 5);
        // 161px is closest to column index 1.5 -> rounds away from zero
        assert_eq!(grid.get(1, 2).unwrap().digit.value(), 6);
        assert_eq!(grid.get(2, 0).unwrap().digit.value(), 7);
        assert_eq!(grid.get(2, 3).unwrap().digit.value(), 8);
        assert_eq!(grid.occupied(), 8);
    }

    #[test]
    fn indices_are_clamped_to_grid_bounds() {
        // The outlier at x=1000 stretches the interpolated layout; every
        // produced index must still be a valid cell.
        let observations = vec![obs(1, 0, 0), obs(2, 10, 10), obs(3, 1000, 20)];
        let grid = Grid::from_observations(&observations, CONFIG);
        assert_eq!(grid.occupied(), 3);
        for (row, cells) in grid.iter_rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_some() {
                    assert!(row < CONFIG.rows && col < CONFIG.cols);
                }
            }
        }
    }

    #[test]
    fn shared_x_coordinate_does_not_fault() {
        // Degenerate column span: everything shares x, so everything lands
        // in column 0 while rows still spread normally.
        let observations = vec![obs(1, 50, 0), obs(2, 50, 30), obs(3, 50, 60)];
        let grid = Grid::from_observations(&observations, CONFIG);
        assert_eq!(grid.get(0, 0).unwrap().digit.value(), 1);
        assert_eq!(grid.get(1, 0).unwrap().digit.value(), 2);
        assert_eq!(grid.get(2, 0).unwrap().digit.value(), 3);
    }

    #[test]
    fn single_observation_lands_in_origin_cell() {
        let grid = Grid::from_observations(&[obs(5, 123, 456)], CONFIG);
        assert_eq!(grid.get(0, 0).unwrap().digit.value(), 5);
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn colliding_observations_keep_the_later_one() {
        // Same pixel position twice: both map to one cell, last write wins.
        let observations = vec![obs(4, 100, 100), obs(9, 102, 101), obs(1, 300, 300)];
        let grid = Grid::from_observations(&observations, CONFIG);
        assert_eq!(grid.get(0, 0).unwrap().digit.value(), 9);
    }

    #[test]
    fn cells_are_independent_storage() {
        // Writing one cell must never leak into siblings in the same row.
        let observations = vec![obs(7, 0, 0), obs(2, 90, 0)];
        let grid = Grid::from_observations(&observations, CONFIG);
        assert_eq!(grid.get(0, 0).unwrap().digit.value(), 7);
        assert!(grid.get(0, 1).is_none());
        assert!(grid.get(0, 2).is_none());
        assert_eq!(grid.get(0, 3).unwrap().digit.value(), 2);
    }

    #[test]
    fn out_of_bounds_get_is_none() {
        let grid = Grid::empty(CONFIG);
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 4).is_none());
    }
}
