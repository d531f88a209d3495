//! Uniform acceleration grid over the bounding square of a disc.
//!
//! [`DiscGrid`] maps integer cell coordinates to at most one accepted point and
//! answers "is any accepted point closer than `spread`?" by scanning a fixed block
//! of cells around the candidate instead of every accepted point.
use std::f32::consts::SQRT_2;

use glam::Vec2;

use crate::error::{Error, Result};

/// Largest number of cells per axis a grid may allocate (16M cells in total).
pub const MAX_GRID_DIMENSION: usize = 4096;

/// Grid covering `[-max_radius, max_radius]²`, one optional point per cell.
///
/// Cells are `spread / √2` wide rather than `spread` wide. A cell that narrow can
/// hold only one accepted point, which `insert` relies on when it overwrites. The
/// price is that two points closer than `spread` may sit two cells apart, so the
/// neighborhood scan reaches two cells on each side (a 5×5 block, `reach() == 2`).
/// Shrinking the scan to 3×3 drops valid neighbors and breaks the separation
/// guarantee.
#[derive(Debug, Clone)]
pub struct DiscGrid {
    max_radius: f32,
    cell_width: f32,
    dimension: usize,
    reach: usize,
    cells: Vec<Option<Vec2>>,
}

impl DiscGrid {
    /// Cells per axis needed for `max_radius` and `spread`, or `None` when the grid
    /// would exceed [`MAX_GRID_DIMENSION`] or the inputs are not positive and finite.
    pub fn dimension_for(max_radius: f32, spread: f32) -> Option<usize> {
        if !(max_radius.is_finite() && spread.is_finite() && max_radius > 0.0 && spread > 0.0) {
            return None;
        }
        let cell_width = f64::from(spread / SQRT_2);
        let cells = (f64::from(max_radius) * 2.0 / cell_width).ceil().max(1.0);
        if !cells.is_finite() || cells > MAX_GRID_DIMENSION as f64 {
            return None;
        }
        Some(cells as usize)
    }

    /// Create an empty grid for a disc of `max_radius` and a minimum separation of `spread`.
    ///
    /// Returns [`Error::InvalidArgument`] when the grid would need more than
    /// [`MAX_GRID_DIMENSION`] cells per axis.
    pub fn try_new(max_radius: f32, spread: f32) -> Result<Self> {
        let dimension = Self::dimension_for(max_radius, spread).ok_or_else(|| {
            Error::invalid(format!(
                "max_radius {max_radius} / spread {spread} needs more than \
                 {MAX_GRID_DIMENSION} grid cells per axis"
            ))
        })?;
        let cell_count = dimension
            .checked_mul(dimension)
            .ok_or_else(|| Error::invalid("grid cell count overflows usize"))?;
        let cell_width = spread / SQRT_2;
        let reach = ((spread / cell_width).ceil() as usize).max(1);

        Ok(Self {
            max_radius,
            cell_width,
            dimension,
            reach,
            cells: vec![None; cell_count],
        })
    }

    /// Number of cells along each axis.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Width of a single cell in disc units.
    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    /// Number of cells scanned on each side of a candidate's cell.
    pub fn reach(&self) -> usize {
        self.reach
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Point stored at `cell`, if any. Out-of-range coordinates yield `None`.
    pub fn get(&self, cell: (usize, usize)) -> Option<Vec2> {
        let (x, y) = cell;
        if x >= self.dimension || y >= self.dimension {
            return None;
        }
        self.cells[self.index(x, y)]
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.dimension + x
    }

    /// Map a disc-local position to its cell, clamped to the grid bounds.
    #[inline]
    pub fn cell_coordinate_of(&self, point: Vec2) -> (usize, usize) {
        let last = self.dimension as isize - 1;
        let shifted = point + Vec2::splat(self.max_radius);
        let x = ((shifted.x / self.cell_width).floor() as isize).clamp(0, last) as usize;
        let y = ((shifted.y / self.cell_width).floor() as isize).clamp(0, last) as usize;
        (x, y)
    }

    /// Returns `true` when no occupant of the block around `cell` is closer than `spread`.
    ///
    /// Out-of-range coordinates are clamped like in [`DiscGrid::insert`].
    pub fn is_valid_candidate(&self, cell: (usize, usize), point: Vec2, spread: f32) -> bool {
        let last = self.dimension - 1;
        let (gx, gy) = (cell.0.min(last), cell.1.min(last));
        let spread_squared = spread * spread;
        let start_x = gx.saturating_sub(self.reach);
        let end_x = (gx + self.reach + 1).min(self.dimension);
        let start_y = gy.saturating_sub(self.reach);
        let end_y = (gy + self.reach + 1).min(self.dimension);

        for y in start_y..end_y {
            for x in start_x..end_x {
                if let Some(existing) = self.cells[self.index(x, y)] {
                    if point.distance_squared(existing) < spread_squared {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Store `point` in `cell`, replacing any previous occupant.
    ///
    /// Out-of-range coordinates are clamped to the last row or column.
    pub fn insert(&mut self, cell: (usize, usize), point: Vec2) {
        let last = self.dimension - 1;
        let (x, y) = (cell.0.min(last), cell.1.min(last));
        let idx = self.index(x, y);
        self.cells[idx] = Some(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(max_radius: f32, spread: f32) -> DiscGrid {
        DiscGrid::try_new(max_radius, spread).expect("grid within size limit")
    }

    #[test]
    fn grid_dimensions_follow_cell_width() {
        let grid = grid(5.0, 1.0);
        assert!((grid.cell_width() - 1.0 / SQRT_2).abs() < 1e-6);
        assert_eq!(grid.dimension(), (10.0 * SQRT_2).ceil() as usize);
        assert_eq!(grid.reach(), 2);
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn tiny_disc_still_has_one_cell() {
        let grid = grid(0.001, 100.0);
        assert_eq!(grid.dimension(), 1);
        assert_eq!(grid.cell_coordinate_of(Vec2::ZERO), (0, 0));
    }

    #[test]
    fn cell_coordinates_are_offset_by_radius() {
        let grid = grid(2.0, SQRT_2);
        // cell width is exactly 1.0 here
        assert_eq!(grid.cell_coordinate_of(Vec2::new(-2.0, -2.0)), (0, 0));
        assert_eq!(grid.cell_coordinate_of(Vec2::new(0.0, 0.0)), (2, 2));
        assert_eq!(grid.cell_coordinate_of(Vec2::new(1.5, -0.5)), (3, 1));
    }

    #[test]
    fn cell_coordinates_are_clamped() {
        let grid = grid(2.0, SQRT_2);
        let last = grid.dimension() - 1;
        assert_eq!(grid.cell_coordinate_of(Vec2::new(-50.0, 50.0)), (0, last));
        assert_eq!(grid.cell_coordinate_of(Vec2::new(2.0, 2.0)), (last, last));
    }

    #[test]
    fn is_valid_candidate_rejects_close_neighbors() {
        let mut grid = grid(4.0, 1.0);
        let origin = Vec2::ZERO;
        grid.insert(grid.cell_coordinate_of(origin), origin);

        let near = Vec2::new(0.5, 0.0);
        assert!(!grid.is_valid_candidate(grid.cell_coordinate_of(near), near, 1.0));

        let far = Vec2::new(1.0, 1.0);
        assert!(grid.is_valid_candidate(grid.cell_coordinate_of(far), far, 1.0));
    }

    #[test]
    fn neighbors_two_cells_away_are_still_checked() {
        let mut grid = grid(4.0, 1.0);
        let a = Vec2::new(0.01, 0.0);
        grid.insert(grid.cell_coordinate_of(a), a);

        let b = Vec2::new(0.99, 0.0);
        let (ax, _) = grid.cell_coordinate_of(a);
        let (bx, _) = grid.cell_coordinate_of(b);
        assert_eq!(bx - ax, 2);
        assert!(!grid.is_valid_candidate(grid.cell_coordinate_of(b), b, 1.0));
    }

    #[test]
    fn insert_overwrites_occupant() {
        let mut grid = grid(1.0, 1.0);
        let cell = (1, 1);
        grid.insert(cell, Vec2::new(0.1, 0.1));
        grid.insert(cell, Vec2::new(0.2, 0.2));
        assert_eq!(grid.get(cell), Some(Vec2::new(0.2, 0.2)));
        assert_eq!(grid.occupied(), 1);
        assert_eq!(grid.get((99, 0)), None);
    }

    #[test]
    fn insert_clamps_out_of_range_cells() {
        let mut grid = grid(1.0, 1.0);
        assert_eq!(grid.dimension(), 3);

        let p = Vec2::new(0.9, -0.9);
        grid.insert((3, 0), p);
        assert_eq!(grid.get((2, 0)), Some(p));
        assert_eq!(grid.get((0, 1)), None);
        assert_eq!(grid.occupied(), 1);

        grid.insert((usize::MAX, usize::MAX), p);
        assert_eq!(grid.get((2, 2)), Some(p));
    }

    #[test]
    fn dimension_limit_is_inclusive() {
        // cell width is exactly 1.0 for a spread of √2
        assert_eq!(DiscGrid::dimension_for(2048.0, SQRT_2), Some(MAX_GRID_DIMENSION));
        assert_eq!(DiscGrid::dimension_for(2049.0, SQRT_2), None);
        assert_eq!(DiscGrid::dimension_for(5.0, 1.0), Some(15));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert!(DiscGrid::dimension_for(1e6, 1e-6).is_none());
        assert!(DiscGrid::dimension_for(f32::MAX, f32::MIN_POSITIVE).is_none());
        assert!(matches!(
            DiscGrid::try_new(1e6, 1e-6),
            Err(Error::InvalidArgument(_))
        ));
    }
}
