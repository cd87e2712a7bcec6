use thiserror::Error;

use crate::core::data::point3::Point3;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CubicGridError {
    #[error("grid size must be greater than zero")]
    ZeroSize,
    #[error("grid size {size} is too large: {size}^3 points do not fit in a u64 index")]
    TooLarge { size: u32 },
    #[error("index {index} is outside the grid of {len} points")]
    IndexOutOfRange { index: u64, len: u64 },
}

/// Cubic lattice of `size³` integer points centered on the origin.
///
/// Points are addressed by a linear index decoded in mixed radix `size`,
/// x varying fastest, then y, then z.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CubicGrid {
    size: u32,
    len: u64,
}

impl CubicGrid {
    pub fn new(size: u32) -> Result<Self, CubicGridError> {
        if size == 0 {
            return Err(CubicGridError::ZeroSize);
        }

        let edge = size as u64;
        let len = edge
            .checked_mul(edge)
            .and_then(|square| square.checked_mul(edge))
            .ok_or(CubicGridError::TooLarge { size })?;

        Ok(Self { size, len })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Offset subtracted from each decoded digit, `floor(size / 2)`.
    #[must_use]
    pub fn half(&self) -> i64 {
        (self.size / 2) as i64
    }

    /// Total number of lattice points, `size³`.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest coordinate on every axis.
    #[must_use]
    pub fn min_coord(&self) -> i64 {
        -self.half()
    }

    /// Largest coordinate on every axis, `size - 1 - half`.
    #[must_use]
    pub fn max_coord(&self) -> i64 {
        self.size as i64 - 1 - self.half()
    }

    pub fn decode(&self, index: u64) -> Result<Point3, CubicGridError> {
        if index >= self.len {
            return Err(CubicGridError::IndexOutOfRange { index, len: self.len });
        }

        Ok(self.point_at(index))
    }

    /// Inverse of [`CubicGrid::decode`]. Returns `None` for points that are
    /// not integer-valued or lie outside the lattice.
    #[must_use]
    pub fn encode(&self, point: Point3) -> Option<u64> {
        let edge = self.size as u64;
        let digit = |coord: f64| -> Option<u64> {
            if coord.fract() != 0.0 {
                return None;
            }

            let shifted = coord as i64 + self.half();

            if shifted < 0 || shifted >= self.size as i64 {
                return None;
            }

            Some(shifted as u64)
        };

        let x = digit(point.x)?;
        let y = digit(point.y)?;
        let z = digit(point.z)?;

        Some(x + y * edge + z * edge * edge)
    }

    /// Decodes an index already known to be in range.
    pub(crate) fn point_at(&self, index: u64) -> Point3 {
        let edge = self.size as u64;
        let half = self.half();

        let x = (index % edge) as i64 - half;
        let y = ((index / edge) % edge) as i64 - half;
        let z = (index / (edge * edge)) as i64 - half;

        Point3::new(x as f64, y as f64, z as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(CubicGrid::new(0), Err(CubicGridError::ZeroSize));
    }

    #[test]
    fn test_new_rejects_size_overflowing_index_space() {
        assert_eq!(
            CubicGrid::new(u32::MAX),
            Err(CubicGridError::TooLarge { size: u32::MAX })
        );
    }

    #[test]
    fn test_len_and_bounds_odd_size() {
        let grid = CubicGrid::new(201).unwrap();

        assert_eq!(grid.len(), 201 * 201 * 201);
        assert_eq!(grid.half(), 100);
        assert_eq!(grid.min_coord(), -100);
        assert_eq!(grid.max_coord(), 100);
    }

    #[test]
    fn test_bounds_even_size_are_asymmetric() {
        let grid = CubicGrid::new(4).unwrap();

        assert_eq!(grid.min_coord(), -2);
        assert_eq!(grid.max_coord(), 1);
    }

    #[test]
    fn test_single_point_grid_is_origin() {
        let grid = CubicGrid::new(1).unwrap();

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.decode(0), Ok(Point3::ZERO));
    }

    #[test]
    fn test_decode_x_varies_fastest() {
        let grid = CubicGrid::new(3).unwrap();

        assert_eq!(grid.decode(0), Ok(Point3::new(-1.0, -1.0, -1.0)));
        assert_eq!(grid.decode(1), Ok(Point3::new(0.0, -1.0, -1.0)));
        assert_eq!(grid.decode(3), Ok(Point3::new(-1.0, 0.0, -1.0)));
        assert_eq!(grid.decode(9), Ok(Point3::new(-1.0, -1.0, 0.0)));
        assert_eq!(grid.decode(13), Ok(Point3::ZERO));
        assert_eq!(grid.decode(26), Ok(Point3::new(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_decode_out_of_range() {
        let grid = CubicGrid::new(3).unwrap();

        assert_eq!(
            grid.decode(27),
            Err(CubicGridError::IndexOutOfRange { index: 27, len: 27 })
        );
    }

    #[test]
    fn test_decode_encode_round_trip_odd_and_even() {
        for size in [1, 2, 3, 4, 7] {
            let grid = CubicGrid::new(size).unwrap();

            for index in 0..grid.len() {
                let point = grid.decode(index).unwrap();
                assert_eq!(grid.encode(point), Some(index), "size {} index {}", size, index);
            }
        }
    }

    #[test]
    fn test_decode_covers_lattice_without_duplicates() {
        let grid = CubicGrid::new(4).unwrap();
        let mut seen = std::collections::HashSet::new();

        for index in 0..grid.len() {
            let p = grid.decode(index).unwrap();
            assert!(seen.insert((p.x as i64, p.y as i64, p.z as i64)));

            for coord in [p.x, p.y, p.z] {
                let coord = coord as i64;
                assert!(coord >= grid.min_coord() && coord <= grid.max_coord());
            }
        }

        assert_eq!(seen.len() as u64, grid.len());
    }

    #[test]
    fn test_encode_rejects_points_off_lattice() {
        let grid = CubicGrid::new(3).unwrap();

        assert_eq!(grid.encode(Point3::new(0.5, 0.0, 0.0)), None);
        assert_eq!(grid.encode(Point3::new(2.0, 0.0, 0.0)), None);
        assert_eq!(grid.encode(Point3::new(0.0, -2.0, 0.0)), None);
    }
}
