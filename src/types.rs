//! Core data types for greenband

use std::fmt;

use crate::error::{Error, Result};

/// Raster dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
}

impl Dimensions {
    /// Creates new dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns the total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A single-band raster grid of 32-bit float reflectance values.
///
/// Data is stored row-major. The grid is immutable once constructed;
/// derived grids (NDVI) are new allocations, never in-place edits.
#[derive(Debug, Clone, PartialEq)]
pub struct BandGrid {
    dims: Dimensions,
    data: Vec<f32>,
}

impl BandGrid {
    /// Creates a grid from row-major data, validating the buffer length
    /// against the declared dimensions.
    pub fn new(dims: Dimensions, data: Vec<f32>) -> Result<Self> {
        if data.len() != dims.pixel_count() {
            return Err(Error::InvalidGrid {
                dims,
                len: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Returns the grid dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.dims.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.dims.height
    }

    /// Returns the total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.dims.pixel_count()
    }

    /// Row-major pixel data
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the value at (x, y), or `None` if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.dims.width || y >= self.dims.height {
            return None;
        }
        Some(self.data[y * self.dims.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::new(100, 200);
        assert_eq!(dims.width, 100);
        assert_eq!(dims.height, 200);
        assert_eq!(dims.pixel_count(), 20000);
        assert_eq!(dims.to_string(), "100x200");
    }

    #[test]
    fn test_grid_construction() {
        let grid = BandGrid::new(Dimensions::new(2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(grid.pixel_count(), 4);
        assert_eq!(grid.get(0, 0), Some(1.0));
        assert_eq!(grid.get(1, 1), Some(4.0));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_grid_length_mismatch() {
        let err = BandGrid::new(Dimensions::new(3, 3), vec![0.0; 4]).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid { .. }));
    }
}
