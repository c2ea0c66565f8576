//! Sample grids and the slot index law.
//!
//! A motion frame arrives as a `width x height` grid of scalars, typically
//! the red channel of a texture read back from the GPU. Logical slot `idx`
//! lives at column `idx / height` and row `height - 1 - idx % height`:
//! slots run down each column from the top, columns left to right.

use crate::error::{MotionError, Result};

/// Grid width of the reference encoding.
pub const DEFAULT_GRID_WIDTH: usize = 40;

/// Grid height of the reference encoding.
pub const DEFAULT_GRID_HEIGHT: usize = 45;

/// Any buffer a frame can be sampled from.
///
/// Row `0` is the bottom row, matching texture readback order.
pub trait GridSource {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Scalar at column `x`, row `y`.
    ///
    /// Implementations may panic when `(x, y)` is outside the grid.
    fn read(&self, x: usize, y: usize) -> f32;

    /// Number of addressable slots.
    fn capacity(&self) -> usize {
        self.width() * self.height()
    }
}

/// An owned, row-major grid of scalars.
///
/// # Example
///
/// ```
/// use motion_types::{GridSource, SampleGrid};
///
/// let grid = SampleGrid::new(2, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(grid.read(1, 0), 1.0);
/// assert_eq!(grid.read(0, 1), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl SampleGrid {
    /// Wraps a row-major buffer of `width * height` samples.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::BufferSizeMismatch`] if the buffer length is wrong.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(MotionError::buffer_mismatch(expected, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a grid of zeros.
    #[must_use]
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Builds a grid from RGBA texels, keeping only the red channel.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::BufferSizeMismatch`] if the texel count is wrong.
    pub fn from_rgba(width: usize, height: usize, texels: &[[f32; 4]]) -> Result<Self> {
        Self::new(width, height, texels.iter().map(|t| t[0]).collect())
    }

    /// Overwrites the sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.offset(x, y);
        self.data[i] = value;
    }

    /// Writes `value` into logical slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the grid.
    pub fn set_slot(&mut self, idx: usize, value: f32) {
        let (x, y) = slot_position(idx, self.height);
        self.set(x, y, value);
    }

    /// Raw row-major samples.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "grid position ({x}, {y}) outside {}x{}",
            self.width,
            self.height
        );
        x + y * self.width
    }
}

impl GridSource for SampleGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn read(&self, x: usize, y: usize) -> f32 {
        self.data[self.offset(x, y)]
    }
}

impl<G: GridSource + ?Sized> GridSource for &G {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn read(&self, x: usize, y: usize) -> f32 {
        (**self).read(x, y)
    }
}

/// Grid position `(x, y)` of logical slot `idx`.
///
/// # Example
///
/// ```
/// use motion_types::slot_position;
///
/// assert_eq!(slot_position(0, 2), (0, 1));
/// assert_eq!(slot_position(1, 2), (0, 0));
/// assert_eq!(slot_position(2, 2), (1, 1));
/// assert_eq!(slot_position(3, 2), (1, 0));
/// ```
#[must_use]
pub const fn slot_position(idx: usize, height: usize) -> (usize, usize) {
    (idx / height, height - 1 - idx % height)
}

/// Samples logical slot `idx`.
///
/// `idx` must be below `width * height`; layouts are validated up front so
/// that this holds during decoding.
///
/// # Panics
///
/// Panics if `idx` is out of range.
pub fn sample_slot<G: GridSource + ?Sized>(grid: &G, idx: usize) -> f32 {
    debug_assert!(
        idx < grid.capacity(),
        "slot {idx} outside grid of {} slots",
        grid.capacity()
    );
    let (x, y) = slot_position(idx, grid.height());
    grid.read(x, y)
}

/// Samples logical slot `idx`, reporting out-of-range slots as errors.
///
/// # Errors
///
/// Returns [`MotionError::SlotOutOfRange`] if `idx >= width * height`.
pub fn try_sample_slot<G: GridSource + ?Sized>(grid: &G, idx: usize) -> Result<f32> {
    let capacity = grid.capacity();
    if idx >= capacity {
        return Err(MotionError::slot_out_of_range(idx, capacity, "sample"));
    }
    Ok(sample_slot(grid, idx))
}
