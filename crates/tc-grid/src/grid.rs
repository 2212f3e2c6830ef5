use rayon::prelude::*;

use crate::Error;

/// Dense row-major grid of elevation samples.
///
/// Always fully populated, never sparse. The loader builds it once;
/// [`ElevationGrid::quantize`] is the only in-place mutation the pipeline
/// performs after that.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationGrid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
    step: Option<f32>,
}

impl ElevationGrid {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidState("grid dimensions must be positive"));
        }

        let expected = rows
            .checked_mul(cols)
            .ok_or(Error::InvalidState("grid size overflow"))?;
        if data.len() != expected {
            return Err(Error::InvalidState("grid data length mismatch"));
        }

        Ok(Self {
            rows,
            cols,
            data,
            step: None,
        })
    }

    pub fn new_fill(rows: usize, cols: usize, value: f32) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        let len = rows.checked_mul(cols).expect("grid size overflow");
        Self {
            rows,
            cols,
            data: vec![value; len],
            step: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn row(&self, row: usize) -> &[f32] {
        assert!(row < self.rows, "row index out of bounds");
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn value_at(&self, row: usize, col: usize) -> Result<f32, Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(self.data[row * self.cols + col])
    }

    pub fn set_value(&mut self, row: usize, col: usize, value: f32) -> Result<(), Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds { row, col });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Floors every sample to the nearest lower multiple of `step`.
    ///
    /// Per-cell independent, so rows are processed in parallel. A
    /// non-positive `step` is a caller contract violation.
    pub fn quantize(&mut self, step: f32) {
        assert!(step > 0.0, "quantization step must be positive");

        self.data.par_chunks_mut(self.cols).for_each(|row| {
            for v in row {
                *v -= v.rem_euclid(step);
            }
        });
        self.step = Some(step);
    }

    pub fn is_quantized(&self) -> bool {
        self.step.is_some()
    }

    pub fn quantization_step(&self) -> Option<f32> {
        self.step
    }

    pub fn min_max(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }
}
