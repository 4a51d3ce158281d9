// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Phase Cube
// ─────────────────────────────────────────────────────────────────────
//! Materialised (τ, i, j, k) complex tensor. Immutable once built.

use num_complex::Complex64;

use phasecube_types::{CubeIndex, CubeShape, PhaseCubeError, PhaseCubeResult};

/// Fully materialised phase cube, flat row-major storage.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCube {
    shape: CubeShape,
    data: Vec<Complex64>,
}

impl PhaseCube {
    /// Wrap a flat buffer. The buffer length must equal `shape.len()`.
    pub fn from_vec(shape: CubeShape, data: Vec<Complex64>) -> PhaseCubeResult<Self> {
        let expected = shape.checked_len().ok_or_else(|| {
            PhaseCubeError::InvalidArgument(format!("shape {shape} overflows usize"))
        })?;
        if data.len() != expected {
            return Err(PhaseCubeError::InvalidArgument(format!(
                "buffer of {} elements does not fit shape {shape}",
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    pub(crate) fn from_parts(shape: CubeShape, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(data.len(), shape.len());
        Self { shape, data }
    }

    pub fn shape(&self) -> CubeShape {
        self.shape
    }

    /// `[tau_steps, size, size, size]`.
    pub fn dims(&self) -> [usize; 4] {
        self.shape.dims()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: CubeIndex) -> Option<Complex64> {
        self.shape.offset(index).ok().map(|o| self.data[o])
    }

    /// Element lookup that reports out-of-range indices as errors.
    pub fn sample(&self, index: CubeIndex) -> PhaseCubeResult<Complex64> {
        let offset = self.shape.offset(index)?;
        Ok(self.data[offset])
    }

    /// The N³ lattice at time index `tau`.
    pub fn slice(&self, tau: usize) -> Option<&[Complex64]> {
        if tau >= self.shape.tau_steps {
            return None;
        }
        let len = self.shape.slice_len();
        Some(&self.data[tau * len..(tau + 1) * len])
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    /// Largest `| |z| - 1 |` across the cube.
    pub fn max_amplitude_error(&self) -> f64 {
        self.data
            .iter()
            .map(|c| (c.norm() - 1.0).abs())
            .fold(0.0, f64::max)
    }

    /// Confirm every element is finite with unit magnitude within `tol`.
    pub fn verify_unit_modulus(&self, tol: f64) -> PhaseCubeResult<()> {
        for (offset, c) in self.data.iter().enumerate() {
            if !c.re.is_finite() || !c.im.is_finite() {
                return Err(PhaseCubeError::Numerical(format!(
                    "non-finite element {c} at flat offset {offset}"
                )));
            }
            let err = (c.norm() - 1.0).abs();
            if err > tol {
                return Err(PhaseCubeError::Numerical(format!(
                    "element at flat offset {offset} has magnitude error {err:e} > {tol:e}"
                )));
            }
        }
        Ok(())
    }
}
