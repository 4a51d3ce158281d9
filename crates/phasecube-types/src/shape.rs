// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Cube Shape
// ─────────────────────────────────────────────────────────────────────
//! Shape and row-major indexing for the (τ, i, j, k) phase cube.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PhaseCubeError, PhaseCubeResult};

/// A position in the cube: `[τ, i, j, k]`.
pub type CubeIndex = [usize; 4];

/// Shape of a phase cube: `tau_steps` slices of an N×N×N lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeShape {
    pub tau_steps: usize,
    pub size: usize,
}

impl CubeShape {
    pub fn new(tau_steps: usize, size: usize) -> Self {
        Self { tau_steps, size }
    }

    /// `[tau_steps, size, size, size]`.
    pub fn dims(&self) -> [usize; 4] {
        [self.tau_steps, self.size, self.size, self.size]
    }

    /// Number of lattice cells in one τ-slice (N³).
    pub fn slice_len(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Total number of elements across all slices.
    pub fn len(&self) -> usize {
        self.tau_steps * self.slice_len()
    }

    /// `len()` without overflow; `None` if the shape cannot be addressed.
    pub fn checked_len(&self) -> Option<usize> {
        self.size
            .checked_mul(self.size)?
            .checked_mul(self.size)?
            .checked_mul(self.tau_steps)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject indices outside the shape.
    pub fn check(&self, index: CubeIndex) -> PhaseCubeResult<()> {
        let dims = self.dims();
        if index.iter().zip(dims.iter()).any(|(&i, &d)| i >= d) {
            return Err(PhaseCubeError::IndexOutOfRange { index, shape: dims });
        }
        Ok(())
    }

    /// Row-major flat offset, τ outermost then i, j, k.
    pub fn offset(&self, index: CubeIndex) -> PhaseCubeResult<usize> {
        self.check(index)?;
        let [tau, i, j, k] = index;
        let n = self.size;
        Ok(tau * self.slice_len() + (i * n + j) * n + k)
    }
}

impl fmt::Display for CubeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        write!(f, "({}, {n}, {n}, {n})", self.tau_steps)
    }
}
