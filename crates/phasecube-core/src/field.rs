// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Base Field
// ─────────────────────────────────────────────────────────────────────
//! Time-independent resonance field:
//!
//!   base[i,j,k] = exp(i · φ · (x + y + z))
//!
//! Computed once per generation and shared by every τ-slice.

use num_complex::Complex64;

use crate::grid::CoordinateGrid;

/// Unit-phase factor `exp(i·θ)`.
#[inline]
pub fn unit_phase(theta: f64) -> Complex64 {
    Complex64::new(0.0, theta).exp()
}

/// Base field over an N×N×N lattice, flat row-major over (i, j, k).
#[derive(Debug, Clone, PartialEq)]
pub struct BaseField {
    size: usize,
    values: Vec<Complex64>,
}

impl BaseField {
    pub fn new(grid: &CoordinateGrid, phi: f64) -> Self {
        let values = grid
            .cells()
            .map(|(_, [x, y, z])| unit_phase((x + y + z) * phi))
            .collect();
        Self {
            size: grid.size(),
            values,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.values
    }

    pub fn get(&self, i: usize, j: usize, k: usize) -> Option<Complex64> {
        let n = self.size;
        if i >= n || j >= n || k >= n {
            return None;
        }
        Some(self.values[(i * n + j) * n + k])
    }

    /// Write `(base · modulation) · correction` into `out` element-wise.
    pub fn scale_into(&self, modulation: Complex64, correction: Complex64, out: &mut [Complex64]) {
        debug_assert_eq!(out.len(), self.values.len());
        for (dst, &b) in out.iter_mut().zip(self.values.iter()) {
            *dst = b * modulation * correction;
        }
    }
}
