// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Generator Core
// License: MIT
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Deterministic generator for a 4-D complex "phase lattice":
//! a (τ, N, N, N) tensor of unit-magnitude phase factors.
//!
//! Pipeline:
//!   - CoordinateGrid: evenly spaced [-1, 1] axis, "ij" indexing
//!   - BaseField: exp(i·φ·(x+y+z)), computed once
//!   - LatticeGenerator: per-τ modulation and self-duality correction,
//!     materialised serially, in parallel, or streamed slice by slice
//!   - SampleReport: amplitude/phase of a single element
//!
//! # Invariants
//!
//! 1. Output shape is exactly `(tau_steps, size, size, size)`.
//! 2. Every element has magnitude 1 up to rounding. All exponentials
//!    take purely imaginary arguments, so no `phi`/`freq` can overflow.
//! 3. Output depends only on `size`, `phi`, `tau_steps`, and `freq`.
//!    The seed is applied to a generator-local RNG that nothing reads.

pub mod cube;
pub mod diagnostics;
pub mod field;
pub mod generator;
pub mod grid;

pub use cube::PhaseCube;
pub use diagnostics::{render_lines, CubeSummary, SampleReport, DEFAULT_SAMPLE_INDEX};
pub use field::{unit_phase, BaseField};
pub use generator::{generate, LatticeGenerator, TauSlice, TauSlices};
pub use grid::{linspace, CoordinateGrid};

pub use num_complex::Complex64;
