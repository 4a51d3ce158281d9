// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Types
// License: MIT
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Configuration, cube shape, and error hierarchy for the phase
//! lattice generator.

pub mod config;
pub mod error;
pub mod shape;

pub use config::CubeConfig;
pub use error::{PhaseCubeError, PhaseCubeResult};
pub use shape::{CubeIndex, CubeShape};
