// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all phase lattice failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhaseCubeError {
    /// A generation parameter violated its precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A 4-D lookup fell outside the cube.
    #[error("index out of range: {index:?} is outside shape {shape:?}")]
    IndexOutOfRange { index: [usize; 4], shape: [usize; 4] },

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Numerical error (NaN/Inf or a broken unit-modulus invariant).
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type PhaseCubeResult<T> = Result<T, PhaseCubeError>;
