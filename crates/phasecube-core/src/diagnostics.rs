// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Sample Diagnostics
// ─────────────────────────────────────────────────────────────────────
//! Amplitude/phase report for one cube element, plus the console
//! rendering used by the standalone runner.

use serde::Serialize;

use phasecube_types::{CubeIndex, CubeShape, PhaseCubeResult};

use crate::cube::PhaseCube;

/// Element reported by the standalone runner. Requires `size > 3`.
pub const DEFAULT_SAMPLE_INDEX: CubeIndex = [0, 3, 3, 3];

/// Magnitude and principal phase of one cube element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleReport {
    pub index: CubeIndex,
    pub amplitude: f64,
    /// Principal value in (-π, π].
    pub phase: f64,
}

impl SampleReport {
    /// Fails with `IndexOutOfRange` when `index` is outside the cube.
    pub fn at(cube: &PhaseCube, index: CubeIndex) -> PhaseCubeResult<Self> {
        let value = cube.sample(index)?;
        Ok(Self {
            index,
            amplitude: value.norm(),
            phase: value.arg(),
        })
    }
}

/// Machine-readable summary of one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct CubeSummary {
    pub shape: [usize; 4],
    pub sample: SampleReport,
    pub max_amplitude_error: f64,
}

impl CubeSummary {
    pub fn new(cube: &PhaseCube, index: CubeIndex) -> PhaseCubeResult<Self> {
        Ok(Self {
            shape: cube.dims(),
            sample: SampleReport::at(cube, index)?,
            max_amplitude_error: cube.max_amplitude_error(),
        })
    }
}

/// Console lines of the standalone runner.
pub fn render_lines(shape: CubeShape, sample: &SampleReport) -> [String; 3] {
    [
        format!("Tensor Phase Cube shape: {shape}"),
        format!("Sample amplitude: {:?}", sample.amplitude),
        format!("Sample phase: {:?}", sample.phase),
    ]
}
