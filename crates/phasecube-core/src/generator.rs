// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Lattice Generator
// ─────────────────────────────────────────────────────────────────────
//! Builds the phase cube
//!
//!   ψ[τ] = base · exp(i·φ·sin(2π·f·τ/T)) · exp(-i·φ)
//!
//! for τ = 0 … T-1, where `base` is the time-independent resonance
//! field. Each τ-slice depends only on `base` and its own τ, so slices
//! can be produced serially, in parallel, or streamed one at a time.

use std::f64::consts::PI;
use std::iter::FusedIterator;

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use phasecube_types::{CubeConfig, CubeShape, PhaseCubeResult};

use crate::cube::PhaseCube;
use crate::field::{unit_phase, BaseField};
use crate::grid::CoordinateGrid;

/// One τ-slice of the cube, as yielded by the streaming iterator.
#[derive(Debug, Clone, PartialEq)]
pub struct TauSlice {
    /// Time index in `0..tau_steps`.
    pub tau: usize,
    /// Normalised time `tau / tau_steps` in [0, 1).
    pub t: f64,
    /// N³ lattice values, row-major over (i, j, k).
    pub values: Vec<Complex64>,
}

/// Phase lattice generator.
///
/// Owns its RNG, seeded from `CubeConfig::seed`. Nothing in the lattice
/// formula draws from it, so the seed has no effect on the output; the
/// RNG is exposed through [`LatticeGenerator::rng`] only.
pub struct LatticeGenerator {
    cfg: CubeConfig,
    base: BaseField,
    correction: Complex64,
    rng: StdRng,
}

impl LatticeGenerator {
    /// Validate `config` and precompute the base field.
    pub fn new(config: CubeConfig) -> PhaseCubeResult<Self> {
        config.validate()?;
        if config.is_large() {
            log::warn!(
                "phase cube {} holds {} complex samples; consider streaming slices",
                config.shape(),
                config.element_count()
            );
        }
        let grid = CoordinateGrid::new(config.size);
        let base = BaseField::new(&grid, config.phi);
        log::debug!(
            "lattice generator ready: shape={} phi={} freq={} seed={} (seed unused by the field)",
            config.shape(),
            config.phi,
            config.freq,
            config.seed
        );
        Ok(Self {
            correction: unit_phase(-config.phi),
            rng: StdRng::seed_from_u64(config.seed),
            base,
            cfg: config,
        })
    }

    pub fn default_params() -> PhaseCubeResult<Self> {
        Self::new(CubeConfig::default())
    }

    pub fn config(&self) -> &CubeConfig {
        &self.cfg
    }

    pub fn shape(&self) -> CubeShape {
        self.cfg.shape()
    }

    pub fn base(&self) -> &BaseField {
        &self.base
    }

    /// Generator-local RNG, seeded deterministically.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Normalised time of step `tau`.
    #[inline]
    pub fn time(&self, tau: usize) -> f64 {
        tau as f64 / self.cfg.tau_steps as f64
    }

    /// Temporal modulation `exp(i·φ·sin(2π·f·t))`.
    #[inline]
    pub fn modulation(&self, tau: usize) -> Complex64 {
        let t = self.time(tau);
        unit_phase(self.cfg.phi * (2.0 * PI * self.cfg.freq * t).sin())
    }

    /// Self-duality correction `exp(-i·φ)`, identical for every step.
    #[inline]
    pub fn correction(&self) -> Complex64 {
        self.correction
    }

    /// Combined per-step factor `modulation(τ) · correction`.
    pub fn time_factor(&self, tau: usize) -> Complex64 {
        self.modulation(tau) * self.correction
    }

    /// Fill `out` (length N³) with the lattice at step `tau`.
    pub fn write_slice(&self, tau: usize, out: &mut [Complex64]) {
        self.base.scale_into(self.modulation(tau), self.correction, out);
    }

    /// Compute a single τ-slice.
    pub fn slice(&self, tau: usize) -> TauSlice {
        let mut values = vec![Complex64::new(0.0, 0.0); self.shape().slice_len()];
        self.write_slice(tau, &mut values);
        TauSlice {
            tau,
            t: self.time(tau),
            values,
        }
    }

    /// Stream the cube one τ-slice at a time.
    pub fn slices(&self) -> TauSlices<'_> {
        TauSlices {
            generator: self,
            next: 0,
        }
    }

    /// Materialise the full cube on the calling thread.
    pub fn generate(&self) -> PhaseCube {
        let shape = self.shape();
        let mut data = vec![Complex64::new(0.0, 0.0); shape.len()];
        data.chunks_mut(shape.slice_len())
            .enumerate()
            .for_each(|(tau, out)| self.write_slice(tau, out));
        log::debug!("generated phase cube {shape}");
        PhaseCube::from_parts(shape, data)
    }

    /// Materialise the full cube with τ-slices partitioned across the
    /// rayon pool. Output is bit-identical to [`LatticeGenerator::generate`].
    pub fn generate_parallel(&self) -> PhaseCube {
        let shape = self.shape();
        let mut data = vec![Complex64::new(0.0, 0.0); shape.len()];
        data.par_chunks_mut(shape.slice_len())
            .enumerate()
            .for_each(|(tau, out)| self.write_slice(tau, out));
        log::debug!(
            "generated phase cube {shape} across {} threads",
            rayon::current_num_threads()
        );
        PhaseCube::from_parts(shape, data)
    }
}

/// Streaming iterator over the τ-slices of a generator.
pub struct TauSlices<'a> {
    generator: &'a LatticeGenerator,
    next: usize,
}

impl Iterator for TauSlices<'_> {
    type Item = TauSlice;

    fn next(&mut self) -> Option<TauSlice> {
        if self.next >= self.generator.cfg.tau_steps {
            return None;
        }
        let slice = self.generator.slice(self.next);
        self.next += 1;
        Some(slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.generator.cfg.tau_steps - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TauSlices<'_> {}

impl FusedIterator for TauSlices<'_> {}

/// Generate the phase cube for the given parameters.
///
/// Fails with `InvalidArgument` when `size` or `tau_steps` is zero or
/// when `phi`/`freq` is not finite.
pub fn generate(
    size: usize,
    phi: f64,
    tau_steps: usize,
    freq: f64,
    seed: u64,
) -> PhaseCubeResult<PhaseCube> {
    let generator = LatticeGenerator::new(CubeConfig::new(size, phi, tau_steps, freq, seed))?;
    Ok(generator.generate())
}
