// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Generator Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{PhaseCubeError, PhaseCubeResult};
use crate::shape::CubeShape;

/// Element count above which generation logs an allocation warning.
pub const LARGE_CUBE_ELEMENTS: usize = 1 << 26;

/// Parameters for one phase cube generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Lattice edge length N. Default: 6.
    pub size: usize,

    /// Phase-lock angle in radians. Default: π/2.
    pub phi: f64,

    /// Number of discrete time samples. Default: 200.
    pub tau_steps: usize,

    /// Oscillation frequency. Default: 1.0.
    pub freq: f64,

    /// Seed for the generator-local RNG. Default: 42.
    ///
    /// No term of the lattice formula draws from the RNG, so this value
    /// never changes the output.
    pub seed: u64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 6,
            phi: std::f64::consts::FRAC_PI_2,
            tau_steps: 200,
            freq: 1.0,
            seed: 42,
        }
    }
}

impl CubeConfig {
    pub fn new(size: usize, phi: f64, tau_steps: usize, freq: f64, seed: u64) -> Self {
        Self {
            size,
            phi,
            tau_steps,
            freq,
            seed,
        }
    }

    /// Build from signed integer sizes, rejecting non-positive values.
    pub fn from_signed(
        size: i64,
        phi: f64,
        tau_steps: i64,
        freq: f64,
        seed: u64,
    ) -> PhaseCubeResult<Self> {
        let size = positive("size", size)?;
        let tau_steps = positive("tau_steps", tau_steps)?;
        let cfg = Self::new(size, phi, tau_steps, freq, seed);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> PhaseCubeResult<()> {
        if self.size < 1 {
            return Err(PhaseCubeError::InvalidArgument(format!(
                "size must be >= 1, got {}",
                self.size
            )));
        }
        if self.tau_steps < 1 {
            return Err(PhaseCubeError::InvalidArgument(format!(
                "tau_steps must be >= 1, got {}",
                self.tau_steps
            )));
        }
        if !self.phi.is_finite() {
            return Err(PhaseCubeError::InvalidArgument(format!(
                "phi must be finite, got {}",
                self.phi
            )));
        }
        if !self.freq.is_finite() {
            return Err(PhaseCubeError::InvalidArgument(format!(
                "freq must be finite, got {}",
                self.freq
            )));
        }
        if self.shape().checked_len().is_none() {
            return Err(PhaseCubeError::InvalidArgument(format!(
                "cube of {} x {}^3 elements overflows usize",
                self.tau_steps, self.size
            )));
        }
        Ok(())
    }

    /// Whether the materialised cube exceeds [`LARGE_CUBE_ELEMENTS`].
    pub fn is_large(&self) -> bool {
        self.shape()
            .checked_len()
            .map_or(true, |n| n > LARGE_CUBE_ELEMENTS)
    }

    pub fn shape(&self) -> CubeShape {
        CubeShape::new(self.tau_steps, self.size)
    }

    /// `tau_steps * size³`. Call after `validate()`.
    pub fn element_count(&self) -> usize {
        self.shape().len()
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> PhaseCubeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| PhaseCubeError::Config(format!("JSON parse error: {e}")))
    }
}

fn positive(name: &str, value: i64) -> PhaseCubeResult<usize> {
    if value < 1 {
        return Err(PhaseCubeError::InvalidArgument(format!(
            "{name} must be a positive integer, got {value}"
        )));
    }
    usize::try_from(value).map_err(|_| {
        PhaseCubeError::InvalidArgument(format!("{name} = {value} does not fit in usize"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cfg = CubeConfig::default();
        assert_eq!(cfg.size, 6);
        assert!((cfg.phi - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(cfg.tau_steps, 200);
        assert_eq!(cfg.freq, 1.0);
        assert_eq!(cfg.seed, 42);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let cfg = CubeConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PhaseCubeError::InvalidArgument(msg)) if msg.contains("size")
        ));
    }

    #[test]
    fn test_zero_tau_rejected() {
        let cfg = CubeConfig {
            tau_steps: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PhaseCubeError::InvalidArgument(msg)) if msg.contains("tau_steps")
        ));
    }

    #[test]
    fn test_non_finite_phi_rejected() {
        let cfg = CubeConfig {
            phi: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_infinite_freq_rejected() {
        let cfg = CubeConfig {
            freq: f64::INFINITY,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_negative_phi_and_freq_accepted() {
        let cfg = CubeConfig {
            phi: -3.0,
            freq: -250.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_overflow_rejected() {
        let cfg = CubeConfig {
            size: usize::MAX / 2,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(PhaseCubeError::InvalidArgument(msg)) if msg.contains("overflows")
        ));
    }

    #[test]
    fn test_from_signed_negative_size() {
        let err = CubeConfig::from_signed(-2, 1.0, 10, 1.0, 42).unwrap_err();
        assert_eq!(
            err,
            PhaseCubeError::InvalidArgument("size must be a positive integer, got -2".into())
        );
    }

    #[test]
    fn test_from_signed_zero_tau() {
        let err = CubeConfig::from_signed(6, 1.0, 0, 1.0, 42).unwrap_err();
        assert!(matches!(err, PhaseCubeError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_signed_valid() {
        let cfg = CubeConfig::from_signed(4, 0.5, 8, 2.0, 7).unwrap();
        assert_eq!(cfg, CubeConfig::new(4, 0.5, 8, 2.0, 7));
    }

    #[test]
    fn test_is_large() {
        assert!(!CubeConfig::default().is_large());
        assert!(CubeConfig::new(1024, 1.0, 200, 1.0, 42).is_large());
    }

    #[test]
    fn test_element_count() {
        let cfg = CubeConfig::new(6, 1.0, 200, 1.0, 42);
        assert_eq!(cfg.element_count(), 200 * 216);
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = CubeConfig::from_json(r#"{"size": 4, "seed": 7}"#).unwrap();
        assert_eq!(cfg.size, 4);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.tau_steps, 200);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            CubeConfig::from_json("{size: }"),
            Err(PhaseCubeError::Config(_))
        ));
    }
}
