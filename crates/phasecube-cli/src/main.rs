// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Command-Line Runner
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Generates the phase cube and prints its shape and the amplitude and
//! phase of element `[0, 3, 3, 3]`.
//!
//! ```text
//! $ phasecube
//! Tensor Phase Cube shape: (200, 6, 6, 6)
//! Sample amplitude: 1.0
//! Sample phase: -0.6283185307179578
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use phasecube_core::{render_lines, CubeSummary, LatticeGenerator, DEFAULT_SAMPLE_INDEX};
use phasecube_types::CubeConfig;

/// Phase lattice generator: (τ, N, N, N) complex tensor of phase factors.
#[derive(Parser, Debug)]
#[command(name = "phasecube", version, about, long_about = None)]
struct Args {
    /// Lattice edge length N
    #[arg(short, long, default_value_t = 6, allow_negative_numbers = true)]
    size: i64,

    /// Phase-lock angle in radians
    #[arg(long, default_value_t = std::f64::consts::FRAC_PI_2, allow_negative_numbers = true)]
    phi: f64,

    /// Number of discrete time samples
    #[arg(short, long, default_value_t = 200, allow_negative_numbers = true)]
    tau_steps: i64,

    /// Oscillation frequency
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    freq: f64,

    /// RNG seed (accepted for reproducibility; does not affect the output)
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Partition time steps across worker threads
    #[arg(long)]
    parallel: bool,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Generate the cube described by `args` and write the report to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let cfg = CubeConfig::from_signed(args.size, args.phi, args.tau_steps, args.freq, args.seed)
        .context("invalid generation parameters")?;
    let generator = LatticeGenerator::new(cfg)?;

    let cube = if args.parallel {
        generator.generate_parallel()
    } else {
        generator.generate()
    };

    let summary = CubeSummary::new(&cube, DEFAULT_SAMPLE_INDEX)
        .context("cannot sample the diagnostic element (requires size > 3)")?;
    log::debug!("max amplitude error: {:e}", summary.max_amplitude_error);

    if args.json {
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    } else {
        for line in render_lines(cube.shape(), &summary.sample) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasecube_types::PhaseCubeError;

    fn run_to_string(argv: &[&str]) -> Result<String> {
        let args = Args::parse_from(argv.iter().copied());
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["phasecube"]);
        assert_eq!(args.size, 6);
        assert!((args.phi - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(args.tau_steps, 200);
        assert_eq!(args.freq, 1.0);
        assert_eq!(args.seed, 42);
        assert!(!args.parallel);
        assert!(!args.json);
    }

    #[test]
    fn test_args_negative_size_reaches_validation() {
        let args = Args::parse_from(["phasecube", "--size", "-3"]);
        let err = CubeConfig::from_signed(args.size, args.phi, args.tau_steps, args.freq, args.seed)
            .unwrap_err();
        assert!(err.to_string().contains("size must be a positive integer"));
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "phasecube", "-s", "8", "--phi", "-0.5", "-t", "10", "-f", "2.5", "--seed", "7",
            "--parallel", "--json", "-vv",
        ]);
        assert_eq!(args.size, 8);
        assert_eq!(args.phi, -0.5);
        assert_eq!(args.tau_steps, 10);
        assert_eq!(args.freq, 2.5);
        assert_eq!(args.seed, 7);
        assert!(args.parallel);
        assert!(args.json);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_run_default_report() {
        let out = run_to_string(&["phasecube"]).unwrap();
        assert_eq!(
            out,
            "Tensor Phase Cube shape: (200, 6, 6, 6)\n\
             Sample amplitude: 1.0\n\
             Sample phase: -0.6283185307179578\n"
        );
    }

    #[test]
    fn test_run_parallel_matches_serial() {
        let serial = run_to_string(&["phasecube", "-s", "5", "-t", "17"]).unwrap();
        let parallel = run_to_string(&["phasecube", "-s", "5", "-t", "17", "--parallel"]).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_run_json_summary() {
        let out = run_to_string(&["phasecube", "--json", "-t", "10"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(json["shape"], serde_json::json!([10, 6, 6, 6]));
        let phase = json["sample"]["phase"].as_f64().unwrap();
        assert!((phase + 0.6283185307179578).abs() < 1e-15);
    }

    #[test]
    fn test_run_small_size_index_out_of_range() {
        let args = Args::parse_from(["phasecube", "--size", "2"]);
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PhaseCubeError>(),
            Some(PhaseCubeError::IndexOutOfRange { .. })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_zero_size_invalid_argument() {
        let args = Args::parse_from(["phasecube", "--size", "0"]);
        let mut out = Vec::new();
        let err = run(&args, &mut out).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PhaseCubeError>(),
            Some(PhaseCubeError::InvalidArgument(_))
        ));
        assert!(out.is_empty());
    }
}
