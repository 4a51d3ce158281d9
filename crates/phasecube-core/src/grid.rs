// ─────────────────────────────────────────────────────────────────────
// QSOL Phase Lattice — Coordinate Grid
// ─────────────────────────────────────────────────────────────────────
//! Evenly spaced lattice coordinates over [-1, 1] with "ij" indexing:
//! `x` varies along the first lattice index, `y` along the second,
//! `z` along the third.

/// Lower bound of every lattice axis.
pub const AXIS_START: f64 = -1.0;
/// Upper bound of every lattice axis.
pub const AXIS_STOP: f64 = 1.0;

/// `n` evenly spaced samples over the closed interval [start, stop].
///
/// Sample `i` is `start + i * step` and the last sample is exactly
/// `stop`. A single sample sits at the interval midpoint.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5 * (start + stop)],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut axis: Vec<f64> = (0..n).map(|i| i as f64 * step + start).collect();
            axis[n - 1] = stop;
            axis
        }
    }
}

/// N×N×N coordinate grid built from one shared axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    axis: Vec<f64>,
}

impl CoordinateGrid {
    pub fn new(size: usize) -> Self {
        Self {
            axis: linspace(AXIS_START, AXIS_STOP, size),
        }
    }

    pub fn size(&self) -> usize {
        self.axis.len()
    }

    pub fn axis(&self) -> &[f64] {
        &self.axis
    }

    #[inline]
    pub fn x(&self, i: usize, _j: usize, _k: usize) -> f64 {
        self.axis[i]
    }

    #[inline]
    pub fn y(&self, _i: usize, j: usize, _k: usize) -> f64 {
        self.axis[j]
    }

    #[inline]
    pub fn z(&self, _i: usize, _j: usize, k: usize) -> f64 {
        self.axis[k]
    }

    /// Coordinate triple of lattice cell (i, j, k).
    #[inline]
    pub fn coords(&self, i: usize, j: usize, k: usize) -> [f64; 3] {
        [self.axis[i], self.axis[j], self.axis[k]]
    }

    /// Iterate cells in row-major (i, j, k) order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = ([usize; 3], [f64; 3])> + '_ {
        let n = self.size();
        (0..n).flat_map(move |i| {
            (0..n).flat_map(move |j| (0..n).map(move |k| ([i, j, k], self.coords(i, j, k))))
        })
    }

    /// Materialise the three N×N×N coordinate arrays, flat row-major.
    pub fn to_arrays(&self) -> [Vec<f64>; 3] {
        let len = self.size().pow(3);
        let mut xs = Vec::with_capacity(len);
        let mut ys = Vec::with_capacity(len);
        let mut zs = Vec::with_capacity(len);
        for (_, [x, y, z]) in self.cells() {
            xs.push(x);
            ys.push(y);
            zs.push(z);
        }
        [xs, ys, zs]
    }
}
