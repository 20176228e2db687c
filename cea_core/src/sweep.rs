//! Two-dimensional parameter sweep over amplification rate and autonomy.
//!
//! Each cell is an independent trajectory, so the sweep is computed as a
//! map over the flattened cross product `(alpha_index, autonomy_index)` into
//! a row-major arena, then split into rows. With the `parallel` feature the
//! map runs on rayon; cell order and values are unchanged.

use crate::config::SimParams;
use crate::regime::{classify_regime, Regime};
use crate::trajectory::simulate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Terminal prevalence at which a row is considered to have flipped.
pub const CROSSING_LEVEL: f64 = 0.5;

/// `n` evenly spaced samples from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sample axes for a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepAxes {
    pub alphas: Vec<f64>,
    pub autonomies: Vec<f64>,
}

impl SweepAxes {
    /// Square grid of `samples` points per axis over the standard ranges.
    pub fn with_samples(samples: usize) -> Self {
        Self {
            alphas: linspace(0.01, 0.5, samples),
            autonomies: linspace(0.05, 0.8, samples),
        }
    }

    /// Runs [`sweep`] over these axes.
    pub fn run(&self, base: &SimParams) -> SweepResult {
        sweep(&self.alphas, &self.autonomies, base)
    }
}

impl Default for SweepAxes {
    fn default() -> Self {
        Self::with_samples(20)
    }
}

/// Terminal-prevalence surface over the sampled axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    pub alphas: Vec<f64>,
    pub autonomies: Vec<f64>,

    /// `grid[alpha_index][autonomy_index]`
    pub grid: Vec<Vec<f64>>,
}

impl SweepResult {
    /// (rows, columns) = (alphas, autonomies).
    pub fn shape(&self) -> (usize, usize) {
        (self.alphas.len(), self.autonomies.len())
    }

    pub fn cell(&self, alpha_index: usize, autonomy_index: usize) -> Option<f64> {
        self.grid.get(alpha_index)?.get(autonomy_index).copied()
    }

    /// Regime of every cell, same indexing as `grid`.
    pub fn regime_grid(&self) -> Vec<Vec<Regime>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|&p| classify_regime(p)).collect())
            .collect()
    }

    /// Autonomy at which row `alpha_index` first crosses [`CROSSING_LEVEL`].
    ///
    /// Linearly interpolated between the two bracketing samples. Returns the
    /// first sample if the row already starts at or above the level, and
    /// `None` if it never reaches it.
    pub fn critical_autonomy(&self, alpha_index: usize) -> Option<f64> {
        let row = self.grid.get(alpha_index)?;
        let first = *row.first()?;
        if first >= CROSSING_LEVEL {
            return self.autonomies.first().copied();
        }

        (1..row.len()).find_map(|j| {
            let (lo, hi) = (row[j - 1], row[j]);
            if lo < CROSSING_LEVEL && hi >= CROSSING_LEVEL {
                let (a0, a1) = (self.autonomies[j - 1], self.autonomies[j]);
                let frac = (CROSSING_LEVEL - lo) / (hi - lo);
                Some(a0 + frac * (a1 - a0))
            } else {
                None
            }
        })
    }

    /// [`critical_autonomy`](Self::critical_autonomy) for every alpha row.
    pub fn critical_autonomies(&self) -> Vec<Option<f64>> {
        (0..self.alphas.len())
            .map(|i| self.critical_autonomy(i))
            .collect()
    }
}

/// Simulates every (alpha, initial_autonomy) pair on top of `base`.
///
/// All other fields come from `base` unchanged. The grid has exactly
/// `alphas.len() × autonomies.len()` cells, each in [0, 1].
pub fn sweep(alphas: &[f64], autonomies: &[f64], base: &SimParams) -> SweepResult {
    let cols = autonomies.len();
    let cells = alphas.len() * cols;

    let run_cell = |index: usize| -> f64 {
        let params = base
            .clone()
            .with_alpha(alphas[index / cols])
            .with_initial_autonomy(autonomies[index % cols]);
        simulate(&params).final_prevalence()
    };

    #[cfg(feature = "parallel")]
    let arena: Vec<f64> = (0..cells).into_par_iter().map(run_cell).collect();

    #[cfg(not(feature = "parallel"))]
    let arena: Vec<f64> = (0..cells).map(run_cell).collect();

    let grid = if cols == 0 {
        vec![Vec::new(); alphas.len()]
    } else {
        arena.chunks(cols).map(<[f64]>::to_vec).collect()
    };

    SweepResult {
        alphas: alphas.to_vec(),
        autonomies: autonomies.to_vec(),
        grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(0.3, 1.0, 1), vec![0.3]);
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs.len(), 5);
        assert_relative_eq!(xs[1], 0.25);
        assert_eq!(xs[4], 1.0);
    }

    #[test]
    fn test_two_by_two_matches_simulate() {
        let base = SimParams::default();
        let alphas = [0.1, 0.3];
        let autonomies = [0.2, 0.6];
        let result = sweep(&alphas, &autonomies, &base);

        assert_eq!(result.shape(), (2, 2));
        assert_eq!(result.grid.len(), 2);
        for (i, &a) in alphas.iter().enumerate() {
            assert_eq!(result.grid[i].len(), 2);
            for (j, &au) in autonomies.iter().enumerate() {
                let direct = simulate(&base.clone().with_alpha(a).with_initial_autonomy(au))
                    .final_prevalence();
                let cell = result.cell(i, j).unwrap();
                assert_eq!(cell, direct);
                assert!((0.0..=1.0).contains(&cell));
            }
        }
    }

    #[test]
    fn test_non_square_and_empty_axes() {
        let base = SimParams::default().with_steps(10);
        let result = sweep(&[0.1, 0.2, 0.3], &[0.5], &base);
        assert_eq!(result.shape(), (3, 1));
        assert!(result.grid.iter().all(|row| row.len() == 1));

        let empty = sweep(&[0.1, 0.2], &[], &base);
        assert_eq!(empty.grid, vec![Vec::<f64>::new(), Vec::new()]);
        assert_eq!(sweep(&[], &[0.1], &base).grid.len(), 0);
    }

    #[test]
    fn test_default_axes_grid_bounded_and_monotone() {
        let result = SweepAxes::default().run(&SimParams::default());
        assert_eq!(result.shape(), (20, 20));
        for i in 0..20 {
            for j in 0..20 {
                let v = result.grid[i][j];
                assert!((0.0..=1.0).contains(&v));
                if j + 1 < 20 {
                    assert!(result.grid[i][j + 1] >= v - 1e-12);
                }
                if i + 1 < 20 {
                    assert!(result.grid[i + 1][j] >= v - 1e-12);
                }
            }
        }
        serde_json::to_string(&result).unwrap();
    }

    #[test]
    fn test_critical_autonomy_interpolates() {
        let result = SweepResult {
            alphas: vec![0.1, 0.2, 0.3],
            autonomies: vec![0.0, 0.5, 1.0],
            grid: vec![vec![0.1, 0.3, 0.7], vec![0.0, 0.1, 0.2], vec![0.6, 0.9, 1.0]],
        };
        assert_relative_eq!(result.critical_autonomy(0).unwrap(), 0.75);
        assert_eq!(result.critical_autonomy(1), None);
        assert_eq!(result.critical_autonomy(2), Some(0.0));
        assert_eq!(result.critical_autonomy(9), None);
        assert_eq!(result.critical_autonomies().len(), 3);
    }

    #[test]
    fn test_regime_grid() {
        let result = SweepResult {
            alphas: vec![0.1],
            autonomies: vec![0.1, 0.5, 0.9],
            grid: vec![vec![0.01, 0.4, 0.95]],
        };
        assert_eq!(
            result.regime_grid(),
            vec![vec![
                Regime::CorrectionDominant,
                Regime::Oscillatory,
                Regime::AmplificationDominant
            ]]
        );
    }

    #[test]
    fn test_threshold_near_point_four() {
        // Reduced verification (0.01 total) so that alpha = 0.1 can flip at all
        let base = SimParams::default().with_uniform_correction(0.0025);
        let autonomies = linspace(0.1, 0.9, 41);
        let result = sweep(&[0.1], &autonomies, &base);

        let row = &result.grid[0];
        assert!(row.windows(2).all(|w| w[1] >= w[0] - 1e-12));

        let critical = result.critical_autonomy(0).unwrap();
        assert!(critical > 0.35 && critical < 0.47, "A* = {}", critical);

        // well below A* never saturates, well above never collapses
        let low = simulate(&base.clone().with_initial_autonomy(0.2));
        let high = simulate(&base.clone().with_initial_autonomy(0.6));
        assert_ne!(low.regime, Regime::AmplificationDominant);
        assert_ne!(high.regime, Regime::CorrectionDominant);
    }
}
