//! Scenario runner - executes regime scenarios, threshold scans and sweeps.

use crate::scenarios::ScenarioId;

use cea_core::{simulate, sweep, Regime, SimParams, SweepAxes, SweepResult, Trajectory};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Results from running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Scenario that was run
    pub scenario: ScenarioId,

    /// Parameters the trajectory was computed from
    pub params: SimParams,

    /// Terminal regime
    pub regime: Regime,

    /// Last recorded prevalence
    pub final_prevalence: f64,

    /// Highest prevalence reached
    pub peak_prevalence: f64,

    /// Full recorded series
    pub trajectory: Trajectory,
}

impl ScenarioResult {
    /// True unless the scenario names a regime and landed elsewhere.
    pub fn matches_expectation(&self) -> bool {
        self.scenario
            .expected_regime()
            .map_or(true, |expected| expected == self.regime)
    }
}

/// One row of a critical-threshold scan.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdPoint {
    pub initial_autonomy: f64,
    pub regime: Regime,
    pub final_prevalence: f64,
}

/// Terminal behaviour across initial autonomies at a fixed alpha.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdAnalysis {
    pub alpha: f64,
    pub points: Vec<ThresholdPoint>,

    /// Interpolated autonomy where terminal prevalence crosses 0.5
    pub critical_autonomy: Option<f64>,
}

/// Runs scenarios.
pub struct ScenarioRunner {
    /// Parameters every scenario is layered over
    base: SimParams,
}

impl ScenarioRunner {
    /// Creates a new scenario runner over default parameters.
    pub fn new() -> Self {
        Self {
            base: SimParams::default(),
        }
    }

    /// Sets the base parameters.
    pub fn with_base(mut self, base: SimParams) -> Self {
        self.base = base;
        self
    }

    /// Sets the number of steps per trajectory.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.base.step_count = steps;
        self
    }

    pub fn base(&self) -> &SimParams {
        &self.base
    }

    /// Runs a scenario and returns the result.
    pub fn run(&self, scenario: ScenarioId) -> ScenarioResult {
        info!("Starting scenario: {} ({})", scenario.name(), scenario.description());

        let params = scenario.params(&self.base);
        let trajectory = simulate(&params);

        let result = ScenarioResult {
            scenario,
            regime: trajectory.regime,
            final_prevalence: trajectory.final_prevalence(),
            peak_prevalence: trajectory.peak_prevalence(),
            params,
            trajectory,
        };

        debug!(
            "  {} | P(final)={:.3} | P(peak)={:.3} | A(final)={:.3}",
            result.regime,
            result.final_prevalence,
            result.peak_prevalence,
            result.trajectory.autonomy.last().copied().unwrap_or(0.0)
        );

        if !result.matches_expectation() {
            warn!(
                "Scenario {} ended {} instead of the expected regime",
                scenario.name(),
                result.regime
            );
        }

        result
    }

    /// Runs every scenario in order.
    pub fn run_all(&self, scenarios: &[ScenarioId]) -> Vec<ScenarioResult> {
        scenarios.iter().map(|s| self.run(*s)).collect()
    }

    /// Simulates each initial autonomy at a fixed `alpha` over the base
    /// parameters and locates where terminal prevalence crosses 0.5.
    pub fn threshold_scan(&self, alpha: f64, autonomies: &[f64]) -> ThresholdAnalysis {
        info!("Critical threshold scan at alpha={:.3}", alpha);

        let points: Vec<ThresholdPoint> = autonomies
            .iter()
            .map(|&a| {
                let params = self.base.clone().with_alpha(alpha).with_initial_autonomy(a);
                let trajectory = simulate(&params);
                let point = ThresholdPoint {
                    initial_autonomy: a,
                    regime: trajectory.regime,
                    final_prevalence: trajectory.final_prevalence(),
                };
                info!(
                    "  A={:.2}: {:<24} | P(final)={:.3}",
                    a, point.regime, point.final_prevalence
                );
                point
            })
            .collect();

        // Single-row surface so the crossing uses the sweep's interpolation
        let surface = SweepResult {
            alphas: vec![alpha],
            autonomies: autonomies.to_vec(),
            grid: vec![points.iter().map(|p| p.final_prevalence).collect()],
        };
        let critical_autonomy = surface.critical_autonomy(0);

        match critical_autonomy {
            Some(a) => info!("  A* ≈ {:.3}", a),
            None => info!("  No crossing of P=0.5 in the scanned range"),
        }

        ThresholdAnalysis {
            alpha,
            points,
            critical_autonomy,
        }
    }

    /// Runs a full (alpha, autonomy) sweep over the base parameters.
    pub fn run_sweep(&self, axes: &SweepAxes) -> SweepResult {
        info!(
            "Running parameter sweep: {} alphas x {} autonomies",
            axes.alphas.len(),
            axes.autonomies.len()
        );

        let result = sweep(&axes.alphas, &axes.autonomies, &self.base);

        for (alpha, critical) in result.alphas.iter().zip(result.critical_autonomies()) {
            match critical {
                Some(a) => debug!("  alpha={:.3} -> A*={:.3}", alpha, a),
                None => debug!("  alpha={:.3} -> no crossing", alpha),
            }
        }

        let regimes = result.regime_grid();
        let counts = Regime::all().map(|r| regimes.iter().flatten().filter(|&&c| c == r).count());
        info!(
            "Sweep complete: {} correction / {} oscillatory / {} amplification cells",
            counts[0], counts[1], counts[2]
        );

        result
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Autonomy values of the standard threshold scan (0.2 to 0.6).
pub fn default_threshold_autonomies() -> Vec<f64> {
    vec![0.2, 0.3, 0.4, 0.5, 0.6]
}
