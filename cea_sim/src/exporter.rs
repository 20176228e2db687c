//! JSON exporter for plotting collaborators.
//!
//! Exports finished series and grids only; nothing here depends on the
//! evolver's internal state.

use crate::error::Result;
use crate::runner::{ScenarioResult, ThresholdAnalysis};
use cea_core::{Regime, SweepResult};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TRAJECTORIES_FILE: &str = "regime_trajectories.json";
pub const SWEEP_FILE: &str = "parameter_sweep.json";
pub const THRESHOLD_FILE: &str = "critical_threshold.json";

/// Parameters summarised next to each exported trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSummary {
    pub alpha: f64,
    pub initial_autonomy: f64,
    pub total_correction: f64,
}

/// One exported trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    /// Scenario name
    pub scenario: String,

    pub regime: Regime,
    pub params: ParamSummary,
    pub final_prevalence: f64,

    /// Parallel series, one entry per step
    pub prevalence: Vec<f64>,
    pub confidence: Vec<f64>,
    pub autonomy: Vec<f64>,
}

impl From<&ScenarioResult> for TrajectoryRecord {
    fn from(result: &ScenarioResult) -> Self {
        Self {
            scenario: result.scenario.name().to_string(),
            regime: result.regime,
            params: ParamSummary {
                alpha: result.params.alpha,
                initial_autonomy: result.params.initial_autonomy,
                total_correction: result.params.total_correction(),
            },
            final_prevalence: result.final_prevalence,
            prevalence: result.trajectory.prevalence.clone(),
            confidence: result.trajectory.confidence.clone(),
            autonomy: result.trajectory.autonomy.clone(),
        }
    }
}

/// Sweep surface as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepExport {
    pub alphas: Vec<f64>,
    pub autonomies: Vec<f64>,
    pub grid: Vec<Vec<f64>>,

    /// Located crossing per alpha row (null where the row never crosses)
    pub critical_autonomies: Vec<Option<f64>>,
}

impl From<&SweepResult> for SweepExport {
    fn from(result: &SweepResult) -> Self {
        Self {
            alphas: result.alphas.clone(),
            autonomies: result.autonomies.clone(),
            grid: result.grid.clone(),
            critical_autonomies: result.critical_autonomies(),
        }
    }
}

/// Writes export documents into a single output directory.
pub struct Exporter {
    dir: PathBuf,
}

impl Exporter {
    /// Creates the output directory if it does not exist yet.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes all scenario trajectories to `regime_trajectories.json`.
    pub fn write_trajectories(&self, results: &[ScenarioResult]) -> Result<PathBuf> {
        let records: Vec<TrajectoryRecord> = results.iter().map(TrajectoryRecord::from).collect();
        self.write_json(TRAJECTORIES_FILE, &records)
    }

    /// Writes the sweep surface to `parameter_sweep.json`.
    pub fn write_sweep(&self, result: &SweepResult) -> Result<PathBuf> {
        self.write_json(SWEEP_FILE, &SweepExport::from(result))
    }

    /// Writes a threshold scan to `critical_threshold.json`.
    pub fn write_threshold(&self, analysis: &ThresholdAnalysis) -> Result<PathBuf> {
        self.write_json(THRESHOLD_FILE, analysis)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<PathBuf> {
        let path = self.dir.join(name);
        let json = serde_json::to_string_pretty(value)?;
        let mut file = File::create(&path)?;
        file.write_all(json.as_bytes())?;
        info!("Wrote {}", path.display());
        Ok(path)
    }
}
