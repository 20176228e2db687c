//! CEA Simulation Harness
//!
//! Drives the `cea_core` model through the experiments of the study:
//!
//! - **Scenarios**: three representative regimes plus a threshold case
//! - **Threshold scan**: terminal prevalence across initial autonomies at a fixed alpha
//! - **Sweep**: the (alpha, autonomy) regime map
//!
//! Results are exported as flat JSON documents for an external plotter.
//!
//! # Usage
//!
//! ```ignore
//! use cea_sim::{ScenarioRunner, scenarios::ScenarioId};
//!
//! let runner = ScenarioRunner::new().with_steps(100);
//! let result = runner.run(ScenarioId::AmplificationDominant);
//! println!("{} -> {:.3}", result.regime, result.final_prevalence);
//! ```

pub mod config;
mod error;
pub mod exporter;
mod runner;
pub mod scenarios;

pub use error::{Result, SimError};
pub use exporter::{Exporter, SweepExport, TrajectoryRecord};
pub use runner::{
    default_threshold_autonomies, ScenarioResult, ScenarioRunner, ThresholdAnalysis,
    ThresholdPoint,
};
