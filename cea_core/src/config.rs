//! Simulation parameters for a single trajectory.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Independent correction / verification mechanism acting on prevalence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionChannel {
    /// Human-readable channel name (e.g. "fact_check")
    pub name: String,

    /// Fraction of current prevalence removed per step
    pub rate: f64,
}

impl CorrectionChannel {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// The four default verification channels, each removing 5% per step.
fn default_channels() -> Vec<CorrectionChannel> {
    uniform_channels(0.05)
}

/// Default channel names with the same rate on every channel.
pub fn uniform_channels(rate: f64) -> Vec<CorrectionChannel> {
    ["fact_check", "credibility", "reranking", "human_editorial"]
        .into_iter()
        .map(|name| CorrectionChannel::new(name, rate))
        .collect()
}

/// Parameter bundle for one simulation run.
///
/// Built once by the caller and never mutated afterwards; the `with_*`
/// methods consume and return a modified copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Amplification rate: share of model output re-ingested per cycle
    pub alpha: f64,

    /// Delegated autonomy at t = 0
    pub initial_autonomy: f64,

    /// Upper bound on autonomy
    pub autonomy_max: f64,

    /// Autonomy drift per step per unit of confidence above 0.5 (k)
    pub autonomy_gain: f64,

    /// Logistic steepness of confidence in prevalence
    pub beta: f64,

    /// Prevalence-weighted offset where confidence crosses 0.5
    pub theta: f64,

    /// Verification channels; their rates sum to the decay rate
    pub correction_rates: Vec<CorrectionChannel>,

    /// Loss of correction efficacy as prevalence grows (0 = none)
    pub correction_saturation: f64,

    /// Prevalence at t = 0
    pub initial_prevalence: f64,

    /// Number of recorded steps
    pub step_count: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            initial_autonomy: 0.2,
            autonomy_max: 1.0,
            autonomy_gain: 0.002,
            beta: 5.0,
            theta: 2.5,
            correction_rates: default_channels(),
            correction_saturation: 0.0,
            initial_prevalence: 0.1,
            step_count: 100,
        }
    }
}

impl SimParams {
    /// Sum of all channel rates, applied to prevalence every step.
    pub fn total_correction(&self) -> f64 {
        self.correction_rates.iter().map(|c| c.rate).sum()
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_initial_autonomy(mut self, autonomy: f64) -> Self {
        self.initial_autonomy = autonomy;
        self
    }

    pub fn with_autonomy_max(mut self, max: f64) -> Self {
        self.autonomy_max = max;
        self
    }

    pub fn with_autonomy_gain(mut self, gain: f64) -> Self {
        self.autonomy_gain = gain;
        self
    }

    pub fn with_initial_prevalence(mut self, prevalence: f64) -> Self {
        self.initial_prevalence = prevalence;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.step_count = steps;
        self
    }

    pub fn with_correction_rates(mut self, channels: Vec<CorrectionChannel>) -> Self {
        self.correction_rates = channels;
        self
    }

    /// Replaces every channel with the default names at a single rate.
    pub fn with_uniform_correction(self, rate: f64) -> Self {
        self.with_correction_rates(uniform_channels(rate))
    }

    pub fn with_correction_saturation(mut self, saturation: f64) -> Self {
        self.correction_saturation = saturation;
        self
    }

    /// Checks every field against its documented domain.
    ///
    /// The simulator never calls this itself; callers that accept
    /// parameters from outside (files, CLI flags) should.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_count == 0 {
            return Err(ConfigError::ZeroSteps);
        }

        non_negative("alpha", self.alpha)?;
        non_negative("autonomy_gain", self.autonomy_gain)?;
        for channel in &self.correction_rates {
            non_negative(format!("correction_rates.{}", channel.name), channel.rate)?;
        }

        unit_interval("initial_autonomy", self.initial_autonomy)?;
        unit_interval("autonomy_max", self.autonomy_max)?;
        unit_interval("correction_saturation", self.correction_saturation)?;
        unit_interval("initial_prevalence", self.initial_prevalence)?;

        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(ConfigError::NonPositiveSteepness(self.beta));
        }
        if !self.theta.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(self.theta));
        }
        if self.initial_autonomy > self.autonomy_max {
            return Err(ConfigError::AutonomyAboveCap {
                initial: self.initial_autonomy,
                max: self.autonomy_max,
            });
        }

        Ok(())
    }
}

fn non_negative(field: impl Into<String>, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::negative(field, value))
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::out_of_unit(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let p = SimParams::default();
        assert_relative_eq!(p.alpha, 0.1);
        assert_relative_eq!(p.initial_autonomy, 0.2);
        assert_relative_eq!(p.autonomy_max, 1.0);
        assert_relative_eq!(p.beta, 5.0);
        assert_relative_eq!(p.theta, 2.5);
        assert_relative_eq!(p.initial_prevalence, 0.1);
        assert_eq!(p.step_count, 100);
        assert_eq!(p.correction_rates.len(), 4);
        assert_relative_eq!(p.total_correction(), 0.20, epsilon = 1e-12);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_builder_leaves_other_fields() {
        let p = SimParams::default()
            .with_alpha(0.3)
            .with_initial_autonomy(0.5)
            .with_steps(50);
        assert_relative_eq!(p.alpha, 0.3);
        assert_relative_eq!(p.initial_autonomy, 0.5);
        assert_eq!(p.step_count, 50);
        assert_relative_eq!(p.beta, 5.0);
    }

    #[test]
    fn test_uniform_correction() {
        let p = SimParams::default().with_uniform_correction(0.025);
        assert_eq!(p.correction_rates.len(), 4);
        assert_relative_eq!(p.total_correction(), 0.1, epsilon = 1e-12);
        assert_eq!(p.correction_rates[0].name, "fact_check");
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert_eq!(
            SimParams::default().with_steps(0).validate(),
            Err(ConfigError::ZeroSteps)
        );
        assert!(matches!(
            SimParams::default().with_alpha(-0.1).validate(),
            Err(ConfigError::NegativeRate { .. })
        ));
        assert!(matches!(
            SimParams::default().with_initial_prevalence(1.5).validate(),
            Err(ConfigError::OutOfUnitInterval { .. })
        ));
        assert!(matches!(
            SimParams::default().with_uniform_correction(f64::NAN).validate(),
            Err(ConfigError::NegativeRate { .. })
        ));
        assert!(matches!(
            SimParams::default()
                .with_autonomy_max(0.3)
                .with_initial_autonomy(0.5)
                .validate(),
            Err(ConfigError::AutonomyAboveCap { .. })
        ));

        let mut p = SimParams::default();
        p.beta = 0.0;
        assert_eq!(p.validate(), Err(ConfigError::NonPositiveSteepness(0.0)));
    }

    #[test]
    fn test_json_partial_fills_defaults() {
        let p: SimParams = serde_json::from_str(r#"{"alpha": 0.3, "step_count": 20}"#).unwrap();
        assert_relative_eq!(p.alpha, 0.3);
        assert_eq!(p.step_count, 20);
        assert_relative_eq!(p.total_correction(), 0.20, epsilon = 1e-12);

        let json = serde_json::to_string(&p).unwrap();
        let back: SimParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
