//! Named regime scenarios.

use cea_core::{Regime, SimParams};

/// Scenario identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioId {
    /// Strong verification, weak feedback: the claim dies out
    CorrectionDominant,

    /// Default parameters (2024 baseline)
    Baseline,

    /// Weak verification, strong feedback: the claim saturates
    AmplificationDominant,

    /// Reduced verification with autonomy at the located threshold
    Critical,
}

impl ScenarioId {
    /// Returns a list of all scenarios.
    pub fn all() -> Vec<ScenarioId> {
        vec![
            ScenarioId::CorrectionDominant,
            ScenarioId::Baseline,
            ScenarioId::AmplificationDominant,
            ScenarioId::Critical,
        ]
    }

    /// Returns the scenario name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioId::CorrectionDominant => "correction_dominant",
            ScenarioId::Baseline => "baseline",
            ScenarioId::AmplificationDominant => "amplification_dominant",
            ScenarioId::Critical => "critical",
        }
    }

    /// Returns a description of the scenario.
    pub fn description(&self) -> &'static str {
        match self {
            ScenarioId::CorrectionDominant => "alpha=0.05, A0=0.1, four channels at 0.025",
            ScenarioId::Baseline => "alpha=0.1, A0=0.2, four channels at 0.05",
            ScenarioId::AmplificationDominant => "alpha=0.3, A0=0.5, four channels at 0.005",
            ScenarioId::Critical => "alpha=0.1, A0=0.4, four channels at 0.0025",
        }
    }

    /// Parameters for this scenario, layered over `base`.
    ///
    /// Only alpha, initial autonomy and the correction channels are
    /// overridden; step count, logistic shape and the rest come from `base`.
    pub fn params(&self, base: &SimParams) -> SimParams {
        let base = base.clone();
        match self {
            ScenarioId::CorrectionDominant => base
                .with_alpha(0.05)
                .with_initial_autonomy(0.1)
                .with_uniform_correction(0.025),
            ScenarioId::Baseline => base,
            ScenarioId::AmplificationDominant => base
                .with_alpha(0.3)
                .with_initial_autonomy(0.5)
                .with_uniform_correction(0.005),
            ScenarioId::Critical => base
                .with_alpha(0.1)
                .with_initial_autonomy(0.4)
                .with_uniform_correction(0.0025),
        }
    }

    /// Regime this scenario is expected to land in under default settings.
    pub fn expected_regime(&self) -> Option<Regime> {
        match self {
            ScenarioId::CorrectionDominant => Some(Regime::CorrectionDominant),
            ScenarioId::Baseline => None,
            ScenarioId::AmplificationDominant => Some(Regime::AmplificationDominant),
            ScenarioId::Critical => Some(Regime::Oscillatory),
        }
    }
}

impl std::fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ScenarioId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "correction_dominant" | "correction" => Ok(ScenarioId::CorrectionDominant),
            "baseline" | "oscillatory" | "default" => Ok(ScenarioId::Baseline),
            "amplification_dominant" | "amplification" => Ok(ScenarioId::AmplificationDominant),
            "critical" | "threshold" => Ok(ScenarioId::Critical),
            _ => Err(format!("Unknown scenario: {}", s)),
        }
    }
}
