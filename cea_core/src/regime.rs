//! Qualitative classification of where a trajectory ended up.

use serde::{Deserialize, Serialize};

/// Below this terminal prevalence the claim is considered corrected.
pub const CORRECTION_THRESHOLD: f64 = 0.05;

/// Above this terminal prevalence the claim is considered saturated.
pub const AMPLIFICATION_THRESHOLD: f64 = 0.8;

/// Terminal regime of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Claim decayed to negligible prevalence; verification wins
    CorrectionDominant,

    /// Intermediate, non-converged or metastable band
    Oscillatory,

    /// Claim saturated the corpus; feedback loop wins
    AmplificationDominant,
}

impl Regime {
    /// Returns all regimes, from most to least corrected.
    pub fn all() -> [Regime; 3] {
        [
            Regime::CorrectionDominant,
            Regime::Oscillatory,
            Regime::AmplificationDominant,
        ]
    }

    /// Returns the regime label.
    pub fn name(&self) -> &'static str {
        match self {
            Regime::CorrectionDominant => "correction_dominant",
            Regime::Oscillatory => "oscillatory",
            Regime::AmplificationDominant => "amplification_dominant",
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl std::str::FromStr for Regime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "correction_dominant" | "correction" => Ok(Regime::CorrectionDominant),
            "oscillatory" | "balanced" => Ok(Regime::Oscillatory),
            "amplification_dominant" | "amplification" => Ok(Regime::AmplificationDominant),
            _ => Err(format!("Unknown regime: {}", s)),
        }
    }
}

/// Maps a terminal prevalence onto a [`Regime`].
///
/// The bands are deliberately asymmetric: partial saturation is common and
/// belongs in the middle band rather than either dominant regime.
pub fn classify_regime(final_prevalence: f64) -> Regime {
    if final_prevalence < CORRECTION_THRESHOLD {
        Regime::CorrectionDominant
    } else if final_prevalence > AMPLIFICATION_THRESHOLD {
        Regime::AmplificationDominant
    } else {
        Regime::Oscillatory
    }
}
