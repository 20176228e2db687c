//! Full trajectory simulation.

use crate::config::SimParams;
use crate::dynamics::Evolver;
use crate::regime::{classify_regime, Regime};
use serde::{Deserialize, Serialize};

/// Recorded series of one run plus its terminal regime.
///
/// All three series have exactly `step_count` entries. Entry `t` holds the
/// state at the start of step `t`, so `prevalence[0]` is the initial value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub prevalence: Vec<f64>,
    pub confidence: Vec<f64>,
    pub autonomy: Vec<f64>,
    pub regime: Regime,
}

impl Trajectory {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.prevalence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prevalence.is_empty()
    }

    /// Last recorded prevalence (0.0 for an empty trajectory).
    pub fn final_prevalence(&self) -> f64 {
        self.prevalence.last().copied().unwrap_or(0.0)
    }

    /// Largest prevalence reached at any step.
    pub fn peak_prevalence(&self) -> f64 {
        self.prevalence.iter().copied().fold(0.0, f64::max)
    }
}

/// Runs `params.step_count` steps from the initial state.
///
/// Deterministic: the same parameters always produce the same trajectory.
pub fn simulate(params: &SimParams) -> Trajectory {
    let evolver = Evolver::new(params);
    let steps = params.step_count;

    let mut prevalence = Vec::with_capacity(steps);
    let mut confidence = Vec::with_capacity(steps);
    let mut autonomy = Vec::with_capacity(steps);

    let mut state = evolver.initial_state();
    for _ in 0..steps {
        let (terms, next) = evolver.step(&state);
        prevalence.push(state.prevalence);
        confidence.push(terms.confidence);
        autonomy.push(state.autonomy);
        state = next;
    }

    let regime = classify_regime(prevalence.last().copied().unwrap_or(0.0));

    Trajectory {
        prevalence,
        confidence,
        autonomy,
        regime,
    }
}
