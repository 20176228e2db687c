//! One-step state update for the prevalence / confidence / autonomy loop.

use crate::config::SimParams;
use crate::logistic::logistic;
use serde::{Deserialize, Serialize};

/// The two state variables carried from one step to the next.
///
/// Confidence is not part of the state: it is a pure function of
/// prevalence and is recomputed at every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelState {
    pub prevalence: f64,
    pub autonomy: f64,
}

/// Intermediate quantities of a single update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTerms {
    /// Confidence at the current prevalence
    pub confidence: f64,

    /// Growth contribution α·A·C·(1 − P)
    pub amplification: f64,

    /// Decay contribution Σγ·(1 − s·P)·P
    pub correction: f64,
}

/// Advances [`ModelState`] under a fixed parameter set.
///
/// Borrows the parameters and caches the summed correction rate so that a
/// trajectory does not re-sum the channels at every step.
#[derive(Debug, Clone, Copy)]
pub struct Evolver<'a> {
    params: &'a SimParams,
    total_correction: f64,
}

impl<'a> Evolver<'a> {
    pub fn new(params: &'a SimParams) -> Self {
        Self {
            params,
            total_correction: params.total_correction(),
        }
    }

    /// Starting state, with autonomy pinned into `[0, autonomy_max]`.
    pub fn initial_state(&self) -> ModelState {
        ModelState {
            prevalence: self.params.initial_prevalence,
            autonomy: clamp_autonomy(self.params.initial_autonomy, self.params.autonomy_max),
        }
    }

    /// Confidence the model shows at prevalence `p`.
    pub fn confidence(&self, p: f64) -> f64 {
        logistic(self.params.beta * p - self.params.theta)
    }

    /// Computes the terms for `state` without advancing it.
    pub fn terms(&self, state: &ModelState) -> StepTerms {
        let p = state.prevalence;
        let confidence = self.confidence(p);
        let amplification = self.params.alpha * state.autonomy * confidence * (1.0 - p);
        let correction =
            self.total_correction * (1.0 - self.params.correction_saturation * p) * p;

        StepTerms {
            confidence,
            amplification,
            correction,
        }
    }

    /// Returns the terms of this step together with the next state.
    pub fn step(&self, state: &ModelState) -> (StepTerms, ModelState) {
        let terms = self.terms(state);

        let prevalence =
            (state.prevalence + terms.amplification - terms.correction).clamp(0.0, 1.0);
        let autonomy = clamp_autonomy(
            state.autonomy + self.params.autonomy_gain * (terms.confidence - 0.5),
            self.params.autonomy_max,
        );

        (terms, ModelState { prevalence, autonomy })
    }
}

// f64::clamp panics on a negative cap; min/max does not
fn clamp_autonomy(a: f64, max: f64) -> f64 {
    a.min(max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_step_matches_closed_form() {
        let params = SimParams::default();
        let evolver = Evolver::new(&params);
        let state = evolver.initial_state();

        let (terms, next) = evolver.step(&state);

        let c = 1.0 / (1.0 + (-(5.0 * 0.1 - 2.5f64)).exp());
        assert_relative_eq!(terms.confidence, c, epsilon = 1e-12);
        assert_relative_eq!(terms.amplification, 0.1 * 0.2 * c * 0.9, epsilon = 1e-12);
        assert_relative_eq!(terms.correction, 0.2 * 0.1, epsilon = 1e-12);
        assert_relative_eq!(
            next.prevalence,
            0.1 + 0.1 * 0.2 * c * 0.9 - 0.02,
            epsilon = 1e-12
        );
        assert_relative_eq!(next.autonomy, 0.2 + 0.002 * (c - 0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_prevalence_clamped_at_bounds() {
        let params = SimParams::default()
            .with_alpha(50.0)
            .with_initial_autonomy(1.0)
            .with_uniform_correction(0.0)
            .with_initial_prevalence(0.9);
        let evolver = Evolver::new(&params);
        let (_, next) = evolver.step(&evolver.initial_state());
        assert!(next.prevalence <= 1.0);

        let params = SimParams::default()
            .with_alpha(0.0)
            .with_uniform_correction(2.0)
            .with_initial_prevalence(0.5);
        let evolver = Evolver::new(&params);
        let (_, next) = evolver.step(&evolver.initial_state());
        assert_eq!(next.prevalence, 0.0);
    }

    #[test]
    fn test_autonomy_respects_cap_and_floor() {
        let params = SimParams::default()
            .with_autonomy_gain(1.0)
            .with_autonomy_max(0.6)
            .with_initial_autonomy(0.59)
            .with_initial_prevalence(1.0);
        let evolver = Evolver::new(&params);
        let (_, next) = evolver.step(&evolver.initial_state());
        assert_eq!(next.autonomy, 0.6);

        let params = SimParams::default()
            .with_autonomy_gain(1.0)
            .with_initial_autonomy(0.01)
            .with_initial_prevalence(0.0);
        let evolver = Evolver::new(&params);
        let (_, next) = evolver.step(&evolver.initial_state());
        assert_eq!(next.autonomy, 0.0);
    }

    #[test]
    fn test_autonomy_drift_sign_follows_confidence() {
        // low prevalence -> C < 0.5 -> autonomy falls
        let params = SimParams::default().with_initial_prevalence(0.05);
        let evolver = Evolver::new(&params);
        let (_, next) = evolver.step(&evolver.initial_state());
        assert!(next.autonomy < 0.2);

        // high prevalence -> C > 0.5 -> autonomy rises
        let params = SimParams::default().with_initial_prevalence(0.9);
        let evolver = Evolver::new(&params);
        let (_, next) = evolver.step(&evolver.initial_state());
        assert!(next.autonomy > 0.2);
    }

    #[test]
    fn test_saturation_weakens_correction() {
        let plain = SimParams::default().with_initial_prevalence(0.6);
        let saturated = plain.clone().with_correction_saturation(0.5);

        let a = Evolver::new(&plain).terms(&Evolver::new(&plain).initial_state());
        let b = Evolver::new(&saturated).terms(&Evolver::new(&saturated).initial_state());
        assert_relative_eq!(b.correction, a.correction * 0.7, epsilon = 1e-12);
        assert_eq!(a.amplification, b.amplification);
    }

    #[test]
    fn test_initial_autonomy_clamped_to_cap() {
        let params = SimParams::default()
            .with_autonomy_max(0.3)
            .with_initial_autonomy(0.5);
        assert_eq!(Evolver::new(&params).initial_state().autonomy, 0.3);
    }
}
