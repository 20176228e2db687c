//! CEA Core - Dynamical Model of Circular Epistemic Authority
//!
//! A claim that language models repeat becomes more prevalent in the corpus
//! they are trained on, which makes them more confident, which in turn makes
//! people delegate more verification to them. This library models that loop:
//! 1. **Prevalence** P(t): fraction of the corpus exhibiting a claim
//! 2. **Confidence** C(t): logistic response of the model to prevalence
//! 3. **Autonomy** A(t): how much checking is delegated to corpus signal
//!
//! ```text
//! C(t)   = σ(β·P(t) − θ)
//! P(t+1) = clamp(P + α·A·C·(1 − P) − Σγᵢ·P, 0, 1)
//! A(t+1) = clamp(A + k·(C − ½), 0, A_max)
//! ```
//!
//! Everything here is pure: a [`SimParams`] goes in, a [`Trajectory`] or
//! [`SweepResult`] comes out, and no state survives between runs.

pub mod config;
pub mod dynamics;
pub mod error;
pub mod logistic;
pub mod regime;
pub mod sweep;
pub mod trajectory;

// Re-export key types for convenience
pub use config::{CorrectionChannel, SimParams};
pub use dynamics::{Evolver, ModelState, StepTerms};
pub use error::ConfigError;
pub use logistic::logistic;
pub use regime::{classify_regime, Regime};
pub use sweep::{linspace, sweep, SweepAxes, SweepResult};
pub use trajectory::{simulate, Trajectory};
