//! Saturating logistic response used for model confidence.

/// Smallest output; keeps confidence strictly above zero.
const FLOOR: f64 = f64::MIN_POSITIVE;

/// Largest f64 below 1.0; keeps confidence strictly below one.
const CEILING: f64 = 1.0 - f64::EPSILON / 2.0;

/// `1 / (1 + e^-x)`, stable for inputs of any magnitude.
///
/// Branches on the sign of `x` so that `exp` is only ever evaluated on a
/// non-positive argument. For very large `|x|` the exact value rounds to 0
/// or 1 in f64, so the result is pinned to `[FLOOR, CEILING]`.
pub fn logistic(x: f64) -> f64 {
    let y = if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    };
    y.clamp(FLOOR, CEILING)
}
