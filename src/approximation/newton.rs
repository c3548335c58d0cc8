//! Newton's method: `k ← k − f(k) / f′(k)`.
//!
//! The derivative is taken symbolically once per call and reused for every
//! step. Nothing guards against a vanishing derivative: the division simply
//! produces a huge or non-finite iterate, which is returned as-is.

use log::{debug, trace, warn};

use crate::core::error::ApproxError;
use crate::core::traits::{Differentiable, MathScalar};

#[inline]
fn step<T: MathScalar, F: Differentiable<T>>(f: &F, df: &F, k: T) -> T {
    k - f.evaluate(k) / df.evaluate(k)
}

/// Apply exactly `n` Newton updates starting from `k0`
pub(crate) fn newton_fixed<T, F>(f: &F, k0: T, n: usize) -> T
where
    T: MathScalar,
    F: Differentiable<T>,
{
    let df = f.derivative();
    let mut k = k0;
    for iteration in 1..=n {
        k = step(f, &df, k);
        trace!("newton iteration {iteration}: k = {k}");
    }
    debug!("newton finished {n} iterations from {k0}: k = {k}");
    k
}

/// Newton updates until two successive iterates are within `10^(-order)`.
///
/// At least one update is always performed. The stopping rule only measures
/// how far the last step moved, which is not an error bound: slowly
/// converging sequences stop early away from the root, and a NaN step stops
/// the loop and is returned unchanged.
pub(crate) fn newton_bound<T, F>(
    f: &F,
    k0: T,
    order: i32,
    max_iterations: usize,
) -> Result<T, ApproxError>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    let tolerance = T::precision(order);
    let df = f.derivative();
    let mut k = k0;

    for iteration in 1..=max_iterations {
        let previous = k;
        k = step(f, &df, k);
        let distance = (k - previous).abs();
        trace!("newton iteration {iteration}: k = {k}, |dk| = {distance}");

        if distance.is_nan() || distance <= tolerance {
            debug!("newton stopped after {iteration} iterations: k = {k}");
            return Ok(k);
        }
    }

    warn!("newton did not settle within {max_iterations} iterations (last k = {k})");
    Err(ApproxError::max_iterations(max_iterations, k))
}
