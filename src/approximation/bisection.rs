//! Bisection over a bracketing interval.
//!
//! A bracket `[lower, upper]` whose end values straddle zero contains a root by
//! the intermediate value theorem. Each halving keeps the half whose
//! endpoints still straddle the sign change, so after `n` halvings the root
//! lies within `(upper − lower) / 2^n` of either endpoint and within half that
//! of the midpoint.

use log::{debug, trace, warn};

use crate::core::error::ApproxError;
use crate::core::traits::{Differentiable, MathScalar};

/// An interval known to contain a sign change of the function it was built for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T: MathScalar = f64> {
    pub lower: T,
    pub upper: T,
    /// Number of halvings applied to the initial interval
    pub iterations: usize,
}

impl<T: MathScalar> Bracket<T> {
    #[inline]
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    #[inline]
    pub fn midpoint(&self) -> T {
        self.lower + self.width() / (T::one() + T::one())
    }

    /// Whether the width is strictly below `tolerance` (false for a NaN width)
    #[inline]
    pub fn is_narrower_than(&self, tolerance: T) -> bool {
        self.width() < tolerance
    }
}

/// Whether `fa` and `fb` lie on opposite sides of zero (or one is zero).
///
/// Signs are compared directly; the product `fa·fb` can underflow to zero.
#[inline]
fn straddles_zero<T: MathScalar>(fa: T, fb: T) -> bool {
    let zero = T::zero();
    fa == zero || fb == zero || (fa < zero) != (fb < zero)
}

/// Bracket plus the cached function value at its lower end
struct Bisection<'f, T: MathScalar, F> {
    f: &'f F,
    bracket: Bracket<T>,
    f_lower: T,
}

impl<'f, T, F> Bisection<'f, T, F>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    /// Check the sign-change precondition over `[p0, p1]`.
    ///
    /// The endpoints may be given in either order.
    fn start(f: &'f F, p0: T, p1: T) -> Result<Self, ApproxError> {
        let (lower, upper) = if p0 <= p1 { (p0, p1) } else { (p1, p0) };
        let f_lower = f.evaluate(lower);
        let f_upper = f.evaluate(upper);

        for (x, fx) in [(lower, f_lower), (upper, f_upper)] {
            if fx.is_nan() {
                debug!("bisection endpoint {x} is outside the domain (f = {fx})");
                return Err(ApproxError::not_finite(x, fx));
            }
        }
        if !straddles_zero(f_lower, f_upper) {
            debug!("no sign change over [{p0}, {p1}]: f = {f_lower}, {f_upper}");
            return Err(ApproxError::no_sign_change(p0, p1));
        }

        Ok(Self {
            f,
            bracket: Bracket {
                lower,
                upper,
                iterations: 0,
            },
            f_lower,
        })
    }

    fn halve(&mut self) {
        let mid = self.bracket.midpoint();
        let f_mid = self.f.evaluate(mid);
        if !straddles_zero(self.f_lower, f_mid) {
            self.bracket.lower = mid;
            self.f_lower = f_mid;
        } else {
            self.bracket.upper = mid;
        }
        self.bracket.iterations += 1;
        trace!(
            "bisection iteration {}: [{}, {}]",
            self.bracket.iterations, self.bracket.lower, self.bracket.upper
        );
    }
}

/// Exactly `n` halvings; the final bracket is returned
pub(crate) fn bisect_fixed<T, F>(f: &F, p0: T, p1: T, n: usize) -> Result<Bracket<T>, ApproxError>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    let mut state = Bisection::start(f, p0, p1)?;
    for _ in 0..n {
        state.halve();
    }
    debug!(
        "bisection finished {n} iterations: midpoint {}",
        state.bracket.midpoint()
    );
    Ok(state.bracket)
}

/// Halve until the bracket is narrower than `10^(-order)`
pub(crate) fn bisect_bound<T, F>(
    f: &F,
    p0: T,
    p1: T,
    order: i32,
    max_iterations: usize,
) -> Result<Bracket<T>, ApproxError>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    let tolerance = T::precision(order);
    let mut state = Bisection::start(f, p0, p1)?;

    while !state.bracket.is_narrower_than(tolerance) {
        if state.bracket.iterations >= max_iterations {
            warn!(
                "bisection width still {} after {max_iterations} iterations",
                state.bracket.width()
            );
            return Err(ApproxError::max_iterations(
                max_iterations,
                state.bracket.midpoint(),
            ));
        }
        state.halve();
    }

    debug!(
        "bisection reached width {} after {} iterations",
        state.bracket.width(),
        state.bracket.iterations
    );
    Ok(state.bracket)
}
