//! Root approximation
//!
//! Stateless numerical procedures that only see a function through its
//! [`Differentiable`] contract:
//!
//! - **Newton's method** converges quadratically near a simple root when the
//!   start is close enough, but can diverge, cycle, or hit a zero derivative.
//!   Nothing detects those cases.
//! - **Bisection** converges linearly but is guaranteed to find a root of a
//!   continuous function inside a bracket with a sign change.
//!
//! Each comes in a fixed-iteration form and a precision form driven by
//! `10^(-order)`. Only the bisection precision form is a rigorous bound; the
//! Newton one stops on the distance between successive iterates.
//!
//! The free functions use [`RootFinder`]'s defaults. Use the builder directly
//! to change the iteration cap.

pub(crate) mod bisection;
pub(crate) mod newton;

pub use bisection::Bracket;

use crate::{ApproxError, Differentiable, MathScalar, RootFinder};

/// Newton's method: exactly `n` iterations of `k ← k − f(k)/f′(k)` from `k0`.
///
/// # Example
/// ```ignore
/// let f = Function::from_terms([Term::power(1.0, 2.0), Term::power(-2.0, 0.0)]);
/// let root = newton_method(&f, 1.0, 10); // ≈ 1.41421356
/// ```
pub fn newton_method<T, F>(f: &F, k0: T, n: usize) -> T
where
    T: MathScalar,
    F: Differentiable<T>,
{
    RootFinder::new().newton(f, k0, n)
}

/// Newton's method until successive iterates are within `10^(-order)`.
///
/// The stopping rule is a heuristic on iterate distance, not an error bound;
/// see [`RootFinder::newton_bound`].
pub fn newton_method_bound<T, F>(f: &F, k0: T, order: i32) -> Result<T, ApproxError>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    RootFinder::new().newton_bound(f, k0, order)
}

/// Bisection over `[p0, p1]` with exactly `n` halvings.
///
/// Fails with [`ApproxError::NoSignChange`] when `f(p0)` and `f(p1)` are nonzero with the same sign.
pub fn bisect_method<T, F>(f: &F, p0: T, p1: T, n: usize) -> Result<T, ApproxError>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    RootFinder::new().bisect(f, p0, p1, n)
}

/// Bisection over `[p0, p1]` until the bracket is narrower than `10^(-order)`.
///
/// Fails with [`ApproxError::NoSignChange`] when `f(p0)` and `f(p1)` are nonzero with the same sign.
pub fn bisect_method_bound<T, F>(f: &F, p0: T, p1: T, order: i32) -> Result<T, ApproxError>
where
    T: MathScalar,
    F: Differentiable<T>,
{
    RootFinder::new().bisect_bound(f, p0, p1, order)
}
