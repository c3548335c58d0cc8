//! Builder pattern API for root approximation
//!
//! Provides a fluent interface for configuring the iterative routines.
//!
//! # Example
//! ```ignore
//! use rootcalc::{Function, RootFinder, Term};
//!
//! let f = Function::from_terms([Term::power(1.0, 2.0), Term::power(-2.0, 0.0)]);
//!
//! let root = RootFinder::new()
//!     .max_iterations(200)
//!     .newton_bound(&f, 1.0, 10)?;
//! ```

use crate::approximation::{bisection, newton};
use crate::{ApproxError, Bracket, DEFAULT_MAX_ITERATIONS, Differentiable, MathScalar};

/// Builder for root approximation.
///
/// The only setting is the iteration cap applied to the bounded variants
/// (`newton_bound`, `bisect_bound`, `bisect_bracket`); the fixed-count
/// variants always run exactly the requested number of steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootFinder {
    max_iterations: Option<usize>,
}

impl RootFinder {
    /// Create a root finder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap for the bounded variants.
    ///
    /// A cap of `0` is clamped to `1`: every bounded call performs at least
    /// one step before it can report [`ApproxError::MaxIterationsExceeded`].
    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations.max(1));
        self
    }

    /// The iteration cap in effect
    pub fn iteration_cap(&self) -> usize {
        self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    /// Newton's method, exactly `n` iterations from `k0`.
    ///
    /// No convergence check is made; a zero derivative along the way yields a
    /// non-finite result.
    pub fn newton<T, F>(&self, f: &F, k0: T, n: usize) -> T
    where
        T: MathScalar,
        F: Differentiable<T>,
    {
        newton::newton_fixed(f, k0, n)
    }

    /// Newton's method until successive iterates differ by at most `10^(-order)`.
    ///
    /// **This is a heuristic, not an error bound.** The distance between two
    /// iterates can fall below the tolerance while the iterate is still further
    /// than that from the root (linear convergence at a multiple root, for
    /// instance), and slowly converging sequences may need many iterations.
    /// Returns [`ApproxError::MaxIterationsExceeded`] when the cap is hit.
    pub fn newton_bound<T, F>(&self, f: &F, k0: T, order: i32) -> Result<T, ApproxError>
    where
        T: MathScalar,
        F: Differentiable<T>,
    {
        newton::newton_bound(f, k0, order, self.iteration_cap())
    }

    /// Bisection over `[p0, p1]` with exactly `n` halvings; returns the final midpoint.
    ///
    /// The error is at most `|p1 − p0| / 2^(n+1)`.
    pub fn bisect<T, F>(&self, f: &F, p0: T, p1: T, n: usize) -> Result<T, ApproxError>
    where
        T: MathScalar,
        F: Differentiable<T>,
    {
        bisection::bisect_fixed(f, p0, p1, n).map(|bracket| bracket.midpoint())
    }

    /// Bisection over `[p0, p1]` until the bracket is narrower than
    /// `10^(-order)`; returns the final midpoint.
    pub fn bisect_bound<T, F>(&self, f: &F, p0: T, p1: T, order: i32) -> Result<T, ApproxError>
    where
        T: MathScalar,
        F: Differentiable<T>,
    {
        self.bisect_bracket(f, p0, p1, order)
            .map(|bracket| bracket.midpoint())
    }

    /// Like [`RootFinder::bisect_bound`] but returns the whole final bracket
    pub fn bisect_bracket<T, F>(
        &self,
        f: &F,
        p0: T,
        p1: T,
        order: i32,
    ) -> Result<Bracket<T>, ApproxError>
    where
        T: MathScalar,
        F: Differentiable<T>,
    {
        bisection::bisect_bound(f, p0, p1, order, self.iteration_cap())
    }
}
