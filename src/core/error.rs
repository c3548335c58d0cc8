use thiserror::Error;

use crate::core::traits::{MathScalar, as_f64};

/// Errors raised by indexed access to a [`Function`](crate::Function)'s terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("Term index {index} is out of range for a function with {len} term(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

impl FunctionError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        FunctionError::IndexOutOfRange { index, len }
    }
}

/// Errors that can occur during root approximation
///
/// Scalars are stored as `f64` regardless of the scalar type the routine was
/// run with, so the error type stays non-generic.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ApproxError {
    /// `f(p0)` and `f(p1)` have the same strict sign, so no root is bracketed
    #[error("No sign change over [{p0}, {p1}]: the interval does not bracket a root")]
    NoSignChange { p0: f64, p1: f64 },

    /// An endpoint evaluated to NaN, so the bracket cannot be checked
    #[error("Function is not finite at x = {x} (got {value})")]
    NotFinite { x: f64, value: f64 },

    /// The iteration cap was reached before the termination criterion held
    #[error("Gave up after {iterations} iterations (last estimate {last})")]
    MaxIterationsExceeded { iterations: usize, last: f64 },
}

impl ApproxError {
    pub(crate) fn no_sign_change<T: MathScalar>(p0: T, p1: T) -> Self {
        ApproxError::NoSignChange {
            p0: as_f64(p0),
            p1: as_f64(p1),
        }
    }

    pub(crate) fn not_finite<T: MathScalar>(x: T, value: T) -> Self {
        ApproxError::NotFinite {
            x: as_f64(x),
            value: as_f64(value),
        }
    }

    pub(crate) fn max_iterations<T: MathScalar>(iterations: usize, last: T) -> Self {
        ApproxError::MaxIterationsExceeded {
            iterations,
            last: as_f64(last),
        }
    }
}
