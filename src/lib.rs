//! Symbolic Term Calculus and Root Approximation
//!
//! A small, focused Rust library for exact differentiation of sums of
//! elementary terms and for approximating their roots.
//!
//! # Features
//! - Terms of the form `a·x^b`, `a·e^(bx)`, `a·ln(bx)`, `a·sin(bx)`, `a·cos(bx)`
//! - Exact symbolic derivatives of any order (no numeric differentiation)
//! - Newton's method and bisection, each with fixed-count and precision variants
//! - Generic over `f32` / `f64` through [`MathScalar`]
//! - **Builder pattern API** for configuring the iterative routines
//!
//! # Usage Examples
//!
//! ## Free functions
//! ```ignore
//! use rootcalc::{Function, Term, newton_method, bisect_method};
//!
//! // x^2 - 2
//! let f = Function::from_terms([Term::power(1.0, 2.0), Term::power(-2.0, 0.0)]);
//! let root = newton_method(&f, 1.0, 10);
//! let same = bisect_method(&f, 1.0, 2.0, 40)?;
//! ```
//!
//! ## Builder
//! ```ignore
//! use rootcalc::{Function, RootFinder, Term};
//!
//! let f = Function::from_terms([Term::sin(1.0, 1.0), Term::power(-0.5, 0.0)]);
//! let bracket = RootFinder::new().max_iterations(500).bisect_bracket(&f, 0.0, 1.0, 9)?;
//! assert!(bracket.width() < 1e-9);
//! ```
//!
//! # Errors
//! Domain violations (`ln` of a non-positive number, fractional powers of
//! negative numbers) are never caught: they surface as NaN or infinities from
//! `evaluate`. Only index misuse ([`FunctionError`]) and approximation
//! failures ([`ApproxError`]) are reported as errors.

mod approximation;
mod builder;
mod core;


// Re-export key types for easier usage
pub use approximation::{
    Bracket, bisect_method, bisect_method_bound, newton_method, newton_method_bound,
};
pub use builder::RootFinder;
pub use crate::core::{
    ApproxError, Differentiable, Function, FunctionError, MathScalar, Term, TermKind,
};

/// Default iteration cap for the precision-driven approximation routines
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;
