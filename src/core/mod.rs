//! Core types for the term algebra
//!
//! This module contains the fundamental types:
//! - `Term` / `TermKind` - Elementary terms `a·g(b·x)`
//! - `Function` - Ordered sums of terms
//! - `FunctionError` / `ApproxError` - Error types
//! - `MathScalar` / `Differentiable` - Scalar bound and calculus contract
//! - Display formatting for terms and functions

mod display; // Display implementations for Term and Function
pub(crate) mod error;
pub(crate) mod function;
pub(crate) mod term;
pub(crate) mod traits;

// Public re-exports (for external API)
pub use error::{ApproxError, FunctionError};
pub use function::Function;
pub use term::{Term, TermKind};
pub use traits::{Differentiable, MathScalar};
