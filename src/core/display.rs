//! Display implementations for terms and functions.
//!
//! Rendering is purely cosmetic and never simplifies:
//! - each term renders as a signed fragment, `+3x^(2)`, `-2sin(0.5x)`, `0e^(1x)`
//! - a leading `+` is written only for strictly positive coefficients; negative
//!   coefficients carry their own `-` and zero renders as `0`
//! - a function renders every term followed by a tab, in insertion order, so
//!   an empty function renders as the empty string

use crate::core::function::Function;
use crate::core::term::{Term, TermKind};
use crate::core::traits::MathScalar;
use std::fmt;

impl<T: MathScalar> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = (self.a(), self.b());
        if a > T::zero() {
            write!(f, "+")?;
        }
        match self.kind() {
            TermKind::Power => write!(f, "{}x^({})", a, b),
            TermKind::Exp => write!(f, "{}e^({}x)", a, b),
            TermKind::Log => write!(f, "{}ln({}x)", a, b),
            TermKind::Sin => write!(f, "{}sin({}x)", a, b),
            TermKind::Cos => write!(f, "{}cos({}x)", a, b),
        }
    }
}

impl<T: MathScalar> fmt::Display for Function<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in self {
            write!(f, "{}\t", term)?;
        }
        Ok(())
    }
}
