//! Sums of elementary terms.
//!
//! A [`Function`] owns an ordered list of [`Term`]s and represents their sum.
//! Order never affects the value, but it is kept for indexed access and for a
//! deterministic rendering.

use std::borrow::Cow;
use std::slice;

use crate::core::error::FunctionError;
use crate::core::term::Term;
use crate::core::traits::{Differentiable, MathScalar};

/// An additive composition of [`Term`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Function<T: MathScalar = f64> {
    terms: Vec<Term<T>>,
}

impl<T: MathScalar> Default for Function<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MathScalar> Function<T> {
    /// Create an empty function (evaluates to zero everywhere)
    #[must_use]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Create a function holding a single term
    #[must_use]
    pub fn from_term(term: Term<T>) -> Self {
        Self { terms: vec![term] }
    }

    /// Create a function from any sequence of terms, keeping their order
    #[must_use]
    pub fn from_terms(terms: impl IntoIterator<Item = Term<T>>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Sequence operations
    // -------------------------------------------------------------------------

    pub fn add_term(&mut self, term: Term<T>) {
        self.terms.push(term);
    }

    /// Remove and return the term at `index`
    pub fn remove_term(&mut self, index: usize) -> Result<Term<T>, FunctionError> {
        if index >= self.terms.len() {
            return Err(FunctionError::index_out_of_range(index, self.terms.len()));
        }
        Ok(self.terms.remove(index))
    }

    pub fn term(&self, index: usize) -> Result<&Term<T>, FunctionError> {
        let len = self.terms.len();
        self.terms
            .get(index)
            .ok_or(FunctionError::index_out_of_range(index, len))
    }

    pub fn term_mut(&mut self, index: usize) -> Result<&mut Term<T>, FunctionError> {
        let len = self.terms.len();
        self.terms
            .get_mut(index)
            .ok_or(FunctionError::index_out_of_range(index, len))
    }

    /// Number of terms
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    #[inline]
    pub fn terms(&self) -> &[Term<T>] {
        &self.terms
    }

    pub fn iter(&self) -> slice::Iter<'_, Term<T>> {
        self.terms.iter()
    }

    // -------------------------------------------------------------------------
    // Merging
    // -------------------------------------------------------------------------

    /// Add `c·other` to this function, scaling `other` in place.
    ///
    /// Every term of `other` has its `a` coefficient multiplied by `c` and is
    /// then appended here. `other` keeps the scaled terms, so after the call it
    /// evaluates to `c` times its former value. Use [`Function::add_scaled`]
    /// to merge without touching the donor.
    pub fn add(&mut self, other: &mut Function<T>, c: T) {
        self.terms.reserve(other.terms.len());
        for term in other.terms.iter_mut() {
            term.scale(c);
            self.terms.push(*term);
        }
    }

    /// Add `c·other` to this function, leaving `other` unchanged
    pub fn add_scaled(&mut self, other: &Function<T>, c: T) {
        self.terms.extend(other.terms.iter().map(|term| {
            let mut scaled = *term;
            scaled.scale(c);
            scaled
        }));
    }

    // -------------------------------------------------------------------------
    // Calculus
    // -------------------------------------------------------------------------

    /// Value at `x`: the sum of every term's value.
    ///
    /// If any term is undefined at `x` the NaN (or infinity) it produces is
    /// propagated; callers must check `is_finite` themselves.
    pub fn evaluate(&self, x: T) -> T {
        self.terms
            .iter()
            .fold(T::zero(), |sum, term| sum + term.evaluate(x))
    }

    /// The `order`-th derivative.
    ///
    /// `order = 0` borrows `self` rather than copying it. Higher orders build a
    /// new function of per-term derivatives, `order` times over, and return
    /// only the last one.
    pub fn derivative(&self, order: usize) -> Cow<'_, Function<T>> {
        if order == 0 {
            return Cow::Borrowed(self);
        }
        let mut current = self.first_derivative();
        for _ in 1..order {
            current = current.first_derivative();
        }
        Cow::Owned(current)
    }

    fn first_derivative(&self) -> Function<T> {
        self.terms.iter().map(Term::derivative).collect()
    }
}

impl<T: MathScalar> Differentiable<T> for Function<T> {
    fn evaluate(&self, x: T) -> T {
        Function::evaluate(self, x)
    }

    fn derivative(&self) -> Self {
        self.first_derivative()
    }
}

impl<T: MathScalar> From<Term<T>> for Function<T> {
    fn from(term: Term<T>) -> Self {
        Self::from_term(term)
    }
}

impl<T: MathScalar> FromIterator<Term<T>> for Function<T> {
    fn from_iter<I: IntoIterator<Item = Term<T>>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<T: MathScalar> Extend<Term<T>> for Function<T> {
    fn extend<I: IntoIterator<Item = Term<T>>>(&mut self, iter: I) {
        self.terms.extend(iter);
    }
}

impl<T: MathScalar> IntoIterator for Function<T> {
    type Item = Term<T>;
    type IntoIter = std::vec::IntoIter<Term<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a, T: MathScalar> IntoIterator for &'a Function<T> {
    type Item = &'a Term<T>;
    type IntoIter = slice::Iter<'a, Term<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::term::TermKind;
    use approx::assert_abs_diff_eq;

    /// 3x^2 - 2sin(x) + e^(0.5x)
    fn sample() -> Function {
        Function::from_terms([
            Term::power(3.0, 2.0),
            Term::sin(-2.0, 1.0),
            Term::exp(1.0, 0.5),
        ])
    }

    #[test]
    fn test_empty_function_is_zero() {
        let f: Function = Function::new();
        assert!(f.is_empty());
        assert_eq!(f.evaluate(3.0), 0.0);
        assert!(f.derivative(2).is_empty());
    }

    #[test]
    fn test_evaluate_sums_terms() {
        let f = sample();
        let x: f64 = 1.3;
        let expected = 3.0 * x * x - 2.0 * x.sin() + (0.5 * x).exp();
        assert_abs_diff_eq!(f.evaluate(x), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_propagates_nan() {
        let f: Function = Function::from_terms([Term::power(1.0, 2.0), Term::log(1.0, 1.0)]);
        assert!(f.evaluate(-2.0).is_nan());
        assert!(f.evaluate(2.0).is_finite());
    }

    #[test]
    fn test_derivative_zero_borrows() {
        let f = sample();
        let d0 = f.derivative(0);
        assert!(matches!(d0, Cow::Borrowed(_)));
        assert!(std::ptr::eq(&*d0, &f));
    }

    #[test]
    fn test_derivative_orders() {
        let f = sample();
        let d1 = f.derivative(1);
        assert!(matches!(d1, Cow::Owned(_)));
        assert_eq!(
            d1.terms(),
            &[Term::power(6.0, 1.0), Term::cos(-2.0, 1.0), Term::exp(0.5, 0.5)]
        );

        let d2 = f.derivative(2);
        assert_eq!(
            d2.terms(),
            &[Term::power(6.0, 0.0), Term::sin(2.0, 1.0), Term::exp(0.25, 0.5)]
        );

        // the constant collapses to the zero term and stays there
        let d3 = f.derivative(3);
        assert_eq!(d3.term(0).unwrap(), &Term::power(0.0, 0.0));
        assert_eq!(d3.len(), f.len());
    }

    #[test]
    fn test_derivative_leaves_source_untouched() {
        let f = sample();
        let before = f.clone();
        let _ = f.derivative(4);
        assert_eq!(f, before);
    }

    #[test]
    fn test_log_derivative_changes_kind() {
        let f: Function = Function::from_term(Term::log(2.0, 5.0));
        let d = f.derivative(1);
        assert_eq!(d.term(0).unwrap().kind(), TermKind::Power);
        // d/dx 2ln(5x) = 2/x
        assert_abs_diff_eq!(d.evaluate(4.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sequence_operations() {
        let mut f = sample();
        assert_eq!(f.len(), 3);

        let removed = f.remove_term(1).unwrap();
        assert_eq!(removed, Term::sin(-2.0, 1.0));
        assert_eq!(f.len(), 2);
        assert_eq!(f.term(1).unwrap(), &Term::exp(1.0, 0.5));

        f.add_term(Term::cos(1.0, 1.0));
        assert_eq!(f.term(2).unwrap().kind(), TermKind::Cos);

        f.term_mut(0).unwrap().set_a(1.0);
        assert_eq!(f.term(0).unwrap(), &Term::power(1.0, 2.0));

        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.evaluate(1.0), 0.0);
    }

    #[test]
    fn test_index_errors() {
        let mut f = sample();
        assert_eq!(
            f.term(3),
            Err(FunctionError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(f.term_mut(10).is_err());
        assert_eq!(
            f.remove_term(5),
            Err(FunctionError::IndexOutOfRange { index: 5, len: 3 })
        );
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn test_add_moves_scaled_terms() {
        let mut f: Function = Function::from_term(Term::power(1.0, 2.0));
        let mut g: Function = Function::from_terms([Term::sin(1.0, 1.0), Term::power(2.0, 1.0)]);
        let x: f64 = 0.7;
        let (fx, gx) = (f.evaluate(x), g.evaluate(x));

        f.add(&mut g, 3.0);

        assert_eq!(f.len(), 3);
        assert_abs_diff_eq!(f.evaluate(x), fx + 3.0 * gx, epsilon = 1e-12);
        // the donor now holds the scaled coefficients
        assert_eq!(g.terms(), &[Term::sin(3.0, 1.0), Term::power(6.0, 1.0)]);
        assert_abs_diff_eq!(g.evaluate(x), 3.0 * gx, epsilon = 1e-12);
    }

    #[test]
    fn test_add_scaled_keeps_donor() {
        let mut f: Function = Function::from_term(Term::power(1.0, 2.0));
        let g: Function = Function::from_terms([Term::cos(1.0, 2.0), Term::exp(-1.0, 1.0)]);
        let before = g.clone();
        let x: f64 = -0.4;
        let (fx, gx) = (f.evaluate(x), g.evaluate(x));

        f.add_scaled(&g, -0.5);

        assert_eq!(g, before);
        assert_eq!(f.len(), 3);
        assert_abs_diff_eq!(f.evaluate(x), fx - 0.5 * gx, epsilon = 1e-12);
    }

    #[test]
    fn test_conversions() {
        let f: Function = Term::exp(1.0, 1.0).into();
        assert_eq!(f.len(), 1);

        let mut g: Function = TermKind::ALL.iter().map(|&k| Term::unit(k)).collect();
        assert_eq!(g.len(), 5);
        g.extend([Term::power(1.0, 3.0)]);
        assert_eq!(g.len(), 6);

        let kinds: Vec<TermKind> = (&g).into_iter().map(Term::kind).collect();
        assert_eq!(kinds[0], TermKind::Power);
        assert_eq!(g.into_iter().count(), 6);
    }
}
