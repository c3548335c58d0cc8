//! Elementary terms `a·g(b·x)`.
//!
//! A [`Term`] pairs a closed [`TermKind`] with two coefficients:
//!
//! | Kind    | Value          | Role of `b`  |
//! |---------|----------------|--------------|
//! | `Power` | `a·x^b`        | exponent     |
//! | `Exp`   | `a·e^(b·x)`    | inner scale  |
//! | `Log`   | `a·ln(b·x)`    | inner scale  |
//! | `Sin`   | `a·sin(b·x)`   | inner scale  |
//! | `Cos`   | `a·cos(b·x)`   | inner scale  |
//!
//! Every kind is closed under differentiation into some (possibly different)
//! kind, so derivatives are exact and never leave the term algebra.

use crate::core::traits::{Differentiable, MathScalar};

/// The elementary function `g` a [`Term`] applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// `a·x^b`
    Power,
    /// `a·e^(b·x)`
    Exp,
    /// `a·ln(b·x)`
    Log,
    /// `a·sin(b·x)`
    Sin,
    /// `a·cos(b·x)`
    Cos,
}

impl TermKind {
    /// All kinds, in declaration order
    pub const ALL: [TermKind; 5] = [
        TermKind::Power,
        TermKind::Exp,
        TermKind::Log,
        TermKind::Sin,
        TermKind::Cos,
    ];

    /// Whether this kind is a trigonometric function
    #[inline]
    pub const fn is_trig(self) -> bool {
        matches!(self, TermKind::Sin | TermKind::Cos)
    }
}

/// One elementary term `a·g(b·x)`.
///
/// The kind is fixed at construction; only the coefficients can change
/// afterwards, through [`Term::set_a`], [`Term::set_b`] and [`Term::scale`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term<T: MathScalar = f64> {
    kind: TermKind,
    a: T,
    b: T,
}

impl<T: MathScalar> Term<T> {
    /// Create a term of the given kind with explicit coefficients
    #[must_use]
    pub fn new(kind: TermKind, a: T, b: T) -> Self {
        Self { kind, a, b }
    }

    /// The unit term of a kind (`a = 1`, `b = 1`): `x`, `e^x`, `ln(x)`, `sin(x)`, `cos(x)`
    #[must_use]
    pub fn unit(kind: TermKind) -> Self {
        Self::new(kind, T::one(), T::one())
    }

    /// `a·x^b`
    #[must_use]
    pub fn power(a: T, b: T) -> Self {
        Self::new(TermKind::Power, a, b)
    }

    /// `a·e^(b·x)`
    #[must_use]
    pub fn exp(a: T, b: T) -> Self {
        Self::new(TermKind::Exp, a, b)
    }

    /// `a·ln(b·x)`
    #[must_use]
    pub fn log(a: T, b: T) -> Self {
        Self::new(TermKind::Log, a, b)
    }

    /// `a·sin(b·x)`
    #[must_use]
    pub fn sin(a: T, b: T) -> Self {
        Self::new(TermKind::Sin, a, b)
    }

    /// `a·cos(b·x)`
    #[must_use]
    pub fn cos(a: T, b: T) -> Self {
        Self::new(TermKind::Cos, a, b)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn kind(&self) -> TermKind {
        self.kind
    }

    /// Outer coefficient
    #[inline]
    pub fn a(&self) -> T {
        self.a
    }

    /// Exponent for `Power`, inner scale for every other kind
    #[inline]
    pub fn b(&self) -> T {
        self.b
    }

    #[inline]
    pub fn set_a(&mut self, a: T) {
        self.a = a;
    }

    #[inline]
    pub fn set_b(&mut self, b: T) {
        self.b = b;
    }

    /// Multiply the outer coefficient by `c` in place
    #[inline]
    pub fn scale(&mut self, c: T) {
        self.a *= c;
    }

    #[inline]
    pub const fn is_trig(&self) -> bool {
        self.kind.is_trig()
    }

    // -------------------------------------------------------------------------
    // Calculus
    // -------------------------------------------------------------------------

    /// Value of the term at `x`.
    ///
    /// Domain violations are not checked: `ln` of a non-positive argument or a
    /// fractional power of a negative base yields NaN (or an infinity), exactly
    /// as the underlying float operation does.
    pub fn evaluate(&self, x: T) -> T {
        let Self { kind, a, b } = *self;
        match kind {
            TermKind::Power => a * x.powf(b),
            TermKind::Exp => a * (b * x).exp(),
            TermKind::Log => a * (b * x).ln(),
            TermKind::Sin => a * (b * x).sin(),
            TermKind::Cos => a * (b * x).cos(),
        }
    }

    /// Exact derivative with respect to `x`.
    ///
    /// The chain rule contributes the factor `b` for `Exp`, `Sin` and `Cos`.
    /// For `Log` it cancels against the `1/(b·x)` of the outer derivative, so
    /// `a·ln(b·x)` differentiates to `a·x^(-1)` whatever `b` is. `Power` with
    /// `b = 0` is a constant and differentiates to `Power(0, 0)`, the zero term.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let Self { kind, a, b } = *self;
        match kind {
            TermKind::Power if b == T::zero() => Self::power(a * b, b),
            TermKind::Power => Self::power(a * b, b - T::one()),
            TermKind::Exp => Self::exp(a * b, b),
            TermKind::Log => Self::power(a, -T::one()),
            TermKind::Sin => Self::cos(a * b, b),
            TermKind::Cos => Self::sin(-(a * b), b),
        }
    }
}

impl<T: MathScalar> Default for Term<T> {
    /// The unit power term `x`
    fn default() -> Self {
        Self::unit(TermKind::Power)
    }
}

impl<T: MathScalar> Differentiable<T> for Term<T> {
    fn evaluate(&self, x: T) -> T {
        Term::evaluate(self, x)
    }

    fn derivative(&self) -> Self {
        Term::derivative(self)
    }
}
