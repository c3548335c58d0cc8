use num_traits::{Float, FloatConst, FromPrimitive, Signed, ToPrimitive};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// A trait comprising all operations required for the scalars terms are
/// evaluated over.
///
/// This aggregates `num_traits::Float` (providing powf, exp, ln, sin, cos),
/// `FloatConst` (E, PI), and standard arithmetic/debug traits. It is
/// implemented for `f32` and `f64`.
pub trait MathScalar:
    Float
    + FloatConst
    + FromPrimitive
    + ToPrimitive
    + Signed
    + Debug
    + Display
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Precision target `10^(-order)` used by the bounded approximation routines.
    ///
    /// Total over `i32`: `i32::MIN` gives infinity, and orders past the
    /// type's range saturate to zero or infinity.
    fn precision(order: i32) -> Self {
        let ten = Self::from_u8(10).unwrap_or_else(|| {
            let two = Self::one() + Self::one();
            two * (two + two + Self::one())
        });
        match order.checked_neg() {
            Some(exponent) => ten.powi(exponent),
            // 10^(2^31) overflows every float type
            None => Self::infinity(),
        }
    }
}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + ToPrimitive
        + Signed
        + Debug
        + Display
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Send
        + Sync
        + 'static
{
}

/// Evaluate/differentiate contract consumed by the root approximation routines.
///
/// Anything that can be evaluated at a point and can produce its own exact
/// first derivative can be handed to Newton's method; bisection only needs
/// [`Differentiable::evaluate`].
pub trait Differentiable<T: MathScalar> {
    /// Value at `x`. Domain violations surface as NaN or infinities.
    fn evaluate(&self, x: T) -> T;

    /// Exact symbolic first derivative
    fn derivative(&self) -> Self
    where
        Self: Sized;
}

/// Lossy conversion used when a scalar has to be stored in an error payload
#[inline]
pub(crate) fn as_f64<T: MathScalar>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}
