//! Angular quantities.

use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use crate::math::approx::ApproxEq;
use crate::math::float::Float;

//
// Types
//

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw scalar value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle<T = f32>(T);

//
// Free fns and consts
//

/// Returns an angle of `a` radians.
pub const fn rads<T: Float>(a: T) -> Angle<T> {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs<T: Float>(a: T) -> Angle<T> {
    Angle(a * rads_per_deg())
}

/// Returns the four-quadrant arctangent of `y` and `x` as an `Angle`.
///
/// # Examples
/// ```
/// # use gimbal_core::math::angle::*;
/// assert_eq!(atan2(0.0, 1.0), degs(0.0));
/// assert_eq!(atan2(3.0f32, 0.0), degs(90.0));
/// ```
#[cfg(feature = "fp")]
pub fn atan2<T: Float>(y: T, x: T) -> Angle<T> {
    Angle(y.atan2(x))
}

fn rads_per_deg<T: Float>() -> T {
    T::PI / T::from_f64(180.0)
}

//
// Inherent impls
//

impl<T: Float> Angle<T> {
    /// A zero degree angle.
    pub const ZERO: Self = Self(T::ZERO);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use std::f32;
    /// # use gimbal_core::math::degs;
    /// assert_eq!(degs(90.0).to_rads(), f32::consts::FRAC_PI_2);
    /// ```
    pub const fn to_rads(self) -> T {
        self.0
    }
    /// Returns the value of `self` in degrees.
    /// # Examples
    /// ```
    /// # use gimbal_core::math::rads;
    /// assert_eq!(rads(core::f32::consts::PI).to_degs(), 180.0);
    /// ```
    pub fn to_degs(self) -> T {
        self.0 / rads_per_deg()
    }
}

#[cfg(feature = "fp")]
impl<T: Float> Angle<T> {
    /// Returns the sine of `self`.
    /// # Examples
    /// ```
    /// # use gimbal_core::math::angle::*;
    /// assert_eq!(degs(30.0f32).sin(), 0.5)
    /// ```
    pub fn sin(self) -> T {
        self.0.sin()
    }
    /// Returns the cosine of `self`.
    /// # Examples
    /// ```
    /// # use gimbal_core::assert_approx_eq;
    /// # use gimbal_core::math::angle::*;
    /// assert_approx_eq!(degs(60.0f32).cos(), 0.5)
    /// ```
    pub fn cos(self) -> T {
        self.0.cos()
    }
    /// Simultaneously computes the sine and cosine of `self`.
    /// # Examples
    /// ```
    /// # use gimbal_core::assert_approx_eq;
    /// # use gimbal_core::math::angle::*;
    /// let (sin, cos) = degs(90.0f32).sin_cos();
    /// assert_approx_eq!(sin, 1.0);
    /// assert_approx_eq!(cos, 0.0);
    /// ```
    pub fn sin_cos(self) -> (T, T) {
        self.0.sin_cos()
    }
    /// Returns the tangent of `self`.
    pub fn tan(self) -> T {
        self.0.tan()
    }
}

//
// Local trait impls
//

impl<T: Float + ApproxEq> ApproxEq<Self, T> for Angle<T> {
    fn approx_eq_eps(&self, other: &Self, eps: &T) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> T {
        T::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<T: Float> Display for Angle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (val, unit) = if f.alternate() {
            (self.to_rads() / T::PI, "𝜋 rad")
        } else {
            (self.to_degs(), "°")
        };
        Display::fmt(&val, f)?;
        f.write_str(unit)
    }
}

impl<T: Float> Debug for Angle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Angle(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl<T: Float> Add for Angle<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl<T: Float> Sub for Angle<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl<T: Float> AddAssign for Angle<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl<T: Float> SubAssign for Angle<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl<T: Float> Neg for Angle<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Float> Mul<T> for Angle<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self(self.0 * rhs)
    }
}
impl<T: Float> Div<T> for Angle<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self(self.0 / rhs)
    }
}
impl<T: Float> Rem for Angle<T> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        Self(self.0 % rhs.0)
    }
}

impl From<Angle<f32>> for Angle<f64> {
    fn from(a: Angle<f32>) -> Self {
        Self(a.0.into())
    }
}
