//! Floating-point scalar types and compatibility API.
//!
//! All matrices, vectors, and angles in this crate are generic over the
//! [`Float`] trait, implemented for `f32` and `f64`.
//!
//! Most floating-point functions are unavailable in `no_std`. With the `std`
//! feature they come from the standard library; with the `libm` feature from
//! the [libm](https://crates.io/crates/libm) crate. Without either, only the
//! functions implementable with plain arithmetic and bit manipulation exist,
//! which is enough for determinants and inversion but not for rotations.

use core::fmt::{Debug, Display};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

#[cfg(all(feature = "fp", not(any(feature = "std", feature = "libm"))))]
compile_error!(
    "feature `fp` needs a floating-point backend: enable `std` or `libm`"
);

/// Trait for the floating-point scalar types `f32` and `f64`.
pub trait Float:
    Copy
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const HALF: Self;
    /// Archimedes' constant (π).
    const PI: Self;
    /// The difference between 1.0 and the next larger representable number.
    const EPSILON: Self;
    /// The smallest positive normal value.
    const MIN_POSITIVE: Self;

    /// Converts an `f64` to `Self`, rounding to nearest if necessary.
    fn from_f64(x: f64) -> Self;
    /// Converts `self` to an `f64`. Lossless for both implementors.
    fn to_f64(self) -> f64;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Returns the square root of `self`.
    #[cfg(feature = "fp")]
    fn sqrt(self) -> Self;
    /// Returns the sine of `self` radians.
    #[cfg(feature = "fp")]
    fn sin(self) -> Self;
    /// Returns the cosine of `self` radians.
    #[cfg(feature = "fp")]
    fn cos(self) -> Self;
    /// Returns the tangent of `self` radians.
    #[cfg(feature = "fp")]
    fn tan(self) -> Self;
    /// Returns the four-quadrant arctangent of `self` (y) and `x` in radians.
    #[cfg(feature = "fp")]
    fn atan2(self, x: Self) -> Self;
    /// Simultaneously computes the sine and cosine of `self` radians.
    #[cfg(feature = "fp")]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    /// Returns whether `self` is neither infinite nor NaN.
    fn is_finite(self) -> bool {
        (self - self) == Self::ZERO
    }
}

macro_rules! impl_float {
    (
        $t:ident, bits = $mask:literal,
        sqrt = $sqrt:ident, sin = $sin:ident, cos = $cos:ident,
        tan = $tan:ident, atan2 = $atan2:ident
    ) => {
        impl Float for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = core::$t::consts::PI;
            const EPSILON: Self = $t::EPSILON;
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;

            #[inline]
            fn from_f64(x: f64) -> Self {
                x as $t
            }
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn abs(self) -> Self {
                $t::from_bits(self.to_bits() & $mask)
            }

            #[cfg(feature = "fp")]
            #[inline]
            fn sqrt(self) -> Self {
                #[cfg(feature = "std")]
                {
                    $t::sqrt(self)
                }
                #[cfg(all(feature = "libm", not(feature = "std")))]
                {
                    libm::$sqrt(self)
                }
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn sin(self) -> Self {
                #[cfg(feature = "std")]
                {
                    $t::sin(self)
                }
                #[cfg(all(feature = "libm", not(feature = "std")))]
                {
                    libm::$sin(self)
                }
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn cos(self) -> Self {
                #[cfg(feature = "std")]
                {
                    $t::cos(self)
                }
                #[cfg(all(feature = "libm", not(feature = "std")))]
                {
                    libm::$cos(self)
                }
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn tan(self) -> Self {
                #[cfg(feature = "std")]
                {
                    $t::tan(self)
                }
                #[cfg(all(feature = "libm", not(feature = "std")))]
                {
                    libm::$tan(self)
                }
            }
            #[cfg(feature = "fp")]
            #[inline]
            fn atan2(self, x: Self) -> Self {
                #[cfg(feature = "std")]
                {
                    $t::atan2(self, x)
                }
                #[cfg(all(feature = "libm", not(feature = "std")))]
                {
                    libm::$atan2(self, x)
                }
            }
        }
    };
}

impl_float!(f32, bits = 0x7fff_ffff,
    sqrt = sqrtf, sin = sinf, cos = cosf, tan = tanf, atan2 = atan2f);

impl_float!(f64, bits = 0x7fff_ffff_ffff_ffff,
    sqrt = sqrt, sin = sin, cos = cos, tan = tan, atan2 = atan2);
