//! Matrices, vectors, angles, and the rotation representations between them.
//!
//! Includes [vectors][self::vec], square [matrices][mat] with
//! [inversion][mat::inv] and [transform][mat::xform] constructors,
//! strongly typed [angles][angle], [Euler angles][euler] in all 24 axis
//! orders, and [pseudo-random numbers][rand], as well as utilities such as
//! approximate equality comparisons.
//!
//! Everything is generic over the scalar type, either `f32` or `f64`, via
//! the [`Float`] trait. All types are small `Copy` values; nothing in this
//! module allocates.

pub use {
    angle::{Angle, degs, rads},
    approx::{ApproxEq, equal, equal_with_rel_error},
    float::Float,
    mat::{Mat2x2, Mat3x3, Mat4x4, Matrix, SingularMatrix, outer_product},
    vec::{Vec2, Vec3, Vec4, Vector, splat, vec2, vec3, vec4},
};
#[cfg(feature = "fp")]
pub use {
    euler::{
        Axis, Euler, Order, extract_euler_2d, extract_euler_xyz,
        extract_euler_zyx,
    },
    mat::xform::rotation_matrix,
};

pub mod angle;
pub mod approx;
#[cfg(feature = "fp")]
pub mod euler;
pub mod float;
pub mod mat;
pub mod rand;
pub mod vec;

/// Returns `a` clamped to the range `lo..=hi`.
///
/// Unlike `f32::clamp`, does not panic if `lo > hi`; in that case the
/// result is `lo` if `a < lo`, otherwise `hi` if `a > hi`.
///
/// # Examples
/// ```
/// use gimbal_core::math::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: Float>(a: T, lo: T, hi: T) -> T {
    if a < lo {
        lo
    } else if a > hi {
        hi
    } else {
        a
    }
}

/// Returns the sign of `a`: -1 if negative, otherwise 1.
///
/// Zero, including negative zero, has a positive sign.
///
/// # Examples
/// ```
/// use gimbal_core::math::sign;
///
/// assert_eq!(sign(-3.0), -1.0);
/// assert_eq!(sign(0.0), 1.0);
/// assert_eq!(sign(-0.0), 1.0);
/// ```
#[inline]
pub fn sign<T: Float>(a: T) -> T {
    if a < T::ZERO { -T::ONE } else { T::ONE }
}

/// Linearly interpolates between `from` and `to`.
///
/// If `t` = 0, returns `from`; if `t` = 1, returns `to`.
/// For 0 < `t` < 1, returns the weighted average
/// ```text
/// (1 - t) * from + t * to
/// ```
///
/// Does not panic if `t < 0.0` or `t > 1.0`, or if `t` is `NaN`, but the
/// return value in those cases is unspecified.
///
/// # Examples
/// ```
/// use gimbal_core::math::lerp;
///
/// assert_eq!(lerp(0.25, 1.0, 5.0), 2.0);
/// assert_eq!(lerp(1.0, 1.0, 5.0), 5.0);
/// ```
#[inline]
pub fn lerp<T: Float>(t: T, from: T, to: T) -> T {
    (T::ONE - t) * from + t * to
}

/// Returns the relative position of `t` between `min` and `max`.
///
/// That is, returns 0 when `t` = `min`, 1 when `t` = `max`, and linearly
/// interpolates in between.
///
/// The result is unspecified if any of the parameters is non-finite, or if
/// `min` = `max`.
///
/// # Examples
/// ```
/// use gimbal_core::math::inv_lerp;
///
/// // Two is one fourth of the way from one to five
/// assert_eq!(inv_lerp(2.0, 1.0, 5.0), 0.25);
///
/// // Zero is halfway between -2 and 2
/// assert_eq!(inv_lerp(0.0, -2.0, 2.0), 0.5);
/// ```
#[inline]
pub fn inv_lerp<T: Float>(t: T, min: T, max: T) -> T {
    (t - min) / (max - min)
}
