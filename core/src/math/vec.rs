//! Real vectors of two, three, or four components.
//!
//! Vectors are row vectors: a vector is transformed by a matrix by
//! multiplying it from the left, `v * M`.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math::approx::ApproxEq;
use crate::math::float::Float;

//
// Types
//

/// A vector of `N` scalar components.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Vector<T, const N: usize>(pub [T; N]);

/// A 2-vector.
pub type Vec2<T = f32> = Vector<T, 2>;
/// A 3-vector.
pub type Vec3<T = f32> = Vector<T, 3>;
/// A 4-vector.
pub type Vec4<T = f32> = Vector<T, 4>;

//
// Free fns
//

/// Returns a 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Returns a vector with all components equal to `s`.
///
/// # Examples
/// ```
/// use gimbal_core::math::{splat, vec3, Vec3};
///
/// let v: Vec3 = splat(1.5);
/// assert_eq!(v, vec3(1.5, 1.5, 1.5));
/// ```
#[inline]
pub fn splat<T: Copy, const N: usize>(s: T) -> Vector<T, N> {
    Vector([s; N])
}

//
// Inherent impls
//

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the zero vector.
    #[inline]
    pub fn zero() -> Self {
        splat(T::ZERO)
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        let mut res = T::ZERO;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the length of `self` squared.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn len(&self) -> T {
        self.len_sqr().sqrt()
    }

    /// Returns `self` scaled to unit length.
    ///
    /// The result is non-finite if `self` has zero length.
    #[cfg(feature = "fp")]
    #[inline]
    #[must_use]
    pub fn normalize(&self) -> Self {
        *self / self.len()
    }

    /// Returns `self` with each component mapped through `f`.
    #[inline]
    #[must_use]
    pub fn map(self, mut f: impl FnMut(T) -> T) -> Self {
        Self(array::from_fn(|i| f(self.0[i])))
    }

    /// Converts the components of `self` to another scalar type.
    #[inline]
    pub fn cast<S: Float>(&self) -> Vector<S, N> {
        Vector(array::from_fn(|i| S::from_f64(self.0[i].to_f64())))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }
}

impl<T: Copy> Vec3<T> {
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }
}

impl<T: Copy> Vec4<T> {
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }
    /// Returns the w component of `self`.
    #[inline]
    pub fn w(&self) -> T {
        self.0[3]
    }
}

impl<T: Float> Vec3<T> {
    /// Returns the cross product of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::vec3;
    ///
    /// let z = vec3(1.0, 0.0, 0.0).cross(&vec3(0.0, 1.0, 0.0));
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }
}

//
// Local trait impls
//

impl<T: Float + ApproxEq, const N: usize> ApproxEq<Self, T> for Vector<T, N> {
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

impl<T: Float, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{N}")?;
        Debug::fmt(&self.0, f)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(els: [T; N]) -> Self {
        Self(els)
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Float, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] += rhs.0[i];
        }
    }
}

impl<T: Float, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl<T: Float, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for i in 0..N {
            self.0[i] *= rhs;
        }
    }
}

impl<T: Float, const N: usize> Add for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Float, const N: usize> Sub for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Float, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Float, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        self.map(|x| x / rhs)
    }
}

impl<T: Float, const N: usize> Neg for Vector<T, N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}
