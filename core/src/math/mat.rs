//! Square matrices of sizes 2x2, 3x3, and 4x4.
//!
//! Matrices follow the row-vector convention: a vector `v` is transformed
//! by a matrix `M` as `v * M`, and the product `A * B` is the transform that
//! applies `A` first, then `B`. Accordingly, the translation part of an
//! affine matrix lives in its last row.
//!
//! Determinants, minors, and inverses are implemented in [`inv`], and
//! constructors of rotations, scalings, shears, and translations in
//! [`xform`].

use core::array;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use crate::math::approx::ApproxEq;
use crate::math::float::Float;
use crate::math::vec::{Vec2, Vec3, Vector};

pub mod inv;
pub mod xform;

//
// Types
//

/// A square matrix of `N` rows and `N` columns of scalars.
///
/// Elements are stored row-major and addressed as `m[row][col]`.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<T, const N: usize>(pub [[T; N]; N]);

/// A 2x2 matrix, representing a linear transform of 2-space.
pub type Mat2x2<T = f32> = Matrix<T, 2>;
/// A 3x3 matrix, representing either a linear transform of 3-space or an
/// affine transform of 2-space.
pub type Mat3x3<T = f32> = Matrix<T, 3>;
/// A 4x4 matrix, representing an affine transform of 3-space.
pub type Mat4x4<T = f32> = Matrix<T, 4>;

/// Error returned when attempting to invert a singular matrix.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SingularMatrix;

//
// Free fns
//

/// Returns the outer product of `a` and `b`.
///
/// That is, returns the matrix `M` where `M[i][j] = a[i] * b[j]`.
///
/// # Examples
/// ```
/// use gimbal_core::math::{outer_product, vec2, Matrix};
///
/// let m = outer_product(&vec2(1.0, 2.0), &vec2(3.0, 4.0));
/// assert_eq!(m, Matrix::new([[3.0, 4.0], [6.0, 8.0]]));
/// ```
pub fn outer_product<T: Float, const N: usize>(
    a: &Vector<T, N>,
    b: &Vector<T, N>,
) -> Matrix<T, N> {
    Matrix(array::from_fn(|i| array::from_fn(|j| a[i] * b[j])))
}

//
// Inherent impls
//

impl<T, const N: usize> Matrix<T, N> {
    /// Returns a matrix with the given rows.
    #[inline]
    pub const fn new(els: [[T; N]; N]) -> Self {
        Self(els)
    }
}

impl<T: Float, const N: usize> Matrix<T, N> {
    /// Returns the identity matrix.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Mat2x2;
    ///
    /// assert_eq!(Mat2x2::<f32>::identity().0, [[1.0, 0.0], [0.0, 1.0]]);
    /// ```
    pub fn identity() -> Self {
        Self(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::ONE } else { T::ZERO })
        }))
    }

    /// Returns a matrix with all elements zero.
    pub fn zero() -> Self {
        Self([[T::ZERO; N]; N])
    }

    /// Sets `self` to the identity matrix.
    pub fn make_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Returns the transpose of `self`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Mat2x2;
    ///
    /// let m = Mat2x2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.transpose(), Mat2x2::new([[1.0, 3.0], [2.0, 4.0]]));
    /// ```
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| self.0[j][i])))
    }

    /// Returns the row `i` of `self` as a vector.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<T, N> {
        Vector(self.0[i])
    }

    /// Returns the column `i` of `self` as a vector.
    ///
    /// # Panics
    /// If `i >= N`.
    #[inline]
    pub fn col(&self, i: usize) -> Vector<T, N> {
        Vector(array::from_fn(|j| self.0[j][i]))
    }

    /// Returns a copy of `self` with elements converted to another scalar
    /// type, rounding to nearest if the target is narrower.
    pub fn cast<S: Float>(&self) -> Matrix<S, N> {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| S::from_f64(self.0[i][j].to_f64()))
        }))
    }

    /// Overwrites `self` with the elements of `other`, converted to `T`.
    pub fn set_value<S: Float>(&mut self, other: &Matrix<S, N>) -> &mut Self {
        *self = other.cast();
        self
    }

    /// Returns the composition of `self` and `other`.
    ///
    /// Equivalent to `self * other`: the result applies `self` first.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let mut res = Self::zero();
        for i in 0..N {
            for j in 0..N {
                let mut sum = T::ZERO;
                for k in 0..N {
                    sum += self.0[i][k] * other.0[k][j];
                }
                res.0[i][j] = sum;
            }
        }
        res
    }
}

impl<T: Float> Mat3x3<T> {
    /// Returns an affine 2D matrix with linear part `m` and translation `t`.
    pub fn from_parts(m: Mat2x2<T>, t: Vec2<T>) -> Self {
        let [[a, b], [c, d]] = m.0;
        let (o, l) = (T::ZERO, T::ONE);
        Self([[a, b, o], [c, d, o], [t[0], t[1], l]])
    }
}

impl<T: Float> Mat4x4<T> {
    /// Returns an affine 3D matrix with linear part `m` and translation `t`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{vec3, Mat3x3, Mat4x4};
    ///
    /// let m = Mat4x4::from_parts(Mat3x3::identity(), vec3(1.0f32, 2.0, 3.0));
    /// assert_eq!(m.row(3).0, [1.0, 2.0, 3.0, 1.0]);
    /// ```
    pub fn from_parts(m: Mat3x3<T>, t: Vec3<T>) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = m.0;
        let (o, l) = (T::ZERO, T::ONE);
        Self([
            [a, b, c, o],
            [d, e, f, o],
            [g, h, i, o],
            [t[0], t[1], t[2], l],
        ])
    }
}

//
// Local trait impls
//

impl<T: Float + ApproxEq, const N: usize> ApproxEq<Self, T> for Matrix<T, N> {
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

impl<T: Float, const N: usize> Default for Matrix<T, N> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Debug, const N: usize> Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix<{N}x{N}>[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(els: [[T; N]; N]) -> Self {
        Self(els)
    }
}

impl<const N: usize> From<Matrix<f32, N>> for Matrix<f64, N> {
    fn from(m: Matrix<f32, N>) -> Self {
        m.cast()
    }
}

impl<T: Copy> From<Mat3x3<T>> for Mat2x2<T> {
    /// Returns the upper left 2x2 block of `m`.
    fn from(m: Mat3x3<T>) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| m.0[i][j])))
    }
}

impl<T: Copy> From<Mat4x4<T>> for Mat3x3<T> {
    /// Returns the upper left 3x3 block of `m`.
    fn from(m: Mat4x4<T>) -> Self {
        Self(array::from_fn(|i| array::from_fn(|j| m.0[i][j])))
    }
}

impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = [T; N];
    #[inline]
    fn index(&self, row: usize) -> &[T; N] {
        &self.0[row]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut [T; N] {
        &mut self.0[row]
    }
}

impl<T: Float, const N: usize> AddAssign for Matrix<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (r, s) in self.0.iter_mut().zip(rhs.0) {
            for (a, b) in r.iter_mut().zip(s) {
                *a += b;
            }
        }
    }
}

impl<T: Float, const N: usize> SubAssign for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (r, s) in self.0.iter_mut().zip(rhs.0) {
            for (a, b) in r.iter_mut().zip(s) {
                *a -= b;
            }
        }
    }
}

impl<T: Float, const N: usize> MulAssign<T> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.0.iter_mut().flatten().for_each(|a| *a *= rhs);
    }
}

impl<T: Float, const N: usize> DivAssign<T> for Matrix<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.0.iter_mut().flatten().for_each(|a| *a /= rhs);
    }
}

impl<T: Float, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.then(&rhs);
    }
}

impl<T: Float, const N: usize> Add for Matrix<T, N> {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: Float, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: Float, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;
    fn neg(mut self) -> Self {
        self.0.iter_mut().flatten().for_each(|a| *a = -*a);
        self
    }
}

impl<T: Float, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.then(&rhs)
    }
}

impl<T: Float, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;
    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: Float, const N: usize> Div<T> for Matrix<T, N> {
    type Output = Self;
    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

impl<const N: usize> Mul<Matrix<f32, N>> for f32 {
    type Output = Matrix<f32, N>;
    fn mul(self, rhs: Matrix<f32, N>) -> Matrix<f32, N> {
        rhs * self
    }
}

impl<const N: usize> Mul<Matrix<f64, N>> for f64 {
    type Output = Matrix<f64, N>;
    fn mul(self, rhs: Matrix<f64, N>) -> Matrix<f64, N> {
        rhs * self
    }
}

impl<T: Float, const N: usize> Mul<Matrix<T, N>> for Vector<T, N> {
    type Output = Self;

    /// Multiplies the row vector `self` by `rhs`.
    fn mul(self, rhs: Matrix<T, N>) -> Self {
        Vector(array::from_fn(|j| {
            let mut sum = T::ZERO;
            for i in 0..N {
                sum += self[i] * rhs.0[i][j];
            }
            sum
        }))
    }
}

impl Display for SingularMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("cannot invert singular matrix")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SingularMatrix {}
