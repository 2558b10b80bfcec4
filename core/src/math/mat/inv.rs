//! Determinants, minors, and matrix inversion.
//!
//! Two inversion algorithms are provided. Cofactor expansion
//! ([`invert`][Mat3x3::invert], [`inverse`][Mat3x3::inverse]) divides the
//! adjugate by the determinant and is exact up to rounding for well
//! conditioned matrices of the fixed sizes. Gauss-Jordan elimination with
//! partial pivoting ([`gj_invert`][Matrix::gj_invert],
//! [`gj_inverse`][Matrix::gj_inverse]) works for any `N` and is more robust
//! against large dynamic ranges.
//!
//! Both algorithms take an `exact_singular` flag. If `true`, a matrix is
//! considered singular only if its determinant (or a pivot) is exactly zero;
//! near-singular matrices are inverted anyway and may yield huge or
//! non-finite elements. If `false`, a matrix is also considered singular if
//! dividing by its determinant (or by a pivot) would overflow, that is, if
//! the divisor `d` is less than one and some element `a` to be divided
//! satisfies
//! ```text
//! |a| >= |d| / MIN_POSITIVE
//! ```
//! The test does not depend on the scale of the matrix, so for example
//! affine transforms with large translations remain invertible.
//!
//! In either case a singular matrix inverts to the identity. The `try_`
//! variants apply the second test and report singularity as an error.

use crate::math::float::Float;

use super::{Mat2x2, Mat3x3, Mat4x4, Matrix, SingularMatrix};

/// Returns whether dividing some of `elems` by `d` would overflow.
///
/// A divisor of magnitude at least one never overflows. Below that, the
/// quotient overflows if an element is at least `|d| / MIN_POSITIVE`. A
/// zero divisor always does.
fn quotient_overflows<T: Float>(
    elems: impl IntoIterator<Item = T>,
    d: T,
) -> bool {
    let d = d.abs();
    if d >= T::ONE {
        return false;
    }
    let limit = d / T::MIN_POSITIVE;
    elems.into_iter().any(|a| a.abs() >= limit)
}

impl<T: Float, const N: usize> Matrix<T, N> {
    /// Inverts `self` in place using Gauss-Jordan elimination.
    ///
    /// If `self` is singular, sets it to the identity instead.
    /// See the [module docs][self] for the meaning of `exact_singular`.
    pub fn gj_invert(&mut self, exact_singular: bool) -> &mut Self {
        *self = self.gj_inverse(exact_singular);
        self
    }

    /// Returns the inverse of `self` computed with Gauss-Jordan elimination.
    ///
    /// If `self` is singular, returns the identity instead.
    /// See the [module docs][self] for the meaning of `exact_singular`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::assert_approx_eq;
    /// use gimbal_core::math::Mat2x2;
    ///
    /// let m = Mat2x2::new([[4.0, 7.0], [2.0, 6.0]]);
    /// assert_approx_eq!(m * m.gj_inverse(true), Mat2x2::identity());
    ///
    /// let singular = Mat2x2::new([[3.0, 3.0], [5.0, 5.0]]);
    /// assert_eq!(singular.gj_inverse(true), Mat2x2::identity());
    /// ```
    #[must_use]
    pub fn gj_inverse(&self, exact_singular: bool) -> Self {
        self.gauss_jordan(exact_singular)
            .unwrap_or_else(Self::identity)
    }

    /// Returns the inverse of `self` computed with Gauss-Jordan elimination,
    /// or an error if `self` is numerically singular.
    ///
    /// # Errors
    /// Returns [`SingularMatrix`] if `self` is singular or nearly so.
    pub fn try_gj_inverse(&self) -> Result<Self, SingularMatrix> {
        self.gauss_jordan(false).ok_or(SingularMatrix)
    }

    fn gauss_jordan(&self, exact_singular: bool) -> Option<Self> {
        let mut t = *self;
        let mut s = Self::identity();

        // Forward elimination
        for i in 0..N {
            let mut pivot = i;
            let mut pivot_size = t.0[i][i].abs();
            for j in i + 1..N {
                let size = t.0[j][i].abs();
                if size > pivot_size {
                    pivot = j;
                    pivot_size = size;
                }
            }
            if pivot_size == T::ZERO {
                return None;
            }
            if pivot != i {
                t.0.swap(i, pivot);
                s.0.swap(i, pivot);
            }

            for j in i + 1..N {
                let f = t.0[j][i] / t.0[i][i];
                for k in 0..N {
                    t.0[j][k] = t.0[j][k] - f * t.0[i][k];
                    s.0[j][k] = s.0[j][k] - f * s.0[i][k];
                }
            }
        }

        // Backward substitution
        for i in (0..N).rev() {
            let f = t.0[i][i];
            if !exact_singular {
                let row = t.0[i].iter().chain(&s.0[i]).copied();
                if quotient_overflows(row, f) {
                    return None;
                }
            }
            for k in 0..N {
                t.0[i][k] = t.0[i][k] / f;
                s.0[i][k] = s.0[i][k] / f;
            }
            for j in 0..i {
                let f = t.0[j][i];
                for k in 0..N {
                    t.0[j][k] = t.0[j][k] - f * t.0[i][k];
                    s.0[j][k] = s.0[j][k] - f * s.0[i][k];
                }
            }
        }
        Some(s)
    }
}

/// Implements the cofactor inverses in terms of `determinant` and
/// `adjugate`.
macro_rules! impl_cofactor_inverse {
    ($($n:literal),+) => {$(
        impl<T: Float> Matrix<T, $n> {
            /// Inverts `self` in place by dividing its adjugate by its
            /// determinant.
            ///
            /// If `self` is singular, sets it to the identity instead.
            /// See the [module docs][self] for the meaning of
            /// `exact_singular`.
            pub fn invert(&mut self, exact_singular: bool) -> &mut Self {
                *self = self.inverse(exact_singular);
                self
            }

            /// Returns the inverse of `self`, computed by dividing its
            /// adjugate by its determinant.
            ///
            /// If `self` is singular, returns the identity instead.
            /// See the [module docs][self] for the meaning of
            /// `exact_singular`.
            #[must_use]
            pub fn inverse(&self, exact_singular: bool) -> Self {
                self.cofactor_inverse(exact_singular)
                    .unwrap_or_else(Self::identity)
            }

            /// Returns the inverse of `self`, or an error if `self` is
            /// numerically singular.
            ///
            /// # Errors
            /// Returns [`SingularMatrix`] if `self` is singular or nearly so.
            pub fn try_inverse(&self) -> Result<Self, SingularMatrix> {
                self.cofactor_inverse(false).ok_or(SingularMatrix)
            }

            fn cofactor_inverse(&self, exact_singular: bool) -> Option<Self> {
                let det = self.determinant();
                let adj = self.adjugate();
                let singular = if exact_singular {
                    det == T::ZERO
                } else {
                    quotient_overflows(adj.0.into_iter().flatten(), det)
                };
                (!singular).then(|| adj / det)
            }
        }
    )+};
}

impl_cofactor_inverse!(2, 3, 4);

impl<T: Float> Mat2x2<T> {
    /// Returns the determinant of `self`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Mat2x2;
    ///
    /// assert_eq!(Mat2x2::new([[4.0, 7.0], [2.0, 6.0]]).determinant(), 10.0);
    /// ```
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - c * b
    }

    /// Returns the adjugate of `self`, the transpose of its cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.0;
        Self([[d, -b], [-c, a]])
    }
}

impl<T: Float> Mat3x3<T> {
    /// Returns the determinant of the 2x2 submatrix with rows `r0` and `r1`
    /// and columns `c0` and `c1`, in that order.
    ///
    /// With cyclic indices, such as `(1, 2, 2, 0)`, this is the signed
    /// cofactor of the complementary element.
    #[inline]
    pub fn fast_minor(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> T {
        debug_assert!(r0 < 3 && r1 < 3 && c0 < 3 && c1 < 3);
        let m = &self.0;
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    }

    /// Returns the minor of element `(row, col)`: the determinant of the
    /// submatrix without row `row` and column `col`.
    ///
    /// # Panics
    /// If `row` or `col` is out of bounds.
    pub fn minor_of(&self, row: usize, col: usize) -> T {
        let [r0, r1] = complement::<2>(row);
        let [c0, c1] = complement::<2>(col);
        self.fast_minor(r0, r1, c0, c1)
    }

    /// Returns the determinant of `self`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Mat3x3;
    ///
    /// let m = Mat3x3::new([[1.0, 0.0, 5.0], [2.0, 1.0, 6.0], [3.0, 4.0, 0.0]]);
    /// assert_eq!(m.determinant(), 1.0);
    /// ```
    pub fn determinant(&self) -> T {
        let m = &self.0;
        m[0][0] * self.fast_minor(1, 2, 1, 2)
            + m[0][1] * self.fast_minor(1, 2, 2, 0)
            + m[0][2] * self.fast_minor(1, 2, 0, 1)
    }

    /// Returns the adjugate of `self`, the transpose of its cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::zero();
        for i in 0..3 {
            let (r0, r1) = ((i + 1) % 3, (i + 2) % 3);
            for j in 0..3 {
                let (c0, c1) = ((j + 1) % 3, (j + 2) % 3);
                adj.0[j][i] = self.fast_minor(r0, r1, c0, c1);
            }
        }
        adj
    }
}

impl<T: Float> Mat4x4<T> {
    /// Returns the determinant of the 3x3 submatrix with rows `r0`, `r1`,
    /// and `r2` and columns `c0`, `c1`, and `c2`, in that order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn fast_minor(
        &self,
        r0: usize,
        r1: usize,
        r2: usize,
        c0: usize,
        c1: usize,
        c2: usize,
    ) -> T {
        debug_assert!(r0 < 4 && r1 < 4 && r2 < 4);
        debug_assert!(c0 < 4 && c1 < 4 && c2 < 4);
        let m = &self.0;
        m[r0][c0] * (m[r1][c1] * m[r2][c2] - m[r1][c2] * m[r2][c1])
            + m[r0][c1] * (m[r1][c2] * m[r2][c0] - m[r1][c0] * m[r2][c2])
            + m[r0][c2] * (m[r1][c0] * m[r2][c1] - m[r1][c1] * m[r2][c0])
    }

    /// Returns the minor of element `(row, col)`: the determinant of the
    /// submatrix without row `row` and column `col`.
    ///
    /// # Panics
    /// If `row` or `col` is out of bounds.
    pub fn minor_of(&self, row: usize, col: usize) -> T {
        let [r0, r1, r2] = complement::<3>(row);
        let [c0, c1, c2] = complement::<3>(col);
        self.fast_minor(r0, r1, r2, c0, c1, c2)
    }

    /// Returns the determinant of `self`, expanded along the first row.
    pub fn determinant(&self) -> T {
        let m = &self.0;
        m[0][0] * self.minor_of(0, 0) - m[0][1] * self.minor_of(0, 1)
            + m[0][2] * self.minor_of(0, 2)
            - m[0][3] * self.minor_of(0, 3)
    }

    /// Returns the adjugate of `self`, the transpose of its cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                let minor = self.minor_of(i, j);
                adj.0[j][i] = if (i + j) % 2 == 0 { minor } else { -minor };
            }
        }
        adj
    }
}

/// Returns the indices `0..=M` except `i`, in ascending order.
fn complement<const M: usize>(i: usize) -> [usize; M] {
    assert!(i <= M, "index out of bounds: {i} > {M}");
    core::array::from_fn(|k| if k < i { k } else { k + 1 })
}
