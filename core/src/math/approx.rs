//! Testing and asserting approximate equality.

use core::iter::zip;

use super::float::Float;

/// Trait for testing approximate equality.
///
/// Floating-point types are only an approximation of real numbers due to their
/// finite precision. The presence of rounding errors means that two floats may
/// not compare equal even if their counterparts in ℝ would. Even such a simple
/// expression as `0.1 + 0.2 == 0.3` will evaluate to false due to precision
/// issues.
///
/// Approximate equality is a more robust way to compare floating-point values
/// than strict equality. Two values are considered approximately equal if their
/// absolute difference is less than some small value, "epsilon". The choice of
/// the epsilon value is not an exact science, and depends on how much error
/// has accrued in the computation of the values.
///
/// Moreover, due to the nature of floating point, a naive comparison against
/// a fixed value does not work well. Rather, the epsilon should be *relative*
/// to the magnitude of the values being compared.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon of type `E`.
    fn relative_epsilon() -> Epsilon;
}

/// Returns whether `a` and `b` differ by at most `t`.
///
/// # Examples
/// ```
/// use gimbal_core::math::approx::equal;
///
/// assert!(equal(1.0, 1.05, 0.1));
/// assert!(!equal(1.0, 1.5, 0.1));
/// ```
#[inline]
pub fn equal<T: Float>(a: T, b: T, t: T) -> bool {
    (a - b).abs() <= t
}

/// Returns whether `a` and `b` differ by at most `e` times the magnitude
/// of `a`.
///
/// Unlike [`ApproxEq`], the tolerance has no lower bound, so only an exact
/// zero is considered equal to zero.
///
/// # Examples
/// ```
/// use gimbal_core::math::approx::equal_with_rel_error;
///
/// assert!(equal_with_rel_error(1000.0, 1001.0, 1e-3));
/// assert!(!equal_with_rel_error(1.0, 1.01, 1e-3));
/// ```
#[inline]
pub fn equal_with_rel_error<T: Float>(a: T, b: T, e: T) -> bool {
    (a - b).abs() <= e * a.abs()
}

macro_rules! impl_approx_eq {
    ($($t:ty = $eps:literal),+) => {$(
        impl ApproxEq for $t {
            fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
                let diff = Float::abs(self - other);
                diff <= *rel_eps * Float::abs(*self).max(1.0)
            }

            fn relative_epsilon() -> Self {
                $eps
            }
        }
    )+};
}

impl_approx_eq!(f32 = 1e-6, f64 = 1e-12);

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: ApproxEq<T, E>> ApproxEq<Self, E> for Option<T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, rel_eps),
            (Some(_), None) | (None, Some(_)) => false,
            (None, None) => true,
        }
    }

    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// `assert_eq` would fail, but `assert_approx_eq` passes:
/// ```
/// # use gimbal_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A relative epsilon is used:
/// ```
/// # use gimbal_core::assert_approx_eq;
/// assert_ne!(1e7f32, 1e7 + 1.0);
/// assert_approx_eq!(1e7f32, 1e7 + 1.0);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use gimbal_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
/// Like `assert_eq`, this macro supports custom panic messages.
/// The epsilon, if present, must come before the format string.
/// ```should_panic
/// # use gimbal_core::assert_approx_eq;
/// assert_approx_eq!(f32::sin(3.14), 0.0, eps = 0.0001,
///     "3.14 is not a good approximation of {}!", core::f32::consts::PI);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    mod f32 {
        #[test]
        fn approx_eq_zero() {
            assert_approx_eq!(0.0f32, 0.0);
            assert_approx_eq!(-0.0f32, 0.0);
            assert_approx_eq!(0.0f32, -0.0);
        }

        #[test]
        fn approx_eq_positive() {
            assert_approx_eq!(0.0f32, 0.0000001);
            assert_approx_eq!(0.0000001f32, 0.0);
            assert_approx_eq!(0.9999999f32, 1.0);
            assert_approx_eq!(1.0f32, 1.0000001);
            assert_approx_eq!(1.0e10f32, 1.0000001e10);
        }

        #[test]
        fn approx_eq_negative() {
            assert_approx_eq!(0.0f32, -0.0000001);
            assert_approx_eq!(-0.0000001f32, 0.0);
            assert_approx_eq!(-1.0f32, -1.0000001);
            assert_approx_eq!(-0.9999999f32, -1.0);
            assert_approx_eq!(-1.0e10f32, -1.0000001e10);
        }

        #[test]
        fn approx_eq_custom_epsilon() {
            assert_approx_eq!(0.0f32, 0.001, eps = 0.01);
            assert_approx_eq!(0.0f32, -0.001, eps = 0.01);
            assert_approx_eq!(1.0f32, 0.999, eps = 0.01);
            assert_approx_eq!(100.0f32, 99.9, eps = 0.01);
        }

        #[test]
        #[should_panic]
        fn zero_not_approx_eq_to_one() {
            assert_approx_eq!(0.0f32, 1.0);
        }
        #[test]
        #[should_panic]
        fn one_not_approx_eq_to_1_00001() {
            assert_approx_eq!(1.0f32, 1.00001);
        }
        #[test]
        #[should_panic]
        fn inf_not_approx_eq_to_inf() {
            assert_approx_eq!(f32::INFINITY, f32::INFINITY);
        }
        #[test]
        #[should_panic]
        fn nan_not_approx_eq_to_nan() {
            assert_approx_eq!(f32::NAN, f32::NAN);
        }
    }

    mod f64 {
        #[test]
        fn approx_eq_tighter_than_f32() {
            assert_approx_eq!(1.0f64, 1.0 + 1e-13);
            assert_approx_eq!(1.0e20f64, 1.0e20 + 1.0e7);
        }

        #[test]
        #[should_panic]
        fn f32_precision_not_enough() {
            assert_approx_eq!(1.0f64, 1.0000001);
        }
    }

    #[test]
    fn arrays_and_options() {
        assert_approx_eq!([1.0f32, 2.0, 3.0], [1.0, 2.0000001, 3.0]);
        assert!(![1.0f32, 2.0].approx_eq(&[1.0, 2.1]));
        assert!([0.5f64; 3][..].approx_eq(&[0.5; 3][..]));
        assert!(Some(1.0f64).approx_eq(&Some(1.0)));
        assert!(!Some(1.0f64).approx_eq(&None));
    }

    #[test]
    fn absolute_tolerance() {
        assert!(equal(0.0f32, 0.001, 0.001));
        assert!(equal(-5.0f64, -5.5, 0.5));
        assert!(!equal(1.0f32, 1.1, 0.01));
    }

    #[test]
    fn relative_tolerance() {
        assert!(equal_with_rel_error(100.0f32, 100.5, 0.01));
        assert!(!equal_with_rel_error(0.01f64, 0.02, 0.5));
        assert!(equal_with_rel_error(0.0f64, 0.0, 0.0));
        assert!(!equal_with_rel_error(0.0f32, 1e-30, 0.1));
    }
}
