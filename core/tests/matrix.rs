#![cfg(feature = "fp")]

use gimbal_core::assert_approx_eq;
use gimbal_core::math::rand::{Distrib, Uniform, Xorshift64};
use gimbal_core::prelude::*;

const TRIALS: usize = 100;

/// Returns a diagonal matrix with random elements in [0, 0.5).
fn random_diagonal<T: Float, const N: usize>(
    rng: &mut Xorshift64,
) -> Matrix<T, N>
where
    Uniform<T>: Distrib<Sample = T>,
{
    let d = Uniform(T::ZERO..T::HALF);
    let mut s = Matrix::identity();
    for i in 0..N {
        s[i][i] = d.sample(rng);
    }
    s
}

fn diagonal_product<T: Float, const N: usize>(s: &Matrix<T, N>) -> T {
    let mut p = T::ONE;
    for i in 0..N {
        p *= s[i][i];
    }
    p
}

/// Returns a random rotation `U`, diagonal `S`, and rotation `V`.
/// The determinant of `U * S * Vᵗ` then equals the product of the diagonal.
fn random_svd_2x2<T: Float>(
    rng: &mut Xorshift64,
) -> [Mat2x2<T>; 3]
where
    Uniform<T>: Distrib<Sample = T>,
{
    let angle = Uniform(T::ZERO..T::ONE);
    let u = Mat2x2::<T>::rotation(rads(angle.sample(rng)));
    let v = Mat2x2::<T>::rotation(rads(angle.sample(rng)));
    [u, random_diagonal::<T, _>(rng), v]
}

fn random_svd_3x3<T: Float>(
    rng: &mut Xorshift64,
) -> [Mat3x3<T>; 3]
where
    Uniform<T>: Distrib<Sample = T>,
{
    let angle = Uniform(T::ZERO..T::ONE);
    let u = Mat3x3::<T>::rotation(rads(angle.sample(rng)));
    let v = Mat3x3::<T>::rotation(rads(angle.sample(rng)));
    [u, random_diagonal::<T, _>(rng), v]
}

fn random_svd_4x4<T: Float>(
    rng: &mut Xorshift64,
) -> [Mat4x4<T>; 3]
where
    Uniform<T>: Distrib<Sample = T>,
{
    let dir = Uniform(splat(T::ZERO)..splat(T::ONE));
    let u = rotation_matrix(dir.sample(rng), dir.sample(rng));
    let v = rotation_matrix(dir.sample(rng), dir.sample(rng));
    [u, random_diagonal::<T, _>(rng), v]
}

mod determinant {
    use super::*;

    #[test]
    fn svd_2x2() {
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let [u, s, v] = random_svd_2x2::<f32>(&mut rng);
            let c = u * s * v.transpose();
            let diff = (c.determinant() - diagonal_product(&s)).abs();
            assert!(diff <= f32::EPSILON, "{c:?}: error {diff}");
        }
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let [u, s, v] = random_svd_2x2::<f64>(&mut rng);
            let c = u * s * v.transpose();
            let diff = (c.determinant() - diagonal_product(&s)).abs();
            assert!(diff <= f64::EPSILON, "{c:?}: error {diff}");
        }
    }

    #[test]
    fn svd_3x3() {
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let [u, s, v] = random_svd_3x3::<f32>(&mut rng);
            let c = u * s * v.transpose();
            let diff = (c.determinant() - diagonal_product(&s)).abs();
            assert!(diff <= f32::EPSILON, "{c:?}: error {diff}");
        }
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let [u, s, v] = random_svd_3x3::<f64>(&mut rng);
            let c = u * s * v.transpose();
            let diff = (c.determinant() - diagonal_product(&s)).abs();
            assert!(diff <= f64::EPSILON, "{c:?}: error {diff}");
        }
    }

    #[test]
    fn svd_4x4() {
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let [u, s, v] = random_svd_4x4::<f32>(&mut rng);
            let c = u * s * v.transpose();
            let diff = (c.determinant() - diagonal_product(&s)).abs();
            assert!(diff <= f32::EPSILON, "{c:?}: error {diff}");
        }
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let [u, s, v] = random_svd_4x4::<f64>(&mut rng);
            let c = u * s * v.transpose();
            let diff = (c.determinant() - diagonal_product(&s)).abs();
            assert!(diff <= f64::EPSILON, "{c:?}: error {diff}");
        }
    }

    #[test]
    fn rotations_have_unit_determinant() {
        let mut rng = Xorshift64::default();
        let [u, _, v] = random_svd_4x4::<f64>(&mut rng);
        assert_approx_eq!(u.determinant(), 1.0);
        assert_approx_eq!(v.determinant(), 1.0);
        assert_approx_eq!(u * u.transpose(), Mat4x4::identity());
    }
}

mod minors {
    use super::*;

    #[test]
    fn minor_of_equals_fast_minor_3x3() {
        let a = Mat3x3::new([
            [1.0f32, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        let b: Mat3x3<f64> = a.into();

        let cases = [
            ((0, 0), (1, 2, 1, 2)),
            ((0, 1), (1, 2, 0, 2)),
            ((0, 2), (1, 2, 0, 1)),
            ((1, 0), (0, 2, 1, 2)),
            ((1, 1), (0, 2, 0, 2)),
            ((1, 2), (0, 2, 0, 1)),
            ((2, 0), (0, 1, 1, 2)),
            ((2, 1), (0, 1, 0, 2)),
            ((2, 2), (0, 1, 0, 1)),
        ];
        for ((r, c), (r0, r1, c0, c1)) in cases {
            assert_eq!(a.minor_of(r, c), a.fast_minor(r0, r1, c0, c1));
            assert_eq!(b.minor_of(r, c), b.fast_minor(r0, r1, c0, c1));
        }
    }

    #[test]
    fn minor_of_equals_fast_minor_4x4() {
        let mut a = Mat4x4::<f64>::zero();
        for i in 0..4 {
            for j in 0..4 {
                a[i][j] = (4 * i + j + 1) as f64;
            }
        }
        let b: Mat4x4<f32> = a.cast();

        for r in 0..4 {
            for c in 0..4 {
                let [r0, r1, r2] = others(r);
                let [c0, c1, c2] = others(c);
                let (rs, cs) = ((r0, r1, r2), (c0, c1, c2));
                assert_eq!(
                    a.minor_of(r, c),
                    a.fast_minor(rs.0, rs.1, rs.2, cs.0, cs.1, cs.2)
                );
                assert_eq!(
                    b.minor_of(r, c),
                    b.fast_minor(rs.0, rs.1, rs.2, cs.0, cs.1, cs.2)
                );
            }
        }
    }

    fn others(i: usize) -> [usize; 3] {
        let mut res = [0; 3];
        let mut n = 0;
        for k in (0..4).filter(|&k| k != i) {
            res[n] = k;
            n += 1;
        }
        res
    }
}

mod inverse {
    use super::*;

    /// Returns a random diagonally dominant, thus well-conditioned, matrix.
    fn random_regular<const N: usize>(rng: &mut Xorshift64) -> Matrix<f64, N> {
        let d = Uniform(-1.0f64..1.0);
        let mut m = Matrix::identity() * (N as f64 + 1.0);
        for i in 0..N {
            for j in 0..N {
                m[i][j] += d.sample(rng);
            }
        }
        m
    }

    #[test]
    fn cofactor_and_gauss_jordan_agree() {
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let m: Mat2x2<f64> = random_regular(&mut rng);
            assert_approx_eq!(m.inverse(false), m.gj_inverse(false));
            let m: Mat3x3<f64> = random_regular(&mut rng);
            assert_approx_eq!(m.inverse(false), m.gj_inverse(false));
            let m: Mat4x4<f64> = random_regular(&mut rng);
            assert_approx_eq!(m.inverse(false), m.gj_inverse(false));
        }
    }

    #[test]
    fn inverse_is_inverse() {
        let mut rng = Xorshift64::default();
        for _ in 0..TRIALS {
            let m: Mat4x4<f64> = random_regular(&mut rng);
            assert_approx_eq!(m * m.inverse(true), Mat4x4::identity());
            assert_approx_eq!(m.gj_inverse(true) * m, Mat4x4::identity());
        }
    }

    #[test]
    fn in_place_and_copying_agree() {
        let mut rng = Xorshift64::default();
        for exact in [false, true] {
            let m: Mat3x3<f64> = random_regular(&mut rng);

            let mut a = m;
            a.invert(exact);
            assert_eq!(a, m.inverse(exact));

            let mut b = m;
            b.gj_invert(exact);
            assert_eq!(b, m.gj_inverse(exact));
        }
    }

    #[test]
    fn known_fixtures() {
        let singular = Mat2x2::new([[3.0f32, 3.0], [5.0, 5.0]]);
        for exact in [false, true] {
            assert_eq!(singular.inverse(exact), Mat2x2::identity());
            assert_eq!(singular.gj_inverse(exact), Mat2x2::identity());
        }
        assert!(singular.try_inverse().is_err());
        assert!(singular.try_gj_inverse().is_err());

        let m = Mat2x2::new([[4.0f64, 7.0], [2.0, 6.0]]);
        let expected = Mat2x2::new([[0.6, -0.7], [-0.2, 0.4]]);
        assert_approx_eq!(m.inverse(false), expected);
        assert_approx_eq!(m.gj_inverse(false), expected);
        assert_approx_eq!(m.try_inverse().unwrap(), expected);

        let m = Mat3x3::new([
            [1.0f64, 0.0, 5.0],
            [2.0, 1.0, 6.0],
            [3.0, 4.0, 0.0],
        ]);
        let expected = Mat3x3::new([
            [-24.0, 20.0, -5.0],
            [18.0, -15.0, 4.0],
            [5.0, -4.0, 1.0],
        ]);
        assert_approx_eq!(m.inverse(true), expected);
        assert_approx_eq!(m.gj_inverse(true), expected);
    }

    #[test]
    fn conversions_preserve_inverse() {
        let m = Mat3x3::new([
            [2.0f32, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [1.0, 1.0, 1.0],
        ]);
        let wide: Mat3x3<f64> = m.into();
        assert_eq!(wide.inverse(false).cast::<f32>(), m.inverse(false));

        let small = Mat2x2::from(m);
        assert_eq!(small.inverse(false), Mat2x2::new([[0.5, 0.0], [0.0, 0.25]]));
    }
}
