//! Inputs shared by the benchmarks.

use core::f32::consts::PI;

use gimbal_core::math::rand::{Distrib, Uniform, Xorshift64};
use gimbal_core::prelude::*;

/// Returns a rotation about random XYZ angles in (-π, π).
pub fn random_rotation(rng: &mut Xorshift64) -> Mat4x4 {
    let angles = Uniform(splat(-PI)..splat(PI)).sample(rng);
    Euler::from_vec(angles, Order::XYZ).to_mat4x4()
}

/// Returns a random matrix that is far from singular.
pub fn random_regular<const N: usize>(
    rng: &mut Xorshift64,
) -> Matrix<f32, N> {
    let noise = Uniform(-1.0f32..1.0);
    let mut m = Matrix::identity() * (N as f32 + 1.0);
    for i in 0..N {
        for j in 0..N {
            m[i][j] += noise.sample(rng);
        }
    }
    m
}
