//! Pseudo-random number generation.
//!
//! Used to generate inputs for property tests and benchmarks. The generator
//! is deterministic: the same seed always yields the same sequence.

use core::{array, ops::Range};

use crate::math::vec::Vector;

//
// Traits and types
//

type DefaultRng = Xorshift64;

/// Trait for generating values sampled from a probability distribution.
pub trait Distrib<R = DefaultRng>: Clone {
    /// The type of the elements of the sample space of `Self`.
    type Sample;

    /// Returns a pseudo-random value sampled from `self`.
    fn sample(&self, rng: &mut R) -> Self::Sample;

    /// Returns an iterator that yields samples from `self`.
    fn iter(&self, rng: R) -> Iter<Self, R> {
        Iter(self.clone(), rng)
    }
}

/// A pseudo-random number generator (PRNG) that uses a [Xorshift algorithm][^1]
/// to generate 64 bits of randomness at a time, represented by a `u64`.
///
/// Xorshift64 has a period of 2<sup>64</sup>-1: it yields every number in
/// the interval [1, 2<sup>64</sup>) exactly once before repeating.
///
/// [^1]: Marsaglia, G. (2003). Xorshift RNGs. Journal of Statistical Software,
///     8(14), 1–6. <https://doi.org/10.18637/jss.v008.i14>
#[derive(Copy, Clone, Debug)]
#[repr(transparent)]
pub struct Xorshift64(pub u64);

/// A uniform distribution of floating-point values in the given half-open
/// range.
///
/// Arrays and vectors are sampled component-wise, yielding points uniformly
/// distributed in an axis-aligned box.
#[derive(Clone, Debug)]
pub struct Uniform<T>(pub Range<T>);

/// Iterator returned by the [`Distrib::iter()`] method.
#[derive(Clone, Debug)]
pub struct Iter<D, R>(D, R);

//
// Inherent impls
//

impl Xorshift64 {
    /// A random 64-bit prime, used to seed the generator returned by
    /// [`Xorshift64::default()`].
    pub const DEFAULT_SEED: u64 = 378682147834061;

    /// Returns a new `Xorshift64` seeded by the given number.
    ///
    /// # Examples
    /// ```
    /// # use gimbal_core::math::rand::Xorshift64;
    /// let mut g = Xorshift64::from_seed(123);
    /// assert_eq!(g.next_bits(), 133101616827);
    /// assert_eq!(g.next_bits(), 12690785413091508870);
    /// assert_eq!(g.next_bits(), 7516749944291143043);
    /// ```
    ///
    /// # Panics
    /// If `seed` equals 0.
    pub fn from_seed(seed: u64) -> Self {
        assert_ne!(seed, 0, "xorshift seed cannot be zero");
        Self(seed)
    }

    /// Returns 64 bits of pseudo-randomness.
    pub fn next_bits(&mut self) -> u64 {
        let Self(x) = self;
        *x ^= *x << 13;
        *x ^= *x >> 7;
        *x ^= *x << 17;
        *x
    }
}

//
// Foreign trait impls
//

impl<D: Distrib> Iterator for Iter<D, DefaultRng> {
    type Item = D::Sample;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.0.sample(&mut self.1))
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self::from_seed(Self::DEFAULT_SEED)
    }
}

//
// Local trait impls
//

impl Distrib for Uniform<f32> {
    type Sample = f32;

    /// Returns a uniformly distributed `f32` in the given range.
    fn sample(&self, rng: &mut DefaultRng) -> f32 {
        let Range { start, end } = self.0;
        // Bit repr of a random f32 in range 1.0..2.0
        let bits = 127 << 23 | rng.next_bits() >> 41;
        let unit = f32::from_bits(bits as u32) - 1.0;
        unit * (end - start) + start
    }
}

impl Distrib for Uniform<f64> {
    type Sample = f64;

    /// Returns a uniformly distributed `f64` in the given range.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::rand::{Distrib, Uniform, Xorshift64};
    ///
    /// let mut rng = Xorshift64::default();
    /// let x = Uniform(-1.0..1.0).sample(&mut rng);
    /// assert_eq!(x, 0.59846438211273 * 2.0 - 1.0);
    /// ```
    fn sample(&self, rng: &mut DefaultRng) -> f64 {
        let Range { start, end } = self.0;
        // Bit repr of a random f64 in range 1.0..2.0
        let bits = 1023 << 52 | rng.next_bits() >> 12;
        let unit = f64::from_bits(bits) - 1.0;
        unit * (end - start) + start
    }
}

impl<T, O, const N: usize> Distrib for Uniform<[T; N]>
where
    T: Copy,
    Uniform<T>: Distrib<Sample = O>,
{
    type Sample = [O; N];

    /// Returns an array of values that represents a uniformly distributed
    /// point within the N-dimensional box bounded by `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> [O; N] {
        array::from_fn(|i| Uniform(self.0.start[i]..self.0.end[i]).sample(rng))
    }
}

impl<T, const N: usize> Distrib for Uniform<Vector<T, N>>
where
    T: Copy,
    Uniform<[T; N]>: Distrib<Sample = [T; N]>,
{
    type Sample = Vector<T, N>;

    /// Returns a uniformly distributed vector within the box bounded by
    /// `self.0`.
    fn sample(&self, rng: &mut DefaultRng) -> Vector<T, N> {
        Uniform(self.0.start.0..self.0.end.0).sample(rng).into()
    }
}

#[cfg(test)]
#[allow(clippy::manual_range_contains)]
mod tests {
    use crate::math::vec::{vec3, Vec3};

    use super::*;

    const COUNT: usize = 1000;

    fn rng() -> DefaultRng {
        Default::default()
    }

    #[test]
    #[should_panic]
    fn zero_seed() {
        let _ = Xorshift64::from_seed(0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = Uniform(0.0f32..1.0).iter(Xorshift64::from_seed(42));
        let b = Uniform(0.0f32..1.0).iter(Xorshift64::from_seed(42));
        assert!(a.zip(b).take(COUNT).all(|(a, b)| a == b));
    }

    #[test]
    fn uniform_f32() {
        let dist = Uniform(-1.23f32..4.56);
        for r in dist.iter(rng()).take(COUNT) {
            assert!(-1.23 <= r && r < 4.56);
        }
    }

    #[test]
    fn uniform_f64() {
        let dist = Uniform(-1e-7f64..1e-7);
        let mut sum = 0.0;
        for r in dist.iter(rng()).take(COUNT) {
            assert!(-1e-7 <= r && r < 1e-7);
            sum += r;
        }
        assert!((sum / COUNT as f64).abs() < 1e-8);
    }

    #[test]
    fn uniform_f32_array() {
        let dist = Uniform([0.0f32, -10.0]..[10.0, 15.0]);
        for [x, y] in dist.iter(rng()).take(COUNT) {
            assert!(0.0 <= x && x < 10.0);
            assert!(-10.0 <= y && y < 15.0);
        }
    }

    #[test]
    fn uniform_vec3() {
        let dist = Uniform(vec3(-2.0f64, 0.0, -1.0)..vec3(1.0, 2.0, 3.0));

        let mut mean: Vec3<f64> = Vec3::zero();
        for v in dist.iter(rng()).take(COUNT) {
            assert!(-2.0 <= v.x() && v.x() < 1.0);
            assert!(0.0 <= v.y() && v.y() < 2.0);
            assert!(-1.0 <= v.z() && v.z() < 3.0);
            mean += v / COUNT as f64;
        }
        let off = mean - vec3(-0.5, 1.0, 1.0);
        assert!(off.len_sqr() < 0.01, "mean too far from center: {mean:?}");
    }
}
