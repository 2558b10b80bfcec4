//! Euler angles.
//!
//! An [`Euler`] represents an orientation as three successive rotations
//! about coordinate axes. Which axes, in which sequence, and whether the
//! axes are fixed in the world or move with the rotated body, is determined
//! by the [`Order`] of the angles.
//!
//! Twenty-four orders exist: six sequences of three distinct axes (such as
//! `XYZ`) and six sequences where the first axis repeats as the last one
//! (such as `XYX`), each in a *static* (world frame) and a *relative*
//! (body frame) variant. The relative variants carry an `r` suffix.
//!
//! # Layout
//!
//! An `Euler` stores its angles in *ijk layout*: the first angle is the
//! rotation applied first. For static orders, this is the rotation about the
//! [initial axis][Order::initial_axis]. A relative order applies its angles
//! about the body axes, which equals applying them about the world axes in
//! reverse sequence.
//!
//! The *xyz layout*, used by [`Euler::to_xyz`] and [`Euler::from_xyz`],
//! instead places each angle in the component of the axis it rotates about.
//! For repeated orders, the angle of the repeated axis goes to the component
//! of the axis that does not participate.
//!
//! # Extraction
//!
//! Converting a rotation matrix back to Euler angles is only well defined
//! for pure rotations. Other matrices, such as ones containing a scaling,
//! yield angles on a best-effort basis. At *gimbal lock*, where the first
//! and the last axis of rotation coincide, the decomposition is not unique,
//! and one of the valid answers is returned.

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use crate::math::angle::{Angle, rads};
use crate::math::approx::ApproxEq;
use crate::math::float::Float;
use crate::math::mat::{Mat3x3, Mat4x4, Matrix};
use crate::math::vec::{Vec3, Vector, vec3};

use Order::*;

//
// Types
//

/// A coordinate axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// The sequence and frame of reference of the rotations of an [`Euler`].
///
/// Every order is identified by a 16-bit code `0xABCD` whose hex digits
/// encode, in order:
/// * A: the initial axis, 0 for x, 1 for y, or 2 for z,
/// * B: 1 if the parity of the axis permutation is even,
/// * C: 1 if the initial axis is repeated as the last one,
/// * D: 1 if the frame is static, 0 if it is relative.
///
/// The code is the discriminant of each variant.
#[repr(u16)]
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Order {
    #[default]
    XYZ = 0x0101,
    XZY = 0x0001,
    YZX = 0x1101,
    YXZ = 0x1001,
    ZXY = 0x2101,
    ZYX = 0x2001,

    XZX = 0x0011,
    XYX = 0x0111,
    YXY = 0x1011,
    YZY = 0x1111,
    ZYZ = 0x2011,
    ZXZ = 0x2111,

    XYZr = 0x2000,
    XZYr = 0x2100,
    YZXr = 0x1000,
    YXZr = 0x1100,
    ZXYr = 0x0000,
    ZYXr = 0x0100,

    XZXr = 0x2110,
    XYXr = 0x2010,
    YXYr = 0x1110,
    YZYr = 0x1010,
    ZYZr = 0x0110,
    ZXZr = 0x0010,
}

/// Error returned when converting a value to an [`Order`] fails.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The code is not that of any order.
    InvalidCode(u16),
    /// The string is not the name of any order.
    UnknownName,
}

/// Three angles of rotation and the order in which to apply them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Euler<T = f32> {
    angles: Vec3<T>,
    order: Order,
}

//
// Free fns
//

/// Extracts the angles of a rotation in `XYZ` order from `m`.
///
/// Only the upper-left 3x3 part of `m` is used. Its rows are normalized
/// first, so any scaling in `m` does not affect the result.
///
/// # Examples
/// ```
/// use gimbal_core::assert_approx_eq;
/// use gimbal_core::math::{extract_euler_xyz, vec3, Mat4x4, Order};
///
/// let r = vec3(0.1, -0.2, 0.3);
/// let e = extract_euler_xyz(&Mat4x4::euler_angles(r));
/// assert_eq!(e.order(), Order::XYZ);
/// assert_approx_eq!(e.angles(), r, eps = 1e-6);
/// ```
pub fn extract_euler_xyz<T: Float>(m: &Mat4x4<T>) -> Euler<T> {
    let m = normalize_rows(Mat3x3::from(*m));

    // Undo the rotation about x, leaving a rotation about y and z
    let x = m[1][2].atan2(m[2][2]);
    let n = axis_rotation(Axis::X, -x) * m;

    let cy = (n[0][0] * n[0][0] + n[0][1] * n[0][1]).sqrt();
    let y = (-n[0][2]).atan2(cy);
    let z = (-n[1][0]).atan2(n[1][1]);

    Euler::from_vec(vec3(x, y, z), XYZ)
}

/// Extracts the angles of a rotation in `ZYX` order from `m`.
///
/// Only the upper-left 3x3 part of `m` is used. Its rows are normalized
/// first, so any scaling in `m` does not affect the result.
pub fn extract_euler_zyx<T: Float>(m: &Mat4x4<T>) -> Euler<T> {
    let m = normalize_rows(Mat3x3::from(*m));

    let z = -m[1][0].atan2(m[0][0]);
    let n = axis_rotation(Axis::Z, -z) * m;

    let cy = (n[2][2] * n[2][2] + n[2][1] * n[2][1]).sqrt();
    let y = -(-n[2][0]).atan2(cy);
    let x = -(-n[1][2]).atan2(n[1][1]);

    Euler::from_vec(vec3(z, y, x), ZYX)
}

/// Extracts the angle of a 2D rotation from `m`.
///
/// `m` is either a 2x2 linear or a 3x3 affine matrix. Only the upper-left
/// 2x2 part is used. Its rows are normalized first, so any scaling in `m`
/// does not affect the result.
///
/// # Examples
/// ```
/// use gimbal_core::assert_approx_eq;
/// use gimbal_core::math::{degs, extract_euler_2d, Mat3x3};
///
/// let m = Mat3x3::rotation(degs(30.0));
/// assert_approx_eq!(extract_euler_2d(&m), degs(30.0));
/// ```
pub fn extract_euler_2d<T: Float, const N: usize>(
    m: &Matrix<T, N>,
) -> Angle<T> {
    let [i, j] = [0, 1].map(|r| {
        let row = Vector([m[r][0], m[r][1]]);
        row.normalize()
    });
    rads(-j[0].atan2(i[0]))
}

/// Returns the rotation by `a` radians about the axis `ax`.
fn axis_rotation<T: Float>(ax: Axis, a: T) -> Mat3x3<T> {
    let (j, k) = ((ax as usize + 1) % 3, (ax as usize + 2) % 3);
    let (s, c) = a.sin_cos();
    let mut m = Mat3x3::identity();
    m[j][j] = c;
    m[k][k] = c;
    m[j][k] = s;
    m[k][j] = -s;
    m
}

fn normalize_rows<T: Float>(m: Mat3x3<T>) -> Mat3x3<T> {
    Matrix(m.0.map(|row| Vector(row).normalize().0))
}

//
// Inherent impls
//

impl Axis {
    /// Returns the axis with index `i`, where 0 is x, 1 is y, and 2 is z.
    ///
    /// # Panics
    /// If `i > 2`.
    pub const fn from_index(i: usize) -> Self {
        match i {
            0 => Self::X,
            1 => Self::Y,
            2 => Self::Z,
            _ => panic!("axis index out of range"),
        }
    }
}

impl Order {
    /// All twenty-four orders.
    pub const ALL: [Self; 24] = [
        XYZ, XZY, YZX, YXZ, ZXY, ZYX, //
        XZX, XYX, YXY, YZY, ZYZ, ZXZ, //
        XYZr, XZYr, YZXr, YXZr, ZXYr, ZYXr, //
        XZXr, XYXr, YXYr, YZYr, ZYZr, ZXZr,
    ];

    /// Returns the code of `self`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Order;
    ///
    /// assert_eq!(Order::XYZ.code(), 0x0101);
    /// assert_eq!(Order::ZXZr.code(), 0x0010);
    /// ```
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Returns the name of `self`, such as `"XYZ"` or `"XZXr"`.
    pub const fn name(self) -> &'static str {
        match self {
            XYZ => "XYZ",
            XZY => "XZY",
            YZX => "YZX",
            YXZ => "YXZ",
            ZXY => "ZXY",
            ZYX => "ZYX",
            XZX => "XZX",
            XYX => "XYX",
            YXY => "YXY",
            YZY => "YZY",
            ZYZ => "ZYZ",
            ZXZ => "ZXZ",
            XYZr => "XYZr",
            XZYr => "XZYr",
            YZXr => "YZXr",
            YXZr => "YXZr",
            ZXYr => "ZXYr",
            ZYXr => "ZYXr",
            XZXr => "XZXr",
            XYXr => "XYXr",
            YXYr => "YXYr",
            YZYr => "YZYr",
            ZYZr => "ZYZr",
            ZXZr => "ZXZr",
        }
    }

    /// Returns the first axis of rotation of the static equivalent of `self`.
    pub const fn initial_axis(self) -> Axis {
        Axis::from_index(((self.code() >> 12) & 0x3) as usize)
    }

    /// Returns whether the axis permutation of `self` is even.
    pub const fn is_parity_even(self) -> bool {
        (self.code() >> 8) & 1 == 1
    }

    /// Returns whether the initial axis is repeated as the last one.
    pub const fn is_initial_repeated(self) -> bool {
        (self.code() >> 4) & 1 == 1
    }

    /// Returns whether the angles are relative to the fixed world frame
    /// rather than to the rotating body frame.
    pub const fn is_frame_static(self) -> bool {
        self.code() & 1 == 1
    }

    /// Returns the indices `[i, j, k]` of the axes of the static equivalent
    /// of `self`.
    ///
    /// The axes are always distinct; for repeated orders, the axis `k` does
    /// not take part in the rotation and `i` fires twice instead.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Order;
    ///
    /// assert_eq!(Order::XZY.axes(), [0, 2, 1]);
    /// assert_eq!(Order::ZYZ.axes(), [2, 1, 0]);
    /// assert_eq!(Order::XYZr.axes(), [2, 1, 0]);
    /// ```
    pub const fn axes(self) -> [usize; 3] {
        let i = self.initial_axis() as usize;
        let (next, prev) = ((i + 1) % 3, (i + 2) % 3);
        if self.is_parity_even() {
            [i, next, prev]
        } else {
            [i, prev, next]
        }
    }

    /// Returns the ijk slot of each xyz component.
    ///
    /// That is, component `a` of the xyz layout holds the angle at index
    /// `self.angle_mapping()[a]` of the ijk layout.
    pub const fn angle_mapping(self) -> [usize; 3] {
        let [i, j, k] = self.axes();
        let mut m = [0; 3];
        if self.is_frame_static() {
            m[i] = 0;
            m[k] = 2;
        } else {
            m[i] = 2;
            m[k] = 0;
        }
        m[j] = 1;
        m
    }
}

impl<T: Float> Euler<T> {
    /// Returns Euler angles with the given angles, in ijk layout, and order.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{degs, Euler, Order};
    ///
    /// let e = Euler::new(degs(90.0), degs(0.0), degs(0.0), Order::XYZ);
    /// assert_eq!(e.to_xyz()[0], degs(90.0).to_rads());
    /// ```
    pub fn new(i: Angle<T>, j: Angle<T>, k: Angle<T>, order: Order) -> Self {
        Self::from_vec(vec3(i.to_rads(), j.to_rads(), k.to_rads()), order)
    }

    /// Returns Euler angles with the given radians, in ijk layout, and order.
    pub const fn from_vec(angles: Vec3<T>, order: Order) -> Self {
        Self { angles, order }
    }

    /// Returns Euler angles with the given radians, in xyz layout, and order.
    pub fn from_xyz(xyz: Vec3<T>, order: Order) -> Self {
        let mut res = Self::from_vec(Vec3::zero(), order);
        res.set_xyz(xyz);
        res
    }

    /// Returns the order of `self`.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Sets the order of `self`.
    ///
    /// The angles are not changed, so `self` represents a different
    /// rotation afterwards. Use [`Self::reorder`] to preserve the rotation.
    pub fn set_order(&mut self, order: Order) {
        self.order = order;
    }

    /// Returns the angles of `self` in radians, in ijk layout.
    pub fn angles(&self) -> Vec3<T> {
        self.angles
    }

    /// Sets the angles of `self`, given in radians in ijk layout.
    pub fn set_angles(&mut self, angles: Vec3<T>) {
        self.angles = angles;
    }

    /// Returns the angles of `self` in radians, in xyz layout.
    pub fn to_xyz(&self) -> Vec3<T> {
        let m = self.order.angle_mapping();
        vec3(self.angles[m[0]], self.angles[m[1]], self.angles[m[2]])
    }

    /// Sets the angles of `self`, given in radians in xyz layout.
    pub fn set_xyz(&mut self, xyz: Vec3<T>) {
        let m = self.order.angle_mapping();
        for a in 0..3 {
            self.angles[m[a]] = xyz[a];
        }
    }

    /// Returns `a` radians wrapped to the range [-π, π].
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::assert_approx_eq;
    /// use gimbal_core::math::Euler;
    ///
    /// assert_approx_eq!(Euler::angle_mod(7.0f64), 7.0 - 2.0 * 3.141592653589793);
    /// assert_eq!(Euler::angle_mod(-1.0f64), -1.0);
    /// ```
    pub fn angle_mod(a: T) -> T {
        let full = T::TWO * T::PI;
        let mut a = a % full;
        if a < -T::PI {
            a += full;
        }
        if a > T::PI {
            a -= full;
        }
        a
    }

    /// Returns `xyz` with whole turns added or removed from each angle
    /// so that it is within a half turn of the respective angle in `target`.
    pub fn simple_xyz_rotation(xyz: Vec3<T>, target: Vec3<T>) -> Vec3<T> {
        let d = xyz - target;
        target + d.map(Self::angle_mod)
    }

    /// Returns the xyz-layout angles closest to `target` that represent the
    /// same rotation in `order` as `xyz`.
    ///
    /// Every rotation has two sets of Euler angles, up to whole turns,
    /// in each order. This function considers both.
    pub fn nearest_rotation(
        xyz: Vec3<T>,
        target: Vec3<T>,
        order: Order,
    ) -> Vec3<T> {
        let [i, j, k] = order.axes();
        let near = Self::simple_xyz_rotation(xyz, target);

        let mut other = near;
        other[i] = T::PI + near[i];
        other[j] = if order.is_initial_repeated() {
            -near[j]
        } else {
            T::PI - near[j]
        };
        other[k] = T::PI + near[k];
        let other = Self::simple_xyz_rotation(other, target);

        if (other - target).len_sqr() < (near - target).len_sqr() {
            other
        } else {
            near
        }
    }
}

impl<T: Float> Euler<T> {
    /// Returns the Euler angles in `order` of the rotation `m`.
    ///
    /// Accepts a 3x3 matrix, or a 4x4 matrix whose upper-left part is used.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::assert_approx_eq;
    /// use gimbal_core::math::{vec3, Euler, Mat4x4, Order};
    ///
    /// let m = Mat4x4::euler_angles(vec3(0.1, 0.2, 0.3));
    /// let e = Euler::from_matrix(m, Order::XYZ);
    /// assert_approx_eq!(e.angles(), vec3(0.1, 0.2, 0.3), eps = 1e-6);
    /// ```
    pub fn from_matrix(m: impl Into<Mat3x3<T>>, order: Order) -> Self {
        let mut res = Self::from_vec(Vec3::zero(), order);
        res.extract(m);
        res
    }

    /// Returns the Euler angles in `order` of the rotation represented
    /// by `self`.
    #[must_use]
    pub fn reorder(&self, order: Order) -> Self {
        Self::from_matrix(self.to_mat3x3(), order)
    }

    /// Returns the rotation matrix of `self`.
    pub fn to_mat3x3(&self) -> Mat3x3<T> {
        let o = self.order;
        let [i, j, k] = o.axes();
        let [a, b, c] = self.angles.0;

        let mut angles = if o.is_frame_static() {
            vec3(a, b, c)
        } else {
            vec3(c, b, a)
        };
        if !o.is_parity_even() {
            angles = -angles;
        }
        let (si, ci) = angles[0].sin_cos();
        let (sj, cj) = angles[1].sin_cos();
        let (sh, ch) = angles[2].sin_cos();
        let (cc, cs) = (ci * ch, ci * sh);
        let (sc, ss) = (si * ch, si * sh);

        let mut m = Mat3x3::identity();
        if o.is_initial_repeated() {
            m[i][i] = cj;
            m[j][i] = sj * si;
            m[k][i] = sj * ci;
            m[i][j] = sj * sh;
            m[j][j] = -cj * ss + cc;
            m[k][j] = -cj * cs - sc;
            m[i][k] = -sj * ch;
            m[j][k] = cj * sc + cs;
            m[k][k] = cj * cc - ss;
        } else {
            m[i][i] = cj * ch;
            m[j][i] = sj * sc - cs;
            m[k][i] = sj * cc + ss;
            m[i][j] = cj * sh;
            m[j][j] = sj * ss + cc;
            m[k][j] = sj * cs - sc;
            m[i][k] = -sj;
            m[j][k] = cj * si;
            m[k][k] = cj * ci;
        }
        m
    }

    /// Returns the rotation matrix of `self` as an affine 4x4 matrix.
    pub fn to_mat4x4(&self) -> Mat4x4<T> {
        Mat4x4::from_parts(self.to_mat3x3(), Vec3::zero())
    }

    /// Sets the angles of `self` to those of the rotation `m`, in the
    /// current order.
    ///
    /// Accepts a 3x3 matrix, or a 4x4 matrix whose upper-left part is used.
    pub fn extract(&mut self, m: impl Into<Mat3x3<T>>) {
        let m = m.into();
        let o = self.order;
        let [i, j, k] = o.axes();
        let rep = o.is_initial_repeated();

        // The first angle is determined by two elements that do not depend
        // on the other two angles
        let x = if rep {
            m[j][i].atan2(m[k][i])
        } else {
            m[j][k].atan2(m[k][k])
        };

        // Undo the first rotation, leaving a rotation about the two other
        // axes, which is free of gimbal lock
        let undo = if o.is_parity_even() { -x } else { x };
        let n = axis_rotation(Axis::from_index(i), undo) * m;

        let (mut y, mut z);
        if rep {
            let sy = (n[j][i] * n[j][i] + n[k][i] * n[k][i]).sqrt();
            y = sy.atan2(n[i][i]);
            z = n[j][k].atan2(n[j][j]);
        } else {
            let cy = (n[i][i] * n[i][i] + n[i][j] * n[i][j]).sqrt();
            y = (-n[i][k]).atan2(cy);
            z = (-n[j][i]).atan2(n[j][j]);
        }

        let mut x = x;
        if !o.is_parity_even() {
            (x, y, z) = (-x, -y, -z);
        }
        if !o.is_frame_static() {
            (x, z) = (z, x);
        }
        self.angles = vec3(x, y, z);
    }

    /// Adjusts the angles of `self` to be as close as possible to those of
    /// `target`, without changing the rotation represented by `self`.
    ///
    /// This avoids sudden jumps when interpolating between successive
    /// orientations, for example in animation.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::assert_approx_eq;
    /// use gimbal_core::math::{vec3, Euler, Order};
    ///
    /// let mut e = Euler::from_xyz(vec3(3.0f64, 0.0, 6.0), Order::XYZ);
    /// e.make_near(&Euler::from_xyz(vec3(0.0, 0.0, 0.0), Order::XYZ));
    /// assert_approx_eq!(e.to_xyz(), vec3(3.0, 0.0, 6.0 - 2.0 * 3.141592653589793));
    /// ```
    pub fn make_near(&mut self, target: &Self) {
        let target = if target.order == self.order {
            target.to_xyz()
        } else {
            target.reorder(self.order).to_xyz()
        };
        let xyz = Self::nearest_rotation(self.to_xyz(), target, self.order);
        self.set_xyz(xyz);
    }
}

//
// Local trait impls
//

impl<T: Float + ApproxEq> ApproxEq<Self, T> for Euler<T> {
    fn approx_eq_eps(&self, other: &Self, eps: &T) -> bool {
        self.order == other.order
            && self.angles.approx_eq_eps(&other.angles, eps)
    }
    fn relative_epsilon() -> T {
        T::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl<T: Float> Default for Euler<T> {
    /// Returns zero angles in the default order.
    fn default() -> Self {
        Self::from_vec(Vec3::zero(), Order::default())
    }
}

impl<T: Float> From<Euler<T>> for Mat3x3<T> {
    fn from(e: Euler<T>) -> Self {
        e.to_mat3x3()
    }
}

impl<T: Float> From<Euler<T>> for Mat4x4<T> {
    fn from(e: Euler<T>) -> Self {
        e.to_mat4x4()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for Order {
    type Error = Error;

    /// Returns the order with the given code.
    ///
    /// # Errors
    /// [`Error::InvalidCode`] if no order has the code `code`.
    fn try_from(code: u16) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|o| o.code() == code)
            .ok_or(Error::InvalidCode(code))
    }
}

impl From<Order> for u16 {
    fn from(o: Order) -> Self {
        o.code()
    }
}

impl FromStr for Order {
    type Err = Error;

    /// Returns the order with the given name.
    ///
    /// # Errors
    /// [`Error::UnknownName`] if no order has the name `s`.
    fn from_str(s: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|o| o.name() == s)
            .ok_or(Error::UnknownName)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCode(c) => {
                write!(f, "invalid euler order code {c:#06x}")
            }
            Error::UnknownName => f.write_str("unknown euler order name"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{format, string::ToString};

    use crate::assert_approx_eq;
    use crate::math::angle::degs;
    use crate::math::mat::Mat2x2;
    use crate::math::vec::vec2;

    use super::*;

    #[test]
    fn order_codes_round_trip() {
        for o in Order::ALL {
            assert_eq!(Order::try_from(o.code()), Ok(o));
            assert_eq!(u16::from(o), o as u16);
        }
    }

    #[test]
    fn only_24_legal_codes() {
        let legal = (0..=u16::MAX)
            .filter(|&c| Order::try_from(c).is_ok())
            .count();
        assert_eq!(legal, 24);

        assert_eq!(Order::try_from(0x3000), Err(Error::InvalidCode(0x3000)));
        assert_eq!(Order::try_from(0x0102), Err(Error::InvalidCode(0x0102)));
        assert_eq!(Order::try_from(0x1111 | 0x0200), Err(Error::InvalidCode(0x1311)));
    }

    #[test]
    fn order_names_round_trip() {
        for o in Order::ALL {
            assert_eq!(o.to_string().parse(), Ok(o));
        }
        assert_eq!(Order::XZXr.to_string(), "XZXr");
        assert_eq!("xyz".parse::<Order>(), Err(Error::UnknownName));
        assert_eq!("".parse::<Order>(), Err(Error::UnknownName));
    }

    #[test]
    fn order_fields() {
        assert_eq!(Order::default(), XYZ);

        assert_eq!(XYZ.initial_axis(), Axis::X);
        assert!(XYZ.is_parity_even());
        assert!(!XYZ.is_initial_repeated());
        assert!(XYZ.is_frame_static());

        assert_eq!(ZXZr.initial_axis(), Axis::X);
        assert!(!ZXZr.is_parity_even());
        assert!(ZXZr.is_initial_repeated());
        assert!(!ZXZr.is_frame_static());

        for o in Order::ALL {
            let [i, j, k] = o.axes();
            assert_eq!(i + j + k, 3, "{o}: axes not a permutation");
            assert_eq!(i, o.initial_axis() as usize);

            let mut m = o.angle_mapping();
            m.sort_unstable();
            assert_eq!(m, [0, 1, 2], "{o}: mapping not a permutation");
        }
    }

    #[test]
    fn xyz_layout() {
        let e = Euler::from_vec(vec3(1.0f32, 2.0, 3.0), XZY);
        assert_eq!(e.to_xyz(), vec3(1.0, 3.0, 2.0));
        assert_eq!(Euler::from_xyz(vec3(1.0, 3.0, 2.0), XZY), e);

        let e = Euler::from_vec(vec3(1.0f32, 2.0, 3.0), XYZr);
        assert_eq!(e.to_xyz(), vec3(1.0, 2.0, 3.0));

        let e = Euler::from_vec(vec3(1.0f32, 2.0, 3.0), ZYX);
        assert_eq!(e.to_xyz(), vec3(3.0, 2.0, 1.0));

        let mut e = Euler::from_vec(vec3(1.0f32, 2.0, 3.0), ZYZ);
        assert_eq!(e.to_xyz(), vec3(3.0, 2.0, 1.0));
        e.set_xyz(e.to_xyz());
        assert_eq!(e.angles(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn xyz_order_matches_euler_angles() {
        let r = vec3(0.3f64, -1.2, 2.5);
        let e = Euler::from_vec(r, XYZ);
        assert_approx_eq!(e.to_mat4x4(), Mat4x4::euler_angles(r));
        assert_approx_eq!(Mat4x4::from(e), Mat4x4::euler_angles(r));
    }

    #[test]
    fn static_order_composes_single_axis_rotations() {
        let (a, b, c) = (0.4f64, -0.9, 1.7);
        let rot = |ax, a| axis_rotation(Axis::from_index(ax), a);

        for o in Order::ALL.into_iter().filter(|o| o.is_frame_static()) {
            let [i, j, k] = o.axes();
            let last = if o.is_initial_repeated() { i } else { k };
            let expected = rot(i, a) * rot(j, b) * rot(last, c);

            let actual = Euler::from_vec(vec3(a, b, c), o).to_mat3x3();
            assert_approx_eq!(actual, expected, "order {o}");
        }
    }

    #[test]
    fn relative_order_reverses_static() {
        let (a, b, c) = (0.4f64, -0.9, 1.7);
        let pairs = [(XYZr, ZYX), (XZYr, ZXY), (YXZr, YZX), (ZYXr, XYZ)];
        for (rel, stat) in pairs {
            let r = Euler::from_vec(vec3(a, b, c), rel).to_mat3x3();
            let s = Euler::from_vec(vec3(c, b, a), stat).to_mat3x3();
            assert_approx_eq!(r, s, "{rel} vs {stat}");
        }
    }

    #[test]
    fn extract_round_trip_all_orders() {
        let angles = vec3(0.25f64, 0.5, 1.25);
        for o in Order::ALL {
            let m = Euler::from_vec(angles, o).to_mat3x3();
            let e = Euler::from_matrix(m, o);
            assert_eq!(e.order(), o);
            assert_approx_eq!(e.to_mat3x3(), m, "order {o}");
            // Repeated orders may yield the other, equivalent angle set
            if !o.is_initial_repeated() {
                assert_approx_eq!(e.angles(), angles, "order {o}");
            }
        }
    }

    #[test]
    fn extract_from_4x4() {
        let mut m = Euler::from_vec(vec3(0.1f64, 0.2, 0.3), YZX).to_mat4x4();
        m[3] = [5.0, 6.0, 7.0, 1.0];
        let e = Euler::from_matrix(m, YZX);
        assert_approx_eq!(e.angles(), vec3(0.1, 0.2, 0.3));
    }

    #[test]
    fn reorder_preserves_rotation() {
        let e = Euler::new(degs(10.0f64), degs(20.0), degs(30.0), XYZ);
        for o in Order::ALL {
            let r = e.reorder(o);
            assert_eq!(r.order(), o);
            assert_approx_eq!(r.to_mat3x3(), e.to_mat3x3(), "order {o}");
        }
    }

    #[test]
    fn set_order_keeps_angles() {
        let mut e = Euler::from_vec(vec3(0.1f32, 0.2, 0.3), XYZ);
        e.set_order(ZXZr);
        assert_eq!(e.order(), ZXZr);
        assert_eq!(e.angles(), vec3(0.1, 0.2, 0.3));
        e.set_angles(vec3(0.0, 0.0, 0.0));
        assert_eq!(e, Euler { order: ZXZr, ..Euler::default() });
    }

    #[test]
    fn extract_euler_xyz_strips_scaling() {
        let r = vec3(-0.7f64, 0.4, 2.9);
        let mut m = Mat4x4::euler_angles(r);
        m.scale(vec3(2.0, 3.0, 0.5));

        let e = extract_euler_xyz(&m);
        assert_eq!(e.order(), XYZ);
        assert_approx_eq!(e.angles(), r);
    }

    #[test]
    fn extract_euler_zyx_strips_scaling() {
        let e = Euler::from_vec(vec3(1.1f64, -0.3, 0.6), ZYX);
        let mut m = e.to_mat4x4();
        m.scale(vec3(4.0, 4.0, 0.25));

        let actual = extract_euler_zyx(&m);
        assert_approx_eq!(actual, e);
    }

    #[test]
    fn extract_2d() {
        let mut m = Mat3x3::rotation(degs(-120.0f64));
        m.scale(vec2(3.0, 0.5));
        assert_approx_eq!(extract_euler_2d(&m), degs(-120.0));

        let m = Mat2x2::rotation(degs(45.0f32));
        assert_approx_eq!(extract_euler_2d(&m), degs(45.0));
    }

    #[test]
    fn angle_mod() {
        use core::f64::consts::PI;
        assert_eq!(Euler::angle_mod(0.5f64), 0.5);
        assert_eq!(Euler::angle_mod(-PI), -PI);
        assert_approx_eq!(Euler::angle_mod(3.0 * PI / 2.0), -PI / 2.0);
        assert_approx_eq!(Euler::angle_mod(-3.0 * PI / 2.0), PI / 2.0);
        assert_approx_eq!(Euler::angle_mod(9.0 * PI + 0.25), -PI + 0.25);
    }

    #[test]
    fn simple_xyz_rotation_adds_whole_turns() {
        use core::f64::consts::TAU;
        let xyz = vec3(0.1 + TAU, 0.2 - 2.0 * TAU, 0.3);
        let target = vec3(0.0, 0.0, TAU);
        assert_approx_eq!(
            Euler::simple_xyz_rotation(xyz, target),
            vec3(0.1, 0.2, 0.3 + TAU)
        );
    }

    #[test]
    fn make_near_picks_equivalent_angle_set() {
        use core::f64::consts::PI;
        let target = Euler::from_xyz(vec3(0.0, 0.0, 0.0), XYZ);

        let mut e = Euler::from_xyz(vec3(PI + 0.1, PI - 0.2, PI + 0.3), XYZ);
        let before = e.to_mat3x3();
        e.make_near(&target);
        assert_approx_eq!(e.to_xyz(), vec3(0.1, 0.2, 0.3));
        assert_approx_eq!(e.to_mat3x3(), before);
    }

    #[test]
    fn make_near_repeated_order() {
        use core::f64::consts::PI;
        let target = Euler::from_vec(vec3(0.5, 0.5, 0.5), XYX);

        let mut e = Euler::from_vec(vec3(0.5 - PI, -0.5, 0.5 + PI), XYX);
        let before = e.to_mat3x3();
        e.make_near(&target);
        assert_approx_eq!(e.angles(), vec3(0.5, 0.5, 0.5));
        assert_approx_eq!(e.to_mat3x3(), before);
    }

    #[test]
    fn make_near_across_orders() {
        let target = Euler::from_vec(vec3(0.2f64, 0.1, -0.3), ZYX);
        let mut e = target.reorder(XZY);
        let before = e.to_mat3x3();

        e.set_angles(e.angles() + vec3(core::f64::consts::TAU, 0.0, 0.0));
        e.make_near(&target);

        assert_approx_eq!(e.to_mat3x3(), before);
        assert_approx_eq!(e.angles(), target.reorder(XZY).angles());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", Error::InvalidCode(0x3000)),
            "invalid euler order code 0x3000"
        );
        assert_eq!(
            format!("{}", Error::UnknownName),
            "unknown euler order name"
        );
    }
}
