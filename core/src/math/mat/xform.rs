//! Constructors and mutators of common transforms.
//!
//! All transforms follow the row-vector convention of [`Matrix`]: points
//! are transformed as `v * M`, and a translation occupies the last row.
//!
//! The `set_*` methods overwrite the whole matrix. The remaining mutators
//! (`rotate`, `scale`, `shear`, `translate`) *prepend* the transform, that
//! is, `m.scale(s)` sets `m` to `S * m`, so that the new transform is
//! applied to vectors before the old one.

#[cfg(feature = "fp")]
use crate::math::angle::Angle;
use crate::math::float::Float;
use crate::math::vec::{Vec2, Vec3, vec2, vec3};

use super::{Mat2x2, Mat3x3, Mat4x4};

//
// 2x2
//

impl<T: Float> Mat2x2<T> {
    /// Returns a matrix that scales by `s.x` along x and `s.y` along y.
    pub fn scaling(s: Vec2<T>) -> Self {
        *Self::identity().set_scale(s)
    }

    /// Sets `self` to a scaling by `s`.
    pub fn set_scale(&mut self, s: Vec2<T>) -> &mut Self {
        let o = T::ZERO;
        self.0 = [[s[0], o], [o, s[1]]];
        self
    }

    /// Prepends a scaling by `s` to `self`.
    pub fn scale(&mut self, s: Vec2<T>) -> &mut Self {
        for i in 0..2 {
            self.0[0][i] *= s[0];
            self.0[1][i] *= s[1];
        }
        self
    }
}

#[cfg(feature = "fp")]
impl<T: Float> Mat2x2<T> {
    /// Returns a matrix that rotates counterclockwise by `a`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::assert_approx_eq;
    /// use gimbal_core::math::{degs, vec2, Mat2x2};
    ///
    /// let m = Mat2x2::rotation(degs(90.0));
    /// assert_approx_eq!(vec2(1.0, 0.0) * m, vec2(0.0, 1.0));
    /// ```
    pub fn rotation(a: Angle<T>) -> Self {
        *Self::identity().set_rotation(a)
    }

    /// Sets `self` to a counterclockwise rotation by `a`.
    pub fn set_rotation(&mut self, a: Angle<T>) -> &mut Self {
        let (s, c) = a.sin_cos();
        self.0 = [[c, s], [-s, c]];
        self
    }

    /// Prepends a counterclockwise rotation by `a` to `self`.
    pub fn rotate(&mut self, a: Angle<T>) -> &mut Self {
        *self = Self::rotation(a) * *self;
        self
    }
}

//
// 3x3 (affine 2D)
//

impl<T: Float> Mat3x3<T> {
    /// Returns a matrix that scales by `s.x` along x and `s.y` along y.
    pub fn scaling(s: Vec2<T>) -> Self {
        *Self::identity().set_scale(s)
    }

    /// Returns a matrix that translates by `t`.
    pub fn from_translation(t: Vec2<T>) -> Self {
        *Self::identity().set_translation(t)
    }

    /// Sets `self` to a scaling by `s`.
    pub fn set_scale(&mut self, s: Vec2<T>) -> &mut Self {
        self.make_identity();
        self.0[0][0] = s[0];
        self.0[1][1] = s[1];
        self
    }

    /// Prepends a scaling by `s` to `self`.
    pub fn scale(&mut self, s: Vec2<T>) -> &mut Self {
        for i in 0..3 {
            self.0[0][i] *= s[0];
            self.0[1][i] *= s[1];
        }
        self
    }

    /// Sets `self` to a translation by `t`.
    pub fn set_translation(&mut self, t: Vec2<T>) -> &mut Self {
        self.make_identity();
        self.0[2][0] = t[0];
        self.0[2][1] = t[1];
        self
    }

    /// Returns the translation part of `self`.
    pub fn translation(&self) -> Vec2<T> {
        vec2(self.0[2][0], self.0[2][1])
    }

    /// Prepends a translation by `t` to `self`.
    pub fn translate(&mut self, t: Vec2<T>) -> &mut Self {
        for i in 0..3 {
            self.0[2][i] += t[0] * self.0[0][i] + t[1] * self.0[1][i];
        }
        self
    }

    /// Sets `self` to a shear of x by `xy` times y.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Mat3x3;
    ///
    /// let mut m = Mat3x3::identity();
    /// m.set_shear_xy(2.0f32);
    /// assert_eq!(m.0, [[1.0, 0.0, 0.0], [2.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    /// ```
    pub fn set_shear_xy(&mut self, xy: T) -> &mut Self {
        self.set_shear(vec2(xy, T::ZERO))
    }

    /// Sets `self` to a shear of x by `h.x` times y, and y by `h.y` times x.
    pub fn set_shear(&mut self, h: Vec2<T>) -> &mut Self {
        self.make_identity();
        self.0[1][0] = h[0];
        self.0[0][1] = h[1];
        self
    }

    /// Prepends a shear of x by `xy` times y to `self`.
    pub fn shear_xy(&mut self, xy: T) -> &mut Self {
        for i in 0..3 {
            self.0[1][i] += xy * self.0[0][i];
        }
        self
    }

    /// Prepends a shear of x by `h.x` times y, and y by `h.y` times x,
    /// to `self`.
    pub fn shear(&mut self, h: Vec2<T>) -> &mut Self {
        let p = self.0;
        for i in 0..3 {
            self.0[0][i] = p[0][i] + h[1] * p[1][i];
            self.0[1][i] = p[1][i] + h[0] * p[0][i];
        }
        self
    }
}

#[cfg(feature = "fp")]
impl<T: Float> Mat3x3<T> {
    /// Returns a matrix that rotates the xy plane counterclockwise by `a`.
    pub fn rotation(a: Angle<T>) -> Self {
        *Self::identity().set_rotation(a)
    }

    /// Sets `self` to a counterclockwise rotation of the xy plane by `a`.
    pub fn set_rotation(&mut self, a: Angle<T>) -> &mut Self {
        let (s, c) = a.sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        self.0 = [[c, s, o], [-s, c, o], [o, o, l]];
        self
    }

    /// Prepends a counterclockwise rotation of the xy plane by `a` to `self`.
    pub fn rotate(&mut self, a: Angle<T>) -> &mut Self {
        let (s, c) = a.sin_cos();
        let p = self.0;
        for i in 0..3 {
            self.0[0][i] = c * p[0][i] + s * p[1][i];
            self.0[1][i] = -s * p[0][i] + c * p[1][i];
        }
        self
    }
}

//
// 4x4 (affine 3D)
//

impl<T: Float> Mat4x4<T> {
    /// Returns a matrix that scales by `s.x`, `s.y`, and `s.z` along the
    /// respective axes.
    pub fn scaling(s: Vec3<T>) -> Self {
        *Self::identity().set_scale(s)
    }

    /// Returns a matrix that translates by `t`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{vec3, Mat4x4};
    ///
    /// let m = Mat4x4::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.apply_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn from_translation(t: Vec3<T>) -> Self {
        *Self::identity().set_translation(t)
    }

    /// Sets `self` to a scaling by `s`.
    pub fn set_scale(&mut self, s: Vec3<T>) -> &mut Self {
        self.make_identity();
        for i in 0..3 {
            self.0[i][i] = s[i];
        }
        self
    }

    /// Prepends a scaling by `s` to `self`.
    pub fn scale(&mut self, s: Vec3<T>) -> &mut Self {
        for i in 0..4 {
            self.0[0][i] *= s[0];
            self.0[1][i] *= s[1];
            self.0[2][i] *= s[2];
        }
        self
    }

    /// Sets `self` to a translation by `t`.
    pub fn set_translation(&mut self, t: Vec3<T>) -> &mut Self {
        self.make_identity();
        self.0[3][..3].copy_from_slice(&t.0);
        self
    }

    /// Returns the translation part of `self`.
    pub fn translation(&self) -> Vec3<T> {
        let [x, y, z, _] = self.0[3];
        vec3(x, y, z)
    }

    /// Prepends a translation by `t` to `self`.
    pub fn translate(&mut self, t: Vec3<T>) -> &mut Self {
        for i in 0..4 {
            self.0[3][i] += t[0] * self.0[0][i]
                + t[1] * self.0[1][i]
                + t[2] * self.0[2][i];
        }
        self
    }

    /// Sets `self` to a shear with factors `h = (xy, xz, yz)`: x is sheared
    /// by `xy` times y and by `xz` times z, and y by `yz` times z.
    pub fn set_shear(&mut self, h: Vec3<T>) -> &mut Self {
        self.make_identity();
        self.0[1][0] = h[0];
        self.0[2][0] = h[1];
        self.0[2][1] = h[2];
        self
    }

    /// Prepends a shear with factors `h = (xy, xz, yz)` to `self`.
    pub fn shear(&mut self, h: Vec3<T>) -> &mut Self {
        for i in 0..4 {
            self.0[2][i] += h[1] * self.0[0][i] + h[2] * self.0[1][i];
            self.0[1][i] += h[0] * self.0[0][i];
        }
        self
    }

    /// Transforms the point `p` by `self`, including the projective divide.
    pub fn apply_point(&self, p: Vec3<T>) -> Vec3<T> {
        let m = &self.0;
        let [x, y, z] = p.0;
        let col = |j: usize| x * m[0][j] + y * m[1][j] + z * m[2][j] + m[3][j];
        let w = col(3);
        vec3(col(0) / w, col(1) / w, col(2) / w)
    }

    /// Transforms the direction `d` by the linear part of `self`,
    /// ignoring translation.
    pub fn apply_dir(&self, d: Vec3<T>) -> Vec3<T> {
        let m = &self.0;
        let [x, y, z] = d.0;
        let col = |j: usize| x * m[0][j] + y * m[1][j] + z * m[2][j];
        vec3(col(0), col(1), col(2))
    }
}

#[cfg(feature = "fp")]
impl<T: Float> Mat4x4<T> {
    /// Returns a rotation by the Euler angles `r` (in radians), applied
    /// first about the x axis, then y, then z.
    pub fn euler_angles(r: Vec3<T>) -> Self {
        *Self::identity().set_euler_angles(r)
    }

    /// Sets `self` to a rotation by the Euler angles `r` (in radians),
    /// applied first about the x axis, then y, then z.
    ///
    /// This is the matrix of an [`Euler`][crate::math::euler::Euler] of
    /// order `XYZ`.
    pub fn set_euler_angles(&mut self, r: Vec3<T>) -> &mut Self {
        let (sx, cx) = r[0].sin_cos();
        let (sy, cy) = r[1].sin_cos();
        let (sz, cz) = r[2].sin_cos();
        let (o, l) = (T::ZERO, T::ONE);
        self.0 = [
            [cz * cy, sz * cy, -sy, o],
            [-sz * cx + cz * sy * sx, cz * cx + sz * sy * sx, cy * sx, o],
            [sz * sx + cz * sy * cx, -cz * sx + sz * sy * cx, cy * cx, o],
            [o, o, o, l],
        ];
        self
    }

    /// Prepends a rotation by the Euler angles `r` to `self`.
    pub fn rotate(&mut self, r: Vec3<T>) -> &mut Self {
        let rot = Self::euler_angles(r);
        let p = self.0;
        for i in 0..3 {
            for j in 0..4 {
                self.0[i][j] = rot.0[i][0] * p[0][j]
                    + rot.0[i][1] * p[1][j]
                    + rot.0[i][2] * p[2][j];
            }
        }
        self
    }

    /// Returns a counterclockwise rotation by `a` about `axis`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::assert_approx_eq;
    /// use gimbal_core::math::{degs, vec3, Mat4x4};
    ///
    /// let m = Mat4x4::axis_angle(vec3(0.0, 0.0, 1.0), degs(90.0));
    /// assert_approx_eq!(m.apply_dir(vec3(1.0, 0.0, 0.0)), vec3(0.0, 1.0, 0.0));
    /// ```
    pub fn axis_angle(axis: Vec3<T>, a: Angle<T>) -> Self {
        *Self::identity().set_axis_angle(axis, a)
    }

    /// Sets `self` to a counterclockwise rotation by `a` about `axis`.
    ///
    /// `axis` need not be normalized.
    pub fn set_axis_angle(&mut self, axis: Vec3<T>, a: Angle<T>) -> &mut Self {
        let (s, c) = a.sin_cos();
        self.set_axis_sin_cos(axis.normalize(), s, c)
    }

    fn set_axis_sin_cos(&mut self, u: Vec3<T>, s: T, c: T) -> &mut Self {
        let [x, y, z] = u.0;
        let d = T::ONE - c;
        let (o, l) = (T::ZERO, T::ONE);
        self.0 = [
            [x * x * d + c, x * y * d + z * s, x * z * d - y * s, o],
            [x * y * d - z * s, y * y * d + c, y * z * d + x * s, o],
            [x * z * d + y * s, y * z * d - x * s, z * z * d + c, o],
            [o, o, o, l],
        ];
        self
    }
}

/// Returns the rotation that turns the direction `from` onto the direction
/// `to` about their common perpendicular.
///
/// If the directions are opposite, the result is a half turn about some
/// axis perpendicular to `from`.
///
/// # Examples
/// ```
/// use gimbal_core::assert_approx_eq;
/// use gimbal_core::math::{rotation_matrix, vec3};
///
/// let m = rotation_matrix(vec3(1.0, 0.0, 0.0), vec3(0.0, 2.0, 2.0));
/// let to = m.apply_dir(vec3(1.0, 0.0, 0.0));
/// assert_approx_eq!(to, vec3(0.0, 1.0, 1.0).normalize());
/// ```
#[cfg(feature = "fp")]
pub fn rotation_matrix<T: Float>(from: Vec3<T>, to: Vec3<T>) -> Mat4x4<T> {
    let (from, to) = (from.normalize(), to.normalize());
    let axis = from.cross(&to);
    let sin = axis.len();
    let cos = from.dot(&to);

    let mut m = Mat4x4::identity();
    if sin > T::EPSILON {
        m.set_axis_sin_cos(axis / sin, sin, cos);
    } else if cos < T::ZERO {
        // Opposite directions; turn about the axis most perpendicular to `from`
        let [x, y, z] = from.0.map(T::abs);
        let e = if x <= y && x <= z {
            vec3(T::ONE, T::ZERO, T::ZERO)
        } else if y <= z {
            vec3(T::ZERO, T::ONE, T::ZERO)
        } else {
            vec3(T::ZERO, T::ZERO, T::ONE)
        };
        m.set_axis_sin_cos(from.cross(&e).normalize(), T::ZERO, -T::ONE);
    }
    m
}
