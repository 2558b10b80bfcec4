//! ```text
//!            _           _           _
//!      __ _ (_)_ __ ___ | |__   __ _| |
//!     / _` || | '_ ` _ \| '_ \ / _` | |
//!    | (_| || | | | | | | |_) | (_| | |
//!     \__, ||_|_| |_| |_|_.__/ \__,_|_|
//!     |___/
//! ```
//!
//! Core functionality of the `gimbal` project.
//!
//! Includes fixed-size 2x2, 3x3, and 4x4 matrices with determinants, minors,
//! and two inversion algorithms; transform constructors; Euler angles in all
//! 24 axis orders, and conversions between Euler angles and rotation
//! matrices.
//!
//! # Crate features
//!
//! * `std`:
//!   Makes available floating-point functions not included in `core`, in
//!   particular trigonometric functions and square roots, as well as
//!   `std::error::Error` impls for the error types. Implies `fp`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate, for `no_std` targets.
//!   Implies `fp`.
//!
//! * `fp`:
//!   Enables everything that needs floating-point functions: rotations,
//!   Euler angles, and vector normalization. Requires one of `std` or `libm`
//!   to provide the functions.
//!
//! The `std` feature is enabled by default.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod math;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::{Euler, Order, rotation_matrix};
    pub use crate::math::{
        Angle, ApproxEq, Float, Mat2x2, Mat3x3, Mat4x4, Matrix, Vec2, Vec3,
        Vec4, Vector, degs, rads, rand::Distrib, splat, vec2, vec3, vec4,
    };
}
