//! Small 3-D math layer used by the camera and the terrain ray march.
//!
//! Vectors and matrices are plain [`glam`] types; the only additions are the
//! heading helper in [`Vec3Ext`], the camera orientation builder and an RGBA
//! [`Color`] that stays unclamped until asked.

mod color;
mod matrix;
mod vector;

pub use color::Color;
pub use matrix::{orientation, pitch_from_tilt};
pub use vector::Vec3Ext;

pub use glam::{Mat3, Vec3};
