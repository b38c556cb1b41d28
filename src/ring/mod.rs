//! # Ring module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_n and performing
//! the scalar modular arithmetic the cipher is built on.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
