//! Primitive types
//!
//! This module defines the fixed-width unsigned integer primitives.
//!
//! Primitives are simple, fixed-size, allocation-free building blocks
//! with well-defined semantics. They are built from one generic
//! construct, `DoubleUint<H>`, which joins two limbs of an existing
//! unsigned type into an integer of twice the width.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer over `u128` limbs

mod double;
mod limb;

pub use double::DoubleUint;
pub use limb::Limb;

/// Fixed-size 256-bit unsigned integer.
///
/// Stored as an `(upper, lower)` pair of `u128` limbs representing
/// `upper * 2¹²⁸ + lower`.
pub type U256 = DoubleUint<u128>;
