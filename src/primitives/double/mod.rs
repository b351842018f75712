//! Double-width unsigned integer primitive
//!
//! This module defines `DoubleUint<H>`, a fixed-size unsigned integer of
//! twice the width of its limb type `H`, and implements on it the full
//! operator set of a native unsigned integer.
//!
//! Layout:
//! - `core`: representation, constructors, accessors and casts
//! - `ops`: bitwise, shift, additive and multiplicative operators
//! - `cmp`: ordering and comparisons with native integers
//! - `div`: long division and the `/` and `%` operators
//! - `native`: operators whose left operand is a native integer
//! - `fmt`: radix formatting and parsing
//! - `conv`: conversions to and from native integers and arrays

mod cmp;
mod conv;
mod core;
mod div;
mod fmt;
mod native;
#[cfg(feature = "num-traits")]
mod num;
mod ops;

pub use self::core::DoubleUint;
