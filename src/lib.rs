//! Fixed-width 256-bit unsigned integers
//!
//! This crate provides `U256`, an unsigned 256-bit integer built from two
//! 128-bit limbs, with the full set of arithmetic, bitwise, shift,
//! comparison and string-conversion operations of a native unsigned
//! integer.
//!
//! The focus is on **exact, predictable semantics**: every operation
//! wraps modulo 2²⁵⁶ exactly as a native unsigned type would, and the only
//! checked failure is division by zero.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Limb` contract and the generic `DoubleUint<H>` type, a
//!   double-width integer composed from two limbs of type `H`. `U256` is
//!   the instantiation over `u128`.
//!
//! - `error`
//!   The single error type returned by fallible operations (division,
//!   parsing, formatting and checked narrowing).
//!
//! # Design goals
//!
//! - No heap allocations in arithmetic
//! - Wraparound semantics identical to native unsigned integers
//! - One generic construct instead of hand-duplicated widths
//!
//! # Example
//!
//! ```rust
//! use uint256::U256;
//!
//! let a = U256::from(u128::MAX) + U256::from(1u8);
//! assert_eq!(a, U256::new(1u8, 0u8));
//! assert_eq!(a.to_string(), "340282366920938463463374607431768211456");
//! ```

pub mod error;
pub mod primitives;

pub use error::Error;
pub use primitives::{DoubleUint, Limb, U256};
