//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between
//! `DoubleUint` and other representations:
//! - `native`: every native integer width, in both directions
//! - `words`: byte and word arrays of `U256`
//!
//! Widening conversions are infallible. Narrowing is offered twice: as
//! truncating `as_*` casts on the type itself, and as checked `TryFrom`
//! conversions that refuse values which do not fit.

mod native;
mod words;
