//! Error type shared by the fallible integer operations.
//!
//! Arithmetic on the fixed-width types is total and wraps silently. The
//! only arithmetic failure is division by zero; the remaining variants
//! come from text parsing, formatting and checked narrowing.

/// Errors reported by the fixed-width integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The divisor of a division or modulo was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A radix outside `2..=36` was requested.
    #[error("radix {0} is not in the range 2..=36")]
    InvalidRadix(u32),
    /// A character is not a digit of the requested radix.
    #[error("invalid digit {0:?} for the given radix")]
    InvalidDigit(char),
    /// The input string contained no digits.
    #[error("cannot parse integer from empty string")]
    Empty,
    /// The value does not fit in the target type.
    #[error("number too large to fit in target type")]
    Overflow,
}
