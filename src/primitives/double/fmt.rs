//! String conversion for `DoubleUint`
//!
//! Formatting repeatedly divides by the radix and collects remainders as
//! digits (`0-9` then `a-z`), least significant first. Parsing runs the
//! same digits back through multiply-and-add with overflow detection.

use std::fmt::{self, Binary, Display, Formatter, LowerHex, Octal, UpperHex};
use std::str::FromStr;

use super::DoubleUint;
use crate::error::Error;
use crate::primitives::Limb;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_radix(radix: u32) -> Result<(), Error> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(Error::InvalidRadix(radix))
    }
}

impl<H: Limb> DoubleUint<H> {
    /// Renders the value in `radix`, left-padded with `'0'` to at least
    /// `min_len` characters.
    ///
    /// Zero renders as `"0"`. Radixes outside `2..=36` are rejected with
    /// `Error::InvalidRadix`.
    ///
    /// ```rust
    /// use uint256::U256;
    ///
    /// assert_eq!(U256::from(255u8).to_str_radix(16, 4).unwrap(), "00ff");
    /// assert_eq!(U256::ZERO.to_str_radix(10, 0).unwrap(), "0");
    /// ```
    pub fn to_str_radix(&self, radix: u32, min_len: usize) -> Result<String, Error> {
        check_radix(radix)?;

        let base = DoubleUint::<H>::from(radix);
        let mut digits = Vec::with_capacity(Self::BITS as usize);
        let mut value = *self;

        while !value.is_zero() {
            let (quotient, remainder) = value.checked_div_rem(base)?;
            digits.push(DIGITS[remainder.as_u32() as usize]);
            value = quotient;
        }

        if digits.is_empty() {
            digits.push(b'0');
        }

        while digits.len() < min_len {
            digits.push(b'0');
        }

        Ok(digits.iter().rev().map(|&d| d as char).collect())
    }

    /// Parses a string of digits in `radix`.
    ///
    /// Digits are case-insensitive and a single leading `+` is accepted.
    /// Values above `MAX` fail with `Error::Overflow`.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, Error> {
        check_radix(radix)?;

        let digits = src.strip_prefix('+').unwrap_or(src);
        if digits.is_empty() {
            return Err(Error::Empty);
        }

        let base = DoubleUint::<H>::from(radix);
        let mut value = Self::ZERO;

        for c in digits.chars() {
            let digit = c.to_digit(radix).ok_or(Error::InvalidDigit(c))?;

            let (high, shifted) = value.widening_mul(base);
            if !high.is_zero() {
                return Err(Error::Overflow);
            }

            let next = shifted.wrapping_add(DoubleUint::<H>::from(digit));
            if next < shifted {
                return Err(Error::Overflow);
            }

            value = next;
        }

        Ok(value)
    }

    fn fmt_radix(&self, f: &mut Formatter<'_>, radix: u32, prefix: &str) -> fmt::Result {
        let digits = self.to_str_radix(radix, 0).map_err(|_| fmt::Error)?;
        f.pad_integral(true, prefix, &digits)
    }
}

/// Formats the value in base 10.
impl<H: Limb> Display for DoubleUint<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, "")
    }
}

impl<H: Limb> LowerHex for DoubleUint<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, "0x")
    }
}

impl<H: Limb> UpperHex for DoubleUint<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let digits = self
            .to_str_radix(16, 0)
            .map_err(|_| fmt::Error)?
            .to_ascii_uppercase();
        f.pad_integral(true, "0x", &digits)
    }
}

impl<H: Limb> Octal for DoubleUint<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, "0o")
    }
}

impl<H: Limb> Binary for DoubleUint<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, "0b")
    }
}

/// Parses a base-10 string.
impl<H: Limb> FromStr for DoubleUint<H> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DoubleUint::from_str_radix(s, 10)
    }
}
