// ============================================================================
// Digit Strings
// Validation and the sign + magnitude view of textual integers
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use std::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    /// Sign of a single-digit multiplier.
    #[inline]
    pub const fn of_digit(digit: i8) -> Self {
        if digit < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

/// Sign of a product: negative iff exactly one factor is negative.
impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// A validated digit string split into sign and magnitude.
///
/// The textual form is one or more ASCII decimal digits, optionally preceded
/// by a single `+` or `-`. The magnitude keeps the digits exactly as written,
/// leading zeros included.
///
/// # Example
/// ```
/// use decimal_strings::arithmetic::{DigitStr, Sign};
///
/// let n = DigitStr::parse("-0042")?;
/// assert_eq!(n.sign(), Sign::Negative);
/// assert_eq!(n.magnitude(), b"0042");
/// # Ok::<(), decimal_strings::arithmetic::ArithmeticError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitStr<'a> {
    sign: Sign,
    magnitude: &'a [u8],
}

impl<'a> DigitStr<'a> {
    /// Parse a signed digit string.
    ///
    /// # Errors
    /// Returns `InvalidOperand` pointing at the first byte that is neither a
    /// digit nor a leading sign, or at the end of the text when it holds no
    /// digits.
    pub fn parse(text: &'a str) -> ArithmeticResult<Self> {
        let bytes = text.as_bytes();
        let (sign, magnitude, start) = match bytes.first() {
            Some(b'-') => (Sign::Negative, &bytes[1..], 1),
            Some(b'+') => (Sign::Positive, &bytes[1..], 1),
            _ => (Sign::Positive, bytes, 0),
        };

        if let Some(i) = magnitude.iter().position(|b| !b.is_ascii_digit()) {
            return Err(ArithmeticError::InvalidOperand {
                position: start + i,
            });
        }
        if magnitude.is_empty() {
            return Err(ArithmeticError::InvalidOperand {
                position: bytes.len(),
            });
        }

        Ok(Self { sign, magnitude })
    }

    /// Parse a digit string that must not carry a sign character.
    pub fn parse_unsigned(text: &'a str) -> ArithmeticResult<Self> {
        if matches!(text.as_bytes().first(), Some(b'+' | b'-')) {
            return Err(ArithmeticError::InvalidOperand { position: 0 });
        }
        Self::parse(text)
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The digits, most significant first.
    #[inline]
    pub fn magnitude(&self) -> &'a [u8] {
        self.magnitude
    }

    /// Number of digits in the magnitude.
    #[inline]
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Check if every digit is `0`.
    pub fn is_zero(&self) -> bool {
        self.magnitude.iter().all(|&b| b == b'0')
    }
}

/// Check whether `text` is a digit string: digits with an optional leading sign.
pub fn is_valid_digit_string(text: &str) -> bool {
    DigitStr::parse(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_digit_strings() {
        for text in ["0", "7", "123", "-5", "+5", "-0", "0007", "99999999999999999999999999"] {
            assert!(is_valid_digit_string(text), "{:?} should be valid", text);
        }
    }

    #[test]
    fn test_invalid_digit_strings() {
        for text in ["", "+", "-", "1-2", "12a", "+-1", " 1", "1 ", "1.5", "--1", "٣"] {
            assert!(!is_valid_digit_string(text), "{:?} should be invalid", text);
        }
    }

    #[test]
    fn test_invalid_position() {
        assert_eq!(
            DigitStr::parse("12x4"),
            Err(ArithmeticError::InvalidOperand { position: 2 })
        );
        assert_eq!(
            DigitStr::parse("-1-"),
            Err(ArithmeticError::InvalidOperand { position: 2 })
        );
        assert_eq!(
            DigitStr::parse("+"),
            Err(ArithmeticError::InvalidOperand { position: 1 })
        );
        assert_eq!(
            DigitStr::parse(""),
            Err(ArithmeticError::InvalidOperand { position: 0 })
        );
    }

    #[test]
    fn test_sign_and_magnitude() {
        let neg = DigitStr::parse("-120").unwrap();
        assert_eq!(neg.sign(), Sign::Negative);
        assert_eq!(neg.magnitude(), b"120");
        assert_eq!(neg.len(), 3);

        let pos = DigitStr::parse("+7").unwrap();
        assert_eq!(pos.sign(), Sign::Positive);
        assert_eq!(pos.magnitude(), b"7");

        assert!(DigitStr::parse("-000").unwrap().is_zero());
        assert!(!DigitStr::parse("010").unwrap().is_zero());
    }

    #[test]
    fn test_parse_unsigned() {
        assert!(DigitStr::parse_unsigned("42").is_ok());
        assert_eq!(
            DigitStr::parse_unsigned("-42"),
            Err(ArithmeticError::InvalidOperand { position: 0 })
        );
        assert_eq!(
            DigitStr::parse_unsigned("+42"),
            Err(ArithmeticError::InvalidOperand { position: 0 })
        );
    }

    #[test]
    fn test_sign_product() {
        assert_eq!(Sign::Positive * Sign::Positive, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(-Sign::Negative, Sign::Positive);
        assert_eq!(Sign::of_digit(-3), Sign::Negative);
        assert_eq!(Sign::of_digit(0), Sign::Positive);
    }
}
