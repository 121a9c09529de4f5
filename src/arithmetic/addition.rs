// ============================================================================
// Offset Addition
// Carry-propagating sum of two digit strings with a positional offset
// ============================================================================

use super::digit_string::DigitStr;
use super::errors::{ArithmeticError, ArithmeticResult};
use crate::buffer::{BufferResult, DynamicString};
use crate::config::EngineConfig;

/// Sum two least-significant-first magnitudes into `out`, with `b` weighted
/// by `10^offset`.
///
/// The first `offset` digits of `a` are copied through unchanged. The caller
/// guarantees `offset <= a.len()` and that both slices hold only digits.
pub(crate) fn add_reversed(
    out: &mut DynamicString,
    a: &[u8],
    b: &[u8],
    offset: usize,
) -> BufferResult<()> {
    debug_assert!(offset <= a.len());

    out.clear();
    out.reserve_exact(a.len().max(offset + b.len()) + 1)?;

    for &digit in &a[..offset] {
        out.append_char(digit)?;
    }

    let mut lhs = a[offset..].iter();
    let mut rhs = b.iter();
    let mut carry = 0u8;
    loop {
        let (x, y) = match (lhs.next(), rhs.next()) {
            (None, None) => break,
            pair => pair,
        };
        let sum = carry + x.map_or(0, |d| d - b'0') + y.map_or(0, |d| d - b'0');
        out.append_char(b'0' + sum % 10)?;
        carry = sum / 10;
    }

    if carry > 0 {
        out.append_char(b'0' + carry)?;
    }
    Ok(())
}

/// Copy `digits` into a fresh buffer in reverse order.
fn reversed_copy(digits: &[u8], capacity: usize) -> BufferResult<DynamicString> {
    let mut copy = DynamicString::with_capacity(capacity)?;
    copy.set_text(digits)?.reverse();
    Ok(copy)
}

/// Add `b` into `a`, aligning `b`'s least significant digit with position
/// `offset` counted from the least significant end of `a`, and store the sum
/// in `result`.
///
/// With `using_reversed` the operands (and the result) are in
/// least-significant-first order; otherwise they are in natural reading order.
/// Operands must be unsigned digit strings; signs are resolved by the caller.
///
/// ```
/// use decimal_strings::arithmetic::add;
/// use decimal_strings::buffer::DynamicString;
///
/// let mut sum = DynamicString::new()?;
/// add(&mut sum, "1000", "1", 1, false)?;
/// assert_eq!(sum, "1010");
/// # Ok::<(), decimal_strings::arithmetic::ArithmeticError>(())
/// ```
///
/// # Errors
/// - `InvalidOperand` if either operand is not an unsigned digit string
/// - `OffsetOutOfRange` if `offset` does not address a digit of `a`
/// - `Buffer` if storage cannot be grown
///
/// `result` is unchanged on error.
pub fn add(
    result: &mut DynamicString,
    a: &str,
    b: &str,
    offset: usize,
    using_reversed: bool,
) -> ArithmeticResult<()> {
    add_with(result, a, b, offset, using_reversed, &EngineConfig::default())
}

pub(crate) fn add_with(
    result: &mut DynamicString,
    a: &str,
    b: &str,
    offset: usize,
    using_reversed: bool,
    config: &EngineConfig,
) -> ArithmeticResult<()> {
    config.check_operand_len(a.len())?;
    config.check_operand_len(b.len())?;
    let a = DigitStr::parse_unsigned(a)
        .inspect_err(|err| tracing::warn!(%err, "rejecting first addend"))?;
    let b = DigitStr::parse_unsigned(b)
        .inspect_err(|err| tracing::warn!(%err, "rejecting second addend"))?;

    if offset >= a.len() {
        tracing::warn!(offset, len = a.len(), "addition offset out of range");
        return Err(ArithmeticError::OffsetOutOfRange {
            offset,
            len: a.len(),
        });
    }

    let mut sum = DynamicString::with_capacity(config.initial_capacity)?;
    if using_reversed {
        add_reversed(&mut sum, a.magnitude(), b.magnitude(), offset)?;
    } else {
        let a_rev = reversed_copy(a.magnitude(), config.initial_capacity)?;
        let b_rev = reversed_copy(b.magnitude(), config.initial_capacity)?;
        add_reversed(&mut sum, a_rev.as_bytes(), b_rev.as_bytes(), offset)?;
        sum.reverse();
    }

    result.set_text(sum.as_bytes())?;
    Ok(())
}
