// ============================================================================
// Long Multiplication
// Single-digit scaling, partial product rows and their summation
// ============================================================================

use super::addition::add_reversed;
use super::digit_string::{DigitStr, Sign};
use super::errors::{ArithmeticError, ArithmeticResult};
use crate::buffer::{BufferResult, DynamicString, TERMINATOR};
use crate::config::EngineConfig;
use smallvec::SmallVec;

/// One digit of the multiplier times the whole multiplicand.
///
/// `digits` is least-significant-first; `weight` is the power of ten the row
/// is shifted by (the index of its multiplier digit counted from the right).
#[derive(Debug)]
struct PartialRow {
    weight: usize,
    digits: DynamicString,
}

/// Rows for one multiplication. Typical multipliers fit inline.
type PartialRows = SmallVec<[PartialRow; 8]>;

/// Write `magnitude * factor` into `out`, least significant digit first.
///
/// Each step is `digit * factor + carry <= 9 * 9 + 8`, so a `u8` never
/// overflows regardless of the operand length.
fn scale_reversed(out: &mut DynamicString, magnitude: &[u8], factor: u8) -> BufferResult<()> {
    out.clear();
    out.reserve_exact(magnitude.len() + 1)?;

    let mut carry = 0u8;
    for &digit in magnitude.iter().rev() {
        let value = (digit - b'0') * factor + carry;
        out.append_char(b'0' + value % 10)?;
        carry = value / 10;
    }

    if carry > 0 {
        out.append_char(b'0' + carry)?;
    }
    Ok(())
}

/// Multiply `operand` by a single `digit` in [-9, 9] and store it in `result`.
///
/// The product is negative iff exactly one of the operand and the digit is
/// negative. A zero product is always the canonical `"0"`.
///
/// With `keep_reversed` the result is left least-significant-first with any
/// `-` marker trailing (`"123" * -2` gives `"642-"`); otherwise it is in
/// natural reading order.
///
/// # Errors
/// - `InvalidOperand` if `operand` is not a digit string
/// - `DigitOutOfRange` if `digit` is outside [-9, 9]
/// - `Buffer` if storage cannot be grown
///
/// `result` is unchanged on error.
pub fn multiply_by_digit(
    result: &mut DynamicString,
    operand: &str,
    digit: i8,
    keep_reversed: bool,
) -> ArithmeticResult<()> {
    multiply_by_digit_with(result, operand, digit, keep_reversed, &EngineConfig::default())
}

pub(crate) fn multiply_by_digit_with(
    result: &mut DynamicString,
    operand: &str,
    digit: i8,
    keep_reversed: bool,
    config: &EngineConfig,
) -> ArithmeticResult<()> {
    config.check_operand_len(operand.len())?;
    let operand = DigitStr::parse(operand)
        .inspect_err(|err| tracing::warn!(%err, "rejecting operand"))?;

    if !(-9..=9).contains(&digit) {
        tracing::warn!(digit, "single-digit multiplier out of range");
        return Err(ArithmeticError::DigitOutOfRange { digit });
    }

    if digit == 0 || operand.is_zero() {
        result.set_text("0")?;
        return Ok(());
    }

    let mut product = DynamicString::with_capacity(config.initial_capacity)?;
    scale_reversed(&mut product, operand.magnitude(), digit.unsigned_abs())?;
    if (operand.sign() * Sign::of_digit(digit)).is_negative() {
        product.append_char(b'-')?;
    }
    if !keep_reversed {
        product.reverse();
    }

    result.set_text(product.as_bytes())?;
    Ok(())
}

/// One row per multiplier digit, least significant digit first.
fn compute_rows(
    multiplicand: &[u8],
    multiplier: &[u8],
    capacity: usize,
) -> BufferResult<PartialRows> {
    let mut rows = PartialRows::with_capacity(multiplier.len());
    for (weight, &digit) in multiplier.iter().rev().enumerate() {
        let mut digits = DynamicString::with_capacity(capacity)?;
        if digit == b'0' {
            digits.set_text("0")?;
        } else {
            scale_reversed(&mut digits, multiplicand, digit - b'0')?;
        }
        rows.push(PartialRow { weight, digits });
    }
    Ok(rows)
}

/// Sum the rows at their positional weight, least-significant-first.
///
/// The accumulator is seeded with row 0 and zero-padded so every row's
/// offset lands inside it.
fn sum_rows(rows: &[PartialRow], capacity: usize) -> BufferResult<DynamicString> {
    let mut acc = DynamicString::with_capacity(capacity)?;
    let mut scratch = DynamicString::with_capacity(capacity)?;

    if let Some((first, rest)) = rows.split_first() {
        acc.set_text(first.digits.as_bytes())?;
        for row in rest {
            while acc.len() <= row.weight {
                acc.append_char(b'0')?;
            }
            add_reversed(&mut scratch, acc.as_bytes(), row.digits.as_bytes(), row.weight)?;
            std::mem::swap(&mut acc, &mut scratch);
        }
    }
    Ok(acc)
}

/// Turn a least-significant-first magnitude into the final signed text.
fn normalize(acc: &mut DynamicString, sign: Sign) -> BufferResult<()> {
    match acc.as_bytes().iter().rposition(|&b| b != b'0') {
        None => {
            acc.set_text("0")?;
        },
        Some(top) => {
            acc.set_char(TERMINATOR, top + 1)?;
            if sign.is_negative() {
                acc.append_char(b'-')?;
            }
            acc.reverse();
        },
    }
    Ok(())
}

/// Multiply two digit strings exactly and store the product in `result`.
///
/// Schoolbook long multiplication: one partial row per digit of `rhs`,
/// summed at its place value. Operands may be signed and may carry leading
/// zeros; the product has neither superfluous zeros nor a sign on zero.
///
/// ```
/// use decimal_strings::arithmetic::multiply_strings;
/// use decimal_strings::buffer::DynamicString;
///
/// let mut product = DynamicString::new()?;
/// multiply_strings(&mut product, "123", "55")?;
/// assert_eq!(product, "6765");
///
/// multiply_strings(&mut product, "-11111", "11111")?;
/// assert_eq!(product, "-123454321");
/// # Ok::<(), decimal_strings::arithmetic::ArithmeticError>(())
/// ```
///
/// # Errors
/// - `InvalidOperand` if either operand is not a digit string
/// - `Buffer` if storage cannot be grown
///
/// `result` is written only once the product is complete, so it is
/// unchanged on error.
pub fn multiply_strings(result: &mut DynamicString, lhs: &str, rhs: &str) -> ArithmeticResult<()> {
    multiply_strings_with(result, lhs, rhs, &EngineConfig::default())
}

pub(crate) fn multiply_strings_with(
    result: &mut DynamicString,
    lhs: &str,
    rhs: &str,
    config: &EngineConfig,
) -> ArithmeticResult<()> {
    config.check_operand_len(lhs.len())?;
    config.check_operand_len(rhs.len())?;
    let lhs = DigitStr::parse(lhs)
        .inspect_err(|err| tracing::warn!(%err, "rejecting multiplicand"))?;
    let rhs = DigitStr::parse(rhs)
        .inspect_err(|err| tracing::warn!(%err, "rejecting multiplier"))?;

    let rows = compute_rows(lhs.magnitude(), rhs.magnitude(), config.initial_capacity)?;
    let mut product = sum_rows(&rows, config.initial_capacity)?;
    normalize(&mut product, lhs.sign() * rhs.sign())?;

    tracing::trace!(rows = rows.len(), digits = product.len(), "multiplied digit strings");
    result.set_text(product.as_bytes())?;
    Ok(())
}
