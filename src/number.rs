// src/number.rs

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::error::CalcError;

/// Parses a decimal literal into an exact rational.
///
/// Grammar: `-?(\d+(\.\d*)?|\.\d+)` — so `.5`, `5.` and `-0.25` are all
/// accepted, `1e5`, `1.2.3` and a lone `.` are not. The value is built
/// as literal-digits-over-power-of-ten (`"0.1"` -> 1/10); no float is
/// involved at any point.
pub fn parse_decimal(text: &str) -> Result<BigRational, CalcError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(CalcError::parse("empty decimal number", 0));
    }
    if s.contains('e') || s.contains('E') {
        return Err(CalcError::parse("scientific notation not supported", 0));
    }

    let (negative, literal) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    // At most one point; digits on at least one side of it.
    let (int_part, frac_part) = match literal.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (literal, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(CalcError::parse("invalid decimal format", 0));
    }
    if frac_part.contains('.') || !is_digit_run(int_part) || !is_digit_run(frac_part) {
        return Err(CalcError::parse("invalid decimal format", 0));
    }

    let mut mantissa = String::with_capacity(int_part.len() + frac_part.len());
    mantissa.push_str(int_part);
    mantissa.push_str(frac_part);

    let numer = BigInt::parse_bytes(mantissa.as_bytes(), 10)
        .ok_or_else(|| CalcError::parse("invalid decimal format", 0))?;
    let denom = BigInt::from(10u32).pow(frac_part.len() as u32);

    // BigRational::new normalizes: positive denominator, lowest terms.
    let value = BigRational::new(numer, denom);
    Ok(if negative { -value } else { value })
}

/// Parses a hexadecimal literal into an exact (integral) rational.
///
/// Grammar: `-?0[xX][0-9A-Fa-f]+`. Digits and prefix are
/// case-insensitive; the result always has denominator 1.
pub fn parse_hexadecimal(text: &str) -> Result<BigRational, CalcError> {
    let s = text.trim();
    if s.is_empty() {
        return Err(CalcError::parse("empty hex number", 0));
    }

    let (negative, literal) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let digits = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
        .ok_or_else(|| CalcError::parse("hex number must start with 0x", 0))?;

    if digits.is_empty() {
        return Err(CalcError::parse("no hex digits after 0x", 2));
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CalcError::parse("invalid hex digits", 2));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| CalcError::parse("invalid hex digits", 2))?;

    let signed = if negative { -magnitude } else { magnitude };
    Ok(BigRational::from_integer(signed))
}

/// Non-empty runs only count as digit runs when every char is `0-9`;
/// the empty string passes (callers check emptiness themselves).
fn is_digit_run(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}
