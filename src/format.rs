// src/format.rs
//
// Display heuristics for the CLI. The core always hands back the
// untouched exact rational; choosing between integer, decimal and
// fraction rendering happens here, and stays exact: the decimal path
// is scaled big-integer division, never a float round-trip.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Renders a result the way the CLI shows it:
/// - integers print bare (`256`, not `256/1`);
/// - rationals whose denominator is `2^a * 5^b` print as their exact,
///   terminating decimal expansion (`3/10` -> `0.3`);
/// - everything else prints as the reduced fraction (`1/3`).
pub fn format_result(value: &BigRational) -> String {
    if value.denom().is_one() {
        return value.numer().to_string();
    }

    match decimal_digits(value.denom()) {
        Some(digits) => format_decimal(value, digits),
        None => format_rational(value),
    }
}

/// Plain `n` or `n/d`, no decimal heuristic. The form the integration
/// tests compare against.
pub fn format_rational(value: &BigRational) -> String {
    if value.denom().is_one() {
        value.numer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Decimal places needed to write the fraction exactly, or `None` when
/// the denominator has a prime factor other than 2 or 5 (the expansion
/// would not terminate).
fn decimal_digits(denom: &BigInt) -> Option<u32> {
    let two = BigInt::from(2);
    let five = BigInt::from(5);

    let mut rest = denom.clone();
    let mut twos = 0u32;
    let mut fives = 0u32;

    while (&rest % &two).is_zero() {
        rest /= &two;
        twos += 1;
    }
    while (&rest % &five).is_zero() {
        rest /= &five;
        fives += 1;
    }

    if rest.is_one() {
        Some(twos.max(fives))
    } else {
        None
    }
}

/// Exact expansion at `digits` places. The denominator divides
/// 10^digits, so the scaled division below has no remainder; with the
/// fraction already reduced, the last digit is never zero.
fn format_decimal(value: &BigRational, digits: u32) -> String {
    let scale = BigInt::from(10).pow(digits);
    let scaled = value.numer() * &scale / value.denom();

    let negative = scaled.is_negative();
    let magnitude = scaled.abs();

    let int_part = &magnitude / &scale;
    let mut frac = (&magnitude % &scale).to_str_radix(10);
    while (frac.len() as u32) < digits {
        frac.insert(0, '0');
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{int_part}.{frac}")
}
