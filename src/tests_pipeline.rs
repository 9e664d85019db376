// src/tests_pipeline.rs
//
// End-to-end suite over `calculate`: the whole pipeline exercised
// through the public entry point, with results compared either as
// exact rationals or through `format_rational`.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::calculator::calculate;
use crate::error::CalcError;
use crate::format::format_rational;
use crate::token::tokenize;

fn result_of(expression: &str) -> BigRational {
    calculate(expression)
        .unwrap_or_else(|e| panic!("calculate({expression:?}) failed: {e}"))
}

fn formatted(expression: &str) -> String {
    format_rational(&result_of(expression))
}

fn error_of(expression: &str) -> CalcError {
    calculate(expression)
        .err()
        .unwrap_or_else(|| panic!("calculate({expression:?}) unexpectedly succeeded"))
}

fn rat(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

#[test]
fn basic_arithmetic() {
    let cases = [
        ("5 + 3", "8"),
        ("10 - 4", "6"),
        ("3 x 7", "21"),
        ("15 / 3", "5"),
    ];
    for (expression, expected) in cases {
        assert_eq!(formatted(expression), expected, "{expression}");
    }
}

#[test]
fn operator_precedence() {
    let cases = [
        ("2 + 3 x 4", "14"),
        ("20 / 4 + 1", "6"),
        ("2 + 3 x 4 - 1", "13"),
        ("100 / 10 + 2 x 5", "20"),
        ("1 + 2 x 3 + 4 x 5", "27"),
        // Equal precedence runs left to right.
        ("10 - 2 x 3 + 1", "5"),
    ];
    for (expression, expected) in cases {
        assert_eq!(formatted(expression), expected, "{expression}");
    }
}

#[test]
fn no_precision_loss() {
    assert_eq!(result_of("0.1 + 0.2"), rat(3, 10));

    let expected = BigRational::new(
        BigInt::parse_bytes(b"1000000000000001", 10).unwrap(),
        BigInt::from(10).pow(16),
    );
    assert_eq!(result_of("0.0000000000000001 + 0.1"), expected);
}

#[test]
fn trailing_zero_padding_is_equivalent() {
    assert_eq!(result_of("0.10 + 0.20"), result_of("0.1 + 0.2"));
    assert_eq!(result_of("1.000 x 3"), result_of("1 x 3"));
}

#[test]
fn slash_builds_fractions() {
    // `/` is plain division, so thirds survive exactly.
    assert_eq!(formatted("1/3 + 1/3 + 1/3"), "1");
    assert_eq!(formatted("1 / 3"), "1/3");
}

#[test]
fn hex_arithmetic() {
    let cases = [
        ("0xFF + 1", "256"),
        ("0xAB91 + 100", "44021"),
        ("0.5 + 0xFF", "511/2"),
        ("-0xFF + 256", "1"),
        ("0x0 + 0", "0"),
        // Prefix and digits are case-insensitive.
        ("0XFF - 0xff", "0"),
    ];
    for (expression, expected) in cases {
        assert_eq!(formatted(expression), expected, "{expression}");
    }
}

#[test]
fn negative_literal_disambiguation() {
    assert_eq!(formatted("-5 + 3"), "-2");
    assert_eq!(formatted("5 - -3"), "8");
    assert_eq!(formatted("5-3"), "2");
    assert_eq!(formatted("-5+-3"), "-8");

    // Same distinction at the token level.
    assert_eq!(tokenize("5-3").unwrap().len(), 3);
    assert_eq!(tokenize("-5+3").unwrap().len(), 3);
    assert_eq!(tokenize("-5+3").unwrap()[0].text, "-5");
}

#[test]
fn long_mixed_expression() {
    let expected = BigRational::new(
        BigInt::parse_bytes(b"-1000000000439198999999999999999", 10).unwrap(),
        BigInt::from(10).pow(16),
    );
    assert_eq!(
        result_of("0.0000000000000001 + 0.1 + -99999999999999 - 0xab91"),
        expected
    );
}

#[test]
fn division_by_zero() {
    // The reported position is the operator's, not the zero operand's.
    assert_eq!(error_of("5 / 0"), CalcError::DivisionByZero { position: 2 });
    assert_eq!(error_of("10 / 2 / 0"), CalcError::DivisionByZero { position: 7 });
    // The divisor must be EXACTLY zero for the error to fire.
    assert!(calculate("5 / 0.0000000000000001").is_ok());
}

#[test]
fn error_taxonomy_end_to_end() {
    assert_eq!(error_of(""), CalcError::EmptyExpression);
    assert_eq!(error_of("   "), CalcError::EmptyExpression);

    assert_eq!(
        error_of("5 + @"),
        CalcError::InvalidCharacter {
            character: '@',
            position: 4
        }
    );

    assert!(matches!(error_of("5 + + 3"), CalcError::ParseError { .. }));
    assert!(matches!(error_of("5 +"), CalcError::ParseError { .. }));
    assert!(matches!(error_of("+ 5"), CalcError::ParseError { .. }));

    // 'G' is outside the allowed character set, so this fails in the
    // tokenizer's pre-pass; parse_hexadecimal("0xGHI") itself is a
    // ParseError (covered in number.rs).
    assert_eq!(
        error_of("0xGHI"),
        CalcError::InvalidCharacter {
            character: 'G',
            position: 2
        }
    );
}

#[test]
fn every_error_formats_to_one_line() {
    for expression in ["", "5 + @", "5 + + 3", "5 /0 x", "5 / 0"] {
        if let Err(err) = calculate(expression) {
            let line = err.to_string();
            assert!(!line.is_empty());
            assert!(!line.contains('\n'));
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    for expression in ["0.1 + 0.2", "10 - 2 x 3 + 1", "0xFF / 4", "-5 + 3"] {
        let first = result_of(expression);
        for _ in 0..3 {
            assert_eq!(result_of(expression), first, "{expression}");
        }
    }
}
