// src/eval.rs

use num_rational::BigRational;
use num_traits::Zero;

use crate::error::CalcError;
use crate::number::{parse_decimal, parse_hexadecimal};
use crate::token::{Token, TokenKind};

/// Evaluates a postfix token sequence down to one exact rational.
///
/// Numbers are parsed (hex or decimal, chosen by prefix) and pushed on
/// a value stack; each operator pops two operands and pushes the
/// result. Every arithmetic step is exact rational arithmetic; nothing
/// is ever rounded.
pub fn evaluate_postfix(tokens: &[Token]) -> Result<BigRational, CalcError> {
    let mut stack: Vec<BigRational> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => stack.push(parse_literal(token)?),

            TokenKind::Operator => {
                // Right operand first; order matters for `-` and `/`.
                let right = stack.pop().ok_or_else(|| insufficient(token))?;
                let left = stack.pop().ok_or_else(|| insufficient(token))?;
                stack.push(apply_operator(left, right, token)?);
            }
        }
    }

    // A well-formed postfix sequence leaves exactly one value. Anything
    // else means the sequence handed to us was malformed; report it as
    // a recoverable error rather than a crash.
    match stack.pop() {
        Some(value) if stack.is_empty() => Ok(value),
        _ => Err(CalcError::parse("invalid expression structure", 0)),
    }
}

/// Parses a number token's literal text, dispatching on a
/// case-insensitive `0x` / `-0x` prefix.
fn parse_literal(token: &Token) -> Result<BigRational, CalcError> {
    let literal = token.text.as_str();
    let parsed = if is_hex_literal(literal) {
        parse_hexadecimal(literal)
    } else {
        parse_decimal(literal)
    };

    parsed.map_err(|_| {
        CalcError::parse(
            format!("invalid number format: {literal}"),
            token.position,
        )
    })
}

fn is_hex_literal(text: &str) -> bool {
    let magnitude = text.strip_prefix('-').unwrap_or(text);
    magnitude.starts_with("0x") || magnitude.starts_with("0X")
}

fn insufficient(token: &Token) -> CalcError {
    CalcError::parse("insufficient operands for operator", token.position)
}

fn apply_operator(
    left: BigRational,
    right: BigRational,
    token: &Token,
) -> Result<BigRational, CalcError> {
    match token.text.as_str() {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        "x" => Ok(left * right),
        "/" => {
            // Exact comparison; 0.0000...1 is NOT zero here.
            if right.is_zero() {
                return Err(CalcError::DivisionByZero {
                    position: token.position,
                });
            }
            Ok(left / right)
        }
        other => Err(CalcError::parse(
            format!("unknown operator: {other}"),
            token.position,
        )),
    }
}
