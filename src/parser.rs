// src/parser.rs
//
// Structural validation + shunting-yard.
//
// A well-formed token sequence strictly alternates
// number / operator / number / ... / number (odd length, numbers at
// both ends). Anything else is a parse error at the offending token;
// the tokenizer deliberately lets these shapes through.

use crate::error::CalcError;
use crate::token::{operator, Assoc, Operator, Token, TokenKind};

/// Validates the token sequence and reorders it into postfix.
///
/// The returned sequence is directly consumable by the evaluator: no
/// precedence logic is needed past this point.
pub fn parse_expression(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let last = match tokens.last() {
        Some(last) => last,
        None => return Err(CalcError::EmptyExpression),
    };

    if last.kind != TokenKind::Number {
        return Err(CalcError::parse(
            "expression must end with a number",
            last.position,
        ));
    }

    for (i, token) in tokens.iter().enumerate() {
        // Even slots hold numbers, odd slots operators.
        let (expected, message) = if i % 2 == 0 {
            (TokenKind::Number, "expected a number")
        } else {
            (TokenKind::Operator, "expected an operator")
        };
        if token.kind != expected {
            return Err(CalcError::parse(message, token.position));
        }
    }

    infix_to_postfix(tokens)
}

/// Shunting-yard: numbers go straight to the output; an incoming
/// operator first pops every stack operator of higher-or-equal
/// precedence (left-associative rule; a right-associative operator
/// would pop on strictly-higher only).
pub fn infix_to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => output.push(token.clone()),

            TokenKind::Operator => {
                let incoming = lookup(token)?;

                while let Some(top) = ops.last() {
                    let stacked = lookup(top)?;
                    let pops = match incoming.associativity {
                        Assoc::Left => stacked.precedence >= incoming.precedence,
                        Assoc::Right => stacked.precedence > incoming.precedence,
                    };
                    if !pops {
                        break;
                    }
                    output.push(ops.pop().unwrap());
                }

                ops.push(token.clone());
            }
        }
    }

    while let Some(op) = ops.pop() {
        output.push(op);
    }

    Ok(output)
}

fn lookup(token: &Token) -> Result<Operator, CalcError> {
    token
        .text
        .chars()
        .next()
        .and_then(operator)
        .ok_or_else(|| {
            CalcError::parse(
                format!("unknown operator: {}", token.text),
                token.position,
            )
        })
}
