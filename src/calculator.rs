// src/calculator.rs
//
// Pipeline orchestration: tokenize -> validate/reorder -> evaluate.
// The first error short-circuits; nothing here holds state across
// calls, so concurrent callers need no coordination.

use num_rational::BigRational;

use crate::error::CalcError;
use crate::eval::evaluate_postfix;
use crate::parser::parse_expression;
use crate::token::{tokenize, Token};

/// Everything one evaluation produced: the original text, both token
/// orders, and the exact result. A convenience bundle for tooling and
/// tests; [`calculate`] is the plain entry point.
#[derive(Clone, Debug)]
pub struct Expression {
    pub original: String,
    pub tokens: Vec<Token>,
    pub postfix: Vec<Token>,
    pub result: BigRational,
}

/// Evaluates an expression string to its exact rational value.
///
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use precise_calc::calculate;
///
/// let exact = BigRational::new(BigInt::from(3), BigInt::from(10));
/// assert_eq!(calculate("0.1 + 0.2").unwrap(), exact);
/// ```
pub fn calculate(expression: &str) -> Result<BigRational, CalcError> {
    Ok(evaluate(expression)?.result)
}

/// Like [`calculate`], but keeps the intermediate token sequences.
///
/// Token positions are offsets into `expression` exactly as given; the
/// input is not trimmed first.
pub fn evaluate(expression: &str) -> Result<Expression, CalcError> {
    let tokens = tokenize(expression)?;
    let postfix = parse_expression(&tokens)?;
    let result = evaluate_postfix(&postfix)?;

    Ok(Expression {
        original: expression.to_string(),
        tokens,
        postfix,
        result,
    })
}

/// Checks an expression's shape (characters + structure) without
/// evaluating it.
pub fn validate_expression(expression: &str) -> Result<(), CalcError> {
    let tokens = tokenize(expression)?;
    parse_expression(&tokens).map(|_| ())
}
