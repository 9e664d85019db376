//! Exact-rational expression calculator.
//!
//! Evaluates arithmetic over decimal and hexadecimal literals with
//! lossless rational arithmetic: `0.1 + 0.2` is exactly 3/10 here,
//! never `0.30000000000000004`. Multiplication is spelled `x`.
//!
//! Pipeline:
//! input string -> tokens -> postfix (shunting-yard) -> exact result
//!
//! Internal organisation:
//! - number.rs     : decimal / hex literal parsers (exact, no floats)
//! - token.rs      : tokenization + operator table
//! - parser.rs     : structural validation + infix-to-postfix
//! - eval.rs       : postfix evaluation over a value stack
//! - calculator.rs : pipeline orchestration
//! - format.rs     : display heuristics for the CLI
//! - error.rs      : error taxonomy

pub mod calculator;
pub mod error;
pub mod eval;
pub mod format;
pub mod number;
pub mod parser;
pub mod token;

#[cfg(test)]
mod tests_pipeline;

// Public surface
pub use calculator::{calculate, evaluate, validate_expression, Expression};
pub use error::CalcError;
pub use eval::evaluate_postfix;
pub use format::{format_rational, format_result};
pub use number::{parse_decimal, parse_hexadecimal};
pub use parser::parse_expression;
pub use token::{tokenize, Assoc, Operator, Token, TokenKind};
