// src/token.rs

use crate::error::CalcError;

/// Lexical class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator,
}

/// One lexical unit: its class, its raw text, and the zero-based
/// code-point offset where it starts in the ORIGINAL input (error
/// messages point at this offset).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn number(text: impl Into<String>, position: usize) -> Self {
        Token {
            kind: TokenKind::Number,
            text: text.into(),
            position,
        }
    }

    pub fn operator(symbol: char, position: usize) -> Self {
        Token {
            kind: TokenKind::Operator,
            text: symbol.to_string(),
            position,
        }
    }
}

/* ------------------------ Operator table ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Fixed descriptor for one operator symbol.
///
/// Multiplication is spelled `x`, not `*` — deliberate, and part of the
/// accepted grammar. All four operators are left-associative; `Right`
/// exists in the type but nothing uses it today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    pub symbol: char,
    pub precedence: u8,
    pub associativity: Assoc,
}

const fn op(symbol: char, precedence: u8) -> Operator {
    Operator {
        symbol,
        precedence,
        associativity: Assoc::Left,
    }
}

/// Looks a symbol up in the process-wide operator table.
pub fn operator(symbol: char) -> Option<Operator> {
    match symbol {
        '+' => Some(op('+', 1)),
        '-' => Some(op('-', 1)),
        'x' => Some(op('x', 2)),
        '/' => Some(op('/', 2)),
        _ => None,
    }
}

/* ------------------------ Tokenizer ------------------------ */

/// Tokenizes an expression string.
///
/// Supports:
/// - decimal literals (`12`, `0.5`, `.5`, `5.`)
/// - hexadecimal literals (`0xFF`, `0Xab`)
/// - negative literals where a `-` can open a number (see below)
/// - operators `+ - x /`
/// - whitespace between tokens (skipped, positions unaffected)
///
/// The whole input is checked against the allowed character set before
/// any token is built, so a bad character fails fast with its exact
/// code-point offset.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    if input.trim().is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let chars: Vec<char> = input.chars().collect();

    for (i, &c) in chars.iter().enumerate() {
        if !is_valid_character(c) {
            return Err(CalcError::InvalidCharacter {
                character: c,
                position: i,
            });
        }
    }

    let mut tokens: Vec<Token> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Numbers before operators: a `-` may open a negative literal.
        if starts_number(&chars, i, &tokens) {
            let start = i;
            i = scan_number(&chars, i);
            let text: String = chars[start..i].iter().collect();
            tokens.push(Token::number(text, start));
            continue;
        }

        if operator(c).is_some() {
            tokens.push(Token::operator(c, i));
            i += 1;
            continue;
        }

        return Err(CalcError::InvalidCharacter {
            character: c,
            position: i,
        });
    }

    Ok(tokens)
}

/// Allowed set: hex digits, `x`/`X`, `+`, `-`, `.`, `/`, whitespace.
fn is_valid_character(c: char) -> bool {
    c.is_ascii_hexdigit()
        || c == 'x'
        || c == 'X'
        || c == '+'
        || c == '-'
        || c == '.'
        || c == '/'
        || c.is_whitespace()
}

/// Does a number token start at `chars[i]`?
///
/// A `-` opens a literal only when it is immediately followed by a
/// digit, a `.`, or a `0x`/`0X` prefix AND it sits at the start of
/// input or right after an operator token. Right after a number, `-`
/// is always binary subtraction — this is what makes `-5 + 3` and
/// `5 - -3` parse while keeping `-` an operator in `5 - 3`.
fn starts_number(chars: &[char], i: usize, tokens: &[Token]) -> bool {
    let c = chars[i];

    if c.is_ascii_digit() || c == '.' {
        return true;
    }
    if c != '-' {
        return false;
    }

    if i + 1 >= chars.len() {
        return false;
    }
    let next = chars[i + 1];
    // A `0x` prefix also begins with a digit, so this covers `-0xFF`.
    if !next.is_ascii_digit() && next != '.' {
        return false;
    }

    match tokens.last() {
        None => true,
        Some(prev) => prev.kind == TokenKind::Operator,
    }
}

/// Greedy scan of one number literal starting at `i`; returns the
/// offset just past it.
fn scan_number(chars: &[char], mut i: usize) -> usize {
    if chars[i] == '-' {
        i += 1;
    }

    // Hex literal: 0x prefix then hex digits.
    if i + 1 < chars.len() && chars[i] == '0' && (chars[i + 1] == 'x' || chars[i + 1] == 'X') {
        i += 2;
        while i < chars.len() && chars[i].is_ascii_hexdigit() {
            i += 1;
        }
        return i;
    }

    // Decimal literal: digits, optional point, more digits.
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }
    i
}
