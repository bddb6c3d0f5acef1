//! # tally
//!
//! tally is an arithmetic expression evaluator written in Rust.
//! It tokenizes and evaluates infix expressions over `f64` with the operators
//! `+ - * / %`, signs, parentheses and implicit multiplication after a closing
//! parenthesis.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. Each error carries the byte offset in the source where the
/// failure was detected.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, arithmetic).
/// - Wraps them in `CalcError`, the error type of the public API.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates tokenizing and evaluation.
///
/// This module ties together the lexer, the operator-precedence evaluator and
/// the postfix renderer.
///
/// # Responsibilities
/// - Exposes the tokenizer and the evaluator as separate stages.
/// - Manages the flow of tokens and errors between them.
pub mod interpreter;

pub use error::CalcError;
pub use interpreter::{
    evaluator::core::evaluate_tokens,
    lexer::{Token, Tokenizer, tokenize},
    postfix::{format_postfix, to_postfix},
};

/// Evaluates an arithmetic expression.
///
/// This function tokenizes `source` lazily and evaluates it in a single
/// left-to-right pass. Each call owns its own stacks, so it can be used from
/// any number of threads at once.
///
/// # Errors
/// - `CalcError::Lex` for unknown characters or malformed numbers.
/// - `CalcError::Parse` for unbalanced parentheses, missing operands or
///   operators, and empty input.
/// - `CalcError::Arithmetic` for division or modulo by zero and for results
///   that overflow `f64`.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("77 * 12").unwrap(), 924.0);
/// assert_eq!(evaluate("(11+2)12").unwrap(), 156.0);
/// assert_eq!(evaluate("0*1--3").unwrap(), 3.0);
///
/// // Division by zero is an error, never infinity.
/// assert!(evaluate("1 / (2 - 2)").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, CalcError> {
    let value = evaluate_tokens(Tokenizer::new(source))?;
    debug!("evaluated {source:?} to {value}");
    Ok(value)
}
