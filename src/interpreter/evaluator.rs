/// Core evaluation logic.
///
/// Contains the two-stack operator-precedence machine shared by evaluation
/// and postfix rendering, the numeric operand stack, and the public
/// `evaluate_tokens` entry point.
pub mod core;

/// Operator stack entries.
///
/// Defines the precedence table and the associativity rule that decides when
/// a stacked operator is reduced.
pub mod operator;

/// Unary operator evaluation.
///
/// Handles prefix signs applied to a single operand.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators and the checks that keep every result
/// finite.
pub mod binary;
