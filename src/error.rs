/// Lexing errors.
///
/// Raised while scanning the raw expression text: characters outside the
/// recognized set and numeric literals that cannot be read as an `f64`.
pub mod lex_error;
/// Parsing errors.
///
/// Raised by the operator-precedence pass when the token sequence is not a
/// well-formed expression: missing operands or operators, unbalanced
/// parentheses, or an empty input.
pub mod parse_error;
/// Arithmetic errors.
///
/// Raised while reducing operators whose result would not be a finite number,
/// such as division or modulo by zero.
pub mod arithmetic_error;

pub use arithmetic_error::ArithmeticError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

#[derive(Debug, Clone, PartialEq)]
/// Any failure produced while evaluating an expression.
pub enum CalcError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens do not form a valid expression.
    Parse(ParseError),
    /// An operator produced a non-finite result.
    Arithmetic(ArithmeticError),
}

impl CalcError {
    /// Byte offset in the source where the failure was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Arithmetic(e) => e.position(),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for CalcError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<ArithmeticError> for CalcError {
    fn from(value: ArithmeticError) -> Self {
        Self::Arithmetic(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Arithmetic(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}
