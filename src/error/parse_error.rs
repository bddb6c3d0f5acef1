#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while resolving operator precedence.
pub enum ParseError {
    /// The input contained no tokens besides whitespace.
    EmptyExpression {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// An operator was found where a number, a sign or `(` was expected, or
    /// the input ended right after an operator.
    MissingOperand {
        /// The token encountered instead of an operand.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// A number or `(` directly followed a complete operand.
    MissingOperator {
        /// The token encountered instead of an operator.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// A closing parenthesis `)` had no matching `(`.
    UnmatchedClosingParen {
        /// Byte offset of the `)` in the source.
        position: usize,
    },
    /// An opening parenthesis `(` was never closed.
    UnclosedParen {
        /// Byte offset of the `(` in the source.
        position: usize,
    },
    /// A pair of parentheses enclosed nothing.
    EmptyParens {
        /// Byte offset of the `)` in the source.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::EmptyExpression { position }
            | Self::MissingOperand { position, .. }
            | Self::MissingOperator { position, .. }
            | Self::UnmatchedClosingParen { position }
            | Self::UnclosedParen { position }
            | Self::EmptyParens { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression { position } => {
                write!(f, "Error at position {position}: Expression is empty.")
            },

            Self::MissingOperand { token, position } => write!(f,
                                                               "Error at position {position}: Expected a number or '(' but found {token}."),

            Self::MissingOperator { token, position } => write!(f,
                                                                "Error at position {position}: Expected an operator but found {token}."),

            Self::UnmatchedClosingParen { position } => write!(f,
                                                               "Error at position {position}: Closing parenthesis ')' has no matching '('."),

            Self::UnclosedParen { position } => write!(f,
                                                       "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::EmptyParens { position } => {
                write!(f, "Error at position {position}: Parentheses enclose no expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
