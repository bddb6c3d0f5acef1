#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum LexError {
    /// Found a character that is not a digit, `.`, whitespace, an operator or
    /// a parenthesis.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A run of digits and dots could not be read as a decimal number.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A literal value was too large to be represented as a finite `f64`.
    LiteralTooLarge {
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at position {position}: Unexpected character '{character}'.")
            },
            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at position {position}: Malformed number '{literal}'.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
