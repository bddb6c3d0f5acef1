#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while applying an operator.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` in the source.
        position: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// Byte offset of the `%` in the source.
        position: usize,
    },
    /// An operation on finite operands produced an infinite result.
    Overflow {
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl ArithmeticError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::ModuloByZero { position }
            | Self::Overflow { position } => *position,
        }
    }
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::ModuloByZero { position } => {
                write!(f, "Error at position {position}: Modulo by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for ArithmeticError {}
