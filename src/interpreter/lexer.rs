use std::iter::FusedIterator;

use log::debug;
use logos::Logos;

use crate::error::LexError;

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Reason the raw scanner rejected a slice of input.
///
/// Logos reports unrecognized input with the `Default` variant; literal
/// callbacks report the other two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFailure {
    /// The slice is not part of the accepted character set.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and dots is not a valid decimal number.
    MalformedNumber,
    /// The literal parsed to an infinite value.
    LiteralTooLarge,
}

/// Character classes recognized in the source, before sign classification.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexFailure)]
#[logos(skip r"[ \t\n\r\f]+")]
enum RawToken {
    /// Maximal run of digits and dots, validated by `parse_number`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Represents a lexical token of an arithmetic expression.
///
/// `+` and `-` are split into binary and unary variants by the
/// [`Tokenizer`], so the evaluator never has to look behind.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    Number(f64),
    /// Binary `+`
    Plus,
    /// Binary `-`
    Minus,
    /// `*`, either written or inserted for implicit multiplication.
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Prefix `-`
    UnaryMinus,
    /// Prefix `+`
    UnaryPlus,
    /// End of input. Always the last token of a stream.
    End,
}

impl Token {
    /// Whether a `+`/`-` following this token is a sign rather than a binary
    /// operator.
    #[must_use]
    pub const fn allows_unary_after(&self) -> bool {
        matches!(self,
                 Self::LParen
                 | Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Percent
                 | Self::UnaryMinus
                 | Self::UnaryPlus)
    }

    /// Human readable form used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::End => "end of input".to_string(),
            _ => format!("'{self}'"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus | Self::UnaryPlus => write!(f, "+"),
            Self::Minus | Self::UnaryMinus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::End => write!(f, "<end>"),
        }
    }
}

/// Lazy token stream over an expression.
///
/// Yields `(Token, position)` pairs, where `position` is the byte offset of
/// the token in the source. The stream always finishes with
/// [`Token::End`] unless a lexing error occurs first; after an error or after
/// `End` the iterator is exhausted.
///
/// Two rewrites happen here:
/// - `+`/`-` become [`Token::UnaryPlus`]/[`Token::UnaryMinus`] when they open
///   the expression or follow an operator or `(`.
/// - A number or `(` directly after `)` is preceded by a synthetic
///   [`Token::Star`], so `(11+2)12` reads as `(11+2)*12`.
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, RawToken>,
    previous: Option<Token>,
    pending:  Option<(Token, usize)>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    RawToken::lexer(source),
               previous: None,
               pending:  None,
               finished: false, }
    }

    fn expects_operand(&self) -> bool {
        self.previous.is_none_or(|token| token.allows_unary_after())
    }

    fn classify(&self, raw: RawToken) -> Token {
        match raw {
            RawToken::Number(value) => Token::Number(value),
            RawToken::Plus if self.expects_operand() => Token::UnaryPlus,
            RawToken::Plus => Token::Plus,
            RawToken::Minus if self.expects_operand() => Token::UnaryMinus,
            RawToken::Minus => Token::Minus,
            RawToken::Star => Token::Star,
            RawToken::Slash => Token::Slash,
            RawToken::Percent => Token::Percent,
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
        }
    }

    fn lex_error(&self, failure: LexFailure, position: usize) -> LexError {
        let slice = self.lexer.slice();
        match failure {
            LexFailure::UnexpectedCharacter => {
                LexError::UnexpectedCharacter { character: slice.chars()
                                                                .next()
                                                                .unwrap_or(char::REPLACEMENT_CHARACTER),
                                                position }
            },
            LexFailure::MalformedNumber => LexError::MalformedNumber { literal: slice.to_string(),
                                                                       position },
            LexFailure::LiteralTooLarge => LexError::LiteralTooLarge { position },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = LexResult<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            self.previous = Some(pending.0);
            return Some(Ok(pending));
        }
        if self.finished {
            return None;
        }

        let Some(raw) = self.lexer.next() else {
            self.finished = true;
            self.previous = Some(Token::End);
            return Some(Ok((Token::End, self.lexer.source().len())));
        };
        let position = self.lexer.span().start;

        let token = match raw {
            Ok(raw) => self.classify(raw),
            Err(failure) => {
                self.finished = true;
                return Some(Err(self.lex_error(failure, position)));
            },
        };

        if self.previous == Some(Token::RParen) && matches!(token, Token::Number(_) | Token::LParen) {
            debug!("implicit multiplication before {} at position {position}", token.describe());
            self.pending = Some((token, position));
            self.previous = Some(Token::Star);
            return Some(Ok((Token::Star, position)));
        }

        self.previous = Some(token);
        Some(Ok((token, position)))
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Tokenizes a whole expression eagerly.
///
/// # Errors
/// Returns the first [`LexError`] met in the source.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("-(1)2").unwrap().into_iter().map(|(t, _)| t).collect();
/// assert_eq!(tokens,
///            vec![Token::UnaryMinus,
///                 Token::LParen,
///                 Token::Number(1.0),
///                 Token::RParen,
///                 Token::Star,
///                 Token::Number(2.0),
///                 Token::End]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<(Token, usize)>> {
    Tokenizer::new(source).collect()
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if the slice is a valid, finite decimal.
/// - `Err(LexFailure::MalformedNumber)`: If the slice is not a decimal, such
///   as `1.2.3` or a lone `.`.
/// - `Err(LexFailure::LiteralTooLarge)`: If the value overflows `f64`.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Result<f64, LexFailure> {
    let value: f64 = lex.slice().parse().map_err(|_| LexFailure::MalformedNumber)?;
    if value.is_finite() { Ok(value) } else { Err(LexFailure::LiteralTooLarge) }
}
