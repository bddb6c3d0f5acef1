use log::trace;

use crate::{
    error::{CalcError, LexError, ParseError},
    interpreter::{evaluator::operator::OperatorEntry, lexer::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `CalcError` describing the failure.
pub type EvalResult<T> = Result<T, CalcError>;

/// Receives operands and reduced operators from [`EvalState`].
///
/// The operator-precedence pass only decides *when* an operator is applied;
/// the implementor decides what applying means. [`OperandStack`] computes the
/// value, `PostfixOutput` records the reverse-Polish order.
pub trait Operands {
    /// What the pass produces once `End` is reached.
    type Output;

    /// Records a numeric literal.
    fn push_number(&mut self, value: f64, position: usize);

    /// Applies an operator popped from the operator stack. Never called with
    /// a boundary entry.
    fn apply(&mut self, entry: &OperatorEntry) -> EvalResult<()>;

    /// Produces the final output after every operator has been applied.
    fn finish(&mut self, position: usize) -> EvalResult<Self::Output>;
}

/// What the next token has to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// A number, a sign or `(`.
    Operand,
    /// A binary operator, `)` or the end of input.
    Operator,
}

/// Transient state of one operator-precedence pass.
///
/// Owns the operand side (`O`) and the operator stack. Both are created at
/// the start of a pass and dropped at its end; nothing survives between
/// calls.
pub struct EvalState<O> {
    operands:  O,
    operators: Vec<OperatorEntry>,
    expect:    Expect,
    previous:  Option<Token>,
}

impl<O: Operands> EvalState<O> {
    /// Creates an empty pass over `operands`.
    #[must_use]
    pub const fn new(operands: O) -> Self {
        Self { operands,
               operators: Vec::new(),
               expect: Expect::Operand,
               previous: None }
    }

    /// Feeds one token to the pass.
    ///
    /// Returns `Ok(Some(output))` once [`Token::End`] has been processed and
    /// `Ok(None)` for every other token.
    ///
    /// # Errors
    /// - `ParseError` when the token is not allowed in the current state or
    ///   parentheses do not balance.
    /// - Whatever [`Operands::apply`] reports for reduced operators.
    pub fn feed(&mut self, token: Token, position: usize) -> EvalResult<Option<O::Output>> {
        match token {
            Token::Number(value) => {
                self.require(Expect::Operand, token, position)?;
                self.operands.push_number(value, position);
                self.expect = Expect::Operator;
            },
            Token::LParen => {
                self.require(Expect::Operand, token, position)?;
                self.operators.push(OperatorEntry::new(token, position));
            },
            Token::UnaryMinus | Token::UnaryPlus => {
                self.require(Expect::Operand, token, position)?;
                let incoming = OperatorEntry::new(token, position);
                self.reduce_while(|top| top.reduces_before(&incoming))?;
                self.operators.push(incoming);
            },
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Percent => {
                self.require(Expect::Operator, token, position)?;
                let incoming = OperatorEntry::new(token, position);
                self.reduce_while(|top| top.reduces_before(&incoming))?;
                self.operators.push(incoming);
                self.expect = Expect::Operand;
            },
            Token::RParen => {
                if self.expect == Expect::Operand {
                    return Err(if self.previous == Some(Token::LParen) {
                                   ParseError::EmptyParens { position }.into()
                               } else {
                                   Self::missing_operand(token, position)
                               });
                }
                self.close_group(position)?;
            },
            Token::End => return self.finish(position).map(Some),
        }
        self.previous = Some(token);
        Ok(None)
    }

    fn require(&self, expected: Expect, token: Token, position: usize) -> EvalResult<()> {
        match (expected, self.expect) {
            (Expect::Operand, Expect::Operator) => {
                Err(ParseError::MissingOperator { token: token.describe(),
                                                  position }.into())
            },
            (Expect::Operator, Expect::Operand) => Err(Self::missing_operand(token, position)),
            _ => Ok(()),
        }
    }

    fn missing_operand(token: Token, position: usize) -> CalcError {
        ParseError::MissingOperand { token: token.describe(),
                                     position }.into()
    }

    /// Pops and applies operators for as long as `predicate` holds for the
    /// top of the operator stack.
    fn reduce_while<F>(&mut self, predicate: F) -> EvalResult<()>
        where F: Fn(&OperatorEntry) -> bool
    {
        while let Some(top) = self.operators.last().copied()
              && predicate(&top)
        {
            self.operators.pop();
            self.reduce(&top)?;
        }
        Ok(())
    }

    fn reduce(&mut self, entry: &OperatorEntry) -> EvalResult<()> {
        trace!("applying {} from position {}", entry.token.describe(), entry.position);
        self.operands.apply(entry)
    }

    /// Applies everything down to the innermost open parenthesis and discards
    /// it.
    fn close_group(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                None => return Err(ParseError::UnmatchedClosingParen { position }.into()),
                Some(entry) if entry.is_boundary() => break,
                Some(entry) => self.reduce(&entry)?,
            }
        }
        self.expect = Expect::Operator;
        Ok(())
    }

    fn finish(&mut self, position: usize) -> EvalResult<O::Output> {
        if self.expect == Expect::Operand {
            return Err(if self.previous.is_none() {
                           ParseError::EmptyExpression { position }.into()
                       } else {
                           Self::missing_operand(Token::End, position)
                       });
        }
        while let Some(entry) = self.operators.pop() {
            if entry.is_boundary() {
                return Err(ParseError::UnclosedParen { position: entry.position }.into());
            }
            self.reduce(&entry)?;
        }
        self.previous = Some(Token::End);
        self.operands.finish(position)
    }
}

/// Runs one operator-precedence pass over `tokens`.
///
/// The token stream is pulled lazily, so a [`Tokenizer`] is only advanced as
/// far as needed: the first lexing error ends the pass. A stream that stops
/// without [`Token::End`] is finished as if `End` followed its last token.
///
/// # Errors
/// The first `LexError`, `ParseError` or `ArithmeticError` met.
///
/// [`Tokenizer`]: crate::interpreter::lexer::Tokenizer
pub fn run<O, I>(tokens: I, operands: O) -> EvalResult<O::Output>
    where O: Operands,
          I: IntoIterator<Item = Result<(Token, usize), LexError>>
{
    let mut state = EvalState::new(operands);
    let mut end = 0;

    for item in tokens {
        let (token, position) = item?;
        end = position;
        if let Some(output) = state.feed(token, position)? {
            return Ok(output);
        }
    }

    state.finish(end)
}

/// The numeric operand stack.
///
/// Top of the stack is the most recent value. Binary operators pop the right
/// operand first and then the left one.
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    /// Creates an empty operand stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    fn pop(&mut self, entry: &OperatorEntry) -> EvalResult<f64> {
        self.values
            .pop()
            .ok_or_else(|| {
                ParseError::MissingOperand { token: entry.token.describe(),
                                             position: entry.position }.into()
            })
    }
}

impl Operands for OperandStack {
    type Output = f64;

    fn push_number(&mut self, value: f64, _position: usize) {
        self.values.push(value);
    }

    fn apply(&mut self, entry: &OperatorEntry) -> EvalResult<()> {
        let value = if entry.is_unary() {
            let operand = self.pop(entry)?;
            Self::eval_unary(entry.token, operand)
        } else {
            let right = self.pop(entry)?;
            let left = self.pop(entry)?;
            Self::eval_binary(entry.token, left, right, entry.position)?
        };
        self.values.push(value);
        Ok(())
    }

    fn finish(&mut self, position: usize) -> EvalResult<f64> {
        match (self.values.pop(), self.values.is_empty()) {
            (Some(value), true) => Ok(value),
            (Some(_), false) => {
                Err(ParseError::MissingOperator { token: Token::End.describe(),
                                                  position }.into())
            },
            (None, _) => Err(ParseError::EmptyExpression { position }.into()),
        }
    }
}

/// Evaluates a token stream to a single `f64`.
///
/// Accepts any iterator of tokenizer items, in particular a
/// [`Tokenizer`](crate::interpreter::lexer::Tokenizer) itself.
///
/// # Errors
/// - `LexError` forwarded from the token stream.
/// - `ParseError` for unbalanced parentheses, missing operands or operators,
///   and empty input.
/// - `ArithmeticError` for division or modulo by zero and overflow.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     evaluator::core::evaluate_tokens,
///     lexer::{Tokenizer, tokenize},
/// };
///
/// assert_eq!(evaluate_tokens(Tokenizer::new("2 + 3 * 4")).unwrap(), 14.0);
///
/// let tokens = tokenize("(11+2)12").unwrap();
/// assert_eq!(evaluate_tokens(tokens.into_iter().map(Ok)).unwrap(), 156.0);
/// ```
pub fn evaluate_tokens<I>(tokens: I) -> EvalResult<f64>
    where I: IntoIterator<Item = Result<(Token, usize), LexError>>
{
    run(tokens, OperandStack::new())
}
