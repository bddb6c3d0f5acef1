/// The evaluator module reduces tokens to a number.
///
/// The evaluator consumes the token stream with a two-stack
/// operator-precedence algorithm: an operand stack of `f64` values and an
/// operator stack of pending operators. No syntax tree is built.
///
/// # Responsibilities
/// - Resolves precedence, associativity and parenthesis nesting.
/// - Applies unary and binary operators to the operand stack.
/// - Reports malformed token sequences and arithmetic failures such as
///   division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions for the evaluator.
///
/// The lexer reads the raw expression text and produces a lazy stream of
/// tokens: numbers, operators and parentheses, each paired with its byte
/// offset.
///
/// # Responsibilities
/// - Converts the input characters into tokens, skipping whitespace.
/// - Decides whether each `+`/`-` is a sign or a binary operator.
/// - Inserts the implicit `*` between `)` and a following number or `(`.
/// - Reports unknown characters and malformed numeric literals.
pub mod lexer;
/// The postfix module renders expressions in reverse-Polish order.
///
/// It reuses the evaluator's precedence pass but records operators instead of
/// applying them, which shows exactly how an expression was understood.
pub mod postfix;
