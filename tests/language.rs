use std::fs;

use tally::{
    CalcError, evaluate,
    error::{ArithmeticError, LexError, ParseError},
};
use walkdir::WalkDir;

/// Runs every `expression = expected` line of the `.calc` files under
/// `tests/cases`. `expected` is either a number or the word `error`.
#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line, expression, expected) in extract_cases(&content) {
            count += 1;
            let result = evaluate(&expression);
            match (expected, result) {
                (None, Err(_)) => {},
                (Some(expected), Ok(value)) => {
                    assert!(approx_eq(value, expected, 1e-9),
                            "{path:?}:{line}: {expression} evaluated to {value}, expected {expected}")
                },
                (expected, result) => {
                    panic!("{path:?}:{line}: {expression} gave {result:?}, expected {expected:?}")
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(usize, String, Option<f64>)> {
    let mut cases = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (expression, expected) =
            trimmed.rsplit_once('=')
                   .unwrap_or_else(|| panic!("line {} has no '=': {trimmed}", index + 1));
        let expected = match expected.trim() {
            "error" => None,
            number => Some(number.parse::<f64>()
                                 .unwrap_or_else(|e| panic!("line {}: bad expected value: {e}", index + 1))),
        };
        cases.push((index + 1, expression.trim().to_string(), expected));
    }

    cases
}

fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
}

fn assert_value(src: &str, expected: f64, tolerance: f64) {
    match evaluate(src) {
        Ok(value) => assert!((value - expected).abs() <= tolerance,
                             "{src} evaluated to {value}, expected {expected} (±{tolerance})"),
        Err(e) => panic!("Expression failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn signs_inside_nested_groups() {
    assert_value("(0*1--3)-5/-4-(3*(-2.13))", 10.64, 0.0);
}

#[test]
fn plain_multiplication() {
    assert_value("77 * 12", 924.0, 0.0);
}

#[test]
fn single_literal() {
    assert_value("1", 1.0, 0.0);
}

#[test]
fn remainder_of_fraction() {
    assert_value("(88*66/23)%26+45%9", (88.0 * 66.0 / 23.0) % 26.0, 1e-10);
}

#[test]
fn nested_unit_division() {
    assert_value("((1/1) / (1/1) -1) * 100", 0.0, 0.0);
}

#[test]
fn leading_sign_before_group() {
    assert_value("-((2.12-2) * 100)", -1.0 * (2.12 - 2.0) * 100.0, 0.01);
}

#[test]
fn negative_literal_in_group() {
    assert_value("((-2395+0) * 0.3+140.24+35+90)/30", -15.11, 0.01);
}

#[test]
fn implicit_multiplication_after_group() {
    assert_value("(11+2)12", 156.0, 0.001);
    assert_value("(1+1)(2+2)", 8.0, 0.0);
    assert_value("(3) 2 + 1", 7.0, 0.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("1 / 0"),
               CalcError::Arithmetic(ArithmeticError::DivisionByZero { position: 2 }));
    assert_eq!(assert_failure("5 % (3 - 3)"),
               CalcError::Arithmetic(ArithmeticError::ModuloByZero { position: 2 }));
}

#[test]
fn overflowing_result_is_error() {
    let huge = format!("1{}", "0".repeat(300));
    let err = assert_failure(&format!("{huge} * {huge}"));
    assert!(matches!(err, CalcError::Arithmetic(ArithmeticError::Overflow { .. })));
}

#[test]
fn unknown_character_is_error() {
    assert_eq!(assert_failure("2 ^ 3"),
               CalcError::Lex(LexError::UnexpectedCharacter { character: '^',
                                                              position:  2, }));
    assert!(matches!(assert_failure("1,5 + 1"), CalcError::Lex(_)));
}

#[test]
fn malformed_number_is_error() {
    assert!(matches!(assert_failure("1.2.3 + 4"),
                     CalcError::Lex(LexError::MalformedNumber { .. })));
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert!(matches!(assert_failure("(1 + 2"),
                     CalcError::Parse(ParseError::UnclosedParen { position: 0 })));
    assert!(matches!(assert_failure("1 + 2))"),
                     CalcError::Parse(ParseError::UnmatchedClosingParen { position: 5 })));
}

#[test]
fn empty_expression_is_error() {
    assert!(matches!(assert_failure(""), CalcError::Parse(ParseError::EmptyExpression { .. })));
}

#[test]
fn trailing_operator_is_error() {
    assert!(matches!(assert_failure("3 *"), CalcError::Parse(ParseError::MissingOperand { .. })));
}

#[test]
fn error_messages_name_the_position() {
    assert_eq!(assert_failure("1 + x").to_string(),
               "Error at position 4: Unexpected character 'x'.");
    assert_eq!(assert_failure("4 / 0").to_string(),
               "Error at position 2: Division by zero.");
}

#[test]
fn concurrent_callers_are_independent() {
    let handles: Vec<_> = (0..8).map(|i| {
                                    std::thread::spawn(move || {
                                        evaluate(&format!("({i} + 1) * 2")).unwrap()
                                    })
                                })
                                .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let expected = (i as f64 + 1.0) * 2.0;
        assert_eq!(handle.join().unwrap(), expected);
    }
}
