#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;
#[cfg(test)]
use crate::SigilError;

#[test]
fn test_parse_basic_document() {
    let input = "\
var x = 10
var y = (1, 2, 3)
{x 2 *}
{y sort()}";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    println!("--- Parsed Document ---");
    println!("{:#?}", doc);

    assert_eq!(doc.variables.len(), 2);
    assert_eq!(doc.expressions.len(), 2);

    assert_eq!(doc.variables["x"], Value::Number(10.0));
    assert_eq!(
        doc.variables["y"],
        Value::List(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)])
    );
    assert_eq!(doc.expressions["expression_3"], Value::Number(20.0));
    assert_eq!(
        doc.expressions["expression_4"],
        Value::List(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)])
    );
}

#[test]
fn test_blank_and_comment_lines_are_skipped_but_counted() {
    let input = "\n/* constants */\n* speed of light, scaled\nvar c = 3\n*/\n{c c *}";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    assert_eq!(doc.variables.len(), 1);
    // Line numbers count over the raw input, including blanks and comments.
    assert_eq!(doc.expressions["expression_6"], Value::Number(9.0));
}

#[test]
fn test_expression_sees_earlier_declarations_only() {
    let input = "\
{x 1 +}
var x = 5";

    let mut parser = Parser::new(input);
    let err = parser.parse_document().unwrap_err();

    match err {
        SigilError::EvalError { message, line, .. } => {
            assert!(message.contains("'x'"), "message was: {}", message);
            assert_eq!(line, 1);
        }
        other => panic!("Expected EvalError, got {:?}", other),
    }
}

#[test]
fn test_redeclaration_overwrites_in_place() {
    let input = "\
var x = 1
var y = 2
var x = 3";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    assert_eq!(doc.variables["x"], Value::Number(3.0));
    // The overwritten key keeps its original position.
    let names: Vec<&String> = doc.variables.keys().collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_reference_captures_a_copy() {
    let input = "\
var a = (3, 1, 2)
var b = a
var a = 0";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    // b captured the list before a was redeclared.
    assert_eq!(
        doc.variables["b"],
        Value::List(vec![Value::Number(3.0), Value::Number(1.0), Value::Number(2.0)])
    );
    assert_eq!(doc.variables["a"], Value::Number(0.0));
}

#[test]
fn test_nested_lists_and_references_as_elements() {
    let input = "\
var inner = (1, 2)
var outer = (inner, (3, 4), 5)";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    assert_eq!(
        doc.variables["outer"],
        Value::List(vec![
            Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
            Value::List(vec![Value::Number(3.0), Value::Number(4.0)]),
            Value::Number(5.0),
        ])
    );
}

#[test]
fn test_empty_list() {
    let mut parser = Parser::new("var empty = ()");
    let doc = parser.parse_document().expect("Failed to parse document");

    assert_eq!(doc.variables["empty"], Value::List(vec![]));
}

#[test]
fn test_negative_and_signed_numbers() {
    let input = "\
var neg = -1
var pos = +2.5";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    assert_eq!(doc.variables["neg"], Value::Number(-1.0));
    assert_eq!(doc.variables["pos"], Value::Number(2.5));
}

#[test]
fn test_missing_rhs_is_syntax_error() {
    let mut parser = Parser::new("var x =");
    let err = parser.parse_document().unwrap_err();

    match err {
        SigilError::SyntaxError { line, text, code, .. } => {
            assert_eq!(line, 1);
            assert_eq!(text, "var x =");
            assert_eq!(code, Some(102));
        }
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_malformed_identifier_is_syntax_error() {
    // A declaration name must start with a letter.
    let mut parser = Parser::new("var 1x = 2");
    let err = parser.parse_document().unwrap_err();
    assert!(matches!(err, SigilError::SyntaxError { code: Some(102), .. }));

    // A line merely starting with the letters 'var' still takes the
    // declaration path and must match the full pattern.
    let mut parser = Parser::new("varnish = 1");
    let err = parser.parse_document().unwrap_err();
    assert!(matches!(err, SigilError::SyntaxError { code: Some(102), .. }));
}

#[test]
fn test_unknown_construct_is_syntax_error() {
    let input = "\
var x = 1
x + 1";

    let mut parser = Parser::new(input);
    let err = parser.parse_document().unwrap_err();

    match err {
        SigilError::SyntaxError { line, text, code, .. } => {
            assert_eq!(line, 2);
            assert_eq!(text, "x + 1");
            assert_eq!(code, Some(101));
        }
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_unclosed_expression_block_is_unknown_construct() {
    let mut parser = Parser::new("{1 2 +");
    let err = parser.parse_document().unwrap_err();
    assert!(matches!(err, SigilError::SyntaxError { code: Some(101), .. }));
}

#[test]
fn test_unknown_value_is_value_error() {
    let mut parser = Parser::new("var x = undeclared");
    let err = parser.parse_document().unwrap_err();

    match err {
        SigilError::ValueError { text, line, code, .. } => {
            assert_eq!(text, "undeclared");
            assert_eq!(line, 1);
            assert_eq!(code, Some(201));
        }
        other => panic!("Expected ValueError, got {:?}", other),
    }
}

#[test]
fn test_error_aborts_at_first_failing_line() {
    let input = "\
var ok = 1
var bad = nope
var never = 2";

    let mut parser = Parser::new(input);
    let err = parser.parse_document().unwrap_err();

    // Line 2 fails; line 3 is never processed.
    assert!(matches!(err, SigilError::ValueError { line: 2, .. }));
}

#[test]
fn test_whitespace_around_lines_is_trimmed() {
    let input = "   var x = 10   \n\t{x 1 +}\t";

    let mut parser = Parser::new(input);
    let doc = parser.parse_document().expect("Failed to parse document");

    assert_eq!(doc.variables["x"], Value::Number(10.0));
    assert_eq!(doc.expressions["expression_2"], Value::Number(11.0));
}
