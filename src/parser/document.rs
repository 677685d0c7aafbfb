use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::*;
use crate::ast::Value;
use crate::eval::eval_expression;

/// `var <identifier> = <value-text>`; the identifier must start with a letter
/// and may contain letters, digits and underscores.
static DECLARATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^var\s+([A-Za-z][_A-Za-z0-9]*)\s*=\s*(.+)$").expect("declaration regex is valid")
});

/// Classification of one trimmed source line.
enum LineKind<'a> {
    Blank,
    Comment,
    Declaration,
    Expression(&'a str),
    Unknown,
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        LineKind::Blank
    } else if line.starts_with("/*") || line.starts_with("*/") || line.starts_with('*') {
        // Block-comment convention: a leading marker skips the line whether
        // or not a comment was actually opened or closed.
        LineKind::Comment
    } else if line.starts_with("var") {
        LineKind::Declaration
    } else if let Some(interior) = line.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
        LineKind::Expression(interior.trim())
    } else {
        LineKind::Unknown
    }
}

pub(super) fn parse_document(parser: &mut Parser) -> Result<Document, SigilError> {
    let input = parser.input();
    let mut variables: IndexMap<String, Value> = IndexMap::new();
    let mut expressions: IndexMap<String, Value> = IndexMap::new();

    for (idx, raw) in input.lines().enumerate() {
        parser.set_line(idx + 1);
        let line = raw.trim();

        match classify(line) {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Declaration => {
                parse_declaration(parser, line, &mut variables)?;
            }
            LineKind::Expression(expression) => {
                let result = eval_expression(expression, &variables, parser.line())?;
                expressions.insert(format!("expression_{}", parser.line()), result);
            }
            LineKind::Unknown => {
                return Err(SigilError::SyntaxError {
                    message: "Unknown construct".into(),
                    line: parser.line(),
                    text: line.to_string(),
                    hint: Some("Expected a 'var' declaration or a '{...}' expression block".into()),
                    code: Some(101),
                });
            }
        }
    }

    Ok(Document { variables, expressions })
}

fn parse_declaration(
    parser: &Parser,
    line: &str,
    variables: &mut IndexMap<String, Value>,
) -> Result<(), SigilError> {
    let captures = DECLARATION_RE.captures(line).ok_or_else(|| SigilError::SyntaxError {
        message: "Malformed variable declaration".into(),
        line: parser.line(),
        text: line.to_string(),
        hint: Some("Use 'var <name> = <value>'".into()),
        code: Some(102),
    })?;

    let name = &captures[1];
    let value = resolve_value(&captures[2], variables, parser.line())?;

    // Redeclaration overwrites silently; the key keeps its original position.
    variables.insert(name.to_string(), value);
    Ok(())
}
