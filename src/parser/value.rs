// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::SigilError;
use crate::ast::Value;

/// Resolve the right-hand side of a declaration into a value.
///
/// Rules, tried in order: numeric literal, parenthesized list, reference to
/// an already-declared variable. References resolve to a copy of the current
/// binding, so a later redeclaration cannot retroactively change a capture.
pub(crate) fn resolve_value(
    text: &str,
    variables: &IndexMap<String, Value>,
    line: usize,
) -> Result<Value, SigilError> {
    let text = text.trim();

    if let Ok(n) = text.parse::<f64>() {
        return Ok(Value::Number(n));
    }

    if let Some(interior) = text.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        return resolve_list(interior, variables, line);
    }

    if let Some(value) = variables.get(text) {
        return Ok(value.clone());
    }

    Err(SigilError::ValueError {
        text: text.to_string(),
        line,
        hint: Some("Expected a number, a '(...)' list, or a declared variable".into()),
        code: Some(201),
    })
}

fn resolve_list(
    interior: &str,
    variables: &IndexMap<String, Value>,
    line: usize,
) -> Result<Value, SigilError> {
    if interior.trim().is_empty() {
        return Ok(Value::List(Vec::new()));
    }

    let elements = split_elements(interior)
        .into_iter()
        .map(|piece| resolve_value(piece, variables, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Value::List(elements))
}

/// Split a list interior on commas at parenthesis depth zero, so nested
/// parenthesized lists survive as single elements.
fn split_elements(interior: &str) -> Vec<&str> {
    let mut elements = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in interior.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                elements.push(&interior[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    elements.push(&interior[start..]);
    elements
}
