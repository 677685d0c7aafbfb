// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::ast::{Document, Value};
use crate::parser::Parser;
use crate::SigilError;

/// Render a document in the flat `key = value` output format.
///
/// One line per variable-table entry in declaration order, then one line per
/// expression result in ascending source line order. Numbers render in plain
/// decimal, lists as `[a, b, c]`. No escaping, quoting, or type tagging.
pub fn export_document_to_flat(doc: &Document) -> String {
    let mut lines = Vec::with_capacity(doc.variables.len() + doc.expressions.len());

    for (key, value) in &doc.variables {
        lines.push(format!("{} = {}", key, value));
    }
    for (key, value) in &doc.expressions {
        lines.push(format!("{} = {}", key, value));
    }

    lines.join("\n")
}

/// Export a SIGIL document to JSON format.
///
/// The two document sections are kept as top-level objects, so the output
/// shape is `{"variables": {...}, "expressions": {...}}` with insertion
/// order preserved.
///
/// # Examples
/// ```no_run
/// use sigil_cfg::{export, parser::Parser};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = Parser::new("var x = 10").parse_document()?;
/// let json = export::export_document_to_json(&doc)?;
/// # Ok(())
/// # }
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, SigilError> {
    fn value_to_json(v: &Value) -> serde_json::Value {
        match v {
            Value::Number(n) => json!(n),
            Value::List(items) => {
                json!(items.iter().map(value_to_json).collect::<Vec<_>>())
            }
        }
    }

    let mut top = serde_json::Map::new();

    let variables = doc
        .variables
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect::<serde_json::Map<_, _>>();
    top.insert("variables".into(), serde_json::Value::Object(variables));

    let expressions = doc
        .expressions
        .iter()
        .map(|(k, v)| (k.clone(), value_to_json(v)))
        .collect::<serde_json::Map<_, _>>();
    top.insert("expressions".into(), serde_json::Value::Object(expressions));

    serde_json::to_string_pretty(&serde_json::Value::Object(top)).map_err(|e| {
        SigilError::TypeError {
            message: format!("Failed to serialize document: {}", e),
            line: 0,
            hint: None,
            code: Some(410),
        }
    })
}

/// Translate a SIGIL document into the flat configuration output.
///
/// The core contract: parse, resolve, evaluate and serialize in one call.
/// The first error anywhere aborts the translation and nothing is emitted.
///
/// # Examples
/// ```
/// use sigil_cfg::translate;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let output = translate("var x = 10\n{x 2 *}")?;
/// assert_eq!(output, "x = 10\nexpression_2 = 20");
/// # Ok(())
/// # }
/// ```
pub fn translate(input: &str) -> Result<String, SigilError> {
    let doc = Parser::new(input).parse_document()?;
    Ok(export_document_to_flat(&doc))
}

/// Translate a SIGIL file directly.
///
/// Convenience function that reads, parses, and serializes in one call.
///
/// # Errors
/// Returns an error if the file cannot be read or contains invalid SIGIL.
pub fn translate_file<P: AsRef<Path>>(path: P) -> Result<String, SigilError> {
    let input = fs::read_to_string(&path).map_err(|e| SigilError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.as_ref().to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(501),
    })?;

    translate(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_translate_full_document() {
        let input = "\
var x = 10
var y = (1, 2, 3)
{x 2 *}
{y sort()}";

        let output = translate(input).expect("Failed to translate");

        assert_eq!(
            output,
            "x = 10\ny = [1, 2, 3]\nexpression_3 = 20\nexpression_4 = [1, 2, 3]"
        );
    }

    #[test]
    fn test_output_line_count_is_declarations_plus_expressions() {
        let input = "\
var a = 1
var b = 2

/* two expressions follow */
{a b +}
{a b *}";

        let output = translate(input).expect("Failed to translate");
        assert_eq!(output.lines().count(), 4);
        for line in output.lines() {
            assert!(line.contains(" = "), "line was: {}", line);
        }
    }

    #[test]
    fn test_sort_leaves_source_binding_untouched_in_output() {
        let input = "\
var y = (3, 1, 2)
{y sort()}";

        let output = translate(input).expect("Failed to translate");
        assert_eq!(output, "y = [3, 1, 2]\nexpression_2 = [1, 2, 3]");
    }

    #[test]
    fn test_number_rendering_is_plain_decimal() {
        let output = translate("var x = 10\nvar pi = 3.14").expect("Failed to translate");
        assert_eq!(output, "x = 10\npi = 3.14");
    }

    #[test]
    fn test_empty_document_translates_to_empty_output() {
        let output = translate("").expect("Failed to translate");
        assert_eq!(output, "");
    }

    #[test]
    fn test_translate_is_deterministic() {
        let input = "\
var first = 5
var second = (2, 1)
{first first +}";

        let once = translate(input).expect("Failed to translate");
        let twice = translate(input).expect("Failed to translate");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_export_json_keeps_sections() {
        let doc = Parser::new("var x = 10\n{x 2 *}")
            .parse_document()
            .expect("Failed to parse");

        let json_output = export_document_to_json(&doc).expect("Failed to export");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["variables"]["x"], 10.0);
        assert_eq!(v["expressions"]["expression_2"], 20.0);
    }

    #[test]
    fn test_export_json_nested_list() {
        let doc = Parser::new("var m = ((1, 2), (3, 4))")
            .parse_document()
            .expect("Failed to parse");

        let json_output = export_document_to_json(&doc).expect("Failed to export");
        let v: serde_json::Value = serde_json::from_str(&json_output).unwrap();

        assert_eq!(v["variables"]["m"][0][1], 2.0);
        assert_eq!(v["variables"]["m"][1][0], 3.0);
    }

    #[test]
    fn test_translate_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "var x = 10").expect("Failed to write temp file");
        writeln!(file, "{{x x +}}").expect("Failed to write temp file");

        let output = translate_file(file.path()).expect("Failed to translate file");
        assert_eq!(output, "x = 10\nexpression_2 = 20");
    }

    #[test]
    fn test_translate_missing_file_is_file_error() {
        let err = translate_file("definitely/not/here.sigil").unwrap_err();
        match err {
            SigilError::FileError { path, code, .. } => {
                assert!(path.contains("not/here.sigil"));
                assert_eq!(code, Some(501));
            }
            other => panic!("Expected FileError, got {:?}", other),
        }
    }
}
