use std::fmt;

use indexmap::IndexMap;

/// A fully resolved SIGIL value.
///
/// References are resolved eagerly at declaration time, so a value reachable
/// from a parsed document is always a number or a list of resolved values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    List(Vec<Value>),
}

/// Result of translating one SIGIL document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Declared variables, in declaration order.
    pub variables: IndexMap<String, Value>,
    /// Computed expression results keyed `expression_<line>`, in source order.
    pub expressions: IndexMap<String, Value>,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
