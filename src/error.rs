use std::fmt;

/// The main error type for SIGIL translation.
///
/// Every error is terminal for the current call: the first failure anywhere
/// in the pipeline aborts the translation and nothing is emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SigilError {
    /// A line is neither blank/comment, a well-formed `var` declaration,
    /// nor a `{...}` expression block.
    SyntaxError {
        message: String,
        line: usize,
        text: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A declaration's right-hand side cannot be resolved to a value.
    ValueError {
        text: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A postfix expression references an unknown token, underflows the
    /// operand stack, mismatches operand types, or leaves a stack depth
    /// other than exactly one.
    EvalError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by the typed access layer when a value cannot be converted.
    TypeError {
        message: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl fmt::Display for SigilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigilError::SyntaxError { message, line, text, hint, code } =>
                write!(f, "[SIGIL] Syntax Error at line {}: {}: \"{}\"{}{}",
                    line, message, text,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::ValueError { text, line, hint, code } =>
                write!(f, "[SIGIL] Value Error at line {}: unknown value \"{}\"{}{}",
                    line, text,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::EvalError { message, line, hint, code } =>
                write!(f, "[SIGIL] Eval Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::TypeError { message, line, hint, code } =>
                write!(f, "[SIGIL] Type Error at line {}: {}{}{}",
                    line, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
            SigilError::FileError { message, path, hint, code } =>
                write!(f, "[SIGIL] File Error '{}': {}{}{}",
                    path, message,
                    hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
                    code.map_or(String::new(), |c| format!(" Code: {}", c))
                ),
        }
    }
}

impl std::error::Error for SigilError {}
