// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::SigilError;
use crate::ast::Value;

/// The closed set of binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Division by zero follows IEEE semantics (inf/NaN), never an error.
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        }
    }
}

/// The closed set of unary named functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    Abs,
    Sort,
}

impl Function {
    /// Function tokens are accepted bare (`sort`) or with an empty call
    /// suffix (`sort()`), as written in expression blocks.
    pub fn from_token(token: &str) -> Option<Self> {
        let name = token.strip_suffix("()").unwrap_or(token);
        match name {
            "abs" => Some(Function::Abs),
            "sort" => Some(Function::Sort),
            _ => None,
        }
    }

    fn apply(self, token: &str, arg: Value, line: usize) -> Result<Value, SigilError> {
        match self {
            Function::Abs => match arg {
                Value::Number(n) => Ok(Value::Number(n.abs())),
                other => Err(operand_type_error(token, "a number", &other, line)),
            },
            Function::Sort => match arg {
                Value::List(items) => {
                    let mut numbers = Vec::with_capacity(items.len());
                    for item in &items {
                        match item {
                            Value::Number(n) => numbers.push(*n),
                            other => {
                                return Err(operand_type_error(
                                    token,
                                    "a list of numbers",
                                    other,
                                    line,
                                ));
                            }
                        }
                    }
                    numbers.sort_by(f64::total_cmp);
                    Ok(Value::List(numbers.into_iter().map(Value::Number).collect()))
                }
                other => Err(operand_type_error(token, "a list", &other, line)),
            },
        }
    }
}

/// Evaluate a postfix expression against the current variable table.
///
/// Tokens are tried in order as numeric literal, variable name, operator,
/// function; anything else is an unknown token. Exactly one value must
/// remain on the stack once all tokens are consumed.
pub fn eval_expression(
    expression: &str,
    variables: &IndexMap<String, Value>,
    line: usize,
) -> Result<Value, SigilError> {
    let mut stack: Vec<Value> = Vec::new();

    for token in expression.split_whitespace() {
        if let Ok(n) = token.parse::<f64>() {
            stack.push(Value::Number(n));
        } else if let Some(value) = variables.get(token) {
            stack.push(value.clone());
        } else if let Some(op) = Operator::from_token(token) {
            let b = pop_number(&mut stack, token, line)?;
            let a = pop_number(&mut stack, token, line)?;
            stack.push(Value::Number(op.apply(a, b)));
        } else if let Some(func) = Function::from_token(token) {
            let arg = pop_operand(&mut stack, token, line)?;
            stack.push(func.apply(token, arg, line)?);
        } else {
            return Err(SigilError::EvalError {
                message: format!("Unknown token '{}'", token),
                line,
                hint: Some("Tokens must be numbers, declared variables, operators, or functions".into()),
                code: Some(301),
            });
        }
    }

    let result = stack.pop();
    match result {
        Some(value) if stack.is_empty() => Ok(value),
        _ => Err(SigilError::EvalError {
            message: format!("Malformed expression '{}'", expression),
            line,
            hint: Some("A postfix expression must reduce to exactly one value".into()),
            code: Some(302),
        }),
    }
}

fn pop_operand(stack: &mut Vec<Value>, token: &str, line: usize) -> Result<Value, SigilError> {
    stack.pop().ok_or_else(|| SigilError::EvalError {
        message: format!("Missing operand for '{}'", token),
        line,
        hint: Some("Operands must be pushed before the operator or function".into()),
        code: Some(303),
    })
}

fn pop_number(stack: &mut Vec<Value>, token: &str, line: usize) -> Result<f64, SigilError> {
    match pop_operand(stack, token, line)? {
        Value::Number(n) => Ok(n),
        other => Err(operand_type_error(token, "number operands", &other, line)),
    }
}

fn operand_type_error(token: &str, expected: &str, got: &Value, line: usize) -> SigilError {
    SigilError::EvalError {
        message: format!("'{}' expects {}, got {}", token, expected, got.type_name()),
        line,
        hint: None,
        code: Some(304),
    }
}
