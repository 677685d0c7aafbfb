// Author: Dustin Pilgrim
// License: MIT

use crate::{Value, SigilError};

impl TryFrom<Value> for f64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as f32),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= i32::MIN as f64 && n <= i32::MAX as f64 {
                    Ok(n as i32)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for i32", n),
                        line: 0,
                        hint: Some("Use a number within i32 range".into()),
                        code: Some(403),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(n as i64),
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u16 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u16::MAX as f64 {
                    Ok(n as u16)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u16", n),
                        line: 0,
                        hint: Some("Use a number between 0 and 65535".into()),
                        code: Some(404),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u32 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u32::MAX as f64 {
                    Ok(n as u32)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u32", n),
                        line: 0,
                        hint: Some("Use a number between 0 and 4294967295".into()),
                        code: Some(405),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n <= u64::MAX as f64 {
                    Ok(n as u64)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for u64", n),
                        line: 0,
                        hint: Some("Use a positive number within u64 range".into()),
                        code: Some(406),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for usize {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if n >= 0.0 && n.is_finite() {
                    Ok(n as usize)
                } else {
                    Err(SigilError::TypeError {
                        message: format!("Number {} out of range for usize", n),
                        line: 0,
                        hint: Some("Use a positive integer".into()),
                        code: Some(407),
                    })
                }
            }
            _ => Err(SigilError::TypeError {
                message: format!("Expected number, got {:?}", value),
                line: 0,
                hint: Some("Use a number value in your config".into()),
                code: Some(402),
            }),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items),
            _ => Err(SigilError::TypeError {
                message: format!("Expected list, got {:?}", value),
                line: 0,
                hint: Some("Use a '(...)' list value in your config".into()),
                code: Some(408),
            }),
        }
    }
}

impl TryFrom<Value> for Vec<f64> {
    type Error = SigilError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Number(n) => Ok(n),
                    other => Err(SigilError::TypeError {
                        message: format!("Expected list of numbers, found {:?}", other),
                        line: 0,
                        hint: Some("Every list element must be a number".into()),
                        code: Some(409),
                    }),
                })
                .collect(),
            _ => Err(SigilError::TypeError {
                message: format!("Expected list, got {:?}", value),
                line: 0,
                hint: Some("Use a '(...)' list value in your config".into()),
                code: Some(408),
            }),
        }
    }
}
