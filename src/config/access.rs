use super::*;

use crate::ast::Value;

impl SigilConfig {
    /// Get a typed value from the configuration.
    ///
    /// Looks up declared variables first, then expression results
    /// (`expression_<line>` keys).
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let config = SigilConfig::from_file("config.sigil")?;
    /// let retries: u32 = config.get("retries")?;
    /// let weights: Vec<f64> = config.get("weights")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns an error if the key doesn't exist or the value can't be
    /// converted to type T.
    pub fn get<T>(&self, key: &str) -> Result<T, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        let value = self.get_value(key)?;
        T::try_from(value).map_err(|e| enhance_error_with_line_info(e, key, &self.raw_content))
    }

    /// Get an optional typed value - returns `None` if the key doesn't exist.
    pub fn get_optional<T>(&self, key: &str) -> Result<Option<T>, SigilError>
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        match self.get_value(key) {
            Ok(value) => Ok(Some(T::try_from(value)?)),
            Err(SigilError::SyntaxError { code: Some(304), .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```no_run
    /// # use sigil_cfg::SigilConfig;
    /// # let config = SigilConfig::from_file("config.sigil").unwrap();
    /// let scale = config.get_or("scale", 1.0);
    /// ```
    pub fn get_or<T>(&self, key: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = SigilError>,
    {
        self.get(key).unwrap_or(default)
    }

    /// Get a raw `Value` from the configuration.
    pub fn get_value(&self, key: &str) -> Result<Value, SigilError> {
        if let Some(value) = self.document.variables.get(key) {
            return Ok(value.clone());
        }
        if let Some(value) = self.document.expressions.get(key) {
            return Ok(value.clone());
        }

        Err(SigilError::SyntaxError {
            message: format!("Key '{}' not found in configuration", key),
            line: 0,
            text: key.to_string(),
            hint: Some("Check that the key exists in your config file".into()),
            code: Some(304),
        })
    }

    /// The result computed from the expression block on the given source line.
    pub fn expression(&self, line: usize) -> Option<&Value> {
        self.document.expressions.get(&format!("expression_{}", line))
    }

    /// All output keys, in serialization order: variables first, then
    /// expression results.
    pub fn keys(&self) -> Vec<String> {
        self.document
            .variables
            .keys()
            .chain(self.document.expressions.keys())
            .cloned()
            .collect()
    }

    /// Check if a key exists.
    pub fn has(&self, key: &str) -> bool {
        self.document.variables.contains_key(key) || self.document.expressions.contains_key(key)
    }
}

/// Enhance type errors with line number information from the config source.
fn enhance_error_with_line_info(e: SigilError, key: &str, raw_content: &str) -> SigilError {
    match e {
        SigilError::TypeError { message, hint, code, .. } => {
            let (line, snippet) = find_declaration_line(key, raw_content);
            if line > 0 {
                SigilError::TypeError {
                    message: format!("{}\n  → {}", message, snippet),
                    line,
                    hint,
                    code,
                }
            } else {
                SigilError::TypeError { message, line: 0, hint, code }
            }
        }
        other => other,
    }
}

/// Find the source line declaring `key`, returning its 1-based line number
/// and trimmed text, or `(0, ...)` when not found.
fn find_declaration_line(key: &str, raw_content: &str) -> (usize, String) {
    for (idx, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();

        let Some(rest) = trimmed.strip_prefix("var") else {
            continue;
        };
        let Some((name, _)) = rest.trim_start().split_once('=') else {
            continue;
        };

        if name.trim() == key {
            return (idx + 1, trimmed.to_string());
        }
    }

    (0, "<key not found>".into())
}
