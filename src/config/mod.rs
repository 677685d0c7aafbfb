// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::ast::Document;
use crate::export;
use crate::parser;
use crate::SigilError;

mod access;
mod conversion;

/// Main configuration struct holding one parsed SIGIL document.
#[derive(Debug)]
pub struct SigilConfig {
    document: Document,
    raw_content: String, // Store for error reporting
}

impl SigilConfig {
    /// Load a SIGIL config file.
    ///
    /// # Example
    /// ```ignore
    /// let config = SigilConfig::from_file("config.sigil")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SigilError> {
        let content = fs::read_to_string(&path).map_err(|e| SigilError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.as_ref().to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(501),
        })?;

        Self::from_str(&content)
    }

    /// Parse a SIGIL config from a string (no file I/O).
    pub fn from_str(content: &str) -> Result<Self, SigilError> {
        let document = parser::Parser::new(content).parse_document()?;

        Ok(Self {
            document,
            raw_content: content.to_string(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Render the document in the flat `key = value` output format.
    pub fn translate(&self) -> String {
        export::export_document_to_flat(&self.document)
    }
}
