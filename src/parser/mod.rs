use crate::SigilError;
use crate::ast::Document;

mod document;
mod value;

pub(crate) use value::resolve_value;

/// Line-oriented parser for SIGIL documents.
///
/// Walks the input strictly in source order, binding declarations and
/// evaluating expression blocks against the variables declared so far.
pub struct Parser<'a> {
    input: &'a str,
    line: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, line: 0 }
    }

    /// Current 1-based source line, counted over the raw (unsplit) input.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn input(&self) -> &'a str {
        self.input
    }

    pub(crate) fn set_line(&mut self, line: usize) {
        self.line = line;
    }

    pub fn parse_document(&mut self) -> Result<Document, SigilError> {
        document::parse_document(self)
    }
}

#[cfg(test)]
mod tests;
