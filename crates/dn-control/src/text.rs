//! Displayed text buffer.
//!
//! The field's text is distinct from the committed value: while the user is
//! typing, the buffer may hold something that does not parse. It only gets
//! reconciled with the committed value on blur or when the value changes.

use dn_core::{format_value, parse_number};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Buffer showing `value` at the precision implied by `multiplier`.
    pub fn new(value: f64, multiplier: f64) -> Self {
        Self {
            text: format_value(value, multiplier),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the buffer with user-typed text.
    ///
    /// Returns the parsed number when the text is a valid number; the buffer
    /// keeps the text as typed either way.
    pub fn edit(&mut self, text: &str) -> Option<f64> {
        self.text.clear();
        self.text.push_str(text);
        parse_number(text)
    }

    /// Overwrite with the formatted committed value.
    pub fn reset(&mut self, value: f64, multiplier: f64) {
        self.text = format_value(value, multiplier);
    }

    pub fn is_valid(&self) -> bool {
        parse_number(&self.text).is_some()
    }
}
