//! Minimal structural scanner for the host record syntax.
//!
//! The target file declares each joker as an object initializer: `name =
//! value` pairs separated by commas, with nested brace or paren initializers
//! and quoted strings. The scanner walks that shape without parsing the full
//! grammar: it yields one field at a time with the raw value span and stops
//! at the `}` that closes the record, so a field search can never run past
//! an unrelated delimiter.

/// One `name = value` field inside a record body. Offsets index into the
/// full document.
#[derive(Debug, Clone, PartialEq)]
pub struct HostField<'a> {
    pub name: &'a str,
    /// Raw initializer text, trimmed.
    pub value: &'a str,
    /// Where this field's leading trivia (comments, blank lines) begins,
    /// just past the previous field's separator.
    pub trivia_start: usize,
    /// Offset of the first character of the name.
    pub name_start: usize,
    /// One past the last character of the value, before any trailing comma.
    pub value_end: usize,
}

pub struct FieldScanner<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> FieldScanner<'a> {
    /// Scan fields starting at byte offset `start`, which must sit on or
    /// before a field name inside a record body.
    pub fn new(text: &'a str, start: usize) -> Self {
        Self {
            text,
            pos: start,
            done: false,
        }
    }

    /// Next field, or `None` once the record closes or the text stops
    /// looking like a field list. Malformed input is not an error here: the
    /// caller treats an unscannable record as unmatched.
    pub fn next_field(&mut self) -> Option<HostField<'a>> {
        if self.done {
            return None;
        }
        let bytes = self.text.as_bytes();
        let len = bytes.len();
        let trivia_start = self.pos;
        let mut pos = self.pos;

        // Leading trivia: whitespace and // line comments.
        loop {
            while pos < len && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos + 1 < len && bytes[pos] == b'/' && bytes[pos + 1] == b'/' {
                while pos < len && bytes[pos] != b'\n' {
                    pos += 1;
                }
                continue;
            }
            break;
        }
        if pos >= len || bytes[pos] == b'}' {
            self.done = true;
            return None;
        }

        let name_start = pos;
        while pos < len && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_') {
            pos += 1;
        }
        if pos == name_start {
            self.done = true;
            return None;
        }
        let name = &self.text[name_start..pos];

        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= len || bytes[pos] != b'=' {
            self.done = true;
            return None;
        }
        pos += 1;
        while pos < len && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }

        // Value: runs to a comma at depth zero, or to the record's closing
        // brace (left unconsumed). Braces inside strings do not count.
        let value_start = pos;
        let mut depth = 0i32;
        let mut in_string = false;
        let mut prev = 0u8;
        let mut raw_end = len;
        while pos < len {
            let ch = bytes[pos];
            if in_string {
                if ch == b'"' && prev != b'\\' {
                    in_string = false;
                }
            } else {
                match ch {
                    b'"' => in_string = true,
                    b'{' | b'(' | b'[' => depth += 1,
                    b'}' | b')' | b']' => {
                        if depth == 0 {
                            // Record close; do not consume.
                            raw_end = pos;
                            self.done = true;
                            break;
                        }
                        depth -= 1;
                    }
                    b',' if depth == 0 => {
                        raw_end = pos;
                        pos += 1;
                        break;
                    }
                    _ => {}
                }
            }
            prev = ch;
            pos += 1;
            if pos == len {
                raw_end = len;
                self.done = true;
            }
        }
        self.pos = pos;

        let raw = &self.text[value_start..raw_end];
        let value = raw.trim_end();
        let value_end = value_start + value.len();
        Some(HostField {
            name,
            value,
            trivia_start,
            name_start,
            value_end,
        })
    }
}
