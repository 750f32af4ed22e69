#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub(super) struct LexError {
    pub message: String,
    pub offset: usize,
}

/// Byte cursor over path data.
///
/// Numbers are scanned character by character because SVG lets them run together: `1.5.5` is
/// `1.5` then `.5`, and `10-5` is `10` then `-5`.
pub(super) struct Lexer<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> Lexer<'input> {
    pub(super) fn new(input: &'input str) -> Self {
        Self { input, pos: 0 }
    }

    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + ahead).copied()
    }

    /// Advances over one ASCII byte. Non-ASCII input is never consumed, so `pos` always stays on a
    /// char boundary.
    pub(super) fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        if !b.is_ascii() {
            return None;
        }
        self.pos += 1;
        Some(b)
    }

    pub(super) fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() || b == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    pub(super) fn at_number_start(&self) -> bool {
        match self.peek() {
            Some(b'0'..=b'9' | b'.') => true,
            Some(b'+' | b'-') => matches!(self.peek_at(1), Some(b'0'..=b'9' | b'.')),
            _ => false,
        }
    }

    /// Scans `[sign] (digits [. digits] | . digits) [(e|E) [sign] digits]`.
    pub(super) fn number(&mut self) -> Result<f64, LexError> {
        self.skip_separators();
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            frac_digits = self.digits();
        }
        if int_digits + frac_digits == 0 {
            self.pos = start;
            return Err(self.error("expected a number"));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            let exp_digit_at = match self.peek_at(1) {
                Some(b'+' | b'-') => 2,
                _ => 1,
            };
            if matches!(self.peek_at(exp_digit_at), Some(b'0'..=b'9')) {
                self.pos += exp_digit_at;
                self.digits();
            }
        }

        let raw = &self.input[start..self.pos];
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(LexError {
                message: format!("number '{raw}' is out of range"),
                offset: start,
            }),
            Err(_) => Err(LexError {
                message: format!("invalid number '{raw}'"),
                offset: start,
            }),
        }
    }

    /// Arc flags are a single `0` or `1` and may be glued to whatever follows.
    pub(super) fn flag(&mut self) -> Result<bool, LexError> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            _ => Err(self.error("expected an arc flag (0 or 1)")),
        }
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }

    pub(super) fn error(&self, message: &str) -> LexError {
        LexError {
            message: message.to_string(),
            offset: self.pos,
        }
    }

    /// A short excerpt of the input starting at `offset`, for error messages.
    pub(super) fn excerpt(&self, offset: usize) -> String {
        let rest = self.input.get(offset..).unwrap_or_default();
        let snippet: String = rest.chars().take(16).collect();
        if snippet.is_empty() {
            "<end of input>".to_string()
        } else {
            snippet
        }
    }
}
