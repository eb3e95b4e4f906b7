use crate::error::TimeError;
use crate::types::StandardTime;

/// Parses a standard time of day: `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`.
///
/// Each clock field takes one or two digits. The fraction takes one to three
/// digits and is read as a decimal fraction of a second (`.5` = 500 ms).
/// Surrounding whitespace is ignored.
pub fn parse_standard_time(src: &str) -> Result<StandardTime, TimeError> {
    let mut cursor = Cursor::new(src);
    cursor.skip_whitespace();

    let hours = cursor.field("hours", 23)?;
    cursor.expect(':')?;
    let minutes = cursor.field("minutes", 59)?;

    let mut seconds = 0;
    let mut milliseconds = 0;
    if cursor.eat(':') {
        seconds = cursor.field("seconds", 59)?;
        if cursor.eat('.') {
            milliseconds = cursor.fraction()?;
        }
    }

    cursor.skip_whitespace();
    if let Some(c) = cursor.peek() {
        return Err(TimeError::new(format!("unexpected character {c:?}"), cursor.col()));
    }

    StandardTime::new(hours, minutes, seconds, milliseconds)
}

struct Cursor<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    /// 1-based column of the next character.
    fn col(&self) -> usize {
        self.src[..self.pos].chars().count() + 1
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn eat(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, want: char) -> Result<(), TimeError> {
        match self.peek() {
            Some(c) if c == want => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(TimeError::new(format!("expected {want:?}, found {c:?}"), self.col())),
            None => Err(TimeError::new(format!("expected {want:?}, found end of input"), self.col())),
        }
    }

    /// Reads up to `max_len` ASCII digits, returning the value and digit count.
    fn digits(&mut self, max_len: usize) -> (u32, usize) {
        let mut value = 0;
        let mut len = 0;
        while len < max_len {
            match self.peek().and_then(|c| c.to_digit(10)) {
                Some(d) => {
                    value = value * 10 + d;
                    len += 1;
                    self.advance();
                }
                None => break,
            }
        }
        (value, len)
    }

    fn field(&mut self, name: &str, max: u32) -> Result<u32, TimeError> {
        let start = self.col();
        let (value, len) = self.digits(2);
        if len == 0 {
            return Err(TimeError::new(format!("expected {name}"), start));
        }
        if value > max {
            return Err(TimeError::new(format!("{name} {value} out of range 0..={max}"), start));
        }
        Ok(value)
    }

    fn fraction(&mut self) -> Result<u32, TimeError> {
        let start = self.col();
        let (value, len) = self.digits(3);
        match len {
            0 => Err(TimeError::new("expected fractional seconds", start)),
            1 => Ok(value * 100),
            2 => Ok(value * 10),
            _ => Ok(value),
        }
    }
}
