use super::{token::Operator, Column, Error};

type Result<T> = std::result::Result<T, Error>;

fn is_white(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ## Single character lookahead
///
/// The scanner never holds more than one unconsumed character.
/// Every operation that consumes a token also skips the spaces
/// and tabs that follow it, so the lookahead is always the start
/// of the next token. Carriage return and line feed are not
/// whitespace; they are consumed only by `newline`.
///
/// Names are a single letter, folded to upper case.
/// End of input is a lookahead of `None`.

pub struct Scanner<I: Iterator<Item = char>> {
    chars: I,
    look: Option<char>,
    offset: usize,
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(chars: I) -> Scanner<I> {
        let mut scanner = Scanner {
            chars,
            look: None,
            offset: 0,
        };
        scanner.look = scanner.chars.next();
        scanner.skip_white();
        scanner
    }

    pub fn look(&self) -> Option<char> {
        self.look
    }

    pub fn at(&self, ch: char) -> bool {
        self.look == Some(ch)
    }

    pub fn at_add_op(&self) -> bool {
        self.operator().map_or(false, Operator::is_add_op)
    }

    pub fn at_mul_op(&self) -> bool {
        self.operator().map_or(false, Operator::is_mul_op)
    }

    pub fn at_letter(&self) -> bool {
        self.look.map_or(false, is_alphabetic)
    }

    pub fn operator(&self) -> Option<Operator> {
        self.look.and_then(Operator::from_char)
    }

    /// Character range of the lookahead.
    pub fn column(&self) -> Column {
        match self.look {
            Some(_) => self.offset..self.offset + 1,
            None => self.offset..self.offset,
        }
    }

    pub fn advance(&mut self) {
        if self.look.is_some() {
            self.offset += 1;
            self.look = self.chars.next();
        }
    }

    pub fn skip_white(&mut self) {
        while self.look.map_or(false, is_white) {
            self.advance();
        }
    }

    /// Diagnostic for a missing token at the current lookahead.
    pub fn expected(&self, what: &str) -> Error {
        let column = self.column();
        match self.look {
            Some(_) => error!(Expected, ..&column; what),
            None => error!(EndOfInput, ..&column; what),
        }
    }

    pub fn expect(&mut self, ch: char) -> Result<()> {
        if self.at(ch) {
            self.advance();
            self.skip_white();
            Ok(())
        } else {
            Err(self.expected(&format!("\"{}\"", ch)))
        }
    }

    pub fn name(&mut self) -> Result<String> {
        let s = match self.look.filter(|c| is_alphabetic(*c)) {
            Some(ch) => ch.to_ascii_uppercase().to_string(),
            None => return Err(self.expected("Name")),
        };
        self.advance();
        self.skip_white();
        Ok(s)
    }

    pub fn number(&mut self) -> Result<String> {
        if !self.look.map_or(false, is_digit) {
            return Err(self.expected("Integer"));
        }
        let mut s = String::new();
        while let Some(ch) = self.look.filter(|c| is_digit(*c)) {
            s.push(ch);
            self.advance();
        }
        self.skip_white();
        Ok(s)
    }

    /// Consumes one CR, LF or CRLF if present. Returns whether a
    /// line terminator was seen.
    pub fn newline(&mut self) -> bool {
        let seen = match self.look {
            Some('\r') => {
                self.advance();
                if self.at('\n') {
                    self.advance();
                }
                true
            }
            Some('\n') => {
                self.advance();
                true
            }
            _ => false,
        };
        if seen {
            self.skip_white();
        }
        seen
    }
}
