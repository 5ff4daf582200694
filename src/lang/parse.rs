use super::{backend::Backend, scanner::Scanner, Error};

type Result<T> = std::result::Result<T, Error>;

/// Runs statements from `chars` through `backend` until the `;` sentinel.
pub fn parse<I, B>(chars: I, backend: &mut B) -> Result<()>
where
    I: Iterator<Item = char>,
    B: Backend,
{
    Parser::new(chars, backend).program()
}

pub struct Parser<'a, I: Iterator<Item = char>, B: Backend> {
    scanner: Scanner<I>,
    backend: &'a mut B,
}

impl<'a, I: Iterator<Item = char>, B: Backend> Parser<'a, I, B> {
    pub fn new(chars: I, backend: &'a mut B) -> Parser<'a, I, B> {
        Parser {
            scanner: Scanner::new(chars),
            backend,
        }
    }

    pub fn scanner(&self) -> &Scanner<I> {
        &self.scanner
    }

    /// Statements until the lookahead is `;`. The sentinel is only
    /// tested between statements and is left unconsumed.
    pub fn program(&mut self) -> Result<()> {
        loop {
            self.statement()?;
            self.scanner.newline();
            if self.scanner.at(';') {
                return Ok(());
            }
        }
    }

    /// A single assignment followed by a line terminator.
    pub fn assignment_line(&mut self) -> Result<()> {
        self.assignment()?;
        if self.scanner.newline() {
            Ok(())
        } else {
            Err(self.scanner.expected("NewLine"))
        }
    }

    pub fn statement(&mut self) -> Result<()> {
        match self.scanner.look() {
            Some('!') => self.output(),
            Some('?') => self.input(),
            _ => self.assignment(),
        }
    }

    fn assignment(&mut self) -> Result<()> {
        let name = self.scanner.name()?;
        self.scanner.expect('=')?;
        let value = self.expression()?;
        self.backend.assign(&name, value)
    }

    fn output(&mut self) -> Result<()> {
        self.scanner.expect('!')?;
        let name = self.scanner.name()?;
        self.backend.output(&name)
    }

    fn input(&mut self) -> Result<()> {
        self.scanner.expect('?')?;
        let name = self.scanner.name()?;
        let digits = self.scanner.number()?;
        let value = self.backend.number(&digits)?;
        self.backend.assign(&name, value)
    }

    pub fn expression(&mut self) -> Result<B::Value> {
        let mut lhs = if self.scanner.at_add_op() {
            self.backend.zero()?
        } else {
            self.term()?
        };
        while let Some(op) = self.scanner.operator().filter(|op| op.is_add_op()) {
            let held = self.backend.operand(lhs)?;
            self.scanner.expect(op.to_char())?;
            let rhs = self.term()?;
            lhs = self.backend.combine(op, held, rhs)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<B::Value> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.scanner.operator().filter(|op| op.is_mul_op()) {
            let held = self.backend.operand(lhs)?;
            self.scanner.expect(op.to_char())?;
            let rhs = self.factor()?;
            lhs = self.backend.combine(op, held, rhs)?;
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<B::Value> {
        if self.scanner.at('(') {
            self.scanner.expect('(')?;
            let value = self.expression()?;
            self.scanner.expect(')')?;
            Ok(value)
        } else if self.scanner.at_letter() {
            self.ident()
        } else {
            let digits = self.scanner.number()?;
            self.backend.number(&digits)
        }
    }

    fn ident(&mut self) -> Result<B::Value> {
        let name = self.scanner.name()?;
        if B::CALLS && self.scanner.at('(') {
            self.scanner.expect('(')?;
            self.scanner.expect(')')?;
            self.backend.call(&name)
        } else {
            self.backend.variable(&name)
        }
    }
}
