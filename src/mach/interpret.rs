use super::{Operation, Var};
use crate::lang::{Backend, Error, Operator};
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## Evaluating backend
///
/// Computes each expression as it is parsed. Output statements
/// print one integer per line to the writer.

pub struct Interpreter<W: Write> {
    var: Var,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Interpreter<W> {
        Interpreter {
            var: Var::new(),
            out,
        }
    }

    pub fn into_parts(self) -> (Var, W) {
        (self.var, self.out)
    }
}

impl<W: Write> Backend for Interpreter<W> {
    type Value = i32;

    fn zero(&mut self) -> Result<i32> {
        Ok(0)
    }

    fn number(&mut self, digits: &str) -> Result<i32> {
        Operation::literal(digits)
    }

    fn variable(&mut self, name: &str) -> Result<i32> {
        Ok(self.var.fetch(name))
    }

    fn operand(&mut self, lhs: i32) -> Result<i32> {
        Ok(lhs)
    }

    fn combine(&mut self, op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        Operation::binary(op, lhs, rhs)
    }

    fn assign(&mut self, name: &str, value: i32) -> Result<()> {
        self.var.store(name, value);
        Ok(())
    }

    fn output(&mut self, name: &str) -> Result<()> {
        writeln!(self.out, "{}", self.var.fetch(name))?;
        Ok(())
    }
}
