use super::Opcode;
use crate::lang::{Backend, Error, Operator};
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## Code emitting backend
///
/// Writes one tab-indented instruction per line as soon as the
/// parser recognizes it. Values live in `D0` so the backend
/// value is `()`.

pub struct Compiler<W: Write> {
    out: W,
    emitted: usize,
}

impl<W: Write> Compiler<W> {
    pub fn new(out: W) -> Compiler<W> {
        Compiler { out, emitted: 0 }
    }

    /// Number of instructions written.
    pub fn len(&self) -> usize {
        self.emitted
    }

    pub fn is_empty(&self) -> bool {
        self.emitted == 0
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, opcode: Opcode) -> Result<()> {
        writeln!(self.out, "\t{}", opcode)?;
        self.emitted += 1;
        Ok(())
    }
}

impl<W: Write> Backend for Compiler<W> {
    type Value = ();
    const CALLS: bool = true;

    fn zero(&mut self) -> Result<()> {
        self.emit(Opcode::Clear)
    }

    fn number(&mut self, digits: &str) -> Result<()> {
        self.emit(Opcode::Immediate(digits.into()))
    }

    fn variable(&mut self, name: &str) -> Result<()> {
        self.emit(Opcode::Load(name.into()))
    }

    fn call(&mut self, name: &str) -> Result<()> {
        self.emit(Opcode::Bsr(name.into()))
    }

    fn operand(&mut self, _lhs: ()) -> Result<()> {
        self.emit(Opcode::Push)
    }

    fn combine(&mut self, op: Operator, _lhs: (), _rhs: ()) -> Result<()> {
        use Operator::*;
        match op {
            Plus => self.emit(Opcode::Add),
            Minus => {
                self.emit(Opcode::Sub)?;
                self.emit(Opcode::Neg)
            }
            Multiply => self.emit(Opcode::Mul),
            Divide => {
                self.emit(Opcode::PopDivisor)?;
                self.emit(Opcode::Div)
            }
        }
    }

    fn assign(&mut self, name: &str, _value: ()) -> Result<()> {
        self.emit(Opcode::Address(name.into()))?;
        self.emit(Opcode::Store)
    }

    fn output(&mut self, name: &str) -> Result<()> {
        self.emit(Opcode::Load(name.into()))?;
        self.emit(Opcode::Bsr("WRITE".into()))
    }
}
