/*!
## Rust Machine Module

This Rust module provides the two backends for the language:
an interpreter that evaluates statements against variable memory
and a compiler that emits 68000 assembly.

*/

mod compile;
mod interpret;
mod opcode;
mod operation;
mod var;

pub use compile::Compiler;
pub use interpret::Interpreter;
pub use opcode::Opcode;
pub use operation::Operation;
pub use var::Var;

use crate::lang::{parse, Error};
use std::io::Write;

/// Evaluates a program and returns the final variable memory.
pub fn interpret<I, W>(chars: I, out: W) -> Result<Var, Error>
where
    I: Iterator<Item = char>,
    W: Write,
{
    let mut interpreter = Interpreter::new(out);
    parse(chars, &mut interpreter)?;
    let (var, mut out) = interpreter.into_parts();
    out.flush()?;
    Ok(var)
}

/// Compiles a program and returns the number of instructions emitted.
pub fn compile<I, W>(chars: I, out: W) -> Result<usize, Error>
where
    I: Iterator<Item = char>,
    W: Write,
{
    let mut compiler = Compiler::new(out);
    parse(chars, &mut compiler)?;
    let len = compiler.len();
    compiler.into_inner().flush()?;
    Ok(len)
}
