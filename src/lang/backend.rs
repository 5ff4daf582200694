use super::{token::Operator, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Realization of a parse
///
/// The parser never builds a tree. Each production calls into a
/// backend as soon as it is recognized, and the backend either
/// computes a value or emits code that will compute it later.
///
/// For example: `A=3*B` drives a backend with
/// `number("3")`, `operand(..)`, `variable("B")`,
/// `combine(Multiply, ..)`, `assign("A", ..)`.

pub trait Backend {
    /// Result of an expression. Compilers that keep results in a
    /// register use `()`.
    type Value;

    /// Whether `name()` is parsed as a subroutine call.
    const CALLS: bool = false;

    /// Implicit left operand of a leading `+` or `-`.
    fn zero(&mut self) -> Result<Self::Value>;
    fn number(&mut self, digits: &str) -> Result<Self::Value>;
    fn variable(&mut self, name: &str) -> Result<Self::Value>;

    /// Only reached when `CALLS` is true.
    fn call(&mut self, name: &str) -> Result<Self::Value> {
        let _ = name;
        Err(crate::error!(InternalError; "CALLS NOT SUPPORTED"))
    }

    /// Invoked with the left operand before the right operand is parsed.
    fn operand(&mut self, lhs: Self::Value) -> Result<Self::Value>;
    fn combine(&mut self, op: Operator, lhs: Self::Value, rhs: Self::Value)
        -> Result<Self::Value>;

    fn assign(&mut self, name: &str, value: Self::Value) -> Result<()>;
    fn output(&mut self, name: &str) -> Result<()>;
}
