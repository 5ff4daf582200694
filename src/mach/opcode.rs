use std::rc::Rc;

/// ## Target instruction set
///
/// A small subset of 68000 assembly. Every expression leaves its
/// result in `D0`. Left operands wait on the stack while the right
/// operand is computed.
///
/// For example: `A=3*B` compiles to
/// `[Immediate(3), Push, Load(B), Multiply, Address(A), Store]`

#[derive(Clone, PartialEq, Eq)]
pub enum Opcode {
    // *** Register loads
    /// `CLR D0`
    Clear,
    /// `MOVE #n,D0`
    Immediate(Rc<str>),
    /// `MOVE X(PC),D0`
    Load(Rc<str>),
    /// `LEA X(PC),A0`
    Address(Rc<str>),
    /// `MOVE D0,(A0)`
    Store,

    // *** Stack manipulation
    /// `MOVE D0,-(SP)`
    Push,
    /// `MOVE (SP)+,D1`
    PopDivisor,

    // *** Arithmetic
    /// `ADD (SP)+,D0`
    Add,
    /// `SUB (SP)+,D0`
    Sub,
    /// `NEG D0`
    Neg,
    /// `MULS (SP)+,D0`
    Mul,
    /// `DIVS D1,D0`
    Div,

    // *** Branch control
    /// `BSR X`
    Bsr(Rc<str>),
}

impl std::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Clear => write!(f, "CLR D0"),
            Immediate(n) => write!(f, "MOVE #{},D0", n),
            Load(s) => write!(f, "MOVE {}(PC),D0", s),
            Address(s) => write!(f, "LEA {}(PC),A0", s),
            Store => write!(f, "MOVE D0,(A0)"),

            Push => write!(f, "MOVE D0,-(SP)"),
            PopDivisor => write!(f, "MOVE (SP)+,D1"),

            Add => write!(f, "ADD (SP)+,D0"),
            Sub => write!(f, "SUB (SP)+,D0"),
            Neg => write!(f, "NEG D0"),
            Mul => write!(f, "MULS (SP)+,D0"),
            Div => write!(f, "DIVS D1,D0"),

            Bsr(s) => write!(f, "BSR {}", s),
        }
    }
}
