/// Arithmetic operators recognized by the expression grammar.
///
/// `Plus` and `Minus` bind at the add level, `Multiply` and `Divide`
/// at the multiply level. Both levels associate to the left.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        use Operator::*;
        match self {
            Plus => '+',
            Minus => '-',
            Multiply => '*',
            Divide => '/',
        }
    }

    pub fn is_add_op(self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus)
    }

    pub fn is_mul_op(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
