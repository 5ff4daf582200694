use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
        }
    }

    pub fn literal(digits: &str) -> Result<i32> {
        digits.parse::<i32>().map_err(|_| error!(Overflow))
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_add(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_sub(rhs).ok_or_else(|| error!(Overflow))
    }

    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        lhs.checked_mul(rhs).ok_or_else(|| error!(Overflow))
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }
}
