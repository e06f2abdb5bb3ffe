//! Arithmetic on parsed parameters.

use std::fmt;

use thiserror::Error;

use crate::params::{Operation, Params};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Parameter '{0}' is not set")]
    Missing(&'static str),

    #[error("Integer overflow in {0}")]
    Overflow(Operation),
}

/// One evaluated expression, shown as `10 mul 2 = 20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculation {
    pub left: i32,
    pub operation: Operation,
    pub right: i32,
    pub result: i32,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.left, self.operation, self.right, self.result)
    }
}

/// Apply the operation to the two operands.
pub fn calc(params: &Params) -> Result<Calculation, CalcError> {
    let left = params.left.ok_or(CalcError::Missing("left"))?;
    let right = params.right.ok_or(CalcError::Missing("right"))?;
    let operation = params.operation.ok_or(CalcError::Missing("operation"))?;

    let result = match operation {
        Operation::Plus => left.checked_add(right),
        Operation::Minus => left.checked_sub(right),
        Operation::Mul => left.checked_mul(right),
        Operation::Div => {
            if right == 0 {
                return Err(CalcError::DivisionByZero);
            }
            left.checked_div(right)
        }
    };

    let result = result.ok_or(CalcError::Overflow(operation))?;
    Ok(Calculation {
        left,
        operation,
        right,
        result,
    })
}
