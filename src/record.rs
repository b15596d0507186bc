//! Input record parsing and arithmetic dispatch.

use crate::error::LineError;
use crate::numeral;

/// One line split into its three fields.
///
/// The numerals are not validated and the operator is not interpreted yet,
/// so that numeral failures can be reported before operator failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord<'a> {
    /// Left-hand numeral token
    pub left: &'a str,

    /// Raw operator symbol
    pub op: char,

    /// Right-hand numeral token
    pub right: &'a str,
}

impl<'a> InputRecord<'a> {
    /// Splits a cleaned line into `<numeral> <op> <numeral>`.
    ///
    /// Fields may be separated by any run of whitespace. The line must have
    /// exactly three fields and the middle one must be a single character.
    pub fn parse(line: &'a str) -> Result<Self, LineError> {
        let mut fields = line.split_whitespace();

        let (left, op, right) = match (fields.next(), fields.next(), fields.next(), fields.next()) {
            (Some(left), Some(op), Some(right), None) => (left, op, right),
            _ => return Err(LineError::InvalidFormat),
        };

        let mut op_chars = op.chars();
        match (op_chars.next(), op_chars.next()) {
            (Some(op), None) => Ok(InputRecord { left, op, right }),
            _ => Err(LineError::InvalidFormat),
        }
    }

    /// Validates both numerals and decodes them.
    ///
    /// Nothing is decoded unless both tokens pass validation.
    pub fn decode(&self) -> Result<DecodedRecord<'a>, LineError> {
        numeral::validate(self.left)?;
        numeral::validate(self.right)?;

        Ok(DecodedRecord {
            record: self.clone(),
            left: numeral::decode(self.left)?,
            right: numeral::decode(self.right)?,
        })
    }
}

/// A record whose numerals decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord<'a> {
    pub record: InputRecord<'a>,
    pub left: i64,
    pub right: i64,
}

impl DecodedRecord<'_> {
    /// Dispatches the operator and computes the result.
    pub fn compute(&self) -> Result<i64, LineError> {
        Operation::try_from(self.record.op)?.apply(self.left, self.right)
    }
}

/// Supported binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// Integer division, truncating toward zero.
    Divide,
}

impl Operation {
    /// The operator symbol as it appears in input.
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Applies the operation to two decoded values.
    pub fn apply(&self, left: i64, right: i64) -> Result<i64, LineError> {
        let result = match self {
            Operation::Add => left.checked_add(right),
            Operation::Subtract => left.checked_sub(right),
            Operation::Multiply => left.checked_mul(right),
            Operation::Divide => {
                if right == 0 {
                    return Err(LineError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or(LineError::Overflow { op: self.symbol() })
    }
}

impl TryFrom<char> for Operation {
    type Error = LineError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operation::Add),
            '-' => Ok(Operation::Subtract),
            '*' => Ok(Operation::Multiply),
            '/' => Ok(Operation::Divide),
            other => Err(LineError::UnsupportedOperator(other)),
        }
    }
}
