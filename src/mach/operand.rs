use super::{Word, NUM_REGISTERS};
use crate::code::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

const REGISTER_BASE: Word = 1 << 15;

/// ## Encoded operand
///
/// A word fetched from memory names either itself or a register.
/// Values 0..=32767 are literals; 32768..=32775 name registers 0..=7.
/// Anything above 32775 never resolves. This is the single place
/// where encoded operands are validated.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Literal(Word),
    Register(usize),
}

impl Operand {
    pub fn decode(word: Word) -> Result<Operand> {
        if word < REGISTER_BASE {
            Ok(Operand::Literal(word))
        } else if (word as usize) < REGISTER_BASE as usize + NUM_REGISTERS {
            Ok(Operand::Register((word - REGISTER_BASE) as usize))
        } else {
            Err(error!(InvalidOperand))
        }
    }

    /// Destination form: the operand must name a register. A literal
    /// cannot be written to.
    pub fn register(word: Word) -> Result<usize> {
        match Operand::decode(word)? {
            Operand::Register(index) => Ok(index),
            Operand::Literal(_) => Err(error!(InvalidOperand)),
        }
    }
}
