use super::{Word, NUM_REGISTERS};
use crate::code::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Register file
///
/// Eight word slots, zero at power-on. Indexes are pre-validated by
/// operand resolution; the bounds check here keeps that invariant
/// testable.

#[derive(Clone)]
pub struct Registers {
    slots: [Word; NUM_REGISTERS],
}

impl std::fmt::Debug for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.slots)
    }
}

impl Registers {
    pub fn new() -> Registers {
        Registers {
            slots: [0; NUM_REGISTERS],
        }
    }

    pub fn get(&self, index: usize) -> Result<Word> {
        match self.slots.get(index) {
            Some(word) => Ok(*word),
            None => Err(error!(RegisterIndexOutOfRange)),
        }
    }

    pub fn set(&mut self, index: usize, value: Word) -> Result<()> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(error!(RegisterIndexOutOfRange)),
        }
    }
}
