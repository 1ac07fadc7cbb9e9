use super::{Address, Word, MEMORY_SIZE};
use crate::code::{Error, Image};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// ## Word-addressed memory
///
/// A fixed buffer of 32,768 words. Instructions and data share it;
/// a program may overwrite instruction words it has yet to execute.

#[derive(Clone)]
pub struct Memory {
    words: Vec<Word>,
}

impl Memory {
    pub fn new(image: &Image) -> Memory {
        let mut words = image.words().to_vec();
        words.resize(MEMORY_SIZE, 0);
        Memory { words }
    }

    pub fn read(&self, address: Address) -> Result<Word> {
        match self.words.get(address) {
            Some(word) => Ok(*word),
            None => Err(error!(InvalidAddress)),
        }
    }

    pub fn write(&mut self, address: Address, word: Word) -> Result<()> {
        match self.words.get_mut(address) {
            Some(slot) => {
                *slot = word;
                Ok(())
            }
            None => Err(error!(InvalidAddress)),
        }
    }
}
