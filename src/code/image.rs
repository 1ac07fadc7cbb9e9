use super::Error;
use crate::error;
use std::fs::File;
use std::io::Read;

type Result<T> = std::result::Result<T, Error>;

// One word per address in the machine's 15-bit address space.
const CAPACITY: usize = 1 << 15;

// Highest word with a meaning on the wire: register 7.
const MAX_ENCODED: u16 = 32775;

/// ## Binary program image
///
/// A program arrives as a stream of little-endian 16-bit words, at
/// most 32,768 of them. Words above 32775 have no meaning in any
/// instruction slot; they are replaced with 0 and counted so the
/// caller can report them.

#[derive(Debug)]
pub struct Image {
    words: Vec<u16>,
    sanitized: usize,
}

impl Image {
    pub fn from_file(filename: &str) -> Result<Image> {
        let mut file = match File::open(filename) {
            Ok(file) => file,
            Err(error) => return Err(error!(FileUnreadable; error.to_string())),
        };
        let mut bytes = Vec::new();
        if let Err(error) = file.read_to_end(&mut bytes) {
            return Err(error!(FileUnreadable; error.to_string()));
        }
        Image::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Image> {
        if bytes.len() % 2 != 0 {
            return Err(error!(OddLength));
        }
        if bytes.len() / 2 > CAPACITY {
            return Err(error!(TooLarge));
        }
        let mut words = Vec::with_capacity(bytes.len() / 2);
        let mut sanitized = 0;
        for pair in bytes.chunks(2) {
            let word = u16::from_le_bytes([pair[0], pair[1]]);
            if word > MAX_ENCODED {
                sanitized += 1;
                words.push(0);
            } else {
                words.push(word);
            }
        }
        Ok(Image { words, sanitized })
    }

    /// Builds an image from words that are already decoded. No
    /// sanitizing; the capacity check still applies.
    pub fn from_words(words: &[u16]) -> Result<Image> {
        if words.len() > CAPACITY {
            return Err(error!(TooLarge));
        }
        Ok(Image {
            words: words.to_vec(),
            sanitized: 0,
        })
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Number of out-of-range words replaced with 0 while decoding.
    pub fn sanitized(&self) -> usize {
        self.sanitized
    }
}
