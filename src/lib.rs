//! # 32K Machine
//!
//! A virtual machine for programs of 16-bit words: 32,768 words of
//! memory, eight registers, an unbounded stack, and an instruction
//! set of 22 opcodes. Programs arrive as little-endian binary images
//! and run until they halt, fail, or ask for input.
//!
//! ```
//! use vm32k::code::Image;
//! use vm32k::mach::{Event, Runtime};
//!
//! let image = Image::from_words(&[19, 65, 0]).unwrap();
//! let mut runtime = Runtime::new(&image);
//! match runtime.execute(100) {
//!     Event::Print(s) => assert_eq!(s, "A"),
//!     event => panic!("{:?}", event),
//! }
//! ```

pub mod code;
pub mod mach;
pub mod term;
