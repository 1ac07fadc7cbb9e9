/*!
# Program Image Module

This Rust module reads binary program images and defines the error
type shared by the loader and the machine.

*/

#[macro_use]
mod error;
mod image;

pub use error::Error;
pub use error::ErrorCode;
pub use image::Image;

#[cfg(test)]
mod tests;
