//! # vm32k
//!
//! A 16-bit word virtual machine with a 32K address space.

fn main() {
    std::process::exit(vm32k::term::main());
}
