/*!
# Terminal Module

This Rust module is the interactive front end: it loads the program
image named on the command line, runs it, connects the machine's
output port and input requests to the terminal, and maps the outcome
to an exit status.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::code::Image;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

pub fn main() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 1 {
        eprintln!("Usage: vm32k <program image>");
        return EXIT_USAGE;
    }
    let image = match Image::from_file(&args[0]) {
        Ok(image) => image,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return EXIT_ERROR;
        }
    };
    if image.sanitized() > 0 {
        eprintln!(
            "{}",
            Style::new().bold().paint(format!(
                "Warning: {} out-of-range words in the image were replaced with 0.",
                image.sanitized()
            ))
        );
    }
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(Runtime::new(&image), interrupted) {
        Ok(status) => status,
        Err(error) => {
            eprintln!("{}", error);
            EXIT_ERROR
        }
    }
}

fn main_loop(mut runtime: Runtime, interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let terminal = Interface::new("vm32k")?;
    terminal.set_report_signal(Signal::Interrupt, true);
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Running => {}
            Event::Print(s) => {
                terminal.write_fmt(format_args!("{}", s))?;
            }
            Event::Input => match terminal.read_line()? {
                ReadResult::Input(line) => runtime.enter(&line),
                ReadResult::Signal(Signal::Interrupt) => runtime.interrupt(),
                ReadResult::Signal(_) | ReadResult::Eof => runtime.close_input(),
            },
            Event::Stopped => return Ok(EXIT_OK),
            Event::Error(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                return Ok(EXIT_ERROR);
            }
        }
    }
}
