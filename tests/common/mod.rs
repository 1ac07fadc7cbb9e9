use vm32k::code::Image;
use vm32k::mach::{Event, Runtime};

pub fn runtime(words: &[u16]) -> Runtime {
    Runtime::new(&Image::from_words(words).unwrap())
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
            Event::Input => {
                break;
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
        }
        prev_running = match event {
            Event::Running => true,
            _ => false,
        };
    }
    s
}
