use aila::mach::{Event, Runtime, Ui};

pub fn exec<U: Ui>(runtime: &mut Runtime<U>) -> String {
    exec_n(runtime, 5000)
}

/// Collect everything a host would print. Waits are noted as
/// `[wait <duration>]` instead of slept.
pub fn exec_n<U: Ui>(runtime: &mut Runtime<U>, cycles: usize) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped | Event::Halted => break,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {}
            Event::Print(ps) => {
                s.push_str(&ps);
                s.push('\n');
            }
            Event::Wait(duration) => {
                s.push_str(&format!("[wait {:?}]\n", duration));
            }
        }
    }
    s
}

