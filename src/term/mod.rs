extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::gate::Gate;
use crate::mach::{Event, Runtime, Ui, CYCLES};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod console;
pub use console::Console;

const USAGE: &str = "\
usage: aila [--headless] [FILE]
       aila --gate FILE

With no FILE an interactive prompt starts.
  --headless   record widgets instead of drawing them
  --gate       check generated Python in FILE before it is run

Environment:
  AILA_LOG        tracing filter, default \"warn\"
  AILA_DENYLIST   extra comma separated substrings for --gate";

/// Sleeps are split so Ctrl-C is noticed quickly.
const WAIT_SLICE: Duration = Duration::from_millis(50);

#[derive(Debug, PartialEq)]
enum Mode {
    Interactive,
    File { path: String, headless: bool },
    Gate(String),
    Help,
}

pub fn main() {
    init_tracing();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match mode(&args) {
        Ok(Mode::Help) => {
            println!("{}", USAGE);
            Ok(())
        }
        Ok(Mode::Interactive) => interactive(&interrupted),
        Ok(Mode::File { path, headless }) => {
            let source = load(&path);
            match source {
                Ok(source) if headless => drive(&mut Runtime::new(), &source, &interrupted),
                Ok(source) => drive(&mut Runtime::with_ui(Console::new()), &source, &interrupted),
                Err(error) => Err(error),
            }
        }
        Ok(Mode::Gate(path)) => check(&path),
        Err(error) => Err(error),
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("AILA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn mode(args: &[String]) -> Result<Mode, Error> {
    let mut headless = false;
    let mut gate = false;
    let mut path: Option<String> = None;
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Mode::Help),
            "--headless" => headless = true,
            "--gate" => gate = true,
            s if s.starts_with("--") => {
                let msg = format!("unknown option {}\n{}", s, USAGE);
                return Err(error!(InternalError; &msg));
            }
            s => {
                if path.is_some() {
                    return Err(error!(InternalError; USAGE));
                }
                path = Some(s.to_string());
            }
        }
    }
    match (path, gate) {
        (Some(path), true) => Ok(Mode::Gate(path)),
        (None, true) => Err(error!(InternalError; USAGE)),
        (Some(path), false) => Ok(Mode::File { path, headless }),
        (None, false) => Ok(Mode::Interactive),
    }
}

fn io_error(error: std::io::Error) -> Error {
    error!(InternalError; &error.to_string())
}

fn load(filename: &str) -> Result<String, Error> {
    let mut file = match File::open(filename) {
        Ok(file) => file,
        Err(error) => {
            let msg = format!("{}: {}", filename, error);
            match error.kind() {
                ErrorKind::NotFound => return Err(error!(FileNotFound; &msg)),
                _ => return Err(error!(InternalError; &msg)),
            }
        }
    };
    let mut source = String::new();
    file.read_to_string(&mut source).map_err(io_error)?;
    Ok(source)
}

/// Run a program to completion, painting events as they arrive.
fn drive<U: Ui>(
    runtime: &mut Runtime<U>,
    source: &str,
    interrupted: &AtomicBool,
) -> Result<(), Error> {
    runtime.enter(source);
    pump(runtime, interrupted)?;
    Ok(())
}

/// Execute until the runtime wants more input or has halted.
fn pump<U: Ui>(runtime: &mut Runtime<U>, interrupted: &AtomicBool) -> Result<Event, Error> {
    let stdout = std::io::stdout();
    loop {
        check_interrupt(interrupted);
        match runtime.execute(CYCLES) {
            Event::Print(s) => writeln!(stdout.lock(), "{}", s).map_err(io_error)?,
            Event::Errors(errors) => {
                let mut out = stdout.lock();
                for error in errors.iter() {
                    writeln!(out, "{}", Style::new().bold().paint(error.to_string()))
                        .map_err(io_error)?;
                }
            }
            Event::Wait(duration) => {
                stdout.lock().flush().map_err(io_error)?;
                sleep(duration, interrupted);
            }
            Event::Running => {}
            Event::Stopped => return Ok(Event::Stopped),
            Event::Halted => return Ok(Event::Halted),
        }
    }
}

fn check_interrupt(interrupted: &AtomicBool) {
    if interrupted.load(Ordering::SeqCst) {
        debug!("interrupted");
        std::process::exit(130);
    }
}

fn sleep(duration: Duration, interrupted: &AtomicBool) {
    let deadline = Instant::now().checked_add(duration);
    loop {
        check_interrupt(interrupted);
        let slice = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return;
                }
                std::cmp::min(deadline - now, WAIT_SLICE)
            }
            None => WAIT_SLICE,
        };
        std::thread::sleep(slice);
    }
}

fn interactive(interrupted: &AtomicBool) -> Result<(), Error> {
    let mut runtime = Runtime::with_ui(Console::new());
    let command = Interface::new("Aila").map_err(io_error)?;
    command.set_prompt("aila> ").map_err(io_error)?;
    command.set_report_signal(Signal::Interrupt, true);
    command
        .write_fmt(format_args!("Aila {}\n", env!("CARGO_PKG_VERSION")))
        .map_err(io_error)?;
    loop {
        if let Event::Halted = pump(&mut runtime, interrupted)? {
            break;
        }
        let string = match command.read_line().map_err(io_error)? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if runtime.enter(&string) && !string.trim().is_empty() {
            command.add_history_unique(string);
        }
    }
    Ok(())
}

fn check(path: &str) -> Result<(), Error> {
    let text = load(path)?;
    let mut gate = Gate::default();
    if let Ok(extra) = std::env::var("AILA_DENYLIST") {
        gate.extend(extra.split(',').map(str::trim));
    }
    match gate.validate(&text) {
        Ok(_) => {
            println!("{}: ok", path);
            Ok(())
        }
        Err(errors) => {
            for error in errors.iter() {
                println!("{}", Style::new().bold().paint(error.to_string()));
            }
            Err(error!(MalformedOutput; &Gate::summary(&errors)))
        }
    }
}
