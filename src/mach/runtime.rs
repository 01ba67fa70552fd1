use super::{substitute, Recorder, Session, Ui, Val, Var, DEFAULT_BUTTON, DEFAULT_TITLE};
use crate::error;
use crate::lang::ast::Command;
use crate::lang::token::Word;
use crate::lang::{parse, Error};
use std::convert::TryFrom;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

/// Commands executed per `execute` call when driving a whole program.
pub const CYCLES: usize = 5000;

/// ## Events
///
/// Everything a host must act on. `Print` is one line of console output
/// without its newline. `Wait` asks the host to block for the duration.
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    Stopped,
    Running,
    Halted,
    Print(String),
    Errors(Arc<Vec<Error>>),
    Wait(Duration),
}

/// ## Interpreter
///
/// Owns the listing, the variables and the UI session. Commands run
/// strictly in order, one at a time. Once halted nothing runs again.
pub struct Runtime<U: Ui = Recorder> {
    listing: Vec<Command>,
    pc: usize,
    vars: Var,
    session: Session<U>,
    errors: Vec<Error>,
    repeat: Option<(usize, String)>,
    halted: bool,
}

impl Default for Runtime<Recorder> {
    fn default() -> Self {
        Runtime::with_ui(Recorder::new())
    }
}

impl Runtime<Recorder> {
    /// A runtime with the headless toolkit.
    pub fn new() -> Runtime<Recorder> {
        Runtime::default()
    }
}

impl<U: Ui> Runtime<U> {
    pub fn with_ui(ui: U) -> Runtime<U> {
        Runtime {
            listing: vec![],
            pc: 0,
            vars: Var::new(),
            session: Session::new(ui),
            errors: vec![],
            repeat: None,
            halted: false,
        }
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn session(&self) -> &Session<U> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<U> {
        &mut self.session
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Enter the terminal state. Remaining commands are dropped.
    pub fn halt(&mut self) {
        self.halted = true;
        self.listing.clear();
        self.pc = 0;
        self.repeat = None;
    }

    /// Forget variables and any unexecuted commands. The window is kept.
    pub fn clear(&mut self) {
        self.vars.clear();
        self.listing.clear();
        self.errors.clear();
        self.pc = 0;
        self.repeat = None;
    }

    /// Parse source and queue its commands after anything still pending.
    /// Syntax errors are reported by the next `execute`. Returns false
    /// once the runtime has halted.
    pub fn enter(&mut self, source: &str) -> bool {
        if self.halted {
            return false;
        }
        if self.pc >= self.listing.len() {
            self.listing.clear();
            self.pc = 0;
        }
        let (mut commands, mut errors) = parse(source);
        self.listing.append(&mut commands);
        self.errors.append(&mut errors);
        true
    }

    /// Run up to `cycles` commands and report what the host must do next.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if !self.errors.is_empty() {
            return Event::Errors(Arc::new(std::mem::take(&mut self.errors)));
        }
        if self.halted {
            return Event::Halted;
        }
        for _ in 0..cycles {
            if let Some((remaining, text)) = self.repeat.take() {
                if remaining > 0 {
                    if remaining > 1 {
                        self.repeat = Some((remaining - 1, text.clone()));
                    }
                    return Event::Print(text);
                }
            }
            let command = match self.listing.get(self.pc) {
                Some(command) => command.clone(),
                None => return Event::Stopped,
            };
            self.pc += 1;
            match self.dispatch(&command) {
                Ok(Some(event)) => return event,
                Ok(None) => {}
                Err(error) => {
                    let error = error.in_line_number(Some(command.line_number));
                    if error.is_fatal() {
                        warn!(%error, "halting");
                        self.halt();
                    }
                    return Event::Errors(Arc::new(vec![error]));
                }
            }
        }
        Event::Running
    }

    /// Run a whole program, writing the trace to `out` and sleeping
    /// for every `wait`.
    pub fn run<W: Write>(&mut self, source: &str, out: &mut W) -> std::io::Result<()> {
        self.enter(source);
        loop {
            match self.execute(CYCLES) {
                Event::Print(s) => writeln!(out, "{}", s)?,
                Event::Errors(errors) => {
                    for error in errors.iter() {
                        writeln!(out, "{}", error)?;
                    }
                }
                Event::Wait(duration) => std::thread::sleep(duration),
                Event::Running => {}
                Event::Stopped | Event::Halted => return Ok(()),
            }
        }
    }

    fn dispatch(&mut self, command: &Command) -> Result<Option<Event>> {
        let args = substitute(&command.args, &self.vars);
        let word = command.word();
        debug!(line = command.line_number, command = %word, args = args.len(), "dispatch");
        if args != command.args {
            trace!(?args, "substituted");
        }
        match word {
            Word::Say => Ok(Some(Event::Print(args.join(" ")))),
            Word::Set => {
                let (name, value) = pair(&word, &args)?;
                self.vars.store(name, Val::from_literal(value));
                Ok(None)
            }
            Word::Add | Word::Sub | Word::Mul | Word::Div => {
                let (name, value) = pair(&word, &args)?;
                let rhs = Val::number(value)?;
                match word {
                    Word::Add => self.vars.add(name, rhs)?,
                    Word::Sub => self.vars.sub(name, rhs)?,
                    Word::Mul => self.vars.mul(name, rhs)?,
                    _ => self.vars.div(name, rhs)?,
                };
                Ok(None)
            }
            Word::Repeat => {
                let (count, text) = match args.split_first() {
                    Some((count, text)) => (count, text.join(" ")),
                    None => return Err(arity(&word, "at least 1", 0)),
                };
                let count = usize::try_from(repeat_count(count)).unwrap_or(usize::MAX);
                self.repeat = Some((count, text));
                Ok(None)
            }
            Word::Wait => {
                if args.len() != 1 {
                    return Err(arity(&word, "1", args.len()));
                }
                let seconds = match args[0].trim().parse::<f64>() {
                    Ok(n) if n.is_finite() => n.max(0.0),
                    _ => 0.0,
                };
                let duration = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX);
                Ok(Some(Event::Wait(duration)))
            }
            Word::Window => {
                let title = args.join(" ");
                if title.is_empty() {
                    self.session.window(DEFAULT_TITLE)?;
                } else {
                    self.session.window(&title)?;
                }
                Ok(None)
            }
            Word::Label => {
                self.session.label(&args.join(" "))?;
                Ok(None)
            }
            Word::Input => {
                self.session.input(&args.join(" "))?;
                Ok(None)
            }
            Word::Button => {
                let text = args.join(" ");
                if text.is_empty() {
                    self.session.button(DEFAULT_BUTTON)?;
                } else {
                    self.session.button(&text)?;
                }
                Ok(None)
            }
            Word::Show => {
                self.session.show(&args.join(" "))?;
                Ok(None)
            }
            Word::Start => {
                self.session.start()?;
                self.halt();
                Ok(Some(Event::Halted))
            }
            Word::Close => {
                self.session.close()?;
                Ok(None)
            }
            Word::Unknown(name) => Err(error!(UnknownCommand; &name)),
        }
    }
}

fn arity(word: &Word, expected: &str, got: usize) -> Error {
    let msg = format!("{} takes {}, got {}", word, expected, got);
    error!(ArityError; &msg)
}

/// Integers saturate instead of overflowing. Anything else counts once.
fn repeat_count(s: &str) -> i64 {
    let s = s.trim();
    match s.parse::<i64>() {
        Ok(n) => n.max(0),
        Err(_) => {
            let digits = s.strip_prefix(&['-', '+'][..]).unwrap_or(s);
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                1
            } else if s.starts_with('-') {
                0
            } else {
                i64::MAX
            }
        }
    }
}

fn pair<'a>(word: &Word, args: &'a [String]) -> Result<(&'a str, &'a str)> {
    match args {
        [name, value] => Ok((name.as_str(), value.as_str())),
        _ => Err(arity(word, "2", args.len())),
    }
}
