use crate::error;
use crate::lang::Error;
use crate::mach::{InputId, Ui};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};

type Result<T> = std::result::Result<T, Error>;

fn unavailable(error: std::io::Error) -> Error {
    error!(DisplayUnavailable; &error.to_string())
}

/// ## Terminal toolkit
///
/// Paints the window as text. The run loop asks for every input field
/// and then lets the operator press buttons by name until an empty line.
#[derive(Default)]
pub struct Console {
    interface: Option<Interface<DefaultTerminal>>,
    title: String,
    inputs: Vec<String>,
    buttons: Vec<(String, Box<dyn FnMut()>)>,
}

impl Console {
    pub fn new() -> Console {
        Console::default()
    }

    fn interface(&mut self) -> Result<&Interface<DefaultTerminal>> {
        if self.interface.is_none() {
            self.interface = Some(Interface::new("Aila").map_err(unavailable)?);
        }
        match &self.interface {
            Some(interface) => Ok(interface),
            None => Err(error!(InternalError)),
        }
    }

    fn paint(&mut self, s: &str) -> Result<()> {
        self.interface()?
            .write_fmt(format_args!("{}\n", s))
            .map_err(unavailable)
    }

    fn read(&mut self, prompt: &str, buffer: &str) -> Result<Option<String>> {
        let interface = self.interface()?;
        interface.set_prompt(prompt).map_err(unavailable)?;
        interface.set_buffer(buffer).map_err(unavailable)?;
        match interface.read_line().map_err(unavailable)? {
            ReadResult::Input(s) => Ok(Some(s)),
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

impl Ui for Console {
    fn window(&mut self, title: &str) -> Result<()> {
        self.title = title.to_string();
        let header = Style::new().bold().underline().paint(title).to_string();
        self.paint(&header)
    }

    fn label(&mut self, text: &str) -> Result<()> {
        self.paint(&format!("  {}", text))
    }

    fn input(&mut self, default: &str) -> Result<InputId> {
        self.paint(&format!("  [{:_<20}]", default))?;
        self.inputs.push(default.to_string());
        Ok(self.inputs.len() - 1)
    }

    fn read_input(&self, id: InputId) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn write_input(&mut self, id: InputId, text: &str) -> Result<()> {
        match self.inputs.get_mut(id) {
            Some(input) => {
                *input = text.to_string();
                Ok(())
            }
            None => Err(error!(UiError; "no such input")),
        }
    }

    fn button(&mut self, text: &str, on_click: Box<dyn FnMut()>) -> Result<()> {
        self.paint(&format!("  [ {} ]", text))?;
        self.buttons.push((text.to_string(), on_click));
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<()> {
        let width = text.chars().count() + 2;
        let rule = format!("+{}+", "-".repeat(width));
        let style = Style::new().bold();
        self.paint(&style.paint(&rule).to_string())?;
        self.paint(&style.paint(format!("| {} |", text)).to_string())?;
        self.paint(&style.paint(&rule).to_string())
    }

    fn close(&mut self) -> Result<()> {
        let note = Style::new()
            .dimmed()
            .paint(format!("({} closed)", self.title))
            .to_string();
        self.title.clear();
        self.inputs.clear();
        self.buttons.clear();
        self.paint(&note)
    }

    fn run(&mut self) -> Result<()> {
        for id in 0..self.inputs.len() {
            let prompt = format!("{} #{}> ", self.title, id + 1);
            let default = self.inputs[id].clone();
            match self.read(&prompt, &default)? {
                Some(value) => self.inputs[id] = value,
                None => return Ok(()),
            }
        }
        if self.buttons.is_empty() {
            return Ok(());
        }
        loop {
            let prompt = format!("{} button> ", self.title);
            let name = match self.read(&prompt, "")? {
                Some(name) if !name.trim().is_empty() => name,
                _ => return Ok(()),
            };
            let name = name.trim();
            match self.buttons.iter_mut().find(|(text, _)| text == name) {
                Some((_, on_click)) => on_click(),
                None => {
                    let msg = format!("no button named {}", name);
                    self.paint(&msg)?;
                }
            }
        }
    }
}
