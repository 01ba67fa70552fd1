use super::DEFAULT_TITLE;
use crate::error;
use crate::lang::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

pub type InputId = usize;

/// ## Widget toolkit capabilities
///
/// Everything Aila can ask of a user interface. Implementations own
/// the real window; `Session` decides when to create one.
pub trait Ui {
    /// Create the window, or retitle it when one is already open.
    fn window(&mut self, title: &str) -> Result<()>;
    fn label(&mut self, text: &str) -> Result<()>;
    fn input(&mut self, default: &str) -> Result<InputId>;
    fn read_input(&self, id: InputId) -> Option<String>;
    fn write_input(&mut self, id: InputId, text: &str) -> Result<()>;
    fn button(&mut self, text: &str, on_click: Box<dyn FnMut()>) -> Result<()>;
    /// Modal message box.
    fn show(&mut self, text: &str) -> Result<()>;
    fn close(&mut self) -> Result<()>;
    /// Block until the user or host ends the session.
    fn run(&mut self) -> Result<()>;
}

#[derive(Debug, PartialEq, Clone)]
pub enum Widget {
    Label(String),
    Input(InputId),
    Button(String),
}

/// ## The single implicit window
///
/// Widget commands never reach the toolkit without a window. When none
/// is open, one with the default title is created first, once.
pub struct Session<U: Ui> {
    ui: U,
    window_open: bool,
    widgets: Vec<Widget>,
}

impl<U: Ui> Session<U> {
    pub fn new(ui: U) -> Session<U> {
        Session {
            ui,
            window_open: false,
            widgets: vec![],
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn is_open(&self) -> bool {
        self.window_open
    }

    /// Widgets of the current window in the order they were rendered.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn window(&mut self, title: &str) -> Result<()> {
        self.ui.window(title)?;
        self.window_open = true;
        Ok(())
    }

    fn ensure_window(&mut self) -> Result<()> {
        if !self.window_open {
            debug!(title = DEFAULT_TITLE, "creating default window");
            self.window(DEFAULT_TITLE)?;
        }
        Ok(())
    }

    pub fn label(&mut self, text: &str) -> Result<()> {
        self.ensure_window()?;
        self.ui.label(text)?;
        self.widgets.push(Widget::Label(text.to_string()));
        Ok(())
    }

    pub fn input(&mut self, default: &str) -> Result<InputId> {
        self.ensure_window()?;
        let id = self.ui.input(default)?;
        self.widgets.push(Widget::Input(id));
        Ok(id)
    }

    pub fn button(&mut self, text: &str) -> Result<()> {
        self.ensure_window()?;
        self.ui.button(text, Box::new(|| {}))?;
        self.widgets.push(Widget::Button(text.to_string()));
        Ok(())
    }

    pub fn show(&mut self, text: &str) -> Result<()> {
        self.ensure_window()?;
        self.ui.show(text)
    }

    pub fn close(&mut self) -> Result<()> {
        if self.window_open {
            debug!("closing window");
            self.ui.close()?;
            self.window_open = false;
            self.widgets.clear();
        }
        Ok(())
    }

    pub fn start(&mut self) -> Result<()> {
        self.ensure_window()?;
        debug!("entering ui run loop");
        self.ui.run()?;
        debug!("ui run loop returned");
        Ok(())
    }
}

/// One call made on a `Recorder`.
#[derive(Debug, PartialEq, Clone)]
pub enum Call {
    Window(String),
    Label(String),
    Input(String),
    Button(String),
    Show(String),
    Close,
    Run,
}

/// ## Headless toolkit
///
/// Logs every call without rendering anything. Useful for tests and
/// for running scripts where no display exists.
#[derive(Default)]
pub struct Recorder {
    calls: Vec<Call>,
    inputs: Vec<String>,
    buttons: Vec<Box<dyn FnMut()>>,
    unavailable: bool,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    /// A recorder which behaves like a machine without a display.
    pub fn unavailable() -> Recorder {
        Recorder {
            unavailable: true,
            ..Recorder::default()
        }
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Invoke the handler of the nth button. Returns false if there is none.
    pub fn click(&mut self, index: usize) -> bool {
        match self.buttons.get_mut(index) {
            Some(on_click) => {
                on_click();
                true
            }
            None => false,
        }
    }

    fn record(&mut self, call: Call) -> Result<()> {
        if self.unavailable {
            return Err(error!(DisplayUnavailable; "no display attached"));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Ui for Recorder {
    fn window(&mut self, title: &str) -> Result<()> {
        self.record(Call::Window(title.to_string()))
    }

    fn label(&mut self, text: &str) -> Result<()> {
        self.record(Call::Label(text.to_string()))
    }

    fn input(&mut self, default: &str) -> Result<InputId> {
        self.record(Call::Input(default.to_string()))?;
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
        self.record(Call::Button(text.to_string()))?;
        self.buttons.push(on_click);
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<()> {
        self.record(Call::Show(text.to_string()))
    }

    fn close(&mut self) -> Result<()> {
        self.record(Call::Close)
    }

    fn run(&mut self) -> Result<()> {
        self.record(Call::Run)
    }
}
