use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<&'static str, Word> = Word::all()
        .iter()
        .map(|w| (w.as_str(), w.clone()))
        .collect();
);

const WORDS: &[Word] = &[
    Word::Say,
    Word::Set,
    Word::Add,
    Word::Sub,
    Word::Mul,
    Word::Div,
    Word::Repeat,
    Word::Wait,
    Word::Window,
    Word::Label,
    Word::Input,
    Word::Button,
    Word::Show,
    Word::Start,
    Word::Close,
];

/// ## Command words
///
/// Every command Aila understands, plus a fallback which carries
/// the name of anything else.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Word {
    Say,
    Set,
    Add,
    Sub,
    Mul,
    Div,
    Repeat,
    Wait,
    Window,
    Label,
    Input,
    Button,
    Show,
    Start,
    Close,
    Unknown(String),
}

impl Word {
    pub fn all() -> &'static [Word] {
        WORDS
    }

    /// Names are expected to be lower case already; the parser folds them.
    pub fn from_name(s: &str) -> Word {
        STRING_TO_WORD.with(|stw| match stw.get(s) {
            Some(w) => w.clone(),
            None => Word::Unknown(s.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        use Word::*;
        match self {
            Say => "say",
            Set => "set",
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Repeat => "repeat",
            Wait => "wait",
            Window => "window",
            Label => "label",
            Input => "input",
            Button => "button",
            Show => "show",
            Start => "start",
            Close => "close",
            Unknown(s) => s,
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
