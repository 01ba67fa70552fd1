use super::ast::Command;
use super::error::Error;
use super::lex::lex;

/// One line of source text and its 1-based position in the file.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    text: String,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Line {
        Line {
            number,
            text: s.trim_end_matches(&['\r', '\n'][..]).to_string(),
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Blank lines and `#` comments produce no command.
    pub fn is_empty(&self) -> bool {
        let trimmed = self.text.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    }

    pub fn command(&self) -> Result<Option<Command>, Error> {
        if self.is_empty() {
            return Ok(None);
        }
        let mut tokens = match lex(&self.text) {
            Ok(tokens) => tokens.into_iter(),
            Err(e) => {
                let msg = format!("{}: {}", e.text(), self.text.trim());
                return Err(error!(SyntaxError, Some(self.number), ..&e.column(); &msg));
            }
        };
        let name = match tokens.next() {
            Some(name) => name,
            None => return Ok(None),
        };
        Ok(Some(Command::new(&name, tokens.collect(), self.number)))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "@%+=:,./_$-".contains(c)
}

/// Quote a token so that lexing it again yields the same token.
pub fn quote(s: &str) -> String {
    if !s.is_empty() && s.chars().all(is_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}
