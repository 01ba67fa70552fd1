use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Split one source line into tokens using shell-style quoting.
///
/// Errors carry the column of the offending quote or escape but
/// no line number; the parser adds that.
pub fn lex(s: &str) -> Result<Vec<String>> {
    AilaLexer {
        chars: s.chars().peekable(),
        col: 0,
        failed: false,
    }
    .collect()
}

fn is_aila_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn unterminated(column: Column) -> Error {
    error!(SyntaxError, ..&column; "unterminated quote")
}

struct AilaLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    failed: bool,
}

impl<'a> AilaLexer<'a> {
    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_aila_whitespace(*pk) {
                break;
            }
            self.next_char();
        }
    }

    fn word(&mut self) -> Result<String> {
        let mut s = String::new();
        loop {
            let pk = match self.chars.peek() {
                Some(pk) if !is_aila_whitespace(*pk) => *pk,
                _ => return Ok(s),
            };
            let start = self.col;
            self.next_char();
            match pk {
                '\'' => self.single_quoted(&mut s, start)?,
                '"' => self.double_quoted(&mut s, start)?,
                '\\' => match self.next_char() {
                    Some(ch) => s.push(ch),
                    None => {
                        return Err(error!(SyntaxError, ..&(start..self.col);
                            "no character after escape"))
                    }
                },
                ch => s.push(ch),
            }
        }
    }

    fn single_quoted(&mut self, s: &mut String, start: usize) -> Result<()> {
        loop {
            match self.next_char() {
                Some('\'') => return Ok(()),
                Some(ch) => s.push(ch),
                None => return Err(unterminated(start..self.col)),
            }
        }
    }

    fn double_quoted(&mut self, s: &mut String, start: usize) -> Result<()> {
        loop {
            match self.next_char() {
                Some('"') => return Ok(()),
                Some('\\') => match self.next_char() {
                    Some(ch) if ch == '"' || ch == '\\' => s.push(ch),
                    Some(ch) => {
                        s.push('\\');
                        s.push(ch);
                    }
                    None => return Err(unterminated(start..self.col)),
                },
                Some(ch) => s.push(ch),
                None => return Err(unterminated(start..self.col)),
            }
        }
    }
}

impl<'a> Iterator for AilaLexer<'a> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.whitespace();
        self.chars.peek()?;
        let r = self.word();
        self.failed = r.is_err();
        Some(r)
    }
}
