/*!
## Generated Code Gate

Aila programs may be translated to Python by an outside text generator.
Whatever comes back passes through this gate before anything runs it:
markdown fences are removed, denylisted substrings are rejected and the
text must at least scan as well-formed Python.

*/

use crate::error;
use crate::lang::Error;

/// Substrings rejected unless the caller supplies its own list.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "eval(",
    "exec(",
    "__import__",
    "compile(",
    "import os",
    "import sys",
    "import socket",
    "import shutil",
    "subprocess",
    "urllib",
    "requests",
    "open(",
];

#[derive(Debug, Clone)]
pub struct Gate {
    denylist: Vec<String>,
}

impl Default for Gate {
    fn default() -> Gate {
        Gate::new(DEFAULT_DENYLIST.iter().copied())
    }
}

impl Gate {
    pub fn new<I, S>(denylist: I) -> Gate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Gate {
            denylist: denylist
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// Add entries, for example from `AILA_DENYLIST`.
    pub fn extend<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for entry in entries {
            let entry = entry.into();
            if !entry.is_empty() && !self.denylist.contains(&entry) {
                self.denylist.push(entry);
            }
        }
    }

    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    /// Returns the cleaned text, or every problem found.
    pub fn validate(&self, text: &str) -> Result<String, Vec<Error>> {
        let code = strip_fences(text);
        if code.trim().is_empty() {
            return Err(vec![error!(MalformedOutput; "no code returned")]);
        }
        let mut errors: Vec<Error> = vec![];
        for entry in &self.denylist {
            if let Some(pos) = code.find(entry.as_str()) {
                let line = code[..pos].matches('\n').count() + 1;
                errors.push(error!(ForbiddenSubstring, Some(line); entry));
            }
        }
        errors.append(&mut check_python(&code));
        if errors.is_empty() {
            Ok(code)
        } else {
            errors.sort_by_key(|e| e.line_number());
            Err(errors)
        }
    }

    pub fn summary(errors: &[Error]) -> String {
        match errors.len() {
            1 => "1 problem found".to_string(),
            n => format!("{} problems found", n),
        }
    }
}

/// Drop markdown code fence lines such as "```python".
pub fn strip_fences(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect();
    kept.join("\n").trim().to_string()
}

enum State {
    Code,
    Comment,
    Str { quote: char, triple: bool, line: usize },
}

/// Bracket nesting and string termination. Not a full Python parser.
pub fn check_python(code: &str) -> Vec<Error> {
    let mut errors: Vec<Error> = vec![];
    let mut brackets: Vec<(char, usize)> = vec![];
    let mut state = State::Code;
    let mut line = 1;
    let mut chars = code.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            State::Comment => {
                if ch == '\n' {
                    state = State::Code;
                }
            }
            State::Str { quote, triple, line: start } => {
                if ch == '\\' {
                    if chars.next() == Some('\n') {
                        line += 1;
                    }
                } else if ch == quote {
                    if !triple {
                        state = State::Code;
                    } else if chars.peek() == Some(&quote) {
                        chars.next();
                        if chars.peek() == Some(&quote) {
                            chars.next();
                            state = State::Code;
                        }
                    }
                } else if ch == '\n' && !triple {
                    errors.push(error!(MalformedOutput, Some(start); "unterminated string"));
                    state = State::Code;
                }
            }
            State::Code => match ch {
                '#' => state = State::Comment,
                '\'' | '"' => {
                    let mut triple = false;
                    if chars.peek() == Some(&ch) {
                        chars.next();
                        if chars.peek() == Some(&ch) {
                            chars.next();
                            triple = true;
                        } else {
                            // empty string literal
                            continue;
                        }
                    }
                    state = State::Str {
                        quote: ch,
                        triple,
                        line,
                    };
                }
                '(' | '[' | '{' => brackets.push((ch, line)),
                ')' | ']' | '}' => {
                    let open = match ch {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match brackets.pop() {
                        Some((o, _)) if o == open => {}
                        Some((o, at)) => {
                            let msg = format!("'{}' closes '{}' opened on line {}", ch, o, at);
                            errors.push(error!(MalformedOutput, Some(line); &msg));
                        }
                        None => {
                            let msg = format!("unmatched '{}'", ch);
                            errors.push(error!(MalformedOutput, Some(line); &msg));
                        }
                    }
                }
                _ => {}
            },
        }
        if ch == '\n' {
            line += 1;
        }
    }
    if let State::Str { line: start, .. } = state {
        errors.push(error!(MalformedOutput, Some(start); "unterminated string"));
    }
    for (open, at) in brackets {
        let msg = format!("'{}' is never closed", open);
        errors.push(error!(MalformedOutput, Some(at); &msg));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    const GOOD: &str = r#"
from aila.gui import AilaGUI
import time

gui = AilaGUI()
try:
    gui.create_window("Hello (world)")
    print('it\'s fine', {"a": [1, 2]})  # comment with (
    doc = """multi
line ) string"""
    time.sleep(1)
except Exception as e:
    print(e)
"#;

    #[test]
    fn test_good_code_passes() {
        let code = Gate::default().validate(GOOD).unwrap();
        assert!(code.starts_with("from aila.gui"));
    }

    #[test]
    fn test_fences_are_stripped() {
        let text = "```python\nprint('hi')\n```";
        assert_eq!(Gate::default().validate(text).unwrap(), "print('hi')");
    }

    #[test]
    fn test_empty_output() {
        let errors = Gate::default().validate("```\n```").unwrap_err();
        assert!(errors[0].is(ErrorCode::MalformedOutput));
    }

    #[test]
    fn test_denylist() {
        let errors = Gate::default()
            .validate("print(1)\nimport os\nos.system('ls')")
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is(ErrorCode::ForbiddenSubstring));
        assert_eq!(errors[0].to_string(), "L2: forbidden substring: import os");
    }

    #[test]
    fn test_custom_denylist() {
        let mut gate = Gate::new(vec!["time.sleep"]);
        assert!(gate.validate("import os").is_ok());
        gate.extend(vec!["import os", ""]);
        assert_eq!(gate.denylist().len(), 2);
        assert!(gate.validate("import os").is_err());
    }

    #[test]
    fn test_unbalanced_brackets() {
        let errors = check_python("print((1)\nx = [1, 2)\n]");
        let text: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            text,
            [
                "L2: malformed output: ')' closes '[' opened on line 2",
                "L3: malformed output: ']' closes '(' opened on line 1",
            ]
        );
    }

    #[test]
    fn test_unterminated_strings() {
        let errors = check_python("x = 'open\ny = \"\"\"never");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line_number(), Some(1));
        assert_eq!(errors[1].line_number(), Some(2));
    }

    #[test]
    fn test_summary() {
        assert_eq!(Gate::summary(&[error!(MalformedOutput)]), "1 problem found");
        assert_eq!(
            Gate::summary(&[error!(MalformedOutput), error!(ForbiddenSubstring)]),
            "2 problems found"
        );
    }
}
