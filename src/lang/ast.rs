use super::line::quote;
use super::token::Word;

/// ## A parsed command
///
/// One per non-blank, non-comment source line. The `name` is already
/// folded to lower case; `args` keep their original order and case.
#[derive(Debug, PartialEq, Clone)]
pub struct Command {
    pub name: String,
    pub args: Vec<String>,
    pub line_number: usize,
}

impl Command {
    pub fn new(name: &str, args: Vec<String>, line_number: usize) -> Command {
        Command {
            name: name.to_lowercase(),
            args,
            line_number,
        }
    }

    pub fn word(&self) -> Word {
        Word::from_name(&self.name)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", quote(&self.name))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_spaces() {
        let c = Command::new("SAY", vec!["hello world".into(), "$x".into()], 1);
        assert_eq!(c.to_string(), "say 'hello world' $x");
        assert_eq!(c.word(), Word::Say);
    }
}
