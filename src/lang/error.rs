use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    /// Errors which stop the run instead of skipping one command.
    pub fn is_fatal(&self) -> bool {
        self.is(ErrorCode::DisplayUnavailable) || self.is(ErrorCode::UiError)
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: line,
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    SyntaxError = 1,
    ArityError = 2,
    UndefinedVariable = 3,
    UnknownCommand = 4,
    NumericParse = 5,
    TypeMismatch = 6,
    DivisionByZero = 7,
    Overflow = 8,
    DisplayUnavailable = 20,
    UiError = 21,
    ForbiddenSubstring = 30,
    MalformedOutput = 31,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "syntax error",
            2 => "wrong number of arguments",
            3 => "undefined variable",
            4 => "unknown command",
            5 => "not a number",
            6 => "type mismatch",
            7 => "division by zero",
            8 => "overflow",
            20 => "display unavailable",
            21 => "ui error",
            30 => "forbidden substring",
            31 => "malformed output",
            51 => "internal error",
            53 => "file not found",
            _ => "",
        };
        if let Some(line_number) = self.line_number {
            write!(f, "L{}: ", line_number)?;
        }
        if code_str.is_empty() {
            write!(f, "error {}", self.code)?;
        } else {
            write!(f, "{}", code_str)?;
        }
        if (0..0) != self.column {
            write!(f, " ({}..{})", self.column.start, self.column.end)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_line_and_message() {
        let e = error!(UnknownCommand, Some(3); "jump");
        assert_eq!(e.to_string(), "L3: unknown command: jump");
    }

    #[test]
    fn test_display_with_column() {
        let e = error!(SyntaxError, Some(12), ..&(4..9); "unterminated quote");
        assert_eq!(e.to_string(), "L12: syntax error (4..9): unterminated quote");
    }

    #[test]
    fn test_display_bare() {
        assert_eq!(error!(DivisionByZero).to_string(), "division by zero");
        assert!(error!(DisplayUnavailable).is_fatal());
        assert!(!error!(TypeMismatch).is_fatal());
    }
}
