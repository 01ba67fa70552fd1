use crate::error;
use crate::lang::Error;
use std::rc::Rc;

/// ## Variable values
///
/// A literal containing `.` is a float, anything else that parses is an
/// integer. Strings are whatever did not parse.
#[derive(Debug, PartialEq, Clone)]
pub enum Val {
    Integer(i64),
    Float(f64),
    String(Rc<str>),
}

impl Val {
    /// Coerce a literal to a number, falling back to a string.
    pub fn from_literal(s: &str) -> Val {
        match Val::number(s) {
            Ok(val) => val,
            Err(_) => Val::String(s.into()),
        }
    }

    /// Parse a literal which must be a number.
    pub fn number(s: &str) -> Result<Val, Error> {
        if s.contains('.') {
            return match s.parse::<f64>() {
                Ok(n) if !n.is_nan() => Ok(Val::Float(n)),
                _ => Err(error!(NumericParse; s)),
            };
        }
        if s.chars().any(|c| !(c.is_ascii_digit() || c == '-' || c == '+')) {
            return Err(error!(NumericParse; s));
        }
        match s.parse::<i64>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(_) => match s.parse::<f64>() {
                Ok(n) => Ok(Val::Float(n)),
                Err(_) => Err(error!(NumericParse; s)),
            },
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "integer",
            Val::Float(_) => "float",
            Val::String(_) => "string",
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
