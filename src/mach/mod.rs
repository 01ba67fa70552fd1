/*!
## Rust Machine Module

This Rust module is the interpreter for Aila: variable memory,
substitution, the UI session and the command loop.

*/

/// Title of the window created when a widget needs one.
pub const DEFAULT_TITLE: &str = "Aila";
/// Text of a button given no text.
pub const DEFAULT_BUTTON: &str = "Button";

mod operation;
mod runtime;
mod subst;
mod ui;
mod val;
mod var;

pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::CYCLES;
pub use subst::substitute;
pub use subst::substitute_str;
pub use ui::{Call, InputId, Recorder, Session, Ui, Widget};
pub use val::Val;
pub use var::Var;
