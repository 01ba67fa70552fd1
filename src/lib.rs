//! # Aila
//!
//! A tiny line oriented scripting language for printing, arithmetic on
//! named variables and building one simple window of widgets.
//!
//! Install with [Rust](https://www.rust-lang.org/tools/install) and
//! the command `cargo install aila-lang`.
//!
//! Run a script with `aila hello.aila`. Without a file name you get an
//! interactive prompt where every line runs as soon as you press ENTER.
//! ```text
//! Aila 0.3.0
//! aila> say Hello World
//! Hello World
//! aila> █
//! ```
//!
//! The library half of this crate is the interpreter itself. Embed it
//! by creating a [`mach::Runtime`] over any [`mach::Ui`] and feeding it
//! source with `enter`, then calling `execute` until it stops.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/commands.rs"]
#[allow(non_snake_case)]
pub mod __Commands;

#[path = "doc/errors.rs"]
#[allow(non_snake_case)]
pub mod ___Errors;

pub mod gate;
pub mod lang;
pub mod mach;
pub mod term;
