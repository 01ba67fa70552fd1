use super::{ast::Command, Error, Line};

/// Parse a whole program.
///
/// A bad line never stops the rest of the file from parsing; its
/// error is collected and the line produces no command.
pub fn parse(source: &str) -> (Vec<Command>, Vec<Error>) {
    let mut commands: Vec<Command> = vec![];
    let mut errors: Vec<Error> = vec![];
    for line in lines(source) {
        match line.command() {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(e) => errors.push(e),
        }
    }
    (commands, errors)
}

pub fn lines(source: &str) -> impl Iterator<Item = Line> + '_ {
    source
        .lines()
        .enumerate()
        .map(|(index, s)| Line::new(index + 1, s))
}
