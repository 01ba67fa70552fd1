/*!
# Commands

Command names are not case sensitive. `$name` substitution is applied
to every argument before the command runs.
*/

#[path = "commands/say.rs"]
#[allow(non_snake_case)]
pub mod SAY;

#[path = "commands/set.rs"]
#[allow(non_snake_case)]
pub mod SET;

#[path = "commands/arithmetic.rs"]
#[allow(non_snake_case)]
pub mod ADD_SUB_MUL_DIV;

#[path = "commands/repeat.rs"]
#[allow(non_snake_case)]
pub mod REPEAT;

#[path = "commands/wait.rs"]
#[allow(non_snake_case)]
pub mod WAIT;

#[path = "commands/window.rs"]
#[allow(non_snake_case)]
pub mod WINDOW;

#[path = "commands/widgets.rs"]
#[allow(non_snake_case)]
pub mod LABEL_INPUT_BUTTON;

#[path = "commands/show.rs"]
#[allow(non_snake_case)]
pub mod SHOW;

#[path = "commands/start.rs"]
#[allow(non_snake_case)]
pub mod START;

#[path = "commands/close.rs"]
#[allow(non_snake_case)]
pub mod CLOSE;
