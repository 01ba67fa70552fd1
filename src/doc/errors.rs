/*!
# Errors

Errors are printed as `L<line>: <kind>` followed by details. Only a
missing or failing display stops a program. Every other error skips the
one command and execution continues.

| Kind | Cause |
|------|-------|
| syntax error | Unterminated quote or a trailing backslash. Reported before anything runs. |
| wrong number of arguments | A command was given too few or too many arguments. |
| undefined variable | Arithmetic on a name that was never `SET`. |
| unknown command | The first word is not a command. |
| not a number | The right hand side of arithmetic is not numeric. |
| type mismatch | Arithmetic on a variable holding text. |
| division by zero | `DIV` by 0. |
| overflow | Integer arithmetic out of range. |
| display unavailable | A widget command ran with no display. Stops the program. |
| ui error | The toolkit failed. Stops the program. |
| forbidden substring | `aila --gate` found a denylisted string. |
| malformed output | `aila --gate` found broken Python. |

*/
