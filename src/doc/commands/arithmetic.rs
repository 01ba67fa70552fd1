/*!
# `ADD|SUB|MUL|DIV <name> <number>`

## Purpose
Update a numeric variable in place.

## Remarks
The variable must already exist and hold a number. Two integers give an
integer result except for `DIV`, which always gives a float. A float on
either side makes the result a float.

Failures leave the variable unchanged: an undefined name, a value that
is not a number, text in the variable, division by zero or integer
overflow.

## Example
```text
set n 7
add n 3
div n 4
say $n
2.5
```

*/
