/*!
# `SET <name> <value>`

## Purpose
Store a value in a variable.

## Remarks
A value that reads as an integer is stored as one. A value with a
decimal point that reads as a number is stored as a float. Anything
else is kept as text. Setting an existing variable replaces its value
and its type.

## Example
```text
set x 5
set pi 3.14
set who world
say $x $pi $who
5 3.14 world
```

*/
