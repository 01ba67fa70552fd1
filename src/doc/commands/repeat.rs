/*!
# `REPEAT <count> [<text>...]`

## Purpose
Print the same line several times.

## Remarks
A count which is not an integer counts as 1. Negative counts print
nothing. Lines are produced one at a time so very large counts can be
interrupted.

## Example
```text
repeat 2 la la
la la
la la
```

*/
