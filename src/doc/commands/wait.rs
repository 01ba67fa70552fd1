/*!
# `WAIT <seconds>`

## Purpose
Pause the program.

## Remarks
Fractions are allowed. Negative or unreadable durations do not pause.

## Example
```text
say ready
wait 1.5
say go
```

*/
