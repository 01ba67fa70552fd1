/*!
# `SAY [<text>...]`

## Purpose
Print a line on the console.

## Remarks
Arguments are joined with single spaces. `SAY` alone prints an empty line.

## Example
```text
say "Hello,   world" again
Hello,   world again
```

*/
