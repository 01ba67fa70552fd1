/*!
# `SHOW [<text>...]`

## Purpose
Display a message box.

## Example
```text
show Saved!
```

*/
