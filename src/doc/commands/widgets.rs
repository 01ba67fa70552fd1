/*!
# `LABEL [<text>...]`, `INPUT [<default>...]`, `BUTTON [<text>...]`

## Purpose
Add a widget to the window.

## Remarks
Widgets are placed one above another in the order they are created.
`INPUT` creates a text field holding the default. `BUTTON` with no text
is labelled `Button`. Buttons do nothing when pressed.

## Example
```text
label Your name
input nobody
button OK
```

*/
