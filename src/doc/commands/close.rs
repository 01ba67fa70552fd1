/*!
# `CLOSE`

## Purpose
Close the window.

## Remarks
Does nothing when no window is open. The next widget command opens a
fresh window with the default title.

*/
