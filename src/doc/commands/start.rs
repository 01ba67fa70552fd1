/*!
# `START`

## Purpose
Hand control to the window until it is closed.

## Remarks
`START` ends the program. Commands after it never run and the
interactive prompt exits once the window returns.

*/
