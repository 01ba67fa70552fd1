/*!
# `WINDOW [<title>...]`

## Purpose
Open the window, or change its title.

## Remarks
There is only ever one window. Widget commands open it with the title
`Aila` when no window is open. An empty title also means `Aila`.

## Example
```text
window Settings
```

*/
