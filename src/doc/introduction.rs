/*!
# Introductory Tutorial for Aila

Open a terminal and run `aila` with no arguments. You should see the
version followed by a prompt. Type CTRL-D to exit.
<pre><code>&nbsp;  Aila 0.3.0
&nbsp;  aila> █
</code></pre>

Stop a running program with CTRL-C.

Every line is one command. The first word names the command and the
rest are its arguments, split on whitespace. Let's print something.
Lines you type are marked with a "`>`".

<pre><code>&nbsp;> say Hello World
&nbsp;  Hello World
</code></pre>

Arguments are split the way a Unix shell splits them. Quotes keep
spaces together and a backslash escapes the next character.

<pre><code>&nbsp;> say "two   spaces"   kept
&nbsp;  two   spaces kept
</code></pre>

Variables are created with `SET` and used by putting a `$` in front of
the name anywhere in an argument.

<pre><code>&nbsp;> set name Ada
&nbsp;> say Hello $name!
&nbsp;  Hello Ada!
&nbsp;> set n 10
&nbsp;> add n 5
&nbsp;> say $n
&nbsp;  15
</code></pre>

A name that was never set is left alone, so `say $nothing` prints
`$nothing`. Substitution happens once; a value containing `$` is not
substituted again.

Put commands in a file to make a program. Lines starting with `#` are
comments and blank lines are ignored.

```text
# hello.aila
set count 3
repeat $count hip hip
say hooray
wait 0.5
window Greeter
label What is your name?
input nobody
button OK
start
```

Run it with `aila hello.aila`. The widget commands draw one window; the
`START` command hands control to it and ends the program. Use
`aila --headless hello.aila` on a machine with no display to run the
script with widgets recorded instead of drawn.

When a command fails, the error names the line and the program carries
on with the next command.

<pre><code>&nbsp;> div n 0
&nbsp;  L1: division by zero
</code></pre>

*/
