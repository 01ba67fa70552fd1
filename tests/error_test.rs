mod common;
use aila::mach::{Event, Runtime, CYCLES};
use common::*;

#[test]
fn test_unknown_command_continues() {
    let mut r = Runtime::new();
    r.enter("say one\njump now\nsay two");
    assert_eq!(exec(&mut r), "one\nL2: unknown command: jump\ntwo\n");
}

#[test]
fn test_syntax_errors_before_execution() {
    let mut r = Runtime::new();
    r.enter("say one\nsay \"two\nsay three");
    assert_eq!(
        exec(&mut r),
        "L2: syntax error (4..8): unterminated quote: say \"two\none\nthree\n"
    );
}

#[test]
fn test_trailing_backslash() {
    let mut r = Runtime::new();
    r.enter("say oops\\");
    assert_eq!(
        exec(&mut r),
        "L1: syntax error (8..9): no character after escape: say oops\\\n"
    );
}

#[test]
fn test_clear_forgets_pending_work() {
    let mut r = Runtime::new();
    r.enter("set x 1\nsay a\nsay b");
    assert_eq!(r.execute(CYCLES), Event::Print("a".to_string()));
    r.clear();
    assert!(r.vars().is_empty());
    assert_eq!(r.execute(CYCLES), Event::Stopped);
}
