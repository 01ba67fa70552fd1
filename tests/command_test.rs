mod common;
use aila::mach::{Event, Runtime, CYCLES};
use common::*;
use std::time::Duration;

#[test]
fn test_say_joins_with_single_spaces() {
    let mut r = Runtime::new();
    r.enter("say   a    b\nsay\nsay 'a    b'");
    assert_eq!(exec(&mut r), "a b\n\na    b\n");
}

#[test]
fn test_comments_and_blank_lines() {
    let mut r = Runtime::new();
    r.enter("# greeting\n\n   # indented\nsay hi\n");
    assert_eq!(exec(&mut r), "hi\n");
}

#[test]
fn test_repeat() {
    let mut r = Runtime::new();
    r.enter("repeat 3 hip hip\nrepeat 0 never\nrepeat -2 never\nrepeat x once\nrepeat 2");
    assert_eq!(exec(&mut r), "hip hip\nhip hip\nhip hip\nonce\n\n\n");
}

#[test]
fn test_huge_repeat_count_saturates() {
    let mut r = Runtime::new();
    r.enter("repeat 99999999999999999999 hi\nsay end");
    for _ in 0..5 {
        assert_eq!(r.execute(CYCLES), Event::Print("hi".to_string()));
    }
    r.halt();
    let mut r = Runtime::new();
    r.enter("repeat -99999999999999999999 hi\nsay end");
    assert_eq!(exec(&mut r), "end\n");
}

#[test]
fn test_long_say_line() {
    let long = "x".repeat(5000);
    let mut r = Runtime::new();
    r.enter(&format!("say {}\nsay after", long));
    assert_eq!(exec(&mut r), format!("{}\nafter\n", long));
}

#[test]
fn test_repeat_needs_a_count() {
    let mut r = Runtime::new();
    r.enter("repeat");
    assert_eq!(
        exec(&mut r),
        "L1: wrong number of arguments: repeat takes at least 1, got 0\n"
    );
}

#[test]
fn test_wait_events() {
    let mut r = Runtime::new();
    r.enter("wait 1.5\nwait -1\nwait soon\nwait\nwait 1 2");
    assert_eq!(r.execute(CYCLES), Event::Wait(Duration::from_millis(1500)));
    assert_eq!(r.execute(CYCLES), Event::Wait(Duration::from_secs(0)));
    assert_eq!(r.execute(CYCLES), Event::Wait(Duration::from_secs(0)));
    assert_eq!(
        exec(&mut r),
        "L4: wrong number of arguments: wait takes 1, got 0\n\
         L5: wrong number of arguments: wait takes 1, got 2\n"
    );
}

#[test]
fn test_wait_with_variable() {
    let mut r = Runtime::new();
    r.enter("set t 0.25\nwait $t");
    assert_eq!(r.execute(CYCLES), Event::Wait(Duration::from_millis(250)));
}

#[test]
fn test_commands_run_in_order() {
    let mut r = Runtime::new();
    r.enter("say 1\nwait 0\nsay 2\nrepeat 2 3\nsay 4");
    assert_eq!(exec(&mut r), "1\n[wait 0ns]\n2\n3\n3\n4\n");
}

#[test]
fn test_enter_appends_while_running() {
    let mut r = Runtime::new();
    r.enter("say a\nsay b");
    assert_eq!(r.execute(CYCLES), Event::Print("a".to_string()));
    r.enter("say c");
    assert_eq!(exec(&mut r), "b\nc\n");
}
