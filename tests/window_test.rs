mod common;
use aila::mach::{Call, Event, Recorder, Runtime, Widget, CYCLES};
use common::*;
use pretty_assertions::assert_eq;

fn calls(r: &Runtime) -> Vec<Call> {
    r.session().ui().calls().to_vec()
}

#[test]
fn test_widgets_open_default_window_once() {
    let mut r = Runtime::new();
    r.enter("label Name\ninput nobody\nbutton\nbutton Save it");
    assert_eq!(exec(&mut r), "");
    assert_eq!(
        calls(&r),
        [
            Call::Window("Aila".to_string()),
            Call::Label("Name".to_string()),
            Call::Input("nobody".to_string()),
            Call::Button("Button".to_string()),
            Call::Button("Save it".to_string()),
        ]
    );
    assert_eq!(
        r.session().widgets(),
        [
            Widget::Label("Name".to_string()),
            Widget::Input(0),
            Widget::Button("Button".to_string()),
            Widget::Button("Save it".to_string()),
        ]
    );
}

#[test]
fn test_window_title() {
    let mut r = Runtime::new();
    r.enter("set app Notes\nwindow My $app\nwindow\nlabel x");
    exec(&mut r);
    assert_eq!(
        calls(&r),
        [
            Call::Window("My Notes".to_string()),
            Call::Window("Aila".to_string()),
            Call::Label("x".to_string()),
        ]
    );
}

#[test]
fn test_close_then_reopen() {
    let mut r = Runtime::new();
    r.enter("close\nwindow First\nlabel a\nclose\nclose\nshow hello");
    exec(&mut r);
    assert_eq!(
        calls(&r),
        [
            Call::Window("First".to_string()),
            Call::Label("a".to_string()),
            Call::Close,
            Call::Window("Aila".to_string()),
            Call::Show("hello".to_string()),
        ]
    );
    assert!(r.session().is_open());
}

#[test]
fn test_start_ends_the_program() {
    let mut r = Runtime::new();
    r.enter("say before\nstart\nsay after");
    assert_eq!(exec(&mut r), "before\n");
    assert!(r.is_halted());
    assert_eq!(
        calls(&r),
        [Call::Window("Aila".to_string()), Call::Run]
    );
    assert!(!r.enter("say again"));
    assert_eq!(r.execute(CYCLES), Event::Halted);
}

#[test]
fn test_no_display_stops_the_program() {
    let mut r = Runtime::with_ui(Recorder::unavailable());
    r.enter("say one\nbutton Go\nsay two");
    assert_eq!(
        exec(&mut r),
        "one\nL2: display unavailable: no display attached\n"
    );
    assert!(r.is_halted());
}

#[test]
fn test_console_commands_need_no_display() {
    let mut r = Runtime::with_ui(Recorder::unavailable());
    r.enter("set n 1\nadd n 1\nsay $n\nclose");
    assert_eq!(exec(&mut r), "2\n");
}
