use aila::lang::ast::Command;
use aila::lang::{lex, parse, ErrorCode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_shell_quoting() {
    assert_eq!(lex(r#"say "a  b" 'c d' e\ f"#).unwrap(), ["say", "a  b", "c d", "e f"]);
    assert_eq!(lex(r#"say it"'s" fine"#).unwrap(), ["say", "it's", "fine"]);
    assert_eq!(lex(r#"say "x\"y" "\n""#).unwrap(), ["say", "x\"y", "\\n"]);
    assert_eq!(lex("say ''").unwrap(), ["say", ""]);
    assert_eq!(lex("   ").unwrap(), Vec::<String>::new());
}

#[test]
fn test_command_names_fold_case() {
    let (commands, errors) = parse("SAY Hi\nWiNdOw Main Menu");
    assert!(errors.is_empty());
    assert_eq!(
        commands,
        [
            Command::new("say", vec!["Hi".into()], 1),
            Command::new(
                "window",
                vec!["Main".into(), "Menu".into()],
                2
            ),
        ]
    );
}

#[test]
fn test_every_bad_line_is_reported() {
    let (commands, errors) = parse("say 'one\nsay two\nsay three\\");
    assert_eq!(commands.len(), 1);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.is(ErrorCode::SyntaxError)));
    let lines: Vec<_> = errors.iter().map(|e| e.line_number()).collect();
    assert_eq!(lines, [Some(1), Some(3)]);
}

#[test]
fn test_long_line_is_kept() {
    let long = "x".repeat(5000);
    let (commands, errors) = parse(&format!("say {}\nsay after", long));
    assert!(errors.is_empty());
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].args, [long]);
}

fn command() -> impl Strategy<Value = Command> {
    (
        "[a-zA-Z_][a-zA-Z0-9_]{0,7}",
        prop::collection::vec("[^\r\n]{0,12}", 0..5),
    )
        .prop_map(|(name, args)| Command::new(&name, args, 1))
}

proptest! {
    #[test]
    fn lexing_never_panics(s in "\\PC*") {
        let _ = lex(&s);
    }

    #[test]
    fn parsing_is_deterministic(s in "[a-z $'\"\\\\#\n]{0,64}") {
        prop_assert_eq!(parse(&s), parse(&s));
    }

    #[test]
    fn formatted_commands_parse_back(c in command()) {
        let (commands, errors) = parse(&c.to_string());
        prop_assert!(errors.is_empty());
        prop_assert_eq!(commands, vec![c]);
    }
}
