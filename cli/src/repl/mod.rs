mod completer;
mod helper;
mod highlighter;
mod hinter;

use std::cell::RefCell;
use std::rc::Rc;

use owo_colors::OwoColorize;
use protochain::{Loader, ObjectRef, Value, chain_of, enumerable, keywords};
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::format_value;

/// Names offered by the completer, refreshed after every command.
pub type SharedNames = Rc<RefCell<Vec<String>>>;

struct Session {
    root: ObjectRef,
    /// Objects entered with `cd`, innermost last.
    path: Vec<(String, ObjectRef)>,
}

impl Session {
    fn new(root: ObjectRef) -> Self {
        Self {
            root,
            path: Vec::new(),
        }
    }

    fn current(&self) -> &ObjectRef {
        self.path.last().map_or(&self.root, |(_, obj)| obj)
    }

    fn prompt(&self) -> String {
        if self.path.is_empty() {
            return "> ".to_string();
        }
        let names: Vec<&str> = self.path.iter().map(|(name, _)| name.as_str()).collect();
        format!("{}> ", names.join("."))
    }
}

pub fn run(root: Option<ObjectRef>) -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let names: SharedNames = Rc::default();
    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper::new(Rc::clone(&names))));

    let mut session = Session::new(root.unwrap_or_default());

    println!(
        "{} {}",
        "protochain".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        *names.borrow_mut() = session.current().capabilities();
        match rl.readline(&session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);
                if !handle_command(trimmed, &mut session) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => {
                eprintln!("{} {err}", "repl error:".red().bold());
                break;
            }
        }
    }

    Ok(())
}

/// Runs one command line. Returns `false` when the session should end.
fn handle_command(line: &str, session: &mut Session) -> bool {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let obj = session.current().clone();

    match command {
        ".exit" | "exit" => return false,
        ".help" => print_help(),
        ".load" => match Loader::new().path(rest).load_object() {
            Ok(loaded) => {
                *session = Session::new(loaded);
                println!("{}", "document loaded".green());
            }
            Err(err) => eprintln!("{:?}", miette::Report::new(err)),
        },
        "get" => match obj.get(rest) {
            Some(value) => println!("{}", format_value(&value)),
            None => println!("{}", "undefined".bright_black()),
        },
        "set" => match rest.split_once(' ') {
            Some((key, raw)) => {
                obj.set(key, parse_value(raw.trim()));
                println!("{}", "ok".green());
            }
            None => eprintln!("{}", "usage: set <key> <json>".red()),
        },
        "delete" => match keywords::delete(&obj, rest) {
            Some(value) => println!("{} {}", "deleted".green(), format_value(&value)),
            None => println!("{}", "no own property".bright_black()),
        },
        "has" => println!("{}", obj.has(rest).yellow()),
        "in" => println!("{}", keywords::contains(&obj, rest).yellow()),
        "keys" => println!("{}", obj.own_keys().join(", ")),
        "each" => match parse_depth(rest) {
            Ok(depth) => {
                for (key, value) in enumerable::each(&obj, depth) {
                    println!("{} {}", format!("{key}:").cyan(), format_value(&value));
                }
            }
            Err(message) => eprintln!("{}", message.red()),
        },
        "chain" => {
            for (level, node) in chain_of(&obj, None).iter().enumerate() {
                println!(
                    "{} {}",
                    format!("[{level}]").bright_black(),
                    Value::from(node)
                );
            }
        }
        "cd" => change_object(rest, session),
        _ => eprintln!(
            "{} unknown command '{}', type .help",
            "error:".red().bold(),
            command.yellow()
        ),
    }
    true
}

fn change_object(target: &str, session: &mut Session) {
    if target == ".." {
        session.path.pop();
        return;
    }
    if target == "/" || target.is_empty() {
        session.path.clear();
        return;
    }
    match session.current().get(target) {
        Some(Value::Object(child)) => session.path.push((target.to_string(), child)),
        Some(other) => eprintln!(
            "{} '{}' is a {}, not an object",
            "error:".red().bold(),
            target,
            other.type_name()
        ),
        None => eprintln!("{} '{}' is undefined", "error:".red().bold(), target),
    }
}

/// Parses a value typed at the prompt as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => protochain::runtime::json::from_json_value(&json),
        Err(_) => Value::from(raw),
    }
}

fn parse_depth(raw: &str) -> Result<Option<usize>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<usize>()
        .map(Some)
        .map_err(|_| format!("depth must be a non-negative integer, got '{raw}'"))
}

fn print_help() {
    let lines = [
        "get <key>            resolve a key through the chain",
        "set <key> <json>     set an own property",
        "delete <key>         delete an own property",
        "has <key>            own-property test",
        "in <key>             own or immediate-prototype test",
        "keys                 list own keys",
        "each [depth]         list pairs along the chain",
        "chain                list the prototype chain",
        "cd <key> | .. | /    enter a nested object",
        ".load <file.json>    replace the session with a document",
        ".help                show commands",
        ".exit                exit REPL",
    ];
    for line in lines {
        println!("{}", line.bright_blue());
    }
}

pub const COMMANDS: [&str; 13] = [
    "get", "set", "delete", "has", "in", "keys", "each", "chain", "cd", ".load", ".help",
    ".exit", "exit",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_prefers_json() {
        assert_eq!(parse_value("42"), Value::Number(42.0));
        assert_eq!(parse_value("\"quoted\""), Value::from("quoted"));
        assert_eq!(parse_value("bare words"), Value::from("bare words"));
    }

    #[test]
    fn parse_depth_accepts_empty_and_numbers() {
        assert_eq!(parse_depth(""), Ok(None));
        assert_eq!(parse_depth("2"), Ok(Some(2)));
        assert!(parse_depth("-1").is_err());
    }

    #[test]
    fn cd_enters_and_leaves_nested_objects() {
        let root = protochain::from_json(r#"{"engine": {"cylinders": 4}, "name": "Car"}"#)
            .expect("valid JSON should load");
        let mut session = Session::new(root);

        assert!(handle_command("cd engine", &mut session));
        assert_eq!(session.prompt(), "engine> ");
        assert_eq!(session.current().get("cylinders"), Some(Value::Number(4.0)));

        assert!(handle_command("cd name", &mut session));
        assert_eq!(session.path.len(), 1);

        assert!(handle_command("cd ..", &mut session));
        assert_eq!(session.prompt(), "> ");
        assert!(!handle_command(".exit", &mut session));
    }

    #[test]
    fn set_and_delete_through_commands() {
        let mut session = Session::new(ObjectRef::new());
        handle_command("set wheels 4", &mut session);
        assert_eq!(session.current().get("wheels"), Some(Value::Number(4.0)));
        handle_command("delete wheels", &mut session);
        assert!(!session.current().has("wheels"));
    }
}
