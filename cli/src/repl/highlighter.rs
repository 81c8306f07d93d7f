use std::borrow::Cow;

use owo_colors::OwoColorize;

use super::COMMANDS;

pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    if !COMMANDS.contains(&command) {
        return Cow::Borrowed(line);
    }
    if line.len() == command.len() {
        return Cow::Owned(command.blue().bold().to_string());
    }
    Cow::Owned(format!("{} {rest}", command.blue().bold()))
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    match prompt.strip_suffix("> ") {
        Some("") => Cow::Owned(format!("{} ", ">".bright_green().bold())),
        Some(path) => Cow::Owned(format!(
            "{}{} ",
            path.cyan(),
            ">".bright_green().bold()
        )),
        None => Cow::Borrowed(prompt),
    }
}

pub fn highlight_hint(hint: &str) -> Cow<'_, str> {
    Cow::Owned(hint.bright_black().to_string())
}
