use rustyline::completion::Pair;

use super::COMMANDS;

/// Completes the command word, then property names for its argument.
pub fn complete_line(line: &str, pos: usize, names: &[String]) -> (usize, Vec<Pair>) {
    let safe_pos = floor_char_boundary(line, pos.min(line.len()));
    let prefix = &line[..safe_pos];

    match prefix.split_once(' ') {
        None => {
            let candidates = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|cmd| cmd.to_string());
            (0, pairs(candidates))
        }
        Some((command, _)) if takes_key(command) => {
            let start = prefix.rfind(' ').map_or(0, |idx| idx + 1);
            let needle = &prefix[start..];
            let candidates = names
                .iter()
                .filter(|name| name.starts_with(needle))
                .cloned();
            (start, pairs(candidates))
        }
        Some(_) => (pos, Vec::new()),
    }
}

fn takes_key(command: &str) -> bool {
    matches!(command, "get" | "set" | "delete" | "has" | "in" | "cd")
}

fn pairs(values: impl Iterator<Item = String>) -> Vec<Pair> {
    values
        .map(|v| Pair {
            display: v.clone(),
            replacement: v,
        })
        .collect()
}

fn floor_char_boundary(line: &str, mut pos: usize) -> usize {
    while !line.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(result: (usize, Vec<Pair>)) -> (usize, Vec<String>) {
        (result.0, result.1.into_iter().map(|p| p.replacement).collect())
    }

    #[test]
    fn completes_commands() {
        let names = Vec::new();
        assert_eq!(
            replacements(complete_line("ch", 2, &names)),
            (0, vec!["chain".to_string()])
        );
    }

    #[test]
    fn completes_property_names_after_key_commands() {
        let names = vec!["name".to_string(), "wheels".to_string(), "nick".to_string()];
        assert_eq!(
            replacements(complete_line("get n", 5, &names)),
            (4, vec!["name".to_string(), "nick".to_string()])
        );
        assert_eq!(replacements(complete_line("keys x", 6, &names)).1.len(), 0);
    }
}
