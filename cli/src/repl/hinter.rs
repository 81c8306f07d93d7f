/// Suggests the rest of a property name once a key command has a unique match.
pub fn hint_for(line: &str, pos: usize, names: &[String]) -> Option<String> {
    if pos < line.len() {
        return None;
    }

    let trimmed = line.trim_start();
    match trimmed {
        "" => return None,
        "set" => return Some(" <key> <json>".to_string()),
        "set " => return Some("<key> <json>".to_string()),
        _ => {}
    }

    let (command, needle) = trimmed.split_once(' ')?;
    if !matches!(command, "get" | "delete" | "has" | "in" | "cd") || needle.is_empty() {
        return None;
    }

    let mut matches = names.iter().filter(|name| name.starts_with(needle));
    let only = matches.next()?;
    if matches.next().is_some() || only.len() == needle.len() {
        return None;
    }
    Some(only[needle.len()..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_unique_property_suffix() {
        let names = vec!["wheels".to_string(), "name".to_string(), "nick".to_string()];
        assert_eq!(hint_for("get wh", 6, &names), Some("eels".to_string()));
        assert_eq!(hint_for("get n", 5, &names), None);
        assert_eq!(hint_for("get wheels", 10, &names), None);
        assert_eq!(hint_for("set", 3, &names), Some(" <key> <json>".to_string()));
    }
}
