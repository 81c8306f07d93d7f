use super::Value;
use std::collections::HashSet;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, &mut HashSet::new())
    }
}

/// `open` holds the objects currently being written; reaching one again prints
/// `[Circular]`.
fn write_value(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    open: &mut HashSet<usize>,
) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Number(n) => {
            if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
                write!(f, "{}", *n as i64)
            } else {
                write!(f, "{n}")
            }
        }
        Value::String(s) => write!(f, "{s}"),
        Value::Function(_) => write!(f, "function() {{ [native code] }}"),
        Value::Object(obj) => {
            let addr = obj.addr();
            if !open.insert(addr) {
                return write!(f, "[Circular]");
            }
            let obj = obj.borrow();
            if obj.properties.is_empty() {
                write!(f, "{{}}")?;
            } else {
                write!(f, "{{ ")?;
                for (i, (key, value)) in obj.properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: ")?;
                    match value {
                        Value::String(s) => write!(f, "{s:?}")?,
                        _ => write_value(value, f, open)?,
                    }
                }
                write!(f, " }}")?;
            }
            open.remove(&addr);
            Ok(())
        }
        Value::Array(items) => {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_value(item, f, open)?;
            }
            write!(f, "]")
        }
    }
}
