//! SQL literal and identifier rendering.
//!
//! The leaf layer of the template engine: single scalars become SQL
//! literals, names become backtick-quoted identifiers, and containers become
//! comma-joined literal or assignment lists.
//!
//! **Escaping gap**: text literals are wrapped in single quotes but embedded
//! quotes and backslashes inside the text are passed through untouched.
//! Callers feeding untrusted strings must sanitize them first.

use crate::error::{TplError, TplResult};
use crate::value::{Entry, Value};

/// Render a single scalar as a SQL literal.
///
/// - `Null` → `NULL`
/// - `Bool` → `1` / `0`
/// - `Int` / `Float` → decimal text, unquoted
/// - `Text` → the value wrapped in single quotes, content untouched (the
///   escaping gap described in the module docs)
///
/// `Array` and the skip marker have no scalar form and are rejected.
pub fn escape_value(value: &Value) -> TplResult<String> {
    let mut out = String::new();
    write_value(value, &mut out)?;
    Ok(out)
}

pub(crate) fn write_value(value: &Value, out: &mut String) -> TplResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(true) => out.push('1'),
        Value::Bool(false) => out.push('0'),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::Text(s) => {
            out.push('\'');
            out.push_str(s);
            out.push('\'');
        }
        Value::Array(_) | Value::Skip => {
            return Err(TplError::unsupported(format!(
                "cannot render {} as a scalar literal",
                value.kind()
            )));
        }
    }
    Ok(())
}

/// Render a name as a backtick-quoted identifier.
///
/// No validation or escaping is performed on the name itself.
pub fn escape_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    write_identifier(name, &mut out);
    out
}

pub(crate) fn write_identifier(name: &str, out: &mut String) {
    out.push('`');
    out.push_str(name);
    out.push('`');
}

/// Render a container as a comma-joined fragment list.
///
/// Positional entries emit their value as a literal; named entries emit
/// `` `name` = literal ``. Mixed entries are handled per-entry. An empty
/// container renders as the empty string.
pub fn format_array(entries: &[Entry]) -> TplResult<String> {
    let mut out = String::new();
    write_array(entries, &mut out)?;
    Ok(out)
}

pub(crate) fn write_array(entries: &[Entry], out: &mut String) -> TplResult<()> {
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match entry {
            Entry::Item(v) => write_value(v, out)?,
            Entry::Field(name, v) => {
                write_identifier(name, out);
                out.push_str(" = ");
                write_value(v, out)?;
            }
        }
    }
    Ok(())
}
