//! Placeholder specifier dispatch.
//!
//! A placeholder is `?` followed by one specifier character. Four characters
//! select typed rendering (`d` integer, `f` float, `a` array, `#`
//! identifier); every other character selects the generic literal path and
//! is otherwise ignored.

use crate::error::{TplError, TplResult};
use crate::escape::{write_array, write_identifier, write_value};
use crate::value::Value;

/// Render one bound argument according to its specifier, appending to `out`.
///
/// | specifier | behavior |
/// |---|---|
/// | `d` | NULL, or the argument cast to an integer (truncation toward zero) |
/// | `f` | NULL, or the argument cast to a float |
/// | `a` | container rendered as a literal/assignment list |
/// | `#` | identifier name(s), backtick-quoted and comma-joined |
/// | other | the raw argument as a scalar literal |
///
/// Incompatible specifier/argument pairs (a container under `d`, a number
/// under `#`, ...) return [`TplError::Unsupported`].
pub fn process_specifier(specifier: char, arg: &Value, out: &mut String) -> TplResult<()> {
    match specifier {
        'd' => match arg {
            Value::Null => out.push_str("NULL"),
            _ => out.push_str(&int_cast(specifier, arg)?.to_string()),
        },
        'f' => match arg {
            Value::Null => out.push_str("NULL"),
            _ => out.push_str(&float_cast(specifier, arg)?.to_string()),
        },
        'a' => match arg {
            Value::Array(entries) => write_array(entries, out)?,
            _ => {
                return Err(TplError::unsupported(format!(
                    "specifier 'a' expects an array, got {}",
                    arg.kind()
                )));
            }
        },
        '#' => match arg {
            Value::Array(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    match entry.value() {
                        Value::Text(name) => write_identifier(name, out),
                        other => {
                            return Err(TplError::unsupported(format!(
                                "specifier '#' expects identifier names, got {}",
                                other.kind()
                            )));
                        }
                    }
                }
            }
            Value::Text(name) => write_identifier(name, out),
            _ => {
                return Err(TplError::unsupported(format!(
                    "specifier '#' expects an identifier or an array of identifiers, got {}",
                    arg.kind()
                )));
            }
        },
        _ => write_value(arg, out)?,
    }
    Ok(())
}

fn int_cast(specifier: char, value: &Value) -> TplResult<i64> {
    Ok(match value {
        Value::Null => 0,
        Value::Bool(b) => *b as i64,
        Value::Int(i) => *i,
        Value::Float(f) => *f as i64,
        Value::Text(s) => numeric_prefix(s) as i64,
        Value::Array(_) | Value::Skip => {
            return Err(TplError::unsupported(format!(
                "specifier '{specifier}' expects a scalar, got {}",
                value.kind()
            )));
        }
    })
}

fn float_cast(specifier: char, value: &Value) -> TplResult<f64> {
    Ok(match value {
        Value::Null => 0.0,
        Value::Bool(b) => *b as u8 as f64,
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Text(s) => numeric_prefix(s),
        Value::Array(_) | Value::Skip => {
            return Err(TplError::unsupported(format!(
                "specifier '{specifier}' expects a scalar, got {}",
                value.kind()
            )));
        }
    })
}

/// Parse the longest leading decimal prefix of `s`: optional sign, digits,
/// optional fraction, optional exponent. Text with no numeric prefix parses
/// as 0, so `"3.9"` casts to 3 and `"abc"` to 0.
fn numeric_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let mut seen_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        seen_digit = true;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac = frac_start;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
            seen_digit = true;
        }
        if frac > frac_start {
            end = frac;
        } else if seen_digit {
            // "3." still parses as 3
            end = frac_start;
        }
    }

    if !seen_digit {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        let digits_start = exp;
        while exp < bytes.len() && bytes[exp].is_ascii_digit() {
            exp += 1;
        }
        if exp > digits_start {
            end = exp;
        }
    }

    t[..end].parse().unwrap_or(0.0)
}
