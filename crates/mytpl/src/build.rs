//! Template scanning and query assembly.
//!
//! [`build_query`] is the entry point: a single left-to-right scan over the
//! template that substitutes `?X` placeholders and includes or drops
//! `{ ... }` conditional blocks. Block contents are rendered by the same
//! placeholder rules but bind their arguments back-to-front from the tail of
//! the argument list, independent of the top-level cursor.

use crate::error::{TplError, TplResult};
use crate::specifier::process_specifier;
use crate::value::Value;

// Out-of-range placeholder positions bind NULL.
static NULL: Value = Value::Null;

/// Build a fully-substituted SQL string from a template and positional
/// arguments.
///
/// Top-level placeholders consume arguments left-to-right starting at index
/// 0; a placeholder past the end of the list binds `NULL`. A `{ ... }`
/// fragment is dropped entirely when the **last** argument is the
/// [`skip()`](crate::skip) marker, otherwise its placeholders bind from the
/// tail of the same argument list, right-to-left.
///
/// A generic `?` consumes the character after it as its specifier; when that
/// character is a space, one space is re-appended so `? ` substitutes in
/// place. Text arguments are quoted but not content-escaped (see
/// [`escape_value`](crate::escape_value)).
///
/// Fails with a format error when a `?` ends the template or a `{` has no
/// matching `}`; format errors produce no partial output.
///
/// ```
/// use mytpl::{build_query, Value};
///
/// let sql = build_query(
///     "SELECT * FROM users WHERE name = ? AND block = ?d",
///     &[Value::from("Jack"), Value::from(true)],
/// )?;
/// assert_eq!(sql, "SELECT * FROM users WHERE name = 'Jack' AND block = 1");
/// # Ok::<(), mytpl::TplError>(())
/// ```
pub fn build_query(template: &str, args: &[Value]) -> TplResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut top_index = 0usize;
    let mut i = 0;

    while i < template.len() {
        let rest = &template[i..];
        match rest.find(['{', '?']) {
            None => {
                out.push_str(rest);
                break;
            }
            Some(0) => {}
            Some(run) => {
                out.push_str(&rest[..run]);
                i += run;
                continue;
            }
        }

        if template.as_bytes()[i] == b'{' {
            let close = match template[i..].find('}') {
                Some(off) => i + off,
                None => return Err(TplError::UnmatchedBrace(i)),
            };
            // The skip test is global: only the final argument is examined.
            if !matches!(args.last(), Some(Value::Skip)) {
                process_conditional_block(&template[i + 1..close], i + 1, args, &mut out)?;
            }
            i = close + 1;
        } else {
            let specifier = match template[i + 1..].chars().next() {
                Some(c) => c,
                None => return Err(TplError::MissingSpecifier(i)),
            };
            let arg = args.get(top_index).unwrap_or(&NULL);
            top_index += 1;
            process_specifier(specifier, arg, &mut out)?;
            if specifier == ' ' {
                out.push(' ');
            }
            i += 1 + specifier.len_utf8();
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(target: "mytpl.sql", arg_count = args.len(), sql = %out, "built query");

    Ok(out)
}

/// Render one conditional block body against the tail of the argument list.
///
/// `base` is the block's byte offset in the full template, so format errors
/// report absolute positions. The block index starts at `args.len() - 1` and
/// decrements per placeholder; underflow binds NULL. Braces have no meaning
/// here and are copied verbatim, and the top level's extra-space rule does
/// not apply.
pub(crate) fn process_conditional_block(
    block: &str,
    base: usize,
    args: &[Value],
    out: &mut String,
) -> TplResult<()> {
    let mut arg_index = args.len() as isize - 1;
    let mut i = 0;

    while i < block.len() {
        let rest = &block[i..];
        match rest.find('?') {
            None => {
                out.push_str(rest);
                break;
            }
            Some(0) => {}
            Some(run) => {
                out.push_str(&rest[..run]);
                i += run;
                continue;
            }
        }

        let specifier = match block[i + 1..].chars().next() {
            Some(c) => c,
            None => return Err(TplError::MissingSpecifier(base + i)),
        };
        let arg = if arg_index >= 0 {
            &args[arg_index as usize]
        } else {
            &NULL
        };
        arg_index -= 1;
        process_specifier(specifier, arg, out)?;
        i += 1 + specifier.len_utf8();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{skip, Entry};

    #[test]
    fn plain_text_passes_through() {
        let sql = build_query("SELECT name FROM users", &[]).unwrap();
        assert_eq!(sql, "SELECT name FROM users");
    }

    #[test]
    fn typed_placeholders_substitute_in_order() {
        let sql = build_query(
            "SELECT name FROM users WHERE user_id = ?d",
            &[Value::from(1i64)],
        )
        .unwrap();
        assert_eq!(sql, "SELECT name FROM users WHERE user_id = 1");
    }

    #[test]
    fn generic_placeholder_consumes_following_space() {
        // `? ` eats the space as its specifier and re-appends it.
        let sql = build_query(
            "SELECT * FROM users WHERE name = ? AND block = ?d",
            &[Value::from("Jack"), Value::from(true)],
        )
        .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE name = 'Jack' AND block = 1");
    }

    #[test]
    fn identifier_list_and_ints() {
        let cols = Value::Array(vec![Entry::item("name"), Entry::item("email")]);
        let sql = build_query(
            "SELECT ?# FROM users WHERE user_id = ?d AND block = ?d",
            &[cols, Value::from(2i64), Value::from(true)],
        )
        .unwrap();
        assert_eq!(
            sql,
            "SELECT `name`, `email` FROM users WHERE user_id = 2 AND block = 1"
        );
    }

    #[test]
    fn assignment_list_in_update() {
        let set = Value::Array(vec![
            Entry::field("name", "Jack"),
            Entry::field("email", Value::Null),
        ]);
        let sql = build_query("UPDATE users SET ?a WHERE user_id = -1", &[set]).unwrap();
        assert_eq!(
            sql,
            "UPDATE users SET `name` = 'Jack', `email` = NULL WHERE user_id = -1"
        );
    }

    #[test]
    fn mixed_array_and_top_level_placeholder() {
        let set = Value::Array(vec![Entry::field("name", "x"), Entry::field("age", 1i64)]);
        let sql =
            build_query("UPDATE t SET ?a WHERE id = ?d", &[set, Value::from(7i64)]).unwrap();
        assert_eq!(sql, "UPDATE t SET `name` = 'x', `age` = 1 WHERE id = 7");
    }

    #[test]
    fn out_of_range_placeholder_binds_null() {
        let sql = build_query("SELECT ?d, ?d", &[Value::from(1i64)]).unwrap();
        assert_eq!(sql, "SELECT 1, NULL");
    }

    #[test]
    fn skip_drops_block_and_consumes_nothing() {
        let sql = build_query("SELECT * FROM t {WHERE id = ?d}", &[skip()]).unwrap();
        assert_eq!(sql, "SELECT * FROM t ");
    }

    #[test]
    fn non_skip_block_is_rendered() {
        let sql = build_query("SELECT * FROM t {WHERE id = ?d}", &[Value::from(5i64)]).unwrap();
        assert_eq!(sql, "SELECT * FROM t WHERE id = 5");
    }

    #[test]
    fn block_binds_from_tail() {
        // Top level binds forward, the block binds backward from the tail.
        let sql = build_query(
            "SELECT * FROM users WHERE ?# IN (?d{, ?d})",
            &[Value::from("id"), Value::from(1i64), Value::from(2i64)],
        )
        .unwrap();
        assert_eq!(sql, "SELECT * FROM users WHERE `id` IN (1, 2)");
    }

    #[test]
    fn block_with_two_placeholders_binds_backward() {
        let sql = build_query(
            "{?d ?d}",
            &[Value::from(1i64), Value::from(2i64), Value::from(3i64)],
        )
        .unwrap();
        // First block placeholder takes the last argument.
        assert_eq!(sql, "3 2");
    }

    #[test]
    fn each_block_starts_at_the_tail() {
        let sql = build_query("{?d}{?d}", &[Value::from(1i64), Value::from(2i64)]).unwrap();
        assert_eq!(sql, "22");
    }

    #[test]
    fn block_index_underflow_binds_null() {
        let sql = build_query("A {B = ?d AND C = ?d}", &[Value::from(4i64)]).unwrap();
        assert_eq!(sql, "A B = 4 AND C = NULL");
    }

    #[test]
    fn empty_args_do_not_skip() {
        let sql = build_query("A {B ?d}", &[]).unwrap();
        assert_eq!(sql, "A B NULL");
    }

    #[test]
    fn only_the_last_argument_is_the_skip_test() {
        let sql = build_query("{?d}", &[skip(), Value::from(5i64)]).unwrap();
        assert_eq!(sql, "5");
    }

    #[test]
    fn extra_space_rule_is_top_level_only() {
        let sql = build_query("? x", &[Value::from(5i64)]).unwrap();
        assert_eq!(sql, "5 x");
        let sql = build_query("{? x}", &[Value::from(5i64)]).unwrap();
        assert_eq!(sql, "5x");
    }

    #[test]
    fn stray_closing_brace_is_literal() {
        let sql = build_query("a}b", &[]).unwrap();
        assert_eq!(sql, "a}b");
    }

    #[test]
    fn inner_open_brace_is_not_nested() {
        // The first `}` closes the block; inner `{` is plain text.
        let sql = build_query("{a{b}", &[]).unwrap();
        assert_eq!(sql, "a{b");
    }

    #[test]
    fn unknown_specifier_consumes_its_character() {
        let sql = build_query("SELECT ?w", &[Value::from("x")]).unwrap();
        assert_eq!(sql, "SELECT 'x'");
    }

    #[test]
    fn multibyte_specifier_is_consumed_whole() {
        let sql = build_query("SELECT ?é!", &[Value::from(1i64)]).unwrap();
        assert_eq!(sql, "SELECT 1!");
    }

    #[test]
    fn trailing_question_mark_is_a_format_error() {
        let err = build_query("SELECT ?", &[]).unwrap_err();
        assert!(matches!(err, TplError::MissingSpecifier(7)));
    }

    #[test]
    fn block_placeholder_without_specifier_is_a_format_error() {
        let err = build_query("SELECT {a ?}", &[Value::from(1i64)]).unwrap_err();
        assert!(matches!(err, TplError::MissingSpecifier(10)));
    }

    #[test]
    fn unmatched_brace_is_a_format_error() {
        let err = build_query("SELECT {a", &[]).unwrap_err();
        assert!(matches!(err, TplError::UnmatchedBrace(7)));
    }

    #[test]
    fn skip_marker_in_a_placeholder_position_is_rejected() {
        assert!(build_query("SELECT ?d", &[skip()]).is_err());
    }

    #[test]
    fn identical_inputs_build_identical_queries() {
        let args = [Value::from("Jack"), Value::from(true)];
        let a = build_query("SELECT ? {AND ?d}", &args).unwrap();
        let b = build_query("SELECT ? {AND ?d}", &args).unwrap();
        assert_eq!(a, b);
    }
}
