//! Example demonstrating the template grammar end to end.
//!
//! Run with:
//!   cargo run --example basic -p mytpl

use mytpl::{Entry, TplResult, Value, build_query, skip};

fn main() -> TplResult<()> {
    // Typed placeholders bind left-to-right.
    let sql = build_query(
        "SELECT name FROM users WHERE user_id = ?d",
        &[Value::from(1i64)],
    )?;
    println!("{sql}");

    // A generic `?` renders the raw argument; `?d` casts to integer.
    let sql = build_query(
        "SELECT * FROM users WHERE name = ? AND block = ?d",
        &[Value::from("Jack"), Value::from(true)],
    )?;
    println!("{sql}");

    // `?#` renders identifier lists, `?a` renders assignment lists.
    let columns = Value::Array(vec![Entry::item("name"), Entry::item("email")]);
    let sql = build_query("SELECT ?# FROM users WHERE user_id = ?d", &[
        columns,
        Value::from(2i64),
    ])?;
    println!("{sql}");

    let set = Value::Array(vec![
        Entry::field("name", "Jack"),
        Entry::field("email", Value::Null),
    ]);
    let sql = build_query("UPDATE users SET ?a WHERE user_id = -1", &[set])?;
    println!("{sql}");

    // Conditional blocks: rendered with tail-bound arguments, or dropped
    // entirely when the last argument is the skip marker.
    let template = "SELECT name FROM users WHERE ?# IN (?d{, ?d})";
    let sql = build_query(template, &[
        Value::from("user_id"),
        Value::from(1i64),
        Value::from(2i64),
    ])?;
    println!("{sql}");

    let sql = build_query(template, &[Value::from("user_id"), Value::from(1i64), skip()])?;
    println!("{sql}");

    Ok(())
}
