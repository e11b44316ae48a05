//! Example building template arguments from JSON.
//!
//! Run with:
//!   cargo run --example json_args -p mytpl

use mytpl::{TplResult, Value, build_query};
use serde_json::json;

fn main() -> TplResult<()> {
    // JSON objects become named containers; handy for `?a` SET lists.
    let patch = json!({
        "email": "jack@example.com",
        "name": "Jack",
        "verified": true,
    });
    let sql = build_query("UPDATE users SET ?a WHERE user_id = ?d", &[
        Value::from(&patch),
        Value::from(7i64),
    ])?;
    println!("{sql}");

    // JSON arrays become positional containers.
    let ids = json!([1, 2, 3]);
    let sql = build_query("SELECT * FROM users WHERE id IN (?a)", &[Value::from(ids)])?;
    println!("{sql}");

    // JSON scalars map onto the value tags: null, bool, i64-exact numbers,
    // floats and strings.
    let sql = build_query("SELECT * FROM users WHERE name = ? AND rating > ?f", &[
        Value::from(json!("Jack")),
        Value::from(json!(2.5)),
    ])?;
    println!("{sql}");

    Ok(())
}
