//! Example rendering uuid and chrono arguments.
//!
//! Run with:
//!   cargo run --example typed_values -p mytpl --features uuid,chrono

use chrono::NaiveDate;
use mytpl::{TplResult, Value, build_query};
use uuid::Uuid;

fn main() -> TplResult<()> {
    let id = Uuid::new_v4();
    let sql = build_query("SELECT * FROM sessions WHERE token = ? LIMIT 1", &[
        Value::from(id),
    ])?;
    println!("{sql}");

    let since = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .map(Value::from)
        .unwrap_or(Value::Null);
    let sql = build_query("SELECT * FROM logins {WHERE at >= ? ORDER BY at}", &[since])?;
    println!("{sql}");

    Ok(())
}
