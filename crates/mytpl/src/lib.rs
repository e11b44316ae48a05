//! # mytpl
//!
//! A MySQL-flavored SQL query templating engine.
//!
//! Given a template with typed placeholders and optional conditional
//! fragments, plus a positional argument list, [`build_query`] produces a
//! fully-substituted SQL string. A lightweight alternative to
//! prepared-statement binding for callers that must assemble SQL text ahead
//! of time; executing the result is the caller's concern.
//!
//! ## Template grammar
//!
//! - Literal text is copied verbatim.
//! - `?d` integer, `?f` float, `?a` array/assignment list, `?#`
//!   identifier(s); `?` followed by any other character renders the raw
//!   argument as a literal.
//! - `{ ... }` is a conditional fragment: dropped entirely when the last
//!   argument is the [`skip()`] marker, otherwise rendered with its
//!   placeholders bound from the *tail* of the argument list, right-to-left.
//!
//! ```
//! use mytpl::{build_query, skip, Entry, Value};
//!
//! let columns = Value::Array(vec![Entry::item("name"), Entry::item("email")]);
//! let sql = build_query(
//!     "SELECT ?# FROM users WHERE user_id = ?d {AND block = ?d}",
//!     &[columns, Value::from(2i64), skip()],
//! )?;
//! assert_eq!(sql, "SELECT `name`, `email` FROM users WHERE user_id = 2 ");
//! # Ok::<(), mytpl::TplError>(())
//! ```
//!
//! ## Safety note
//!
//! Text literals are single-quoted but their content is **not** escaped;
//! embedded quotes and backslashes pass through. Do not feed untrusted
//! strings into a template without sanitizing them first. See
//! [`escape_value`] for details.
//!
//! ## Features
//!
//! - `tracing` — emit a DEBUG event with the finished SQL on target
//!   `mytpl.sql` after each successful build.
//! - `uuid` — `uuid::Uuid` arguments convert to hyphenated text literals.
//! - `chrono` — chrono dates and datetimes convert to MySQL-style literals.

pub mod build;
pub mod error;
pub mod escape;
pub mod specifier;
pub mod value;

pub use build::build_query;
pub use error::{TplError, TplResult};
pub use escape::{escape_identifier, escape_value, format_array};
pub use specifier::process_specifier;
pub use value::{skip, Entry, Value};
