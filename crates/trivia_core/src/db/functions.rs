//! Application-defined SQL functions.
//!
//! # Invariants
//! - Registered on every connection before migrations run.
//! - `lower_unicode` folds with `str::to_lowercase`, the same folding the
//!   in-memory search uses, so both stores agree on non-ASCII text.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

pub const LOWER_UNICODE: &str = "lower_unicode";

pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        LOWER_UNICODE,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text = ctx.get::<Option<String>>(0)?;
            Ok(text.map(|text| text.to_lowercase()))
        },
    )
}
