//! SQL functions registered on every read connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// Name of the case-insensitive containment function.
///
/// `contains_ci(haystack, needle)` is true when `haystack` contains `needle`
/// ignoring case. The needle is taken literally; a NULL haystack never matches.
pub const CONTAINS_CI: &str = "contains_ci";

/// Register the crate's scalar functions on `conn`.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        CONTAINS_CI,
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let haystack: Option<String> = ctx.get(0)?;
            let needle: Option<String> = ctx.get(1)?;
            Ok(match (haystack, needle) {
                (Some(haystack), Some(needle)) => contains_ignore_case(&haystack, &needle),
                _ => false,
            })
        },
    )
}

/// Unicode-aware case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(conn: &Connection, haystack: Option<&str>, needle: &str) -> bool {
        conn.query_row(
            "SELECT contains_ci(?1, ?2)",
            rusqlite::params![haystack, needle],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let conn = Connection::open_in_memory().unwrap();
        register_functions(&conn).unwrap();

        assert!(eval(&conn, Some("Jane Doe"), "jan"));
        assert!(eval(&conn, Some("Jane Doe"), "DOE"));
        assert!(!eval(&conn, Some("Jane Doe"), "bob"));
    }

    #[test]
    fn empty_needle_matches_everything_but_null() {
        let conn = Connection::open_in_memory().unwrap();
        register_functions(&conn).unwrap();

        assert!(eval(&conn, Some("anything"), ""));
        assert!(eval(&conn, Some(""), ""));
        assert!(!eval(&conn, None, ""));
    }

    #[test]
    fn like_wildcards_are_literal() {
        let conn = Connection::open_in_memory().unwrap();
        register_functions(&conn).unwrap();

        assert!(!eval(&conn, Some("Bob"), "B_b"));
        assert!(!eval(&conn, Some("Bob"), "%"));
        assert!(eval(&conn, Some("100% Bob"), "0% b"));
    }

    #[test]
    fn folds_non_ascii_case() {
        assert!(contains_ignore_case("ÉMILIE Durand", "émilie"));
        assert!(contains_ignore_case("Jürgen", "JÜR"));
    }
}
