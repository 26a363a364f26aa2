//! Escape hatches that bypass parameter binding.
//!
//! Both functions here paste caller-provided text into the final SQL
//! instead of binding it, which is exactly what parameterization normally
//! prevents. They exist for the parts of a statement that cannot be bound
//! (keywords, table and column names, dialect oddities). Never feed them
//! user input.

use crate::query::Query;

/// Build a fragment from a raw SQL string, with no safety checks at all.
///
/// The string is emitted verbatim. Passing any kind of user input here is
/// an SQL injection; reserve this for SQL written out in the program text.
///
/// `unsafe_raw("")` is the empty fragment and compiles to nothing.
///
/// # Example
/// ```
/// use tql::{compile, tql, unsafe_raw};
///
/// let lock = unsafe_raw("FOR UPDATE");
/// let q = tql!("SELECT * FROM jobs WHERE id = " {42} " " {lock});
/// assert_eq!(
///     compile(&q).unwrap().sql,
///     "SELECT * FROM jobs WHERE id = :p_1 FOR UPDATE"
/// );
/// ```
pub fn unsafe_raw(sql: impl Into<String>) -> Query {
    Query::Parts {
        parts: vec![sql.into()],
        binds: Vec::new(),
    }
}

/// Build a fragment naming a table, column or other database object.
///
/// The name is not bound as a parameter; it is run through the dialect's
/// [`sanitize_name`](crate::Dialect::sanitize_name) at compile time and
/// emitted as text. Sanitization strips characters, it does not validate,
/// so user input passed here can still select an object you did not intend
/// to expose. Keep the argument program-controlled.
///
/// # Example
/// ```
/// use tql::{compile, tql, unsafe_name};
///
/// let table = unsafe_name("schema.users; --");
/// let q = tql!("SELECT * FROM " {table});
/// assert_eq!(compile(&q).unwrap().sql, "SELECT * FROM schema.users");
/// ```
pub fn unsafe_name(name: impl Into<String>) -> Query {
    Query::Name { name: name.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_a_single_part_fragment() {
        assert_eq!(
            unsafe_raw("SELECT 1"),
            Query::Parts {
                parts: vec!["SELECT 1".into()],
                binds: vec![],
            }
        );
    }

    #[test]
    fn raw_empty_string_is_the_empty_fragment() {
        assert!(unsafe_raw("").is_empty());
    }

    #[test]
    fn name_keeps_text_until_compile_time() {
        assert_eq!(
            unsafe_name("users"),
            Query::Name {
                name: "users".into()
            }
        );
    }
}
