//! The `tql!` template macro.

/// Build a [`Parts`](crate::Query::Parts) fragment from literal SQL and
/// bound values.
///
/// String literals become SQL text; `{expr}` groups become bound values.
/// A bound expression can be anything convertible to [`Bind`](crate::Bind):
/// scalars are registered as named parameters, a [`Query`](crate::Query) is
/// compiled in place, and a `Vec` of scalars expands to a placeholder list.
/// Adjacent string literals merge, so long statements can be split across
/// lines freely.
///
/// The macro only assembles the fragment; nothing touches the SQL text or
/// allocates parameter names until [`compile`](crate::compile).
///
/// # Examples
/// ```
/// use tql::{compile, tql};
///
/// let org = 7;
/// let q = tql!(
///     "SELECT id, name FROM users"
///     " WHERE org = " {org}
///     " AND active = " {true}
/// );
/// let compiled = compile(&q).unwrap();
/// assert_eq!(
///     compiled.sql,
///     "SELECT id, name FROM users WHERE org = :p_1 AND active = :p_2"
/// );
/// ```
///
/// Fragments nest; a bound value can be a whole subquery:
/// ```
/// use tql::{compile, tql};
///
/// let banned = tql!("SELECT id FROM bans WHERE active = " {true});
/// let q = tql!("DELETE FROM sessions WHERE user_id IN (" {banned} ")");
/// assert_eq!(
///     compile(&q).unwrap().sql,
///     "DELETE FROM sessions WHERE user_id IN (SELECT id FROM bans WHERE active = :p_1)"
/// );
/// ```
#[macro_export]
macro_rules! tql {
    ($($piece:tt)*) => {{
        let mut template = $crate::Template::new();
        $crate::__tql_piece!(template $($piece)*);
        template.into_query()
    }};
}

/// Internal token muncher behind [`tql!`]. Not public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __tql_piece {
    ($template:ident) => {};
    ($template:ident $part:literal $($rest:tt)*) => {
        $template.push_part($part);
        $crate::__tql_piece!($template $($rest)*);
    };
    ($template:ident { $bind:expr } $($rest:tt)*) => {
        $template.push_bind($bind);
        $crate::__tql_piece!($template $($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use crate::query::{Bind, Query};

    #[test]
    fn empty_invocation_is_the_empty_fragment() {
        let q = tql!();
        assert_eq!(
            q,
            Query::Parts {
                parts: vec![String::new()],
                binds: vec![],
            }
        );
        assert!(q.is_empty());
    }

    #[test]
    fn literals_and_binds_interleave() {
        let q = tql!("a = " {1} " AND b = " {"two"});
        assert_eq!(
            q,
            Query::Parts {
                parts: vec!["a = ".into(), " AND b = ".into(), "".into()],
                binds: vec![1.into(), "two".into()],
            }
        );
    }

    #[test]
    fn split_literals_merge_into_one_part() {
        let q = tql!(
            "SELECT id"
            " FROM users"
            " WHERE org = " {7}
        );
        assert_eq!(
            q,
            Query::Parts {
                parts: vec!["SELECT id FROM users WHERE org = ".into(), "".into()],
                binds: vec![7.into()],
            }
        );
    }

    #[test]
    fn leading_bind_pads_an_empty_part() {
        let q = tql!({1} " + 1");
        assert_eq!(
            q,
            Query::Parts {
                parts: vec!["".into(), " + 1".into()],
                binds: vec![1.into()],
            }
        );
    }

    #[test]
    fn bind_group_takes_arbitrary_expressions() {
        let ids = vec![4i64, 5];
        let q = tql!("id IN (" {ids.clone()} ") OR id = " {ids.len() as i64});
        match q {
            Query::Parts { binds, .. } => {
                assert_eq!(binds[0], Bind::List(vec![4i64.into(), 5i64.into()]));
                assert_eq!(binds[1], Bind::from(2i64));
            }
            other => panic!("expected parts node, got {other:?}"),
        }
    }

    #[test]
    fn nested_query_binds_stay_queries() {
        let inner = tql!("SELECT 1");
        let q = tql!("(" {inner.clone()} ")");
        match q {
            Query::Parts { binds, .. } => assert_eq!(binds, vec![Bind::Query(inner)]),
            other => panic!("expected parts node, got {other:?}"),
        }
    }
}
