//! Combinators for assembling query fragments.
//!
//! Everything here builds [`Query`] trees out of smaller ones: joining
//! lists of conditions, picking a branch, gluing a prefix on. None of it
//! touches SQL text or parameters; that happens at
//! [`compile`](crate::compile) time.

use crate::query::{GlueKind, Query};

/// Join fragments with a custom separator fragment.
///
/// # Example
/// ```
/// use tql::{compile, glue, tql, unsafe_raw};
///
/// let columns = vec![unsafe_raw("id"), unsafe_raw("name"), unsafe_raw("email")];
/// let q = tql!("SELECT " {glue(unsafe_raw(", "), columns)} " FROM users");
/// assert_eq!(compile(&q).unwrap().sql, "SELECT id, name, email FROM users");
/// ```
pub fn glue(separator: Query, queries: impl IntoIterator<Item = Query>) -> Query {
    Query::Glue {
        queries: queries.into_iter().collect(),
        kind: GlueKind::Custom,
        glue: Some(Box::new(separator)),
    }
}

/// Join condition fragments with the dialect's AND separator.
///
/// Fragments that fail to compile drop out of the list, so optional
/// conditions can be passed unconditionally.
///
/// # Example
/// ```
/// use tql::{compile, glue_and, tql};
///
/// let q = glue_and(vec![tql!("age >= " {18}), tql!("active = " {true})]);
/// assert_eq!(compile(&q).unwrap().sql, "age >= :p_1 AND active = :p_2");
/// ```
pub fn glue_and(conditions: impl IntoIterator<Item = Query>) -> Query {
    Query::Glue {
        queries: conditions.into_iter().collect(),
        kind: GlueKind::And,
        glue: None,
    }
}

/// Join condition fragments with the dialect's OR separator.
pub fn glue_or(conditions: impl IntoIterator<Item = Query>) -> Query {
    Query::Glue {
        queries: conditions.into_iter().collect(),
        kind: GlueKind::Or,
        glue: None,
    }
}

/// Join fragments with the dialect's comma separator.
pub fn glue_comma(queries: impl IntoIterator<Item = Query>) -> Query {
    Query::Glue {
        queries: queries.into_iter().collect(),
        kind: GlueKind::Comma,
        glue: None,
    }
}

/// Join complete queries with the dialect's UNION separator.
pub fn glue_union(queries: impl IntoIterator<Item = Query>) -> Query {
    Query::Glue {
        queries: queries.into_iter().collect(),
        kind: GlueKind::Union,
        glue: None,
    }
}

/// Include a fragment only when `predicate` holds.
///
/// Returns the built branch when the predicate is true and the empty
/// fragment otherwise, so the surrounding query reads the same either way.
/// The closure runs only when selected.
///
/// # Example
/// ```
/// use tql::{compile, tql, when};
///
/// let search: Option<&str> = None;
/// let q = tql!(
///     "SELECT id FROM product WHERE active = 1"
///     {when(search.is_some(), || tql!(" AND name LIKE " {search}))}
/// );
/// assert_eq!(compile(&q).unwrap().sql, "SELECT id FROM product WHERE active = 1");
/// ```
pub fn when(predicate: bool, then_branch: impl FnOnce() -> Query) -> Query {
    if predicate {
        then_branch()
    } else {
        Query::EMPTY
    }
}

/// Two-branch form of [`when`].
///
/// Exactly one of the closures runs.
pub fn when_else(
    predicate: bool,
    then_branch: impl FnOnce() -> Query,
    else_branch: impl FnOnce() -> Query,
) -> Query {
    if predicate {
        then_branch()
    } else {
        else_branch()
    }
}

/// First-match fragment selector.
///
/// Arms are tried in order; the first one whose predicate is true has its
/// closure built and every later arm is skipped. With no matching arm,
/// [`Match::resolve`] yields the empty fragment.
///
/// # Example
/// ```
/// use tql::{Match, compile, tql, unsafe_raw};
///
/// let sort = "age";
/// let order = Match::new()
///     .arm(sort == "age", || unsafe_raw("ORDER BY age DESC"))
///     .arm(sort == "name", || unsafe_raw("ORDER BY name"))
///     .resolve();
/// let q = tql!("SELECT * FROM people " {order});
/// assert_eq!(compile(&q).unwrap().sql, "SELECT * FROM people ORDER BY age DESC");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Match {
    matched: Option<Query>,
}

impl Match {
    /// Start an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arm; the closure runs only if this is the first true
    /// predicate.
    pub fn arm(mut self, predicate: bool, query: impl FnOnce() -> Query) -> Self {
        if self.matched.is_none() && predicate {
            self.matched = Some(query());
        }
        self
    }

    /// Finish the selector, falling back to the empty fragment.
    pub fn resolve(self) -> Query {
        self.matched.unwrap_or(Query::EMPTY)
    }
}

/// Concatenate `prefix` directly in front of `body`.
///
/// The node compiles only when both halves do, so a keyword prefix
/// vanishes together with an optional body instead of dangling.
///
/// # Example
/// ```
/// use tql::{compile, glue_and, prepend, tql, unsafe_raw};
///
/// let filters = glue_and(vec![tql!("age >= " {18})]);
/// let q = tql!("SELECT * FROM users " {prepend(unsafe_raw("WHERE "), filters)});
/// assert_eq!(compile(&q).unwrap().sql, "SELECT * FROM users WHERE age >= :p_1");
/// ```
pub fn prepend(prefix: Query, body: Query) -> Query {
    Query::Prepend {
        prefix: Box::new(prefix),
        body: Box::new(body),
    }
}
