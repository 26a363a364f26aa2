//! The query tree model.
//!
//! This module provides the [`Query`] enum which supports:
//! - literal SQL segments interleaved with bound values ([`Query::Parts`])
//! - lists of fragments joined by a separator ([`Query::Glue`])
//! - direct concatenation of two fragments ([`Query::Prepend`])
//! - dialect-sanitized identifiers ([`Query::Name`])
//! - the never-compiling base case ([`Query::Skip`])
//!
//! The key property is that fragments nest freely: a bound value can itself
//! be a whole subquery, and any fragment that turns out to be empty simply
//! drops out of the surrounding SQL at compile time.

use crate::dialect::Dialect;
use crate::error::{TqlError, TqlResult};
use crate::value::Value;

/// A composable query fragment.
///
/// Build fragments with [`tql!`](crate::tql), the combinators in this crate
/// ([`glue_and`](crate::glue_and), [`when`](crate::when), ...), or directly
/// through these variants, then turn the tree into SQL with
/// [`compile`](crate::compile).
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Literal segments interleaved with bound values.
    ///
    /// The conventional shape is one more part than binds, parts and binds
    /// alternating. Zero parts, or a single empty part, is the empty
    /// fragment: it compiles to nothing.
    Parts {
        parts: Vec<String>,
        binds: Vec<Bind>,
    },

    /// Child fragments joined by a separator fragment.
    ///
    /// `glue` carries the separator for [`GlueKind::Custom`]; the other
    /// kinds resolve their separator from the dialect at compile time.
    Glue {
        queries: Vec<Query>,
        kind: GlueKind,
        glue: Option<Box<Query>>,
    },

    /// Two fragments concatenated with nothing in between.
    Prepend { prefix: Box<Query>, body: Box<Query> },

    /// An identifier emitted through the dialect's name sanitizer.
    ///
    /// Never becomes a bound parameter; see [`unsafe_name`](crate::unsafe_name).
    Name { name: String },

    /// Compiles to nothing, always.
    Skip,
}

/// How a [`Query::Glue`] node finds its separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlueKind {
    /// Use the separator fragment stored on the node.
    Custom,
    /// The dialect's AND separator.
    And,
    /// The dialect's OR separator.
    Or,
    /// The dialect's comma separator.
    Comma,
    /// The dialect's UNION separator.
    Union,
}

impl GlueKind {
    /// Resolve the separator fragment for this kind.
    ///
    /// `custom` is the node's stored separator, consulted only by
    /// [`GlueKind::Custom`]. Returns [`None`] when no separator is
    /// available, which makes the whole glue node non-compilable.
    pub fn resolve(self, custom: Option<&Query>, dialect: &dyn Dialect) -> Option<Query> {
        match self {
            GlueKind::Custom => custom.cloned(),
            GlueKind::And => Some(dialect.and_glue()),
            GlueKind::Or => Some(dialect.or_glue()),
            GlueKind::Comma => Some(dialect.comma_glue()),
            GlueKind::Union => Some(dialect.union_glue()),
        }
    }
}

impl Query {
    /// The shared empty fragment: compiles to nothing, contributes nothing.
    pub const EMPTY: Query = Query::Parts {
        parts: Vec::new(),
        binds: Vec::new(),
    };

    /// Build a [`Query::Parts`] from already-split arrays, checking shape.
    ///
    /// Accepts one more part than binds (the alternating shape the
    /// [`tql!`](crate::tql) macro produces) or the empty fragment with no
    /// binds at all. Any other combination cannot interleave and is
    /// rejected.
    ///
    /// # Example
    /// ```
    /// use tql::Query;
    ///
    /// let q = Query::parts(
    ///     vec!["id = ".into(), "".into()],
    ///     vec![7.into()],
    /// )?;
    /// assert!(!q.is_empty());
    /// # Ok::<(), tql::TqlError>(())
    /// ```
    pub fn parts(parts: Vec<String>, binds: Vec<Bind>) -> TqlResult<Query> {
        if parts.len() == binds.len() + 1 || (parts.is_empty() && binds.is_empty()) {
            Ok(Query::Parts { parts, binds })
        } else {
            Err(TqlError::template_shape(parts.len(), binds.len()))
        }
    }

    /// Check if this is the empty fragment.
    ///
    /// True only for the canonical empty [`Query::Parts`] shapes: no parts
    /// at all, or a single empty part. [`Query::Skip`] also compiles to
    /// nothing but is not "empty": it is the unsupported base case rather
    /// than a deliberately blank fragment.
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Parts { parts, .. } => {
                parts.is_empty() || (parts.len() == 1 && parts[0].is_empty())
            }
            _ => false,
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Query::EMPTY
    }
}

/// A value slot inside [`Query::Parts`].
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    /// A scalar registered in the parameter table.
    Value(Value),
    /// A nested fragment compiled in place.
    Query(Query),
    /// A sequence compiled element-wise and joined by the dialect.
    List(Vec<Bind>),
}

impl Bind {
    /// Build a list bind from any iterator of convertible items.
    ///
    /// # Example
    /// ```
    /// use tql::{compile, tql, Bind};
    ///
    /// let ids = Bind::list([1, 2, 3]);
    /// let q = tql!("id IN (" {ids} ")");
    /// assert_eq!(compile(&q).unwrap().sql, "id IN (:p_1, :p_2, :p_3)");
    /// ```
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Bind>,
    {
        Bind::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for Bind {
    fn from(v: Value) -> Self {
        Bind::Value(v)
    }
}

impl From<Query> for Bind {
    fn from(q: Query) -> Self {
        Bind::Query(q)
    }
}

macro_rules! bind_from_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Bind {
                fn from(v: $ty) -> Self {
                    Bind::Value(v.into())
                }
            }
        )+
    };
}

bind_from_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    &str,
    String,
    &[u8],
    Vec<u8>,
    uuid::Uuid,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
    std::sync::Arc<serde_json::Value>,
);

impl<T: Into<Value>> From<Option<T>> for Bind {
    fn from(v: Option<T>) -> Self {
        Bind::Value(v.into())
    }
}

impl From<Vec<Bind>> for Bind {
    fn from(v: Vec<Bind>) -> Self {
        Bind::List(v)
    }
}

impl From<Vec<Query>> for Bind {
    fn from(v: Vec<Query>) -> Self {
        Bind::list(v)
    }
}

impl From<Vec<i32>> for Bind {
    fn from(v: Vec<i32>) -> Self {
        Bind::list(v)
    }
}

impl From<Vec<i64>> for Bind {
    fn from(v: Vec<i64>) -> Self {
        Bind::list(v)
    }
}

impl From<Vec<String>> for Bind {
    fn from(v: Vec<String>) -> Self {
        Bind::list(v)
    }
}

impl From<Vec<&str>> for Bind {
    fn from(v: Vec<&str>) -> Self {
        Bind::list(v)
    }
}

/// Incremental [`Query::Parts`] builder backing the [`tql!`](crate::tql)
/// macro.
///
/// Maintains the alternating parts/binds shape as pieces arrive: adjacent
/// literal pushes coalesce into one segment, and a bind with no literal
/// before or after it gets an empty segment padded in.
#[derive(Debug, Clone, Default)]
pub struct Template {
    parts: Vec<String>,
    binds: Vec<Bind>,
}

impl Template {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a literal SQL segment, merging into the previous one when no
    /// bind separates them.
    pub fn push_part(&mut self, part: &str) {
        let open = self.parts.len() > self.binds.len();
        match self.parts.last_mut() {
            Some(last) if open => last.push_str(part),
            _ => self.parts.push(part.to_string()),
        }
    }

    /// Append a bound value slot.
    pub fn push_bind(&mut self, bind: impl Into<Bind>) {
        if self.parts.len() == self.binds.len() {
            self.parts.push(String::new());
        }
        self.binds.push(bind.into());
    }

    /// Finish the template.
    ///
    /// An empty template becomes the single-empty-part fragment, which
    /// compiles to nothing.
    pub fn into_query(mut self) -> Query {
        if self.parts.len() == self.binds.len() {
            self.parts.push(String::new());
        }
        Query::Parts {
            parts: self.parts,
            binds: self.binds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Shape validation ─────────────────────────────────────────────

    #[test]
    fn parts_accepts_alternating_shape() {
        let q = Query::parts(
            vec!["a = ".into(), " AND b = ".into(), "".into()],
            vec![1.into(), 2.into()],
        );
        assert!(q.is_ok());
    }

    #[test]
    fn parts_accepts_empty_shapes() {
        assert_eq!(Query::parts(vec![], vec![]).unwrap(), Query::EMPTY);
        assert!(Query::parts(vec!["".into()], vec![]).is_ok());
    }

    #[test]
    fn parts_rejects_mismatched_lengths() {
        let err = Query::parts(vec!["a".into()], vec![1.into(), 2.into()]).unwrap_err();
        assert_eq!(err, TqlError::TemplateShape { parts: 1, binds: 2 });
        assert!(err.is_template_shape());
        assert!(Query::parts(vec![], vec![1.into()]).is_err());
    }

    // ── Emptiness ────────────────────────────────────────────────────

    #[test]
    fn empty_constant_is_empty() {
        assert!(Query::EMPTY.is_empty());
        assert!(Query::default().is_empty());
        assert!(Query::parts(vec!["".into()], vec![]).unwrap().is_empty());
    }

    #[test]
    fn whitespace_and_skip_are_not_empty() {
        assert!(!Query::parts(vec![" ".into()], vec![]).unwrap().is_empty());
        assert!(!Query::Skip.is_empty());
        assert!(!Query::Name { name: "t".into() }.is_empty());
    }

    // ── Template building ────────────────────────────────────────────

    #[test]
    fn empty_template_yields_single_empty_part() {
        let q = Template::new().into_query();
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
    fn adjacent_parts_coalesce() {
        let mut t = Template::new();
        t.push_part("SELECT * ");
        t.push_part("FROM users");
        assert_eq!(
            t.into_query(),
            Query::Parts {
                parts: vec!["SELECT * FROM users".into()],
                binds: vec![],
            }
        );
    }

    #[test]
    fn leading_and_trailing_binds_pad_empty_parts() {
        let mut t = Template::new();
        t.push_bind(1);
        t.push_part(" + ");
        t.push_bind(2);
        assert_eq!(
            t.into_query(),
            Query::Parts {
                parts: vec!["".into(), " + ".into(), "".into()],
                binds: vec![1.into(), 2.into()],
            }
        );
    }

    #[test]
    fn adjacent_binds_pad_empty_part_between() {
        let mut t = Template::new();
        t.push_part("(");
        t.push_bind(1);
        t.push_bind(2);
        t.push_part(")");
        assert_eq!(
            t.into_query(),
            Query::Parts {
                parts: vec!["(".into(), "".into(), ")".into()],
                binds: vec![1.into(), 2.into()],
            }
        );
    }

    // ── Bind conversions ─────────────────────────────────────────────

    #[test]
    fn byte_vec_binds_as_scalar_not_list() {
        assert_eq!(
            Bind::from(vec![1u8, 2, 3]),
            Bind::Value(Value::Bytes(vec![1, 2, 3]))
        );
    }

    #[test]
    fn int_vec_binds_as_list() {
        assert_eq!(
            Bind::from(vec![1i32, 2]),
            Bind::List(vec![1.into(), 2.into()])
        );
    }

    #[test]
    fn option_none_binds_as_null() {
        assert_eq!(Bind::from(None::<i64>), Bind::Value(Value::Null));
    }

    #[test]
    fn list_builder_accepts_mixed_convertibles() {
        let b = Bind::list(vec![Bind::from(1), Bind::from(Query::EMPTY)]);
        match b {
            Bind::List(items) => assert_eq!(items.len(), 2),
            other => panic!("expected list, got {other:?}"),
        }
    }
}
