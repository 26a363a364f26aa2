//! Query compilation.
//!
//! Compilation walks a [`Query`] tree once and produces the final SQL
//! string plus the named parameters it references. It is the only place
//! where SQL text is assembled, placeholder names are allocated and the
//! dialect is consulted.
//!
//! A fragment that has nothing to contribute compiles to [`None`]. That is
//! a normal outcome, not an error: the empty fragment, [`Query::Skip`] and
//! a glue node without a usable separator all return [`None`], and a
//! parent fragment simply leaves a hole where such a child would have
//! gone.

use serde::Serialize;

use crate::dialect::{Dialect, GeneralSqlDialect};
use crate::params::{ParameterBuilder, Parameters};
use crate::query::{Bind, Query};

/// A finished compilation: SQL text plus the parameters it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    /// The SQL string with dialect placeholders in place of values.
    pub sql: String,
    /// Named parameter values, in first-registration order.
    pub params: Parameters,
}

/// Compile a query with the general SQL dialect and a fresh parameter
/// table.
///
/// # Example
/// ```
/// use tql::{compile, tql};
///
/// let q = tql!("SELECT * FROM users WHERE id = " {1});
/// let compiled = compile(&q).unwrap();
/// assert_eq!(compiled.sql, "SELECT * FROM users WHERE id = :p_1");
/// assert_eq!(compiled.params.len(), 1);
/// ```
pub fn compile(query: &Query) -> Option<CompiledQuery> {
    compile_with(query, &GeneralSqlDialect)
}

/// Compile a query with a specific dialect and a fresh parameter table.
pub fn compile_with(query: &Query, dialect: &dyn Dialect) -> Option<CompiledQuery> {
    let mut params = ParameterBuilder::new();
    compile_with_params(query, &mut params, dialect)
}

/// Compile a query against a caller-supplied parameter table.
///
/// Values registered by this compilation stay in the table afterwards,
/// including values from subtrees whose enclosing node failed to compile.
/// Sharing one table across several compilations keeps placeholder names
/// distinct between them.
pub fn compile_with_params(
    query: &Query,
    params: &mut ParameterBuilder,
    dialect: &dyn Dialect,
) -> Option<CompiledQuery> {
    let compiled = compile_node(query, params, dialect);
    #[cfg(feature = "tracing")]
    match &compiled {
        Some(c) => tracing::debug!(
            target: "tql.compile",
            dialect = dialect.name(),
            param_count = c.params.len(),
            sql = %c.sql,
        ),
        None => tracing::debug!(
            target: "tql.compile",
            dialect = dialect.name(),
            "query did not compile"
        ),
    }
    compiled
}

fn compile_node(
    query: &Query,
    params: &mut ParameterBuilder,
    dialect: &dyn Dialect,
) -> Option<CompiledQuery> {
    match query {
        Query::Parts { parts, binds } => {
            if query.is_empty() {
                return None;
            }

            let mut sql = String::new();
            for (i, part) in parts.iter().enumerate() {
                sql.push_str(part);

                let Some(bind) = binds.get(i) else {
                    continue;
                };

                // A bind that fails leaves a hole; the literals around it
                // stay as they are.
                if let Some(chunk) = compile_bind(bind, params, dialect) {
                    sql.push_str(&chunk);
                }
            }

            Some(CompiledQuery {
                sql,
                params: dialect.prepared_parameters(params),
            })
        }

        Query::Glue {
            queries,
            kind,
            glue,
        } => {
            // Children compile before the separator is even looked up, so
            // their parameter registrations stick no matter what happens
            // to this node.
            let mut joined: Vec<String> = Vec::with_capacity(queries.len());
            for child in queries {
                if let Some(compiled) = compile_node(child, params, dialect) {
                    joined.push(compiled.sql);
                }
            }

            let separator = kind.resolve(glue.as_deref(), dialect)?;
            let compiled_glue = compile_node(&separator, params, dialect)?;

            Some(CompiledQuery {
                sql: joined.join(&compiled_glue.sql),
                params: dialect.prepared_parameters(params),
            })
        }

        Query::Prepend { prefix, body } => {
            let compiled_prefix = compile_node(prefix, params, dialect);
            let compiled_body = compile_node(body, params, dialect);

            match (compiled_prefix, compiled_body) {
                (Some(prefix), Some(body)) => Some(CompiledQuery {
                    sql: prefix.sql + &body.sql,
                    params: dialect.prepared_parameters(params),
                }),
                _ => None,
            }
        }

        Query::Name { name } => Some(CompiledQuery {
            sql: dialect.sanitize_name(name),
            params: dialect.prepared_parameters(params),
        }),

        Query::Skip => None,
    }
}

/// Compile one bound value into its SQL chunk.
///
/// Scalars register in the table and come back as placeholders. A nested
/// query comes back as its SQL, or nothing when it does not compile. A
/// list compiles element by element, drops elements that produced nothing
/// or only whitespace, and joins the rest through the dialect; a list with
/// no surviving elements produces nothing at all.
fn compile_bind(
    bind: &Bind,
    params: &mut ParameterBuilder,
    dialect: &dyn Dialect,
) -> Option<String> {
    match bind {
        Bind::Query(query) => compile_node(query, params, dialect).map(|c| c.sql),

        Bind::List(items) => {
            let mut chunks: Vec<String> = Vec::with_capacity(items.len());
            for item in items {
                match compile_bind(item, params, dialect) {
                    Some(chunk) if !chunk.trim().is_empty() => chunks.push(chunk),
                    _ => {}
                }
            }

            if chunks.is_empty() {
                None
            } else {
                Some(dialect.glue_array(&chunks))
            }
        }

        Bind::Value(value) => {
            let name = params.to_parameter(value.clone());
            Some(dialect.parameter_name(&name))
        }
    }
}
