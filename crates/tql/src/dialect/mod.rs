//! SQL dialect support.
//!
//! Databases disagree on placeholder syntax, list punctuation and little
//! else that matters to query assembly. This module provides a trait for
//! that dialect-specific behavior; every method except [`Dialect::name`]
//! has a general-purpose SQL default, so an implementation overrides only
//! what its engine actually does differently.

mod general;

pub use general::GeneralSqlDialect;

use crate::params::{ParameterBuilder, Parameters};
use crate::query::Query;
use crate::raw::unsafe_raw;

/// Trait for dialect-specific compilation behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Renders a placeholder for a registered parameter name.
    fn parameter_name(&self, param_name: &str) -> String {
        format!(":{param_name}")
    }

    /// Joins already-compiled list elements into one SQL chunk.
    fn glue_array(&self, items: &[String]) -> String {
        items.join(", ")
    }

    /// Produces the parameter map attached to a compiled query.
    ///
    /// The default hands back the registered values as-is; a driver-facing
    /// dialect can rename keys or re-encode values here.
    fn prepared_parameters(&self, params: &ParameterBuilder) -> Parameters {
        params.parameters().clone()
    }

    /// Separator fragment for comma-glued query lists.
    fn comma_glue(&self) -> Query {
        unsafe_raw(", ")
    }

    /// Separator fragment for AND-glued query lists.
    fn and_glue(&self) -> Query {
        unsafe_raw(" AND ")
    }

    /// Separator fragment for OR-glued query lists.
    fn or_glue(&self) -> Query {
        unsafe_raw(" OR ")
    }

    /// Separator fragment for UNION-glued query lists.
    fn union_glue(&self) -> Query {
        unsafe_raw(" UNION ")
    }

    /// Sanitizes a table/column name before it is emitted.
    ///
    /// The default strips every character that is not a letter, a digit,
    /// an underscore or a dot. Whatever this returns is pasted into the
    /// SQL text verbatim.
    fn sanitize_name(&self, name: &str) -> String {
        name.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '.')
            .collect()
    }
}
