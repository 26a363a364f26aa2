//! # tql
//!
//! A composable, parameter-safe SQL fragment builder for Rust.
//!
//! ## Features
//!
//! - **SQL explicit**: you write the SQL text; [`tql!`] only splices bound
//!   values and nested fragments into it
//! - **Parameters, never interpolation**: every bound value becomes a named
//!   placeholder, deduplicated across the whole query
//! - **Fragments compose**: subqueries as values, condition lists glued
//!   with AND/OR, optional pieces via [`when`] and [`Match`]
//! - **Empty pieces vanish**: a fragment with nothing to say compiles to
//!   nothing and leaves no stray keywords behind
//! - **Dialect-pluggable**: placeholder syntax, list punctuation and name
//!   sanitization live behind the [`Dialect`] trait
//!
//! ## Quick start
//!
//! ```
//! use tql::{compile, glue_and, tql, when};
//!
//! let min_age: Option<i64> = Some(21);
//! let role = "admin";
//!
//! let filters = glue_and(vec![
//!     tql!("role = " {role}),
//!     when(min_age.is_some(), || tql!("age >= " {min_age})),
//! ]);
//! let query = tql!("SELECT id, name FROM users WHERE " {filters} " ORDER BY name");
//!
//! let compiled = compile(&query).unwrap();
//! assert_eq!(
//!     compiled.sql,
//!     "SELECT id, name FROM users WHERE role = :p_1 AND age >= :p_2 ORDER BY name"
//! );
//! ```
//!
//! Compilation returns an [`Option`]: a query that has nothing to
//! contribute (an empty fragment, a glue node without a usable separator)
//! is [`None`] rather than an error. Inside a larger query such fragments
//! simply disappear.

pub mod compiler;
pub mod dialect;
pub mod error;
pub mod operations;
pub mod params;
pub mod query;
pub mod raw;
pub mod value;

mod macros;

pub use compiler::{CompiledQuery, compile, compile_with, compile_with_params};
pub use dialect::{Dialect, GeneralSqlDialect};
pub use error::{TqlError, TqlResult};
pub use operations::{
    Match, glue, glue_and, glue_comma, glue_or, glue_union, prepend, when, when_else,
};
pub use params::{ParameterBuilder, Parameters};
pub use query::{Bind, GlueKind, Query, Template};
pub use raw::{unsafe_name, unsafe_raw};
pub use value::Value;
