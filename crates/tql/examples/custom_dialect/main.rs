//! Example demonstrating a custom dialect implementation.
//!
//! Run with:
//!   cargo run --example custom_dialect -p tql

use tql::{Dialect, Query, compile, compile_with, glue_union, tql, unsafe_name};

/// A T-SQL flavored dialect: `@name` placeholders, parenthesized IN
/// lists, bracket-quoted identifiers, and no UNION support.
struct TransactSqlDialect;

impl Dialect for TransactSqlDialect {
    fn name(&self) -> &'static str {
        "transact-sql"
    }

    fn parameter_name(&self, param_name: &str) -> String {
        format!("@{param_name}")
    }

    fn glue_array(&self, items: &[String]) -> String {
        format!("({})", items.join(", "))
    }

    fn sanitize_name(&self, name: &str) -> String {
        let cleaned: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        format!("[{cleaned}]")
    }

    // This engine never glues with UNION; queries relying on it simply
    // refuse to compile.
    fn union_glue(&self) -> Query {
        Query::Skip
    }
}

fn main() {
    let table = unsafe_name("user accounts; --");
    let ids = vec![3_i64, 5, 8];
    let q = tql!("SELECT * FROM " {table} " WHERE id IN " {ids.clone()} " AND org = " {42});

    let general = compile(&q).expect("compiles under the general dialect");
    println!("general-sql : {}", general.sql);

    let tsql = compile_with(&q, &TransactSqlDialect).expect("compiles under the custom dialect");
    println!("transact-sql: {}", tsql.sql);
    println!(
        "params      : {}",
        serde_json::to_string(&tsql.params).unwrap_or_default()
    );

    // The same tree, compiled through a dialect that refuses UNION.
    let stacked = glue_union(vec![
        tql!("SELECT id FROM customers"),
        tql!("SELECT id FROM suppliers"),
    ]);
    match compile_with(&stacked, &TransactSqlDialect) {
        Some(compiled) => println!("union       : {}", compiled.sql),
        None => println!("union       : not supported by this dialect"),
    }
}
