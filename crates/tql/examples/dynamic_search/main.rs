//! Example demonstrating dynamic query composition from optional filters.
//!
//! Run with:
//!   cargo run --example dynamic_search -p tql

use tql::{CompiledQuery, Match, Query, compile, glue_and, prepend, tql, unsafe_raw, when};

#[derive(Debug)]
struct Filters {
    search: Option<String>,
    roles_any_of: Vec<String>,
    min_age: Option<i64>,
    include_deleted: bool,
    sort_by: String,
    limit: i64,
}

fn build_search_query(filters: &Filters) -> Query {
    let conditions = glue_and(vec![
        when(filters.search.is_some(), || {
            let pattern = filters.search.as_deref().map(|s| format!("%{s}%"));
            tql!("name LIKE " {pattern})
        }),
        when(!filters.roles_any_of.is_empty(), || {
            tql!("role IN (" {filters.roles_any_of.clone()} ")")
        }),
        when(filters.min_age.is_some(), || {
            tql!("age >= " {filters.min_age})
        }),
        when(!filters.include_deleted, || tql!("deleted_at IS NULL")),
    ]);

    let order = Match::new()
        .arm(filters.sort_by == "name", || unsafe_raw(" ORDER BY name"))
        .arm(filters.sort_by == "age", || {
            unsafe_raw(" ORDER BY age DESC")
        })
        .resolve();

    tql!(
        "SELECT id, name, role, age FROM users "
        {prepend(unsafe_raw("WHERE "), conditions)}
        {order}
        " LIMIT " {filters.limit}
    )
}

fn report(label: &str, compiled: Option<CompiledQuery>) {
    match compiled {
        Some(compiled) => {
            println!("{label}:");
            println!("  sql    = {}", compiled.sql);
            for (name, value) in &compiled.params {
                println!(
                    "  {name:<6} = {}",
                    serde_json::to_string(value).unwrap_or_default()
                );
            }
        }
        None => println!("{label}: query had nothing to compile"),
    }
    println!();
}

fn main() {
    let full = Filters {
        search: Some("ann".to_string()),
        roles_any_of: vec!["admin".to_string(), "owner".to_string()],
        min_age: Some(21),
        include_deleted: false,
        sort_by: "name".to_string(),
        limit: 50,
    };
    report("all filters set", compile(&build_search_query(&full)));

    let sparse = Filters {
        search: None,
        roles_any_of: Vec::new(),
        min_age: None,
        include_deleted: false,
        sort_by: "age".to_string(),
        limit: 10,
    };
    report("only defaults", compile(&build_search_query(&sparse)));

    // The same value bound at several sites ships as one parameter.
    let org = 31;
    let dedup = tql!(
        "SELECT * FROM users WHERE org = " {org}
        " AND org IN (SELECT org FROM audits WHERE org = " {org} ")"
    );
    report("deduplicated parameters", compile(&dedup));
}
