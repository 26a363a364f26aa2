//! General-purpose SQL dialect.

use super::Dialect;

/// A general SQL dialect using `:name` placeholders and ANSI separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralSqlDialect;

impl GeneralSqlDialect {
    /// Creates a new general dialect.
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GeneralSqlDialect {
    fn name(&self) -> &'static str {
        "general-sql"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterBuilder;
    use crate::raw::unsafe_raw;

    #[test]
    fn placeholders_are_colon_prefixed() {
        let dialect = GeneralSqlDialect::new();
        assert_eq!(dialect.name(), "general-sql");
        assert_eq!(dialect.parameter_name("p_1"), ":p_1");
    }

    #[test]
    fn arrays_join_with_comma_space() {
        let dialect = GeneralSqlDialect::new();
        assert_eq!(
            dialect.glue_array(&[":p_1".into(), ":p_2".into(), "now()".into()]),
            ":p_1, :p_2, now()"
        );
        assert_eq!(dialect.glue_array(&[]), "");
    }

    #[test]
    fn glue_fragments_are_literal_separators() {
        let dialect = GeneralSqlDialect::new();
        assert_eq!(dialect.comma_glue(), unsafe_raw(", "));
        assert_eq!(dialect.and_glue(), unsafe_raw(" AND "));
        assert_eq!(dialect.or_glue(), unsafe_raw(" OR "));
        assert_eq!(dialect.union_glue(), unsafe_raw(" UNION "));
    }

    #[test]
    fn sanitize_strips_everything_dangerous() {
        let dialect = GeneralSqlDialect::new();
        assert_eq!(
            dialect.sanitize_name("schema.users$ OR 1=1 --"),
            "schema.usersOR11"
        );
        assert_eq!(dialect.sanitize_name("valid_name.col2"), "valid_name.col2");
        assert_eq!(dialect.sanitize_name("; DROP TABLE x;"), "DROPTABLEx");
    }

    #[test]
    fn prepared_parameters_snapshot_the_builder() {
        let dialect = GeneralSqlDialect::new();
        let mut params = ParameterBuilder::new();
        params.to_parameter(1);
        params.to_parameter("two");
        let snapshot = dialect.prepared_parameters(&params);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get_index(0).map(|(k, _)| k.as_str()), Some("p_1"));
    }
}
