//! Named parameter collection shared across one compilation.

use indexmap::IndexMap;

use crate::value::Value;

/// Compiled parameters in registration order, keyed by generated name.
///
/// Insertion order is the registration order, so `p_2` stays before `p_10`
/// when iterating or serializing.
pub type Parameters = IndexMap<String, Value>;

/// Allocates placeholder names and deduplicates the values behind them.
///
/// One builder instance accompanies one top-level compilation; every value
/// bound anywhere in the query tree is registered here. Rebinding a value
/// equal to an already registered one (see the [`Value`] equality rules)
/// reuses the existing name instead of allocating a new slot, so the same
/// user id bound in five subqueries ships once.
///
/// Names are `p_1`, `p_2`, ... in first-registration order and are never
/// reused or removed. Sharing one builder across several compilations keeps
/// the numbering monotonic across all of them; use a fresh builder per
/// statement to restart at `p_1`.
#[derive(Debug, Clone)]
pub struct ParameterBuilder {
    next_index: usize,
    params: Parameters,
}

impl ParameterBuilder {
    /// Create an empty builder; the first allocated name is `p_1`.
    pub fn new() -> Self {
        Self {
            next_index: 1,
            params: Parameters::new(),
        }
    }

    /// Register a value and return its placeholder name.
    ///
    /// # Example
    /// ```
    /// use tql::ParameterBuilder;
    ///
    /// let mut params = ParameterBuilder::new();
    /// assert_eq!(params.to_parameter(7), "p_1");
    /// assert_eq!(params.to_parameter("x"), "p_2");
    /// assert_eq!(params.to_parameter(7), "p_1");
    /// ```
    pub fn to_parameter(&mut self, value: impl Into<Value>) -> String {
        let value = value.into();
        if let Some(name) = self
            .params
            .iter()
            .find_map(|(name, existing)| (*existing == value).then(|| name.clone()))
        {
            return name;
        }
        let name = format!("p_{}", self.next_index);
        self.next_index += 1;
        self.params.insert(name.clone(), value);
        name
    }

    /// The values registered so far, in registration order.
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Number of distinct registered values.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl Default for ParameterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn names_count_from_one() {
        let mut params = ParameterBuilder::new();
        assert_eq!(params.to_parameter(10), "p_1");
        assert_eq!(params.to_parameter(20), "p_2");
        assert_eq!(params.to_parameter(30), "p_3");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn equal_values_share_a_name() {
        let mut params = ParameterBuilder::new();
        let first = params.to_parameter("alice");
        params.to_parameter(99);
        assert_eq!(params.to_parameter("alice"), first);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn iteration_keeps_registration_order_past_ten() {
        let mut params = ParameterBuilder::new();
        for i in 0..12 {
            params.to_parameter(i);
        }
        let names: Vec<&str> = params.parameters().keys().map(String::as_str).collect();
        assert_eq!(names[1], "p_2");
        assert_eq!(names[9], "p_10");
        assert_eq!(names[11], "p_12");
    }

    #[test]
    fn nan_allocates_fresh_names() {
        let mut params = ParameterBuilder::new();
        assert_eq!(params.to_parameter(f64::NAN), "p_1");
        assert_eq!(params.to_parameter(f64::NAN), "p_2");
    }

    #[test]
    fn json_dedup_is_by_allocation() {
        let mut params = ParameterBuilder::new();
        let doc = Arc::new(json!({"role": "admin"}));
        let first = params.to_parameter(doc.clone());
        assert_eq!(params.to_parameter(doc), first);
        assert_ne!(params.to_parameter(json!({"role": "admin"})), first);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn null_and_false_do_not_collide() {
        let mut params = ParameterBuilder::new();
        let null = params.to_parameter(None::<bool>);
        let fals = params.to_parameter(false);
        assert_ne!(null, fals);
        assert_eq!(params.to_parameter(None::<i32>), null);
    }

    #[test]
    fn uuids_dedup_by_value() {
        let mut params = ParameterBuilder::new();
        let id = uuid::Uuid::new_v4();
        let first = params.to_parameter(id);
        assert_eq!(params.to_parameter(id), first);
        assert_ne!(params.to_parameter(uuid::Uuid::new_v4()), first);
        assert_eq!(params.len(), 2);
    }
}
