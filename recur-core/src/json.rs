//! [`Node`] support for `serde_json::Value`
//!
//! Arrays are traversable containers. Objects are opaque containers whose
//! containment test is key lookup, so `"id"` is "in" `{"id": 1}` but the
//! object is never flattened: its keys are `String`s, not `Value`s, so they
//! cannot be yielded as children. Strings are atomic leaves whose containment
//! test is a substring search. Numbers, booleans and null are plain leaves,
//! compared with `serde_json`'s own equality.

use crate::node::Node;
use serde_json::Value;

impl Node for Value {
    type Children<'a> = std::slice::Iter<'a, Value>;

    fn children(&self) -> Option<Self::Children<'_>> {
        match self {
            Value::Array(items) => Some(items.iter()),
            _ => None,
        }
    }

    fn membership(&self, target: &Value) -> Option<bool> {
        match self {
            Value::Object(map) => Some(match target {
                Value::String(key) => map.contains_key(key),
                _ => false,
            }),
            Value::String(text) => Some(match target {
                Value::String(needle) => text.contains(needle.as_str()),
                _ => false,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_arrays_are_traversable() {
        assert!(json!([]).is_traversable_container());
        assert!(json!([1, [2]]).is_traversable_container());
        assert!(!json!({"a": [1]}).is_traversable_container());
        assert!(!json!("abc").is_traversable_container());
        assert!(!json!(3).is_traversable_container());
        assert!(!json!(null).is_traversable_container());
    }

    #[test]
    fn test_object_membership_is_key_lookup() {
        let obj = json!({"id": 1, "name": "x"});
        assert_eq!(obj.membership(&json!("id")), Some(true));
        assert_eq!(obj.membership(&json!("missing")), Some(false));
        assert_eq!(obj.membership(&json!(1)), Some(false));
    }

    #[test]
    fn test_string_membership_is_substring() {
        assert_eq!(json!("abc").membership(&json!("bc")), Some(true));
        assert_eq!(json!("abc").membership(&json!("x")), Some(false));
        assert_eq!(json!("abc").membership(&json!(1)), Some(false));
    }

    #[test]
    fn test_other_values_have_no_membership() {
        assert_eq!(json!(5).membership(&json!(5)), None);
        assert_eq!(json!(null).membership(&json!(null)), None);
        assert_eq!(json!([1]).membership(&json!(1)), None);
    }
}
