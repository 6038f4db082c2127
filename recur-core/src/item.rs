//! Dynamic nested value

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::slice;

/// Heterogeneous value usable as a nested structure.
///
/// `List` and `Map` are traversable containers; a map is traversed over its
/// keys. `Range` is an opaque container: flattening yields it as a leaf, while
/// membership and counting look inside it. `Text` is never expanded, but its
/// containment test is a substring search.
///
/// Equality is by value: `Int` and `Float` compare numerically, empty ranges
/// are all equal, and maps compare regardless of entry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Item {
    /// Absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text value, never expanded
    Text(String),
    /// Nested list
    List(Vec<Item>),
    /// Half-open integer range `start..end`
    Range {
        /// First value in the range
        start: i64,
        /// One past the last value in the range
        end: i64,
    },
    /// Key/value entries in insertion order
    Map(Vec<(Item, Item)>),
}

impl Item {
    /// Build a list from anything convertible into items
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item>,
    {
        Item::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a half-open range
    pub fn range(start: i64, end: i64) -> Self {
        Item::Range { start, end }
    }

    /// Borrow the elements of a list
    pub fn as_list(&self) -> Option<&[Item]> {
        match self {
            Item::List(items) => Some(items),
            _ => None,
        }
    }

    /// Integer value of an `Int`, or of a `Float` with no fractional part
    fn as_integral(&self) -> Option<i64> {
        match self {
            Item::Int(n) => Some(*n),
            Item::Float(f) => float_to_int(*f),
            _ => None,
        }
    }
}

/// `f` as an `i64` when the conversion is exact
fn float_to_int(f: f64) -> Option<i64> {
    // 2^63 is exactly representable; anything at or above it is out of range
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Item::Null, Item::Null) => true,
            (Item::Bool(a), Item::Bool(b)) => a == b,
            (Item::Int(a), Item::Int(b)) => a == b,
            (Item::Float(a), Item::Float(b)) => a == b,
            (Item::Int(i), Item::Float(f)) | (Item::Float(f), Item::Int(i)) => {
                float_to_int(*f) == Some(*i)
            }
            (Item::Text(a), Item::Text(b)) => a == b,
            (Item::List(a), Item::List(b)) => a == b,
            (
                Item::Range { start: a, end: b },
                Item::Range { start: c, end: d },
            ) => (a >= b && c >= d) || (a == c && b == d),
            (Item::Map(a), Item::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.iter().any(|(k, v)| k == key && v == value))
            }
            _ => false,
        }
    }
}

/// Children of an [`Item`] container: list elements or map keys
#[derive(Debug, Clone)]
pub enum ItemChildren<'a> {
    /// Elements of a list
    Elements(slice::Iter<'a, Item>),
    /// Keys of a map
    Keys(slice::Iter<'a, (Item, Item)>),
}

impl<'a> Iterator for ItemChildren<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ItemChildren::Elements(items) => items.next(),
            ItemChildren::Keys(entries) => entries.next().map(|(key, _)| key),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ItemChildren::Elements(items) => items.size_hint(),
            ItemChildren::Keys(entries) => entries.size_hint(),
        }
    }
}

impl Node for Item {
    type Children<'a> = ItemChildren<'a>;

    fn children(&self) -> Option<Self::Children<'_>> {
        match self {
            Item::List(items) => Some(ItemChildren::Elements(items.iter())),
            Item::Map(entries) => Some(ItemChildren::Keys(entries.iter())),
            _ => None,
        }
    }

    fn membership(&self, target: &Item) -> Option<bool> {
        match self {
            Item::Range { start, end } => Some(
                target
                    .as_integral()
                    .is_some_and(|n| *start <= n && n < *end),
            ),
            Item::Text(text) => Some(match target {
                Item::Text(needle) => text.contains(needle.as_str()),
                _ => false,
            }),
            _ => None,
        }
    }
}

impl From<bool> for Item {
    fn from(value: bool) -> Self {
        Item::Bool(value)
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::Int(value)
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Item::Int(value.into())
    }
}

impl From<f64> for Item {
    fn from(value: f64) -> Self {
        Item::Float(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::Text(value.to_string())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Item::Text(value)
    }
}

impl From<Vec<Item>> for Item {
    fn from(value: Vec<Item>) -> Self {
        Item::List(value)
    }
}

impl From<serde_json::Value> for Item {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Item::Null,
            Value::Bool(b) => Item::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Item::Int(i),
                // u64 beyond i64::MAX and non-integers
                None => Item::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Item::Text(s),
            Value::Array(items) => Item::List(items.into_iter().map(Item::from).collect()),
            Value::Object(map) => Item::Map(
                map.into_iter()
                    .map(|(k, v)| (Item::Text(k), Item::from(v)))
                    .collect(),
            ),
        }
    }
}
