//! Option values and the merge rules applied to option maps.
//!
//! Field options are an open, string-keyed map. Values are a small tagged
//! tree: scalars, sequences and mappings. Mapping keys keep insertion order
//! so a merged map lists the original keys first.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered, string-keyed option map.
pub type OptionMap = IndexMap<String, Value>;

/// A single option value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(OptionMap),
}

impl Value {
    /// An empty mapping.
    pub fn mapping() -> Self {
        Value::Mapping(OptionMap::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&OptionMap> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the variant, used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<OptionMap> for Value {
    fn from(map: OptionMap) -> Self {
        Value::Mapping(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Shallow merge: every incoming key overwrites the base key of the same name.
pub fn merge_shallow(base: &mut OptionMap, incoming: OptionMap) {
    for (key, value) in incoming {
        base.insert(key, value);
    }
}

/// Recursively merge `incoming` into `base`.
///
/// For a key present on both sides:
/// - two mappings are merged recursively,
/// - two sequences are concatenated, base entries first,
/// - any other pairing takes the incoming value.
///
/// Keys present on one side only are kept as they are.
pub fn merge_recursive(mut base: OptionMap, incoming: OptionMap) -> OptionMap {
    for (key, value) in incoming {
        match base.get_mut(&key) {
            Some(existing) => {
                let current = std::mem::take(existing);
                *existing = merge_values(current, value);
            }
            None => {
                base.insert(key, value);
            }
        }
    }
    base
}

/// Merge two values with the rules of [`merge_recursive`].
pub fn merge_values(base: Value, incoming: Value) -> Value {
    match (base, incoming) {
        (Value::Mapping(a), Value::Mapping(b)) => Value::Mapping(merge_recursive(a, b)),
        (Value::Sequence(mut a), Value::Sequence(b)) => {
            a.extend(b);
            Value::Sequence(a)
        }
        (_, incoming) => incoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(entries: Vec<(&str, Value)>) -> OptionMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn shallow_merge_overwrites_incoming_keys() {
        let mut base = map(vec![("a", 1.into()), ("b", 2.into())]);
        merge_shallow(&mut base, map(vec![("b", 3.into()), ("c", 4.into())]));
        assert_eq!(
            base,
            map(vec![("a", 1.into()), ("b", 3.into()), ("c", 4.into())])
        );
    }

    #[test]
    fn shallow_merge_does_not_recurse() {
        let mut base = map(vec![("attr", map(vec![("class", "x".into())]).into())]);
        merge_shallow(
            &mut base,
            map(vec![("attr", map(vec![("id", "y".into())]).into())]),
        );
        assert_eq!(base["attr"], map(vec![("id", "y".into())]).into());
    }

    #[test]
    fn recursive_merge_recurses_into_mappings() {
        let base = map(vec![(
            "attr",
            map(vec![("class", "span5".into()), ("id", "a".into())]).into(),
        )]);
        let incoming = map(vec![(
            "attr",
            map(vec![("class", "span8".into()), ("rows", 3.into())]).into(),
        )]);
        let merged = merge_recursive(base, incoming);
        assert_eq!(
            merged["attr"],
            map(vec![
                ("class", "span8".into()),
                ("id", "a".into()),
                ("rows", 3.into()),
            ])
            .into()
        );
    }

    #[test]
    fn recursive_merge_concatenates_sequences() {
        let base = map(vec![("groups", vec!["a".into(), "b".into()].into())]);
        let incoming = map(vec![("groups", vec!["b".into(), "c".into()].into())]);
        let merged = merge_recursive(base, incoming);
        assert_eq!(
            merged["groups"],
            Value::Sequence(vec!["a".into(), "b".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn recursive_merge_scalar_takes_incoming() {
        let base = map(vec![("label", "Old".into()), ("sortable", true.into())]);
        let incoming = map(vec![("label", "New".into())]);
        let merged = merge_recursive(base, incoming);
        assert_eq!(merged["label"], Value::from("New"));
        assert_eq!(merged["sortable"], Value::from(true));
    }

    #[test]
    fn recursive_merge_mismatched_shapes_take_incoming() {
        let base = map(vec![
            ("a", map(vec![("x", 1.into())]).into()),
            ("b", vec![Value::from(1)].into()),
            ("c", 5.into()),
        ]);
        let incoming = map(vec![
            ("a", "scalar".into()),
            ("b", map(vec![("y", 2.into())]).into()),
            ("c", vec![Value::from(6)].into()),
        ]);
        let merged = merge_recursive(base, incoming);
        assert_eq!(merged["a"], Value::from("scalar"));
        assert_eq!(merged["b"], map(vec![("y", 2.into())]).into());
        assert_eq!(merged["c"], Value::Sequence(vec![6.into()]));
    }

    #[test]
    fn recursive_merge_keeps_base_key_order() {
        let base = map(vec![("a", 1.into()), ("b", 2.into()), ("c", 3.into())]);
        let incoming = map(vec![("d", 4.into()), ("a", 10.into())]);
        let merged = merge_recursive(base, incoming);
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert_eq!(merged["a"], Value::from(10));
    }

    #[test]
    fn value_from_json() {
        let json = serde_json::json!({"a": [1, 2.5, "x"], "b": null, "c": {"d": true}});
        let value = Value::from(json);
        let expected: Value = map(vec![
            (
                "a",
                vec![Value::Int(1), Value::Float(2.5), Value::from("x")].into(),
            ),
            ("b", Value::Null),
            ("c", map(vec![("d", true.into())]).into()),
        ])
        .into();
        assert_eq!(value, expected);
    }

    #[test]
    fn value_deserializes_untagged_from_yaml() {
        let value: Value =
            serde_yaml_ng::from_str("label: Title\nsortable: true\nrows: 3\nattr: {class: big}\n")
                .unwrap();
        let m = value.as_mapping().unwrap();
        assert_eq!(m["label"], Value::from("Title"));
        assert_eq!(m["sortable"], Value::from(true));
        assert_eq!(m["rows"], Value::Int(3));
        assert_eq!(m["attr"].as_mapping().unwrap()["class"], Value::from("big"));
    }

    fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            "[a-z]{0,6}".prop_map(Value::String),
        ]
    }

    fn option_map() -> impl Strategy<Value = OptionMap> {
        let leaf = scalar();
        let tree = leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
                prop::collection::vec(("[a-d]", inner), 0..4)
                    .prop_map(|entries| Value::Mapping(entries.into_iter().collect())),
            ]
        });
        prop::collection::vec(("[a-f]", tree), 0..5).prop_map(|e| e.into_iter().collect())
    }

    proptest! {
        #[test]
        fn merging_empty_is_identity(base in option_map()) {
            prop_assert_eq!(merge_recursive(base.clone(), OptionMap::new()), base.clone());
            prop_assert_eq!(merge_recursive(OptionMap::new(), base.clone()), base);
        }

        #[test]
        fn merged_keys_are_union(base in option_map(), incoming in option_map()) {
            let merged = merge_recursive(base.clone(), incoming.clone());
            for key in base.keys().chain(incoming.keys()) {
                prop_assert!(merged.contains_key(key));
            }
            prop_assert!(merged.len() <= base.len() + incoming.len());
        }
    }
}
