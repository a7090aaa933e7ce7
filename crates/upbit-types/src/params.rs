//! Canonical request parameters
//!
//! Every parameter record is flattened into a [`CanonicalParams`] before it
//! leaves the client. The same mapping feeds the query string (or JSON body)
//! and the `query_hash` claim of the signed token, so the two cannot drift.
//!
//! Fields holding their type's zero value (empty string, `0`, `false`) are
//! omitted entirely. Absence, not a zero, is the wire contract.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// A single scalar parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value, sent as-is
    Str(String),
    /// Integer value, formatted base-10
    Int(i64),
    /// Floating point value, formatted as the shortest round-trip decimal
    Float(f64),
    /// Boolean value, formatted as `true`/`false`
    Bool(bool),
}

impl ParamValue {
    /// Returns true if this value is its type's zero value
    ///
    /// Non-finite floats have no wire representation and count as absent.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0 || !f.is_finite(),
            Self::Bool(b) => !*b,
        }
    }

    /// Format the value the way it is written on the wire
    pub fn to_wire(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            // f64's Display is the shortest representation that round-trips
            // and never switches to exponent notation
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Sorted, zero-omitted mapping of wire name to raw string value
///
/// Keys iterate in byte-wise ascending order. Values are stored unescaped;
/// percent-encoding only happens in [`CanonicalParams::form_encoded`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalParams {
    entries: BTreeMap<String, String>,
}

impl CanonicalParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, builder style
    ///
    /// Zero values are skipped.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add an optional field, builder style
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Insert a field, returning whether it was kept
    ///
    /// A zero value removes nothing and is not stored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> bool {
        let value = value.into();
        if value.is_zero() {
            return false;
        }
        self.entries.insert(key.into(), value.to_wire());
        true
    }

    /// Get the raw value of a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a field is present
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no field survived encoding
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Raw canonical string `k1=v1&k2=v2`, used for the signing digest
    pub fn query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Percent-encoded form of the same pairs, used for the URL query
    pub fn form_encoded(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(&self.entries)
    }

    /// JSON object with string values, used as a POST body
    pub fn to_json_body(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

impl<K, V> FromIterator<(K, V)> for CanonicalParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl fmt::Display for CanonicalParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query_string())
    }
}

/// Explicit, statically typed flattening of a parameter record
pub trait EncodeParams {
    /// Produce the canonical mapping for this record
    fn encode_params(&self) -> CanonicalParams;
}

impl EncodeParams for CanonicalParams {
    fn encode_params(&self) -> CanonicalParams {
        self.clone()
    }
}

impl EncodeParams for () {
    fn encode_params(&self) -> CanonicalParams {
        CanonicalParams::new()
    }
}

impl<T: EncodeParams + ?Sized> EncodeParams for &T {
    fn encode_params(&self) -> CanonicalParams {
        (**self).encode_params()
    }
}

impl<T: EncodeParams> EncodeParams for Option<T> {
    fn encode_params(&self) -> CanonicalParams {
        self.as_ref().map(EncodeParams::encode_params).unwrap_or_default()
    }
}

impl EncodeParams for [(&str, &str)] {
    fn encode_params(&self) -> CanonicalParams {
        self.iter().copied().collect()
    }
}

impl<const N: usize> EncodeParams for [(&str, &str); N] {
    fn encode_params(&self) -> CanonicalParams {
        self.iter().copied().collect()
    }
}
