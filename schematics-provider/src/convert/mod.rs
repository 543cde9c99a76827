//! Flatten / Expand
//!
//! Conversion between typed models and the provider's attribute maps.
//! Nested objects become one-element lists of maps; `None` fields are left
//! out entirely; timestamps share a single formatter.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use schematics_core::resource::{Resource, Value};

use crate::models::RawMap;

mod action;
mod agent;
mod common;
mod inventory;
mod job;
mod resource_query;
mod workspace;

pub(crate) use workspace::{
    flatten_lookup_extras, template_data_request, template_inputs_request,
    template_repo_request, workspace_status_request,
};

/// Attribute map of one resource or nested block
pub type AttrMap = HashMap<String, Value>;

/// Model → attribute map
pub trait Flatten {
    fn flatten(&self) -> AttrMap;
}

/// Attribute map → model. Missing keys stay `None`.
pub trait Expand: Sized {
    fn expand(map: &AttrMap) -> Self;
}

/// Attributes set to something other than their zero value. Create requests
/// are expanded from this view.
pub fn configured(resource: &Resource) -> AttrMap {
    resource
        .attributes
        .iter()
        .filter(|(_, v)| !v.is_zero())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Canonical timestamp rendering: RFC 3339, millisecond precision, `Z` suffix.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("ignoring malformed timestamp '{}': {}", s, e);
            None
        }
    }
}

/// Scalar model field that maps onto a single attribute value
pub(crate) trait Scalar: Sized {
    fn to_value(&self) -> Value;
    fn from_value(value: &Value) -> Option<Self>;
}

impl Scalar for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    /// Empty strings count as unset.
    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

impl Scalar for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Scalar for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }
}

impl Scalar for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl Scalar for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::String(format_timestamp(self))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(parse_timestamp)
    }
}

impl Scalar for Vec<String> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().cloned().map(Value::String).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_list().map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
    }
}

pub(crate) fn put<T: Scalar>(map: &mut AttrMap, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        map.insert(key.to_string(), v.to_value());
    }
}

pub(crate) fn get<T: Scalar>(map: &AttrMap, key: &str) -> Option<T> {
    map.get(key).and_then(T::from_value)
}

/// Nested object as a one-element list
pub(crate) fn put_block<T: Flatten>(map: &mut AttrMap, key: &str, value: &Option<T>) {
    if let Some(v) = value {
        map.insert(key.to_string(), Value::List(vec![Value::Map(v.flatten())]));
    }
}

pub(crate) fn put_blocks<T: Flatten>(map: &mut AttrMap, key: &str, value: &Option<Vec<T>>) {
    if let Some(items) = value {
        map.insert(
            key.to_string(),
            Value::List(items.iter().map(|v| Value::Map(v.flatten())).collect()),
        );
    }
}

/// Untyped JSON objects, copied as maps
pub(crate) fn put_json(map: &mut AttrMap, key: &str, value: &Option<Vec<RawMap>>) {
    if let Some(items) = value {
        let list = items
            .iter()
            .filter_map(|m| Value::from_json(&serde_json::Value::Object(m.clone())))
            .collect();
        map.insert(key.to_string(), Value::List(list));
    }
}

/// First element of a block list. An empty list means unset.
pub(crate) fn block<T: Expand>(map: &AttrMap, key: &str) -> Option<T> {
    map.get(key)
        .and_then(Value::as_list)
        .and_then(|items| items.first())
        .and_then(Value::as_map)
        .map(T::expand)
}

pub(crate) fn blocks<T: Expand>(map: &AttrMap, key: &str) -> Option<Vec<T>> {
    map.get(key).and_then(Value::as_list).map(|items| {
        items
            .iter()
            .filter_map(Value::as_map)
            .map(T::expand)
            .collect()
    })
}

pub(crate) fn json(map: &AttrMap, key: &str) -> Option<Vec<RawMap>> {
    map.get(key).and_then(Value::as_list).map(|items| {
        items
            .iter()
            .filter_map(|v| match serde_json::Value::from(v) {
                serde_json::Value::Object(obj) => Some(obj),
                _ => None,
            })
            .collect()
    })
}

/// Implement [`Flatten`] and [`Expand`] for a model from its key mapping.
///
/// Fields are scalar unless tagged `block`, `blocks` or `json`. Keys listed
/// under `computed` are flattened but never expanded.
macro_rules! convert {
    (
        $ty:ident {
            $($key:literal => $field:ident $(: $how:ident)?),* $(,)?
        }
        $(computed {
            $($ckey:literal => $cfield:ident $(: $chow:ident)?),* $(,)?
        })?
    ) => {
        impl $crate::convert::Flatten for $ty {
            fn flatten(&self) -> $crate::convert::AttrMap {
                #[allow(unused_mut)]
                let mut map = $crate::convert::AttrMap::new();
                $( convert!(@put [$($how)?] map, $key, &self.$field); )*
                $($( convert!(@put [$($chow)?] map, $ckey, &self.$cfield); )*)?
                map
            }
        }

        impl $crate::convert::Expand for $ty {
            #[allow(unused_variables)]
            fn expand(map: &$crate::convert::AttrMap) -> Self {
                Self {
                    $( $field: convert!(@get [$($how)?] map, $key), )*
                    ..Default::default()
                }
            }
        }
    };
    (@put [] $map:ident, $key:expr, $v:expr) => { $crate::convert::put(&mut $map, $key, $v) };
    (@put [block] $map:ident, $key:expr, $v:expr) => { $crate::convert::put_block(&mut $map, $key, $v) };
    (@put [blocks] $map:ident, $key:expr, $v:expr) => { $crate::convert::put_blocks(&mut $map, $key, $v) };
    (@put [json] $map:ident, $key:expr, $v:expr) => { $crate::convert::put_json(&mut $map, $key, $v) };
    (@get [] $map:ident, $key:expr) => { $crate::convert::get($map, $key) };
    (@get [block] $map:ident, $key:expr) => { $crate::convert::block($map, $key) };
    (@get [blocks] $map:ident, $key:expr) => { $crate::convert::blocks($map, $key) };
    (@get [json] $map:ident, $key:expr) => { $crate::convert::json($map, $key) };
}

pub(crate) use convert;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_use_one_format() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01T12:30:05.000Z");

        let parsed = parse_timestamp("2024-03-01T14:30:05.250+02:00").unwrap();
        assert_eq!(format_timestamp(&parsed), "2024-03-01T12:30:05.250Z");
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn put_skips_none_and_keeps_empty_lists() {
        let mut map = AttrMap::new();
        put::<String>(&mut map, "name", &None);
        put(&mut map, "tags", &Some(Vec::<String>::new()));
        assert!(!map.contains_key("name"));
        assert_eq!(map.get("tags"), Some(&Value::List(vec![])));
    }

    #[test]
    fn empty_strings_expand_to_none() {
        let mut map = AttrMap::new();
        map.insert("name".to_string(), Value::String(String::new()));
        map.insert("host".to_string(), Value::String("10.0.0.1".to_string()));
        assert_eq!(get::<String>(&map, "name"), None);
        assert_eq!(get::<String>(&map, "host").as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn json_maps_survive_conversion() {
        let mut obj = RawMap::new();
        obj.insert("KEY".to_string(), serde_json::json!("value"));
        let mut map = AttrMap::new();
        put_json(&mut map, "env", &Some(vec![obj.clone()]));
        assert_eq!(json(&map, "env"), Some(vec![obj]));
    }
}
