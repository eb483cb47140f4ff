//! JSON shape of an export, 1-to-1 with what the exporter writes.
//!
//! Nothing here interprets keys; see `parser` and `writer` for the
//! mapping to and from [`super::ScriptExport`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Event, Method, Slot};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WireExport {
    #[serde(default)]
    pub slots: WireSlots,
    #[serde(default)]
    pub handlers: Vec<WireHandler>,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireHandler {
    pub code: String,
    pub filter: WireFilter,
    pub key: NumberOrString,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFilter {
    #[serde(default)]
    pub args: Vec<WireArg>,
    pub signature: String,
    #[serde(rename = "slotKey")]
    pub slot_key: NumberOrString,
}

/// Arg objects carry more than `value`; the rest is ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireArg {
    pub value: String,
}

/// Integer-ish field as it appears on the wire: bare number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for NumberOrString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrString::Number(n) => write!(f, "{n}"),
            NumberOrString::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// `slots` object with its string keys untouched, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireSlots(pub Vec<(String, Slot)>);

impl Serialize for WireSlots {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WireSlots {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotsVisitor;

        impl<'de> Visitor<'de> for SlotsVisitor {
            type Value = WireSlots;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of slots keyed by index")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<WireSlots, A::Error> {
                let mut slots = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Slot>()? {
                    slots.push(entry);
                }
                Ok(WireSlots(slots))
            }
        }

        deserializer.deserialize_map(SlotsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slots_keep_document_order() {
        let slots: WireSlots =
            serde_json::from_str(r#"{"10": {"name": "a"}, "2": {"name": "b"}, "-1": {}}"#)
                .expect("slots");
        let keys: Vec<&str> = slots.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["10", "2", "-1"]);
    }

    #[test]
    fn slots_must_be_an_object() {
        assert!(serde_json::from_value::<WireSlots>(json!([{"name": "a"}])).is_err());
    }

    #[test]
    fn number_or_string_accepts_both_forms() {
        let n: NumberOrString = serde_json::from_str("5").expect("number");
        assert_eq!(n, NumberOrString::Number(5.into()));

        let s: NumberOrString = serde_json::from_str(r#""5""#).expect("string");
        assert_eq!(s, NumberOrString::Text("5".into()));

        assert!(serde_json::from_str::<NumberOrString>("true").is_err());
    }

    #[test]
    fn arg_ignores_extra_fields() {
        let arg: WireArg =
            serde_json::from_value(json!({"value": "x", "extra": "ignored"})).expect("arg");
        assert_eq!(serde_json::to_value(&arg).expect("ser"), json!({"value": "x"}));
    }
}
