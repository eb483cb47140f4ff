pub mod wire;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;

// well-known slot indices the game assigns to built-in elements
pub const SLOT_IDX_UNIT: i64 = -1;
pub const SLOT_IDX_SYSTEM: i64 = -2;
pub const SLOT_IDX_LIBRARY: i64 = -3;

/// Whole script export, with every key normalized to an integer.
///
/// This is the canonical in-memory form; the JSON shape lives in
/// [`wire::WireExport`] and only the codec moves between the two.
/// Going through serde routes through the same wire mapping, so
/// `serde_json::from_str::<ScriptExport>` is equivalent to
/// [`crate::parser::decode`] apart from the error type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "wire::WireExport", into = "wire::WireExport")]
pub struct ScriptExport {
    pub slots: BTreeMap<i64, Slot>,
    /// Source order, never sorted.
    pub handlers: Vec<Handler>,
    pub methods: Vec<Method>,
    pub events: Vec<Event>,
}

impl ScriptExport {
    /// Slot keys referenced by a handler filter without a matching slot.
    ///
    /// The codec itself never rejects these; callers decide.
    pub fn dangling_slot_keys(&self) -> BTreeSet<i64> {
        self.handlers
            .iter()
            .map(|h| h.filter.slot_key)
            .filter(|k| !self.slots.contains_key(k))
            .collect()
    }

    /// Handlers bound to the given slot, in source order.
    pub fn handlers_for_slot(&self, slot_key: i64) -> impl Iterator<Item = &Handler> {
        self.handlers
            .iter()
            .filter(move |h| h.filter.slot_key == slot_key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    /// Lua source, kept byte-for-byte.
    pub code: String,
    pub filter: Filter,
    pub key: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Only the `value` of each wire arg survives decoding.
    pub args: Vec<String>,
    pub signature: String,
    pub slot_key: i64,
}

// ─────────────────────────────────────────────────────
// Opaque payloads
// ─────────────────────────────────────────────────────

/// JSON subtree kept as the exact text it was read from.
///
/// Numbers wider than 64 bits, key order and float spelling all survive
/// a decode/encode pass. Equality is textual.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Box<RawValue>);

impl Payload {
    pub fn as_json(&self) -> &str {
        self.0.get()
    }

    /// Top-level string field, if the payload is an object that has one.
    fn str_field(&self, field: &str) -> Option<String> {
        let value: Value = serde_json::from_str(self.0.get()).ok()?;
        value.get(field)?.as_str().map(str::to_owned)
    }
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.0.get() == other.0.get()
    }
}

/// The accessors only peek at fields the exporter is known to write;
/// they never influence encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(pub Payload);

impl Slot {
    pub fn name(&self) -> Option<String> {
        self.0.str_field("name")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Method(pub Payload);

impl Method {
    pub fn signature(&self) -> Option<String> {
        self.0.str_field("signature")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(pub Payload);

impl Event {
    pub fn signature(&self) -> Option<String> {
        self.0.str_field("signature")
    }
}
