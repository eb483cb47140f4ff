//! Encoding: [`ScriptExport`] -> canonical exporter JSON.
//!
//! Canonical means: slot keys as decimal strings in ascending order,
//! `key`/`slotKey` as JSON strings holding the decimal integer, args as
//! `{"value": ...}` objects, and opaque payloads exactly as decoded.

use tracing::debug;

use crate::error::CodecError;
use crate::model::wire::{NumberOrString, WireArg, WireExport, WireFilter, WireHandler, WireSlots};
use crate::model::{Handler, ScriptExport};

/// Encode to compact canonical JSON.
///
/// The whole document is built in memory first; on error nothing is
/// returned.
pub fn encode(export: &ScriptExport) -> Result<Vec<u8>, CodecError> {
    let out = serde_json::to_vec(&to_wire(export)).map_err(CodecError::SerializationFailure)?;
    debug!(bytes = out.len(), "encoded script export");
    Ok(out)
}

/// Same tree as [`encode`], indented for humans.
pub fn encode_pretty(export: &ScriptExport) -> Result<Vec<u8>, CodecError> {
    let out =
        serde_json::to_vec_pretty(&to_wire(export)).map_err(CodecError::SerializationFailure)?;
    debug!(bytes = out.len(), "encoded script export (pretty)");
    Ok(out)
}

pub fn to_wire(export: &ScriptExport) -> WireExport {
    WireExport {
        slots: WireSlots(
            export
                .slots
                .iter()
                .map(|(idx, slot)| (idx.to_string(), slot.clone()))
                .collect(),
        ),
        handlers: export.handlers.iter().map(handler_to_wire).collect(),
        methods: export.methods.clone(),
        events: export.events.clone(),
    }
}

fn handler_to_wire(h: &Handler) -> WireHandler {
    WireHandler {
        code: h.code.clone(),
        filter: WireFilter {
            args: h
                .filter
                .args
                .iter()
                .map(|v| WireArg { value: v.clone() })
                .collect(),
            signature: h.filter.signature.clone(),
            slot_key: quoted_int(h.filter.slot_key),
        },
        key: quoted_int(h.key),
    }
}

// exactly one layer of JSON quoting, never a bare number
fn quoted_int(n: i64) -> NumberOrString {
    NumberOrString::Text(n.to_string())
}

impl From<ScriptExport> for WireExport {
    fn from(export: ScriptExport) -> Self {
        to_wire(&export)
    }
}
