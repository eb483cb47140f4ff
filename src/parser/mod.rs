//! Decoding: exporter JSON -> [`ScriptExport`].
pub mod numeric;

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CodecError, NumericField};
use crate::model::wire::{NumberOrString, WireExport, WireHandler};
use crate::model::{Filter, Handler, ScriptExport};

/// Decode raw export bytes.
///
/// All-or-nothing: the first malformed slot key or handler field fails
/// the whole document.
pub fn decode(raw: &[u8]) -> Result<ScriptExport, CodecError> {
    let wire: WireExport = serde_json::from_slice(raw).map_err(CodecError::MalformedDocument)?;
    let export = from_wire(wire)?;

    debug!(
        slots = export.slots.len(),
        handlers = export.handlers.len(),
        methods = export.methods.len(),
        events = export.events.len(),
        "decoded script export"
    );
    Ok(export)
}

/// Normalize the wire shape into the canonical one.
///
/// A slot key repeated in the document keeps its last payload, as with
/// any JSON object.
pub fn from_wire(wire: WireExport) -> Result<ScriptExport, CodecError> {
    let mut slots = BTreeMap::new();
    for (key, slot) in wire.slots.0 {
        let idx = key
            .parse::<i64>()
            .map_err(|source| CodecError::InvalidSlotKey {
                key: key.clone(),
                source,
            })?;
        slots.insert(idx, slot);
    }

    let handlers = wire
        .handlers
        .into_iter()
        .enumerate()
        .map(|(i, h)| handler_from_wire(i, h))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScriptExport {
        slots,
        handlers,
        methods: wire.methods,
        events: wire.events,
    })
}

fn handler_from_wire(idx: usize, h: WireHandler) -> Result<Handler, CodecError> {
    let slot_key = int_field(idx, NumericField::SlotKey, &h.filter.slot_key)?;
    let key = int_field(idx, NumericField::Key, &h.key)?;

    Ok(Handler {
        code: h.code,
        filter: Filter {
            args: h.filter.args.into_iter().map(|a| a.value).collect(),
            signature: h.filter.signature,
            slot_key,
        },
        key,
    })
}

fn int_field(handler: usize, field: NumericField, raw: &NumberOrString) -> Result<i64, CodecError> {
    numeric::parse_int_field(raw).ok_or_else(|| CodecError::InvalidNumericField {
        field,
        handler,
        raw: raw.to_string(),
    })
}

impl TryFrom<WireExport> for ScriptExport {
    type Error = CodecError;

    fn try_from(wire: WireExport) -> Result<Self, Self::Error> {
        from_wire(wire)
    }
}
