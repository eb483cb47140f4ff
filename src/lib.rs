pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod writer;

pub use error::{CodecError, NumericField};
pub use model::{Event, Filter, Handler, Method, ScriptExport, Slot};
pub use parser::decode;
pub use writer::{encode, encode_pretty};

use std::io::Write;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, info, warn};

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // 1. ── Decode ─────────────────────────────────────────────────────
    let raw = std::fs::read(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let export = parser::decode(&raw)
        .with_context(|| format!("Decoding {}", args.input.display()))?;

    info!(
        slots = export.slots.len(),
        handlers = export.handlers.len(),
        "loaded {}",
        args.input.display()
    );
    for (idx, slot) in &export.slots {
        let name = slot.name();
        debug!(
            slot = *idx,
            name = name.as_deref().unwrap_or("?"),
            handlers = export.handlers_for_slot(*idx).count(),
            "slot"
        );
    }
    for signature in export.methods.iter().filter_map(|m| m.signature()) {
        debug!(%signature, "method");
    }
    for signature in export.events.iter().filter_map(|e| e.signature()) {
        debug!(%signature, "event");
    }
    for key in export.dangling_slot_keys() {
        warn!(slot_key = key, "handler filter references a missing slot");
    }

    // 2. ── Encode ─────────────────────────────────────────────────────
    let out = if args.pretty {
        writer::encode_pretty(&export)
    } else {
        writer::encode(&export)
    }
    .with_context(|| "Encoding canonical export")?;

    if args.check {
        if !is_canonical(&raw, &out) {
            bail!("{} is not in canonical form", args.input.display());
        }
        info!("{} is canonical", args.input.display());
        return Ok(());
    }

    // 3. ── Write ──────────────────────────────────────────────────────
    match &args.output {
        Some(path) => {
            std::fs::write(path, &out).with_context(|| format!("Writing {}", path.display()))?
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&out)
                .and_then(|()| stdout.flush())
                .with_context(|| "Writing to stdout")?;
        }
    }

    Ok(())
}

/// Whether `raw` already is `canonical`, ignoring one trailing newline
/// editors tend to add.
fn is_canonical(raw: &[u8], canonical: &[u8]) -> bool {
    raw.strip_suffix(b"\n").unwrap_or(raw) == canonical
}
