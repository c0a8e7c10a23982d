use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tracing::{debug, warn};

use crate::mapping::record_from_prompt;
use crate::types::{PromptRecord, RawPrompt};

/// Normalize the fetched payload into archive records, in input order.
///
/// A payload without a usable `items` array yields an empty document. Entries
/// that are not JSON objects are skipped; they never fail the run and leave
/// no gap in the output.
pub async fn transform(payload: &Value) -> Vec<PromptRecord> {
    let Some(items) = payload.get("items").and_then(Value::as_array) else {
        warn!("payload has no items array; nothing to transform");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(items.len());
    for entry in items {
        let raw: RawPrompt = match serde_json::from_value(entry.clone()) {
            Ok(raw) => raw,
            Err(_) => {
                warn!("skipping entry that is not an object: {}", entry);
                continue;
            }
        };
        debug!("prompt: {}", entry);
        records.push(record_from_prompt(next_id(), &raw));
        // Let the clock tick so consecutive records rarely share a
        // millisecond. Best effort only; ties stay possible.
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    records
}

/// Milliseconds since the Unix epoch, truncated from nanosecond resolution,
/// rendered as a decimal string.
fn next_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}
