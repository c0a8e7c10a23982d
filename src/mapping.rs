use serde_json::Value;

use crate::types::{PromptRecord, RawPrompt};

fn text(value: &Option<Value>) -> Option<String> {
    value.as_ref().and_then(Value::as_str).map(str::to_string)
}

// `ch` wins when it is a non-empty string; otherwise `en` is taken verbatim,
// empty or not.
fn content_from(raw: &RawPrompt) -> Option<String> {
    text(&raw.ch).filter(|s| !s.is_empty()).or_else(|| text(&raw.en))
}

pub fn record_from_prompt(id: String, raw: &RawPrompt) -> PromptRecord {
    PromptRecord {
        title: text(&raw.name),
        content: content_from(raw),
        category: text(&raw.categorie),
        id,
    }
}
