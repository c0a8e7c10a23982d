use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the fetched `items` array. The upstream feed is loosely
/// structured, so every field stays untyped; absent, null, or oddly-typed
/// source values must never reject an entry outright.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrompt {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub ch: Option<Value>,
    #[serde(default)]
    pub en: Option<Value>,
    #[serde(default)]
    pub categorie: Option<Value>,
}

/// Normalized archive entry. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub id: String,
}
