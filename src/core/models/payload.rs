//! Wire encoding of record and index entries
//!
//! Both entries are UTF-8 JSON. A record payload carries
//! `content, timestamp, source, category, credibilityScore, status`; the index
//! payload is an array of identifiers. Numeric identifiers are read as their
//! decimal text; any other non-string element is skipped.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::record::NewsRecord;
use super::status::{RecordStatus, Verdict};

/// Stored form of a record (the identifier lives in the key)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordPayload {
    content: String,
    timestamp: i64,
    source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    credibility_score: u8,
    #[serde(default, deserialize_with = "lenient_status")]
    status: RecordStatus,
}

// Older writers store `null` for unset score/status
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Statuses written by other clients that this one does not know read as pending
fn lenient_status<'de, D>(deserializer: D) -> Result<RecordStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let status = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s.parse().unwrap_or_else(|_| {
            log::warn!("Unknown record status '{s}', reading as pending");
            RecordStatus::Pending
        }),
        _ => RecordStatus::Pending,
    };
    Ok(status)
}

/// Decode the payload stored under a record key
pub fn decode_record(id: &str, bytes: &[u8]) -> serde_json::Result<NewsRecord> {
    let payload: RecordPayload = serde_json::from_slice(bytes)?;
    Ok(NewsRecord {
        id: id.to_string(),
        encrypted_content: payload.content,
        timestamp: payload.timestamp,
        source: payload.source,
        category: payload.category,
        credibility_score: payload.credibility_score,
        status: payload.status,
    })
}

/// Encode a record for storage
pub fn encode_record(record: &NewsRecord) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(&RecordPayload {
        content: record.encrypted_content.clone(),
        timestamp: record.timestamp,
        source: record.source.clone(),
        category: record.category.clone(),
        credibility_score: record.credibility_score,
        status: record.status,
    })
}

/// Overlay a verdict onto a stored payload
///
/// Only `status` and `credibilityScore` are replaced. Every other field,
/// including ones this client does not model, is written back as found.
pub fn overlay_verdict(bytes: &[u8], verdict: Verdict) -> serde_json::Result<Vec<u8>> {
    let mut value: Value = serde_json::from_slice(bytes)?;
    let Some(fields) = value.as_object_mut() else {
        return Err(<serde_json::Error as serde::de::Error>::custom(
            "record payload is not a JSON object",
        ));
    };
    fields.insert("status".to_string(), Value::from(verdict.status().as_str()));
    fields.insert("credibilityScore".to_string(), Value::from(verdict.score()));
    serde_json::to_vec(&value)
}

/// Ordered list of record identifiers stored under the index key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordIndex {
    ids: Vec<String>,
}

impl RecordIndex {
    /// Build an index from identifiers
    #[must_use]
    pub const fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Decode a stored index payload
    ///
    /// Fails only when the payload is not a JSON array. Elements that are
    /// neither strings nor numbers are logged and dropped.
    pub fn decode(bytes: &[u8]) -> serde_json::Result<Self> {
        let elements: Vec<Value> = serde_json::from_slice(bytes)?;
        let ids = elements
            .into_iter()
            .filter_map(|element| match element {
                Value::String(id) => Some(id),
                Value::Number(n) => Some(n.to_string()),
                other => {
                    log::warn!("Skipping index entry {other}: not an identifier");
                    None
                },
            })
            .collect();
        Ok(Self::new(ids))
    }

    /// Encode for storage
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(&self.ids)
    }

    /// Append an identifier
    pub fn push(&mut self, id: String) {
        self.ids.push(id);
    }

    /// Identifiers in insertion order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the index holds no identifiers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is listed
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }
}
