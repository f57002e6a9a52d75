use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed notification payload: {0}")]
    MalformedStructure(#[from] serde_json::Error),
}

/// Envelope status change as posted by DocuSign Connect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub envelope_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub status_changed_date_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub recipient_statuses: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse an authenticated body. The top level has to be a JSON object.
pub fn decode(bytes: &[u8]) -> Result<NotificationRecord, DecodeError> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(bytes)?;
    Ok(serde_json::from_value(serde_json::Value::Object(object))?)
}
