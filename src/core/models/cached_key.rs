use serde::{Deserialize, Serialize};

/// The single record held by the public key cache.
///
/// On disk this is a JSON object with the body as a standard base64
/// string: `{"keyId": "ABC123", "body": "LS0tLS1CRUdJTi...", "cachedAt": "..."}`.
/// A `null` or missing body decodes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedKey {
    #[serde(default)]
    pub key_id: String,
    #[serde(default, with = "base64_body")]
    pub body: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CachedKey {
    /// Build a fresh record stamped with the current time.
    pub fn new(key_id: &str, body: Vec<u8>) -> Self {
        Self {
            key_id: key_id.to_string(),
            body,
            cached_at: Some(chrono::Utc::now()),
        }
    }

    /// Whether this record may be served for `key_id`.
    ///
    /// An empty body never counts, even when the id matches.
    pub fn is_hit_for(&self, key_id: &str) -> bool {
        self.key_id == key_id && !self.body.is_empty()
    }
}

mod base64_body {
    use base64::prelude::{BASE64_STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(body: &[u8], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&BASE64_STANDARD.encode(body))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(de)? {
            Some(s) => BASE64_STANDARD
                .decode(s.as_bytes())
                .map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
