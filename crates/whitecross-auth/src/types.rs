use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile payload attached to a session.
///
/// The token subsystem never interprets these fields beyond serialization;
/// they ride along for callers like the account menu. Unknown fields land in
/// `extra` so a round trip through storage loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            role: None,
            extra: Map::new(),
        }
    }
}

/// Stored snapshot of an authentication session.
///
/// The `token` string is opaque; this crate never parses or validates it.
/// Serialized camelCase so the plain-JSON fallback format matches records
/// written by earlier clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub token: String,
    pub user: UserProfile,
    /// Epoch milliseconds when the record was created.
    pub issued_at: i64,
    /// Epoch milliseconds after which the record is invalid. Always greater
    /// than `issued_at`.
    pub expires_at: i64,
}
