use serde::{Deserialize, Serialize};

/// At-rest form of an encrypted blob.
///
/// Serialized camelCase so records written by earlier clients parse
/// unchanged. `created_at` is diagnostic metadata only; expiration decisions
/// never read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptedPayload {
    /// Base64 AES-GCM ciphertext (includes the authentication tag).
    pub ciphertext: String,
    /// Base64 12-byte IV. Not secret, but required for decryption and unique
    /// per encryption call.
    pub iv: String,
    /// Epoch milliseconds when the payload was produced.
    pub created_at: i64,
}
