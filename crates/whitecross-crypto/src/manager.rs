//! Per-installation AES-256-GCM encryption manager.
//!
//! The key is loaded from (or generated into) the key-value store at init.
//! Init failures are non-fatal and leave the manager in a degraded
//! no-encryption state; encrypt/decrypt on an unavailable manager are hard
//! errors, so callers gate on [`EncryptionManager::is_encryption_available`].

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64ct::{Base64, Encoding};
use chrono::Utc;
use zeroize::Zeroize;

use whitecross_storage::SharedStore;

use crate::error::CryptoError;
use crate::payload::EncryptedPayload;
use crate::{AES_GCM_IV_LENGTH, AES_KEY_LENGTH};

/// Store key holding the base64 raw export of the installation key.
pub const ENCRYPTION_KEY_STORAGE_KEY: &str = "auth_encryption_key";

/// Generate a random 12-byte IV for AES-GCM.
fn generate_iv() -> Result<[u8; AES_GCM_IV_LENGTH], CryptoError> {
    let mut iv = [0u8; AES_GCM_IV_LENGTH];
    getrandom::getrandom(&mut iv).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
    Ok(iv)
}

/// Symmetric encrypt/decrypt of UTF-8 strings under one installation key.
///
/// Construct with [`EncryptionManager::new`] and call [`init`] once per
/// process; one instance per session context. The cipher handle is written
/// once at init and only read afterwards.
///
/// [`init`]: EncryptionManager::init
pub struct EncryptionManager {
    store: SharedStore,
    cipher: Option<Aes256Gcm>,
}

impl EncryptionManager {
    /// Create an uninitialized manager. No key is loaded until [`init`] runs.
    ///
    /// [`init`]: EncryptionManager::init
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            cipher: None,
        }
    }

    /// Load the installation key from the store, or generate and persist a
    /// new one. Idempotent: a manager that already holds a key returns
    /// immediately.
    ///
    /// Never fails. Any problem (store unavailable, malformed stored key,
    /// RNG failure, key write failure) is logged and leaves the manager in
    /// degraded no-encryption mode.
    pub async fn init(&mut self) {
        if self.cipher.is_some() {
            return;
        }
        match self.load_or_generate_key().await {
            Ok(cipher) => self.cipher = Some(cipher),
            Err(e) => {
                tracing::error!("encryption unavailable, continuing without it: {e}");
            }
        }
    }

    async fn load_or_generate_key(&self) -> Result<Aes256Gcm, CryptoError> {
        let existing = self
            .store
            .get(ENCRYPTION_KEY_STORAGE_KEY)
            .await
            .map_err(|e| CryptoError::KeyStorage(e.to_string()))?;

        if let Some(encoded) = existing {
            let mut raw = Base64::decode_vec(&encoded)
                .map_err(|e| CryptoError::Base64Decode(e.to_string()))?;
            let got = raw.len();
            if got != AES_KEY_LENGTH {
                raw.zeroize();
                return Err(CryptoError::InvalidKeyLength {
                    expected: AES_KEY_LENGTH,
                    got,
                });
            }
            let cipher = Aes256Gcm::new_from_slice(&raw)
                .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
            raw.zeroize();
            return Ok(cipher);
        }

        let mut raw = [0u8; AES_KEY_LENGTH];
        getrandom::getrandom(&mut raw).map_err(|e| CryptoError::RngFailed(e.to_string()))?;
        let encoded = Base64::encode_string(&raw);
        // Persist before use: a key that never reaches the store would strand
        // every record written under it.
        self.store
            .set(ENCRYPTION_KEY_STORAGE_KEY, &encoded)
            .await
            .map_err(|e| CryptoError::KeyStorage(e.to_string()))?;
        let cipher = Aes256Gcm::new_from_slice(&raw)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        raw.zeroize();
        Ok(cipher)
    }

    /// True iff a key was successfully loaded or generated.
    pub fn is_encryption_available(&self) -> bool {
        self.cipher.is_some()
    }

    /// Encrypt a UTF-8 string with a fresh random IV.
    pub fn encrypt_data(&self, plaintext: &str) -> Result<EncryptedPayload, CryptoError> {
        let cipher = self.cipher.as_ref().ok_or(CryptoError::NoKey)?;
        let iv = generate_iv()?;
        let nonce = Nonce::from_slice(&iv);
        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;
        Ok(EncryptedPayload {
            ciphertext: Base64::encode_string(&ciphertext),
            iv: Base64::encode_string(&iv),
            created_at: Utc::now().timestamp_millis(),
        })
    }

    /// Decrypt a payload produced by [`encrypt_data`]. Tampered ciphertext,
    /// a wrong key, or a wrong IV all fail the GCM authentication check and
    /// error here; callers treat that as "no valid data", not a retry.
    ///
    /// [`encrypt_data`]: EncryptionManager::encrypt_data
    pub fn decrypt_data(&self, payload: &EncryptedPayload) -> Result<String, CryptoError> {
        let cipher = self.cipher.as_ref().ok_or(CryptoError::NoKey)?;
        let iv = Base64::decode_vec(&payload.iv)
            .map_err(|e| CryptoError::Base64Decode(e.to_string()))?;
        if iv.len() != AES_GCM_IV_LENGTH {
            return Err(CryptoError::InvalidIvLength {
                expected: AES_GCM_IV_LENGTH,
                got: iv.len(),
            });
        }
        let ciphertext = Base64::decode_vec(&payload.ciphertext)
            .map_err(|e| CryptoError::Base64Decode(e.to_string()))?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(&iv), ciphertext.as_slice())
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;
        String::from_utf8(plaintext)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
    }
}
