//! Token Security Manager: the full lifecycle of the stored session record.
//!
//! Persistence format under the primary key is a JSON `EncryptedPayload`
//! when encryption is available, or a plain JSON `TokenRecord` in the
//! explicit degraded fallback. Reads accept both, so records written before
//! encryption became available (or under a rotated key) still parse.

use std::sync::Arc;

use whitecross_crypto::{EncryptedPayload, EncryptionManager};
use whitecross_storage::SharedStore;

use crate::clock::{Clock, SystemClock};
use crate::error::AuthError;
use crate::types::{TokenRecord, UserProfile};

/// Primary store key holding the session record.
pub const AUTH_DATA_STORAGE_KEY: &str = "auth_data";

/// Pre-encryption storage keys, cleared on every `clear_token`. Ordered
/// migration sources; retire entries here as old clients age out.
pub const LEGACY_STORAGE_KEYS: &[&str] = &["auth_token", "token", "authToken", "user"];

/// Default token lifetime: 24 hours.
pub const DEFAULT_TOKEN_LIFETIME_MS: i64 = 24 * 60 * 60 * 1000;

/// Advisory warning threshold before expiry. Fixed; does not scale with the
/// token's lifetime.
pub const EXPIRY_WARNING_BUFFER_MS: i64 = 5 * 60 * 1000;

/// Manages storage, retrieval, mutation, and clearing of the session token.
///
/// One instance per session context, explicitly constructed with its store
/// (and optionally a [`Clock`]) rather than held as a global, so tests get
/// isolated instances. Call [`init`] once before use; without it the manager
/// still works, in plain-JSON fallback mode.
///
/// [`init`]: TokenSecurityManager::init
pub struct TokenSecurityManager {
    store: SharedStore,
    crypto: EncryptionManager,
    clock: Arc<dyn Clock>,
}

impl TokenSecurityManager {
    /// Manager on the given store with the system wall clock.
    pub fn new(store: SharedStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Manager with an injected time source, for deterministic tests.
    pub fn with_clock(store: SharedStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            crypto: EncryptionManager::new(store.clone()),
            store,
            clock,
        }
    }

    /// Initialize the underlying encryption manager. Never fails; a failed
    /// init leaves the manager in plain-JSON fallback mode.
    pub async fn init(&mut self) {
        self.crypto.init().await;
    }

    /// True iff session records are being encrypted at rest.
    pub fn is_encryption_available(&self) -> bool {
        self.crypto.is_encryption_available()
    }

    /// Persist a new session record.
    ///
    /// `lifetime_ms` of `None` means [`DEFAULT_TOKEN_LIFETIME_MS`]. The
    /// record is encrypted when encryption is available; otherwise it is
    /// written as plain JSON with a logged warning. A store write failure is
    /// a hard error the caller must react to — a session the client cannot
    /// later prove is worse than a failed login.
    pub async fn store_token(
        &self,
        token: &str,
        user: UserProfile,
        lifetime_ms: Option<i64>,
    ) -> Result<(), AuthError> {
        let lifetime = lifetime_ms.unwrap_or(DEFAULT_TOKEN_LIFETIME_MS);
        if lifetime <= 0 {
            return Err(AuthError::InvalidLifetime(lifetime));
        }
        let now = self.clock.now_ms();
        let record = TokenRecord {
            token: token.to_owned(),
            user,
            issued_at: now,
            expires_at: now + lifetime,
        };
        let json = serde_json::to_string(&record)?;
        let value = if self.crypto.is_encryption_available() {
            let payload = self.crypto.encrypt_data(&json)?;
            serde_json::to_string(&payload)?
        } else {
            tracing::warn!("encryption unavailable, storing session record as plain JSON");
            json
        };
        self.store.set(AUTH_DATA_STORAGE_KEY, &value).await?;
        Ok(())
    }

    /// Read the current session record, or `None`.
    ///
    /// Never errors. An absent key is `None` immediately; an expired,
    /// corrupt, undecryptable, or unparseable record funnels through one
    /// cleanup exit that clears storage before returning `None`, so a bad
    /// record is never left behind to be retried. A record within
    /// [`EXPIRY_WARNING_BUFFER_MS`] of expiry logs an advisory warning and
    /// is still returned.
    pub async fn get_valid_token(&self) -> Option<TokenRecord> {
        let raw = match self.store.get(AUTH_DATA_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("session read failed: {e}");
                return None;
            }
        };

        match self.decode_and_validate(&raw) {
            Ok(record) => {
                let remaining = record.expires_at - self.clock.now_ms();
                if remaining < EXPIRY_WARNING_BUFFER_MS {
                    tracing::warn!(remaining_ms = remaining, "session token close to expiring");
                }
                Some(record)
            }
            Err(e) => {
                // The single cleanup exit for every unreadable-record path.
                tracing::warn!("stored session record invalid, clearing: {e}");
                self.clear_token().await;
                None
            }
        }
    }

    /// Decode the raw stored value and check expiry against a fresh `now`.
    fn decode_and_validate(&self, raw: &str) -> Result<TokenRecord, AuthError> {
        let record = self.decode_record(raw)?;
        if record.expires_at <= self.clock.now_ms() {
            return Err(AuthError::Expired);
        }
        Ok(record)
    }

    /// Parse a stored value as an encrypted payload first, falling back to a
    /// plain record for migration compatibility. The fallback covers records
    /// written before encryption became available and records stranded by a
    /// key rotation.
    fn decode_record(&self, raw: &str) -> Result<TokenRecord, AuthError> {
        if self.crypto.is_encryption_available() {
            if let Ok(payload) = serde_json::from_str::<EncryptedPayload>(raw) {
                if let Ok(plain) = self.crypto.decrypt_data(&payload) {
                    return Ok(serde_json::from_str(&plain)?);
                }
            }
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether a valid (unexpired, readable) session record exists.
    pub async fn is_token_valid(&self) -> bool {
        self.get_valid_token().await.is_some()
    }

    /// User profile from the current valid record, or `None`.
    pub async fn get_current_user(&self) -> Option<UserProfile> {
        self.get_valid_token().await.map(|record| record.user)
    }

    /// Token string from the current valid record, or `None`.
    pub async fn get_token(&self) -> Option<String> {
        self.get_valid_token().await.map(|record| record.token)
    }

    /// Expiry (epoch ms) of the current valid record, or `None`.
    pub async fn get_token_expiration(&self) -> Option<i64> {
        self.get_valid_token().await.map(|record| record.expires_at)
    }

    /// Replace the user profile on the current record, keeping the token
    /// string and the remaining lifetime. The expiry clock is not reset: the
    /// record is re-stored with `expires_at - now` as its lifetime. Silent
    /// no-op when no valid record exists.
    pub async fn update_user(&self, user: UserProfile) -> Result<(), AuthError> {
        let Some(record) = self.get_valid_token().await else {
            tracing::debug!("update_user with no active session, ignoring");
            return Ok(());
        };
        let remaining = record.expires_at - self.clock.now_ms();
        self.store_token(&record.token, user, Some(remaining)).await
    }

    /// Remove the primary key and every legacy key. Idempotent. Removal
    /// failures are logged rather than returned; the fail-safe read path
    /// relies on clearing never erroring.
    pub async fn clear_token(&self) {
        for key in std::iter::once(AUTH_DATA_STORAGE_KEY).chain(LEGACY_STORAGE_KEYS.iter().copied())
        {
            if let Err(e) = self.store.remove(key).await {
                tracing::warn!(key, "failed to remove storage key: {e}");
            }
        }
    }
}
