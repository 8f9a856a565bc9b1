use chrono::Utc;

/// Time source for expiry decisions.
///
/// Injected into [`TokenSecurityManager`] so tests can drive the clock
/// instead of sleeping through real lifetimes.
///
/// [`TokenSecurityManager`]: crate::TokenSecurityManager
pub trait Clock: Send + Sync {
    /// Current time as epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
