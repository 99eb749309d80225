use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

static TIMEOUT_SECS: AtomicU64 = AtomicU64::new(DEFAULT_TIMEOUT_SECS);

/// Sets the timeout applied to every request sent after this call and
/// returns the previous one. `0` disables the timeout.
pub fn set_timeout(seconds: u64) -> Duration {
    let previous = TIMEOUT_SECS.swap(seconds, Ordering::Relaxed);
    Duration::from_secs(previous)
}

pub fn get_timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS.load(Ordering::Relaxed))
}
