//! Process-wide feature flags.
//!
//! Flags can be switched programmatically or through environment variables.
//! Consumers read them once when a run starts and carry the snapshot
//! through the run; nothing re-reads a flag mid-algorithm.

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that turns on the contention term of the edge cost.
pub const CONTENTION_ENV: &str = "AC_RECONCILE_CONTENTION";

static CONTENTION: AtomicBool = AtomicBool::new(false);

/// Enable the contention term globally.
pub fn enable_contention() {
    CONTENTION.store(true, Ordering::Relaxed);
}

/// Disable the contention term globally (the environment variable still applies).
pub fn disable_contention() {
    CONTENTION.store(false, Ordering::Relaxed);
}

/// Check if the contention term is enabled.
pub fn contention_enabled() -> bool {
    CONTENTION.load(Ordering::Relaxed)
        || std::env::var(CONTENTION_ENV)
            .map(|v| env_value_is_truthy(&v))
            .unwrap_or(false)
}

fn env_value_is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_values() {
        assert!(env_value_is_truthy("1"));
        assert!(env_value_is_truthy("true"));
        assert!(env_value_is_truthy("yes"));
        assert!(!env_value_is_truthy("0"));
        assert!(!env_value_is_truthy("FALSE"));
        assert!(!env_value_is_truthy("  "));
    }

    #[test]
    fn toggle() {
        enable_contention();
        assert!(contention_enabled());
        disable_contention();
        // The env var may be set by the surrounding environment; only the
        // programmatic side is asserted here.
        assert!(!CONTENTION.load(Ordering::Relaxed));
    }
}
