//! Environment variable utilities
//!
//! Generic `env_get<T>` for parsing environment overrides with defaults.
//!
//! # Usage
//!
//! ```ignore
//! use merr_core::env::{env_get, env_get_bool};
//!
//! let buf: usize = env_get("MERR_STRERROR_BUF_SIZE", 1000);
//! let flush: bool = env_get_bool("MERR_FLUSH_EPRINT", false);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default
///
/// Unset and unparsable values both fall back to `default`.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    env_get_opt(key).unwrap_or(default)
}

/// Get environment variable as boolean
///
/// Accepts: "1", "true", "yes", "on" (case-insensitive) as true.
/// Any other set value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Get environment variable as optional value
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_get_default() {
        let val: usize = env_get("__MERR_TEST_UNSET_VAR__", 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn test_env_get_bool_default() {
        assert!(env_get_bool("__MERR_TEST_UNSET_VAR__", true));
        assert!(!env_get_bool("__MERR_TEST_UNSET_VAR__", false));
    }

    #[test]
    fn test_env_get_opt_unset() {
        let val: Option<u64> = env_get_opt("__MERR_TEST_UNSET_VAR__");
        assert!(val.is_none());
    }
}
