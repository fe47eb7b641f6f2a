//! Renderer configuration
//!
//! Provides compile-time defaults with runtime environment overrides.
//!
//! # Configuration Priority (highest wins)
//!
//! 1. Environment variables (runtime)
//! 2. User's merr_config.rs (compile-time, via `MERR_CONFIG_RS`)
//! 3. Library defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use merr::config::RenderConfig;
//!
//! let config = RenderConfig::from_env().prefix_pad(256);
//! config.validate()?;
//! ```

pub mod defaults;

use std::sync::OnceLock;

use merr_core::env::env_get;
use merr_core::{MerrError, MerrResult};

/// Renderer configuration with builder pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Size of the temporary buffer used when the caller's buffer is too
    /// small for a description
    pub strerror_buf_size: usize,
    /// Allowance added to the prefix length when even "file:line: " does
    /// not fit, standing in for the description that was not rendered
    pub prefix_pad: usize,
    /// Message rendered for the software-bug code
    pub bug_message: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl RenderConfig {
    /// Create config from compile-time defaults with environment overrides.
    ///
    /// Environment variables (all optional):
    /// - `MERR_STRERROR_BUF_SIZE` - Temporary description buffer size
    /// - `MERR_PREFIX_PAD` - Needed-size allowance when the prefix overflows
    pub fn from_env() -> Self {
        Self {
            strerror_buf_size: env_get("MERR_STRERROR_BUF_SIZE", defaults::STRERROR_BUF_SIZE),
            prefix_pad: env_get("MERR_PREFIX_PAD", defaults::PREFIX_PAD),
            bug_message: defaults::BUG_MESSAGE,
        }
    }

    /// Create config with explicit defaults (no env override).
    pub fn new() -> Self {
        Self {
            strerror_buf_size: defaults::STRERROR_BUF_SIZE,
            prefix_pad: defaults::PREFIX_PAD,
            bug_message: defaults::BUG_MESSAGE,
        }
    }

    /// Process-wide configuration, read from the environment once.
    ///
    /// Falls back to [`new`](Self::new) if the environment holds values
    /// that do not validate.
    pub fn global() -> &'static RenderConfig {
        static GLOBAL: OnceLock<RenderConfig> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let config = Self::from_env();
            match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    merr_core::kwarn!("merr: ignoring environment overrides: {}", e);
                    Self::new()
                }
            }
        })
    }

    // Builder methods

    pub fn strerror_buf_size(mut self, size: usize) -> Self {
        self.strerror_buf_size = size;
        self
    }

    pub fn prefix_pad(mut self, pad: usize) -> Self {
        self.prefix_pad = pad;
        self
    }

    pub fn bug_message(mut self, msg: &'static str) -> Self {
        self.bug_message = msg;
        self
    }

    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> MerrResult<()> {
        if self.strerror_buf_size < 64 {
            return Err(MerrError::Config("strerror_buf_size must be >= 64"));
        }
        if self.strerror_buf_size > 1 << 20 {
            return Err(MerrError::Config("strerror_buf_size must be <= 1MB"));
        }
        if self.prefix_pad == 0 {
            return Err(MerrError::Config("prefix_pad must be > 0"));
        }
        if self.bug_message.is_empty() {
            return Err(MerrError::Config("bug_message must not be empty"));
        }
        Ok(())
    }

    /// Print configuration (for debugging)
    pub fn print(&self) {
        eprintln!("merr render configuration:");
        eprintln!("  strerror_buf_size:  {}", self.strerror_buf_size);
        eprintln!("  prefix_pad:         {}", self.prefix_pad);
        eprintln!("  bug_message:        {:?}", self.bug_message);
    }
}
