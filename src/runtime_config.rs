//! # Runtime Configuration
//!
//! Coroutine runtime settings read from the environment.
//!
//! ### `PETSTORE_STACK_SIZE`
//!
//! Stack size for each connection coroutine. Decimal (`32768`) or
//! hexadecimal (`0x8000`). Default `0x8000` (32 KB). Unparseable values fall
//! back to the default.
//!
//! ```rust
//! use petstore::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! assert!(config.stack_size > 0);
//! ```

use std::env;

pub const DEFAULT_STACK_SIZE: usize = 0x8000;

#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes
    pub stack_size: usize,
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let stack_size = env::var("PETSTORE_STACK_SIZE")
            .ok()
            .and_then(|v| parse_stack_size(&v))
            .unwrap_or(DEFAULT_STACK_SIZE);
        RuntimeConfig { stack_size }
    }

    /// Apply to the global `may` scheduler. Must run before the server starts.
    pub fn apply(&self) {
        may::config().set_stack_size(self.stack_size);
        tracing::debug!(stack_size = self.stack_size, "Coroutine stack size configured");
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal size. Zero is rejected.
pub fn parse_stack_size(value: &str) -> Option<usize> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    };
    parsed.filter(|n| *n > 0)
}
