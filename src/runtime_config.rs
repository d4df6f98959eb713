//! Runtime configuration from environment variables.
//!
//! `CUSTODIA_STACK_SIZE` sets the stack size for server coroutines, in
//! decimal (`32768`) or hex (`0x8000`). Default: 64 KB, enough headroom for
//! the serde document encoding done inside a request.

use std::env;

const STACK_SIZE_VAR: &str = "CUSTODIA_STACK_SIZE";
const DEFAULT_STACK_SIZE: usize = 0x10000;

/// Runtime configuration loaded once at startup.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Stack size for server coroutines in bytes.
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let stack_size = env::var(STACK_SIZE_VAR)
            .ok()
            .and_then(|val| parse_stack_size(&val))
            .unwrap_or(DEFAULT_STACK_SIZE);
        Self { stack_size }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

fn parse_stack_size(val: &str) -> Option<usize> {
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
