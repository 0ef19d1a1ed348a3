use std::sync::OnceLock;

pub mod commands;
pub mod soundbank;

/// Application-level verbosity
pub static VERBOSE: OnceLock<bool> = OnceLock::new();

/// Whether per-item progress chatter is enabled.
pub fn verbose() -> bool {
    VERBOSE.get().copied().unwrap_or(false)
}
