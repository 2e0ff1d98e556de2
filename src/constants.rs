//! Application-wide constants
//!
//! Centralizes magic numbers and fixed strings so they are discoverable.

/// Objective the form starts with. Compiling with this value is rejected.
pub const OBJECTIVE_PLACEHOLDER: &str = "Write an email for";

/// Where users can create an API key for the completion service.
pub const API_KEY_URL: &str = "https://platform.openai.com/account/api-keys";

/// Completion endpoint used when the config does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/completions";

/// Text-completion model used when the config does not override it.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Upper bound on generated tokens per completion.
pub const DEFAULT_MAX_TOKENS: u32 = 400;

/// Request timeout for the completion call in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Error message display duration in seconds before auto-dismiss.
pub const ERROR_TTL_SECS: u64 = 5;

/// How long the event loop waits for input before re-checking timers.
pub const INPUT_POLL_MS: u64 = 150;

// === UI Constants ===

/// Width of the credentials sidebar in columns.
pub const SIDEBAR_WIDTH: u16 = 36;

/// Below this terminal width the sidebar is folded into the main column.
pub const MIN_SIDEBAR_VIEW_WIDTH: u16 = 100;

/// Title shown in the top status bar.
pub const APP_TITLE: &str = "Email Prompt Generator";
