//! Message macros with debug-mode routing.
//!
//! In normal mode the macros write plain lines to the console. When debug
//! mode is on they go through `tracing` instead, so diagnostics carry
//! timestamps and levels and land on stderr next to the rest of the logs.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either of these environment variables is set:
//! - **`TOGGL_REPORTER_DEBUG`**: application-specific switch
//! - **`RUST_LOG`**: standard logging filter
//!
//! The check runs once and is cached for the rest of the process.
//!
//! ## Macros
//!
//! - **`msg_print!`**: general message on stdout
//! - **`msg_success!`**: success notification with ✅ prefix
//! - **`msg_debug!`**: debug-only message, silent in normal mode
//! - **`msg_error_anyhow!`**: builds an `anyhow::Error` from a message
//!
//! ```rust
//! use toggl_reporter::msg_print;
//! use toggl_reporter::libs::messages::Message;
//!
//! msg_print!(Message::WorkspaceIdInvalid);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Name of the application-specific debug switch.
pub const DEBUG_ENV_VAR: &str = "TOGGL_REPORTER_DEBUG";

/// Returns `true` when debug logging was requested through the environment.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV_VAR).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message, routed to `tracing::info!` in debug mode.
///
/// ```rust,ignore
/// msg_print!(Message::ConfigModuleToggl);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix. Prints nothing in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message.
///
/// ```rust,ignore
/// return Err(msg_error_anyhow!(Message::TogglRequestFailed(401)));
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}
