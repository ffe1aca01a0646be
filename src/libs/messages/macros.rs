//! Message display and logging macros.
//!
//! Every macro checks [`is_debug_mode`] once per call site. In debug mode
//! (`GPLAN_DEBUG` or `RUST_LOG` set) messages go through `tracing` so they
//! carry timestamps and levels; otherwise they are printed plainly, errors
//! on stderr.
//!
//! ```rust
//! use gplan::{msg_info, msg_success, msg_error};
//! use gplan::libs::messages::Message;
//!
//! msg_success!(Message::TaskUpdated(3));
//! msg_info!(Message::NoTasksFound);
//! msg_error!(Message::TaskNotFoundWithId(9));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// True when `GPLAN_DEBUG` or `RUST_LOG` is set. Cached after the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("GPLAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message, optionally surrounded by blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
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

/// Prints an error message with ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Debug-only message. Suppressed entirely outside debug mode.
///
/// ```rust
/// use gplan::msg_debug;
/// use gplan::libs::messages::Message;
///
/// msg_debug!(Message::TaskIdAllocated(3));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
///
/// ```rust
/// use anyhow::Result;
/// use gplan::{msg_bail_anyhow, libs::messages::Message};
///
/// fn check(priority: i32) -> Result<()> {
///     if !(1..=4).contains(&priority) {
///         msg_bail_anyhow!(Message::InvalidPriority(priority));
///     }
///     Ok(())
/// }
/// assert!(check(7).is_err());
/// ```
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
