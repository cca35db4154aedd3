//! Skein Eval - formatting and method dispatch over Skein text values.
//!
//! This crate provides:
//! - `apply_format`: the `%` operator for text and bytes templates
//! - `format_with_spec`: the `__format__` hook for text
//! - `call_method`: name-based method dispatch on text and bytes receivers
//! - `StrRuntime`: the interner and compatibility mode a host runtime holds
//!
//! # Re-exports
//!
//! The value types come from `skein_value` and are re-exported here:
//! - `Value`, `Text`, `Bytes`, `RuntimeObject`
//! - `StrError`, `StrResult`, `ErrorCategory`

mod format;
mod methods;
mod runtime;

use std::sync::Once;

pub use format::{apply_format, format_with_spec, FormatTarget};
pub use methods::{call_method, SEQUENCE_METHODS};
pub use runtime::{StrRuntime, StrRuntimeBuilder};

pub use skein_ir::CompatMode;
pub use skein_value::{
    Bytes, CompareOp, ErrorCategory, RuntimeObject, StrError, StrResult, Text, TextInterner,
    Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Set `RUST_LOG=skein_eval=trace` (or `skein_value=trace`) to see format
/// tokens, method calls and interner activity.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
