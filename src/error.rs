use std::io;

use thiserror::Error;

/// Errors surfaced by a single reconciliation/device operation.
///
/// Per-token problems (malformed overrides, a truncated palette response)
/// are recovered locally and never become error values.
#[derive(Debug, Error)]
pub enum Error {
    /// No source colors were given to reconcile.
    #[error("no source colors to reconcile")]
    EmptyInput,

    /// The reducer was invoked with a target size not smaller than the input.
    #[error("reducer needs more input colors than targets ({input} <= {target})")]
    Preconditions { input: usize, target: usize },

    /// Unified device-communication failure carrying the underlying cause.
    #[error("device communication failed: {0}")]
    Device(#[from] DeviceError),
}

/// Transport-level failure on the serial link.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("failed to open serial port: {0}")]
    Open(#[source] serialport::Error),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("response contained non-ASCII bytes")]
    Encoding,

    #[error("unparsable palette response token {0:?}")]
    Response(String),
}
