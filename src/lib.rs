//! LED palette toolkit for Dygma Defy keyboards.
//!
//! Reads a keyboard's current LED palette over serial, reconciles an
//! arbitrary-length source color list against the palette's fixed size,
//! applies an optional effect, intensity and per-index overrides, and
//! writes the result back.

pub mod color;
pub mod device;
pub mod effect;
pub mod error;
pub mod palette;
pub mod run;

pub use color::{Color, ParseColorError};
pub use device::DeviceChannel;
pub use effect::{EffectKind, Pipeline};
pub use error::{DeviceError, Error};
pub use palette::reconcile;
pub use run::{Options, colorize_all, colorize_device};
