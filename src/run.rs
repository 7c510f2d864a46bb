//! Per-device orchestration: query, reconcile, post-process, write back.

use std::io::{Read, Write};

use log::error;

use crate::color::Color;
use crate::device::DeviceChannel;
use crate::effect::{EffectKind, Pipeline, overrides};
use crate::error::Error;
use crate::palette;

/// Default device path when the configuration names none.
pub const DEFAULT_DEVICE: &str = "/dev/ttyACM0";

/// Options for a colorize run, resolved from the host's flat configuration.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub effect: EffectKind,
    pub intensity: f64,
    pub overrides: Vec<(usize, Color)>,
    /// Pins the reducer's clustering for reproducible palettes.
    pub seed: Option<u64>,
}

impl Options {
    /// Resolve options from a string-keyed configuration lookup.
    ///
    /// Handling is lenient throughout: an unknown effect name means no
    /// effect, an unparsable intensity falls back to 0.0 and malformed
    /// override tokens are dropped.
    pub fn from_config<'a, F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        Self {
            effect: EffectKind::from_name(lookup("effect").unwrap_or_default()),
            intensity: lookup("intensity")
                .and_then(|value| value.parse::<f64>().ok())
                .unwrap_or(0.0),
            overrides: overrides::parse(lookup("override").unwrap_or_default()),
            seed: None,
        }
    }
}

/// Split the configured `devices` value into paths, defaulting to
/// [`DEFAULT_DEVICE`] when unset or blank.
pub fn devices_from_config(value: Option<&str>) -> Vec<String> {
    match value {
        Some(raw) if !raw.trim().is_empty() => {
            raw.split_whitespace().map(str::to_string).collect()
        }
        _ => vec![DEFAULT_DEVICE.to_string()],
    }
}

/// Colorize one keyboard over an already-open channel.
///
/// Queries the palette to learn its size, reconciles the source colors
/// against it, runs the effect pipeline and writes the result back. The
/// query completes before the derived set is sent.
pub fn colorize_channel<T: Read + Write>(
    channel: &mut DeviceChannel<T>,
    source: &[Color],
    options: &Options,
) -> Result<(), Error> {
    let palette = channel.query_palette()?;
    let mut colors = palette::reconcile(source, palette.len(), options.seed)?;
    let pipeline = Pipeline {
        effect: options.effect,
        intensity: options.intensity,
        overrides: options.overrides.clone(),
    };
    pipeline.apply(&mut colors);
    channel.set_palette(&colors)
}

/// Open the device at `path`, colorize it and release the connection.
pub fn colorize_device(path: &str, source: &[Color], options: &Options) -> Result<(), Error> {
    let mut channel = DeviceChannel::open(path)?;
    colorize_channel(&mut channel, source, options)
}

/// Colorize every device in `paths`, returning how many succeeded.
///
/// One device's failure is logged and must not prevent attempting the
/// remaining devices.
pub fn colorize_all<I, S>(paths: I, source: &[Color], options: &Options) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut colorized = 0;
    for path in paths {
        let path = path.as_ref();
        match colorize_device(path, source, options) {
            Ok(()) => colorized += 1,
            Err(err) => error!("failed to colorize the keyboard at {path}: {err}"),
        }
    }
    colorized
}
