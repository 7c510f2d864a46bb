//! Parsing of per-index palette overrides.

use log::debug;

use crate::color::Color;

/// Parse a whitespace-separated list of `index=colorspec` tokens.
///
/// A malformed token (missing `=`, non-integer index, unparsable color) is
/// skipped rather than failing the whole list: one bad override should not
/// block colorizing the rest of the keyboard. Skips are noted at debug
/// level only.
pub fn parse(raw: &str) -> Vec<(usize, Color)> {
    let mut parsed = Vec::new();
    for token in raw.split_whitespace() {
        let Some((index, spec)) = token.split_once('=') else {
            debug!("skipping override token without '=': {token:?}");
            continue;
        };
        let Ok(index) = index.parse::<usize>() else {
            debug!("skipping override token with non-integer index: {token:?}");
            continue;
        };
        let Ok(color) = spec.parse::<Color>() else {
            debug!("skipping override token with unparsable color: {token:?}");
            continue;
        };
        parsed.push((index, color));
    }
    parsed
}
