//! Gradient palette generation from a sparse set of anchor colors.

use crate::color::Color;
use crate::error::Error;

/// Expand `anchors` into exactly `size` colors.
///
/// Anchor `j` of `m` lands verbatim at slot `j * size / m`; the slots
/// between consecutive anchors are per-channel linear blends by fractional
/// position. The sequence is cyclic: the last anchor interpolates back
/// toward the first, so the palette wraps smoothly.
///
/// `anchors.len() == size` returns the input unchanged and a single anchor
/// is replicated across every slot. Deterministic for identical input.
pub fn generate(anchors: &[Color], size: usize) -> Result<Vec<Color>, Error> {
    let m = anchors.len();
    if m == 0 {
        return Err(Error::EmptyInput);
    }
    if m > size {
        return Err(Error::Preconditions {
            input: m,
            target: size,
        });
    }
    if m == size {
        return Ok(anchors.to_vec());
    }

    let mut palette = vec![Color::BLACK; size];
    for j in 0..m {
        let start = j * size / m;
        let end = if j + 1 == m { size } else { (j + 1) * size / m };
        let from = anchors[j];
        let to = anchors[(j + 1) % m];
        let span = end - start;
        for (offset, slot) in palette[start..end].iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let t = offset as f64 / span as f64;
            *slot = from.blend(to, t);
        }
    }
    Ok(palette)
}
