//! Palette reconciliation: mapping an arbitrary-length source color list
//! onto a device's fixed palette size.

pub mod generate;
pub mod kmeans;
pub mod reduce;

pub use generate::generate;
pub use reduce::reduce;

use crate::color::Color;
use crate::error::Error;

/// Reconcile a source color list against a device palette of `size` slots.
///
/// Routes to the cyclic-gradient generator when the source fits inside the
/// palette and to the clustering reducer when it does not. A zero-size
/// palette reconciles to an empty list (nothing to drive).
///
/// `seed` pins the reducer's clustering for reproducible output; `None`
/// draws entropy, so repeated runs may order centroids differently.
pub fn reconcile(
    source: &[Color],
    size: usize,
    seed: Option<u64>,
) -> Result<Vec<Color>, Error> {
    if source.is_empty() {
        return Err(Error::EmptyInput);
    }
    if size == 0 {
        return Ok(Vec::new());
    }
    if source.len() <= size {
        generate(source, size)
    } else {
        reduce(source, size, seed)
    }
}
