//! Proportional palette reduction via clustering.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::color::Color;
use crate::error::Error;
use crate::palette::kmeans::{self, Point};

/// Collapse `colors` into exactly `k` representative colors.
///
/// Clustering runs in 3-channel RGB space; the white channel is excluded
/// and reduced colors carry `w = 0`. Centroid channels round half-up to
/// the nearest byte.
///
/// K-means has no canonical initialization, so output order (and, for
/// overlapping clusters, membership) is only reproducible when `seed` is
/// pinned. `None` draws fresh entropy on every call.
pub fn reduce(colors: &[Color], k: usize, seed: Option<u64>) -> Result<Vec<Color>, Error> {
    if colors.is_empty() || k == 0 {
        return Err(Error::EmptyInput);
    }
    if k >= colors.len() {
        return Err(Error::Preconditions {
            input: colors.len(),
            target: k,
        });
    }

    let points: Vec<Point> = colors
        .iter()
        .map(|color| [f64::from(color.r), f64::from(color.g), f64::from(color.b)])
        .collect();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let centroids = kmeans::cluster(&points, k, &mut rng);

    Ok(centroids
        .into_iter()
        .map(|point| Color::new(round_channel(point[0]), round_channel(point[1]), round_channel(point[2])))
        .collect())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_channel(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}
