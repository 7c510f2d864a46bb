//! K-means clustering over 3D color points.
//!
//! Kept as a standalone `cluster` function so the reducer is not coupled to
//! one particular clustering routine.

use rand::Rng;
use rand::seq::index::sample;

/// A color treated as a point in 3D space.
pub type Point = [f64; 3];

/// Lloyd's iterations stop here even without convergence.
const MAX_ROUNDS: usize = 50;

/// Partition `points` into `k` clusters and return the cluster centroids.
///
/// Initial centroids are sampled from the input without replacement; a
/// cluster that empties out is reseeded from the point currently farthest
/// from its centroid. Iteration stops when assignments stabilize or after
/// [`MAX_ROUNDS`]. Centroid order is stable for a fixed RNG and input.
///
/// Callers must ensure `1 <= k <= points.len()`.
pub fn cluster<R: Rng + ?Sized>(points: &[Point], k: usize, rng: &mut R) -> Vec<Point> {
    debug_assert!(k >= 1 && k <= points.len());

    let mut centroids: Vec<Point> =
        sample(rng, points.len(), k).iter().map(|i| points[i]).collect();
    // usize::MAX forces the first round to count as changed.
    let mut assignment = vec![usize::MAX; points.len()];

    for _ in 0..MAX_ROUNDS {
        let mut changed = false;
        for (slot, point) in assignment.iter_mut().zip(points) {
            let nearest = nearest_centroid(&centroids, point);
            if nearest != *slot {
                *slot = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![[0.0f64; 3]; k];
        let mut counts = vec![0usize; k];
        for (&slot, point) in assignment.iter().zip(points) {
            counts[slot] += 1;
            for channel in 0..3 {
                sums[slot][channel] += point[channel];
            }
        }
        for index in 0..k {
            if counts[index] == 0 {
                let stray = farthest_point(points, &assignment, &centroids);
                centroids[index] = points[stray];
            } else {
                #[allow(clippy::cast_precision_loss)]
                let count = counts[index] as f64;
                for channel in 0..3 {
                    centroids[index][channel] = sums[index][channel] / count;
                }
            }
        }
    }

    centroids
}

fn squared_distance(a: &Point, b: &Point) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)
}

/// Index of the centroid closest to `point`; ties resolve to the lowest index.
fn nearest_centroid(centroids: &[Point], point: &Point) -> usize {
    let mut nearest = 0;
    let mut best = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(centroid, point);
        if distance < best {
            best = distance;
            nearest = index;
        }
    }
    nearest
}

/// Index of the point farthest from its assigned centroid.
fn farthest_point(points: &[Point], assignment: &[usize], centroids: &[Point]) -> usize {
    let mut farthest = 0;
    let mut best = -1.0f64;
    for (index, point) in points.iter().enumerate() {
        let distance = squared_distance(point, &centroids[assignment[index]]);
        if distance > best {
            best = distance;
            farthest = index;
        }
    }
    farthest
}
