//! Dominant-color palette extraction by k-means clustering in RGB space

use crate::color::Rgb;
use crate::io::configuration::KMEANS_ITERATIONS;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

type Center = [f64; 3];

/// Cluster `samples` into `k` colors using the thread-local random generator
///
/// See [`extract_palette_with_rng`].
pub fn extract_palette(samples: &[Rgb], k: usize) -> Vec<Rgb> {
    let mut rng = rand::rng();
    extract_palette_with_rng(samples, k, KMEANS_ITERATIONS, &mut rng)
}

/// Cluster `samples` into `k` colors over exactly `iterations` refinement passes
///
/// Centers start from randomly drawn samples, preferring distinct colors, and
/// each pass assigns every sample to its nearest center by squared RGB
/// distance, then moves each center to the mean of its members. A center with
/// no members stays where it is. The result is sorted by ascending luminance.
/// An empty pool or `k == 0` gives an empty palette.
pub fn extract_palette_with_rng<R: Rng>(
    samples: &[Rgb],
    k: usize,
    iterations: usize,
    rng: &mut R,
) -> Vec<Rgb> {
    if samples.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut centers = initial_centers(samples, k, rng);
    let mut sums = vec![[0.0; 3]; k];
    let mut counts = vec![0usize; k];

    for _ in 0..iterations {
        sums.fill([0.0; 3]);
        counts.fill(0);

        for sample in samples {
            let point = to_point(*sample);
            let nearest = nearest_center(&point, &centers);
            if let (Some(sum), Some(count)) = (sums.get_mut(nearest), counts.get_mut(nearest)) {
                for (acc, v) in sum.iter_mut().zip(point) {
                    *acc += v;
                }
                *count += 1;
            }
        }

        for ((center, sum), &count) in centers.iter_mut().zip(&sums).zip(&counts) {
            if count > 0 {
                let n = count as f64;
                let [r, g, b] = *sum;
                *center = [r / n, g / n, b / n];
            }
        }
    }

    let mut palette: Vec<Rgb> = centers.iter().map(to_rgb).collect();
    palette.sort_by(|a, b| a.luminance().total_cmp(&b.luminance()));
    palette
}

// Shuffled pass over the pool taking each new color once, then uniform draws
fn initial_centers<R: Rng>(samples: &[Rgb], k: usize, rng: &mut R) -> Vec<Center> {
    let mut order: Vec<usize> = (0..samples.len()).collect();
    order.shuffle(rng);

    let mut seen = HashSet::with_capacity(k);
    let mut centers: Vec<Center> = order
        .iter()
        .filter_map(|&i| samples.get(i).copied())
        .filter(|color| seen.insert(*color))
        .take(k)
        .map(to_point)
        .collect();

    while centers.len() < k {
        let index = rng.random_range(0..samples.len());
        if let Some(&color) = samples.get(index) {
            centers.push(to_point(color));
        }
    }
    centers
}

fn nearest_center(point: &Center, centers: &[Center]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let distance = point
            .iter()
            .zip(center)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>();
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn to_point(color: Rgb) -> Center {
    [f64::from(color.r), f64::from(color.g), f64::from(color.b)]
}

fn to_rgb(center: &Center) -> Rgb {
    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    let [r, g, b] = *center;
    Rgb::new(channel(r), channel(g), channel(b))
}
