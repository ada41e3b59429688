use super::clusters::{ClusterIndex, centroid};
use nalgebra::Vector2;

/// Constant-magnitude pull toward the centroid of each point's own cluster.
///
/// A point sitting exactly on its centroid has no direction to be pulled in and receives no
/// contribution; this covers every singleton cluster.
pub(crate) fn accumulate_attraction(
    positions: &[Vector2<f64>],
    clusters: &ClusterIndex,
    attraction: f64,
    acc: &mut [Vector2<f64>],
) {
    if attraction == 0.0 {
        return;
    }
    for members in clusters.groups() {
        if members.len() < 2 {
            continue;
        }
        let c = centroid(members, positions);
        for &idx in members {
            if let Some(unit) = direction(&(c - positions[idx])) {
                acc[idx] += unit * attraction;
            }
        }
    }
}

/// Inverse-square repulsion between every ordered pair of distinct points, regardless of
/// cluster. All reads come from the `positions` snapshot, so per-point sums are independent.
pub(crate) fn accumulate_repulsion(
    positions: &[Vector2<f64>],
    repulsion: f64,
    acc: &mut [Vector2<f64>],
) {
    if repulsion == 0.0 {
        return;
    }
    // Per-pair cap so a point's summed repulsion stays finite however close its neighbours are.
    let max_magnitude = f64::MAX / (positions.len() as f64);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        acc.par_iter_mut()
            .enumerate()
            .for_each(|(i, a)| *a += repulsion_on(i, positions, repulsion, max_magnitude));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, a) in acc.iter_mut().enumerate() {
        *a += repulsion_on(i, positions, repulsion, max_magnitude);
    }
}

fn repulsion_on(
    i: usize,
    positions: &[Vector2<f64>],
    repulsion: f64,
    max_magnitude: f64,
) -> Vector2<f64> {
    let pi = positions[i];
    let mut force = Vector2::zeros();
    for (j, pj) in positions.iter().enumerate() {
        if j == i {
            continue;
        }
        let r = pi - pj;
        // Coincident points have no separating direction.
        let Some(unit) = direction(&r) else {
            continue;
        };
        let dist = scaled_norm(&r);
        // `dist * dist` underflows to zero for tiny separations; the magnitude saturates.
        let magnitude = (repulsion / (dist * dist)).min(max_magnitude);
        force += unit * magnitude;
    }
    force
}

/// Euclidean norm computed without squaring the raw components.
fn scaled_norm(v: &Vector2<f64>) -> f64 {
    let largest = v.amax();
    if largest == 0.0 || !largest.is_finite() {
        return largest;
    }
    largest * (v / largest).norm()
}

/// Unit vector along `v`, or `None` for the zero vector.
///
/// Normalizes by the largest component first, so huge or tiny components neither overflow nor
/// underflow the norm. Infinite components keep only their sign.
pub(crate) fn direction(v: &Vector2<f64>) -> Option<Vector2<f64>> {
    let largest = v.amax();
    if largest == 0.0 || largest.is_nan() {
        return None;
    }
    let scaled = if largest.is_finite() {
        v / largest
    } else {
        v.map(|c| if c.is_infinite() { c.signum() } else { 0.0 })
    };
    Some(scaled.normalize())
}

/// Applies damping, integrates velocity, caps speed, then integrates position.
pub(crate) fn integrate(
    positions: &mut [Vector2<f64>],
    velocities: &mut [Vector2<f64>],
    acc: &[Vector2<f64>],
    dt: f64,
    damping: f64,
    max_speed: f64,
) {
    for ((p, v), a) in positions.iter_mut().zip(velocities.iter_mut()).zip(acc) {
        let a = a - *v * damping;
        *v += a * dt;
        clamp_speed(v, max_speed);
        *p += *v * dt;
    }
}

pub(crate) fn clamp_speed(v: &mut Vector2<f64>, max_speed: f64) {
    let speed = v.norm();
    if speed <= max_speed {
        return;
    }
    if speed.is_finite() {
        *v *= max_speed / speed;
        return;
    }
    // `norm()` overflowed; recover the direction before rescaling.
    if let Some(unit) = direction(v) {
        *v = unit * max_speed;
    }
}
