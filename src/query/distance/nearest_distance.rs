use crate::math::{Point, Real, Vector};
use crate::query::details::{
    distance_disc_capsule, distance_disc_disc, minkowski_chain, project_point_segment_parameter,
};
use crate::query::DistanceResult;
use crate::shape::{Shape, SupportChain};
use crate::utils;

/// Computes the signed distance and separating normal between two shapes.
///
/// The shapes are evaluated as if translated by `offset_a` and `offset_b`
/// respectively, which allows evaluating a future configuration without
/// modifying them. The returned normal points from `shape_b` toward `shape_a`.
pub fn nearest_distance(
    shape_a: &Shape,
    offset_a: &Vector<Real>,
    shape_b: &Shape,
    offset_b: &Vector<Real>,
) -> DistanceResult {
    let rel_pos = Point::from((shape_a.position() + offset_a) - (shape_b.position() + offset_b));
    let total_radius = shape_a.radius() + shape_b.radius();

    match (shape_a, shape_b) {
        (Shape::Disc(_), Shape::Disc(_)) => distance_disc_disc(&rel_pos, total_radius),
        (Shape::Disc(_), Shape::Capsule(capsule)) | (Shape::Capsule(capsule), Shape::Disc(_)) => {
            distance_disc_capsule(&rel_pos, &capsule.axis, capsule.half_height, total_radius)
        }
        _ => distance_support_chains(shape_a, shape_b, &rel_pos, total_radius),
    }
}

/// Distance from `rel_pos` to the Minkowski sum of the support chains of both
/// shapes, minus `total_radius`.
pub fn distance_support_chains(
    shape_a: &Shape,
    shape_b: &Shape,
    rel_pos: &Point<Real>,
    total_radius: Real,
) -> DistanceResult {
    // Both silhouettes face the relative position.
    let dir = -rel_pos.coords;
    let chain_a = shape_a.local_support_chain(&dir);
    let chain_b = shape_b.local_support_chain(&dir);
    let sum = minkowski_chain(&chain_a, &chain_b);
    let points = sum.points();

    let mut nearest_sq_dist = Real::MAX;
    let mut nearest_diff = Vector::zeros();
    let mut nearest_pt = 0;

    for (i, pt) in points.iter().enumerate() {
        let diff = rel_pos - pt;
        let sq_dist = diff.norm_squared();
        if sq_dist < nearest_sq_dist {
            nearest_sq_dist = sq_dist;
            nearest_diff = diff;
            nearest_pt = i;
        }
    }

    // Test the (at most) two segments around the nearest vertex.
    let first_seg = nearest_pt.saturating_sub(1);
    let last_pt = (nearest_pt + 1).min(points.len().saturating_sub(1));

    for seg in points[first_seg..=last_pt].windows(2) {
        let (p, q) = (seg[0], seg[1]);
        let s = project_point_segment_parameter(rel_pos, &p, &q);

        if s > 0.0 && s < 1.0 {
            let seg_pt = p + (q - p) * s;
            let diff = rel_pos - seg_pt;
            let sq_dist = diff.norm_squared();

            if sq_dist < nearest_sq_dist {
                // Orient the normal away from the inside of the chain.
                let sign = if utils::perp(&(q - p), &diff) >= 0.0 {
                    -1.0
                } else {
                    1.0
                };
                nearest_sq_dist = sq_dist;
                nearest_diff = diff * sign;
            }
        }
    }

    DistanceResult::from_displacement(&nearest_diff, total_radius)
}
