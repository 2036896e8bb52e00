use crate::math::Point3;

/// Returns the minimum distance from `point` to the line segment
/// from `start` to `end`.
#[must_use]
pub fn point_to_segment_dist(point: &Point3, start: &Point3, end: &Point3) -> f64 {
    let dir = end - start;
    let len_sq = dir.dot(&dir);

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (point - start).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((point - start).dot(&dir) / len_sq).clamp(0.0, 1.0);

    let closest = start + dir * t;
    (point - closest).norm()
}
