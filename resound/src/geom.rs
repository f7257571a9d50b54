use crate::{Float, Vec2};
use nalgebra::Unit;

/// Specular reflection of `incident` off a surface with unit normal
/// `normal`: `incident - 2 * dot(incident, normal) * normal`.
///
/// The result is not renormalized here, so callers that need a unit
/// direction must renormalize after reflecting.
#[inline]
#[must_use]
pub fn reflect(incident: &Vec2, normal: &Unit<Vec2>) -> Vec2 {
    let n = normal.as_ref();
    incident - n * (2.0 * incident.dot(n))
}

/// Whether the segment from `p1` to `p2` crosses the one from `p3` to `p4`.
///
/// Parallel segments, collinear overlapping ones included, never count as
/// crossing. Contact at an endpoint does.
#[must_use]
pub fn segments_intersect(p1: &Vec2, p2: &Vec2, p3: &Vec2, p4: &Vec2) -> bool {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let delta = p3 - p1;

    let det = d1.perp(&d2);
    if det == 0.0 {
        return false;
    }

    let t = delta.perp(&d2) / det;
    let u = delta.perp(&d1) / det;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Parameter `t` such that `origin + dir * t` lies on the segment from `a`
/// to `b`, if the half-line from `origin` along `dir` reaches it.
///
/// Rejects crossings behind the origin (`t < 0`) and beyond the segment's
/// extent; a parallel ray, zero determinant, never crosses.
#[must_use]
pub fn ray_segment_param(origin: &Vec2, dir: &Vec2, a: &Vec2, b: &Vec2) -> Option<Float> {
    let seg_dir = b - a;
    let v = a - origin;

    let det = dir.perp(&seg_dir);
    if det == 0.0 {
        return None;
    }

    let t = v.perp(&seg_dir) / det;
    let u = v.perp(&dir) / det;

    (t >= 0.0 && (0.0..=1.0).contains(&u)).then_some(t)
}

/// The point where the half-line from `origin` along `dir` crosses the
/// segment from `a` to `b`, if any. `dir` does not need to be normalized.
#[inline]
#[must_use]
pub fn ray_segment_intersection(origin: &Vec2, dir: &Vec2, a: &Vec2, b: &Vec2) -> Option<Vec2> {
    ray_segment_param(origin, dir, a, b).map(|t| origin + dir * t)
}
