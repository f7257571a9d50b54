use crate::{Float, Ray, RayHit, Vec2, Wall};
use nalgebra::Unit;

/// Default number of bounces traced per emitted ray.
pub const DEFAULT_DEPTH: u32 = 26;

/// How far a ray is drawn when it escapes the room without hitting a wall.
pub const MISS_DISTANCE: Float = 1000.0;

/// Bounce segments shorter than this end the path; a direction recovered
/// from one would be numerically meaningless.
const MIN_INCIDENT: Float = 1e-6;

/// Offset applied along the reflected direction before the next cast, so a
/// bounce does not re-hit its own wall at distance ~0.
const REFLECT_OFFSET: Float = 1e-4;

/// Hue shared by every traced segment.
pub const TRACE_HUE: Float = 182.0;
/// Saturation shared by every traced segment.
pub const TRACE_SATURATION: Float = 81.0;

const BASE_LIGHTNESS: Float = 25.0;
const LIGHTNESS_PER_BOUNCE: Float = 10.0;
const MAX_LIGHTNESS: Float = 75.0;

/// A color in HSL space: hue in degrees, saturation and lightness in
/// percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: Float,
    pub saturation: Float,
    pub lightness: Float,
}

impl Hsl {
    /// The trace palette: a fixed teal that lightens toward white as the
    /// bounce count grows, capped at 75% lightness.
    #[must_use]
    pub fn for_reflection_count(count: u32) -> Self {
        Self {
            hue: TRACE_HUE,
            saturation: TRACE_SATURATION,
            lightness: (BASE_LIGHTNESS + LIGHTNESS_PER_BOUNCE * count as Float).min(MAX_LIGHTNESS),
        }
    }
}

/// Direct and once-reflected segments draw bold, later reverberation thin.
fn base_width(reflection_count: u32) -> Float {
    if reflection_count <= 1 {
        4.0
    } else {
        1.0
    }
}

/// One drawable piece of a traced path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceSegment {
    pub start: Vec2,
    pub end: Vec2,
    pub color: Hsl,
    pub width: Float,
}

impl TraceSegment {
    fn styled(start: Vec2, end: Vec2, reflection_count: u32, gain: Float) -> Self {
        Self {
            start,
            end,
            color: Hsl::for_reflection_count(reflection_count),
            width: base_width(reflection_count) * gain,
        }
    }
}

/// Iterator over the segments of a single ray's bounce path.
///
/// Each step finds the nearest wall crossing (the first wall in slice order
/// wins exact ties), yields the segment up to it, then continues from just
/// past the crossing with the reflected direction. A step with no crossing
/// yields a final segment [`MISS_DISTANCE`] units long. At most `depth`
/// segments are produced.
#[derive(Clone, Debug)]
pub struct TracePath<'a> {
    walls: &'a [Wall],
    ray: Ray,
    depth: u32,
    reflection_count: u32,
    gain: Float,
    done: bool,
}

impl<'a> TracePath<'a> {
    #[inline]
    #[must_use]
    pub fn new(walls: &'a [Wall], ray: Ray, depth: u32, gain: Float) -> Self {
        Self {
            walls,
            ray,
            depth,
            reflection_count: 0,
            gain,
            done: false,
        }
    }
}

impl Iterator for TracePath<'_> {
    type Item = TraceSegment;

    fn next(&mut self) -> Option<TraceSegment> {
        if self.done || self.depth == 0 {
            return None;
        }

        let mut closest: Option<RayHit> = None;
        for wall in self.walls {
            if let Some(hit) = wall.ray_hit(&self.ray) {
                if closest.as_ref().map_or(true, |c| hit.distance < c.distance) {
                    closest = Some(hit);
                }
            }
        }

        let origin = self.ray.origin;

        let Some(hit) = closest else {
            self.done = true;
            return Some(TraceSegment::styled(
                origin,
                self.ray.at(MISS_DISTANCE),
                self.reflection_count,
                self.gain,
            ));
        };

        let segment = TraceSegment::styled(origin, hit.point, self.reflection_count, self.gain);
        self.depth -= 1;

        match Unit::try_new(hit.point - origin, MIN_INCIDENT) {
            Some(incident) => {
                let mut next = Ray {
                    origin: hit.point,
                    direction: incident,
                };
                next.reflect_off(&hit.normal);
                next.advance(REFLECT_OFFSET);

                self.ray = next;
                self.reflection_count += 1;
            }
            // the bounce is too short to recover a direction from
            None => self.done = true,
        }

        Some(segment)
    }
}

/// Collects the full bounce path of one ray.
#[inline]
#[must_use]
pub fn trace_ray(walls: &[Wall], ray: Ray, depth: u32, gain: Float) -> Vec<TraceSegment> {
    TracePath::new(walls, ray, depth, gain).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> [Wall; 2] {
        [
            Wall::new([0.0, 0.0], [0.0, 100.0]),
            Wall::new([10.0, 0.0], [10.0, 100.0]),
        ]
    }

    #[test]
    fn no_walls_draws_one_escape_segment() {
        let ray = Ray::new([0.0, 50.0], [1.0, 0.0]);
        let segments = trace_ray(&[], ray, DEFAULT_DEPTH, 1.0);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, Vec2::new(0.0, 50.0));
        assert_eq!(segments[0].end, Vec2::new(1000.0, 50.0));
    }

    #[test]
    fn zero_depth_draws_nothing() {
        let walls = [Wall::new([100.0, 0.0], [100.0, 100.0])];
        let ray = Ray::new([0.0, 50.0], [1.0, 0.0]);
        assert!(trace_ray(&walls, ray, 0, 1.0).is_empty());
    }

    #[test]
    fn head_on_bounce_reverses_direction() {
        let walls = [Wall::new([100.0, 0.0], [100.0, 100.0])];
        let ray = Ray::new([0.0, 50.0], [1.0, 0.0]);
        let segments = trace_ray(&walls, ray, DEFAULT_DEPTH, 1.0);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Vec2::new(0.0, 50.0));
        assert_eq!(segments[0].end, Vec2::new(100.0, 50.0));

        // the reflected ray leaves just off the wall, heading back in -x
        assert!((segments[1].start.x - 100.0).abs() < 1e-3);
        assert_eq!(segments[1].start.y, 50.0);
        assert!(segments[1].end.x < -800.0);
        assert_eq!(segments[1].end.y, 50.0);
    }

    #[test]
    fn trapped_ray_stops_at_the_depth_bound() {
        let ray = Ray::new([5.0, 50.0], [1.0, 0.0]);
        let segments = trace_ray(&corridor(), ray, DEFAULT_DEPTH, 1.0);

        assert_eq!(segments.len() as u32, DEFAULT_DEPTH);
        for (i, segment) in segments.iter().enumerate() {
            assert_eq!(segment.width, if i <= 1 { 4.0 } else { 1.0 });
        }
    }

    #[test]
    fn lightness_climbs_with_bounces_and_caps() {
        let ray = Ray::new([5.0, 50.0], [1.0, 0.0]);
        let segments = trace_ray(&corridor(), ray, 10, 1.0);

        let lightness: Vec<Float> = segments.iter().map(|s| s.color.lightness).collect();
        assert_eq!(
            lightness,
            vec![25.0, 35.0, 45.0, 55.0, 65.0, 75.0, 75.0, 75.0, 75.0, 75.0],
        );

        for segment in &segments {
            assert_eq!(segment.color.hue, TRACE_HUE);
            assert_eq!(segment.color.saturation, TRACE_SATURATION);
        }
    }

    #[test]
    fn gain_stays_constant_across_bounces() {
        let ray = Ray::new([5.0, 50.0], [1.0, 0.0]);
        let segments = trace_ray(&corridor(), ray, DEFAULT_DEPTH, 0.4);

        assert_eq!(segments.len() as u32, DEFAULT_DEPTH);
        for (i, segment) in segments.iter().enumerate() {
            let base = if i <= 1 { 4.0 } else { 1.0 };
            assert_eq!(segment.width, base * 0.4);
        }
    }

    #[test]
    fn equidistant_walls_resolve_by_list_order() {
        let horizontal = Wall::new([0.0, 10.0], [100.0, 10.0]);
        let vertical = Wall::new([10.0, 0.0], [10.0, 100.0]);

        // both walls pass through (10, 10), equidistant from the origin
        let ray = Ray::new([0.0, 0.0], [1.0, 1.0]);
        let first = trace_ray(&[horizontal, vertical], ray, 2, 1.0);
        let second = trace_ray(&[vertical, horizontal], ray, 2, 1.0);

        // off the horizontal wall the ray drops back down and to the right;
        // off the vertical wall it climbs back to the left
        assert!(first[1].end.y < first[1].start.y);
        assert!(first[1].end.x > first[1].start.x);
        assert!(second[1].end.x < second[1].start.x);
        assert!(second[1].end.y > second[1].start.y);
    }

    #[test]
    fn zero_length_walls_are_passed_through() {
        let walls = [Wall::new([50.0, 50.0], [50.0, 50.0])];
        let ray = Ray::new([0.0, 50.0], [1.0, 0.0]);
        let segments = trace_ray(&walls, ray, DEFAULT_DEPTH, 1.0);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].end, Vec2::new(1000.0, 50.0));
    }
}
