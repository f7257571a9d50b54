use crate::{emitter, Emission, Float, TraceSegment, Vec2, Wall};

/// Everything a trace pass reads: the source position and the wall list.
///
/// Owned and mutated by the editing layer between frames, borrowed
/// immutably for the duration of a pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub source: Vec2,
    pub walls: Vec<Wall>,
}

impl Default for Scene {
    /// The starting layout: a source near the top-left corner, no walls.
    fn default() -> Self {
        Self {
            source: Vec2::new(100.0, 50.0),
            walls: Vec::new(),
        }
    }
}

impl Scene {
    #[must_use]
    pub fn new(source: impl Into<Vec2>, walls: Vec<Wall>) -> Self {
        Self {
            source: source.into(),
            walls,
        }
    }

    /// Traces every emitted ray against the scene's walls.
    #[inline]
    #[must_use]
    pub fn trace(&self, emission: &Emission, depth: u32) -> Vec<TraceSegment> {
        emitter::trace_room(self.source, &self.walls, emission, depth)
    }

    /// [`Scene::trace`] with rays dispatched over the rayon pool.
    #[inline]
    #[must_use]
    pub fn par_trace(&self, emission: &Emission, depth: u32) -> Vec<TraceSegment> {
        emitter::par_trace_room(self.source, &self.walls, emission, depth)
    }
}

/// Horizontal walls stacked into rows, the generated layout the viewer
/// seeds itself with.
#[must_use]
pub fn wall_rows(count: usize, origin: Vec2, length: Float, spacing: Float) -> Vec<Wall> {
    (0..count)
        .map(|i| {
            let y = origin.y + spacing * i as Float;
            Wall::new([origin.x, y], [origin.x + length, y])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_DEPTH;

    #[test]
    fn default_scene_puts_the_source_near_the_top_left() {
        let scene = Scene::default();
        assert_eq!(scene.source, Vec2::new(100.0, 50.0));
        assert!(scene.walls.is_empty());
    }

    #[test]
    fn wall_rows_stack_at_the_given_spacing() {
        let rows = wall_rows(3, Vec2::new(100.0, 100.0), 100.0, 40.0);
        assert_eq!(
            rows,
            vec![
                Wall::new([100.0, 100.0], [200.0, 100.0]),
                Wall::new([100.0, 140.0], [200.0, 140.0]),
                Wall::new([100.0, 180.0], [200.0, 180.0]),
            ],
        );
    }

    #[test]
    fn closed_box_keeps_every_segment_inside() {
        let scene = Scene::new(
            [150.0, 150.0],
            vec![
                Wall::new([0.0, 0.0], [300.0, 0.0]),
                Wall::new([300.0, 0.0], [300.0, 300.0]),
                Wall::new([300.0, 300.0], [0.0, 300.0]),
                Wall::new([0.0, 300.0], [0.0, 0.0]),
            ],
        );
        let emission = Emission {
            volume: 20,
            center_angle: 10.0,
            aim_spread: 180.0,
        };

        // nothing escapes a closed box, so every ray runs its full depth
        let segments = scene.trace(&emission, DEFAULT_DEPTH);
        assert_eq!(segments.len() as u32, 10 * DEFAULT_DEPTH);

        for segment in &segments {
            for p in [segment.start, segment.end] {
                assert!((-1.0..=301.0).contains(&p.x));
                assert!((-1.0..=301.0).contains(&p.y));
            }
        }
    }
}
