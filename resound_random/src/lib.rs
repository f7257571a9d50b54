//! Random scene generation, for demo files and benchmarks.

use rand::Rng;
use resound::{Emission, Float, Scene, Vec2, Wall};

pub use rand;

/// Extent of generated rooms, matching the viewer's canvas scale.
pub const ROOM_WIDTH: Float = 800.0;
pub const ROOM_HEIGHT: Float = 600.0;

/// Walls shorter than this get re-rolled.
const MIN_WALL_LENGTH: Float = 10.0;

/// A value that can be generated randomly.
pub trait Random {
    /// Generates a random value of type `Self`.
    ///
    /// Must not fail; if creating `Self` is fallible, keep trying until
    /// success.
    fn random(rng: &mut (impl Rng + ?Sized)) -> Self;
}

/// A point somewhere in the generated room.
#[must_use]
pub fn random_point(rng: &mut (impl Rng + ?Sized)) -> Vec2 {
    Vec2::new(
        rng.gen_range(0.0..ROOM_WIDTH),
        rng.gen_range(0.0..ROOM_HEIGHT),
    )
}

impl Random for Wall {
    fn random(rng: &mut (impl Rng + ?Sized)) -> Self {
        loop {
            let wall = Wall::new(random_point(rng), random_point(rng));
            if wall.length() >= MIN_WALL_LENGTH {
                return wall;
            }
        }
    }
}

impl Random for Emission {
    fn random(rng: &mut (impl Rng + ?Sized)) -> Self {
        Self {
            volume: rng.gen_range(1..=100),
            center_angle: rng.gen_range(0.0..360.0),
            aim_spread: rng.gen_range(0.0..=90.0),
        }
    }
}

/// A room with `wall_count` random walls and a random source position.
#[must_use]
pub fn random_scene(rng: &mut (impl Rng + ?Sized), wall_count: usize) -> Scene {
    Scene::new(
        random_point(rng),
        (0..wall_count).map(|_| Wall::random(rng)).collect(),
    )
}
