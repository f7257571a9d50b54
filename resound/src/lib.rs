//! 2D acoustic ray tracing against segment walls.
//!
//! A [`Scene`] holds a sound source and a set of [`Wall`]s, an [`Emission`]
//! describes the fan of rays leaving the source, and tracing turns both into
//! data-only [`TraceSegment`]s for a rendering layer to draw.

pub use nalgebra;

pub mod emitter;
pub mod geom;
pub mod scene;
pub mod trace;
pub mod wall;

pub use emitter::{Emission, IN_CONE_GAIN, OFF_CONE_GAIN};
pub use scene::{wall_rows, Scene};
pub use trace::{trace_ray, Hsl, TracePath, TraceSegment, DEFAULT_DEPTH, MISS_DISTANCE};
pub use wall::{RayHit, Wall};

use nalgebra::Unit;

/// Floating point type used in all computations.
pub type Float = f64;

/// A 2D point or direction.
pub type Vec2 = nalgebra::Vector2<Float>;

/// An acoustic ray, represented as a half-line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The starting point of the half-line.
    pub origin: Vec2,
    /// The direction of the half-line.
    pub direction: Unit<Vec2>,
}

impl Ray {
    /// Creates a new ray with the given origin and direction.
    ///
    /// # Panics
    ///
    /// Panics if `direction` is the zero vector.
    #[inline]
    #[must_use]
    pub fn new(origin: impl Into<Vec2>, direction: impl Into<Vec2>) -> Self {
        Self::try_new(origin, direction).expect("direction must not be the zero vector")
    }

    /// Creates a new ray, or `None` if the norm of `direction` is too close
    /// to zero for normalization to be meaningful.
    #[inline]
    #[must_use]
    pub fn try_new(origin: impl Into<Vec2>, direction: impl Into<Vec2>) -> Option<Self> {
        Unit::try_new(direction.into(), Float::EPSILON).map(|direction| Self {
            origin: origin.into(),
            direction,
        })
    }

    /// Creates a ray heading `angle` radians from the positive x axis.
    #[inline]
    #[must_use]
    pub fn from_angle(origin: impl Into<Vec2>, angle: Float) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            origin: origin.into(),
            // (cos, sin) lies on the unit circle
            direction: Unit::new_unchecked(Vec2::new(cos, sin)),
        }
    }

    /// The point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: Float) -> Vec2 {
        self.origin + self.direction.as_ref() * t
    }

    /// Moves the ray's origin forward (or backward, if `t < 0.0`) by `t`.
    #[inline]
    pub fn advance(&mut self, t: Float) {
        self.origin += t * self.direction.as_ref();
    }

    /// Reflects the ray's direction off a surface with the given unit
    /// normal, renormalizing to shed accumulated floating error.
    #[inline]
    pub fn reflect_off(&mut self, normal: &Unit<Vec2>) {
        self.direction = Unit::new_normalize(geom::reflect(self.direction.as_ref(), normal));
    }
}
