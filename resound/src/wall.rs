use crate::{geom, Float, Ray, Vec2};
use nalgebra::Unit;

/// A reflective wall segment.
///
/// Endpoints are plain data so the editing layer can move them freely. A
/// wall whose endpoints coincide reflects nothing: every cast against it
/// falls into the zero-determinant rejection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wall {
    pub start: Vec2,
    pub end: Vec2,
}

/// Where a ray met a wall.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Distance from the ray's origin to the crossing. This is the ray
    /// parameter, which equals the Euclidean distance since cast directions
    /// are unit length.
    pub distance: Float,
    /// The crossing point.
    pub point: Vec2,
    /// Unit normal on the side the ray arrived from.
    pub normal: Unit<Vec2>,
}

impl Wall {
    #[inline]
    #[must_use]
    pub fn new(start: impl Into<Vec2>, end: impl Into<Vec2>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The wall's direction, `None` if the wall is degenerate.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Option<Unit<Vec2>> {
        Unit::try_new(self.end - self.start, Float::EPSILON)
    }

    /// Length of the wall.
    #[inline]
    #[must_use]
    pub fn length(&self) -> Float {
        (self.end - self.start).norm()
    }

    /// Whether the wall is too short to define a direction.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction().is_none()
    }

    /// The unit normal on the side the `incident` direction arrives from.
    ///
    /// Of the wall's two perpendiculars, returns the one opposing
    /// `incident` (so `dot(incident, normal) <= 0`), whichever way the
    /// endpoints were authored. `None` for a degenerate wall.
    #[must_use]
    pub fn normal_toward(&self, incident: &Vec2) -> Option<Unit<Vec2>> {
        let d = self.end - self.start;
        let normal = Unit::try_new(Vec2::new(-d.y, d.x), Float::EPSILON)?;

        if incident.dot(normal.as_ref()) > 0.0 {
            return Some(Unit::new_unchecked(-normal.into_inner()));
        }
        Some(normal)
    }

    /// The crossing of `ray` with this wall, if the ray reaches it.
    #[must_use]
    pub fn ray_hit(&self, ray: &Ray) -> Option<RayHit> {
        let t = geom::ray_segment_param(
            &ray.origin,
            ray.direction.as_ref(),
            &self.start,
            &self.end,
        )?;
        let normal = self.normal_toward(ray.direction.as_ref())?;

        Some(RayHit {
            distance: t,
            point: ray.at(t),
            normal,
        })
    }
}
