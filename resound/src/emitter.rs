use crate::{trace_ray, Float, Ray, TraceSegment, Vec2, Wall};
use rayon::prelude::*;

/// Gain for rays on the aim axis or strictly inside the aim cone.
pub const IN_CONE_GAIN: Float = 1.0;
/// Gain for rays outside the aim cone.
pub const OFF_CONE_GAIN: Float = 0.4;

/// Emission settings, straight from the UI controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emission {
    /// Volume setting, 1..=100. The fan gets `volume / 2` rays.
    pub volume: u32,
    /// Center of the fan, degrees.
    pub center_angle: Float,
    /// Half-width of the full-gain cone, degrees.
    pub aim_spread: Float,
}

impl Default for Emission {
    fn default() -> Self {
        Self {
            volume: 50,
            center_angle: 0.0,
            aim_spread: 45.0,
        }
    }
}

impl Emission {
    /// Number of rays in the fan.
    #[inline]
    #[must_use]
    pub fn ray_count(&self) -> usize {
        (self.volume / 2) as usize
    }

    /// Angular gap between neighboring rays, in degrees.
    #[must_use]
    pub fn spread(&self) -> Float {
        let n = self.ray_count();
        if n == 0 {
            0.0
        } else {
            360.0 / n as Float
        }
    }

    /// The fan of initial rays leaving `source`, paired with each ray's
    /// directivity gain. Rays cover the full circle, centered on
    /// `center_angle`.
    pub fn sample(&self, source: Vec2) -> impl Iterator<Item = (Ray, Float)> + '_ {
        let n = self.ray_count();
        let spread = self.spread();

        (0..n).map(move |i| {
            let offset = (i as Float - n as Float / 2.0) * spread;
            let ray = Ray::from_angle(source, (self.center_angle + offset).to_radians());
            (ray, self.gain_at(offset))
        })
    }

    /// Directivity for a ray `offset_degrees` away from the aim axis: full
    /// gain on the axis and strictly inside the cone, attenuated outside.
    #[must_use]
    pub fn gain_at(&self, offset_degrees: Float) -> Float {
        // circular distance from the axis, folded into [0, 180]
        let mut deviation = offset_degrees.abs() % 360.0;
        if deviation > 180.0 {
            deviation = 360.0 - deviation;
        }

        if deviation == 0.0 || deviation < self.aim_spread {
            IN_CONE_GAIN
        } else {
            OFF_CONE_GAIN
        }
    }
}

/// Traces a whole frame: every emitted ray against every wall, in emission
/// order, with each ray's segments in bounce order.
#[must_use]
pub fn trace_room(
    source: Vec2,
    walls: &[Wall],
    emission: &Emission,
    depth: u32,
) -> Vec<TraceSegment> {
    emission
        .sample(source)
        .flat_map(|(ray, gain)| trace_ray(walls, ray, depth, gain))
        .collect()
}

/// [`trace_room`] with top-level rays dispatched over the rayon pool.
/// Output contents and order are identical to the sequential version.
#[must_use]
pub fn par_trace_room(
    source: Vec2,
    walls: &[Wall],
    emission: &Emission,
    depth: u32,
) -> Vec<TraceSegment> {
    let rays: Vec<_> = emission.sample(source).collect();

    rays.into_par_iter()
        .map(|(ray, gain)| trace_ray(walls, ray, depth, gain))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}
