//! JSON scene files for `resound`, over plain [`serde_json::Value`]s.
//!
//! A scene file looks like:
//!
//! ```json
//! {
//!     "source": [100.0, 50.0],
//!     "walls": [
//!         { "start": [100.0, 100.0], "end": [200.0, 100.0] }
//!     ],
//!     "emission": { "volume": 50, "center_angle": 0.0, "aim_spread": 45.0 }
//! }
//! ```
//!
//! The `emission` object is optional and falls back to the defaults.

use resound::{Emission, Float, Scene, Vec2, Wall};
use thiserror::Error;

pub use serde_json;

/// Why a scene file failed to deserialize.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneJsonError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("invalid value for field `{0}`")]
    InvalidField(&'static str),
}

/// A value that can be serialized into a JSON object.
pub trait JsonSer {
    fn to_json(&self) -> serde_json::Value;
}

/// A value that can be deserialized from a JSON object.
pub trait JsonDes: Sized {
    fn from_json(json: &serde_json::Value) -> Result<Self, SceneJsonError>;
}

fn json_array_to_point(json: &serde_json::Value) -> Option<Vec2> {
    let array = json.as_array()?;
    let [x, y] = array.as_slice() else {
        return None;
    };
    Some(Vec2::new(x.as_f64()?, y.as_f64()?))
}

fn point_field(json: &serde_json::Value, field: &'static str) -> Result<Vec2, SceneJsonError> {
    let value = json.get(field).ok_or(SceneJsonError::MissingField(field))?;
    json_array_to_point(value).ok_or(SceneJsonError::InvalidField(field))
}

fn f64_field(json: &serde_json::Value, field: &'static str) -> Result<Float, SceneJsonError> {
    json.get(field)
        .ok_or(SceneJsonError::MissingField(field))?
        .as_f64()
        .ok_or(SceneJsonError::InvalidField(field))
}

fn u32_field(json: &serde_json::Value, field: &'static str) -> Result<u32, SceneJsonError> {
    let n = json
        .get(field)
        .ok_or(SceneJsonError::MissingField(field))?
        .as_u64()
        .ok_or(SceneJsonError::InvalidField(field))?;
    u32::try_from(n).map_err(|_| SceneJsonError::InvalidField(field))
}

impl JsonSer for Wall {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "start": [self.start.x, self.start.y],
            "end": [self.end.x, self.end.y],
        })
    }
}

impl JsonDes for Wall {
    fn from_json(json: &serde_json::Value) -> Result<Self, SceneJsonError> {
        Ok(Self::new(
            point_field(json, "start")?,
            point_field(json, "end")?,
        ))
    }
}

impl JsonSer for Emission {
    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "volume": self.volume,
            "center_angle": self.center_angle,
            "aim_spread": self.aim_spread,
        })
    }
}

impl JsonDes for Emission {
    fn from_json(json: &serde_json::Value) -> Result<Self, SceneJsonError> {
        Ok(Self {
            volume: u32_field(json, "volume")?,
            center_angle: f64_field(json, "center_angle")?,
            aim_spread: f64_field(json, "aim_spread")?,
        })
    }
}

/// Builds the scene-file JSON for a scene and its emission settings.
#[must_use]
pub fn serialize_scene(scene: &Scene, emission: &Emission) -> serde_json::Value {
    serde_json::json!({
        "source": [scene.source.x, scene.source.y],
        "walls": scene.walls.iter().map(JsonSer::to_json).collect::<Vec<_>>(),
        "emission": emission.to_json(),
    })
}

/// Reads a scene file back.
///
/// Walls too short to reflect anything are dropped with a warning rather
/// than reported as errors, and a missing `emission` object falls back to
/// [`Emission::default`].
pub fn deserialize_scene(json: &serde_json::Value) -> Result<(Scene, Emission), SceneJsonError> {
    let source = point_field(json, "source")?;

    let walls_json = json
        .get("walls")
        .ok_or(SceneJsonError::MissingField("walls"))?
        .as_array()
        .ok_or(SceneJsonError::InvalidField("walls"))?;

    let mut walls = Vec::with_capacity(walls_json.len());
    for (i, value) in walls_json.iter().enumerate() {
        let wall = Wall::from_json(value)?;
        if wall.is_degenerate() {
            log::warn!("dropping zero-length wall #{i} at {:?}", wall.start);
            continue;
        }
        walls.push(wall);
    }

    let emission = match json.get("emission") {
        Some(value) => Emission::from_json(value)?,
        None => Emission::default(),
    };

    Ok((Scene::new(source, walls), emission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wall_round_trips() {
        let wall = Wall::new([1.5, -2.0], [30.0, 42.5]);
        assert_eq!(Wall::from_json(&wall.to_json()), Ok(wall));
    }

    #[test]
    fn emission_round_trips() {
        let emission = Emission {
            volume: 72,
            center_angle: 135.0,
            aim_spread: 20.0,
        };
        assert_eq!(Emission::from_json(&emission.to_json()), Ok(emission));
    }

    #[test]
    fn scene_file_round_trips() {
        let scene = Scene::new(
            [100.0, 50.0],
            vec![
                Wall::new([100.0, 100.0], [200.0, 100.0]),
                Wall::new([100.0, 140.0], [200.0, 140.0]),
            ],
        );
        let emission = Emission {
            volume: 31,
            center_angle: 90.0,
            aim_spread: 10.0,
        };

        let json = serialize_scene(&scene, &emission);
        assert_eq!(deserialize_scene(&json), Ok((scene, emission)));
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let err = Wall::from_json(&json!({ "end": [1.0, 2.0] })).unwrap_err();
        assert_eq!(err, SceneJsonError::MissingField("start"));
        assert_eq!(err.to_string(), "missing field `start`");
    }

    #[test]
    fn short_point_arrays_are_invalid() {
        let err = Wall::from_json(&json!({ "start": [1.0], "end": [1.0, 2.0] })).unwrap_err();
        assert_eq!(err, SceneJsonError::InvalidField("start"));
    }

    #[test]
    fn non_numeric_volume_is_invalid() {
        let err = Emission::from_json(&json!({
            "volume": "loud",
            "center_angle": 0.0,
            "aim_spread": 45.0,
        }))
        .unwrap_err();
        assert_eq!(err, SceneJsonError::InvalidField("volume"));
    }

    #[test]
    fn degenerate_walls_are_dropped_on_load() {
        let json = json!({
            "source": [10.0, 10.0],
            "walls": [
                { "start": [50.0, 50.0], "end": [50.0, 50.0] },
                { "start": [0.0, 0.0], "end": [100.0, 0.0] },
            ],
        });

        let (scene, _) = deserialize_scene(&json).unwrap();
        assert_eq!(scene.walls, vec![Wall::new([0.0, 0.0], [100.0, 0.0])]);
    }

    #[test]
    fn missing_emission_falls_back_to_defaults() {
        let json = json!({ "source": [0.0, 0.0], "walls": [] });
        let (_, emission) = deserialize_scene(&json).unwrap();
        assert_eq!(emission, Emission::default());
    }
}
