use anyhow::Context;
use resound_json::serde_json;
use std::fs::File;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let file_path = args
        .next()
        .context("expected a scene file: run_room_json <scene.json> [depth]")?;

    let depth = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(resound::DEFAULT_DEPTH);

    let file = File::open(&file_path).with_context(|| format!("opening {file_path}"))?;
    let json: serde_json::Value =
        serde_json::from_reader(file).with_context(|| format!("parsing {file_path}"))?;
    let (scene, emission) = resound_json::deserialize_scene(&json)?;

    log::info!(
        "loaded {} walls, volume {}, tracing {depth} bounces",
        scene.walls.len(),
        emission.volume,
    );

    resound_egui::run(resound_egui::RoomApp::new(scene, emission, depth))
        .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}
