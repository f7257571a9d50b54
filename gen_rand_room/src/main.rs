use anyhow::Context;
use resound::Emission;
use resound_json::serde_json;
use resound_random::{rand, random_scene, Random};
use std::fs::File;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let file_path = args
        .next()
        .context("expected an output file: gen_rand_room <out.json> [wall_count]")?;

    let wall_count = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(12);

    let mut rng = rand::thread_rng();
    let scene = random_scene(&mut rng, wall_count);
    let emission = Emission::random(&mut rng);

    let json = resound_json::serialize_scene(&scene, &emission);
    let file = File::create(&file_path).with_context(|| format!("creating {file_path}"))?;
    serde_json::to_writer_pretty(file, &json)?;

    log::info!("wrote {wall_count} walls to {file_path}");
    Ok(())
}
