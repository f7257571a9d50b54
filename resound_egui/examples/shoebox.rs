use resound::{Emission, Scene, Wall, DEFAULT_DEPTH};
use resound_egui::RoomApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    // a closed rectangular room with the source inside
    let scene = Scene::new(
        [300.0, 220.0],
        vec![
            Wall::new([80.0, 60.0], [560.0, 60.0]),
            Wall::new([560.0, 60.0], [560.0, 420.0]),
            Wall::new([560.0, 420.0], [80.0, 420.0]),
            Wall::new([80.0, 420.0], [80.0, 60.0]),
        ],
    );

    resound_egui::run(RoomApp::new(scene, Emission::default(), DEFAULT_DEPTH))
}
