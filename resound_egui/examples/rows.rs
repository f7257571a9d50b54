use resound_egui::RoomApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    // the classic layout: stacked wall rows under a movable source
    resound_egui::run(RoomApp::demo())
}
