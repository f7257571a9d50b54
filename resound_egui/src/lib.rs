//! Interactive viewer for `resound` scenes.

mod app;

pub use app::RoomApp;

/// Opens the viewer window over the given app state. Blocks until the
/// window is closed.
pub fn run(app: RoomApp) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 740.0])
            .with_title("resound"),
        ..Default::default()
    };

    eframe::run_native("resound", options, Box::new(|_cc| Ok(Box::new(app))))
}
