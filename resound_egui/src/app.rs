use egui::{Color32, Pos2, Stroke};
use resound::{wall_rows, Emission, Float, Hsl, Scene, Vec2, DEFAULT_DEPTH};

/// Pixel radius within which a drag grabs the source or a wall endpoint.
const GRAB_RADIUS: Float = 10.0;

const SOURCE_RADIUS: f32 = 8.0;
const HANDLE_RADIUS: f32 = 4.0;
const SOURCE_COLOR: Color32 = Color32::from_rgb(0xFF, 0x51, 0x8B);

/// What the pointer is currently moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragTarget {
    Source,
    WallStart(usize),
    WallEnd(usize),
}

pub struct RoomApp {
    scene: Scene,
    emission: Emission,
    depth: u32,
    show_rays: bool,
    row_count: usize,
    dragging: Option<DragTarget>,
}

impl RoomApp {
    #[must_use]
    pub fn new(scene: Scene, emission: Emission, depth: u32) -> Self {
        Self {
            scene,
            emission,
            depth,
            show_rays: true,
            row_count: 6,
            dragging: None,
        }
    }

    /// The demo layout: six wall rows below the default source.
    #[must_use]
    pub fn demo() -> Self {
        let mut scene = Scene::default();
        scene.walls = wall_rows(6, Vec2::new(100.0, 100.0), 100.0, 40.0);
        Self::new(scene, Emission::default(), DEFAULT_DEPTH)
    }

    fn regenerate_rows(&mut self) {
        self.scene.walls = wall_rows(self.row_count, Vec2::new(100.0, 100.0), 100.0, 40.0);
        self.dragging = None;
        log::info!("regenerated {} wall rows", self.row_count);
    }

    /// The closest draggable thing within [`GRAB_RADIUS`] of `p`, the
    /// source taking priority over wall endpoints.
    fn target_at(&self, p: Vec2) -> Option<DragTarget> {
        if (self.scene.source - p).norm() <= GRAB_RADIUS {
            return Some(DragTarget::Source);
        }

        for (i, wall) in self.scene.walls.iter().enumerate() {
            if (wall.start - p).norm() <= GRAB_RADIUS {
                return Some(DragTarget::WallStart(i));
            }
            if (wall.end - p).norm() <= GRAB_RADIUS {
                return Some(DragTarget::WallEnd(i));
            }
        }
        None
    }

    fn handle_mouse(&mut self, response: &egui::Response, origin: Pos2) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.dragging = self.target_at(to_room(origin, pos));
            }
        }

        if response.dragged() {
            if let (Some(target), Some(pos)) = (self.dragging, response.interact_pointer_pos()) {
                let p = to_room(origin, pos);
                match target {
                    DragTarget::Source => self.scene.source = p,
                    DragTarget::WallStart(i) => self.scene.walls[i].start = p,
                    DragTarget::WallEnd(i) => self.scene.walls[i].end = p,
                }
            }
        }

        if response.drag_stopped() {
            self.dragging = None;
        }
    }

    fn draw(&self, painter: &egui::Painter, origin: Pos2) {
        if self.show_rays {
            for segment in self.scene.trace(&self.emission, self.depth) {
                painter.line_segment(
                    [to_screen(origin, segment.start), to_screen(origin, segment.end)],
                    Stroke::new(segment.width as f32, hsl_color(segment.color)),
                );
            }
        }

        for wall in &self.scene.walls {
            let (a, b) = (to_screen(origin, wall.start), to_screen(origin, wall.end));
            painter.line_segment([a, b], Stroke::new(1.0, Color32::BLACK));
            painter.circle_filled(a, HANDLE_RADIUS, Color32::BLACK);
            painter.circle_filled(b, HANDLE_RADIUS, Color32::BLACK);
        }

        painter.circle_filled(
            to_screen(origin, self.scene.source),
            SOURCE_RADIUS,
            SOURCE_COLOR,
        );
    }
}

impl eframe::App for RoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("controls")
            .default_width(250.0)
            .show(ctx, |ui| {
                ui.heading("Emission");
                ui.add(egui::Slider::new(&mut self.emission.volume, 1..=100).text("Volume"));
                ui.add(
                    egui::Slider::new(&mut self.emission.center_angle, 0.0..=359.0)
                        .text("Angle (deg)"),
                );
                ui.add(
                    egui::Slider::new(&mut self.emission.aim_spread, 0.0..=180.0)
                        .text("Aim spread (deg)"),
                );
                ui.checkbox(&mut self.show_rays, "Show rays");

                ui.separator();
                ui.heading("Walls");
                ui.add(egui::Slider::new(&mut self.row_count, 0..=12).text("Rows"));
                if ui.button("Generate rows").clicked() {
                    self.regenerate_rows();
                }
                if ui.button("Clear walls").clicked() {
                    self.scene.walls.clear();
                    self.dragging = None;
                }
                ui.label(format!("{} walls", self.scene.walls.len()));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

            self.handle_mouse(&response, rect.min);
            self.draw(ui.painter(), rect.min);
        });

        // keep tracing while sliders and drags move under the pointer
        ctx.request_repaint();
    }
}

/// Room coordinates are canvas pixels with the origin at the canvas
/// top-left corner.
fn to_screen(origin: Pos2, p: Vec2) -> Pos2 {
    origin + egui::vec2(p.x as f32, p.y as f32)
}

fn to_room(origin: Pos2, p: Pos2) -> Vec2 {
    Vec2::new(Float::from(p.x - origin.x), Float::from(p.y - origin.y))
}

/// HSL (degrees, percent, percent) to sRGB.
fn hsl_color(hsl: Hsl) -> Color32 {
    let h = hsl.hue.rem_euclid(360.0) / 60.0;
    let s = (hsl.saturation / 100.0).clamp(0.0, 1.0);
    let l = (hsl.lightness / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let to_byte = |v: Float| ((v + m) * 255.0).round() as u8;
    Color32::from_rgb(to_byte(r), to_byte(g), to_byte(b))
}
