//! Interactive particle-field background viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! ([`Simulation`]: particle grid, pointer tracker, connection buffer) and
//! implements [`eframe::App`] to advance and render one frame per display
//! refresh.

use eframe::App;
use field_core::{
    config::Config,
    sim::Simulation,
    theme::{Rgba, ThemeId},
};
use glam::Vec2;
use rand::rng;

/// Fill behind the particle field.
const BACKDROP: egui::Color32 = egui::Color32::from_rgb(10, 15, 22);

/// Main application state for the background viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: [`Simulation`] with its field, pointer and
///   connection buffer.
/// - Theme selection and live config editing.
/// - eframe/egui callbacks for drawing and pointer input.
///
/// The per-frame update is:
/// 1. Match the grid to the panel extent (rebuild on resize).
/// 2. Feed the hover position into the pointer tracker; hover loss is the
///    pointer-left signal.
/// 3. [`Simulation::advance`] — physics, connection gather, trail.
/// 4. Paint particles, connection lines, then the trail and glow dot on a
///    foreground layer.
///
/// ### Fields
/// - `sim` - Complete animation state; the viewer only mutates it through
///   its entry points.
/// - `rng` - Random number generator handed to grid rebuilds.
/// - `last_spacing` - Spacing value the current grid was built with, used
///   to detect config edits that need a rebuild.
pub struct Viewer {
    sim: Simulation,
    rng: rand::rngs::ThreadRng,
    last_spacing: f32,
}

impl Viewer {
    /// Creates a viewer with a default-theme grid at a nominal extent.
    ///
    /// The first frame resizes the simulation to the real panel size, so
    /// the initial extent only has to be plausible.
    ///
    /// ### Returns
    /// A fully-initialized [`Viewer`] ready to be passed to `eframe::run_native`.
    pub fn new() -> Self {
        let mut rng = rng();
        let sim = Simulation::new(1280.0, 720.0, Config::default(), &mut rng);
        let last_spacing = sim.cfg.spacing;

        Self {
            sim,
            rng,
            last_spacing,
        }
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (theme selection, explicit grid reinit).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Theme:");
                for id in ThemeId::ALL {
                    if ui
                        .selectable_label(self.sim.theme() == id, id.label())
                        .clicked()
                    {
                        self.sim.set_theme(id, &mut self.rng);
                    }
                }

                ui.separator();
                if ui.button("Rebuild grid").clicked() {
                    self.sim.rebuild(&mut self.rng);
                }
            });
        });
    }

    /// Builds the bottom status bar (particle and connection counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("connections = {}", self.sim.connections.len()));
                ui.label(format!("particles = {}", self.sim.field.len()));
            });
        });
    }

    /// Builds the right-hand configuration panel for animation parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Grid");
                Self::labeled_drag_f32(
                    ui,
                    "spacing:",
                    &mut self.sim.cfg.spacing,
                    20.0..=150.0,
                    1.0,
                );

                ui.separator();
                ui.label("Pointer");
                Self::labeled_drag_f32(
                    ui,
                    "radius:",
                    &mut self.sim.cfg.interaction_radius,
                    0.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "smoothing:",
                    &mut self.sim.cfg.smoothing,
                    0.01..=0.5,
                    0.01,
                );

                ui.separator();
                ui.label("Connections");
                Self::labeled_drag_f32(
                    ui,
                    "dist² threshold:",
                    &mut self.sim.cfg.connection_dist_sq,
                    500.0..=12000.0,
                    50.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "line alpha:",
                    &mut self.sim.cfg.line_alpha,
                    0.0..=1.0,
                    0.01,
                );

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.sim.cfg = Config::default();
                }

                // Spacing only matters at build time; rebuild once it moves.
                if (self.sim.cfg.spacing - self.last_spacing).abs() > f32::EPSILON {
                    self.last_spacing = self.sim.cfg.spacing;
                    self.sim.rebuild(&mut self.rng);
                }
            });
    }

    /// Builds the central panel where the field is animated and painted.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BACKDROP))
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                // Keep the grid matched to the panel extent.
                let (w, h) = self.sim.size();
                if (rect.width() - w).abs() >= 1.0 || (rect.height() - h).abs() >= 1.0 {
                    self.sim.resize(rect.width(), rect.height(), &mut self.rng);
                }

                // Hover position is the raw pointer, in field coordinates;
                // losing hover is the pointer-left signal.
                match response.hover_pos() {
                    Some(p) => self
                        .sim
                        .pointer
                        .set_position(Vec2::new(p.x - rect.min.x, p.y - rect.min.y)),
                    None => self.sim.pointer.clear(),
                }

                self.sim.advance();

                let origin = rect.min;
                let palette = self.sim.theme().palette();

                // Particle field.
                for p in &self.sim.field.particles {
                    painter.circle_filled(to_screen(p.pos, origin), p.size, to_color32(p.color));
                }

                // Connection lines over the freshly updated positions.
                for c in &self.sim.connections.segments {
                    let a = to_screen(self.sim.field.particles[c.a].pos, origin);
                    let b = to_screen(self.sim.field.particles[c.b].pos, origin);
                    let color =
                        to_color32(palette.line.with_alpha(c.opacity * self.sim.cfg.line_alpha));
                    painter.line_segment([a, b], egui::Stroke::new(1.0, color));
                }

                // Trail and glow paint on their own layer above the field,
                // and only while the pointer is inside the panel.
                if self.sim.pointer.raw().is_some() {
                    let overlay = ctx
                        .layer_painter(egui::LayerId::new(
                            egui::Order::Foreground,
                            egui::Id::new("pointer_overlay"),
                        ))
                        .with_clip_rect(rect);
                    self.draw_trail(&overlay, origin);
                    self.draw_glow(&overlay, origin);
                }

                // One simulation step per display refresh, for the life of
                // the window.
                ctx.request_repaint();
            });
    }

    /// Draws the comet trail: dots grow toward the head and fade in from
    /// the tail.
    fn draw_trail(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let glow = self.sim.theme().palette().glow;
        let len = self.sim.pointer.trail().len();

        for (i, sample) in self.sim.pointer.trail().iter().enumerate() {
            let (radius, alpha) = trail_dot(i, len, &self.sim.cfg);
            painter.circle_filled(
                to_screen(*sample, origin),
                radius,
                to_color32(glow.with_alpha(alpha)),
            );
        }
    }

    /// Draws the glow dot at the smoothed pointer position, with a layered
    /// translucent halo standing in for a canvas shadow blur.
    fn draw_glow(&self, painter: &egui::Painter, origin: egui::Pos2) {
        let cfg = &self.sim.cfg;
        let glow = self.sim.theme().palette().glow;
        let center = to_screen(self.sim.pointer.smoothed(), origin);

        for (spread, alpha) in [(1.0, 0.10), (0.55, 0.18), (0.25, 0.30)] {
            painter.circle_filled(
                center,
                cfg.glow_radius + cfg.glow_halo_radius * spread,
                to_color32(glow.with_alpha(alpha)),
            );
        }
        painter.circle_filled(center, cfg.glow_radius, to_color32(glow));
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// This method:
    /// - Renders the theme bar and status bar.
    /// - Renders the config side panel.
    /// - Animates and paints the particle field in the central panel.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

/// Converts a field-space position to screen-space.
///
/// Field coordinates have their origin at the top-left corner of the
/// central panel.
fn to_screen(p: Vec2, origin: egui::Pos2) -> egui::Pos2 {
    egui::pos2(origin.x + p.x, origin.y + p.y)
}

/// Converts a core [`Rgba`] color to an egui [`egui::Color32`].
fn to_color32(c: Rgba) -> egui::Color32 {
    let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

/// Radius and alpha for trail sample `i` of `len`, oldest first.
fn trail_dot(i: usize, len: usize, cfg: &Config) -> (f32, f32) {
    let radius = cfg.trail_radius + i as f32 * cfg.trail_radius_step;
    let alpha = i as f32 / len as f32 * cfg.trail_alpha;
    (radius, alpha)
}
