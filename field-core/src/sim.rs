//! Top-level simulation state and frame stepping.

use crate::{
    config::Config,
    connections::ConnectionBuffer,
    particle::ParticleField,
    phases,
    pointer::PointerTracker,
    theme::ThemeId,
};
use glam::Vec2;
use rand::Rng;

/// Complete state of the background animation.
///
/// All mutation funnels through a few entry points — [`Simulation::set_theme`],
/// [`Simulation::resize`], [`Simulation::rebuild`], the pointer handlers on
/// [`Simulation::pointer`], and [`Simulation::advance`] — which only ever run
/// between frames, so every frame observes a consistent state.
///
/// ### Fields
/// - `field` - The particle grid.
/// - `pointer` - Raw/smoothed pointer state and the trail.
/// - `connections` - Per-frame scratch buffer of proximity segments.
/// - `cfg` - Tuning constants; live-editable, but `spacing` changes need an
///   explicit [`Simulation::rebuild`] to take effect.
pub struct Simulation {
    pub field: ParticleField,
    pub pointer: PointerTracker,
    pub connections: ConnectionBuffer,
    pub cfg: Config,

    theme: ThemeId,
    width: f32,
    height: f32,
}

impl Simulation {
    /// Creates a simulation covering `width × height` with the default theme
    /// and a freshly built grid. The smoothed pointer starts at the viewport
    /// center.
    pub fn new(width: f32, height: f32, cfg: Config, rng: &mut impl Rng) -> Self {
        let theme = ThemeId::default();
        let field = ParticleField::build(width, height, &cfg, theme.palette().particle, rng);

        Self {
            field,
            pointer: PointerTracker::new(Vec2::new(width / 2.0, height / 2.0)),
            connections: ConnectionBuffer::new(),
            cfg,
            theme,
            width,
            height,
        }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Switches the active palette and rebuilds the grid so particles pick
    /// up the new fill color. Lines and glow are drawn from the palette each
    /// frame and follow from the very next one.
    pub fn set_theme(&mut self, theme: ThemeId, rng: &mut impl Rng) {
        self.theme = theme;
        self.rebuild(rng);
    }

    /// Adopts a new viewport extent and rebuilds the grid to cover it.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.rebuild(rng);
    }

    /// Replaces the particle collection with a fresh grid at rest.
    ///
    /// Accumulated displacement is discarded, not carried over; densities
    /// are re-randomized.
    pub fn rebuild(&mut self, rng: &mut impl Rng) {
        self.field = ParticleField::build(
            self.width,
            self.height,
            &self.cfg,
            self.theme.palette().particle,
            rng,
        );
    }

    /// Advances the animation by one display frame.
    ///
    /// Strictly ordered: the repulsion phase moves every particle, the
    /// connection buffer is regathered from the updated positions, and the
    /// pointer trail advances last.
    pub fn advance(&mut self) {
        phases::repulsion_phase(&mut self.field, self.pointer.raw(), &self.cfg);
        self.connections.gather(&self.field.particles, &self.cfg);
        self.pointer.advance(&self.cfg);
    }
}
