use crate::{config::Config, theme::Rgba};
use glam::Vec2;
use rand::Rng;

#[derive(Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Rest position on the grid; repelled particles ease back toward it.
    pub anchor: Vec2,
    pub size: f32,
    pub color: Rgba,
    /// Per-particle repulsion strength, drawn once from `[1, 31)`.
    pub density: f32,
}

#[derive(Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Builds a row-major grid of particles at rest, covering
    /// `width × height` plus one `spacing` of overscan on each axis.
    ///
    /// The grid has `ceil((width + spacing) / spacing)` columns and
    /// `ceil((height + spacing) / spacing)` rows, with anchors on the
    /// `spacing`-aligned lattice starting at the origin.
    pub fn build(width: f32, height: f32, cfg: &Config, color: Rgba, rng: &mut impl Rng) -> Self {
        let cols = ((width + cfg.spacing) / cfg.spacing).ceil() as usize;
        let rows = ((height + cfg.spacing) / cfg.spacing).ceil() as usize;

        let mut particles = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let pos = Vec2::new(col as f32 * cfg.spacing, row as f32 * cfg.spacing);
                particles.push(Particle {
                    pos,
                    anchor: pos,
                    size: cfg.particle_size,
                    color,
                    density: rng.random_range(1.0..31.0),
                });
            }
        }

        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rng;

    #[test]
    fn build_produces_the_full_overscan_grid() {
        let cfg = Config::default();
        let field = ParticleField::build(800.0, 600.0, &cfg, Rgba::rgb(1, 2, 3), &mut rng());

        // ceil(850 / 50) = 17 columns, ceil(650 / 50) = 13 rows.
        assert_eq!(field.len(), 17 * 13);
    }

    #[test]
    fn build_rounds_up_for_sizes_off_the_lattice() {
        let cfg = Config::default();
        let field = ParticleField::build(805.0, 601.0, &cfg, Rgba::rgb(0, 0, 0), &mut rng());

        // ceil(855 / 50) = 18 columns, ceil(651 / 50) = 14 rows.
        assert_eq!(field.len(), 18 * 14);
    }

    #[test]
    fn anchors_lie_on_the_spacing_lattice_within_the_overscan_extent() {
        let cfg = Config::default();
        let (w, h) = (400.0, 300.0);
        let field = ParticleField::build(w, h, &cfg, Rgba::rgb(0, 0, 0), &mut rng());

        for p in &field.particles {
            assert_eq!(p.pos, p.anchor, "particles start at rest");
            assert_eq!(p.anchor.x % cfg.spacing, 0.0);
            assert_eq!(p.anchor.y % cfg.spacing, 0.0);
            assert!(p.anchor.x >= 0.0 && p.anchor.x < w + cfg.spacing);
            assert!(p.anchor.y >= 0.0 && p.anchor.y < h + cfg.spacing);
        }
    }

    #[test]
    fn build_applies_color_size_and_density_range() {
        let cfg = Config::default();
        let color = Rgba::rgba(139, 157, 166, 0.5);
        let field = ParticleField::build(200.0, 200.0, &cfg, color, &mut rng());

        for p in &field.particles {
            assert_eq!(p.color, color);
            assert_eq!(p.size, cfg.particle_size);
            assert!(
                (1.0..31.0).contains(&p.density),
                "density {} out of range",
                p.density
            );
        }
    }

    #[test]
    fn insertion_order_is_a_row_major_scan() {
        let cfg = Config::default();
        let field = ParticleField::build(100.0, 100.0, &cfg, Rgba::rgb(0, 0, 0), &mut rng());

        // 3 columns per row: x cycles before y advances.
        assert_eq!(field.particles[0].anchor, Vec2::new(0.0, 0.0));
        assert_eq!(field.particles[1].anchor, Vec2::new(50.0, 0.0));
        assert_eq!(field.particles[2].anchor, Vec2::new(100.0, 0.0));
        assert_eq!(field.particles[3].anchor, Vec2::new(0.0, 50.0));
    }
}
