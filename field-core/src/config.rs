#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub spacing: f32,
    pub particle_size: f32,
    pub interaction_radius: f32,
    pub return_rate: f32,
    pub connection_dist_sq: f32,
    pub line_alpha: f32,
    pub smoothing: f32,
    pub trail_capacity: usize,
    pub trail_alpha: f32,
    pub trail_radius: f32,
    pub trail_radius_step: f32,
    pub glow_radius: f32,
    pub glow_halo_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: 50.0,
            particle_size: 2.0,
            interaction_radius: 120.0,
            return_rate: 0.1,
            // Roughly the squared diagonal of a 50 px grid cell.
            connection_dist_sq: 3500.0,
            line_alpha: 0.3,
            smoothing: 0.15,
            trail_capacity: 20,
            trail_alpha: 0.4,
            trail_radius: 2.0,
            trail_radius_step: 0.1,
            glow_radius: 4.0,
            glow_halo_radius: 10.0,
        }
    }
}
