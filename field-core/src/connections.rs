use crate::{config::Config, particle::Particle, types::ParticleId};

/// A translucent line segment between two nearby particles.
///
/// `opacity` is 1 at zero distance and falls off linearly in squared
/// distance to 0 at the connection threshold. The renderer additionally
/// scales it by [`Config::line_alpha`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: ParticleId,
    pub b: ParticleId,
    pub opacity: f32,
}

/// A reusable scratch buffer for the per-frame pairwise connection scan.
///
/// The buffer is cleared and regathered every frame so the segment list
/// always reflects the particle positions of the current tick, without
/// reallocating once it has grown to its steady-state size.
#[derive(Debug, Default)]
pub struct ConnectionBuffer {
    /// Gathered segments, in pair-scan order.
    pub segments: Vec<Connection>,
}

impl ConnectionBuffer {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Regathers all connections from the current particle positions.
    ///
    /// Scans every pair `(a, b)` with `a <= b` in index order. Self-pairs
    /// are included and trivially gathered at full opacity as zero-length
    /// segments. A pair is kept when its squared distance is strictly
    /// below `cfg.connection_dist_sq`, with opacity
    /// `1 - d² / threshold` — so a pair at exactly the threshold is not
    /// gathered, and one at zero distance has opacity 1.
    ///
    /// The scan is quadratic in particle count; grid sizes bounded by
    /// viewport and spacing keep counts in the low hundreds.
    ///
    /// ### Parameters
    /// - `particles` - The particle slice to scan, in field order.
    /// - `cfg` - Global configuration providing the squared distance
    ///   threshold.
    pub fn gather(&mut self, particles: &[Particle], cfg: &Config) {
        self.segments.clear();
        let threshold = cfg.connection_dist_sq;

        for a in 0..particles.len() {
            for b in a..particles.len() {
                let d2 = (particles[a].pos - particles[b].pos).length_squared();
                if d2 < threshold {
                    self.segments.push(Connection {
                        a,
                        b,
                        opacity: 1.0 - d2 / threshold,
                    });
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
