//! Per-frame physics for the particle field.
//!
//! Each display frame runs, in order:
//! 1. [`repulsion_phase`] — push particles away from the pointer, or ease
//!    them back toward their anchors.
//! 2. A connection gather over the updated positions
//!    ([`crate::connections::ConnectionBuffer::gather`]).
//! 3. The pointer advance ([`crate::pointer::PointerTracker::advance`]).

use crate::{config::Config, particle::ParticleField};
use glam::Vec2;

/// Applies pointer repulsion and elastic return to every particle.
///
/// For each particle, when a raw pointer position is present and its
/// distance to the particle is below `cfg.interaction_radius`, the particle
/// is pushed directly away from the pointer by
/// `force * density` where `force = (radius - distance) / radius`
/// (1 at the pointer, 0 at the radius edge). The direction is the unit
/// pointer→particle vector; at zero distance it degenerates to the fixed
/// x-axis so the displacement magnitude stays continuous.
///
/// Otherwise — pointer absent, or the particle outside the radius — the
/// particle moves `cfg.return_rate` (10%) of its remaining offset back
/// toward the anchor, an exponential decay that never quite reaches rest.
///
/// Pointer absence is an explicit branch on the `Option`; no distance is
/// ever computed against a missing pointer.
///
/// ### Parameters
/// - `field` - The particle field to be mutated in place.
/// - `pointer` - Raw pointer position, or `None` while the pointer is
///   outside the viewport.
/// - `cfg` - Global configuration providing the interaction radius and
///   elastic return rate.
pub fn repulsion_phase(field: &mut ParticleField, pointer: Option<Vec2>, cfg: &Config) {
    let radius = cfg.interaction_radius;

    for p in &mut field.particles {
        let push = pointer.and_then(|m| {
            let delta = m - p.pos;
            let dist = delta.length();
            if dist < radius {
                let dir = if dist > 0.0 { delta / dist } else { Vec2::X };
                let force = (radius - dist) / radius;
                Some(dir * force * p.density)
            } else {
                None
            }
        });

        match push {
            // Push away from the pointer, harder for closer and denser particles.
            Some(push) => p.pos -= push,
            // Ease back toward the anchor.
            None => p.pos += (p.anchor - p.pos) * cfg.return_rate,
        }
    }
}
