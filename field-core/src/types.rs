/// Identifier for a particle in a [`crate::particle::ParticleField`].
///
/// This is an index into `ParticleField::particles`, and is only meaningful
/// within the lifetime of a given field instance; every rebuild replaces the
/// whole collection.
pub type ParticleId = usize;
