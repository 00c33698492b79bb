use bevy::prelude::*;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

/// Random source for procedural generation.
///
/// Seed it to make generation reproducible; the default draws its seed from
/// the operating system.
#[derive(Resource, Deref, DerefMut, Debug, Clone, PartialEq)]
pub struct SharedRng(pub ChaCha8Rng);

impl SharedRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::default(),
        }
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

/// Real seconds advanced per fixed physics tick, before the time scale is applied
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsTime {
    pub dt: f64,
}

impl Default for PhysicsTime {
    fn default() -> Self {
        Self { dt: 0.016 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerationConfig;
    use crate::physics::generation::SystemGenerator;
    use crate::physics::math::GRAVITATIONAL_CONSTANT;

    fn generate(rng: &mut SharedRng) -> Vec<crate::components::Body> {
        SystemGenerator::new(GenerationConfig::default(), GRAVITATIONAL_CONSTANT).generate_system(
            &mut **rng,
            4,
            Some(1),
        )
    }

    #[test]
    fn test_same_seed_generates_same_system() {
        let first = generate(&mut SharedRng::from_seed(12345));
        let second = generate(&mut SharedRng::from_optional_seed(Some(12345)));

        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_generate_different_systems() {
        let first = generate(&mut SharedRng::from_seed(1));
        let second = generate(&mut SharedRng::from_seed(2));

        assert_ne!(first, second);
    }

    #[test]
    fn test_unseeded_rngs_diverge() {
        let first = generate(&mut SharedRng::from_optional_seed(None));
        let second = generate(&mut SharedRng::default());

        assert_ne!(first, second);
    }

    #[test]
    fn test_physics_time_default() {
        assert_eq!(PhysicsTime::default().dt, 0.016);
    }
}
