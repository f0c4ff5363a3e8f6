//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]       – which forces and constraints run each frame
//! - [`ParametersConfig`]   – physical constants and run settings
//! - [`ArenaConfig`]        – the world box
//! - [`BodyConfig`]         – initial state for each hand-placed body
//! - [`ParticleSeedConfig`] – optional randomly seeded particle population
//! - [`ScenarioConfig`]     – top-level wrapper
//!
//! Everything except the body list has defaults, so a minimal file only
//! needs `bodies`.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   pairwise_gravity: true
//!   uniform_gravity: false
//!   body_collisions: true
//!   boundary_collision: true
//!
//! parameters:
//!   g: 667.4                  # pairwise gravitational constant
//!   uniform_gravity: [0.0, 981.0]
//!   wall_restitution: 0.7
//!   max_dt: 0.05              # omit to trust the frame clock
//!   dt: 0.016666              # headless step
//!   frames: 600
//!
//! arena:
//!   pos: [0.0, 0.0]
//!   size: [1280.0, 720.0]
//!
//! bodies:
//!   - x: [640.0, 260.0]
//!     v: [50.0, 0.0]
//!     m: 1000.0
//!     radius: 25.0            # omit to derive sqrt(m) * 0.5
//!     color: [252, 229, 112, 255]
//!   - x: [640.0, 360.0]
//!     m: 5000.0
//!     static: true
//!
//! particles:
//!   count: 200
//!   seed: 7
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;

use crate::simulation::params::{
    GRAVITATIONAL_CONSTANT, MIN_CONTACT_DISTANCE, MIN_GRAVITY_DISTANCE, PARTICLE_RADIUS,
    RESTITUTION, UNIFORM_GRAVITY, WALL_RESTITUTION,
};

/// Which forces and constraints are active
#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub pairwise_gravity: bool, // inverse-square attraction between bodies
    pub uniform_gravity: bool, // constant downward field
    pub body_collisions: bool, // circle-circle contacts
    pub boundary_collision: bool, // arena walls
}

/// Physical constants and run settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub g: f32,
    pub uniform_gravity: [f32; 2],
    pub min_gravity_distance: f32,
    pub min_contact_distance: f32,
    pub restitution: f32,
    pub wall_restitution: f32,
    pub particle_radius: f32,
    pub max_dt: Option<f32>,
    pub dt: f32,
    pub frames: usize,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            uniform_gravity: UNIFORM_GRAVITY,
            min_gravity_distance: MIN_GRAVITY_DISTANCE,
            min_contact_distance: MIN_CONTACT_DISTANCE,
            restitution: RESTITUTION,
            wall_restitution: WALL_RESTITUTION,
            particle_radius: PARTICLE_RADIUS,
            max_dt: None,
            dt: 1.0 / 60.0,
            frames: 600,
        }
    }
}

/// World box, `pos` is the top-left corner
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    pub pos: [f32; 2],
    pub size: [f32; 2],
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            pos: [0.0, 0.0],
            size: [1280.0, 720.0],
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKindConfig {
    #[default]
    Body,
    Particle,
}

/// Initial state of a single hand-placed body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f32; 2], // initial position
    #[serde(default)]
    pub v: [f32; 2], // initial velocity
    #[serde(default)]
    pub m: f32, // mass, ignored for particles
    #[serde(default)]
    pub radius: Option<f32>, // bodies default to sqrt(m) * 0.5, particles to the shared radius
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub kind: BodyKindConfig,
    #[serde(default)]
    pub color: Option<[u8; 4]>,
}

/// Randomly placed, non-overlapping particles at rest
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleSeedConfig {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub particles: Option<ParticleSeedConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SimError> {
        let text = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    /// Replace the particle seed, if this scenario seeds particles at all
    pub fn override_seed(&mut self, seed: u64) -> bool {
        match self.particles.as_mut() {
            Some(p) => {
                p.seed = seed;
                true
            }
            None => false,
        }
    }
}
