//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant and the uniform "down" field,
//! - degeneracy guards for gravity and contact normals,
//! - restitution for body pairs and for the arena walls,
//! - the shared particle radius,
//! - an optional dt clamp plus the fixed step used by headless runs

use crate::simulation::math::{vec2, Vec2};

pub const GRAVITATIONAL_CONSTANT: f32 = 667.4;
pub const UNIFORM_GRAVITY: [f32; 2] = [0.0, 981.0];
pub const MIN_GRAVITY_DISTANCE: f32 = 1e-3;
pub const MIN_CONTACT_DISTANCE: f32 = 1e-6;
pub const RESTITUTION: f32 = 1.0;
pub const WALL_RESTITUTION: f32 = 0.7;
pub const PARTICLE_RADIUS: f32 = 5.0;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f32, // pairwise gravitational constant
    pub uniform_gravity: Vec2, // +y is down
    pub min_gravity_distance: f32, // pairs closer than this exert no gravity
    pub min_contact_distance: f32, // contacts closer than this have no usable normal
    pub restitution: f32, // body-body, 1.0 = perfectly elastic
    pub wall_restitution: f32, // arena walls, applied as v *= -wall_restitution
    pub particle_radius: f32,
    pub max_dt: Option<f32>, // None = trust the frame clock
    pub dt: f32, // fixed step for headless runs
    pub frames: usize, // headless run length
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: GRAVITATIONAL_CONSTANT,
            uniform_gravity: vec2(UNIFORM_GRAVITY[0], UNIFORM_GRAVITY[1]),
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
