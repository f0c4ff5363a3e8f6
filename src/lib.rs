pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::SimError;

pub use simulation::math::{Vec2, vec2, length, normalize_or_zero};
pub use simulation::states::{Body, BodyKind, BodyView, Color, System, WorldBox};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, PairwiseGravity, UniformGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::collision::{resolve_pair, resolve_body_collisions, resolve_world_box, PairOutcome};
pub use simulation::generator::seed_particles;
pub use simulation::scenario::{advance, Scenario, FrameStats};

pub use configuration::config::{EngineConfig, ParametersConfig, ArenaConfig, BodyConfig, ParticleSeedConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_pairwise_gravity, bench_step};
