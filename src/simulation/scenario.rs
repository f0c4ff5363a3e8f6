//! Build runnable scenarios and drive them frame by frame
//!
//! A `Scenario` is the runtime bundle: engine toggles, parameters, arena,
//! body store, active force set and the reusable acceleration buffer.
//! `Scenario::advance` is the per-frame entry point:
//! forces -> integrate -> body contacts -> arena walls. The free [`advance`]
//! runs the same frame over a bare `System`.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::configuration::config::{BodyConfig, BodyKindConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::collision::{resolve_body_collisions, resolve_world_box};
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::generator::seed_particles;
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::math::{vec2, Vec2};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyView, Color, System, WorldBox};

/// What one call to [`Scenario::advance`] did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub dt: f32, // step actually taken, after any clamp
    pub contacts: usize, // body pairs found in contact
    pub wall_hits: usize, // bodies pushed back inside the arena
}

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub arena: WorldBox,
    pub system: System,
    pub forces: AccelSet,
    accel: Vec<Vec2>, // one entry per body, rebuilt every frame
}

impl Scenario {
    pub fn new(system: System, engine: Engine, parameters: Parameters, arena: WorldBox) -> Self {
        let forces = AccelSet::from_engine(&engine, &parameters);
        Self {
            engine,
            parameters,
            arena,
            accel: Vec::with_capacity(system.len()),
            system,
            forces,
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            uniform_gravity: vec2(p_cfg.uniform_gravity[0], p_cfg.uniform_gravity[1]),
            min_gravity_distance: p_cfg.min_gravity_distance,
            min_contact_distance: p_cfg.min_contact_distance,
            restitution: p_cfg.restitution,
            wall_restitution: p_cfg.wall_restitution,
            particle_radius: p_cfg.particle_radius,
            max_dt: p_cfg.max_dt,
            dt: p_cfg.dt,
            frames: p_cfg.frames,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            pairwise_gravity: e_cfg.pairwise_gravity,
            uniform_gravity: e_cfg.uniform_gravity,
            body_collisions: e_cfg.body_collisions,
            boundary_collision: e_cfg.boundary_collision,
        };

        let arena = WorldBox::new(
            vec2(cfg.arena.pos[0], cfg.arena.pos[1]),
            vec2(cfg.arena.size[0], cfg.arena.size[1]),
        );
        arena.check()?;

        // Bodies: hand-placed first, seeded particles after so they avoid them
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| body_from_config(bc, parameters.particle_radius))
            .collect();
        let mut system = System::from_bodies(bodies)?;

        if let Some(seed_cfg) = &cfg.particles {
            let mut rng = StdRng::seed_from_u64(seed_cfg.seed);
            seed_particles(&mut system, seed_cfg.count, &arena, parameters.particle_radius, &mut rng)?;
        }

        info!(
            bodies = system.len(),
            ?engine,
            "built scenario"
        );

        Ok(Self::new(system, engine, parameters, arena))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, SimError> {
        Self::build_scenario(ScenarioConfig::from_yaml_str(yaml)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SimError> {
        Self::build_scenario(ScenarioConfig::from_path(path)?)
    }

    /// Swap the toggle set; the force set is rebuilt to match
    pub fn set_engine(&mut self, engine: Engine) {
        self.engine = engine;
        self.forces = AccelSet::from_engine(&self.engine, &self.parameters);
    }

    /// Advance the simulation by one frame of `dt` seconds.
    ///
    /// `dt` is used as given unless `parameters.max_dt` is set, in which case
    /// larger steps are clamped to it.
    pub fn advance(&mut self, dt: f32) -> FrameStats {
        let Scenario {
            engine,
            parameters,
            arena,
            system,
            forces,
            accel,
        } = self;

        run_frame(system, forces, engine, parameters, arena, accel, dt)
    }

    pub fn bodies(&self) -> &[Body] {
        self.system.bodies()
    }

    /// Ordered render view of the current state
    pub fn views(&self) -> impl ExactSizeIterator<Item = BodyView> + '_ {
        self.system.views()
    }
}

/// Advance a bare body store by one frame without a [`Scenario`].
///
/// The force set is rebuilt from `engine` on every call; `accel` is the
/// caller-owned scratch buffer and is resized to the population.
pub fn advance(
    sys: &mut System,
    dt: f32,
    engine: &Engine,
    params: &Parameters,
    arena: &WorldBox,
    accel: &mut Vec<Vec2>,
) -> FrameStats {
    let forces = AccelSet::from_engine(engine, params);
    run_frame(sys, &forces, engine, params, arena, accel, dt)
}

// forces -> integrate -> body contacts -> arena walls
fn run_frame(
    sys: &mut System,
    forces: &AccelSet,
    engine: &Engine,
    params: &Parameters,
    arena: &WorldBox,
    accel: &mut Vec<Vec2>,
    dt: f32,
) -> FrameStats {
    let dt = match params.max_dt {
        Some(max) if dt > max => {
            debug!(dt, max, "clamping frame step");
            max
        }
        _ => dt,
    };

    // Forces: reuse the buffer, sized to the current population
    accel.clear();
    accel.resize(sys.len(), Vec2::zeros());
    forces.accumulate_accels(sys.t, sys, accel);

    semi_implicit_euler(sys, accel, dt);

    let contacts = if engine.body_collisions {
        resolve_body_collisions(sys, params)
    } else {
        0
    };

    let wall_hits = if engine.boundary_collision {
        resolve_world_box(&mut sys.bodies, arena, params)
    } else {
        0
    };

    FrameStats { dt, contacts, wall_hits }
}

fn body_from_config(bc: &BodyConfig, particle_radius: f32) -> Body {
    let x = vec2(bc.x[0], bc.x[1]);
    let v = vec2(bc.v[0], bc.v[1]);

    let mut body = match bc.kind {
        BodyKindConfig::Body => match bc.radius {
            Some(r) => Body::new(x, v, bc.m, r),
            None => Body::from_mass(x, v, bc.m),
        },
        BodyKindConfig::Particle => {
            let mut p = Body::particle(x, bc.radius.unwrap_or(particle_radius));
            p.v = v;
            p
        }
    };

    body.is_static = bc.is_static;
    if let Some(c) = bc.color {
        body = body.with_color(Color::from(c));
    }
    body
}
