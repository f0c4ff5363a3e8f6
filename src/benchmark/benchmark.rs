use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{Acceleration, PairwiseGravity};
use crate::simulation::math::{vec2, Vec2};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, System, WorldBox};

/// Helper to build a deterministic System of size `n` spread over `arena`.
/// Bodies are small enough that most of them start apart.
fn make_system(n: usize, arena: &WorldBox) -> System {
    let mut sys = System::new();
    let half = arena.size * 0.5;
    let center = arena.pos + half;

    for i in 0..n {
        let i_f = i as f32;
        // deterministic positions, no rand needed
        let x = center + vec2((i_f * 0.37).sin() * half.x * 0.9, (i_f * 0.13).cos() * half.y * 0.9);
        let v = vec2((i_f * 0.07).sin() * 20.0, (i_f * 0.11).cos() * 20.0);
        // mass 4 -> radius 1
        sys.bodies.push(Body::from_mass(x, v, 4.0));
    }
    sys
}

/// Time one exhaustive pairwise gravity evaluation for a range of n
pub fn bench_pairwise_gravity() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let arena = WorldBox::from_size(1280.0, 720.0);
    let params = Parameters::default();

    let gravity = PairwiseGravity {
        g: params.g,
        min_distance: params.min_gravity_distance,
    };

    println!("N,gravity_ms");
    for n in ns {
        let sys = make_system(n, &arena);
        let mut out = vec![Vec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", n, ms);
    }
}

/// Time a full frame (every toggle on) for a range of n
pub fn bench_step() {
    let ns = [100, 200, 400, 800, 1600];
    let steps = 5;
    let arena = WorldBox::from_size(1280.0, 720.0);

    println!("N,step_ms");
    for n in ns {
        let mut scenario = Scenario::new(make_system(n, &arena), Engine::all(), Parameters::default(), arena);
        let dt = scenario.parameters.dt;

        // Warm-up
        scenario.advance(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            scenario.advance(dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
