//! Random population seeding.
//!
//! The step assumes it starts from a non-overlapping population that lies
//! inside the arena; this is the one place that guarantees it.

use rand::Rng;
use tracing::info;

use crate::error::SimError;
use crate::simulation::math::vec2;
use crate::simulation::states::{Body, Color, System, WorldBox};

/// Rejection-sampling budget per particle
pub const MAX_ATTEMPTS_PER_PARTICLE: usize = 10_000;

/// Append `count` particles at rest, each fully inside `arena` and clear of
/// every body already in `sys`. Fails once a single particle exhausts its
/// attempt budget; particles placed before that stay in the store.
pub fn seed_particles<R: Rng>(
    sys: &mut System,
    count: usize,
    arena: &WorldBox,
    radius: f32,
    rng: &mut R,
) -> Result<(), SimError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(SimError::InvalidParameter("particle radius must be finite and positive"));
    }

    let (lo, hi) = (arena.min(), arena.max());
    if count > 0 && (hi.x - lo.x < 2.0 * radius || hi.y - lo.y < 2.0 * radius) {
        return Err(SimError::SeedingExhausted { placed: 0, requested: count });
    }

    for placed in 0..count {
        let mut spot = None;
        for _ in 0..MAX_ATTEMPTS_PER_PARTICLE {
            let x = vec2(
                rng.gen_range(lo.x + radius..=hi.x - radius),
                rng.gen_range(lo.y + radius..=hi.y - radius),
            );
            let clear = sys.bodies.iter().all(|b| (b.x - x).norm() >= b.radius + radius);
            if clear {
                spot = Some(x);
                break;
            }
        }

        let Some(x) = spot else {
            return Err(SimError::SeedingExhausted { placed, requested: count });
        };
        sys.push(Body::particle(x, radius).with_color(Color::WHITE))?;
    }

    info!(count, radius, "seeded particles");
    Ok(())
}
