//! Contact resolution
//!
//! Two passes run after integration:
//! - every unordered body pair `(i, j)`, `i < j`, checked circle-vs-circle
//!   and resolved by positional correction plus a normal impulse
//! - every dynamic body checked against the arena walls
//!
//! Both passes are exhaustive; there is no broad phase.

use tracing::trace;

use crate::simulation::math::normalize_or_zero;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System, WorldBox};

/// What happened to a single pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// Circles do not overlap
    Apart,
    /// Centers (nearly) coincide, no usable normal; left untouched
    Degenerate,
    /// Overlap removed, no impulse (already separating, particle pair, or
    /// nothing that can take an impulse)
    Corrected,
    /// Overlap removed and an impulse of magnitude `j` exchanged
    Impulse(f32),
}

/// Overlap depth of two circles; positive means they intersect
pub fn penetration(a: &Body, b: &Body) -> f32 {
    (a.radius + b.radius) - (b.x - a.x).norm()
}

/// Resolve one pair in place.
///
/// Positional correction splits the overlap between two dynamic bodies and
/// hands all of it to the dynamic side when the other is static. The impulse
/// is skipped for separating pairs so resolution never adds energy.
pub fn resolve_pair(a: &mut Body, b: &mut Body, params: &Parameters) -> PairOutcome {
    let delta = b.x - a.x;
    let dist = delta.norm();
    let pen = (a.radius + b.radius) - dist;

    // two pinned bodies can overlap forever; nothing to resolve
    if pen <= 0.0 || (a.is_static && b.is_static) {
        return PairOutcome::Apart;
    }
    if dist <= params.min_contact_distance {
        trace!(dist, "skipping coincident pair");
        return PairOutcome::Degenerate;
    }

    // full correction vector along delta, each side takes its share
    let correction = delta * (pen / dist);
    match (a.is_static, b.is_static) {
        (false, false) => {
            a.x -= correction * 0.5;
            b.x += correction * 0.5;
        }
        (false, true) => a.x -= correction,
        (true, false) => b.x += correction,
        (true, true) => {}
    }

    if a.is_particle() || b.is_particle() {
        return PairOutcome::Corrected;
    }

    let normal = normalize_or_zero(delta);
    let vel_along_normal = (b.v - a.v).dot(&normal);
    if vel_along_normal > 0.0 {
        return PairOutcome::Corrected;
    }

    let inv_sum = a.inv_mass() + b.inv_mass();
    if inv_sum == 0.0 {
        return PairOutcome::Corrected;
    }

    let j = -(1.0 + params.restitution) * vel_along_normal / inv_sum;
    let impulse = normal * j;
    a.v -= impulse * a.inv_mass();
    b.v += impulse * b.inv_mass();

    PairOutcome::Impulse(j)
}

/// Run [`resolve_pair`] over every unordered pair in insertion order.
/// Returns the number of pairs that were in contact.
pub fn resolve_body_collisions(sys: &mut System, params: &Parameters) -> usize {
    let n = sys.bodies.len();
    let mut contacts = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            // i < j, so body i lives in `left` and body j is right[0]
            let (left, right) = sys.bodies.split_at_mut(j);
            match resolve_pair(&mut left[i], &mut right[0], params) {
                PairOutcome::Apart | PairOutcome::Degenerate => {}
                PairOutcome::Corrected | PairOutcome::Impulse(_) => contacts += 1,
            }
        }
    }

    contacts
}

/// Clamp each dynamic body fully inside the arena and bounce it off the
/// offending walls. Edges are handled independently, so a corner hit flips
/// both components in the same call. Static bodies are left alone.
/// Returns the number of bodies that touched a wall.
pub fn resolve_world_box(bodies: &mut [Body], arena: &WorldBox, params: &Parameters) -> usize {
    let (lo, hi) = (arena.min(), arena.max());
    let bounce = -params.wall_restitution;
    let mut hits = 0;

    for b in bodies.iter_mut() {
        if b.is_static || arena.contains_circle(b.x, b.radius) {
            continue;
        }
        hits += 1;
        let r = b.radius;

        // left
        if b.x.x - r < lo.x {
            b.x.x = lo.x + r;
            b.v.x *= bounce;
        }
        // right
        if b.x.x + r > hi.x {
            b.x.x = hi.x - r;
            b.v.x *= bounce;
        }
        // top
        if b.x.y - r < lo.y {
            b.x.y = lo.y + r;
            b.v.y *= bounce;
        }
        // bottom
        if b.x.y + r > hi.y {
            b.x.y = hi.y - r;
            b.v.y *= bounce;
        }
    }

    hits
}

/// Smallest gap between any two bodies, negative when something overlaps.
/// `None` for fewer than two bodies.
pub fn min_separation(bodies: &[Body]) -> Option<f32> {
    let mut min: Option<f32> = None;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let gap = -penetration(a, b);
            min = Some(min.map_or(gap, |m| m.min(gap)));
        }
    }
    min
}
