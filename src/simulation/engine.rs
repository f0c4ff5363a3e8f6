//! Per-frame feature toggles
//!
//! Each force or constraint is switched independently. Field names map to the
//! demo settings: body gravity, world-box gravity, collisions, world-box walls.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    pub pairwise_gravity: bool, // inverse-square attraction between bodies
    pub uniform_gravity: bool, // constant downward field
    pub body_collisions: bool, // circle-circle resolution
    pub boundary_collision: bool, // keep circles inside the arena
}

impl Engine {
    pub fn all() -> Self {
        Self {
            pairwise_gravity: true,
            uniform_gravity: true,
            body_collisions: true,
            boundary_collision: true,
        }
    }
}
