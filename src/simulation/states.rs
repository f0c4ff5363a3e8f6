//! Core state types for the circle simulation.
//!
//! - `Body`     one simulated circle (a massive body or a mass-less particle)
//! - `System`   the insertion-ordered body store plus accumulated time `t`
//! - `WorldBox` the fixed axis-aligned arena
//! - `BodyView` the read-only slice of a body a renderer needs

use crate::error::SimError;
use crate::simulation::math::{vec2, Vec2};

/// Opaque RGBA8 render attribute. The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from(c: [u8; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

/// Bodies have mass and exchange impulses. Particles share a fixed radius,
/// take no part in pairwise gravity and only get positional correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Body,
    Particle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: Vec2, // position (circle center)
    pub v: Vec2, // velocity, units per second
    pub m: f32, // mass, unused for particles
    pub radius: f32, // collision and visual radius
    pub is_static: bool, // never integrated, never the corrected side
    pub kind: BodyKind,
    pub color: Color,
}

impl Body {
    pub fn new(x: Vec2, v: Vec2, m: f32, radius: f32) -> Self {
        Self {
            x,
            v,
            m,
            radius,
            is_static: false,
            kind: BodyKind::Body,
            color: Color::WHITE,
        }
    }

    /// Body whose radius follows from its mass: `sqrt(m) * 0.5`
    pub fn from_mass(x: Vec2, v: Vec2, m: f32) -> Self {
        Self::new(x, v, m, m.sqrt() * 0.5)
    }

    /// Dynamic particle at rest
    pub fn particle(x: Vec2, radius: f32) -> Self {
        Self {
            kind: BodyKind::Particle,
            ..Self::new(x, Vec2::zeros(), 0.0, radius)
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Pin the body in place
    pub fn fixed(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn is_particle(&self) -> bool {
        self.kind == BodyKind::Particle
    }

    /// Whether this body both feels and exerts pairwise gravity
    pub fn is_massive(&self) -> bool {
        self.kind == BodyKind::Body
    }

    /// `0` for anything that must not be moved by an impulse
    pub fn inv_mass(&self) -> f32 {
        if self.is_static || self.is_particle() {
            0.0
        } else {
            1.0 / self.m
        }
    }

    pub fn kinetic_energy(&self) -> f32 {
        if self.is_particle() {
            return 0.0;
        }
        0.5 * self.m * self.v.norm_squared()
    }

    /// Creation-time precondition check. The step itself never re-validates,
    /// so anything that would later divide by zero is rejected here.
    pub fn check(&self) -> Result<(), &'static str> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err("radius must be finite and positive");
        }
        if !(self.x.iter().all(|c| c.is_finite()) && self.v.iter().all(|c| c.is_finite())) {
            return Err("position and velocity must be finite");
        }
        if self.is_massive() && !self.is_static && !(self.m.is_finite() && self.m > 0.0) {
            return Err("dynamic body mass must be finite and positive");
        }
        // static bodies still pull on others
        if self.is_massive() && self.is_static && !(self.m.is_finite() && self.m >= 0.0) {
            return Err("static body mass must be finite and non-negative");
        }
        Ok(())
    }

    pub fn view(&self) -> BodyView {
        BodyView {
            position: self.x,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// What the renderer gets to see of a body after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyView {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Insertion-ordered body store. Order is stable for the whole run so that
/// pairwise iteration is reproducible.
#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // accumulated simulation time
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-placed bodies, validating each one
    pub fn from_bodies(bodies: Vec<Body>) -> Result<Self, SimError> {
        let mut sys = Self::new();
        sys.bodies.reserve(bodies.len());
        for body in bodies {
            sys.push(body)?;
        }
        Ok(sys)
    }

    /// Append a body, returning its index
    pub fn push(&mut self, body: Body) -> Result<usize, SimError> {
        let index = self.bodies.len();
        body.check()
            .map_err(|reason| SimError::InvalidBody { index, reason })?;
        self.bodies.push(body);
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn get(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    /// Ordered render view, one entry per body
    pub fn views(&self) -> impl ExactSizeIterator<Item = BodyView> + '_ {
        self.bodies.iter().map(Body::view)
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

/// Fixed axis-aligned arena: `pos` is the top-left corner, `size` the extent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBox {
    pub pos: Vec2,
    pub size: Vec2,
}

impl WorldBox {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Arena anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::zeros(), vec2(width, height))
    }

    pub fn min(&self) -> Vec2 {
        self.pos
    }

    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True when the whole circle lies inside the box
    pub fn contains_circle(&self, center: Vec2, r: f32) -> bool {
        let (lo, hi) = (self.min(), self.max());
        center.x - r >= lo.x && center.x + r <= hi.x && center.y - r >= lo.y && center.y + r <= hi.y
    }

    pub fn check(&self) -> Result<(), SimError> {
        if !(self.pos.iter().all(|c| c.is_finite()) && self.size.iter().all(|c| c.is_finite())) {
            return Err(SimError::InvalidArena("position and size must be finite"));
        }
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(SimError::InvalidArena("size must be positive"));
        }
        Ok(())
    }
}
