//! Force / acceleration contributors
//!
//! Every term writes into a shared per-body acceleration buffer. Nothing in
//! here touches body state; the integrator consumes the buffer afterwards.

use crate::simulation::engine::Engine;
use crate::simulation::math::{normalize_or_zero, Vec2};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Collection of acceleration terms (uniform field, pairwise gravity, ...)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Register the terms switched on in `engine`, pairwise gravity first
    pub fn from_engine(engine: &Engine, params: &Parameters) -> Self {
        let mut set = Self::new();
        if engine.pairwise_gravity {
            set = set.with(PairwiseGravity {
                g: params.g,
                min_distance: params.min_gravity_distance,
            });
        }
        if engine.uniform_gravity {
            set = set.with(UniformGravity {
                g: params.uniform_gravity,
            });
        }
        set
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [Vec2]) {
        for a in out.iter_mut() {
            *a = Vec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [Vec2]);
}

/// Constant field applied to every non-static body, particles included
pub struct UniformGravity {
    pub g: Vec2,
}

impl Acceleration for UniformGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [Vec2]) {
        for (b, a) in sys.bodies.iter().zip(out.iter_mut()) {
            if b.is_static {
                continue;
            }
            *a += self.g;
        }
    }
}

/// Unsoftened inverse-square attraction between massive bodies.
///
/// Every ordered pair `(i, j)` is visited, so the cost is exhaustive O(n^2).
/// Static bodies pull on others but are never pulled. Particles neither pull
/// nor get pulled. Pairs closer than `min_distance` are skipped.
pub struct PairwiseGravity {
    pub g: f32, // gravitational constant
    pub min_distance: f32,
}

impl Acceleration for PairwiseGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [Vec2]) {
        let n = sys.bodies.len();

        for i in 0..n {
            let bi = &sys.bodies[i];
            if bi.is_static || !bi.is_massive() {
                continue;
            }

            for j in 0..n {
                if i == j {
                    continue;
                }
                let bj = &sys.bodies[j];
                if !bj.is_massive() {
                    continue;
                }

                // r points from i to j, so i is pulled along +r
                let r = bj.x - bi.x;
                let dist2 = r.norm_squared();
                if dist2.sqrt() < self.min_distance {
                    continue;
                }

                // |a_i| = G * m_j / |r|^2
                let mag = self.g * bj.m / dist2;
                out[i] += normalize_or_zero(r) * mag;
            }
        }
    }
}
