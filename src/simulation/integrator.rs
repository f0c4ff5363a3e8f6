//! Variable-step time integration
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the new
//! velocity drives the position update. `dt` comes straight from the frame
//! clock and is not validated here.

use super::math::Vec2;
use super::states::System;

/// Advance every non-static body by `dt` using the accelerations in `accels`
/// (one entry per body, same order as `sys.bodies`). Also advances `sys.t`.
pub fn semi_implicit_euler(sys: &mut System, accels: &[Vec2], dt: f32) {
    debug_assert_eq!(sys.bodies.len(), accels.len());

    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        if b.is_static {
            continue;
        }
        // v_n+1 = v_n + dt * a_n
        b.v += *a * dt;
        // x_n+1 = x_n + dt * v_n+1
        b.x += b.v * dt;
    }

    sys.t += f64::from(dt);
}
