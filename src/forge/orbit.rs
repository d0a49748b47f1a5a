use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

pub const STARTING_ORBIT: f64 = 25_000.0;
pub const RESOURCE_ORBIT_MIN: f64 = 35_000.0;
pub const RESOURCE_ORBIT_MAX: f64 = 50_000.0;

/// Velocity roughly perpendicular to the position vector, which gives a body
/// orbit-like motion around the system center. Magnitude falls off with
/// distance so outer planets drift slower.
pub fn perp_velocity(rng: &mut ChaCha8Rng, px: f64, py: f64, speed_scale: f64) -> (f64, f64) {
    let mag = px.hypot(py);
    if mag == 0.0 {
        return (rng.gen_range(-50.0..=50.0), rng.gen_range(-50.0..=50.0));
    }
    let speed = speed_scale * (20_000.0 / (mag.sqrt() + 1.0));
    (-py / mag * speed, px / mag * speed)
}

/// Starting planets sit evenly spaced on a shared orbit, one slot per player.
/// Rotational symmetry keeps the spawns positionally fair.
pub fn starting_positions(players: usize) -> Vec<(f64, f64)> {
    (0..players)
        .map(|slot| {
            let angle = TAU * slot as f64 / players as f64;
            (STARTING_ORBIT * angle.cos(), STARTING_ORBIT * angle.sin())
        })
        .collect()
}

/// Random polar placement in the resource band outside the starting orbit.
pub fn resource_position(rng: &mut ChaCha8Rng) -> (f64, f64) {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(RESOURCE_ORBIT_MIN..=RESOURCE_ORBIT_MAX);
    (distance * angle.cos(), distance * angle.sin())
}
