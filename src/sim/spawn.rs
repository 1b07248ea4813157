//! Time-driven entity spawning and the difficulty ramp
//!
//! Each category (hazards, collectibles, decorations) runs an independent
//! countdown. Intervals shrink as the score climbs - multiplicatively via
//! `decay_factor` - but never below a per-category floor, so spawn storms are
//! impossible no matter how long a run lasts.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::IntervalTuning;

use super::state::{Collectible, Decoration, GameState, Hazard};

/// Difficulty ramp: every 5 points makes spawns 1.5% faster. Strictly
/// decreasing in score until the interval floors take over.
pub fn decay_factor(score: u32) -> f32 {
    0.985f32.powi((score / 5) as i32)
}

/// Sample the next countdown for a category. Pure in `(rng, tuning, decay)`:
/// uniform around the base, scaled by the decay, clamped to the floor.
pub fn sample_interval(rng: &mut Pcg32, tuning: IntervalTuning, decay: f32) -> f32 {
    let sampled = if tuning.jitter > 0.0 {
        rng.random_range(tuning.base - tuning.jitter..tuning.base + tuning.jitter)
    } else {
        tuning.base
    };
    (sampled * decay).max(tuning.floor)
}

/// Arm all three countdowns for a fresh run
pub fn seed_timers(state: &mut GameState) {
    let decay = decay_factor(state.score);
    state.timers.hazard = sample_interval(&mut state.rng, state.tuning.hazard_interval, decay);
    state.timers.collectible =
        sample_interval(&mut state.rng, state.tuning.collectible_interval, decay);
    state.timers.decoration =
        sample_interval(&mut state.rng, state.tuning.decoration_interval, decay);
}

/// Advance all countdowns by `dt`, spawning one entity per expired timer and
/// re-sampling it.
pub fn advance(state: &mut GameState, dt: f32) {
    state.timers.hazard -= dt;
    state.timers.collectible -= dt;
    state.timers.decoration -= dt;

    let decay = decay_factor(state.score);

    if state.timers.hazard <= 0.0 {
        spawn_hazard(state);
        state.timers.hazard = sample_interval(&mut state.rng, state.tuning.hazard_interval, decay);
    }
    if state.timers.collectible <= 0.0 {
        spawn_collectible(state);
        state.timers.collectible =
            sample_interval(&mut state.rng, state.tuning.collectible_interval, decay);
    }
    if state.timers.decoration <= 0.0 {
        spawn_decoration(state);
        state.timers.decoration =
            sample_interval(&mut state.rng, state.tuning.decoration_interval, decay);
    }
}

/// New hazard, 50/50 ground or flying, always on-lane
fn spawn_hazard(state: &mut GameState) {
    let id = state.next_entity_id();
    let speed = state.tuning.world_speed;
    let hazard = if state.rng.random_bool(0.5) {
        Hazard::ground(id, SPAWN_X, speed)
    } else {
        let y = FLYING_HAZARD_BASE_Y + state.rng.random_range(0.2..0.4);
        Hazard::flying(id, SPAWN_X, speed, y)
    };
    log::debug!("Spawned {:?} hazard #{id}", hazard.kind);
    state.hazards.push(hazard);
}

/// New collectible at one of two fixed heights, always on-lane
fn spawn_collectible(state: &mut GameState) {
    let id = state.next_entity_id();
    let y = if state.rng.random_bool(COLLECTIBLE_LOW_WEIGHT) {
        COLLECTIBLE_LOW_Y
    } else {
        COLLECTIBLE_HIGH_Y
    };
    state.collectibles.push(Collectible {
        id,
        pos: glam::Vec3::new(SPAWN_X, y, 0.0),
        size: COLLECTIBLE_SIZE,
        value: state.tuning.collectible_value,
    });
}

/// New cloud; decorations alone may drift off-lane and scroll slower for
/// parallax
fn spawn_decoration(state: &mut GameState) {
    let id = state.next_entity_id();
    let y = 2.2 + state.rng.random_range(0.6..1.6);
    let z = state.rng.random_range(-2.0..2.0);
    let scale = state.rng.random_range(0.6..1.2);
    let speed = state.tuning.world_speed * state.rng.random_range(0.35..0.55);
    state.decorations.push(Decoration {
        id,
        pos: glam::Vec3::new(SPAWN_X, y, z),
        scale,
        speed,
    });
}
