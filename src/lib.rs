//! Dino Dash - a 3D single-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline (reads simulation state only)
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;
    /// Clamp range for incoming frame deltas (guards first-frame and stall spikes)
    pub const MIN_DT: f32 = 0.001;
    pub const MAX_DT: f32 = 0.1;

    /// Ground plane height; the player rests here when not airborne
    pub const GROUND_Y: f32 = 0.0;
    /// Tolerance for "on the ground" checks
    pub const GROUND_EPS: f32 = 1e-5;

    /// Player body box (full extents)
    pub const PLAYER_WIDTH: f32 = 1.4;
    pub const PLAYER_HEIGHT: f32 = 2.2;
    pub const PLAYER_DEPTH: f32 = 0.8;
    /// Effective collision height multiplier while crouching on the ground
    pub const CROUCH_HEIGHT_FACTOR: f32 = 0.55;

    /// World scroll speed toward the player (units/s)
    pub const WORLD_SPEED: f32 = 10.0;
    /// Entities spawn this far ahead of the player on the x axis
    pub const SPAWN_X: f32 = 40.0;
    /// Entities past this x are unconditionally removed
    pub const DESPAWN_X: f32 = -60.0;

    /// Horizontal window around the player where evasion is sampled for scoring
    pub const CLOSE_THRESHOLD: f32 = 0.8;
    /// A hazard counts as "passed" once its x drops below player x minus this
    pub const PASS_MARGIN: f32 = 0.5;

    /// Ground hazard box (full extents)
    pub const GROUND_HAZARD_SIZE: [f32; 3] = [0.7, 1.2, 0.6];
    /// Flying hazard box (full extents); spawn height puts it at jump mid-height
    pub const FLYING_HAZARD_SIZE: [f32; 3] = [0.9, 0.6, 0.8];
    pub const FLYING_HAZARD_BASE_Y: f32 = 1.2;

    /// Collectible cube edge and the two fixed spawn heights
    pub const COLLECTIBLE_SIZE: f32 = 0.5;
    pub const COLLECTIBLE_LOW_Y: f32 = 0.6;
    pub const COLLECTIBLE_HIGH_Y: f32 = 2.4;
    /// Probability of the low placement (reachable without jumping)
    pub const COLLECTIBLE_LOW_WEIGHT: f64 = 0.7;
}
