//! Data-driven game balance
//!
//! Everything a designer might want to nudge without recompiling lives here.
//! A JSON file can override any subset of fields; missing fields fall back to
//! the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Spawn-interval parameters for one entity category
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntervalTuning {
    /// Mean interval in seconds before the difficulty decay is applied
    pub base: f32,
    /// Uniform jitter around the base (+/-)
    pub jitter: f32,
    /// Hard minimum interval; the decay can never push below this
    pub floor: f32,
}

/// Game balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration while airborne (units/s^2, negative)
    pub gravity: f32,
    /// Initial upward velocity of a jump (units/s)
    pub jump_velocity: f32,
    /// How fast the world scrolls toward the player (units/s)
    pub world_speed: f32,

    /// Starting lives; 1 gives the strict instant-death variant
    pub lives: u32,
    /// Seconds of invulnerability after losing a life
    pub invuln_secs: f32,

    /// Points for safely jumping a ground hazard
    pub ground_hazard_points: u32,
    /// Points for safely passing a flying hazard
    pub flying_hazard_points: u32,
    /// Points per collectible picked up
    pub collectible_value: u32,
    /// Award one point per full second of active play
    pub passive_score: bool,

    pub hazard_interval: IntervalTuning,
    pub collectible_interval: IntervalTuning,
    pub decoration_interval: IntervalTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: -22.0,
            jump_velocity: 10.0,
            world_speed: crate::consts::WORLD_SPEED,

            lives: 3,
            invuln_secs: 1.0,

            ground_hazard_points: 1,
            flying_hazard_points: 2,
            collectible_value: 5,
            passive_score: false,

            hazard_interval: IntervalTuning {
                base: 1.2,
                jitter: 0.5,
                floor: 0.45,
            },
            collectible_interval: IntervalTuning {
                base: 2.6,
                jitter: 1.0,
                floor: 0.40,
            },
            decoration_interval: IntervalTuning {
                base: 1.0,
                jitter: 0.8,
                floor: 0.30,
            },
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Using default tuning ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}
