//! Axis-aligned collision tests and hazard category gating
//!
//! Overlap alone is not a hit: a ground hazard can only touch a grounded
//! player and a flying hazard can only touch an airborne one, which is what
//! makes jumping over one and staying under the other possible.

use glam::Vec3;

use super::state::{Hazard, HazardKind, Player};

/// An axis-aligned box given by its center and full extents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec3,
    pub size: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    /// Strict overlap test on all three axes; exactly touching boxes do not
    /// overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs() * 2.0;
        let e = self.size + other.size;
        d.x < e.x && d.y < e.y && d.z < e.z
    }
}

/// Whether an overlap with this hazard would actually count as a hit given
/// the player's current airborne state.
///
/// Ground hazards are jumped over: they only connect while the player is on
/// the ground. Flying hazards are ducked under: they only connect mid-air.
pub fn hit_is_live(kind: HazardKind, player: &Player) -> bool {
    match kind {
        HazardKind::Ground => !player.jumping,
        HazardKind::Flying => player.jumping,
    }
}

/// Whether the player currently satisfies the evasion condition for this
/// hazard category (sampled inside the close-approach window for scoring).
/// The conditions are the exact complements of [`hit_is_live`]: credit is
/// earned only in a state where the hazard could not connect.
pub fn evasion_holds(kind: HazardKind, player: &Player) -> bool {
    match kind {
        HazardKind::Ground => player.jumping,
        HazardKind::Flying => !player.jumping,
    }
}

/// Live collision test: AABB overlap and the category gate both hold.
pub fn player_hits_hazard(player: &Player, hazard: &Hazard) -> bool {
    hit_is_live(hazard.kind, player) && player.collision_box().overlaps(&hazard.collision_box())
}
