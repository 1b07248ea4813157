//! Camera rig: an orbiting third-person view and a head-mounted first-person
//! view, both derived from the player position every frame.

use glam::Vec3;

use super::state::Player;

const PITCH_MIN: f32 = 0.05;
const PITCH_MAX: f32 = 1.45;
const DISTANCE_MIN: f32 = 4.0;
const DISTANCE_MAX: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    ThirdPerson,
    FirstPerson,
}

/// Orbit parameters for the third-person view plus the active mode. First
/// person ignores the orbit and locks to the player's head.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub mode: ViewMode,
    /// Orbit angle around +y, radians
    pub yaw: f32,
    /// Elevation above the ground plane, radians, clamped away from the poles
    pub pitch: f32,
    pub distance: f32,
}

impl CameraRig {
    /// Defaults frame the lane from behind-left, slightly above
    pub fn new() -> Self {
        Self {
            mode: ViewMode::ThirdPerson,
            yaw: 2.2,
            pitch: 0.28,
            distance: 15.0,
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::ThirdPerson => ViewMode::FirstPerson,
            ViewMode::FirstPerson => ViewMode::ThirdPerson,
        };
        log::info!("View: {:?}", self.mode);
    }

    pub fn adjust_yaw(&mut self, delta: f32) {
        self.yaw += delta;
    }

    pub fn adjust_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(PITCH_MIN, PITCH_MAX);
    }

    pub fn adjust_distance(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(DISTANCE_MIN, DISTANCE_MAX);
    }

    /// Eye and look-at target for the current frame
    pub fn eye_target(&self, player: &Player) -> (Vec3, Vec3) {
        match self.mode {
            ViewMode::ThirdPerson => {
                let target = player.pos + Vec3::Y * 1.0;
                let (sy, cy) = self.yaw.sin_cos();
                let (sp, cp) = self.pitch.sin_cos();
                let offset = Vec3::new(cy * cp, sp, sy * cp) * self.distance;
                (target + offset, target)
            }
            ViewMode::FirstPerson => {
                let eye = player.pos + Vec3::new(0.5, 1.8, 0.0);
                (eye, eye + Vec3::X * 10.0)
            }
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
