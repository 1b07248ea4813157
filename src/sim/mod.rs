//! Deterministic game simulation
//!
//! Everything here is pure state manipulation: given a [`GameState`], a
//! [`TickInput`] and a timestep, [`tick`] produces the next state. No
//! rendering, windowing or platform dependencies, which keeps the whole
//! module testable on any target.

pub mod camera;
pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use camera::{CameraRig, ViewMode};
pub use state::{Collectible, Decoration, GamePhase, GameState, Hazard, HazardKind, Player};
pub use tick::{TickInput, tick};
