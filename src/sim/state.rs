//! Game state and core simulation types
//!
//! One owned aggregate holds everything the simulation mutates; components
//! receive it by reference. No globals, no ambient state.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen by explicit input; resumes where it left off
    Paused,
    /// Run ended; state stays readable for the final frame
    GameOver,
}

/// The player character. It never moves horizontally - the world scrolls
/// toward it instead.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec3,
    /// Body box full extents (w, h, d)
    pub size: Vec3,
    /// Vertical velocity while airborne
    pub vy: f32,
    /// True iff airborne
    pub jumping: bool,
    /// Held input flag; shrinks the collision box while grounded
    pub crouching: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, GROUND_Y, 0.0),
            size: Vec3::new(PLAYER_WIDTH, PLAYER_HEIGHT, PLAYER_DEPTH),
            vy: 0.0,
            jumping: false,
            crouching: false,
        }
    }

    /// True when resting on the ground plane
    pub fn grounded(&self) -> bool {
        !self.jumping && self.pos.y <= GROUND_Y + GROUND_EPS
    }

    /// Effective collision height; crouching only compresses a grounded body
    pub fn effective_height(&self) -> f32 {
        if self.crouching && !self.jumping {
            self.size.y * CROUCH_HEIGHT_FACTOR
        } else {
            self.size.y
        }
    }

    /// Collision box, centered on the body (pos.y is the feet)
    pub fn collision_box(&self) -> Aabb {
        let h = self.effective_height();
        Aabb::new(
            Vec3::new(self.pos.x, self.pos.y + h / 2.0, self.pos.z),
            Vec3::new(self.size.x, h, self.size.z),
        )
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Hazard category; the gating duality is the core difficulty mechanic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    /// Sits on the ground, must be jumped over
    Ground,
    /// Flies at jump height, hittable only mid-air
    Flying,
}

/// A scrolling obstacle
#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: u32,
    pub kind: HazardKind,
    /// pos.y is the bottom of the box
    pub pos: Vec3,
    /// Full extents
    pub size: Vec3,
    /// Horizontal scroll speed (units/s, moves toward -x)
    pub speed: f32,
    /// Scoring already applied for this hazard
    pub counted: bool,
    /// Evasion condition was observed inside the close-approach window
    pub evaded: bool,
}

impl Hazard {
    pub fn ground(id: u32, x: f32, speed: f32) -> Self {
        let [w, h, d] = GROUND_HAZARD_SIZE;
        Self {
            id,
            kind: HazardKind::Ground,
            pos: Vec3::new(x, GROUND_Y, 0.0),
            size: Vec3::new(w, h, d),
            speed,
            counted: false,
            evaded: false,
        }
    }

    pub fn flying(id: u32, x: f32, speed: f32, y: f32) -> Self {
        let [w, h, d] = FLYING_HAZARD_SIZE;
        Self {
            id,
            kind: HazardKind::Flying,
            pos: Vec3::new(x, y, 0.0),
            size: Vec3::new(w, h, d),
            speed,
            counted: false,
            evaded: false,
        }
    }

    pub fn collision_box(&self) -> Aabb {
        Aabb::new(
            Vec3::new(self.pos.x, self.pos.y + self.size.y / 2.0, self.pos.z),
            self.size,
        )
    }
}

/// A pickup worth points
#[derive(Debug, Clone)]
pub struct Collectible {
    pub id: u32,
    /// Box center
    pub pos: Vec3,
    /// Cube edge length
    pub size: f32,
    pub value: u32,
}

impl Collectible {
    pub fn collision_box(&self) -> Aabb {
        Aabb::new(self.pos, Vec3::splat(self.size))
    }
}

/// Visual-only scenery (clouds); never collides, never scores
#[derive(Debug, Clone)]
pub struct Decoration {
    pub id: u32,
    pub pos: Vec3,
    pub scale: f32,
    pub speed: f32,
}

/// Countdown timers driving the spawner; seconds until the next spawn of
/// each category
#[derive(Debug, Clone, Default)]
pub struct SpawnTimers {
    pub hazard: f32,
    pub collectible: f32,
    pub decoration: f32,
}

/// Complete game state (deterministic given the seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Seconds of post-hit invulnerability remaining
    pub invuln_timer: f32,
    /// Active play time in seconds (excludes pauses)
    pub elapsed: f32,

    pub player: Player,
    pub hazards: Vec<Hazard>,
    pub collectibles: Vec<Collectible>,
    pub decorations: Vec<Decoration>,
    pub timers: SpawnTimers,

    pub tuning: Tuning,

    /// Fractional-second accumulator for passive time scoring
    pub(crate) passive_acc: f32,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            lives: tuning.lives,
            invuln_timer: 0.0,
            elapsed: 0.0,
            player: Player::new(),
            hazards: Vec::new(),
            collectibles: Vec::new(),
            decorations: Vec::new(),
            timers: SpawnTimers::default(),
            tuning,
            passive_acc: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        super::spawn::seed_timers(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart: clear every entity, restore the player and session fields,
    /// re-seed the spawn countdowns. The RNG stream continues so consecutive
    /// runs differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.lives = self.tuning.lives;
        self.invuln_timer = 0.0;
        self.elapsed = 0.0;
        self.passive_acc = 0.0;
        self.player = Player::new();
        self.hazards.clear();
        self.collectibles.clear();
        self.decorations.clear();
        self.next_id = 1;
        super::spawn::seed_timers(self);
        log::info!("Run reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_fresh() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, state.tuning.lives);
        assert!(state.hazards.is_empty());
        assert!(state.collectibles.is_empty());
        assert!(state.decorations.is_empty());
        assert_eq!(state.player.pos, Vec3::new(0.0, GROUND_Y, 0.0));
        // Countdowns are armed, not zero
        assert!(state.timers.hazard > 0.0);
        assert!(state.timers.collectible > 0.0);
        assert!(state.timers.decoration > 0.0);
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(7, Tuning::default());
        state.score = 37;
        state.lives = 0;
        state.phase = GamePhase::GameOver;
        state.player.pos.y = 3.0;
        state.player.jumping = true;
        state.player.vy = -4.0;
        state.hazards.push(Hazard::ground(9, 12.0, 10.0));
        state.decorations.push(Decoration {
            id: 10,
            pos: Vec3::new(5.0, 3.0, -1.0),
            scale: 1.0,
            speed: 4.0,
        });

        state.reset();

        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, state.tuning.lives);
        assert!(state.hazards.is_empty());
        assert!(state.decorations.is_empty());
        assert_eq!(state.player.pos, Vec3::new(0.0, GROUND_Y, 0.0));
        assert_eq!(state.player.vy, 0.0);
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(1, Tuning::default());
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
    }
}
