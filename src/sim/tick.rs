//! Per-frame simulation step
//!
//! [`tick`] is the single entry point the platform layer calls: it consumes
//! one [`TickInput`] snapshot and advances the whole world by `dt` seconds.
//! Everything observable about the game (physics, spawning, collision,
//! scoring, phase transitions) happens in here, in a fixed order.

use crate::consts::*;

use super::collision;
use super::physics;
use super::spawn;
use super::state::{GamePhase, GameState, HazardKind};

/// Input snapshot for one simulation step. `jump`, `pause` and `reset` are
/// edge-triggered one-shots; `crouch` is the held key level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub jump: bool,
    pub crouch: bool,
    pub pause: bool,
    pub reset: bool,
}

/// Advance the simulation by `dt` seconds.
///
/// `dt` is clamped to a sane range so a debugger pause or a stalled frame
/// cannot tunnel entities through the player. Reset is honored in every
/// phase; pause toggles between Running and Paused; all world mutation is
/// gated on the Running phase.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.clamp(MIN_DT, MAX_DT);

    if input.reset {
        state.reset();
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Running => {
                state.phase = GamePhase::Paused;
                log::info!("Paused");
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Running;
                log::info!("Resumed");
            }
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Running {
        return;
    }

    state.elapsed += dt;
    if state.tuning.passive_score {
        state.passive_acc += dt;
        while state.passive_acc >= 1.0 {
            state.passive_acc -= 1.0;
            state.score += 1;
        }
    }

    state.player.crouching = input.crouch;
    if input.jump {
        physics::try_jump(&mut state.player, state.tuning.jump_velocity);
    }
    physics::integrate(&mut state.player, state.tuning.gravity, dt);

    state.invuln_timer = (state.invuln_timer - dt).max(0.0);

    spawn::advance(state, dt);

    // Scroll hazards and score safe passes. At most one hazard can connect
    // per tick; it is remembered here and consumed after the scan so the
    // iteration never mutates the list it walks.
    let player_x = state.player.pos.x;
    let mut hit_id = None;
    for hazard in &mut state.hazards {
        hazard.pos.x -= hazard.speed * dt;

        if hit_id.is_none()
            && state.invuln_timer <= 0.0
            && collision::player_hits_hazard(&state.player, hazard)
        {
            hit_id = Some(hazard.id);
            continue;
        }

        if hazard.counted {
            continue;
        }
        if (hazard.pos.x - player_x).abs() < CLOSE_THRESHOLD
            && collision::evasion_holds(hazard.kind, &state.player)
        {
            hazard.evaded = true;
        }
        if hazard.pos.x < player_x - PASS_MARGIN {
            hazard.counted = true;
            if hazard.evaded {
                let points = match hazard.kind {
                    HazardKind::Ground => state.tuning.ground_hazard_points,
                    HazardKind::Flying => state.tuning.flying_hazard_points,
                };
                state.score += points;
                log::debug!("Evaded {:?} hazard #{}: +{points}", hazard.kind, hazard.id);
            }
        }
    }
    if let Some(id) = hit_id {
        state.hazards.retain(|h| h.id != id);
        state.lives = state.lives.saturating_sub(1);
        state.invuln_timer = state.tuning.invuln_secs;
        log::info!("Hit by hazard #{id}; lives left: {}", state.lives);
        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("Game over at score {}", state.score);
        }
    }

    // Scroll collectibles; picking one up removes it and scores in the same
    // step.
    let world_speed = state.tuning.world_speed;
    let player_box = state.player.collision_box();
    let mut gained = 0u32;
    state.collectibles.retain_mut(|c| {
        c.pos.x -= world_speed * dt;
        if player_box.overlaps(&c.collision_box()) {
            log::debug!("Picked up collectible #{}: +{}", c.id, c.value);
            gained += c.value;
            false
        } else {
            true
        }
    });
    state.score += gained;

    for deco in &mut state.decorations {
        deco.pos.x -= deco.speed * dt;
    }

    // Off-screen cleanup, unconditional for every category
    state.hazards.retain(|h| h.pos.x > DESPAWN_X);
    state.collectibles.retain(|c| c.pos.x > DESPAWN_X);
    state.decorations.retain(|d| d.pos.x > DESPAWN_X);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::state::{Collectible, Hazard};
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    /// Fresh state with the spawner pushed far out so tests control the
    /// entity population exactly.
    fn quiet_state(tuning: Tuning) -> GameState {
        let mut state = GameState::new(7, tuning);
        state.timers.hazard = 1e9;
        state.timers.collectible = 1e9;
        state.timers.decoration = 1e9;
        state
    }

    fn run(state: &mut GameState, input: &TickInput, ticks: usize) {
        for _ in 0..ticks {
            tick(state, input, DT);
        }
    }

    #[test]
    fn test_ground_hazard_hit_costs_a_life() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(id, 28.0, state.tuning.world_speed));
        let lives = state.lives;

        // The hazard needs ~2.7s to scroll into the player; nothing happens
        // before contact.
        run(&mut state, &TickInput::default(), 160);
        assert_eq!(state.lives, lives);
        assert_eq!(state.hazards.len(), 1);

        run(&mut state, &TickInput::default(), 32);
        assert_eq!(state.lives, lives - 1);
        assert!(state.hazards.is_empty(), "hit hazard is consumed");
        assert!(state.invuln_timer > 0.0);
        assert_eq!(state.score, 0, "a hit never scores");
    }

    #[test]
    fn test_jumping_over_ground_hazard_scores_once() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(id, 6.0, state.tuning.world_speed));
        let lives = state.lives;

        let mut jumped = false;
        for _ in 0..240 {
            let jump = !jumped
                && state
                    .hazards
                    .first()
                    .is_some_and(|h| h.pos.x < 3.0);
            if jump {
                jumped = true;
            }
            tick(&mut state, &TickInput { jump, ..Default::default() }, DT);
        }

        assert_eq!(state.lives, lives);
        assert_eq!(state.score, state.tuning.ground_hazard_points);
        assert!(!state.player.jumping, "player lands after the pass");
    }

    #[test]
    fn test_staying_grounded_evades_flying_hazard() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::flying(id, 6.0, state.tuning.world_speed, 1.3));
        let lives = state.lives;

        run(&mut state, &TickInput::default(), 240);

        assert_eq!(state.lives, lives, "grounded player never hits a flyer");
        assert_eq!(state.score, state.tuning.flying_hazard_points);
    }

    #[test]
    fn test_airborne_crouch_earns_no_flying_credit() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        // Parked well above the jump apex so it can never connect
        state
            .hazards
            .push(Hazard::flying(id, 6.0, state.tuning.world_speed, 6.0));

        // Jump at the start and hold crouch; the player is airborne through
        // the whole close-approach window
        tick(
            &mut state,
            &TickInput { jump: true, crouch: true, ..Default::default() },
            DT,
        );
        run(&mut state, &TickInput { crouch: true, ..Default::default() }, 240);

        assert_eq!(state.score, 0, "airborne crouch is not evasion of a flyer");
        assert_eq!(state.lives, state.tuning.lives);
    }

    #[test]
    fn test_jumping_into_flying_hazard_costs_a_life() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::flying(id, 2.0, state.tuning.world_speed, 1.4));
        let lives = state.lives;

        tick(
            &mut state,
            &TickInput { jump: true, ..Default::default() },
            DT,
        );
        run(&mut state, &TickInput::default(), 30);

        assert_eq!(state.lives, lives - 1);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_invulnerability_ignores_overlap() {
        let mut state = quiet_state(Tuning::default());
        state.invuln_timer = 1.0;
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(id, 0.0, state.tuning.world_speed));
        let lives = state.lives;

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.lives, lives);
        assert_eq!(state.hazards.len(), 1);
    }

    #[test]
    fn test_pause_freezes_the_world() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(id, 20.0, state.tuning.world_speed));

        tick(
            &mut state,
            &TickInput { pause: true, ..Default::default() },
            DT,
        );
        assert_eq!(state.phase, GamePhase::Paused);

        let x = state.hazards[0].pos.x;
        let elapsed = state.elapsed;
        run(&mut state, &TickInput::default(), 60);
        assert_eq!(state.hazards[0].pos.x, x);
        assert_eq!(state.elapsed, elapsed);

        tick(
            &mut state,
            &TickInput { pause: true, ..Default::default() },
            DT,
        );
        assert_eq!(state.phase, GamePhase::Running);
        run(&mut state, &TickInput::default(), 1);
        assert!(state.hazards[0].pos.x < x);
    }

    #[test]
    fn test_game_over_freezes_until_reset() {
        let tuning = Tuning { lives: 1, ..Tuning::default() };
        let mut state = quiet_state(tuning);
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(id, 1.0, state.tuning.world_speed));

        run(&mut state, &TickInput::default(), 10);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);

        // The terminal state is inert: no motion, no pause, no jump
        let other = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(other, 20.0, state.tuning.world_speed));
        run(
            &mut state,
            &TickInput { jump: true, pause: true, ..Default::default() },
            60,
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.hazards[0].pos.x, 20.0);
        assert!(!state.player.jumping);

        // Reset is the one way out
        tick(
            &mut state,
            &TickInput { reset: true, ..Default::default() },
            DT,
        );
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lives, state.tuning.lives);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut state = quiet_state(Tuning::default());
        tick(&mut state, &TickInput::default(), 10.0);
        assert_eq!(state.elapsed, MAX_DT);

        let before = state.elapsed;
        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.elapsed > before, "zero dt still advances minimally");
    }

    #[test]
    fn test_collectible_pickup_scores_and_removes() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state.collectibles.push(Collectible {
            id,
            pos: Vec3::new(0.3, 0.6, 0.0),
            size: 0.5,
            value: state.tuning.collectible_value,
        });

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score, state.tuning.collectible_value);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_offscreen_entities_are_removed() {
        let mut state = quiet_state(Tuning::default());
        let id = state.next_entity_id();
        state
            .hazards
            .push(Hazard::ground(id, DESPAWN_X + 0.05, state.tuning.world_speed));

        tick(&mut state, &TickInput::default(), DT);
        assert!(state.hazards.is_empty());
    }

    #[test]
    fn test_passive_time_scoring_when_enabled() {
        let tuning = Tuning { passive_score: true, ..Tuning::default() };
        let mut state = quiet_state(tuning);

        run(&mut state, &TickInput::default(), 120);
        assert!((1..=2).contains(&state.score), "score was {}", state.score);
    }
}
