//! Player vertical physics
//!
//! The only forces in the game: a jump impulse and gravity. The world scrolls,
//! the player does not move horizontally.

use crate::consts::GROUND_Y;

use super::state::Player;

/// Request a jump. Accepted only while grounded; anything else (key repeat,
/// mid-air presses) is a silent no-op.
///
/// Returns whether the jump was accepted.
pub fn try_jump(player: &mut Player, jump_velocity: f32) -> bool {
    if !player.grounded() {
        return false;
    }
    player.vy = jump_velocity;
    player.jumping = true;
    true
}

/// Advance the player's vertical state by `dt` seconds under gravity.
/// Landing clamps to the ground plane and zeroes the velocity.
pub fn integrate(player: &mut Player, gravity: f32, dt: f32) {
    if !player.jumping {
        return;
    }
    player.vy += gravity * dt;
    player.pos.y += player.vy * dt;
    if player.pos.y <= GROUND_Y {
        player.pos.y = GROUND_Y;
        player.vy = 0.0;
        player.jumping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_grounded_player_stays_put() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        for _ in 0..600 {
            integrate(&mut player, tuning.gravity, DT);
        }
        assert_eq!(player.pos.y, GROUND_Y);
        assert_eq!(player.vy, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_jump_rises_immediately() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        assert!(player.grounded());
        assert!(try_jump(&mut player, tuning.jump_velocity));
        assert!(player.jumping);
        assert!(!player.grounded());

        integrate(&mut player, tuning.gravity, DT);
        assert!(player.pos.y > GROUND_Y);
    }

    #[test]
    fn test_jump_while_airborne_is_noop() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        assert!(try_jump(&mut player, tuning.jump_velocity));
        integrate(&mut player, tuning.gravity, DT);

        let (y, vy) = (player.pos.y, player.vy);
        assert!(!try_jump(&mut player, tuning.jump_velocity));
        assert_eq!(player.pos.y, y);
        assert_eq!(player.vy, vy);
    }

    #[test]
    fn test_jump_arc_lands_back_on_ground() {
        let tuning = Tuning::default();
        let mut player = Player::new();
        try_jump(&mut player, tuning.jump_velocity);

        // Analytic flight time is 2*v/|g| ~ 0.91s; give it two seconds
        let mut peak = 0.0f32;
        for _ in 0..120 {
            integrate(&mut player, tuning.gravity, DT);
            peak = peak.max(player.pos.y);
        }
        assert!(!player.jumping);
        assert_eq!(player.pos.y, GROUND_Y);
        assert_eq!(player.vy, 0.0);
        // Peak near the ballistic apex v^2/(2|g|) ~ 2.27
        assert!(peak > 1.8 && peak < 2.5, "peak was {peak}");
    }
}
