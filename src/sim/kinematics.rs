//! Vertical motion of the player: gravity, jump impulse and the ground clamp

use super::state::{GamePhase, Player};
use crate::tuning::Tuning;

/// Apply the jump impulse if the player is standing on the ground.
///
/// Ignored mid-air and after the run has ended. Returns whether the
/// impulse was applied.
pub fn jump(player: &mut Player, phase: GamePhase, tuning: &Tuning) -> bool {
    let on_ground = player.pos.y >= tuning.player_ground_y() - tuning.jump_tolerance;
    if player.airborne || phase == GamePhase::Over || !on_ground {
        return false;
    }
    player.vel_y = tuning.jump_impulse;
    player.airborne = true;
    true
}

/// Integrate one tick. Returns true on the tick the player lands.
pub fn update(player: &mut Player, tuning: &Tuning) -> bool {
    player.vel_y += tuning.gravity;
    player.pos.y += player.vel_y;

    let ground_y = tuning.player_ground_y();
    if player.pos.y < ground_y {
        return false;
    }

    player.pos.y = ground_y;
    player.vel_y = 0.0;
    // Clearing the flag also switches the box back to the running profile
    let landed = player.airborne;
    player.airborne = false;
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pose;

    #[test]
    fn test_grounded_player_stays_put() {
        let tuning = Tuning::default();
        let mut player = Player::grounded(&tuning);
        for _ in 0..100 {
            assert!(!update(&mut player, &tuning));
            assert_eq!(player.pos.y, tuning.player_ground_y());
            assert_eq!(player.vel_y, 0.0);
            assert!(!player.airborne);
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let tuning = Tuning::default();
        let mut player = Player::grounded(&tuning);

        assert!(jump(&mut player, GamePhase::Running, &tuning));
        assert_eq!(player.vel_y, tuning.jump_impulse);
        assert!(player.airborne);
        assert_eq!(player.pose(), Pose::Jumping);
    }

    #[test]
    fn test_no_double_jump() {
        let tuning = Tuning::default();
        let mut player = Player::grounded(&tuning);
        assert!(jump(&mut player, GamePhase::Running, &tuning));
        update(&mut player, &tuning);
        let vel = player.vel_y;

        assert!(!jump(&mut player, GamePhase::Running, &tuning));
        assert_eq!(player.vel_y, vel);
        assert!(player.airborne);
    }

    #[test]
    fn test_second_jump_same_tick_ignored() {
        let tuning = Tuning::default();
        let mut player = Player::grounded(&tuning);
        assert!(jump(&mut player, GamePhase::Running, &tuning));
        assert!(!jump(&mut player, GamePhase::Running, &tuning));
        assert_eq!(player.vel_y, tuning.jump_impulse);
    }

    #[test]
    fn test_no_jump_after_game_over() {
        let tuning = Tuning::default();
        let mut player = Player::grounded(&tuning);
        assert!(!jump(&mut player, GamePhase::Over, &tuning));
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.airborne);
    }

    #[test]
    fn test_jump_tolerance() {
        let tuning = Tuning::default();
        let ground = tuning.player_ground_y();

        let mut player = Player::grounded(&tuning);
        player.pos.y = ground - tuning.jump_tolerance;
        assert!(jump(&mut player, GamePhase::Running, &tuning));

        let mut player = Player::grounded(&tuning);
        player.pos.y = ground - tuning.jump_tolerance - 1.0;
        assert!(!jump(&mut player, GamePhase::Running, &tuning));
    }

    #[test]
    fn test_landing_clamps_exactly_once() {
        let tuning = Tuning::default();
        let ground = tuning.player_ground_y();
        let mut player = Player::grounded(&tuning);
        jump(&mut player, GamePhase::Running, &tuning);

        let mut landings = 0;
        let mut last_vel = player.vel_y;
        for _ in 0..200 {
            if update(&mut player, &tuning) {
                landings += 1;
                assert_eq!(player.pos.y, ground);
                assert_eq!(player.vel_y, 0.0);
                assert_eq!(player.pose(), Pose::Running);
            } else if player.airborne {
                // Velocity rises by gravity every airborne tick
                assert!(player.vel_y > last_vel);
                assert!(player.pos.y < ground);
            }
            last_vel = player.vel_y;
        }
        assert_eq!(landings, 1);
        assert!(!player.airborne);
    }

    #[test]
    fn test_airborne_box_profile() {
        let tuning = Tuning::default();
        let mut player = Player::grounded(&tuning);
        assert_eq!(player.size(&tuning).to_array(), [78.0, 121.0]);
        jump(&mut player, GamePhase::Running, &tuning);
        assert_eq!(player.size(&tuning).to_array(), [74.0, 162.0]);
    }
}
