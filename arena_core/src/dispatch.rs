//! Combat dispatcher: looks a ball's character up in the registry, invokes
//! the callback, and records the resulting stat changes into the frame
//! events so observers see them immediately. A ball whose character id is
//! missing from the registry is a configuration bug; it is logged and
//! skipped, never a panic.

use log::warn;

use crate::characters::CharacterRegistry;
use crate::components::{Ball, WallSide};
use crate::resources::Events;

/// The other player's number in a two-player match
pub fn opponent_of(player: u8) -> u8 {
    if player == 1 {
        2
    } else {
        1
    }
}

pub fn frame_update(registry: &CharacterRegistry, ball: &mut Ball, events: &mut Events) {
    let Some(character) = registry.get_by_id(&ball.character) else {
        warn_missing(ball);
        return;
    };
    character.on_update(ball);
    events.mark_stats(ball.player);
}

pub fn wall_hit(
    registry: &CharacterRegistry,
    ball: &mut Ball,
    side: WallSide,
    events: &mut Events,
) {
    let Some(character) = registry.get_by_id(&ball.character) else {
        warn_missing(ball);
        return;
    };
    character.on_wall_hit(ball, side);
    events.wall_hits.push((ball.player, side));
    events.mark_stats(ball.player);
}

pub fn ball_hit(
    registry: &CharacterRegistry,
    ball: &mut Ball,
    opponent: &mut Ball,
    events: &mut Events,
) {
    let Some(character) = registry.get_by_id(&ball.character) else {
        warn_missing(ball);
        return;
    };
    character.on_ball_hit(ball, opponent);
    events.mark_stats(ball.player);
    events.mark_hp(opponent.player);
}

/// Invoked on the *shooter* when one of its projectiles lands
pub fn projectile_hit(registry: &CharacterRegistry, shooter: &mut Ball, events: &mut Events) {
    let Some(character) = registry.get_by_id(&shooter.character) else {
        warn_missing(shooter);
        return;
    };
    character.on_projectile_hit(shooter);
    events.mark_stats(shooter.player);
}

/// Declare the opponent winner the moment a ball's hp reaches zero. The
/// first declaration in a frame sticks.
pub fn check_death(ball: &Ball, events: &mut Events) {
    if ball.is_dead() {
        events.declare_winner(opponent_of(ball.player));
    }
}

fn warn_missing(ball: &Ball) {
    warn!(
        "character `{}` for player {} is not registered; skipping callback",
        ball.character, ball.player
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::{CharacterId, CharacterRegistry};

    #[test]
    fn test_opponent_of() {
        assert_eq!(opponent_of(1), 2);
        assert_eq!(opponent_of(2), 1);
    }

    #[test]
    fn test_check_death_declares_the_other_player() {
        let mut events = Events::new();
        let mut ball = Ball::new(1, CharacterId::new("unarmed"));
        ball.hp = 0.0;
        check_death(&ball, &mut events);
        assert_eq!(events.match_over, Some(2));
    }

    #[test]
    fn test_unregistered_character_is_skipped() {
        let registry = CharacterRegistry::new();
        let mut events = Events::new();
        let mut ball = Ball::new(1, CharacterId::new("ghost"));

        frame_update(&registry, &mut ball, &mut events);
        wall_hit(&registry, &mut ball, WallSide::Left, &mut events);

        assert!(events.stats_changed.is_empty());
        assert!(events.wall_hits.is_empty());
    }
}
