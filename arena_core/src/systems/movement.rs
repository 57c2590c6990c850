use hecs::World;

use crate::arena::Arena;
use crate::characters::CharacterRegistry;
use crate::components::{Ball, WallSide};
use crate::config::Config;
use crate::dispatch;
use crate::resources::Events;

/// Integrate both balls: gravity, position, derived speed, then wall
/// bounces. Each bounce inverts the crossing velocity component, clamps the
/// ball back inside the arena and dispatches the wall-hit callback.
pub fn integrate_balls(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    registry: &CharacterRegistry,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Gravity pulls balls only; projectiles are exempt
        ball.vel.y += config.gravity;
        ball.pos += ball.vel;
        ball.current_speed = ball.vel.length();

        // Left/right walls
        if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > arena.width {
            ball.vel.x = -ball.vel.x;
            ball.pos.x = arena.clamp_x(ball.pos.x, ball.radius);

            let side = if ball.pos.x < arena.width * 0.5 {
                WallSide::Left
            } else {
                WallSide::Right
            };
            dispatch::wall_hit(registry, ball, side, events);
        }

        // Floor
        if ball.pos.y + ball.radius > arena.height {
            ball.pos.y = arena.clamp_y(ball.pos.y, ball.radius);
            ball.vel.y = -ball.vel.y;
            dispatch::wall_hit(registry, ball, WallSide::Floor, events);
        }

        // Ceiling
        if ball.pos.y - ball.radius < 0.0 {
            ball.pos.y = arena.clamp_y(ball.pos.y, ball.radius);
            ball.vel.y = -ball.vel.y;
            dispatch::wall_hit(registry, ball, WallSide::Ceiling, events);
        }
    }
}
