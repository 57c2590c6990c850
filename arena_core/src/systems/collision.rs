use hecs::World;

use crate::characters::CharacterRegistry;
use crate::components::Ball;
use crate::dispatch;
use crate::resources::Events;

/// Resolve the ball-ball collision, once per frame after both balls have
/// moved. Overlapping balls are pushed apart along the collision normal;
/// the elastic impulse and the ball-hit callbacks only apply when the balls
/// are approaching.
pub fn resolve_ball_clash(world: &mut World, registry: &CharacterRegistry, events: &mut Events) {
    let mut query = world.query_mut::<&mut Ball>().into_iter();
    let Some((_, first)) = query.next() else {
        return;
    };
    let Some((_, second)) = query.next() else {
        return;
    };
    // Callback order is the player order
    let (b1, b2) = if first.player <= second.player {
        (first, second)
    } else {
        (second, first)
    };

    let delta = b2.pos - b1.pos;
    let distance = delta.length();
    let min_distance = b1.radius + b2.radius;
    if distance >= min_distance {
        return;
    }

    // Coincident centers leave the normal undefined; skip this frame
    if distance <= f32::EPSILON {
        return;
    }

    let normal = delta / distance;
    let overlap = min_distance - distance;
    b1.pos -= normal * overlap * 0.5;
    b2.pos += normal * overlap * 0.5;

    let closing = (b2.vel - b1.vel).dot(normal);
    if closing < 0.0 {
        // Equal-and-opposite velocity exchange along the normal
        b1.vel += normal * closing;
        b2.vel -= normal * closing;

        dispatch::ball_hit(registry, b1, b2, events);
        dispatch::ball_hit(registry, b2, b1, events);
        dispatch::check_death(b1, events);
        dispatch::check_death(b2, events);
        events.ball_clash = true;
    }
}
