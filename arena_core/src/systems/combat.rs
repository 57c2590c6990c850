use glam::Vec2;
use hecs::World;
use log::debug;

use crate::arena::Arena;
use crate::characters::CharacterRegistry;
use crate::components::{Ball, Projectile};
use crate::config::Config;
use crate::dispatch;
use crate::resources::{Events, Time};

/// Per-frame character update hooks, player order
pub fn update_characters(world: &mut World, registry: &CharacterRegistry, events: &mut Events) {
    let mut balls: Vec<&mut Ball> = world
        .query_mut::<&mut Ball>()
        .into_iter()
        .map(|(_e, b)| b)
        .collect();
    balls.sort_by_key(|b| b.player);

    for ball in balls {
        dispatch::frame_update(registry, ball, events);
    }
}

/// Attempt weapon fire for both balls, each targeting the other. Projectiles
/// are queued on the events and spawned by [`spawn_projectiles`].
pub fn fire_weapons(
    world: &mut World,
    time: &Time,
    registry: &CharacterRegistry,
    events: &mut Events,
) {
    let mut query = world.query_mut::<&mut Ball>().into_iter();
    let Some((_, first)) = query.next() else {
        return;
    };
    let Some((_, second)) = query.next() else {
        return;
    };
    let (b1, b2) = if first.player <= second.player {
        (first, second)
    } else {
        (second, first)
    };

    let target2 = b2.pos;
    let target1 = b1.pos;
    try_fire(b1, target2, time, registry, events);
    try_fire(b2, target1, time, registry, events);
}

fn try_fire(
    shooter: &mut Ball,
    target: Vec2,
    time: &Time,
    registry: &CharacterRegistry,
    events: &mut Events,
) {
    let Some(character) = registry.get_by_id(&shooter.character) else {
        return;
    };
    let Some(weapon) = character.spec().weapon.as_ref() else {
        return; // melee-only character
    };
    if !shooter.can_fire(time.now, weapon.fire_rate) {
        return;
    }

    let delta = target - shooter.pos;
    let distance = delta.length();
    // Coincident centers: no direction to fire in, try again next frame
    if distance <= f32::EPSILON {
        return;
    }

    shooter.last_shot = Some(time.now);
    events.spawn_projectiles.push(Projectile {
        pos: shooter.pos,
        vel: delta / distance * weapon.projectile_speed,
        damage: shooter.weapon_damage,
        size: weapon.projectile_size,
        owner: shooter.player,
        sprite: weapon.sprite,
        color: character.spec().border_color,
    });
    events.shots_fired.push(shooter.player);
    debug!(
        "player {} fired (damage {})",
        shooter.player, shooter.weapon_damage
    );
}

/// Spawn the projectiles queued by the weapon-fire step
pub fn spawn_projectiles(world: &mut World, events: &mut Events) {
    for proj in events.spawn_projectiles.drain(..) {
        world.spawn((proj,));
    }
}

/// Advance every live projectile, cull the out-of-bounds ones, and resolve
/// hits. Balls are tested in player order and the projectile's owner is
/// skipped; the first ball in range is struck (tie-break policy) and the
/// projectile is removed, so at most one ball is struck per projectile.
pub fn step_projectiles(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    registry: &CharacterRegistry,
    events: &mut Events,
) {
    // Advance (projectiles ignore gravity) and snapshot
    let mut live: Vec<(hecs::Entity, Projectile)> = Vec::new();
    for (entity, proj) in world.query_mut::<&mut Projectile>() {
        proj.pos += proj.vel;
        live.push((entity, *proj));
    }

    let mut despawn = Vec::new();
    for (entity, proj) in live {
        if !arena.contains_with_margin(proj.pos, config.oob_margin) {
            despawn.push(entity);
            continue;
        }

        let mut balls: Vec<&mut Ball> = world
            .query_mut::<&mut Ball>()
            .into_iter()
            .map(|(_e, b)| b)
            .collect();
        balls.sort_by_key(|b| b.player);

        let struck = balls.iter().position(|b| {
            b.player != proj.owner && b.pos.distance(proj.pos) < b.radius + proj.size * 0.5
        });
        let Some(target_idx) = struck else {
            continue;
        };

        let target = &mut *balls[target_idx];
        target.apply_damage(proj.damage);
        target.vel += proj.vel * config.knockback_factor;
        let target_player = target.player;
        events.mark_hp(target_player);
        dispatch::check_death(target, events);

        if let Some(owner_idx) = balls.iter().position(|b| b.player == proj.owner) {
            dispatch::projectile_hit(registry, &mut *balls[owner_idx], events);
        }

        events.projectile_hits.push((proj.owner, target_player));
        debug!(
            "projectile from player {} struck player {} for {}",
            proj.owner, target_player, proj.damage
        );
        despawn.push(entity);
    }

    for entity in despawn {
        let _ = world.despawn(entity);
    }
}
