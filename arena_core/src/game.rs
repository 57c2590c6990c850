use glam::Vec2;
use hecs::World;
use log::{info, warn};
use rand::Rng;
use thiserror::Error;

use crate::arena::Arena;
use crate::characters::CharacterRegistry;
use crate::components::{Ball, Projectile};
use crate::config::Config;
use crate::render::{draw_frame, Color, Surface};
use crate::resources::{Events, GameRng, Time};
use crate::{create_ball, step};

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown character id `{0}`")]
    UnknownCharacter(String),
    #[error("character registry is empty")]
    EmptyRegistry,
    #[error("no ball for player {0}")]
    UnknownPlayer(u8),
}

/// Match lifecycle: Idle → Running → (Paused ⇄ Running) → Ended. Ended is
/// terminal until an explicit reset returns to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Idle,
    Running,
    Paused,
    Ended { winner: u8 },
}

/// Snapshot of one player's HUD line
#[derive(Debug, Clone)]
pub struct HudStats {
    pub player: u8,
    pub name: String,
    pub icon: String,
    pub hp: f32, // ceiled, as displayed
    pub max_hp: f32,
    pub speed: f32,
    pub damage: f32,
}

/// Owns the match: the entity world, the frame resources, the character
/// registry and the lifecycle phase. One `tick` runs one frame; `render` is
/// the separate presentation pass.
pub struct Game {
    world: World,
    time: Time,
    arena: Arena,
    config: Config,
    registry: CharacterRegistry,
    events: Events,
    rng: GameRng,
    phase: MatchPhase,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Both balls start on the first registered character (the default
    /// selection), then the match is reset to its Idle starting state.
    pub fn new(config: Config, registry: CharacterRegistry, seed: u64) -> Result<Self, GameError> {
        let default_id = registry
            .ids()
            .first()
            .cloned()
            .ok_or(GameError::EmptyRegistry)?;

        let mut world = World::new();
        create_ball(&mut world, 1, default_id.clone());
        create_ball(&mut world, 2, default_id.clone());

        let arena = Arena::from_config(&config);
        let mut game = Self {
            world,
            time: Time::default(),
            arena,
            config,
            registry,
            events: Events::new(),
            rng: GameRng::new(seed),
            phase: MatchPhase::Idle,
        };
        game.set_character(1, default_id.as_str())?;
        game.set_character(2, default_id.as_str())?;
        game.reset();
        Ok(game)
    }

    /// Assign a character to a player's ball: initialize its stats and
    /// restore full health. An unknown id changes nothing.
    pub fn set_character(&mut self, player: u8, id: &str) -> Result<(), GameError> {
        let character = self
            .registry
            .get(id)
            .ok_or_else(|| GameError::UnknownCharacter(id.to_string()))?;

        let mut found = false;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            if ball.player != player {
                continue;
            }
            ball.character = character.spec().id.clone();
            character.on_init(ball);
            ball.hp = ball.max_hp;
            found = true;
            break;
        }
        if !found {
            return Err(GameError::UnknownPlayer(player));
        }

        self.events.mark_character(player);
        self.events.mark_stats(player);
        self.events.mark_hp(player);
        info!("player {} selected {}", player, character.spec().name);
        Ok(())
    }

    /// Start a fresh match. Only valid from Idle; a finished match must be
    /// reset first.
    pub fn start(&mut self) {
        if self.phase == MatchPhase::Idle {
            self.phase = MatchPhase::Running;
            info!("match started");
        }
    }

    /// Freeze the frame loop without touching any entity state
    pub fn pause(&mut self) {
        if self.phase == MatchPhase::Running {
            self.phase = MatchPhase::Paused;
            info!("match paused");
        }
    }

    /// Continue a paused match from the exact same state
    pub fn resume(&mut self) {
        if self.phase == MatchPhase::Paused {
            self.phase = MatchPhase::Running;
            info!("match resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.phase {
            MatchPhase::Running => self.pause(),
            MatchPhase::Paused => self.resume(),
            _ => {}
        }
    }

    /// Return to Idle: randomize ball positions and velocities, clear
    /// projectiles and cooldowns, and re-run every character's init.
    pub fn reset(&mut self) {
        self.phase = MatchPhase::Idle;
        self.time = Time::new(self.time.dt, 0.0);

        let stale: Vec<hecs::Entity> = self
            .world
            .query_mut::<&Projectile>()
            .into_iter()
            .map(|(e, _)| e)
            .collect();
        for entity in stale {
            let _ = self.world.despawn(entity);
        }

        self.events.clear();

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            let fraction = if ball.player == 1 { 0.25 } else { 0.75 };
            ball.pos = Vec2::new(self.arena.width * fraction, self.arena.height * 0.5);

            let angle = self.rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = self
                .rng
                .0
                .gen_range(self.config.reset_speed_min..self.config.reset_speed_max);
            ball.vel = Vec2::from_angle(angle) * speed;
            ball.current_speed = speed;
            ball.last_shot = None;
            ball.hit_count = 0;

            if let Some(character) = self.registry.get_by_id(&ball.character) {
                character.on_init(ball);
            } else {
                warn!(
                    "character `{}` for player {} is not registered; skipping init",
                    ball.character, ball.player
                );
            }

            self.events.mark_stats(ball.player);
            self.events.mark_hp(ball.player);
        }

        info!("match reset");
    }

    /// Run one frame. Does nothing unless Running; a frame that ends the
    /// match still runs to completion before the phase flips to Ended.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != MatchPhase::Running {
            return;
        }
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.arena,
            &self.config,
            &self.registry,
            &mut self.events,
        );
        if let Some(winner) = self.events.match_over {
            self.phase = MatchPhase::Ended { winner };
            info!("player {winner} wins");
        }
    }

    /// Presentation pass: the frame plus the end-of-match overlay
    pub fn render(&self, surface: &mut dyn Surface) {
        draw_frame(&self.world, &self.registry, surface);

        if let MatchPhase::Ended { winner } = self.phase {
            surface.fill_rect(
                self.arena.center(),
                Vec2::new(self.arena.width, self.arena.height),
                0.0,
                Color::rgba(255, 255, 255, 0.9),
            );
            surface.fill_text(
                &format!("PLAYER {winner} WINS!"),
                self.arena.center(),
                32.0,
                Color::DARK_TEXT,
            );
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn winner(&self) -> Option<u8> {
        match self.phase {
            MatchPhase::Ended { winner } => Some(winner),
            _ => None,
        }
    }

    /// Events recorded by the most recent frame (or selection/reset)
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &CharacterRegistry {
        &self.registry
    }

    /// Snapshot of a player's ball, if it exists
    pub fn ball(&self, player: u8) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .find(|(_e, b)| b.player == player)
            .map(|(_e, b)| b.clone())
    }

    /// Read model for the status display
    pub fn hud_stats(&self, player: u8) -> Option<HudStats> {
        let ball = self.ball(player)?;
        let spec = self.registry.get_by_id(&ball.character)?.spec();
        Some(HudStats {
            player,
            name: spec.name.clone(),
            icon: spec.icon.clone(),
            hp: ball.hp.ceil(),
            max_hp: ball.max_hp,
            speed: ball.speed,
            damage: ball.damage,
        })
    }
}
