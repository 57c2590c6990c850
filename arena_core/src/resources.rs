use crate::components::{Projectile, WallSide};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step, seconds
    pub now: f32, // Total elapsed simulation time, seconds
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: crate::config::Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Random number generator (seeded, for deterministic resets)
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Everything that happened during this frame. The presentation layer reads
/// these after `step` to drive HUD redraws; the frame loop reads
/// `match_over` to end the match.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub wall_hits: Vec<(u8, WallSide)>,
    pub ball_clash: bool,
    pub shots_fired: Vec<u8>,
    /// (shooter, target) pairs for projectile impacts
    pub projectile_hits: Vec<(u8, u8)>,
    pub stats_changed: Vec<u8>,
    pub hp_changed: Vec<u8>,
    pub character_changed: Vec<u8>,
    /// Projectiles queued by the weapon-fire step, spawned before the
    /// projectile step runs
    pub spawn_projectiles: Vec<Projectile>,
    /// Winning player, set at most once per frame
    pub match_over: Option<u8>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_hits.clear();
        self.ball_clash = false;
        self.shots_fired.clear();
        self.projectile_hits.clear();
        self.stats_changed.clear();
        self.hp_changed.clear();
        self.character_changed.clear();
        self.spawn_projectiles.clear();
        self.match_over = None;
    }

    /// First declared winner wins; later declarations in the same frame are
    /// ignored.
    pub fn declare_winner(&mut self, player: u8) {
        if self.match_over.is_none() {
            self.match_over = Some(player);
        }
    }

    pub fn mark_stats(&mut self, player: u8) {
        if !self.stats_changed.contains(&player) {
            self.stats_changed.push(player);
        }
    }

    pub fn mark_hp(&mut self, player: u8) {
        if !self.hp_changed.contains(&player) {
            self.hp_changed.push(player);
        }
    }

    pub fn mark_character(&mut self, player: u8) {
        if !self.character_changed.contains(&player) {
            self.character_changed.push(player);
        }
    }
}
