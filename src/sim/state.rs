//! Game state and core simulation types
//!
//! Entity models are plain data with one typed container per kind; every
//! counter a subsystem needs lives on `GameState` so a session has no hidden
//! statics and two sessions can run side by side.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::levels::{self, LevelDef};
use crate::SimConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level in progress: entities update each tick
    Playing,
    /// Level cleared, simulation frozen until the host sends `next_level`
    LevelComplete,
    /// Simulation frozen by the pause toggle
    Paused,
    /// Player hit points reached zero; terminal until restart
    GameOver,
    /// Every level cleared; terminal until restart
    Victory,
}

/// One-shot notifications for the host's overlay screens.
///
/// Each event is pushed exactly once at the transition that causes it and is
/// consumed via [`GameState::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A level was cleared (1-based level number)
    LevelComplete { level: u32 },
    /// Player died; carries the final score
    GameOver { score: u64 },
    /// All levels cleared; carries the final score
    Victory { score: u64 },
    /// Pause state flipped
    PauseChanged { paused: bool },
}

/// Read-only HUD values, current after every simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudSnapshot {
    /// Player hit points, floored at 0 for display
    pub hp: i32,
    /// 1-based level number
    pub level: u32,
    /// Kills this level
    pub kills: u32,
    /// Kills required to clear this level
    pub required_kills: u32,
    pub score: u64,
}

/// The player avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle in radians; bullets launch along this heading
    pub angle: f32,
    pub speed: f32,
    pub rotation_speed: f32,
    /// Collision and rendering radius
    pub radius: f32,
    pub hp: i32,
    pub max_hp: i32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            speed: PLAYER_SPEED,
            rotation_speed: PLAYER_ROTATION_SPEED,
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        }
    }
}

/// A projectile. Direction is a unit vector fixed at spawn time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub dir: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Bullet {
    /// Spawn at the player's position, heading along the player's facing
    pub fn fired_by(player: &Player) -> Self {
        Self {
            pos: player.pos,
            dir: Vec2::new(player.angle.cos(), player.angle.sin()),
            radius: BULLET_RADIUS,
            speed: BULLET_SPEED,
        }
    }
}

/// A pursuing zombie.
///
/// Zombies are never despawned for leaving the visible playfield; the player
/// must kill every one that spawns, so only `hp <= 0` removes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub pos: Vec2,
    pub radius: f32,
    /// Per-spawn randomized speed within the configured band
    pub speed: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub detection_radius: f32,
    pub separation_radius: f32,
    /// Current wander heading, kept until the timer expires
    pub wander_angle: f32,
    pub wander_timer: u32,
    /// Ticks until this zombie may deal contact damage again
    pub damage_cooldown: u32,
    /// Hit-flash countdown for the renderer; no gameplay effect
    pub flash_timer: u32,
    /// Facing angle for sprite rotation; holds its last value while idle
    pub angle: f32,
}

/// Static practice target: a rectangle that soaks bullets.
///
/// Destroying it does not affect level completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub alive: bool,
}

impl Target {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(TARGET_X, TARGET_Y),
            width: TARGET_SIZE,
            height: TARGET_SIZE,
            health: TARGET_MAX_HEALTH,
            alive: true,
        }
    }

    /// Strict-interior point test; a point on the border does not count
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.pos.x
            && p.x < self.pos.x + self.width
            && p.y > self.pos.y
            && p.y < self.pos.y + self.height
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete session state, owned by the host and passed into `tick`
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    pub phase: GamePhase,
    /// Index into `config.levels`; always in range
    pub level_index: usize,
    /// Zombies still queued to spawn this level
    pub to_spawn: u32,
    /// Kills this level
    pub kills: u32,
    /// Spawn countdown; spawns on reaching the level's interval
    pub spawn_timer: u32,
    pub score: u64,
    /// Simulation tick counter; does not advance while frozen
    pub ticks: u64,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub zombies: Vec<Zombie>,
    pub target: Option<Target>,
    /// Pending one-shot events for the host
    pub events: Vec<GameEvent>,
    /// Single RNG stream for all spawn and wander draws
    pub rng: Pcg32,
    /// Run seed for reproducibility
    pub seed: u64,
}

impl GameState {
    /// Create a session with the default configuration
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, SimConfig::default())
    }

    /// Create a session with an explicit configuration
    pub fn with_config(seed: u64, mut config: SimConfig) -> Self {
        if config.levels.is_empty() {
            log::warn!("Empty level table; using default");
            config.levels = LevelDef::default_table();
        }

        let center = Vec2::new(config.width / 2.0, config.height / 2.0);
        let target = config.target.then(Target::new);
        let mut state = Self {
            config,
            phase: GamePhase::Playing,
            level_index: 0,
            to_spawn: 0,
            kills: 0,
            spawn_timer: 0,
            score: 0,
            ticks: 0,
            player: Player::new(center),
            bullets: Vec::new(),
            zombies: Vec::new(),
            target,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
        };

        levels::start_level(&mut state);
        state
    }

    /// Reset the session in place: fresh player, level 0, zero score.
    /// The RNG is reseeded so a restarted run replays identically.
    pub fn restart(&mut self) {
        log::info!("Restarting session (seed {})", self.seed);
        self.player = Player::new(Vec2::new(self.config.width / 2.0, self.config.height / 2.0));
        self.level_index = 0;
        self.score = 0;
        self.ticks = 0;
        self.target = self.config.target.then(Target::new);
        self.events.clear();
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.phase = GamePhase::Playing;
        levels::start_level(self);
    }

    /// The current level descriptor
    pub fn level(&self) -> &LevelDef {
        &self.config.levels[self.level_index]
    }

    /// HUD values for the host to display after every tick
    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            hp: self.player.hp.max(0),
            level: self.level_index as u32 + 1,
            kills: self.kills,
            required_kills: self.level().zombie_count,
            score: self.score,
        }
    }

    /// Take all pending one-shot events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
