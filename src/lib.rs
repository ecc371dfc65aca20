//! Zombie Rush - a top-down wave shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, AI, projectiles, levels)
//! - `config`: Data-driven arena and level-table configuration
//!
//! Rendering, sprite loading, HUD display, and raw input wiring are host
//! concerns; the crate exposes `sim::tick` plus read-only snapshots and a
//! one-shot event queue for a host to build those on.

pub mod config;
pub mod sim;

pub use config::SimConfig;

/// Gameplay constants
///
/// Distances are in pixels, speeds in pixels per tick, timers in ticks,
/// at the nominal 60 Hz simulation step.
pub mod consts {
    /// Playfield dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 24.0;
    pub const PLAYER_SPEED: f32 = 3.0;
    /// Radians per tick while a rotate key is held
    pub const PLAYER_ROTATION_SPEED: f32 = 0.05;
    pub const PLAYER_MAX_HP: i32 = 100;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 6.0;
    pub const BULLET_DAMAGE: i32 = 20;

    /// Zombie defaults
    pub const ZOMBIE_RADIUS: f32 = 20.0;
    /// Spawn speed is drawn uniformly from [ZOMBIE_MIN_SPEED, ZOMBIE_MAX_SPEED)
    pub const ZOMBIE_MIN_SPEED: f32 = 0.8;
    pub const ZOMBIE_MAX_SPEED: f32 = 1.4;
    pub const ZOMBIE_MAX_HP: i32 = 60;
    /// Chase the player inside this range, wander outside it
    pub const ZOMBIE_DETECTION_RADIUS: f32 = 180.0;
    pub const ZOMBIE_SEPARATION_RADIUS: f32 = 30.0;
    /// Separation force multiplier applied before blending with the
    /// primary movement vector
    pub const SEPARATION_WEIGHT: f32 = 2.5;
    pub const CONTACT_DAMAGE: i32 = 10;
    /// Ticks between contact-damage applications per zombie
    pub const CONTACT_COOLDOWN_TICKS: u32 = 50;
    /// Visual hit-flash duration; no gameplay effect
    pub const HIT_FLASH_TICKS: u32 = 8;

    /// Wander headings are drawn from (-WANDER_HALF_ARC, WANDER_HALF_ARC),
    /// biased rightward so fresh spawns drift onto the field
    pub const WANDER_HALF_ARC: f32 = std::f32::consts::FRAC_PI_4;
    /// Wander heading lifetime in ticks: [min, min + spread)
    pub const WANDER_MIN_TICKS: u32 = 60;
    pub const WANDER_SPREAD_TICKS: u32 = 90;

    /// How far beyond the left edge zombies materialize
    pub const SPAWN_EDGE_OFFSET: f32 = -30.0;
    /// Vertical margin kept clear at the top and bottom of the spawn edge
    pub const SPAWN_MARGIN: f32 = 30.0;

    /// Score awarded per zombie kill
    pub const KILL_REWARD: u64 = 10;

    /// Practice target defaults
    pub const TARGET_X: f32 = 450.0;
    pub const TARGET_Y: f32 = 200.0;
    pub const TARGET_SIZE: f32 = 60.0;
    pub const TARGET_MAX_HEALTH: i32 = 100;
    pub const TARGET_DAMAGE: i32 = 20;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
