//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only; the host owns the clock and calls `tick` per step
//! - Seeded RNG only
//! - In-place mutation by the single simulation step, no concurrent writers
//! - No rendering or platform dependencies

pub mod levels;
pub mod projectile;
pub mod state;
pub mod steering;
pub mod tick;
pub mod zombie;

pub use levels::LevelDef;
pub use state::{
    Bullet, GameEvent, GamePhase, GameState, HudSnapshot, Player, Target, Zombie,
};
pub use tick::{TickInput, tick};
