//! Fixed-tick simulation step
//!
//! One call advances the session by exactly one tick. The host owns the
//! clock: it samples its input sources into a `TickInput`, calls `tick`,
//! clears the one-shot fields, and renders from the resulting state.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};
use super::{levels, projectile, zombie};

/// Input commands for a single tick.
///
/// Held fields mirror live key state each tick; one-shot fields are set on
/// the triggering event (key-down, button press) and cleared by the host
/// after the tick consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Fire one bullet. Edge-triggered; there is no fire-rate limit, so
    /// bullets fly as often as the host sends this.
    pub fire: bool,
    /// Toggle pause (only meaningful while a level is active)
    pub pause: bool,
    /// Reset the session from any phase
    pub restart: bool,
    /// Leave the level-complete screen for the next level
    pub next_level: bool,
}

/// Advance the game state by one tick.
///
/// Discrete actions are drained first; a frozen phase (paused, between
/// levels, terminal) performs no entity update, spawn countdown, or
/// collision resolution.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    match state.phase {
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::PauseChanged { paused: false });
            }
            return;
        }
        GamePhase::LevelComplete => {
            if input.next_level {
                levels::advance(state);
            }
            return;
        }
        GamePhase::GameOver | GamePhase::Victory => return,
        GamePhase::Playing => {}
    }

    if input.pause {
        state.phase = GamePhase::Paused;
        state.events.push(GameEvent::PauseChanged { paused: true });
        return;
    }

    state.ticks += 1;

    move_player(state, input);
    if input.fire {
        projectile::fire(&mut state.bullets, &state.player);
    }
    levels::run_spawner(state);
    zombie::run(state);
    projectile::run(state);
    levels::check_complete(state);
}

/// Rotation and translation from held keys.
///
/// Diagonal movement is scaled by 1/√2 so speed is invariant under
/// direction; the position clamp keeps the player's circle fully inside
/// the playfield.
fn move_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;

    if input.rotate_left {
        player.angle -= player.rotation_speed;
    }
    if input.rotate_right {
        player.angle += player.rotation_speed;
    }

    let mut delta = Vec2::ZERO;
    if input.move_up {
        delta.y -= 1.0;
    }
    if input.move_down {
        delta.y += 1.0;
    }
    if input.move_left {
        delta.x -= 1.0;
    }
    if input.move_right {
        delta.x += 1.0;
    }
    if delta.x != 0.0 && delta.y != 0.0 {
        delta *= std::f32::consts::FRAC_1_SQRT_2;
    }

    let moved = player.pos + delta * player.speed;
    player.pos.x = moved.x.clamp(player.radius, state.config.width - player.radius);
    player.pos.y = moved.y.clamp(player.radius, state.config.height - player.radius);
}
