//! Zombie Rush headless demo
//!
//! Runs the simulation under a scripted autopilot and logs the run:
//! the bot tracks the nearest zombie, fires when lined up, and backs off
//! when crowded. Useful for eyeballing balance and for exercising the
//! host-facing API end to end without a renderer.
//!
//! Usage: `zombie-rush [seed] [levels.json]`
//!
//! `levels.json` is a JSON array of `{ "zombie_count": n, "spawn_interval": n }`.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use zombie_rush::SimConfig;
use zombie_rush::normalize_angle;
use zombie_rush::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Hard stop so a stalemate cannot run forever
const MAX_TICKS: u32 = 200_000;

/// Start retreating when a zombie gets this close
const RETREAT_RANGE: f32 = 120.0;

/// Fire once the aim error is inside this cone (radians)
const AIM_TOLERANCE: f32 = 0.15;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let config = match args.next() {
        Some(path) => SimConfig::default().with_level_file(&path),
        None => SimConfig::default(),
    };

    log::info!("Zombie Rush autopilot (seed {seed})");
    let mut state = GameState::with_config(seed, config);
    let mut input = TickInput::default();

    for step in 0..MAX_TICKS {
        autopilot(&state, &mut input);
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::LevelComplete { level } => log::info!("Level {level} clear"),
                GameEvent::GameOver { score } => log::info!("Game over, final score {score}"),
                GameEvent::Victory { score } => log::info!("Victory, final score {score}"),
                GameEvent::PauseChanged { paused } => log::debug!("Paused: {paused}"),
            }
        }

        if step.is_multiple_of(60) {
            let hud = state.hud();
            log::debug!(
                "hp {} level {} kills {}/{} score {}",
                hud.hp,
                hud.level,
                hud.kills,
                hud.required_kills,
                hud.score
            );
        }

        if matches!(state.phase, GamePhase::GameOver | GamePhase::Victory) {
            break;
        }
    }

    let hud = state.hud();
    println!(
        "seed {seed}: reached level {} with score {} and {} hp ({:?})",
        hud.level,
        hud.score,
        hud.hp,
        state.phase
    );
}

/// Synthesize one tick of input, the way the idle/demo AI would.
///
/// Goes through the same `TickInput` surface a real host uses: held keys
/// for movement and rotation, one-shots for fire and level advance.
fn autopilot(state: &GameState, input: &mut TickInput) {
    *input = TickInput::default();

    match state.phase {
        GamePhase::LevelComplete => {
            input.next_level = true;
            return;
        }
        GamePhase::Playing => {}
        _ => return,
    }

    let player = &state.player;

    let nearest = state.zombies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player.pos)
            .partial_cmp(&b.pos.distance_squared(player.pos))
            .unwrap_or(Ordering::Equal)
    });

    let Some(zombie) = nearest else {
        // Nothing on the field yet: drift back to center while spawns brew
        steer_toward(
            input,
            player.pos,
            Vec2::new(state.config.width / 2.0, state.config.height / 2.0),
        );
        return;
    };

    let to_zombie = zombie.pos - player.pos;
    let aim_error = normalize_angle(to_zombie.y.atan2(to_zombie.x) - player.angle);
    if aim_error > 0.02 {
        input.rotate_right = true;
    } else if aim_error < -0.02 {
        input.rotate_left = true;
    }
    if aim_error.abs() < AIM_TOLERANCE {
        input.fire = true;
    }

    // Keep range open; the clamp stops us at the wall, which is fine
    if to_zombie.length() < RETREAT_RANGE {
        steer_toward(input, player.pos, player.pos - to_zombie);
    }
}

/// Hold the movement keys that close on `goal`
fn steer_toward(input: &mut TickInput, from: Vec2, goal: Vec2) {
    let off = goal - from;
    if off.x > 2.0 {
        input.move_right = true;
    } else if off.x < -2.0 {
        input.move_left = true;
    }
    if off.y > 2.0 {
        input.move_down = true;
    } else if off.y < -2.0 {
        input.move_up = true;
    }
}
