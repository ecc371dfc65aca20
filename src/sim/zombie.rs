//! Zombie AI controller
//!
//! Per tick and per zombie: timers count down, behavior is chosen by
//! distance to the player (chase inside the detection radius, wander
//! outside it), neighbor separation is blended in, and contact damage is
//! applied on a per-zombie cooldown.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState, Zombie};
use super::steering;
use crate::consts::*;

/// Spawn one zombie just beyond the left edge at a randomized height, with
/// a randomized speed within the configured band
pub fn spawn(state: &mut GameState) {
    let y = state
        .rng
        .random_range(SPAWN_MARGIN..state.config.height - SPAWN_MARGIN);
    let speed = state.rng.random_range(ZOMBIE_MIN_SPEED..ZOMBIE_MAX_SPEED);
    state.zombies.push(Zombie {
        pos: Vec2::new(SPAWN_EDGE_OFFSET, y),
        radius: ZOMBIE_RADIUS,
        speed,
        hp: ZOMBIE_MAX_HP,
        max_hp: ZOMBIE_MAX_HP,
        detection_radius: ZOMBIE_DETECTION_RADIUS,
        separation_radius: ZOMBIE_SEPARATION_RADIUS,
        wander_angle: 0.0,
        wander_timer: 0,
        damage_cooldown: 0,
        flash_timer: 0,
        angle: 0.0,
    });
}

/// Advance every zombie by one tick.
///
/// Zombies update sequentially in collection order; separation reads the
/// positions as they stand mid-pass. They are never removed here: leaving
/// the playfield is not a death, only `hp <= 0` is (see projectile
/// resolution).
pub fn run(state: &mut GameState) {
    let GameState {
        zombies,
        player,
        rng,
        config,
        phase,
        events,
        score,
        ..
    } = state;

    for i in 0..zombies.len() {
        {
            let z = &mut zombies[i];
            z.damage_cooldown = z.damage_cooldown.saturating_sub(1);
            z.flash_timer = z.flash_timer.saturating_sub(1);
            z.wander_timer = z.wander_timer.saturating_sub(1);
        }

        // Distance is sampled before movement; contact uses the same value
        let dist_to_player = zombies[i].pos.distance(player.pos);

        let primary = if dist_to_player < zombies[i].detection_radius {
            steering::chase(zombies[i].pos, player.pos)
        } else {
            if zombies[i].wander_timer == 0 {
                zombies[i].wander_angle = rng.random_range(-WANDER_HALF_ARC..WANDER_HALF_ARC);
                zombies[i].wander_timer =
                    rng.random_range(WANDER_MIN_TICKS..WANDER_MIN_TICKS + WANDER_SPREAD_TICKS);
            }
            steering::heading(zombies[i].wander_angle)
        };

        let sep = steering::separation(
            zombies[i].pos,
            zombies
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, other)| other.pos),
            zombies[i].separation_radius,
        );

        let dir = steering::blend(primary, sep);
        let z = &mut zombies[i];
        z.pos += dir * z.speed;
        if dir != Vec2::ZERO {
            z.angle = dir.y.atan2(dir.x);
        }

        // Contact damage, gated by cooldown and the optional spawn grace
        let in_contact = dist_to_player < z.radius + player.radius;
        let grace_holds = config.contact_grace
            && !on_field(z.pos, config.width, config.height);
        if in_contact && z.damage_cooldown == 0 && !grace_holds {
            player.hp -= CONTACT_DAMAGE;
            z.damage_cooldown = CONTACT_COOLDOWN_TICKS;
            if player.hp <= 0 && *phase == GamePhase::Playing {
                *phase = GamePhase::GameOver;
                events.push(GameEvent::GameOver { score: *score });
                log::info!("Game over at score {score}");
            }
        }
    }
}

/// Whether a point lies inside the playfield rectangle
#[inline]
fn on_field(pos: Vec2, width: f32, height: f32) -> bool {
    pos.x >= 0.0 && pos.x <= width && pos.y >= 0.0 && pos.y <= height
}
