//! Projectile update and collision resolution
//!
//! Bullets advance along their fixed direction and retire on the first
//! condition that applies: leaving the playfield, striking the live practice
//! target, or striking a zombie. A bullet resolves at most one collision per
//! tick.

use super::state::{Bullet, GameState, Player};
use crate::consts::*;

/// Append one bullet at the player's position along the player's facing
pub fn fire(bullets: &mut Vec<Bullet>, player: &Player) {
    bullets.push(Bullet::fired_by(player));
}

/// Advance every bullet one tick and resolve removals.
///
/// Removal conditions are checked in order: out of bounds (no score
/// effect), target overlap, zombie overlap. The zombie check takes the
/// first overlapping zombie in collection iteration order, not the
/// nearest; with bullet-sized projectiles only one pair matters per tick
/// and deterministic tests rely on this tie-break.
pub fn run(state: &mut GameState) {
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = &mut state.bullets[i];
        bullet.pos += bullet.dir * bullet.speed;
        let pos = bullet.pos;
        let radius = bullet.radius;

        if pos.x < 0.0 || pos.x > state.config.width || pos.y < 0.0 || pos.y > state.config.height {
            state.bullets.remove(i);
            continue;
        }

        if let Some(target) = state.target.as_mut()
            && target.alive
            && target.contains(pos)
        {
            target.health -= TARGET_DAMAGE;
            if target.health <= 0 {
                target.alive = false;
                log::info!("Practice target destroyed");
            }
            state.bullets.remove(i);
            continue;
        }

        let mut hit = false;
        for j in 0..state.zombies.len() {
            let z = &mut state.zombies[j];
            if pos.distance(z.pos) < radius + z.radius {
                z.hp -= BULLET_DAMAGE;
                z.flash_timer = HIT_FLASH_TICKS;
                if z.hp <= 0 {
                    state.zombies.remove(j);
                    state.kills += 1;
                    state.score += KILL_REWARD;
                }
                hit = true;
                break;
            }
        }
        if hit {
            state.bullets.remove(i);
            continue;
        }

        i += 1;
    }
}
