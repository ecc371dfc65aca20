//! Level and wave direction
//!
//! An ordered, fixed table of descriptors drives spawn pacing and kill
//! counting. The session index advances monotonically; clearing the last
//! descriptor wins the run.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use super::zombie;

/// One stage of difficulty progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Zombies that spawn, and must all be killed, this level
    pub zombie_count: u32,
    /// Ticks between spawns
    pub spawn_interval: u32,
}

impl LevelDef {
    /// The built-in level table
    pub fn default_table() -> Vec<LevelDef> {
        vec![
            LevelDef {
                zombie_count: 3,
                spawn_interval: 180,
            },
            LevelDef {
                zombie_count: 6,
                spawn_interval: 150,
            },
        ]
    }
}

/// Reset per-level counters from the current descriptor and clear the field.
///
/// The spawn countdown is primed to the full interval so the first zombie
/// enters on the first rollover instead of one interval late. Player
/// position and hit points carry over; only a restart resets those.
pub fn start_level(state: &mut GameState) {
    let level = *state.level();
    state.to_spawn = level.zombie_count;
    state.kills = 0;
    state.spawn_timer = level.spawn_interval;
    state.zombies.clear();
    state.bullets.clear();
    log::info!(
        "Level {}: {} zombies, one every {} ticks",
        state.level_index + 1,
        level.zombie_count,
        level.spawn_interval
    );
}

/// Trickle spawns while zombies remain queued for this level
pub fn run_spawner(state: &mut GameState) {
    if state.to_spawn == 0 {
        return;
    }
    state.spawn_timer += 1;
    if state.spawn_timer >= state.level().spawn_interval {
        state.spawn_timer = 0;
        zombie::spawn(state);
        state.to_spawn -= 1;
    }
}

/// Completion predicate, evaluated once per tick after AI and projectile
/// updates: nothing left to spawn, nothing left alive, and the kill count
/// matches the descriptor. Freezes the simulation until `next_level`.
pub fn check_complete(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    if state.to_spawn == 0
        && state.zombies.is_empty()
        && state.kills == state.level().zombie_count
    {
        state.phase = GamePhase::LevelComplete;
        let level = state.level_index as u32 + 1;
        state.events.push(GameEvent::LevelComplete { level });
        log::info!("Level {level} complete, score {}", state.score);
    }
}

/// Move on from a cleared level: the next descriptor, or victory past the
/// last one
pub fn advance(state: &mut GameState) {
    if state.level_index + 1 >= state.config.levels.len() {
        state.phase = GamePhase::Victory;
        state.events.push(GameEvent::Victory { score: state.score });
        log::info!("All levels clear, final score {}", state.score);
    } else {
        state.level_index += 1;
        state.phase = GamePhase::Playing;
        start_level(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_zombie_spawns_on_the_first_rollover() {
        let mut state = GameState::new(1);
        assert_eq!(state.spawn_timer, state.level().spawn_interval);

        run_spawner(&mut state);

        assert_eq!(state.zombies.len(), 1);
        assert_eq!(state.to_spawn, state.level().zombie_count - 1);
        assert_eq!(state.spawn_timer, 0);
    }

    #[test]
    fn later_spawns_wait_a_full_interval() {
        let mut state = GameState::new(2);
        run_spawner(&mut state);
        let interval = state.level().spawn_interval;

        for _ in 0..interval - 1 {
            run_spawner(&mut state);
        }
        assert_eq!(state.zombies.len(), 1);

        run_spawner(&mut state);
        assert_eq!(state.zombies.len(), 2);
    }

    #[test]
    fn spawner_idles_once_the_queue_is_empty() {
        let mut state = GameState::new(3);
        let count = state.level().zombie_count;
        for _ in 0..count * state.level().spawn_interval + 10 {
            run_spawner(&mut state);
        }
        assert_eq!(state.zombies.len() as u32, count);
        assert_eq!(state.to_spawn, 0);
        assert_eq!(state.spawn_timer, 0, "countdown stops with nothing queued");
    }

    #[test]
    fn completion_requires_spawned_cleared_and_counted() {
        let mut state = GameState::new(4);
        let required = state.level().zombie_count;

        // Queue drained but one zombie still alive
        state.to_spawn = 0;
        state.kills = required - 1;
        zombie::spawn(&mut state);
        check_complete(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);

        // Field clear but kill count short (practice-target deaths don't count)
        state.zombies.clear();
        check_complete(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);

        state.kills = required;
        check_complete(&mut state);
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.events, vec![GameEvent::LevelComplete { level: 1 }]);
    }

    #[test]
    fn advance_steps_through_the_table_then_wins() {
        let mut state = GameState::new(5);
        state.phase = GamePhase::LevelComplete;
        state.score = 30;

        advance(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level_index, 1);
        assert_eq!(state.to_spawn, state.level().zombie_count);
        assert_eq!(state.kills, 0);

        state.phase = GamePhase::LevelComplete;
        state.score = 90;
        advance(&mut state);
        assert_eq!(state.phase, GamePhase::Victory);
        assert!(state.events.contains(&GameEvent::Victory { score: 90 }));
        assert_eq!(state.level_index, 1, "index stays in range");
    }
}
